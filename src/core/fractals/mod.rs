pub mod quadratic_family;
