pub mod algorithm;
pub mod classic;
pub mod factory;
pub mod kinds;
pub mod tuned;
