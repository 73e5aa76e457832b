pub mod interactive;
pub mod ports;
pub mod render_file;
