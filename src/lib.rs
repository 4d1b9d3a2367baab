pub mod apps;
pub mod color;
pub mod config;
pub mod math;
pub mod render;
