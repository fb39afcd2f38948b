pub mod figure;
pub mod render;
