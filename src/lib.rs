pub mod app;
pub mod chart;
pub mod error;
pub mod panel;
pub mod scenes;
pub mod shade;
pub mod solar;
pub mod units;
pub mod util;
pub mod vars;
