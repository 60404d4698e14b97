pub mod logging;
pub mod platform;
pub mod rendering;
