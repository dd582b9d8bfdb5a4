pub mod config;
pub use config::*;

pub mod fonts;
pub use fonts::*;

pub mod palette;
pub use palette::*;
