pub mod assets;
pub use assets::*;

pub mod canvas;
pub use canvas::*;

pub mod cardart;
pub use cardart::*;

pub mod chips;
pub use chips::*;

pub mod compositor;
pub use compositor::*;

pub mod error;
pub use error::*;

pub mod seats;
pub use seats::*;

pub mod surface;
pub use surface::*;
