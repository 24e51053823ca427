pub mod camera;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod feedback;
pub mod frame;
pub mod hover;
pub mod math;
pub mod panel;
pub mod pickable;
pub mod picker;
pub mod showcase;
pub mod voice;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use controller::*;
pub use error::*;
pub use feedback::*;
pub use hover::*;
pub use panel::*;
pub use pickable::*;
pub use picker::*;
pub use showcase::*;
pub use voice::*;
