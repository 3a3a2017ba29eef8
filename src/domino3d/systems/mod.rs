//! Bevy systems gluing the placement session to the scene.

pub mod camera;
pub mod dominoes;
pub mod input;
pub mod planes;
pub mod setup;

pub use camera::*;
pub use dominoes::*;
pub use input::*;
pub use planes::*;
pub use setup::*;
