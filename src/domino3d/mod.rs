pub mod hit_test;
pub mod placement;
pub mod systems;
pub mod types;

pub use hit_test::*;
pub use placement::*;
pub use systems::*;
pub use types::*;
