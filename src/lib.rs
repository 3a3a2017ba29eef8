//! Domino Run - a tabletop domino placement and toppling sandbox.
//!
//! The windowed binary lives in `main.rs`; everything reusable (the
//! placement session, plane tracking, hit-testing, and the Bevy
//! systems gluing them to the scene) is under [`domino3d`].

pub mod domino3d;
