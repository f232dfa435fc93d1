#![warn(clippy::pedantic)]
#![allow(clippy::similar_names)]

pub mod cube;
pub mod moves;
pub mod normalizer;
pub mod notation;
pub mod permutation;
pub mod rotation;

pub use cube::{Color, Cube, FaceGrid, Facelet};
pub use moves::{Move, RotationKind, Side};
pub use notation::{NotationError, format_sequence, parse_sequence};
