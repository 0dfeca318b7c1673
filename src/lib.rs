//! This is a simple example how to turn pieces of the cube.
//!
//! ```
//! use cubepieces::prelude::*;
//!
//! let mut edge = Edge::new(&[Color::White, Color::Red], "UB").unwrap();
//! edge.turn_str("FRuruRUrfRUrurFRf").unwrap();
//! assert_eq!(edge.to_string(), "UL");
//!
//! let mut cube = Cube::solved();
//! let turns = parse_move("RUru").unwrap();
//! cube.turn(&turns);
//! assert!(!cube.is_solved());
//!
//! cube.turn(&invert_move(&turns));
//! assert!(cube.is_solved());
//! ```
//!
//! Uppercase tokens turn a face clockwise, lowercase tokens counter-clockwise.

pub mod cube;

pub mod prelude {
	pub use crate::cube::{effect::*, piece::*, piececube::*, turn::*, *};
}
