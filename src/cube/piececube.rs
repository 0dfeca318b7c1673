use log::debug;
use rayon::prelude::*;

use crate::cube::{piece::*, turn::*, *};

/// Corner in the reference frame of a solved cube: the white side of the white-red-green corner.
pub const DEFAULT_CORNER_ANCHOR: [Face; 3] = [Face::Right, Face::Front, Face::Up];
/// Edge in the reference frame of a solved cube: the white side of the white-red edge.
pub const DEFAULT_EDGE_ANCHOR: [Face; 2] = [Face::Right, Face::Up];

#[rustfmt::skip]
const SOLVED_CORNERS: [Corner; NUM_CORNERS] = [
	Corner::solved(CornerSlot::URF), Corner::solved(CornerSlot::UBR),
	Corner::solved(CornerSlot::DLF), Corner::solved(CornerSlot::DFR),
	Corner::solved(CornerSlot::ULB), Corner::solved(CornerSlot::UFL),
	Corner::solved(CornerSlot::DRB), Corner::solved(CornerSlot::DBL),
];

#[rustfmt::skip]
const SOLVED_EDGES: [Edge; NUM_EDGES] = [
	Edge::solved(EdgeSlot::UF), Edge::solved(EdgeSlot::UR),
	Edge::solved(EdgeSlot::UB), Edge::solved(EdgeSlot::UL),
	Edge::solved(EdgeSlot::DF), Edge::solved(EdgeSlot::DR),
	Edge::solved(EdgeSlot::DB), Edge::solved(EdgeSlot::DL),
	Edge::solved(EdgeSlot::FR), Edge::solved(EdgeSlot::BR),
	Edge::solved(EdgeSlot::BL), Edge::solved(EdgeSlot::FL),
];

/// A cube made out of its 8 corner and 12 edge pieces.
///
/// The anchors fix which corner and edge define the orientation of the
/// whole cube. Turning never touches them.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Cube {
	corners: [Corner; NUM_CORNERS],
	edges: [Edge; NUM_EDGES],
	corner_anchor: [Face; 3],
	edge_anchor: [Face; 2],
}

impl Default for Cube {
	/// Creates a *solved* cube!
	fn default() -> Self {
		Self::solved()
	}
}

impl Cube {
	/// Assemble a cube out of exactly 8 corners and 12 edges.
	pub fn new(corners: Vec<Corner>, edges: Vec<Edge>) -> Result<Self, CubeError> {
		let corners: [Corner; NUM_CORNERS] = corners.try_into().map_err(|c: Vec<Corner>| CubeError::Shape {
			what: "corners",
			expected: NUM_CORNERS,
			found: c.len(),
		})?;
		let edges: [Edge; NUM_EDGES] = edges.try_into().map_err(|e: Vec<Edge>| CubeError::Shape {
			what: "edges",
			expected: NUM_EDGES,
			found: e.len(),
		})?;
		debug!("assembled cube out of {} corners and {} edges", NUM_CORNERS, NUM_EDGES);

		Ok(Self {
			corners,
			edges,
			corner_anchor: DEFAULT_CORNER_ANCHOR,
			edge_anchor: DEFAULT_EDGE_ANCHOR,
		})
	}

	pub const fn solved() -> Self {
		Self {
			corners: SOLVED_CORNERS,
			edges: SOLVED_EDGES,
			corner_anchor: DEFAULT_CORNER_ANCHOR,
			edge_anchor: DEFAULT_EDGE_ANCHOR,
		}
	}

	/// Replace the anchors, given as face codes like "RFU" and "RU".
	pub fn with_anchors(mut self, corner_anchor: &str, edge_anchor: &str) -> Result<Self, CubeError> {
		self.corner_anchor = parse_faces(corner_anchor)?;
		self.edge_anchor = parse_faces(edge_anchor)?;
		Ok(self)
	}

	pub fn corners(&self) -> &[Corner] {
		&self.corners
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	pub const fn corner_anchor(&self) -> [Face; 3] {
		self.corner_anchor
	}

	pub const fn edge_anchor(&self) -> [Face; 2] {
		self.edge_anchor
	}

	/// Apply the turns to every piece of the cube.
	pub fn turn(&mut self, turns: &[Turn]) {
		debug!("turning cube by {}", format_move(turns));

		// Pieces never look at each other, so they can be turned independently.
		rayon::join(
			|| self.corners.par_iter_mut().for_each(|c| c.turn(turns)),
			|| self.edges.par_iter_mut().for_each(|e| e.turn(turns)),
		);
	}

	pub fn apply_turn(&mut self, turn: Turn) {
		self.turn(&[turn]);
	}

	/// Parse the move string and apply it.
	/// Nothing is turned if the string contains an invalid token.
	pub fn turn_str(&mut self, mv: &str) -> Result<(), CubeError> {
		let turns = parse_move(mv)?;
		self.turn(&turns);
		Ok(())
	}

	/// Whether every piece sits on the faces of its colors.
	pub fn is_solved(&self) -> bool {
		self.corners.iter().all(|c| c.is_home()) && self.edges.iter().all(|e| e.is_home())
	}

	/// The corner currently sitting in the given slot.
	pub fn corner_in(&self, slot: CornerSlot) -> Option<&Corner> {
		let faces = slot.faces();
		self.corners
			.iter()
			.find(|c| faces.iter().all(|f| c.faces().contains(f)))
	}

	/// The edge currently sitting in the given slot.
	pub fn edge_in(&self, slot: EdgeSlot) -> Option<&Edge> {
		let faces = slot.faces();
		self.edges
			.iter()
			.find(|e| faces.iter().all(|f| e.faces().contains(f)))
	}
}

impl std::fmt::Display for Cube {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		for corner in self.corners.iter() {
			write!(f, "{} ", corner)?;
		}
		write!(f, "|")?;
		for edge in self.edges.iter() {
			write!(f, " {}", edge)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rand::{rngs::StdRng, SeedableRng};
	use strum::IntoEnumIterator;

	#[test]
	fn solved_cube() {
		let cube = Cube::solved();
		assert!(cube.is_solved());
		assert_eq!(cube.corners().len(), NUM_CORNERS);
		assert_eq!(cube.edges().len(), NUM_EDGES);
		assert_eq!(format_faces(&cube.corner_anchor()), "RFU");
		assert_eq!(format_faces(&cube.edge_anchor()), "RU");
		assert_eq!(cube, Cube::default());

		for slot in CornerSlot::iter() {
			assert_eq!(cube.corner_in(slot), Some(&Corner::solved(slot)));
		}
		for slot in EdgeSlot::iter() {
			assert_eq!(cube.edge_in(slot), Some(&Edge::solved(slot)));
		}
	}

	#[test]
	fn wrong_piece_counts() {
		let corners = Cube::solved().corners().to_vec();
		let edges = Cube::solved().edges().to_vec();

		assert_eq!(
			Cube::new(corners[..7].to_vec(), edges.clone()),
			Err(CubeError::Shape {
				what: "corners",
				expected: 8,
				found: 7
			})
		);

		let mut more = edges.clone();
		more.push(edges[0]);
		assert_eq!(
			Cube::new(corners.clone(), more),
			Err(CubeError::Shape {
				what: "edges",
				expected: 12,
				found: 13
			})
		);
		assert_eq!(
			Cube::new(corners.clone(), edges[1..].to_vec()),
			Err(CubeError::Shape {
				what: "edges",
				expected: 12,
				found: 11
			})
		);

		assert_eq!(Cube::new(corners, edges), Ok(Cube::solved()));
	}

	#[test]
	fn anchors() {
		let cube = Cube::solved().with_anchors("UFL", "UF").unwrap();
		assert_eq!(cube.corner_anchor(), [Face::Up, Face::Front, Face::Left]);
		assert_eq!(cube.edge_anchor(), [Face::Up, Face::Front]);

		assert_eq!(
			Cube::solved().with_anchors("UFD", "UF"),
			Err(CubeError::InvalidOrientation("UFD".into()))
		);

		// Turning never changes the anchors
		let mut turned = cube.clone();
		turned.turn_str("RUFLDB").unwrap();
		assert_eq!(turned.corner_anchor(), cube.corner_anchor());
		assert_eq!(turned.edge_anchor(), cube.edge_anchor());
	}

	#[test]
	/// Check that all basic turnings result to neutral after 4 turns
	fn four_turns_are_neutral() {
		for turn in ALL_TURNS {
			let mut cube = Cube::solved();
			cube.apply_turn(turn);
			assert!(!cube.is_solved(), "{turn} should change the cube");

			for _ in 0..3 {
				cube.apply_turn(turn);
			}
			assert_eq!(cube, Cube::solved(), "{turn} four times");
		}
	}

	#[test]
	fn pieces_move_between_slots() {
		let mut cube = Cube::solved();
		cube.turn_str("R").unwrap();

		let edge = cube.edge_in(EdgeSlot::UR).unwrap();
		assert_eq!(edge.colors(), &[Color::Green, Color::Red]);
		assert_eq!(edge.orientation(), [Face::Up, Face::Right]);

		let corner = cube.corner_in(CornerSlot::UBR).unwrap();
		assert_eq!(corner.colors(), Corner::solved(CornerSlot::URF).colors());
	}

	#[test]
	fn broadcast_matches_single_pieces() {
		let mut rng = StdRng::seed_from_u64(7);
		let turns = random_move_with(&mut rng, 60);

		let mut cube = Cube::solved();
		cube.turn(&turns);

		for (piece, start) in cube.corners().iter().zip(SOLVED_CORNERS) {
			assert_eq!(*piece, start.turned(&turns));
		}
		for (piece, start) in cube.edges().iter().zip(SOLVED_EDGES) {
			assert_eq!(*piece, start.turned(&turns));
		}

		// Every slot is still taken by exactly one piece
		for slot in CornerSlot::iter() {
			assert!(cube.corner_in(slot).is_some());
		}
		for slot in EdgeSlot::iter() {
			assert!(cube.edge_in(slot).is_some());
		}

		cube.turn(&invert_move(&turns));
		assert!(cube.is_solved());
	}

	#[test]
	fn invalid_move_leaves_cube() {
		let mut cube = Cube::solved();
		assert_eq!(
			cube.turn_str("RUr2"),
			Err(CubeError::InvalidMoveToken {
				token: '2',
				position: 3
			})
		);
		assert!(cube.is_solved());
	}

	#[test]
	fn display() {
		assert_eq!(
			Cube::solved().to_string(),
			"URF UBR DLF DFR ULB UFL DRB DBL | UF UR UB UL DF DR DB DL FR BR BL FL"
		);
	}
}
