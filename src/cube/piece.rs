use log::trace;

use crate::cube::{turn::*, *};

/// Overwrite the slot holding `old` with `new`.
/// The faces of a piece are distinct, so at most one slot can match.
fn replace_face(faces: &mut [Face], old: Face, new: Face) {
	if let Some(slot) = faces.iter_mut().find(|f| **f == old) {
		*slot = new;
	}
}

// ===== Edge Piece =====

/// An edge piece, tracked by the two faces it touches
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Edge {
	colors: [Color; 2],
	/// `orientation[i]` is the face `colors[i]` points to
	orientation: [Face; 2],
}

impl Edge {
	/// Create an edge from its two colors and the faces they point to, e.g. "UB".
	pub fn new(colors: &[Color], orientation: &str) -> Result<Self, CubeError> {
		let colors: [Color; 2] = colors.try_into().map_err(|_| CubeError::Shape {
			what: "edge colors",
			expected: 2,
			found: colors.len(),
		})?;
		let orientation = parse_faces(orientation)?;

		Ok(Self {
			colors,
			orientation,
		})
	}

	/// The edge belonging into the given slot, in its solved orientation.
	pub const fn solved(slot: EdgeSlot) -> Self {
		let [a, b] = slot.faces();
		Self {
			colors: [a.solved_color(), b.solved_color()],
			orientation: [a, b],
		}
	}

	pub const fn orientation(&self) -> [Face; 2] {
		self.orientation
	}
}

impl Piece for Edge {
	fn apply_turn(&mut self, turn: Turn) {
		let [first, second] = self.orientation;

		// The face being turned carries the piece along,
		// only the other face gets relabeled.
		let old = if first == turn.face {
			second
		} else if second == turn.face {
			first
		} else {
			return;
		};
		let new = turn.effect()[old as usize];
		replace_face(&mut self.orientation, old, new);

		trace!("edge {}{}: {} -> {}", first, second, turn, self);
	}

	fn faces(&self) -> &[Face] {
		&self.orientation
	}

	fn colors(&self) -> &[Color] {
		&self.colors
	}
}

impl std::fmt::Display for Edge {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}", format_faces(&self.orientation))
	}
}

// ===== Corner Piece =====

/// A corner piece, tracked by the three faces it touches
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Corner {
	colors: [Color; 3],
	/// `contacts[i]` is the face `colors[i]` points to
	contacts: [Face; 3],
}

impl Corner {
	/// Create a corner from its three colors and the faces they point to, e.g. "URF".
	pub fn new(colors: &[Color], contacts: &str) -> Result<Self, CubeError> {
		let colors = Self::check_colors(colors)?;
		let contacts = parse_faces(contacts)?;

		Ok(Self { colors, contacts })
	}

	/// Create a corner sitting solved, every color on the face of its center.
	pub fn from_colors(colors: &[Color]) -> Result<Self, CubeError> {
		let colors = Self::check_colors(colors)?;
		let contacts = colors.map(Color::home_face);
		check_contacts(&contacts)?;

		Ok(Self { colors, contacts })
	}

	fn check_colors(colors: &[Color]) -> Result<[Color; 3], CubeError> {
		colors.try_into().map_err(|_| CubeError::Shape {
			what: "corner colors",
			expected: 3,
			found: colors.len(),
		})
	}

	/// The corner belonging into the given slot, in its solved orientation.
	pub const fn solved(slot: CornerSlot) -> Self {
		let [a, b, c] = slot.faces();
		Self {
			colors: [a.solved_color(), b.solved_color(), c.solved_color()],
			contacts: [a, b, c],
		}
	}

	pub const fn contacts(&self) -> [Face; 3] {
		self.contacts
	}
}

impl Piece for Corner {
	fn apply_turn(&mut self, turn: Turn) {
		if !self.contacts.contains(&turn.face) {
			return;
		}

		// Relabel from the faces before the turn, so two relabels never chain.
		let before = self.contacts;
		let effect = turn.effect();
		self.contacts = before.map(|f| if f == turn.face { f } else { effect[f as usize] });

		trace!("corner {}: {} -> {}", format_faces(&before), turn, self);
	}

	fn faces(&self) -> &[Face] {
		&self.contacts
	}

	fn colors(&self) -> &[Color] {
		&self.colors
	}
}

impl std::fmt::Display for Corner {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}", format_faces(&self.contacts))
	}
}
