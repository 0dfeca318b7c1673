pub mod effect;
pub mod piece;
pub mod piececube;
pub mod turn;

use strum::EnumCount;
use turn::*;

/// The number of faces of a cube
pub const NUM_FACES: usize = Face::COUNT;

/// The faces of the cube. Every piece is described by the faces it touches.
#[derive(
	Clone, Copy, PartialEq, Eq, Hash, Debug, strum::EnumIter, strum::EnumCount, strum::FromRepr,
)]
#[repr(u8)]
pub enum Face {
	// It must only contain unit fields!
	Up,
	Down,
	Back,
	Front,
	Left,
	Right,
}

impl Face {
	/// The single-character code of the face.
	pub const fn code(self) -> char {
		match self {
			Face::Up => 'U',
			Face::Down => 'D',
			Face::Back => 'B',
			Face::Front => 'F',
			Face::Left => 'L',
			Face::Right => 'R',
		}
	}

	/// The face on the other side of the cube.
	pub const fn opposite(self) -> Self {
		match self {
			Face::Up => Face::Down,
			Face::Down => Face::Up,
			Face::Back => Face::Front,
			Face::Front => Face::Back,
			Face::Left => Face::Right,
			Face::Right => Face::Left,
		}
	}

	/// Whether a single piece can touch both faces at once.
	pub fn is_adjacent(self, other: Face) -> bool {
		self != other && self.opposite() != other
	}

	/// The color of this face's center in the standard color scheme.
	pub const fn solved_color(self) -> Color {
		match self {
			Face::Up => Color::White,
			Face::Down => Color::Yellow,
			Face::Back => Color::Blue,
			Face::Front => Color::Green,
			Face::Left => Color::Orange,
			Face::Right => Color::Red,
		}
	}
}

impl TryFrom<char> for Face {
	type Error = CubeError;

	fn try_from(c: char) -> Result<Self, Self::Error> {
		let face = match c {
			'U' => Face::Up,
			'D' => Face::Down,
			'B' => Face::Back,
			'F' => Face::Front,
			'L' => Face::Left,
			'R' => Face::Right,
			_ => return Err(CubeError::InvalidFace(c)),
		};
		Ok(face)
	}
}

impl std::fmt::Display for Face {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}", self.code())
	}
}

/// Sticker colors.
///
/// Opposite colors in the standard scheme:
/// blue <> green, red <> orange, yellow <> white
#[derive(
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	Debug,
	strum::EnumIter,
	strum::EnumCount,
	strum::EnumString,
	strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum Color {
	White,
	Yellow,
	Green,
	Blue,
	Red,
	Orange,
}

impl Color {
	pub const fn opposite(self) -> Self {
		match self {
			Color::White => Color::Yellow,
			Color::Yellow => Color::White,
			Color::Green => Color::Blue,
			Color::Blue => Color::Green,
			Color::Red => Color::Orange,
			Color::Orange => Color::Red,
		}
	}

	/// The face whose center has this color in the standard scheme.
	pub const fn home_face(self) -> Face {
		match self {
			Color::White => Face::Up,
			Color::Yellow => Face::Down,
			Color::Green => Face::Front,
			Color::Blue => Face::Back,
			Color::Red => Face::Right,
			Color::Orange => Face::Left,
		}
	}

	/// Parse a lowercase color name like "white".
	pub fn from_name(name: &str) -> Result<Self, CubeError> {
		name.trim()
			.parse()
			.map_err(|_| CubeError::InvalidColor(name.to_string()))
	}
}

// ===== Slots =====

/// All the different position names for an edge
#[derive(Clone, Copy, Default, PartialEq, Eq, strum::EnumIter, strum::EnumCount, strum::Display, Debug)]
#[repr(usize)]
#[rustfmt::skip]
pub enum EdgeSlot {
	#[default]
	UF, UR, UB, UL, // up edges
	DF, DR, DB, DL, // down edges
	FR, BR, BL, FL, // ud-slice (middle edges)
}

pub const NUM_EDGES: usize = EdgeSlot::COUNT;

impl EdgeSlot {
	/// The faces of the slot, in the order of its name.
	pub const fn faces(self) -> [Face; 2] {
		use Face::*;
		match self {
			EdgeSlot::UF => [Up, Front],
			EdgeSlot::UR => [Up, Right],
			EdgeSlot::UB => [Up, Back],
			EdgeSlot::UL => [Up, Left],

			EdgeSlot::DF => [Down, Front],
			EdgeSlot::DR => [Down, Right],
			EdgeSlot::DB => [Down, Back],
			EdgeSlot::DL => [Down, Left],

			EdgeSlot::FR => [Front, Right],
			EdgeSlot::BR => [Back, Right],
			EdgeSlot::BL => [Back, Left],
			EdgeSlot::FL => [Front, Left],
		}
	}
}

/// All the different position names for a corner
/// Note that the name is carefully sorted!
#[derive(
	Clone, Copy, Default, PartialEq, Eq, Debug, strum::EnumIter, strum::EnumString, strum::EnumCount, strum::Display
)]
#[allow(clippy::upper_case_acronyms)]
#[repr(usize)]
#[rustfmt::skip]
pub enum CornerSlot {
	#[default]
	URF, UBR, DLF, DFR, // DON'T CHANGE THE ORDER OF THE LETTERS!
	ULB, UFL, DRB, DBL,
}

pub const NUM_CORNERS: usize = CornerSlot::COUNT;

impl CornerSlot {
	/// The faces of the slot, clockwise around the corner.
	pub const fn faces(self) -> [Face; 3] {
		use Face::*;
		match self {
			CornerSlot::URF => [Up, Right, Front],
			CornerSlot::UBR => [Up, Back, Right],
			CornerSlot::DLF => [Down, Left, Front],
			CornerSlot::DFR => [Down, Front, Right],

			CornerSlot::ULB => [Up, Left, Back],
			CornerSlot::UFL => [Up, Front, Left],
			CornerSlot::DRB => [Down, Right, Back],
			CornerSlot::DBL => [Down, Back, Left],
		}
	}
}

// ===== Errors =====

/// Everything that can go wrong while building pieces or reading moves.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
	#[error("Expected {expected} {what}, found {found}")]
	Shape {
		what: &'static str,
		expected: usize,
		found: usize,
	},
	#[error("Invalid move token '{token}' at position {position}")]
	InvalidMoveToken { token: char, position: usize },
	#[error("'{0}' is not a face (expected one of U, D, B, F, L, R)")]
	InvalidFace(char),
	#[error("Unknown color \"{0}\"")]
	InvalidColor(String),
	#[error("A single piece can't touch the faces {0}")]
	InvalidOrientation(String),
}

/// Check that a list has exactly the expected length.
pub(crate) fn check_shape<T>(what: &'static str, items: &[T], expected: usize) -> Result<(), CubeError> {
	if items.len() != expected {
		return Err(CubeError::Shape {
			what,
			expected,
			found: items.len(),
		});
	}
	Ok(())
}

/// Render a list of faces as its codes, e.g. "URF".
pub fn format_faces(faces: &[Face]) -> String {
	faces.iter().map(|f| f.code()).collect()
}

/// Check that all the faces can be touched by one piece at the same time.
pub(crate) fn check_contacts(faces: &[Face]) -> Result<(), CubeError> {
	for (i, a) in faces.iter().enumerate() {
		if faces[i + 1..].iter().any(|b| !a.is_adjacent(*b)) {
			return Err(CubeError::InvalidOrientation(format_faces(faces)));
		}
	}
	Ok(())
}

/// Parse a string like "UB" into a set of faces a piece touches.
pub fn parse_faces<const N: usize>(s: &str) -> Result<[Face; N], CubeError> {
	let chars: Vec<char> = s.chars().collect();
	check_shape("faces", &chars, N)?;

	let mut out = [Face::Up; N];
	for (slot, c) in out.iter_mut().zip(chars) {
		*slot = Face::try_from(c)?;
	}
	check_contacts(&out)?;

	Ok(out)
}

/// Anything that can be moved around by turning the cube.
pub trait Piece {
	/// Apply a single quarter turn.
	fn apply_turn(&mut self, turn: Turn);

	/// The faces the piece currently touches.
	fn faces(&self) -> &[Face];

	/// The colors of the piece. `colors()[i]` points at `faces()[i]`.
	fn colors(&self) -> &[Color];

	/// Apply all turns from left to right.
	fn turn(&mut self, turns: &[Turn]) {
		for turn in turns {
			self.apply_turn(*turn);
		}
	}

	fn turned(mut self, turns: &[Turn]) -> Self
	where
		Self: Sized,
	{
		self.turn(turns);
		self
	}

	/// Parse the move string and apply it.
	/// Nothing is turned if the string contains an invalid token.
	fn turn_str(&mut self, mv: &str) -> Result<(), CubeError> {
		let turns = parse_move(mv)?;
		self.turn(&turns);
		Ok(())
	}

	/// Whether every sticker of the piece sits on the face of its color.
	fn is_home(&self) -> bool {
		self.colors()
			.iter()
			.zip(self.faces())
			.all(|(c, f)| c.home_face() == *f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use strum::IntoEnumIterator;

	#[test]
	fn opposites_are_involutions() {
		for face in Face::iter() {
			assert_eq!(face.opposite().opposite(), face);
			assert!(!face.is_adjacent(face));
			assert!(!face.is_adjacent(face.opposite()));
		}
		for color in Color::iter() {
			assert_eq!(color.opposite().opposite(), color);
			assert_eq!(color.opposite().home_face(), color.home_face().opposite());
		}
	}

	#[test]
	fn color_scheme_round_trips() {
		for face in Face::iter() {
			assert_eq!(face.solved_color().home_face(), face);
		}
		assert_eq!(Color::from_name("white"), Ok(Color::White));
		assert_eq!(Color::from_name("Red"), Err(CubeError::InvalidColor("Red".into())));
	}

	#[test]
	fn face_codes() {
		for face in Face::iter() {
			assert_eq!(Face::try_from(face.code()), Ok(face));
			assert_eq!(face.to_string(), face.code().to_string());
		}
		assert_eq!(Face::try_from('u'), Err(CubeError::InvalidFace('u')));
	}

	#[test]
	fn slots_are_valid_contact_sets() {
		for slot in EdgeSlot::iter() {
			let faces = slot.faces();
			assert_eq!(format_faces(&faces), slot.to_string());
			assert!(check_contacts(&faces).is_ok());
		}
		for slot in CornerSlot::iter() {
			let faces = slot.faces();
			assert_eq!(format_faces(&faces), slot.to_string());
			assert!(check_contacts(&faces).is_ok());
		}
	}

	#[test]
	fn parse_faces_errors() {
		assert_eq!(parse_faces::<2>("UB"), Ok([Face::Up, Face::Back]));
		assert_eq!(
			parse_faces::<2>("UBR"),
			Err(CubeError::Shape {
				what: "faces",
				expected: 2,
				found: 3
			})
		);
		assert_eq!(parse_faces::<2>("UX"), Err(CubeError::InvalidFace('X')));
		assert_eq!(
			parse_faces::<2>("UD"),
			Err(CubeError::InvalidOrientation("UD".into()))
		);
		assert_eq!(
			parse_faces::<3>("UUF"),
			Err(CubeError::InvalidOrientation("UUF".into()))
		);
	}
}
