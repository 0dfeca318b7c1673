use rand::Rng;

use crate::cube::{effect, effect::FacePerm, CubeError, Face};

/// Total number of directions a face can be turned in
pub const NUM_TURNWISES: usize = 2;

/// A face is either turned clockwise or counter-clockwise (by a quarter)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, strum::EnumIter)]
#[repr(usize)]
pub enum TurnWise {
	Clockwise,
	CounterClockwise,
}

impl TurnWise {
	pub const fn inverse(self) -> Self {
		match self {
			TurnWise::Clockwise => TurnWise::CounterClockwise,
			TurnWise::CounterClockwise => TurnWise::Clockwise,
		}
	}
}

/// A single move token
///
/// face: The face to turn
/// wise: See the definiton of TurnWise
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Turn {
	pub face: Face,
	pub wise: TurnWise,
}

/// All 12 quarter turns, clockwise first.
#[rustfmt::skip]
pub const ALL_TURNS: [Turn; 12] = [
	Turn::cw(Face::Right), Turn::cw(Face::Left), Turn::cw(Face::Up),
	Turn::cw(Face::Down), Turn::cw(Face::Front), Turn::cw(Face::Back),
	Turn::ccw(Face::Right), Turn::ccw(Face::Left), Turn::ccw(Face::Up),
	Turn::ccw(Face::Down), Turn::ccw(Face::Front), Turn::ccw(Face::Back),
];

impl Turn {
	pub const fn new(face: Face, wise: TurnWise) -> Self {
		Self { face, wise }
	}

	/// Clockwise quarter turn of the face
	pub const fn cw(face: Face) -> Self {
		Self::new(face, TurnWise::Clockwise)
	}

	/// Counter-clockwise quarter turn of the face
	pub const fn ccw(face: Face) -> Self {
		Self::new(face, TurnWise::CounterClockwise)
	}

	/// Turn itself to the turn, which negates itself.
	pub fn invert(&mut self) {
		self.wise = self.wise.inverse();
	}

	pub const fn inverse(self) -> Self {
		Self::new(self.face, self.wise.inverse())
	}

	/// How this turn relabels the faces a piece touches.
	pub fn effect(self) -> &'static FacePerm {
		effect::turn_effect(self)
	}

	/// The character of the token: uppercase is clockwise, lowercase counter-clockwise.
	pub const fn token(self) -> char {
		let c = self.face.code();
		match self.wise {
			TurnWise::Clockwise => c,
			TurnWise::CounterClockwise => c.to_ascii_lowercase(),
		}
	}
}

impl std::fmt::Display for Turn {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}", self.token())
	}
}

impl TryFrom<char> for Turn {
	type Error = CubeError;

	fn try_from(token: char) -> Result<Self, Self::Error> {
		let invalid = CubeError::InvalidMoveToken { token, position: 0 };
		let face = Face::try_from(token.to_ascii_uppercase()).map_err(|_| invalid)?;
		let wise = if token.is_ascii_uppercase() {
			TurnWise::Clockwise
		} else {
			TurnWise::CounterClockwise
		};

		Ok(Self { face, wise })
	}
}

/// Parse a move string like "FRuru" into its tokens.
/// Every character is a token, the first invalid one aborts parsing.
pub fn parse_move(string: &str) -> Result<Vec<Turn>, CubeError> {
	string
		.char_indices()
		.map(|(position, token)| {
			Turn::try_from(token).map_err(|_| CubeError::InvalidMoveToken { token, position })
		})
		.collect()
}

/// Write the tokens back as a move string.
pub fn format_move(turns: &[Turn]) -> String {
	turns.iter().map(|t| t.token()).collect()
}

/// The move undoing the given one.
pub fn invert_move(turns: &[Turn]) -> Vec<Turn> {
	turns.iter().rev().map(|t| t.inverse()).collect()
}

/// A random move of the given length.
pub fn random_move(len: usize) -> Vec<Turn> {
	random_move_with(&mut rand::thread_rng(), len)
}

pub fn random_move_with<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<Turn> {
	(0..len)
		.map(|_| ALL_TURNS[rng.gen_range(0..ALL_TURNS.len())])
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn tokens_round_trip() {
		for turn in ALL_TURNS {
			assert_eq!(Turn::try_from(turn.token()), Ok(turn));
		}

		let mv = "FRuruRUrfRUrurFRf";
		let turns = parse_move(mv).unwrap();
		assert_eq!(turns.len(), mv.len());
		assert_eq!(turns[0], Turn::cw(Face::Front));
		assert_eq!(turns[2], Turn::ccw(Face::Up));
		assert_eq!(format_move(&turns), mv);
	}

	#[test]
	fn invalid_tokens() {
		assert_eq!(
			parse_move("RUx"),
			Err(CubeError::InvalidMoveToken {
				token: 'x',
				position: 2
			})
		);
		assert_eq!(
			parse_move("R U"),
			Err(CubeError::InvalidMoveToken {
				token: ' ',
				position: 1
			})
		);
		for token in ['M', 'e', '2', '\'', 'ü'] {
			assert!(Turn::try_from(token).is_err(), "{token} should be rejected");
		}
		assert_eq!(parse_move(""), Ok(vec![]));
	}

	#[test]
	fn inverse_move() {
		let turns = parse_move("RUf").unwrap();
		assert_eq!(format_move(&invert_move(&turns)), "Fur");

		let mut turn = Turn::cw(Face::Back);
		turn.invert();
		assert_eq!(turn.token(), 'b');
		turn.invert();
		assert_eq!(turn.token(), 'B');
	}

	#[test]
	fn random_moves_are_valid() {
		let turns = random_move(50);
		assert_eq!(turns.len(), 50);
		assert_eq!(parse_move(&format_move(&turns)), Ok(turns));
	}
}
