use const_for::const_for;

use crate::cube::{turn::*, Face, NUM_FACES};

/// A relabeling of the faces: `perm[f as usize]` is where face `f` ends up.
pub type FacePerm = [Face; NUM_FACES];

/// Leaves every face where it is
const IDENTITY: FacePerm = [
	Face::Up,
	Face::Down,
	Face::Back,
	Face::Front,
	Face::Left,
	Face::Right,
];

/// A permutation moving c[0] to c[1], c[1] to c[2], ... and c[3] to c[0].
/// All faces not in the cycle are fixed.
const fn cycle(c: [Face; 4]) -> FacePerm {
	let mut out = IDENTITY;
	const_for!(i in 0..4 => {
		out[c[i] as usize] = c[(i + 1) % 4];
	});
	out
}

pub const fn invert(perm: FacePerm) -> FacePerm {
	let mut out = IDENTITY;
	const_for!(i in 0..NUM_FACES => {
		out[perm[i] as usize] = IDENTITY[i];
	});
	out
}

// ==== Effects of the clockwise base turns =====
// Only R, U and F are written down, the others turn the same axis backwards.

const E_RIGHT: FacePerm = cycle([Face::Up, Face::Back, Face::Down, Face::Front]);
const E_UP: FacePerm = cycle([Face::Front, Face::Left, Face::Back, Face::Right]);
const E_FRONT: FacePerm = cycle([Face::Up, Face::Right, Face::Down, Face::Left]);

const E_LEFT: FacePerm = invert(E_RIGHT);
const E_DOWN: FacePerm = invert(E_UP);
const E_BACK: FacePerm = invert(E_FRONT);

/// The base effects, sorted like `Face`
const BASE: [FacePerm; NUM_FACES] = [E_UP, E_DOWN, E_BACK, E_FRONT, E_LEFT, E_RIGHT];

/// A counter-clockwise turn of a face relabels the neighbouring faces
/// exactly like a clockwise turn of the opposite face.
const fn generate_effect_table() -> [[FacePerm; NUM_TURNWISES]; NUM_FACES] {
	let mut out = [[IDENTITY; NUM_TURNWISES]; NUM_FACES];

	const_for!(i in 0..NUM_FACES => {
		out[i][TurnWise::Clockwise as usize] = BASE[i];
		out[i][TurnWise::CounterClockwise as usize] = BASE[IDENTITY[i].opposite() as usize];
	});

	out
}

static EFFECT: [[FacePerm; NUM_TURNWISES]; NUM_FACES] = generate_effect_table();

/// Look up the relabeling caused by a turn.
pub fn turn_effect(turn: Turn) -> &'static FacePerm {
	&EFFECT[turn.face as usize][turn.wise as usize]
}

/// Where the face ends up after the turn.
pub fn relabel(turn: Turn, face: Face) -> Face {
	turn_effect(turn)[face as usize]
}
