use std::{error::Error, io::Write};

use clap::Parser;
use strum::IntoEnumIterator;

use cubepieces::prelude::*;

/// Follow the pieces of a Rubik's Cube through a sequence of turns
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// The move to apply, e.g. "FRuru" (uppercase: clockwise, lowercase: counter-clockwise)
	#[arg(short, long, default_value_t = String::new())]
	sequence: String,

	/// Track an edge starting at the given faces
	#[arg(short, long, default_value_t = String::from("UB"))]
	edge: String,

	/// Track a corner starting at the given faces instead of an edge
	#[arg(short, long)]
	corner: Option<String>,

	/// The colors of the tracked piece, separated by commas
	#[arg(long, value_delimiter = ',')]
	colors: Vec<String>,

	/// Apply the move to an entire solved cube
	#[arg(long, default_value_t = false)]
	cube: bool,

	/// Append this many random turns to the sequence
	#[arg(short, long, default_value_t = 0)]
	random: usize,

	/// Apply the inverse of the sequence
	#[arg(short, long, default_value_t = false)]
	invert: bool,

	/// Print all faces with their colors and quit
	#[arg(long, default_value_t = false)]
	list_faces: bool,

	/// Print the output to a file rather to the stdout
	#[arg(short, long, default_value_t = String::new())]
	output: String,
}

/// Parse the given color names, or fall back to the defaults.
fn parse_colors(names: &[String], default: &[Color]) -> Result<Vec<Color>, CubeError> {
	if names.is_empty() {
		return Ok(default.to_vec());
	}
	names.iter().map(|name| Color::from_name(name)).collect()
}

/// Turn a single piece and print where it went
fn track_piece<P: Piece + std::fmt::Display>(
	out: &mut dyn Write,
	mut piece: P,
	turns: &[Turn],
) -> std::io::Result<()> {
	writeln!(out, "before: {}", piece)?;
	piece.turn(turns);
	writeln!(out, "applied move: {}", format_move(turns))?;
	writeln!(out, "after: {}", piece)?;
	if piece.is_home() {
		writeln!(out, "the piece is solved")?;
	}
	Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
	// Initialize logging.
	env_logger::builder()
		.filter_module(
			"cubepieces",
			if cfg!(debug_assertions) {
				log::LevelFilter::Debug
			} else {
				log::LevelFilter::Warn
			},
		)
		.parse_default_env()
		.init();

	let args = Args::parse();
	// Whether to redirect it to the stdout or a file
	let mut out: Box<dyn Write> = if args.output.is_empty() {
		Box::new(std::io::stdout())
	} else {
		Box::new(std::fs::File::create(&args.output)?)
	};

	// List the faces and exit
	if args.list_faces {
		for face in Face::iter() {
			writeln!(out, "{} {}", face, face.solved_color())?;
		}
		return Ok(());
	}

	let mut turns = parse_move(&args.sequence)?;
	if args.random > 0 {
		turns.extend(random_move(args.random));
	}
	if args.invert {
		turns = invert_move(&turns);
	}
	log::debug!("applying {} turns", turns.len());

	if args.cube {
		let mut cube = Cube::solved();
		writeln!(out, "before: {}", cube)?;
		cube.turn(&turns);
		writeln!(out, "applied move: {}", format_move(&turns))?;
		writeln!(out, "after: {}", cube)?;
		writeln!(out, "solved: {}", cube.is_solved())?;
		return Ok(());
	}

	match args.corner {
		Some(contacts) => {
			let colors = parse_colors(&args.colors, &[Color::White, Color::Red, Color::Green])?;
			let corner = Corner::new(&colors, &contacts)?;
			track_piece(out.as_mut(), corner, &turns)?;
		}
		None => {
			let colors = parse_colors(&args.colors, &[Color::White, Color::Red])?;
			let edge = Edge::new(&colors, &args.edge)?;
			track_piece(out.as_mut(), edge, &turns)?;
		}
	}

	Ok(())
}
