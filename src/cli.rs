use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "complot", after_long_help = "Evaluates complex-number expressions and turns them into GLSL.")]
pub struct Cli {
	/// Log every evaluated line and generated shader expression
	#[arg(short, long, global = true)]
	pub verbose: bool,
	#[command(subcommand)]
	pub mode:    Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Input file, one expression per line
	File { path: PathBuf },
	/// Input prompt
	Repl {
		/// Lines starting with this character print their parse tree
		#[arg(long, default_value_t = ',')]
		tree_marker: char,
	},
	/// Print the GLSL expression for an expression
	Shader { expression: String },
	/// Print a fragment shader plotting the last line of a file
	Fragment { path: PathBuf },
}
