use std::{fs::read_to_string, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use complot::{Complot, SessionConfig, ShaderSource, cli::*};
use tracing::Level;

fn main() -> ExitCode {
	let cli = Cli::parse();
	let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
	tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();

	let result = match cli.mode {
		Mode::File { path } => Complot::default().run_file(&path).map_err(anyhow::Error::from),
		Mode::Repl { tree_marker } => {
			Complot::new(SessionConfig { tree_marker, ..SessionConfig::default() }).run_prompt();
			Ok(())
		}
		Mode::Shader { expression } => complot::compile_to_shader_text(&expression)
			.map(|shader| println!("{shader}"))
			.map_err(anyhow::Error::from),
		Mode::Fragment { path } => fragment(&path),
	};

	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("{e:#}");
			ExitCode::FAILURE
		}
	}
}

fn fragment(path: &std::path::Path) -> anyhow::Result<()> {
	let text = read_to_string(path).context("Failed open source file")?;
	let mut source = ShaderSource::new();
	source.on_source_changed(&text)?;
	let shader = source.fragment_shader().context("No fragment shader for the source")?;
	print!("{shader}");
	Ok(())
}
