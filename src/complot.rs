use std::{fs::read_to_string, io::{BufRead, Write}, path::Path};

use anyhow::Context;

use crate::{ComplotError, Environment, evaluate, parse};

/// Settings of the interactive session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
	/// Printed before every input line.
	pub prompt:      String,
	/// Lines starting with this character print their tree instead of a value.
	pub tree_marker: char,
}

impl Default for SessionConfig {
	fn default() -> Self { Self { prompt: "> ".to_string(), tree_marker: ',' } }
}

/// One evaluation session owning a persistent environment, seeded with the
/// standard constants and functions.
#[derive(Debug)]
pub struct Complot {
	config:      SessionConfig,
	environment: Environment,
}

impl Default for Complot {
	fn default() -> Self { Self::new(SessionConfig::default()) }
}

impl Complot {
	pub fn new(config: SessionConfig) -> Self { Self { config, environment: Environment::standard() } }

	pub fn environment(&self) -> &Environment { &self.environment }

	/// Handle one line of the interactive protocol and return what to print.
	pub fn run_line(&mut self, line: &str) -> Result<String, ComplotError> {
		tracing::debug!(line, "running line");
		match line.strip_prefix(self.config.tree_marker) {
			Some(source) => Ok(parse(source)?.to_string()),
			None => Ok(evaluate(line, &mut self.environment)?.to_string()),
		}
	}

	/// Evaluate every non-blank line of `source`, stopping at the first error.
	pub fn run_source(&mut self, source: &str) -> Result<Vec<String>, ComplotError> {
		source.lines().filter(|line| !line.trim().is_empty()).map(|line| self.run_line(line)).collect()
	}

	/// Evaluate a source file line by line and print each result.
	pub fn run_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ComplotError> {
		let source = read_to_string(path).context("Failed open source file")?;
		for output in self.run_source(&source)? {
			println!("{output}");
		}
		Ok(())
	}

	/// Run the REPL prompt on the standard streams.
	pub fn run_prompt(&mut self) {
		let stdin = std::io::stdin();
		if let Err(e) = self.run_session(stdin.lock(), std::io::stdout(), std::io::stderr()) {
			eprintln!("Failed run prompt: {e}");
		}
	}

	/// Read lines from `input` until it ends, writing results to `output` and
	/// error messages to `errors`. An error never ends the session.
	pub fn run_session<R: BufRead, W: Write, E: Write>(
		&mut self,
		mut input: R,
		mut output: W,
		mut errors: E,
	) -> anyhow::Result<()> {
		let mut line = String::new();
		loop {
			line.clear();
			write!(output, "{}", self.config.prompt)?;
			output.flush().context("Failed flush")?;
			if input.read_line(&mut line).context("Failed read line")? == 0 {
				writeln!(output, "\nExited complot repl")?;
				return Ok(());
			}
			let line = line.trim();
			if line.is_empty() {
				continue;
			}
			match self.run_line(line) {
				Ok(result) => writeln!(output, "{result}")?,
				Err(e) => writeln!(errors, "{e}")?,
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::InterpreterError;

	#[test]
	fn evaluates_and_prints_trees() {
		let mut session = Complot::default();
		assert_eq!(session.run_line("1 + 2 * 3").unwrap(), "7");
		assert_eq!(session.run_line("(1 + 2i) * i").unwrap(), "-2+i");
		assert_eq!(session.run_line(",1 + 2 z").unwrap(), "(+ 1 (* 2 z))");
		assert_eq!(session.run_line("sqrt").unwrap(), "[Function]");
	}

	#[test]
	fn keeps_bindings_between_lines() {
		let mut session = Complot::default();
		assert_eq!(session.run_line("x = 2 i").unwrap(), "2i");
		assert_eq!(session.run_line("x x").unwrap(), "-4");
		assert!(matches!(session.run_line("x = 1"), Err(ComplotError::RuntimeError(InterpreterError::Rebind(_)))));
		assert!(session.environment().contains("x"));
	}

	#[test]
	fn custom_marker() {
		let mut session = Complot::new(SessionConfig { prompt: String::new(), tree_marker: '?' });
		assert_eq!(session.run_line("?-z").unwrap(), "(- 0 z)");
		assert!(session.run_line(",z").is_err());
	}

	#[test]
	fn run_source_stops_at_first_error() {
		let mut session = Complot::default();
		assert_eq!(session.run_source("a = 1\n\nb = a + 1\nb b\n").unwrap(), vec!["1", "2", "4"]);
		assert!(session.run_source("c = 1\n1/0\nd = 2").is_err());
		assert!(session.environment().contains("c"));
		assert!(!session.environment().contains("d"));
	}

	#[test]
	fn session_survives_errors() {
		let mut session = Complot::default();
		let input = "y\n\nx = 3\n1/0\nx + 1\n,(1\n";
		let (mut output, mut errors) = (Vec::new(), Vec::new());
		session.run_session(input.as_bytes(), &mut output, &mut errors).unwrap();
		let output = String::from_utf8(output).unwrap();
		let errors = String::from_utf8(errors).unwrap();
		assert_eq!(output, "> > > 3\n> > 4\n> > \nExited complot repl\n");
		assert_eq!(
			errors,
			"Runtime error: Unknown variable \"y\"\nRuntime error: Division by zero\nParse error: column 3: Expected closing parenthesis\n"
		);
	}
}
