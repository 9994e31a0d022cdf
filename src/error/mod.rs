pub mod interpreter;
pub mod parser;
pub mod scanner;
pub mod shader;

/// ComplotError is the top-level error type for every fallible entry point.
#[derive(thiserror::Error, Debug)]
pub enum ComplotError {
	/// Internal error, e.g. an unreadable source file
	#[error("InternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// Source text contained a character outside the alphabet
	#[error("Scan error: {0}")]
	ScanError(#[from] scanner::ScanError),
	/// Tokens did not form an expression
	#[error("Parse error: {0}")]
	ParseError(#[from] parser::ParseError),
	/// Runtime errors encountered during interpretation
	#[error("Runtime error: {0}")]
	RuntimeError(#[from] interpreter::InterpreterError),
	/// The shader backend has no rule for an operator
	#[error("Shader error: {0}")]
	ShaderError(#[from] shader::ShaderError),
}

impl From<parser::ParserError> for ComplotError {
	fn from(error: parser::ParserError) -> Self {
		match error {
			parser::ParserError::InternalError(e) => ComplotError::InternalError(e),
			parser::ParserError::ParseError(e) => ComplotError::ParseError(e),
		}
	}
}
