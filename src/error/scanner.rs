/// A specific scanning error with column and type.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("column {column}: {type}")]
pub struct ScanError {
	/// The column where the error occurred.
	column: usize,
	/// The type of scanning error.
	r#type: ScanErrorType,
}

impl ScanError {
	pub fn new(column: usize, r#type: ScanErrorType) -> Self { Self { column, r#type } }

	pub fn column(&self) -> usize { self.column }

	pub fn r#type(&self) -> &ScanErrorType { &self.r#type }
}

/// Types of scanning errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanErrorType {
	/// Error for unexpected characters.
	UnexpectedCharacter(char),
	/// A digit run that does not convert to a float.
	InvalidNumber(String),
}

impl std::fmt::Display for ScanErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ScanErrorType::*;
		match self {
			UnexpectedCharacter(c) => {
				write!(f, "Unexpected character '{c}'")
			}
			InvalidNumber(literal) => {
				write!(f, "Invalid number literal '{literal}'")
			}
		}
	}
}
