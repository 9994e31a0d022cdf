/// ParserError separates broken input from parser bugs.
#[derive(thiserror::Error, Debug)]
pub enum ParserError {
	#[error("{0}")]
	InternalError(#[from] anyhow::Error),
	#[error(transparent)]
	ParseError(#[from] ParseError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("column {column}: {type}")]
pub struct ParseError {
	column: usize,
	r#type: ParseErrorType,
}

impl ParseError {
	pub fn new(column: usize, r#type: ParseErrorType) -> Self { Self { column, r#type } }

	pub fn column(&self) -> usize { self.column }

	pub fn r#type(&self) -> &ParseErrorType { &self.r#type }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
	/// Input ended where an operand was required.
	ExpectedExpression,
	/// A token that cannot start or continue an expression here.
	UnexpectedToken(String),
	/// `(` without its `)`.
	UnterminatedParenthesis,
	/// Left side of `=` is not a bare name.
	InvalidAssignmentTarget(String),
	/// Groups opened beyond the nesting limit.
	NestingTooDeep,
	/// More operations than one expression may hold.
	ExpressionTooLarge,
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			ExpectedExpression => {
				write!(f, "Expected expression")
			}
			UnexpectedToken(lexeme) => {
				write!(f, "Unexpected token '{lexeme}'")
			}
			UnterminatedParenthesis => {
				write!(f, "Expected closing parenthesis")
			}
			InvalidAssignmentTarget(target) => {
				write!(f, "{target} is not a variable")
			}
			NestingTooDeep => {
				write!(f, "Parentheses nested too deeply")
			}
			ExpressionTooLarge => {
				write!(f, "Expression has too many operations")
			}
		}
	}
}
