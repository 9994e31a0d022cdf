/// A token produced by the scanner
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
	pub r#type: TokenType<'a>,
	pub lexeme: &'a str,
	/// 1-based column of the first character of the lexeme.
	pub column: usize,
}

impl<'a> Token<'a> {
	pub fn new(r#type: TokenType<'a>, lexeme: &'a str, column: usize) -> Self { Self { r#type, lexeme, column } }
}

/// The different types of tokens in the expression language.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenType<'a> {
	/// Empty Character: ` `, `\r`, `\t`, `\n`.
	EmptyChar,
	/// Left parenthesis `(`.
	LeftParen,
	/// Right parenthesis `)`.
	RightParen,
	/// Minus `-`.
	Minus,
	/// Plus `+`.
	Plus,
	/// Slash `/`.
	Slash,
	/// Asterisk `*`.
	Star,
	/// Caret `^`.
	Caret,
	/// Equal `=`.
	Equal,
	/// Identifier, a run of ASCII letters.
	Identifier(&'a str),
	/// Number literal, e.g. `123.45`.
	Number(f64),
	/// End of input.
	Eof,
}

impl TokenType<'_> {
	pub fn is_ignored(&self) -> bool { matches!(self, TokenType::EmptyChar) }

	/// Literals and names take part in implicit multiplication.
	pub fn is_operand(&self) -> bool { matches!(self, TokenType::Number(_) | TokenType::Identifier(_)) }
}
