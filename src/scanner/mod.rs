//! Turns source text into a flat list of tokens.
//!
//! The lexical grammar is tiny: numbers (`12`, `3.25`, `1.`), names made of
//! letters (`z`, `pi`, `sqrt`) and the single character operators
//! `+ - * / ^ = ( )`. Whitespace separates tokens and is never emitted.
//!
//! Signs are not part of a number literal, `-2` is two tokens and the parser
//! decides what the minus means. Names stop at the first non letter, so `x2`
//! scans as `x` followed by `2` and ends up as an implicit multiplication.
mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenType::*;
pub use token::*;

use crate::error::scanner::{ScanError, ScanErrorType};

/// A scanner for expression source code
pub struct Scanner<'a> {
	/// User input source code
	source:      &'a str,
	/// User input source code iterator
	source_iter: Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:       usize,
	/// Points at the character currently being considered
	cursor:      usize,
	/// Column of the current lexeme, counted in characters.
	column:      usize,
	/// Characters consumed so far.
	consumed:    usize,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0, column: 0, consumed: 0 }
	}

	/// Scan all tokens from the source code, stopping at the first character
	/// outside the alphabet.
	pub fn scan_tokens(mut self) -> Result<Vec<Token<'a>>, ScanError> {
		let mut tokens = Vec::new();
		while let Some(&(index, _)) = self.source_iter.peek() {
			// We are at the beginning of the next lexeme.
			self.start = index;
			self.cursor = self.start;
			self.column = self.consumed + 1;
			self.scan_token(&mut tokens)?;
		}
		tokens.push(Token::new(Eof, "", self.consumed + 1));
		Ok(tokens)
	}

	/// Scan a single token from the source code
	fn scan_token(&mut self, tokens: &mut Vec<Token<'a>>) -> Result<(), ScanError> {
		let Some(next_char) = self.advance() else { return Ok(()) };
		#[rustfmt::skip]
		let r#type = match next_char {
			'(' => LeftParen,
			')' => RightParen,
			'-' => Minus,
			'+' => Plus,
			'*' => Star,
			'/' => Slash,
			'^' => Caret,
			'=' => Equal,
			' ' | '\r' | '\t' | '\n' => EmptyChar,
			c if c.is_ascii_digit() => self.number()?,
			c if c.is_ascii_alphabetic() => self.identifier(),
			_ => return Err(ScanError::new(self.column, ScanErrorType::UnexpectedCharacter(next_char))),
		};

		if !r#type.is_ignored() {
			let lexeme = &self.source[self.start..self.cursor];
			tokens.push(Token::new(r#type, lexeme, self.column));
		}

		Ok(())
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		self.consumed += 1;
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Scan a number literal, a trailing `.` without digits belongs to it.
	/// Literals beyond the `f64` range are invalid.
	fn number(&mut self) -> Result<TokenType<'a>, ScanError> {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}

		// Look for a fractional part.
		if self.peek() == Some('.') {
			self.advance(); // consume '.'
			while self.peek().is_some_and(|c| c.is_ascii_digit()) {
				self.advance();
			}
		}

		let s = &self.source[self.start..self.cursor];
		let invalid = || ScanError::new(self.column, ScanErrorType::InvalidNumber(s.to_string()));
		let value: f64 = s.parse().map_err(|_| invalid())?;
		if !value.is_finite() {
			return Err(invalid());
		}
		Ok(Number(value))
	}

	/// Scan an identifier
	fn identifier(&mut self) -> TokenType<'a> {
		while self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
			self.advance();
		}
		Identifier(&self.source[self.start..self.cursor])
	}
}

/// Scan `source` into tokens.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, ScanError> { Scanner::new(source).scan_tokens() }
