//! The `Scanner` use `Lexical grammar`, implement `alphabet` as `Characters`,
//! `string` as `Lexme` or `Token`
//! The `Parser` use `Syntactic grammar`, implement `alphabet` as `Tokens`,
//! `string` as `Expression`
//!
//! |Name|Operators|Associates
//! --|--|--
//! Assignment|=|Left
//! Addition|+ -|Left
//! Multiplication|* /|Left
//! Concatenation|juxtaposition|Left
//! Power|^|Left
//!
//! Expression grammar:
//!
//! ``` BNF
//! declaration    → assignment EOF ;
//! assignment     → addition ( "=" addition )* ;
//! addition       → ( "+" | "-" )? multiplication ( ( "+" | "-" ) multiplication )* ;
//! multiplication → concatenation ( ( "*" | "/" ) concatenation )* ;
//! concatenation  → power ( power )* ;            // only while the next token is NUMBER or NAME
//! power          → primary ( "^" primary )* ;
//! primary        → NUMBER | ( NAME | "(" addition ")" ) ( "(" addition ")" )? ;
//! ```
//!
//! A leading `+` is dropped and a leading `-` becomes `0 - operand`.
//! Concatenation is implicit multiplication, `2 pi` is `2 * pi`. Parentheses
//! right after a name or a group make a call, `sin(z)`.
//!
//! Groups nest at most [`MAX_NESTING`] deep and one expression holds at most
//! [`MAX_OPERATIONS`] operation nodes, which bounds the recursion of both back
//! ends.

pub mod expression;

use std::{iter::Peekable, vec::IntoIter};

use TokenType::*;
use anyhow::anyhow;

use crate::{error::parser::{ParseError, ParseErrorType, ParserError}, parser::expression::{Expression, Operator}, scanner::{Token, TokenType}};

/// Deepest accepted nesting of parenthesized groups and call arguments.
pub const MAX_NESTING: usize = 128;

/// Most operation nodes accepted in one expression.
pub const MAX_OPERATIONS: usize = 512;

/// Recursive-descent parser over the scanner's tokens.
pub struct Parser<'a> {
	/// The tokens to parse, terminated by `Eof`.
	tokens:     Peekable<IntoIter<Token<'a>>>,
	/// Groups currently open.
	depth:      usize,
	/// Operation nodes built so far.
	operations: usize,
}

impl<'a> Parser<'a> {
	pub fn new(tokens: Vec<Token<'a>>) -> Self { Self { tokens: tokens.into_iter().peekable(), depth: 0, operations: 0 } }

	/// Parse one expression spanning all tokens.
	pub fn parse(&mut self) -> Result<Box<Expression>, ParserError> {
		let expression = self.assignment()?;
		let token = self.peek()?;
		if !matches!(token.r#type, Eof) {
			return Err(ParseError::new(token.column, ParseErrorType::UnexpectedToken(token.lexeme.to_string())).into());
		}
		Ok(expression)
	}

	/// Parse assignments, every `=` must have a bare name on its left.
	fn assignment(&mut self) -> Result<Box<Expression>, ParserError> {
		let mut expression = self.addition()?;
		while matches!(self.peek()?.r#type, Equal) {
			let equal = self.advance()?;
			let Expression::Variable(name) = expression.as_ref() else {
				let target = expression.to_string();
				return Err(ParseError::new(equal.column, ParseErrorType::InvalidAssignmentTarget(target)).into());
			};
			let name = name.clone();
			let value = self.addition()?;
			self.count_operation(equal.column)?;
			expression = Expression::assign(name, value);
		}
		Ok(expression)
	}

	/// Parse addition expressions with an optional leading sign.
	fn addition(&mut self) -> Result<Box<Expression>, ParserError> {
		let mut expression = match self.peek()?.r#type {
			Plus => {
				self.advance()?;
				self.multiplication()?
			}
			Minus => {
				let minus = self.advance()?;
				let operand = self.multiplication()?;
				self.operation(minus.column, Operator::Subtract, Expression::literal(0.0), operand)?
			}
			_ => self.multiplication()?,
		};
		while let Some((column, operator)) = self.match_operator(&[(Plus, Operator::Add), (Minus, Operator::Subtract)])? {
			let right = self.multiplication()?;
			expression = self.operation(column, operator, expression, right)?;
		}
		Ok(expression)
	}

	/// Parse multiplication expressions.
	fn multiplication(&mut self) -> Result<Box<Expression>, ParserError> {
		let mut expression = self.concatenation()?;
		while let Some((column, operator)) = self.match_operator(&[(Star, Operator::Multiply), (Slash, Operator::Divide)])? {
			let right = self.concatenation()?;
			expression = self.operation(column, operator, expression, right)?;
		}
		Ok(expression)
	}

	/// Parse juxtaposed operands as multiplication.
	fn concatenation(&mut self) -> Result<Box<Expression>, ParserError> {
		let mut expression = self.power()?;
		while self.peek()?.r#type.is_operand() {
			let column = self.peek()?.column;
			let right = self.power()?;
			expression = self.operation(column, Operator::Multiply, expression, right)?;
		}
		Ok(expression)
	}

	/// Parse power expressions.
	fn power(&mut self) -> Result<Box<Expression>, ParserError> {
		let mut expression = self.primary()?;
		while let Some((column, operator)) = self.match_operator(&[(Caret, Operator::Power)])? {
			let right = self.primary()?;
			expression = self.operation(column, operator, expression, right)?;
		}
		Ok(expression)
	}

	/// Parse primary expressions.
	fn primary(&mut self) -> Result<Box<Expression>, ParserError> {
		let token = self.advance()?;
		let callee = match token.r#type {
			// Numbers cannot be followed by arguments.
			Number(value) => return Ok(Expression::literal(value)),
			Identifier(name) => Expression::variable(name),
			LeftParen => self.parenthesized(token.column)?,
			Eof => return Err(ParseError::new(token.column, ParseErrorType::ExpectedExpression).into()),
			_ => {
				let error = ParseErrorType::UnexpectedToken(token.lexeme.to_string());
				return Err(ParseError::new(token.column, error).into());
			}
		};

		if matches!(self.peek()?.r#type, LeftParen) {
			let paren = self.advance()?;
			let argument = self.parenthesized(paren.column)?;
			self.count_operation(paren.column)?;
			return Ok(Expression::call(callee, argument));
		}
		Ok(callee)
	}

	/// Parse the inside of a group whose `(`, at `column`, was already consumed.
	fn parenthesized(&mut self, column: usize) -> Result<Box<Expression>, ParserError> {
		if self.depth == MAX_NESTING {
			return Err(ParseError::new(column, ParseErrorType::NestingTooDeep).into());
		}
		self.depth += 1;
		let expression = self.addition()?;
		self.depth -= 1;
		let token = self.peek()?;
		if !matches!(token.r#type, RightParen) {
			return Err(ParseError::new(token.column, ParseErrorType::UnterminatedParenthesis).into());
		}
		self.advance()?; // consume ')'
		Ok(expression)
	}

	/// Consume the next token if it is one of `operators`, returning its column.
	fn match_operator(
		&mut self,
		operators: &[(TokenType<'static>, Operator)],
	) -> Result<Option<(usize, Operator)>, ParserError> {
		let next = &self.peek()?.r#type;
		let Some(&(_, operator)) = operators.iter().find(|(r#type, _)| r#type == next) else { return Ok(None) };
		let token = self.advance()?;
		Ok(Some((token.column, operator)))
	}

	/// Build an operation node written at `column`.
	fn operation(
		&mut self,
		column: usize,
		operator: Operator,
		left: Box<Expression>,
		right: Box<Expression>,
	) -> Result<Box<Expression>, ParserError> {
		self.count_operation(column)?;
		Ok(Expression::operation(operator, left, right))
	}

	fn count_operation(&mut self, column: usize) -> Result<(), ParserError> {
		if self.operations == MAX_OPERATIONS {
			return Err(ParseError::new(column, ParseErrorType::ExpressionTooLarge).into());
		}
		self.operations += 1;
		Ok(())
	}

	/// Advance to the next token.
	fn advance(&mut self) -> Result<Token<'a>, ParserError> {
		self.tokens.next().ok_or_else(|| anyhow!("Unexpected end of token stream").into())
	}

	/// Peek at the current token.
	fn peek(&mut self) -> Result<&Token<'a>, ParserError> {
		self.tokens.peek().ok_or_else(|| anyhow!("Unexpected end of token stream").into())
	}
}
