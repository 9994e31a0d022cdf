//! Expression AST nodes
//!
//! An `Expression` is a tree representing code like `2 pi z + 1` as nested
//! nodes. Grouping parentheses leave no trace in the tree, `(z)` and `z` parse
//! to the same node.

use std::fmt::Display;

use crate::complex::Complex;

/// Expression AST nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
	/// A numeric literal, evaluates to itself.
	Literal(Complex),
	/// A reference to a name bound in the environment.
	Variable(String),
	/// A binary operation. For [`Operator::Call`] the left child is the callee
	/// and the right child the single argument.
	Operation { operator: Operator, left: Box<Expression>, right: Box<Expression> },
}

impl Expression {
	pub fn literal(value: impl Into<Complex>) -> Box<Self> { Box::new(Expression::Literal(value.into())) }

	pub fn variable(name: impl Into<String>) -> Box<Self> { Box::new(Expression::Variable(name.into())) }

	pub fn operation(operator: Operator, left: Box<Self>, right: Box<Self>) -> Box<Self> {
		Box::new(Expression::Operation { operator, left, right })
	}

	pub fn call(callee: Box<Self>, argument: Box<Self>) -> Box<Self> {
		Self::operation(Operator::Call, callee, argument)
	}

	pub fn assign(name: impl Into<String>, value: Box<Self>) -> Box<Self> {
		Self::operation(Operator::Assign, Self::variable(name), value)
	}

	/// Names referenced anywhere in the tree, in first-use order.
	pub fn free_names(&self) -> Vec<&str> {
		let mut names = Vec::new();
		self.collect_names(&mut names);
		names
	}

	fn collect_names<'a>(&'a self, names: &mut Vec<&'a str>) {
		match self {
			Expression::Literal(_) => {}
			Expression::Variable(name) => {
				if !names.contains(&name.as_str()) {
					names.push(name);
				}
			}
			Expression::Operation { left, right, .. } => {
				left.collect_names(names);
				right.collect_names(names);
			}
		}
	}
}

/// Operator tags of [`Expression::Operation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
	Add,
	Subtract,
	Multiply,
	Divide,
	Power,
	Assign,
	Call,
}

impl Operator {
	pub fn symbol(&self) -> &'static str {
		match self {
			Operator::Add => "+",
			Operator::Subtract => "-",
			Operator::Multiply => "*",
			Operator::Divide => "/",
			Operator::Power => "^",
			Operator::Assign => "=",
			Operator::Call => "call",
		}
	}
}

impl Display for Operator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.symbol()) }
}

/// Prints the tree as an S-expression, `(+ 1 (* 2 z))`.
impl Display for Expression {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Expression::Literal(value) => write!(f, "{value}"),
			Expression::Variable(name) => write!(f, "{name}"),
			Expression::Operation { operator, left, right } => write!(f, "({operator} {left} {right})"),
		}
	}
}
