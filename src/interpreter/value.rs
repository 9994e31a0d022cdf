use std::fmt::Display;

use crate::{complex::Complex, error::interpreter::InterpreterError, interpreter::callable::Callable, parser::expression::Operator};

/// Value represents a runtime value bound to a name or produced by evaluation.
#[derive(Debug, Clone)]
pub enum Value {
	Number(Complex),
	Callable(Callable),
}

impl PartialEq for Value {
	/// Callables compare by identity of their body.
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Value::Number(l), Value::Number(r)) => l == r,
			(Value::Callable(l), Value::Callable(r)) => l.ptr_eq(r),
			_ => false,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Number(z) => write!(f, "{z}"),
			Value::Callable(_) => write!(f, "[Function]"),
		}
	}
}

impl From<Complex> for Value {
	fn from(value: Complex) -> Self { Value::Number(value) }
}

impl From<Callable> for Value {
	fn from(value: Callable) -> Self { Value::Callable(value) }
}

impl Value {
	/// Performs an arithmetic operation between two values. A complex operand
	/// meeting a callable is lifted to a constant function.
	pub fn binary_op(&self, operator: Operator, right: &Self) -> Result<Value, InterpreterError> {
		Ok(match (self, right) {
			(Value::Number(l), Value::Number(r)) => Value::Number(apply(operator, *l, *r)?),
			(Value::Callable(l), Value::Callable(r)) => Value::Callable(l.combine(operator, r)?),
			(Value::Callable(l), Value::Number(r)) => Value::Callable(l.combine(operator, &Callable::constant(*r))?),
			(Value::Number(l), Value::Callable(r)) => Value::Callable(Callable::constant(*l).combine(operator, r)?),
		})
	}

	pub fn as_number(&self) -> Option<Complex> {
		match self {
			Value::Number(z) => Some(*z),
			Value::Callable(_) => None,
		}
	}
}

/// Applies an arithmetic operator to two complex numbers.
pub(crate) fn apply(operator: Operator, left: Complex, right: Complex) -> Result<Complex, InterpreterError> {
	match operator {
		Operator::Add => Ok(left + right),
		Operator::Subtract => Ok(left - right),
		Operator::Multiply => Ok(left * right),
		Operator::Divide => left.checked_div(right),
		Operator::Power => left.pow(right),
		Operator::Assign | Operator::Call => {
			Err(InterpreterError::InvalidOperand(format!("'{operator}' is not an arithmetic operator")))
		}
	}
}
