use std::{fmt::Debug, rc::Rc};

use crate::{complex::Complex, error::interpreter::InterpreterError, interpreter::value::{Value, apply}, parser::expression::Operator};

type ComplexFunction = dyn Fn(Complex) -> Result<Complex, InterpreterError>;

/// A deferred complex-to-complex function bound in the environment.
///
/// Cloning is shallow, the function body is shared.
#[derive(Clone)]
pub struct Callable {
	name: Rc<str>,
	body: Rc<ComplexFunction>,
}

impl Debug for Callable {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Callable").field("name", &self.name).field("body", &"Function Pointer").finish()
	}
}

impl Callable {
	pub fn new(name: impl Into<Rc<str>>, body: impl Fn(Complex) -> Result<Complex, InterpreterError> + 'static) -> Self {
		Self { name: name.into(), body: Rc::new(body) }
	}

	/// A function that cannot fail, e.g. `conj`.
	pub fn native(name: &'static str, body: fn(Complex) -> Complex) -> Self { Self::new(name, move |z| Ok(body(z))) }

	pub fn constant(value: Complex) -> Self { Self::new(value.to_string(), move |_| Ok(value)) }

	pub fn name(&self) -> &str { &self.name }

	/// Whether both share one function body.
	pub fn ptr_eq(&self, other: &Callable) -> bool { Rc::ptr_eq(&self.body, &other.body) }

	pub fn call(&self, argument: Complex) -> Result<Complex, InterpreterError> { (self.body)(argument) }

	/// Invoke with a runtime value, a callable argument composes: `f(g)` is
	/// `z ↦ f(g(z))`.
	pub fn invoke(&self, argument: &Value) -> Result<Value, InterpreterError> {
		match argument {
			Value::Number(z) => self.call(*z).map(Value::Number),
			Value::Callable(inner) => Ok(Value::Callable(self.compose(inner))),
		}
	}

	pub fn compose(&self, inner: &Callable) -> Callable {
		let (outer, inner_body) = (self.body.clone(), inner.body.clone());
		let name = format!("{}({})", self.name, inner.name);
		Self::new(name, move |z| outer(inner_body(z)?))
	}

	/// Pointwise `self <operator> other`.
	pub fn combine(&self, operator: Operator, other: &Callable) -> Result<Callable, InterpreterError> {
		if matches!(operator, Operator::Assign | Operator::Call) {
			return Err(InterpreterError::InvalidOperand(format!("'{operator}' is not an arithmetic operator")));
		}
		let (left, right) = (self.body.clone(), other.body.clone());
		let name = format!("({operator} {} {})", self.name, other.name);
		Ok(Self::new(name, move |z| apply(operator, left(z)?, right(z)?)))
	}
}
