//! Expression interpreter.
//!
//! Rather than walking the tree on every evaluation, [`compile`] walks it
//! once and returns a [`Program`]: a closure per node, nested the same way as
//! the tree. Running the program against an [`Environment`] yields a
//! [`Value`]. The tree is only read, a program can be built from a borrowed
//! expression and run against any number of environments.
//!
//! # Expression Types
//!
//! - **Literals**: evaluate to themselves
//! - **Variables**: looked up in the environment
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `^` on complex numbers, pointwise on callables
//! - **Assignment**: `name = value` binds a new name and returns the value
//! - **Call**: `f(argument)` invokes a callable

pub mod callable;
pub mod value;

use value::Value;

use crate::{environment::Environment, error::interpreter::InterpreterError, parser::expression::{Expression, Operator}};

type Evaluator = Box<dyn Fn(&mut Environment) -> Result<Value, InterpreterError>>;

/// A compiled expression.
pub struct Program {
	evaluator: Evaluator,
}

impl Program {
	/// Evaluate against `environment`, which gains a binding if the program is
	/// an assignment.
	pub fn run(&self, environment: &mut Environment) -> Result<Value, InterpreterError> { (self.evaluator)(environment) }
}

impl std::fmt::Debug for Program {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str("Program") }
}

/// Compile `expression` into a reusable [`Program`].
pub fn compile(expression: &Expression) -> Program { Program { evaluator: compile_node(expression) } }

fn compile_node(expression: &Expression) -> Evaluator {
	match expression {
		Expression::Literal(value) => {
			let value = Value::Number(*value);
			Box::new(move |_: &mut Environment| Ok(value.clone()))
		}
		Expression::Variable(name) => {
			let name = name.clone();
			Box::new(move |environment: &mut Environment| {
				environment.get(&name).cloned().ok_or_else(|| InterpreterError::UnknownVariable(name.clone()))
			})
		}
		Expression::Operation { operator: Operator::Assign, left, right } => compile_assignment(left, right),
		Expression::Operation { operator: Operator::Call, left, right } => {
			let callee_text = left.to_string();
			let (callee, argument) = (compile_node(left), compile_node(right));
			Box::new(move |environment: &mut Environment| {
				let callee = callee(environment)?;
				let argument = argument(environment)?;
				match callee {
					Value::Callable(function) => function.invoke(&argument),
					Value::Number(_) => Err(InterpreterError::NotCallable(callee_text.clone())),
				}
			})
		}
		Expression::Operation { operator, left, right } => {
			let operator = *operator;
			let (left, right) = (compile_node(left), compile_node(right));
			Box::new(move |environment: &mut Environment| {
				let left_value = left(environment)?;
				let right_value = right(environment)?;
				left_value.binary_op(operator, &right_value)
			})
		}
	}
}

fn compile_assignment(target: &Expression, value: &Expression) -> Evaluator {
	let Expression::Variable(name) = target else {
		let target = target.to_string();
		return Box::new(move |_: &mut Environment| Err(InterpreterError::InvalidAssignmentTarget(target.clone())));
	};
	let name = name.clone();
	let value = compile_node(value);
	Box::new(move |environment: &mut Environment| {
		if environment.contains(&name) {
			return Err(InterpreterError::Rebind(name.clone()));
		}
		let value = value(environment)?;
		environment.define(&name, value.clone())?;
		Ok(value)
	})
}
