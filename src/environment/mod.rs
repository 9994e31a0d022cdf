use std::{collections::HashMap, f64::consts};

use crate::{complex::Complex, error::interpreter::InterpreterError, interpreter::{callable::Callable, value::Value}};

/// Names bound during one evaluation session.
///
/// The map only grows: a name, once bound, keeps its value for the lifetime
/// of the environment. Clone the environment to fork a session.
#[derive(Default, Debug, Clone)]
pub struct Environment {
	variables: HashMap<String, Value>,
}

impl Environment {
	/// An environment with nothing bound.
	pub fn new() -> Self { Self { variables: HashMap::new() } }

	/// The constants `pi`, `e`, `i` and the functions `sqrt`, `cos`, `sin`,
	/// `tan`, `conj`.
	pub fn standard() -> Self {
		let mut environment = Self::new();
		environment.define_native("pi", Complex::from(consts::PI).into());
		environment.define_native("e", Complex::from(consts::E).into());
		environment.define_native("i", Complex::I.into());
		environment.define_native("sqrt", Callable::native("sqrt", Complex::sqrt).into());
		environment.define_native("cos", Callable::native("cos", Complex::cos).into());
		environment.define_native("sin", Callable::native("sin", Complex::sin).into());
		environment.define_native("tan", Callable::native("tan", Complex::tan).into());
		environment.define_native("conj", Callable::native("conj", Complex::conj).into());
		environment
	}

	/// Bind `name`, failing if it is already bound.
	pub fn define(&mut self, name: &str, value: Value) -> Result<(), InterpreterError> {
		if self.variables.contains_key(name) {
			return Err(InterpreterError::Rebind(name.to_string()));
		}
		self.variables.insert(name.to_string(), value);
		Ok(())
	}

	/// Builder form of [`Environment::define`] for seeding fresh environments.
	pub fn with(mut self, name: &str, value: impl Into<Value>) -> Result<Self, InterpreterError> {
		self.define(name, value.into())?;
		Ok(self)
	}

	fn define_native(&mut self, name: &'static str, value: Value) { self.variables.insert(name.to_string(), value); }

	pub fn get(&self, name: &str) -> Option<&Value> { self.variables.get(name) }

	pub fn contains(&self, name: &str) -> bool { self.variables.contains_key(name) }

	pub fn len(&self) -> usize { self.variables.len() }

	pub fn is_empty(&self) -> bool { self.variables.is_empty() }

	/// Bound names in sorted order.
	pub fn names(&self) -> Vec<&str> {
		let mut names: Vec<_> = self.variables.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn define_once() {
		let mut environment = Environment::new();
		assert!(environment.define("x", Complex::ONE.into()).is_ok());
		assert_eq!(environment.define("x", Complex::I.into()), Err(InterpreterError::Rebind("x".to_string())));
		assert_eq!(environment.get("x"), Some(&Value::Number(Complex::ONE)));
		assert_eq!(environment.len(), 1);
	}

	#[test]
	fn lookup_missing() {
		let environment = Environment::new();
		assert!(environment.is_empty());
		assert_eq!(environment.get("x"), None);
		assert!(!environment.contains("x"));
	}

	#[test]
	fn standard_bindings() {
		let environment = Environment::standard();
		assert_eq!(environment.names(), vec!["conj", "cos", "e", "i", "pi", "sin", "sqrt", "tan"]);
		assert_eq!(environment.get("i"), Some(&Value::Number(Complex::I)));
		assert!(matches!(environment.get("sqrt"), Some(Value::Callable(_))));
	}

	#[test]
	fn standard_names_cannot_be_rebound() {
		let mut environment = Environment::standard();
		assert_eq!(environment.define("pi", Complex::from(3.0).into()), Err(InterpreterError::Rebind("pi".to_string())));
	}

	#[test]
	fn builder_seeding() {
		let environment = Environment::new().with("pi", Complex::from(3.0)).unwrap();
		assert_eq!(environment.get("pi"), Some(&Value::Number(Complex::from(3.0))));
		assert!(Environment::new().with("z", Complex::I).unwrap().with("z", Complex::I).is_err());
	}
}
