#[derive(thiserror::Error, Debug, Clone, PartialEq)]
/// Errors that can occur during interpretation
pub enum InterpreterError {
	/// A name with no binding in the environment
	#[error("Unknown variable \"{0}\"")]
	UnknownVariable(String),
	/// Names are bound at most once per environment
	#[error("{0} is already bound")]
	Rebind(String),
	/// Call target evaluated to something other than a callable
	#[error("{0} is not callable")]
	NotCallable(String),
	/// Complex division by zero, also `0 ^ w` with `Re(w) <= 0`
	#[error("Division by zero")]
	DivisionByZero,
	/// Operator applied to operands it has no rule for
	#[error("Invalid operand: {0}")]
	InvalidOperand(String),
	/// `=` whose left side is not a name, only reachable from hand-built trees
	#[error("{0} is not a variable")]
	InvalidAssignmentTarget(String),
}
