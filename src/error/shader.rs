use crate::parser::expression::Operator;

/// Errors raised while generating shader text
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ShaderError {
	/// No generation rule for the operator
	#[error("No generation rule for operator '{0}'")]
	UnsupportedOperation(Operator),
}
