//! # A small language for complex-valued expressions
//!
//! User's source code: `2 z^2 + conj(z)`.

//! ## Scanning
//!
//! The scanner takes in characters and groups them into tokens: numbers `2`,
//! names `z`, `conj` and the operators `+ - * / ^ = ( )`. Whitespace only
//! separates tokens.

//! ## Parsing
//!
//! The parser builds an `AST` from the tokens and reports syntax errors.
//!
//! ``` markdown
//! + (Operation)
//! ├── * (Operation, implicit)
//! │   ├── 2 (Literal)
//! │   └── ^ (Operation)
//! │       ├── z (Variable)
//! │       └── 2 (Literal)
//! └── call (Operation)
//!     ├── conj (Variable)
//!     └── z (Variable)
//! ```
//!
//! Writing two operands next to each other multiplies them, `2 pi` is
//! `2 * pi`, and a leading minus subtracts from zero.

//! ## Two back ends
//!
//! The same tree feeds two back ends that never modify it:
//!
//! - The **interpreter** compiles the tree into a closure that evaluates it
//!   against an [`Environment`] with exact complex arithmetic, powers, calls
//!   and single assignment.
//! - The **shader** back end emits a GLSL expression over `vec2` values for
//!   per-pixel evaluation. It only knows `+`, `-` and `*` and reports every
//!   other operator as unsupported.

pub mod cli;
mod complex;
mod complot;
mod environment;
mod error;
mod interpreter;
mod parser;
mod scanner;
mod shader;

pub use complex::Complex;
pub use complot::{Complot, SessionConfig};
pub use environment::Environment;
pub use error::{ComplotError, interpreter::InterpreterError, parser::{ParseError, ParseErrorType}, scanner::{ScanError, ScanErrorType}, shader::ShaderError};
pub use interpreter::{Program, callable::Callable, compile, value::Value};
pub use parser::expression::{Expression, Operator};
pub use scanner::{Token, TokenType, tokenize};
pub use shader::{ShaderSource, fragment_shader};

/// Parse `text` into an expression tree.
pub fn parse(text: &str) -> Result<Box<Expression>, ComplotError> {
	let tokens = scanner::tokenize(text)?;
	Ok(parser::Parser::new(tokens).parse()?)
}

/// Parse, compile and run `text` against `environment`.
pub fn evaluate(text: &str, environment: &mut Environment) -> Result<Value, ComplotError> {
	let expression = parse(text)?;
	Ok(compile(&expression).run(environment)?)
}

/// Translate `text` into a GLSL `vec2` expression.
pub fn compile_to_shader_text(text: &str) -> Result<String, ComplotError> {
	let expression = parse(text)?;
	Ok(shader::compile(&expression)?)
}
