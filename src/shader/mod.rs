//! GLSL backend.
//!
//! A complex number is a `vec2` holding `(real, imag)`. Addition and
//! subtraction map onto vector addition and subtraction, multiplication is
//! spelled out component-wise. Anything else (division, powers, assignment,
//! calls) has no rule here and is rejected with
//! [`ShaderError::UnsupportedOperation`] instead of producing broken text.
//!
//! Names are emitted as they are, the surrounding shader program has to
//! declare each of them as a `vec2`. [`fragment_shader`] builds such a
//! program: `z` is the per-pixel coordinate, every other name becomes a
//! uniform prefixed with [`UNIFORM_PREFIX`]. Names are letters only, so a
//! prefixed name never meets a GLSL built-in or an identifier of the template.

use crate::{error::{ComplotError, parser::{ParseError, ParseErrorType}, shader::ShaderError}, parser::expression::{Expression, Operator}};

/// The per-pixel complex coordinate declared by [`fragment_shader`].
pub const COORDINATE: &str = "z";

/// Prefix of the uniform declared for every other free name.
pub const UNIFORM_PREFIX: &str = "u_";

const FRAGMENT_TEMPLATE: &str = "precision mediump float;

varying vec2 z;
{{uniforms}}
vec3 hue(float turn) {
	return clamp(abs(mod(turn * 6.0 + vec3(0.0, 4.0, 2.0), 6.0) - 3.0) - 1.0, 0.0, 1.0);
}

void main() {
	vec2 w = {{expression}};
	float shade = 1.0 - 1.0 / (1.0 + length(w));
	gl_FragColor = vec4(hue(atan(w.y, w.x) / 6.28318530718) * shade, 1.0);
}
";

/// Translate `expression` into a GLSL expression of type `vec2`.
pub fn compile(expression: &Expression) -> Result<String, ShaderError> { emit(expression, &|name: &str| name.to_string()) }

/// Like [`compile`], spelling every name through `rename`.
fn emit(expression: &Expression, rename: &dyn Fn(&str) -> String) -> Result<String, ShaderError> {
	Ok(match expression {
		Expression::Literal(value) => format!("vec2({}, {})", float(value.real()), float(value.imag())),
		Expression::Variable(name) => rename(name),
		Expression::Operation { operator, left, right } => {
			let (a, b) = (emit(left, rename)?, emit(right, rename)?);
			match operator {
				Operator::Add => format!("({a}+{b})"),
				Operator::Subtract => format!("({a}-{b})"),
				Operator::Multiply => {
					let (x1, y1) = (format!("({a}).x"), format!("({a}).y"));
					let (x2, y2) = (format!("({b}).x"), format!("({b}).y"));
					format!("vec2({x1}*{x2}-{y1}*{y2}, {x1}*{y2}+{x2}*{y1})")
				}
				Operator::Divide | Operator::Power | Operator::Assign | Operator::Call => {
					return Err(ShaderError::UnsupportedOperation(*operator));
				}
			}
		}
	})
}

/// GLSL float literals need a fraction or an exponent, `{:?}` always has one.
fn float(value: f64) -> String { format!("{value:?}") }

fn uniform(name: &str) -> String {
	match name {
		COORDINATE => name.to_string(),
		_ => format!("{UNIFORM_PREFIX}{name}"),
	}
}

/// A complete fragment shader plotting `expression` over the plane.
pub fn fragment_shader(expression: &Expression) -> Result<String, ShaderError> {
	let body = emit(expression, &uniform)?;
	let uniforms: String = expression
		.free_names()
		.into_iter()
		.filter(|name| *name != COORDINATE)
		.map(|name| format!("uniform vec2 {};\n", uniform(name)))
		.collect();
	Ok(FRAGMENT_TEMPLATE.replace("{{uniforms}}", &uniforms).replace("{{expression}}", &body))
}

/// Where the editor hands over its text. Every change recompiles the program
/// and keeps the last expression that compiled, so the renderer can re-link
/// its shader before the next draw.
#[derive(Debug, Default)]
pub struct ShaderSource {
	text:       String,
	expression: Option<Box<Expression>>,
	shader:     Option<String>,
}

impl ShaderSource {
	pub fn new() -> Self { Self::default() }

	/// Compile every non-blank line of `text` and return the shader expression
	/// of the last one. On error the previous state is kept.
	pub fn on_source_changed(&mut self, text: &str) -> Result<String, ComplotError> {
		let mut last = None;
		for (number, line) in text.lines().enumerate().filter(|(_, line)| !line.trim().is_empty()) {
			let expression = crate::parse(line)?;
			let shader = compile(&expression)?;
			tracing::debug!(line = number + 1, %shader, "generated shader expression");
			last = Some((expression, shader));
		}
		let Some((expression, shader)) = last else {
			return Err(ParseError::new(1, ParseErrorType::ExpectedExpression).into());
		};
		self.text = text.to_string();
		self.expression = Some(expression);
		self.shader = Some(shader.clone());
		Ok(shader)
	}

	/// The text of the last successful change.
	pub fn text(&self) -> &str { &self.text }

	/// The shader expression of the last successful change.
	pub fn shader(&self) -> Option<&str> { self.shader.as_deref() }

	/// A fragment shader for the last successful change.
	pub fn fragment_shader(&self) -> Option<String> {
		self.expression.as_deref().and_then(|expression| fragment_shader(expression).ok())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn shader(input: &str) -> Result<String, ShaderError> { compile(&crate::parse(input).unwrap()) }

	#[test]
	fn compile_leaves() {
		assert_eq!(shader("2").unwrap(), "vec2(2.0, 0.0)");
		assert_eq!(shader("0.5").unwrap(), "vec2(0.5, 0.0)");
		assert_eq!(shader("z").unwrap(), "z");
	}

	#[test]
	fn compile_arithmetic() {
		assert_eq!(shader("z + 1").unwrap(), "(z+vec2(1.0, 0.0))");
		assert_eq!(shader("-z").unwrap(), "(vec2(0.0, 0.0)-z)");
		assert_eq!(shader("z*z").unwrap(), "vec2((z).x*(z).x-(z).y*(z).y, (z).x*(z).y+(z).x*(z).y)");
		assert_eq!(shader("2 c").unwrap(), "vec2((vec2(2.0, 0.0)).x*(c).x-(vec2(2.0, 0.0)).y*(c).y, (vec2(2.0, 0.0)).x*(c).y+(c).x*(vec2(2.0, 0.0)).y)");
	}

	#[test]
	fn compile_rejects_unsupported_operators() {
		assert_eq!(shader("1/z"), Err(ShaderError::UnsupportedOperation(Operator::Divide)));
		assert_eq!(shader("z^2"), Err(ShaderError::UnsupportedOperation(Operator::Power)));
		assert_eq!(shader("w = z"), Err(ShaderError::UnsupportedOperation(Operator::Assign)));
		assert_eq!(shader("sin(z)"), Err(ShaderError::UnsupportedOperation(Operator::Call)));
		assert_eq!(shader("z + 1/z"), Err(ShaderError::UnsupportedOperation(Operator::Divide)));
	}

	#[test]
	fn fragment_shader_declares_free_names() {
		let source = fragment_shader(&crate::parse("z z + c").unwrap()).unwrap();
		assert!(source.contains("varying vec2 z;"));
		assert!(source.contains("uniform vec2 u_c;"));
		assert!(!source.contains("uniform vec2 z;"));
		assert!(!source.contains("uniform vec2 u_z;"));
		assert!(source.contains("vec2 w = (vec2("));
		assert!(source.contains("+u_c);"));
		assert!(!source.contains("{{"));
	}

	#[test]
	fn fragment_shader_keeps_names_apart_from_glsl() {
		let source = fragment_shader(&crate::parse("z + hue + length + main").unwrap()).unwrap();
		assert!(source.contains("uniform vec2 u_hue;\nuniform vec2 u_length;\nuniform vec2 u_main;\n"));
		assert!(source.contains("vec2 w = (((z+u_hue)+u_length)+u_main);"));
		assert!(!source.contains("uniform vec2 hue;"));
		assert!(!source.contains("uniform vec2 length;"));
		assert_eq!(compile(&crate::parse("z + hue").unwrap()).unwrap(), "(z+hue)");
	}

	#[test]
	fn source_changes() {
		let mut source = ShaderSource::new();
		assert_eq!(source.on_source_changed("z\n\n  z + 1  \n").unwrap(), "(z+vec2(1.0, 0.0))");
		assert_eq!(source.shader(), Some("(z+vec2(1.0, 0.0))"));
		assert!(source.fragment_shader().is_some_and(|text| text.contains("vec2 w = (z+vec2(1.0, 0.0));")));

		assert!(matches!(source.on_source_changed("z\n1/z"), Err(ComplotError::ShaderError(_))));
		assert!(matches!(source.on_source_changed("z +"), Err(ComplotError::ParseError(_))));
		assert!(matches!(source.on_source_changed(" \n "), Err(ComplotError::ParseError(_))));
		assert_eq!(source.shader(), Some("(z+vec2(1.0, 0.0))"));
		assert_eq!(source.text(), "z\n\n  z + 1  \n");
	}
}
