//! The GLSL text and the interpreter must compute the same function.
//!
//! The generated text is evaluated by a small evaluator for the subset of
//! GLSL the shader back end emits: `vec2(a, b)` constructors, `.x`/`.y`
//! swizzles, float literals, names and `+ - *`.

use std::{iter::Peekable, str::Chars};

use complot::{Complex, Environment};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Glsl {
	Float(f64),
	Vec2(f64, f64),
}

impl Glsl {
	fn combine(self, other: Glsl, operation: fn(f64, f64) -> f64) -> Glsl {
		match (self, other) {
			(Glsl::Float(a), Glsl::Float(b)) => Glsl::Float(operation(a, b)),
			(Glsl::Vec2(a, b), Glsl::Vec2(c, d)) => Glsl::Vec2(operation(a, c), operation(b, d)),
			(left, right) => panic!("mismatched operands {left:?} {right:?}"),
		}
	}
}

struct GlslEvaluator<'a> {
	chars:     Peekable<Chars<'a>>,
	variables: &'a [(&'a str, Complex)],
}

impl<'a> GlslEvaluator<'a> {
	fn evaluate(source: &'a str, variables: &'a [(&'a str, Complex)]) -> Glsl {
		let mut evaluator = Self { chars: source.chars().peekable(), variables };
		let value = evaluator.expression();
		evaluator.skip_whitespace();
		assert_eq!(evaluator.chars.next(), None, "trailing input in {source}");
		value
	}

	fn skip_whitespace(&mut self) {
		while self.chars.peek().is_some_and(|c| c.is_whitespace()) {
			self.chars.next();
		}
	}

	fn eat(&mut self, expected: char) -> bool {
		self.skip_whitespace();
		if self.chars.peek() == Some(&expected) {
			self.chars.next();
			return true;
		}
		false
	}

	fn expect(&mut self, expected: char) {
		assert!(self.eat(expected), "expected '{expected}'");
	}

	fn expression(&mut self) -> Glsl {
		let mut value = self.term();
		loop {
			if self.eat('+') {
				value = value.combine(self.term(), |a, b| a + b);
			} else if self.eat('-') {
				value = value.combine(self.term(), |a, b| a - b);
			} else {
				return value;
			}
		}
	}

	fn term(&mut self) -> Glsl {
		let mut value = self.swizzle();
		while self.eat('*') {
			value = value.combine(self.swizzle(), |a, b| a * b);
		}
		value
	}

	fn swizzle(&mut self) -> Glsl {
		let value = self.primary();
		if !self.eat('.') {
			return value;
		}
		let Glsl::Vec2(x, y) = value else { panic!("swizzle on a float") };
		match self.chars.next() {
			Some('x') => Glsl::Float(x),
			Some('y') => Glsl::Float(y),
			other => panic!("unknown component {other:?}"),
		}
	}

	fn primary(&mut self) -> Glsl {
		self.skip_whitespace();
		if self.eat('(') {
			let value = self.expression();
			self.expect(')');
			return value;
		}
		match self.chars.peek() {
			Some(c) if c.is_ascii_digit() => self.number(),
			Some(c) if c.is_ascii_alphabetic() => {
				let name = self.word();
				if name == "vec2" {
					self.expect('(');
					let Glsl::Float(x) = self.expression() else { panic!("vec2 of a vector") };
					self.expect(',');
					let Glsl::Float(y) = self.expression() else { panic!("vec2 of a vector") };
					self.expect(')');
					return Glsl::Vec2(x, y);
				}
				let (_, value) = self.variables.iter().find(|(known, _)| *known == name).expect("undeclared name");
				Glsl::Vec2(value.real(), value.imag())
			}
			other => panic!("unexpected {other:?}"),
		}
	}

	fn word(&mut self) -> String {
		let mut word = String::new();
		while let Some(c) = self.chars.peek().copied().filter(|c| c.is_ascii_alphanumeric()) {
			word.push(c);
			self.chars.next();
		}
		word
	}

	fn number(&mut self) -> Glsl {
		let mut literal = String::new();
		while let Some(c) = self.chars.peek().copied() {
			let exponent_sign = (c == '-' || c == '+') && literal.ends_with('e');
			if !(c.is_ascii_digit() || c == '.' || c == 'e' || exponent_sign) {
				break;
			}
			literal.push(c);
			self.chars.next();
		}
		Glsl::Float(literal.parse().expect("float literal"))
	}
}

fn agree(interpreted: Complex, shaded: Glsl) -> bool {
	let Glsl::Vec2(x, y) = shaded else { return false };
	let tolerance = 1e-9 * (1.0 + interpreted.norm());
	(interpreted.real() - x).abs() <= tolerance && (interpreted.imag() - y).abs() <= tolerance
}

fn check(text: &str, z: Complex, c: Complex) -> Result<(), TestCaseError> {
	let mut environment = Environment::new().with("z", z).unwrap().with("c", c).unwrap();
	let interpreted = complot::evaluate(text, &mut environment).unwrap().as_number().unwrap();
	let shader = complot::compile_to_shader_text(text).unwrap();
	let shaded = GlslEvaluator::evaluate(&shader, &[("z", z), ("c", c)]);
	prop_assert!(agree(interpreted, shaded), "{text}: {interpreted:?} vs {shaded:?}\n{shader}");
	Ok(())
}

fn literal() -> impl Strategy<Value = String> {
	(0u32..20, 0u32..100).prop_map(|(whole, fraction)| format!("{whole}.{fraction:02}"))
}

/// Expressions built from `+ - *`, literals and the names `z` and `c`.
fn arithmetic() -> impl Strategy<Value = String> {
	let leaf = prop_oneof![
		literal(),
		Just("z".to_string()),
		Just("c".to_string()),
		(literal(), prop_oneof![Just("z"), Just("c")]).prop_map(|(number, name)| format!("{number} {name}")),
	];
	leaf.prop_recursive(4, 24, 2, |inner| {
		prop_oneof![
			(inner.clone(), inner.clone()).prop_map(|(a, b)| format!("({a} + {b})")),
			(inner.clone(), inner.clone()).prop_map(|(a, b)| format!("({a} - {b})")),
			(inner.clone(), inner.clone()).prop_map(|(a, b)| format!("{a} * {b}")),
			inner.prop_map(|a| format!("(-{a})")),
		]
	})
}

fn coordinate() -> impl Strategy<Value = Complex> { (-3.0..3.0f64, -3.0..3.0f64).prop_map(|(re, im)| Complex::new(re, im)) }

#[test]
fn square_on_a_grid() {
	for x in -4..=4 {
		for y in -4..=4 {
			let z = Complex::new(x as f64 * 0.5, y as f64 * 0.5);
			check("z*z", z, Complex::ZERO).unwrap();
			check("z z - 2 z + 1", z, Complex::ZERO).unwrap();
			check("-z + c", z, Complex::new(0.25, -1.5)).unwrap();
		}
	}
}

proptest! {
	#[test]
	fn shader_matches_interpreter(text in arithmetic(), z in coordinate(), c in coordinate()) {
		check(&text, z, c)?;
	}
}
