//! The single value domain of the language.
//!
//! `Complex` wraps [`num_complex::Complex64`] so that the language decides
//! what a division by zero or `0 ^ w` means instead of quietly producing
//! `NaN`, and so that values render the way the REPL prints them.

use std::{fmt::Display, ops::{Add, Mul, Neg, Sub}};

use num_complex::Complex64;

use crate::error::interpreter::InterpreterError;

/// An immutable `real + imag·i` pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex(Complex64);

impl Complex {
	pub const I: Self = Self::new(0.0, 1.0);
	pub const ONE: Self = Self::new(1.0, 0.0);
	pub const ZERO: Self = Self::new(0.0, 0.0);

	pub const fn new(real: f64, imag: f64) -> Self { Self(Complex64::new(real, imag)) }

	pub fn real(&self) -> f64 { self.0.re }

	pub fn imag(&self) -> f64 { self.0.im }

	pub fn is_zero(&self) -> bool { self.0.re == 0.0 && self.0.im == 0.0 }

	pub fn conj(self) -> Self { Self(self.0.conj()) }

	/// `|self|`
	pub fn norm(&self) -> f64 { self.0.norm() }

	/// Complex division, the zero divisor is an error rather than `NaN`.
	pub fn checked_div(self, divisor: Self) -> Result<Self, InterpreterError> {
		if divisor.is_zero() {
			return Err(InterpreterError::DivisionByZero);
		}
		Ok(Self(self.0 / divisor.0))
	}

	/// `self ^ exponent` over the complex plane.
	///
	/// Integral real exponents use repeated multiplication so that `2 ^ 3` is
	/// exactly `8` and `i ^ 2` exactly `-1`. A positive real base with a real
	/// exponent stays on the real axis. Everything else takes the principal
	/// branch, `exp(exponent · ln(self))`.
	///
	/// A zero base gives `1` for a zero exponent, `0` when `Re(exponent) > 0`
	/// and [`InterpreterError::DivisionByZero`] otherwise.
	pub fn pow(self, exponent: Self) -> Result<Self, InterpreterError> {
		if self.is_zero() {
			return if exponent.is_zero() {
				Ok(Self::ONE)
			} else if exponent.real() > 0.0 {
				Ok(Self::ZERO)
			} else {
				Err(InterpreterError::DivisionByZero)
			};
		}
		if exponent.imag() == 0.0 {
			let n = exponent.real();
			if n.fract() == 0.0 && n.abs() <= i32::MAX as f64 {
				return Ok(Self(self.0.powi(n as i32)));
			}
			if self.imag() == 0.0 && self.real() > 0.0 {
				return Ok(Self::new(self.real().powf(n), 0.0));
			}
		}
		Ok(Self(self.0.powc(exponent.0)))
	}

	/// Principal square root.
	pub fn sqrt(self) -> Self { Self(self.0.sqrt()) }

	pub fn cos(self) -> Self { Self(self.0.cos()) }

	pub fn sin(self) -> Self { Self(self.0.sin()) }

	pub fn tan(self) -> Self { Self(self.0.tan()) }
}

impl From<f64> for Complex {
	fn from(real: f64) -> Self { Self::new(real, 0.0) }
}

impl From<Complex64> for Complex {
	fn from(value: Complex64) -> Self { Self(value) }
}

impl From<Complex> for Complex64 {
	fn from(value: Complex) -> Self { value.0 }
}

impl Add for Complex {
	type Output = Self;

	fn add(self, rhs: Self) -> Self { Self(self.0 + rhs.0) }
}

impl Sub for Complex {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self { Self(self.0 - rhs.0) }
}

impl Mul for Complex {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self {
		let (a, b, c, d) = (self.real(), self.imag(), rhs.real(), rhs.imag());
		Self::new(a * c - b * d, a * d + b * c)
	}
}

impl Neg for Complex {
	type Output = Self;

	fn neg(self) -> Self { Self(-self.0) }
}

/// Renders `0`, `2.5`, `i`, `-i`, `3-2i`, `1+i`: the real part is left out
/// when zero and a unit imaginary coefficient is left implicit.
impl Display for Complex {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let (a, mut b) = (self.real(), self.imag());
		if a == 0.0 && b == 0.0 {
			return write!(f, "0");
		}
		if a != 0.0 {
			write!(f, "{a}")?;
		}
		if b != 0.0 {
			if b < 0.0 {
				write!(f, "-")?;
				b = -b;
			} else if a != 0.0 {
				write!(f, "+")?;
			}
			if b != 1.0 {
				write!(f, "{b}")?;
			}
			write!(f, "i")?;
		}
		Ok(())
	}
}
