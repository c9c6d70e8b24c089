use serde::Serialize;

/// Complex number scalar with 64-bit real and imaginary parts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Complex {
	/// Real part.
	pub re: f64,
	/// Imaginary part.
	pub im: f64,
}

impl Complex {
	/// New complex scalar from real and imaginary parts.
	pub fn new(re: f64, im: f64) -> Complex {
		Complex { re, im }
	}
}

impl std::fmt::Display for Complex {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.re)?;
		if self.im > 0.0 {
			write!(f, "+{}i", self.im)?;
		} else if self.im < 0.0 {
			write!(f, "{}i", self.im)?;
		}
		Ok(())
	}
}
