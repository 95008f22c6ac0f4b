/*!
# Puny: Errors
*/

use std::fmt;



#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
/// # Error.
///
/// The codec never truncates, wraps, or substitutes; anything it cannot
/// represent faithfully comes back as one of these.
pub enum PunyError {
	/// # Invalid Character.
	///
	/// The encoded tail held a byte outside `a-z0-9`, or the literal run
	/// before the delimiter wasn't ASCII.
	InvalidCharacter,

	/// # Arithmetic Overflow.
	///
	/// A delta or digit weight grew past the safe integer bound. Only
	/// absurdly long or hostile inputs can trigger this.
	Overflow,

	/// # Malformed Input.
	///
	/// The input stopped in the middle of a variable-length integer, or
	/// decoded to a value no Unicode scalar can hold.
	MalformedInput,
}

impl std::error::Error for PunyError {}

impl fmt::Display for PunyError {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl PunyError {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::InvalidCharacter => "Invalid Punycode character.",
			Self::Overflow => "Punycode value overflowed the safe range.",
			Self::MalformedInput => "Malformed Punycode input.",
		}
	}
}
