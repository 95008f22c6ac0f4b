/*!
# Puny: Errors
*/

use argyle::ArgyleError;
use puny_codec::PunyError;
use std::fmt;



#[derive(Debug)]
/// # Error.
pub(super) enum CliError {
	/// # Argument Parsing.
	Argue(ArgyleError),

	/// # Codec Failure.
	Codec(PunyError),

	/// # No Input.
	NoInput,

	/// # STDIN Read Issue.
	Read,

	/// # Non-Unicode Argument.
	Utf8,

	/// # STDOUT Write Issue.
	Write,
}

impl std::error::Error for CliError {}

impl fmt::Display for CliError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Argue(src) => fmt::Display::fmt(src, f),
			Self::Codec(src) => write!(f, "{} \x1b[2m({})\x1b[0m", self.as_str(), src.as_str()),
			_ => f.write_str(self.as_str()),
		}
	}
}

impl From<ArgyleError> for CliError {
	#[inline]
	fn from(src: ArgyleError) -> Self { Self::Argue(src) }
}

impl From<PunyError> for CliError {
	#[inline]
	fn from(src: PunyError) -> Self { Self::Codec(src) }
}

impl CliError {
	/// # As String Slice.
	pub(super) const fn as_str(&self) -> &'static str {
		match self {
			Self::Argue(_) => "Invalid CLI arguments.",
			Self::Codec(_) => "Unable to translate label.",
			Self::NoInput => "No labels were provided.",
			Self::Read => "Unable to read STDIN.",
			Self::Utf8 => "Arguments must be valid UTF-8.",
			Self::Write => "Unable to write to STDOUT.",
		}
	}
}
