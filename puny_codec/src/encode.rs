/*!
# Puny: Encoding
*/

#![allow(clippy::cast_lossless)]
#![allow(clippy::integer_division)]
#![allow(clippy::cast_possible_truncation)]

use crate::bootstring::{
	adapt,
	encode_digit,
	threshold,
	BASE,
	DELIMITER,
	INITIAL_BIAS,
	INITIAL_N,
};
use crate::PunyError;
use std::str::Chars;



/// # Encode Onto a Buffer.
///
/// Punycode the characters and append the result to `output`, returning an
/// error if a delta overflows the safe range. (For that to happen the label
/// would have to be thousands of characters long, but hostile inputs are a
/// thing.)
///
/// ASCII characters pass through as-are; if there is nothing *but* ASCII,
/// the label is its own encoding and no delimiter is appended.
///
/// ## Examples
///
/// ```
/// let mut out = String::new();
/// puny_codec::encode_into(&"bücher".chars(), &mut out).unwrap();
/// assert_eq!(out, "bcher-kva");
/// ```
///
/// ## Errors
///
/// Returns [`PunyError::Overflow`](crate::PunyError::Overflow) if a delta
/// cannot be accumulated without exceeding the safe integer bound.
pub fn encode_into(input: &Chars<'_>, output: &mut String) -> Result<(), PunyError> {
	// Copy the literal run up front; a single pass also gives us both
	// counts we'll need.
	let mut len: u32 = 0;
	let mut basic: u32 = 0;
	for ch in input.clone() {
		len += 1;
		if ch.is_ascii() {
			output.push(ch);
			basic += 1;
		}
	}

	// All ASCII? Then we're already done.
	if basic == len { return Ok(()); }

	if basic > 0 { output.push(DELIMITER); }

	let mut n = INITIAL_N;
	let mut delta: u32 = 0;
	let mut bias = INITIAL_BIAS;
	let mut handled = basic;
	while handled < len {
		// The smallest unhandled code point decides the next state jump.
		let m = input.clone()
			.map(|ch| ch as u32)
			.filter(|ch| n <= *ch)
			.min()
			.unwrap();

		if m - n > (u32::MAX - delta) / (handled + 1) {
			return Err(PunyError::Overflow);
		}
		delta += (m - n) * (handled + 1);
		n = m;

		for ch in input.clone().map(|ch| ch as u32) {
			if ch < n {
				delta = delta.checked_add(1).ok_or(PunyError::Overflow)?;
			}
			else if ch == n {
				// Spell out the delta as a variable-length integer, least
				// significant digits first, stopping as soon as a digit
				// falls below its positional threshold.
				let mut q = delta;
				let mut k = BASE;
				loop {
					let t = threshold(k, bias);
					if q < t { break; }

					let digit = t + (q - t) % (BASE - t);
					output.push(encode_digit(digit).ok_or(PunyError::Overflow)?);
					q = (q - t) / (BASE - t);
					k += BASE;
				}

				output.push(encode_digit(q).ok_or(PunyError::Overflow)?);
				bias = adapt(delta, handled + 1, handled == basic);
				delta = 0;
				handled += 1;
			}
		}

		delta += 1;
		n += 1;
	}

	Ok(())
}
