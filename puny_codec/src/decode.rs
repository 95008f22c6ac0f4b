/*!
# Puny: Decoding
*/

#![allow(clippy::cast_lossless)]
#![allow(clippy::integer_division)]
#![allow(clippy::cast_possible_truncation)]

use crate::bootstring::{
	adapt,
	decode_digit,
	threshold,
	BASE,
	DELIMITER,
	INITIAL_BIAS,
	INITIAL_N,
};
use crate::PunyError;
use std::str::Chars;



#[derive(Debug, Default)]
/// # Decoder.
///
/// Decoding reconstructs characters out of order, so a scratch list of
/// `(position, char)` insertions has to be built before anything can be
/// yielded. Holding that list here — rather than allocating inside
/// [`decode`](Decoder::decode) — lets callers reuse one buffer across many
/// labels.
///
/// ## Examples
///
/// ```
/// use puny_codec::Decoder;
///
/// let mut decoder = Decoder::default();
/// let decoded: String = decoder.decode("Mnchen-3ya").unwrap().collect();
/// assert_eq!(decoded, "München");
/// ```
pub struct Decoder {
	insertions: Vec<(usize, char)>,
}

impl Decoder {
	/// # Decode a Label.
	///
	/// Split the label at its final delimiter, decode the tail, and return
	/// an iterator over the reconstructed characters.
	///
	/// ## Errors
	///
	/// * [`PunyError::InvalidCharacter`] if the tail holds anything outside `a-z0-9`, or the literal run isn't ASCII;
	/// * [`PunyError::Overflow`] if a delta or digit weight exceeds the safe integer bound;
	/// * [`PunyError::MalformedInput`] if the tail ends mid-integer or lands outside the Unicode scalar range.
	pub fn decode<'a>(&'a mut self, input: &'a str) -> Result<Decode<'a>, PunyError> {
		self.insertions.clear();

		// The literal run sits before the *last* delimiter. A delimiter in
		// the first position can't follow any literals, so it belongs to
		// the tail. (The reference decoder reads it the same way.)
		let (basic, tail) = match input.rfind(DELIMITER) {
			None | Some(0) => ("", input),
			Some(pos) => (&input[..pos], &input[pos + 1..]),
		};

		if ! basic.is_ascii() { return Err(PunyError::InvalidCharacter); }

		let mut out_len = basic.len() as u32;
		let mut n = INITIAL_N;
		let mut bias = INITIAL_BIAS;
		let mut i: u32 = 0;
		let mut bytes = tail.bytes();
		while let Some(first) = bytes.next() {
			let old_i = i;
			let mut weight: u32 = 1;
			let mut k = BASE;
			let mut byte = first;

			// Consume one generalized variable-length integer; a digit
			// below its positional threshold closes it out.
			loop {
				let digit = decode_digit(byte).ok_or(PunyError::InvalidCharacter)?;

				if digit > (u32::MAX - i) / weight {
					return Err(PunyError::Overflow);
				}
				i += digit * weight;

				let t = threshold(k, bias);
				if digit < t { break; }

				if weight > u32::MAX / (BASE - t) {
					return Err(PunyError::Overflow);
				}
				weight *= BASE - t;
				k += BASE;
				byte = bytes.next().ok_or(PunyError::MalformedInput)?;
			}

			bias = adapt(i - old_i, out_len + 1, old_i == 0);

			// The running index wraps around the (about-to-grow) output;
			// each full lap bumps the code point instead.
			if i / (out_len + 1) > u32::MAX - n {
				return Err(PunyError::Overflow);
			}
			n += i / (out_len + 1);
			i %= out_len + 1;

			// Surrogates and anything past U+10FFFF can't have come from a
			// real encode.
			let ch = char::from_u32(n).ok_or(PunyError::MalformedInput)?;

			// Earlier insertions at or after this slot slide right one.
			for (idx, _) in &mut self.insertions {
				if i as usize <= *idx { *idx += 1; }
			}
			self.insertions.push((i as usize, ch));
			out_len += 1;
			i += 1;
		}

		self.insertions.sort_by_key(|(idx, _)| *idx);
		Ok(Decode {
			basic: basic.chars(),
			insertions: &self.insertions,
			inserted: 0,
			position: 0,
			len: basic.len() + self.insertions.len(),
		})
	}
}



#[derive(Debug)]
/// # Decode Iterator.
///
/// Merge the literal run with the decoded insertions, yielding the final
/// characters in order. Returned by [`Decoder::decode`].
pub struct Decode<'a> {
	basic: Chars<'a>,
	insertions: &'a [(usize, char)],
	inserted: usize,
	position: usize,
	len: usize,
}

impl Iterator for Decode<'_> {
	type Item = char;

	fn next(&mut self) -> Option<Self::Item> {
		match self.insertions.get(self.inserted) {
			// An insertion owns this slot.
			Some(&(pos, ch)) if pos == self.position => {
				self.inserted += 1;
				self.position += 1;
				Some(ch)
			},
			// Otherwise the next literal does.
			_ => {
				let ch = self.basic.next()?;
				self.position += 1;
				Some(ch)
			},
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.len - self.position;
		(len, Some(len))
	}
}

impl ExactSizeIterator for Decode<'_> {
	#[inline]
	fn len(&self) -> usize { self.len - self.position }
}
