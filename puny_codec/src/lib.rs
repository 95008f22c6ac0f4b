/*!
# Puny: Codec

This crate provides a pure, allocation-light implementation of the Punycode
transfer encoding from [RFC 3492](https://datatracker.ietf.org/doc/html/rfc3492),
the scheme the DNS uses to squeeze internationalized labels into its ASCII-only
repertoire.

It deals in bare labels only. The `xn--` ACE prefix, IDNA/UTS-46 mapping and
normalization, case folding, and label-length policing all belong to the layer
above; strip and re-add them yourself.

Encoding and decoding are deterministic pure functions. There are no globals
and no shared state, so calls may be made freely from any number of threads.

One departure from the RFC worth knowing about: a label with no extended
characters at all encodes to itself, with no trailing delimiter. (The RFC
variant — `"London"` becoming `"London-"` — still decodes fine.)



## Examples

```
// The convenience wrappers run String-to-String:
assert_eq!(puny_codec::encode("München").unwrap(), "Mnchen-3ya");
assert_eq!(puny_codec::decode("Mnchen-3ya").unwrap(), "München");

// All-ASCII labels are their own encoding:
assert_eq!(puny_codec::encode("london").unwrap(), "london");

// Malformed inputs are refused rather than mangled:
assert!(puny_codec::decode("abc-!!!").is_err());
```

Callers feeding many labels through can reuse a [`Decoder`] buffer and/or
append onto an existing string with [`encode_into`]:

```
use puny_codec::Decoder;

let mut decoder = Decoder::default();
let mut out = String::with_capacity(256);

out.push_str("xn--");
puny_codec::encode_into(&"bücher".chars(), &mut out).unwrap();
assert_eq!(out, "xn--bcher-kva");

let back: String = decoder.decode("bcher-kva").unwrap().collect();
assert_eq!(back, "bücher");
```
*/

#![warn(clippy::filetype_is_file)]
#![warn(clippy::integer_division)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::suboptimal_flops)]
#![warn(clippy::unneeded_field_pattern)]
#![warn(macro_use_extern_crate)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]

#![allow(clippy::module_name_repetitions)]



mod bootstring;
mod decode;
mod encode;
mod error;

pub use decode::{
	Decode,
	Decoder,
};
pub use encode::encode_into;
pub use error::PunyError;



/// # Encode a Label.
///
/// Punycode a Unicode label into its ASCII form, sans ACE prefix.
///
/// ## Examples
///
/// ```
/// assert_eq!(puny_codec::encode("bücher").unwrap(), "bcher-kva");
///
/// // ASCII needs no encoding, so none happens:
/// assert_eq!(puny_codec::encode("books").unwrap(), "books");
/// ```
///
/// ## Errors
///
/// Returns [`PunyError::Overflow`] if a delta cannot be accumulated within
/// the safe integer bound.
pub fn encode(src: &str) -> Result<String, PunyError> {
	let mut out = String::with_capacity(src.len());
	encode_into(&src.chars(), &mut out)?;
	Ok(out)
}

/// # Decode a Label.
///
/// Reverse [`encode`], turning a Punycode ASCII label (sans ACE prefix)
/// back into the original Unicode string.
///
/// ## Examples
///
/// ```
/// assert_eq!(puny_codec::decode("bcher-kva").unwrap(), "bücher");
/// ```
///
/// ## Errors
///
/// Returns [`PunyError::InvalidCharacter`], [`PunyError::Overflow`], or
/// [`PunyError::MalformedInput`] as appropriate; see [`Decoder::decode`].
pub fn decode(src: &str) -> Result<String, PunyError> {
	let mut decoder = Decoder::default();
	let out = decoder.decode(src)?.collect();
	Ok(out)
}
