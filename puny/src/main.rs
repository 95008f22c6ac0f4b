/*!
# `Puny`

Puny converts Unicode labels to and from their Punycode (RFC 3492) ASCII
forms, straight from the command line.

It works on bare labels — no `xn--` prefixes, no dot-splitting, no IDNA
normalization — making it handy for eyeballing what the codec itself is
doing, or for batch-translating a list of labels.



## Usage

Pass a single label with `-t`:

```bash
puny -t münchen        # mnchen-3ya
puny -d -t mnchen-3ya  # münchen
```

Or pipe labels in, one per line:

```bash
cat labels.txt | puny > encoded.txt
```

The following flags and options are available:

```bash
-d, --decode        Decode Punycode back to Unicode instead of encoding.
-h, --help          Print help information.
-q, --quiet         Suppress the summary after batch (STDIN) processing.
-t, --text <LABEL>  Translate this label instead of reading lines from
                    STDIN.
-V, --version       Print program version.
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



mod err;

use argyle::{
	Argue,
	ArgyleError,
	FLAG_HELP,
	FLAG_VERSION,
};
use dactyl::NiceU64;
use err::CliError;
use fyi_msg::Msg;
use trimothy::TrimMut;



/// Main.
fn main() {
	match _main() {
		Err(CliError::Argue(ArgyleError::WantsVersion)) => {
			println!(concat!("Puny v", env!("CARGO_PKG_VERSION")));
		},
		Err(CliError::Argue(ArgyleError::WantsHelp)) => {
			helper();
		},
		Err(e) => {
			Msg::error(e.to_string()).die(1);
		},
		Ok(()) => {},
	}
}

#[inline]
/// Actual Main.
fn _main() -> Result<(), CliError> {
	// Parse CLI arguments.
	let args = Argue::new(FLAG_VERSION | FLAG_HELP)?;
	let decoding = args.switch2(b"-d", b"--decode");

	// A label on the command line is a one-shot translation.
	if let Some(raw) = args.option2_os(b"-t", b"--text") {
		let label = raw.to_str().ok_or(CliError::Utf8)?;
		println!("{}", translate(label, decoding)?);
		Ok(())
	}
	// Otherwise work through STDIN line by line.
	else {
		batch(decoding, args.switch2(b"-q", b"--quiet"))
	}
}

/// # Translate One Label.
fn translate(label: &str, decoding: bool) -> Result<String, CliError> {
	if decoding { puny_codec::decode(label).map_err(CliError::Codec) }
	else { puny_codec::encode(label).map_err(CliError::Codec) }
}

/// # Batch Translation.
///
/// Read labels from STDIN — one per line, blank lines skipped — and print
/// the translations to STDOUT in the same order. The first untranslatable
/// label aborts the run.
fn batch(decoding: bool, quiet: bool) -> Result<(), CliError> {
	use std::io::{
		BufRead,
		Write,
	};

	let mut total: u64 = 0;
	let reader = std::io::stdin();
	let writer = std::io::stdout();
	let mut handle = writer.lock();

	for line in reader.lock().lines() {
		let mut line = line.map_err(|_| CliError::Read)?;
		line.trim_mut();
		if line.is_empty() { continue; }

		let out = translate(&line, decoding)?;
		handle.write_all(out.as_bytes())
			.and_then(|_| handle.write_all(b"\n"))
			.map_err(|_| CliError::Write)?;
		total += 1;
	}

	handle.flush().map_err(|_| CliError::Write)?;
	if total == 0 { return Err(CliError::NoInput); }

	// Summarize what we've done.
	if ! quiet {
		Msg::success(
			format!(
				"{} labels translated.",
				NiceU64::from(total).as_str()
			)
		).print();
	}

	Ok(())
}

#[cold]
/// Print Help.
fn helper() {
	println!(concat!(
		r#"
   xn--?      "#, "\x1b[38;5;199mPuny\x1b[0;38;5;69m v", env!("CARGO_PKG_VERSION"), "\x1b[0m", r#"
  (o  o)      Punycode (RFC 3492) encoding and
   \__/       decoding for bare DNS-style labels.

USAGE:
    puny [FLAGS] [OPTIONS]

FLAGS:
    -d, --decode       Decode Punycode back to Unicode instead of encoding.
    -h, --help         Print help information.
    -q, --quiet        Suppress the summary after batch (STDIN) processing.
    -V, --version      Print program version.

OPTIONS:
    -t, --text <LABEL>    Translate this label instead of reading lines
                          from STDIN.

With no --text, labels are read from STDIN, one per line, and the
translations are printed to STDOUT in the same order.
"#
	));
}
