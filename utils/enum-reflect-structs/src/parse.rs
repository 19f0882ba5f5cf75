//! Parser for C-style enumerator lists.
//!
//! The grammar is the one the C family uses inside `enum { … }`: a
//! comma-separated list of identifiers, each optionally assigned an
//! unsigned base-10 literal. An assignment overrides the running value, a
//! bare identifier continues it ("implicit increment, explicit override").

use tracing::debug;

/// Splits `decl` on `,` and resolves every enumerator, returning the value
/// and name sequences in declaration order.
///
/// The split is a literal character split, so value expressions containing
/// a comma are not supported.
pub(crate) fn split_enumerators(decl: &str) -> (Vec<u64>, Vec<String>) {
	let mut values = Vec::new();
	let mut names = Vec::new();
	let mut last_val = 0;
	let mut first = true;
	for token in tokens(decl) {
		let name = parse_enumerator(token.trim(), &mut last_val, first);
		names.push(name.to_string());
		first = false;
		values.push(last_val);
	}
	(values, names)
}

/// The raw comma-separated segments of `decl`.
///
/// A terminating comma does not produce a trailing empty segment and an
/// empty declaration produces no segments at all; empty segments in the
/// middle are kept.
fn tokens(decl: &str) -> impl Iterator<Item = &str> {
	let mut segments: Vec<&str> = decl.split(',').collect();
	if segments.last() == Some(&"") {
		segments.pop();
	}
	segments.into_iter()
}

/// Resolves a single trimmed enumerator token, returning its name.
///
/// `last_val` carries the previously resolved value and is updated to this
/// enumerator's value. With an `=` the right-hand side must be a clean
/// unsigned base-10 literal; leading whitespace before the numeral is
/// skipped, anything after it invalidates the parse. A malformed literal
/// degrades to an unnamed zero-valued entry instead of failing the pass.
fn parse_enumerator<'a>(token: &'a str, last_val: &mut u64, first: bool) -> &'a str {
	if let Some(pos) = token.find('=') {
		match token[pos + 1..].trim_start().parse::<u64>() {
			Ok(value) => {
				*last_val = value;
				token[..pos].trim()
			}
			Err(_) => {
				debug!(token, "enumerator has a malformed value literal");
				*last_val = 0;
				""
			}
		}
	} else {
		*last_val = if first { 0 } else { last_val.wrapping_add(1) };
		token
	}
}
