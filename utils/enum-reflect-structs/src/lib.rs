//! `enum-reflect-structs` parses C-style enumerator-list declarations into
//! name/value tables.
//!
//! This is the algorithmic core behind the `enum-reflect` crate: the
//! `declare_enum!` macro stringifies an enum body and hands the text to
//! [`EnumTable::parse`], once per enumeration, on first use. The table can
//! also be built directly from any declaration string, which additionally
//! supports inputs a Rust `enum` cannot express, such as duplicate values.

use serde::{Deserialize, Serialize};

mod parse;

/// Name returned by value lookups that match no enumerator.
pub const UNKNOWN_VALUE: &str = "unknown-value";

/// The parsed form of one enumerator list: a value sequence and an
/// index-aligned name sequence.
///
/// `names()[i]` is the symbolic name of `values()[i]`. Both sequences keep
/// declaration order, duplicates included; lookups resolve to the earliest
/// match. An entry with an empty name marks an enumerator whose explicit
/// value literal was malformed.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EnumTable {
	values: Vec<u64>,
	names: Vec<String>,
}

impl EnumTable {
	/// Parses a comma-separated enumerator list like
	/// `"Windows, Ubuntu = 50, MacOS"`.
	///
	/// Bare identifiers continue the running value (starting at 0), an
	/// `= <unsigned base-10 literal>` assignment overrides it. Never fails:
	/// a malformed assignment degrades to an unnamed zero-valued entry.
	pub fn parse(decl: &str) -> Self {
		let (values, names) = parse::split_enumerators(decl);
		EnumTable { values, names }
	}

	/// Number of enumerators.
	pub fn count(&self) -> usize { self.names.len() }

	/// The resolved values in declaration order.
	pub fn values(&self) -> &[u64] { &self.values }

	/// The symbolic names in declaration order.
	pub fn names(&self) -> &[String] { &self.names }

	/// Name of the first enumerator with this value, or [`UNKNOWN_VALUE`]
	/// if there is none.
	pub fn name_of(&self, value: u64) -> &str {
		self.get_name(value).unwrap_or(UNKNOWN_VALUE)
	}

	/// Value of the first enumerator with this name.
	///
	/// Faithful to the reference behavior: an unknown name falls back to
	/// the first declared value instead of reporting the miss. Use
	/// [`get_value`](Self::get_value) to tell the two cases apart.
	///
	/// # Panics
	/// Panics if the table is empty.
	pub fn value_of(&self, name: &str) -> u64 {
		self.get_value(name).unwrap_or(self.values[0])
	}

	/// Name of the first enumerator with this value.
	pub fn get_name(&self, value: u64) -> Option<&str> {
		let i = self.values.iter().position(|&v| v == value)?;
		Some(&self.names[i])
	}

	/// Value of the first enumerator with this name (exact, case-sensitive
	/// match).
	pub fn get_value(&self, name: &str) -> Option<u64> {
		let i = self.names.iter().position(|n| n == name)?;
		Some(self.values[i])
	}
}
