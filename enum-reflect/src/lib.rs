//! `enum-reflect` gives C-style enumerations free bidirectional conversion
//! between enumerators and their symbolic names.
//!
//! [`declare_enum!`] declares a plain Rust `enum` and, alongside it, a
//! lazily-parsed table of (name, value) pairs extracted from the textual
//! form of the declaration, mimicking reflection in a language that lacks
//! it. The table is built once per enumeration, on first query, behind a
//! thread-safe one-time initializer, and lives for the rest of the process.
//!
//! ```
//! use enum_reflect::{declare_enum, EnumReflect};
//!
//! declare_enum! {
//! 	pub enum OsType { Windows, Ubuntu = 50, MacOS }
//! }
//!
//! assert_eq!(OsType::count(), 3);
//! assert_eq!(OsType::values(), [0, 50, 51]);
//! assert_eq!(OsType::MacOS.name(), "MacOS");
//! assert_eq!(OsType::from_name("MacOS"), 51);
//! ```
//!
//! The faithful query surface never fails: a value without an enumerator
//! maps to the `"unknown-value"` sentinel and an unknown name falls back to
//! the first declared value. The `try_*` variants report misses as
//! [`Error`]s instead.

use thiserror::Error;

pub use enum_reflect_structs::{EnumTable, UNKNOWN_VALUE};

#[doc(hidden)]
pub mod __private {
	pub use once_cell::sync::Lazy;
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
	#[error("No enumerator has the value {0}")]
	UnknownValue(u64),
	#[error("No enumerator is named {0:?}")]
	UnknownName(String),
}

/// Query surface of a [`declare_enum!`] enumeration.
///
/// Everything is answered from [`table`](Self::table), the (name, value)
/// table parsed from the declaration text on first access. Lookups scan in
/// declaration order, so of two enumerators sharing a value the earlier one
/// wins.
pub trait EnumReflect: Copy + Sized {
	/// The parsed table of this enumeration.
	fn table() -> &'static EnumTable;

	/// The discriminant of this enumerator.
	fn value(self) -> u64;

	/// The enumerator with this discriminant.
	fn from_value(value: u64) -> Option<Self>;

	/// Number of enumerators.
	fn count() -> usize { Self::table().count() }

	/// All enumerator values in declaration order.
	fn values() -> &'static [u64] { Self::table().values() }

	/// This enumerator's symbolic name.
	fn name(self) -> &'static str { Self::table().name_of(self.value()) }

	/// Value of the enumerator with this name.
	///
	/// Faithful to the reference behavior: an unknown name falls back to
	/// the first declared value. Use [`try_from_name`](Self::try_from_name)
	/// to detect the miss.
	fn from_name(name: &str) -> u64 { Self::table().value_of(name) }

	/// Name of the first enumerator with this value.
	fn try_name(value: u64) -> Result<&'static str> {
		Self::table().get_name(value).ok_or(Error::UnknownValue(value))
	}

	/// Value of the first enumerator with this name.
	fn try_from_name(name: &str) -> Result<u64> {
		Self::table().get_value(name).ok_or_else(|| Error::UnknownName(name.to_string()))
	}
}

/// Declares an enumeration with free string conversion.
///
/// Expands to the `enum` itself (so the enumerators are ordinary typed
/// constants with the usual C-family discriminant rules) plus an
/// [`EnumReflect`] impl whose table is parsed from the stringified
/// declaration once, on first use.
///
/// ```
/// enum_reflect::declare_enum! {
/// 	/// Talk directions.
/// 	pub enum Direction { In, Out = 10 }
/// }
/// ```
///
/// Variant values must be bare unsigned base-10 literals and variants
/// cannot carry attributes or doc comments; both restrictions come from the
/// textual form the table is parsed from.
#[macro_export]
macro_rules! declare_enum {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident {
			$($variant:ident $(= $value:literal)?),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
		#[repr(u64)]
		$vis enum $name {
			$($variant $(= $value)?),+
		}

		impl $crate::EnumReflect for $name {
			fn table() -> &'static $crate::EnumTable {
				static TABLE: $crate::__private::Lazy<$crate::EnumTable> =
					$crate::__private::Lazy::new(|| {
						$crate::EnumTable::parse(stringify!($($variant $(= $value)?),+))
					});
				&TABLE
			}

			fn value(self) -> u64 { self as u64 }

			fn from_value(value: u64) -> Option<Self> {
				$(if value == $name::$variant as u64 {
					return Some($name::$variant);
				})+
				None
			}
		}
	};
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn error_messages() {
		assert_eq!(Error::UnknownValue(7).to_string(), "No enumerator has the value 7");
		assert_eq!(
			Error::UnknownName("Solaris".into()).to_string(),
			"No enumerator is named \"Solaris\""
		);
	}
}
