//! Lists the members of an enumeration and does a lookup round trip.
//!
//! Run with `RUST_LOG=debug` to see the parser's recovery events.

use anyhow::Result;
use enum_reflect::{declare_enum, EnumReflect};

declare_enum! {
	pub enum OsType { Windows, Ubuntu = 50, MacOS }
}

fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.init();

	print!("{} members:", OsType::count());
	for &value in OsType::values() {
		print!(" {}", OsType::try_name(value)?);
	}
	println!();

	let os = OsType::MacOS;
	println!("The value of {} is: {}", os.name(), OsType::from_name("MacOS"));
	Ok(())
}
