use enum_reflect_structs::EnumTable;
use quickcheck_macros::quickcheck;

/// Turns arbitrary strings into identifiers the enumerator grammar accepts.
fn identifiers(words: &[String]) -> Vec<String> {
	words
		.iter()
		.map(|w| {
			let mut name = String::from("V");
			name.extend(w.chars().filter(|c| c.is_ascii_alphanumeric()));
			name
		})
		.collect()
}

#[quickcheck]
fn bare_identifier_lists_resolve_sequentially(words: Vec<String>) -> bool {
	let names = identifiers(&words);
	let table = EnumTable::parse(&names.join(", "));
	table.values().iter().copied().eq(0..names.len() as u64) && table.names() == &names[..]
}

#[quickcheck]
fn parsing_is_total_idempotent_and_aligned(decl: String) -> bool {
	let a = EnumTable::parse(&decl);
	let b = EnumTable::parse(&decl);
	a == b && a.count() == a.values().len() && a.count() == a.names().len()
}

#[quickcheck]
fn round_trip_without_duplicates(words: Vec<String>) -> bool {
	let mut names = identifiers(&words);
	names.sort();
	names.dedup();
	let table = EnumTable::parse(&names.join(", "));
	table.values().iter().all(|&v| table.value_of(table.name_of(v)) == v)
}
