//! Normalization of optional list and facet parameters. A parameter that carries no
//! information after trimming is treated as absent rather than as a match on the empty value.

/// Trims `value` and drops it when nothing is left.
pub fn non_blank(value: Option<&str>) -> Option<String> {
	value.map(str::trim).filter(|value| !value.is_empty()).map(str::to_string)
}

/// Trims every tag, drops blank ones and removes duplicates while keeping first-seen order.
pub fn required_tags<I, S>(tags: I) -> Vec<String>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut out: Vec<String> = Vec::new();

	for tag in tags {
		let tag = tag.as_ref().trim();

		if tag.is_empty() || out.iter().any(|seen| seen == tag) {
			continue;
		}

		out.push(tag.to_string());
	}

	out
}

/// Parses the comma-separated tag form used by query strings, e.g. `"rust, sql,,rust"`.
pub fn parse_tag_list(raw: &str) -> Vec<String> {
	required_tags(raw.split(','))
}
