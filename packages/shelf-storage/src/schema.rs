pub fn render_schema() -> String {
	let init = include_str!("../../../sql/init.sql");

	expand_includes(init)
}

fn expand_includes(sql: &str) -> String {
	let mut out = String::new();

	for line in sql.lines() {
		let trimmed = line.trim();

		if let Some(path) = trimmed.strip_prefix("\\ir ") {
			match path.trim() {
				"tables/001_prompts.sql" =>
					out.push_str(include_str!("../../../sql/tables/001_prompts.sql")),
				"policies/001_prompts_tenant_isolation.sql" => out.push_str(include_str!(
					"../../../sql/policies/001_prompts_tenant_isolation.sql"
				)),
				_ => out.push_str(line),
			}
		} else {
			out.push_str(line);
		}

		out.push('\n');
	}

	out
}
