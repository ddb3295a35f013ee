//! Composition of the tenant-scoped predicate shared by listing and counting.

use shelf_domain::filters;

use crate::{
	scoped::{ScopedQuery, Source},
	search_index::SearchIndex,
	tenant::TenantId,
};

/// Optional list constraints, normalized on construction. Every absent constraint matches
/// all of the tenant's prompts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptFilter {
	query: Option<String>,
	category: Option<String>,
	tags: Vec<String>,
}
impl PromptFilter {
	pub fn new<S>(query: Option<&str>, category: Option<&str>, tags: &[S]) -> Self
	where
		S: AsRef<str>,
	{
		Self {
			query: filters::non_blank(query),
			category: filters::non_blank(category),
			tags: filters::required_tags(tags),
		}
	}

	pub fn query(&self) -> Option<&str> {
		self.query.as_deref()
	}

	pub fn category(&self) -> Option<&str> {
		self.category.as_deref()
	}

	pub fn tags(&self) -> &[String] {
		&self.tags
	}

	pub fn has_text_query(&self) -> bool {
		self.query.is_some()
	}
}

/// Builds `SELECT <columns> FROM prompts` restricted to `tenant_id` and the filter.
///
/// The page and its total are both produced here so they always share one predicate.
pub(crate) fn compose<'args>(
	tenant_id: TenantId,
	index: &SearchIndex,
	filter: &PromptFilter,
	columns: &str,
) -> ScopedQuery<'args> {
	let mut query = ScopedQuery::select(tenant_id, columns, Source::Prompts);

	if let Some(text) = filter.query() {
		query.and_where(|b| {
			b.push("prompts.search_vector @@ ");
			index.push_tsquery(b, text);
		});
	}
	if let Some(category) = filter.category() {
		query.and_where(|b| {
			b.push("prompts.category = ");
			b.push_bind(category.to_string());
		});
	}
	if !filter.tags().is_empty() {
		query.and_where(|b| {
			b.push("prompts.tags @> ");
			b.push_bind(filter.tags().to_vec());
		});
	}

	query
}
