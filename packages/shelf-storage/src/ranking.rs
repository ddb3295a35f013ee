use shelf_domain::pagination;

use crate::{
	Error, Result,
	models::{PROMPT_COLUMNS, Prompt},
	query::{self, PromptFilter},
	search_index::SearchIndex,
	tenant::TenantTx,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
	limit: i64,
	offset: i64,
}
impl Page {
	pub fn new(limit: i64, offset: i64) -> Result<Self> {
		pagination::validate_window(limit, offset).map_err(|rejection| Error::InvalidArgument {
			field: rejection.field,
			code: rejection.code,
			message: rejection.message,
		})?;

		Ok(Self { limit, offset })
	}

	pub fn limit(&self) -> i64 {
		self.limit
	}

	pub fn offset(&self) -> i64 {
		self.offset
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
	/// Text rank descending, then most recently updated, then identifier.
	Relevance,
	/// Most recently updated, then identifier.
	Recency,
}
impl ListOrder {
	pub fn for_filter(filter: &PromptFilter) -> Self {
		if filter.has_text_query() { Self::Relevance } else { Self::Recency }
	}
}

#[derive(Debug, Clone)]
pub struct PromptPage {
	pub prompts: Vec<Prompt>,
	pub total: i64,
}

/// Counts every prompt matching `filter` and fetches the requested window of them.
///
/// Both statements run in `tx` but may observe different snapshots under concurrent writes.
pub async fn list_prompts(
	tx: &mut TenantTx,
	index: &SearchIndex,
	filter: &PromptFilter,
	page: Page,
) -> Result<PromptPage> {
	let total: i64 = query::compose(tx.tenant_id(), index, filter, "count(*)")
		.fetch_scalar(tx)
		.await?;
	let mut select = query::compose(tx.tenant_id(), index, filter, PROMPT_COLUMNS);

	select.suffix(|b| {
		match (ListOrder::for_filter(filter), filter.query()) {
			(ListOrder::Relevance, Some(text)) => {
				b.push(" ORDER BY ");
				index.push_rank(b, text);
				b.push(" DESC, prompts.updated_at DESC, prompts.prompt_id ASC");
			},
			_ => {
				b.push(" ORDER BY prompts.updated_at DESC, prompts.prompt_id ASC");
			},
		}

		b.push(" LIMIT ");
		b.push_bind(page.limit);
		b.push(" OFFSET ");
		b.push_bind(page.offset);
	});

	let prompts = select.fetch_all(tx).await?;

	Ok(PromptPage { prompts, total })
}
