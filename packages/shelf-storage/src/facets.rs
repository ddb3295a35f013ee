//! Frequency-ranked distinct categories and tags of one tenant.

use shelf_domain::filters;

use crate::{
	Result,
	models::FacetCount,
	scoped::{ScopedQuery, Source},
	tenant::{TenantId, TenantTx},
};

pub const MAX_CATEGORY_FACETS: i64 = 50;
pub const MAX_TAG_FACETS: i64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
	Category,
	/// Counts tag occurrences across the tenant's prompts.
	Tag,
}
impl Facet {
	pub fn cap(self) -> i64 {
		match self {
			Self::Category => MAX_CATEGORY_FACETS,
			Self::Tag => MAX_TAG_FACETS,
		}
	}

	fn column(self) -> &'static str {
		match self {
			Self::Category => "prompts.category",
			Self::Tag => "occurrence.tag",
		}
	}

	fn source(self) -> Source {
		match self {
			Self::Category => Source::Prompts,
			Self::Tag => Source::TagOccurrences,
		}
	}
}

pub async fn facet_counts(
	tx: &mut TenantTx,
	facet: Facet,
	prefix: Option<&str>,
) -> Result<Vec<FacetCount>> {
	let query = facet_query(tx.tenant_id(), facet, prefix);

	query.fetch_all(tx).await
}

fn facet_query<'args>(
	tenant_id: TenantId,
	facet: Facet,
	prefix: Option<&str>,
) -> ScopedQuery<'args> {
	let column = facet.column();
	let mut query = ScopedQuery::select(
		tenant_id,
		&format!("{column} AS value, count(*) AS uses"),
		facet.source(),
	);

	query.and_where(|b| {
		b.push(format!("{column} IS NOT NULL"));
	});

	if let Some(prefix) = filters::non_blank(prefix) {
		query.and_where(|b| {
			b.push(format!("{column} ILIKE "));
			b.push_bind(format!("{}%", escape_like(&prefix)));
			b.push(r" ESCAPE '\'");
		});
	}

	query.suffix(|b| {
		b.push(format!(" GROUP BY {column} ORDER BY uses DESC, value ASC LIMIT "));
		b.push_bind(facet.cap());
	});

	query
}

/// Escapes `\`, `%` and `_` so the value only matches itself inside a `LIKE` pattern.
pub fn escape_like(value: &str) -> String {
	let mut out = String::with_capacity(value.len());

	for ch in value.chars() {
		if matches!(ch, '\\' | '%' | '_') {
			out.push('\\');
		}

		out.push(ch);
	}

	out
}
