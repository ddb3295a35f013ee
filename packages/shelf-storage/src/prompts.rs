use sqlx::{Postgres, QueryBuilder};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
	Result,
	models::{PROMPT_COLUMNS, Prompt, PromptFields},
	scoped::{ScopedQuery, Source},
	search_index::SearchIndex,
	tenant::TenantTx,
};

/// Inserts a prompt owned by the transaction's tenant. The owner is never caller-supplied.
pub async fn insert_prompt(
	tx: &mut TenantTx,
	index: &SearchIndex,
	prompt_id: Uuid,
	fields: &PromptFields,
	now: OffsetDateTime,
) -> Result<Prompt> {
	let mut builder = QueryBuilder::<Postgres>::new(
		"\
INSERT INTO prompts (
	prompt_id,
	tenant_id,
	title,
	body,
	category,
	tags,
	created_at,
	updated_at,
	search_vector
)
VALUES (",
	);

	builder.push_bind(prompt_id);
	builder.push(", ");
	builder.push_bind(tx.tenant_id().as_uuid());
	builder.push(", ");
	builder.push_bind(fields.title.clone());
	builder.push(", ");
	builder.push_bind(fields.body.clone());
	builder.push(", ");
	builder.push_bind(fields.category.clone());
	builder.push(", ");
	builder.push_bind(fields.tags.clone());
	builder.push(", ");
	builder.push_bind(now);
	builder.push(", ");
	builder.push_bind(now);
	builder.push(", ");
	index.push_from_values(&mut builder, fields);
	builder.push(format!(") RETURNING {PROMPT_COLUMNS}"));

	let prompt = builder.build_query_as::<Prompt>().fetch_one(tx.conn()).await?;

	Ok(prompt)
}

pub async fn get_prompt(tx: &mut TenantTx, prompt_id: Uuid) -> Result<Option<Prompt>> {
	let mut query = ScopedQuery::select(tx.tenant_id(), PROMPT_COLUMNS, Source::Prompts);

	query.and_where(|b| {
		b.push("prompts.prompt_id = ");
		b.push_bind(prompt_id);
	});

	query.fetch_optional(tx).await
}

/// Replaces the caller-writable fields and refreshes `updated_at` and the search
/// representation in the same statement. `updated_at` never moves before `created_at`.
pub async fn update_prompt(
	tx: &mut TenantTx,
	index: &SearchIndex,
	prompt_id: Uuid,
	fields: &PromptFields,
	now: OffsetDateTime,
) -> Result<Option<Prompt>> {
	let mut query = ScopedQuery::update(tx.tenant_id(), |b| {
		b.push("title = ");
		b.push_bind(fields.title.clone());
		b.push(", body = ");
		b.push_bind(fields.body.clone());
		b.push(", category = ");
		b.push_bind(fields.category.clone());
		b.push(", tags = ");
		b.push_bind(fields.tags.clone());
		b.push(", updated_at = GREATEST(");
		b.push_bind(now);
		b.push(", prompts.created_at), search_vector = ");
		index.push_from_values(b, fields);
	});

	query
		.and_where(|b| {
			b.push("prompts.prompt_id = ");
			b.push_bind(prompt_id);
		})
		.suffix(|b| {
			b.push(format!(" RETURNING {PROMPT_COLUMNS}"));
		});

	query.fetch_optional(tx).await
}

/// Returns whether a prompt was removed.
pub async fn delete_prompt(tx: &mut TenantTx, prompt_id: Uuid) -> Result<bool> {
	let mut query = ScopedQuery::delete(tx.tenant_id());

	query.and_where(|b| {
		b.push("prompts.prompt_id = ");
		b.push_bind(prompt_id);
	});

	let removed = query.execute(tx).await?;

	Ok(removed > 0)
}

/// Recomputes the search representation of every prompt the tenant owns from the stored
/// columns. Timestamps are left as they are.
pub async fn reindex_prompts(tx: &mut TenantTx, index: &SearchIndex) -> Result<u64> {
	let query = ScopedQuery::update(tx.tenant_id(), |b| {
		b.push("search_vector = ");
		index.push_from_columns(b);
	});

	query.execute(tx).await
}
