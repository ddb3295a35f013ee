use time::OffsetDateTime;
use uuid::Uuid;

/// Columns selected for a [`Prompt`]. The search representation is never read back.
pub const PROMPT_COLUMNS: &str = "prompts.prompt_id, prompts.tenant_id, prompts.title, \
	prompts.body, prompts.category, prompts.tags, prompts.created_at, prompts.updated_at";

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Prompt {
	pub prompt_id: Uuid,
	pub tenant_id: Uuid,
	pub title: String,
	pub body: String,
	pub category: Option<String>,
	pub tags: Vec<String>,
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
}

/// The caller-writable part of a prompt. Writes replace all four fields at once.
#[derive(Debug, Clone, Default)]
pub struct PromptFields {
	pub title: String,
	pub body: String,
	pub category: Option<String>,
	pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct FacetCount {
	pub value: String,
	pub uses: i64,
}
