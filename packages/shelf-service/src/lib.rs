pub mod admin;
pub mod create;
pub mod delete;
pub mod facets;
pub mod get;
pub mod health;
pub mod list;
pub mod update;

mod error;

pub use admin::{ReindexReport, ReindexRequest};
pub use create::CreatePromptRequest;
pub use delete::DeletePromptResponse;
pub use error::{Error, PROMPT_NOT_FOUND, Result};
pub use facets::{FacetRequest, FacetResponse};
pub use get::PromptRef;
pub use health::{DatabaseStatus, HealthReport};
pub use list::{ListRequest, ListResponse};
pub use update::UpdatePromptRequest;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use shelf_config::Config;
use shelf_domain::{
	filters,
	writegate::{self, PromptInput},
};
use shelf_storage::{
	db::Db,
	models::{Prompt, PromptFields},
	search_index::SearchIndex,
	tenant::TenantId,
};

/// Entry point for every prompt operation. Holds no mutable state besides the pool, so one
/// instance serves concurrent requests.
pub struct ShelfService {
	pub cfg: Config,
	pub db: Db,
	index: SearchIndex,
}
impl ShelfService {
	pub fn new(cfg: Config, db: Db) -> Self {
		let index = SearchIndex::new(&cfg.search);

		Self { cfg, db, index }
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRecord {
	pub prompt_id: Uuid,
	pub tenant_id: TenantId,
	pub title: String,
	pub body: String,
	pub category: Option<String>,
	pub tags: Vec<String>,
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
}
impl From<Prompt> for PromptRecord {
	fn from(prompt: Prompt) -> Self {
		Self {
			prompt_id: prompt.prompt_id,
			tenant_id: TenantId::new(prompt.tenant_id),
			title: prompt.title,
			body: prompt.body,
			category: prompt.category,
			tags: prompt.tags,
			created_at: prompt.created_at,
			updated_at: prompt.updated_at,
		}
	}
}

/// Validates caller input and turns it into the stored field set. A blank category is
/// stored as no category. Tags are normalized the way list filters normalize them, so every
/// stored tag can be filtered on.
pub(crate) fn prompt_fields(
	title: String,
	body: String,
	category: Option<String>,
	tags: Option<Vec<String>>,
) -> Result<PromptFields> {
	let category = filters::non_blank(category.as_deref());
	let tags = filters::required_tags(tags.unwrap_or_default());

	writegate::writegate(&PromptInput {
		title: &title,
		body: &body,
		category: category.as_deref(),
		tags: &tags,
	})?;

	Ok(PromptFields { title, body, category, tags })
}
