use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use shelf_storage::{prompts, tenant::TenantId};

use crate::{PromptRecord, Result, ShelfService};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreatePromptRequest {
	pub tenant_id: TenantId,
	pub title: String,
	pub body: String,
	#[serde(default)]
	pub category: Option<String>,
	#[serde(default)]
	pub tags: Option<Vec<String>>,
}

impl ShelfService {
	pub async fn create(&self, req: CreatePromptRequest) -> Result<PromptRecord> {
		let fields = crate::prompt_fields(req.title, req.body, req.category, req.tags)?;
		let now = OffsetDateTime::now_utc();
		let mut tx = self.db.begin_tenant(req.tenant_id).await?;
		let prompt =
			prompts::insert_prompt(&mut tx, &self.index, Uuid::new_v4(), &fields, now).await?;

		tx.commit().await?;

		tracing::info!(
			tenant_id = %req.tenant_id,
			prompt_id = %prompt.prompt_id,
			"Prompt created."
		);

		Ok(prompt.into())
	}
}
