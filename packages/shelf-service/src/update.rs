use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use shelf_storage::{prompts, tenant::TenantId};

use crate::{Error, PromptRecord, Result, ShelfService};

/// Full replacement of a prompt's fields. Omitted optionals clear the stored value.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdatePromptRequest {
	pub tenant_id: TenantId,
	pub prompt_id: Uuid,
	pub title: String,
	pub body: String,
	#[serde(default)]
	pub category: Option<String>,
	#[serde(default)]
	pub tags: Option<Vec<String>>,
}

impl ShelfService {
	pub async fn update(&self, req: UpdatePromptRequest) -> Result<PromptRecord> {
		let fields = crate::prompt_fields(req.title, req.body, req.category, req.tags)?;
		let now = OffsetDateTime::now_utc();
		let mut tx = self.db.begin_tenant(req.tenant_id).await?;
		let Some(prompt) =
			prompts::update_prompt(&mut tx, &self.index, req.prompt_id, &fields, now).await?
		else {
			tracing::warn!(
				tenant_id = %req.tenant_id,
				prompt_id = %req.prompt_id,
				"Prompt not found."
			);

			return Err(Error::not_found());
		};

		tx.commit().await?;

		tracing::info!(
			tenant_id = %req.tenant_id,
			prompt_id = %prompt.prompt_id,
			"Prompt updated."
		);

		Ok(prompt.into())
	}
}
