use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shelf_storage::{prompts, tenant::TenantId};

use crate::{Error, PromptRecord, Result, ShelfService};

/// Identifies one prompt within a tenant.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PromptRef {
	pub tenant_id: TenantId,
	pub prompt_id: Uuid,
}

impl ShelfService {
	pub async fn get(&self, req: PromptRef) -> Result<PromptRecord> {
		let mut tx = self.db.begin_tenant(req.tenant_id).await?;
		let prompt = prompts::get_prompt(&mut tx, req.prompt_id).await?;

		tx.commit().await?;

		let Some(prompt) = prompt else {
			tracing::warn!(
				tenant_id = %req.tenant_id,
				prompt_id = %req.prompt_id,
				"Prompt not found."
			);

			return Err(Error::not_found());
		};

		Ok(prompt.into())
	}
}
