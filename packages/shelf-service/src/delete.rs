use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shelf_storage::prompts;

use crate::{Error, PromptRef, Result, ShelfService};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeletePromptResponse {
	pub prompt_id: Uuid,
}

impl ShelfService {
	pub async fn delete(&self, req: PromptRef) -> Result<DeletePromptResponse> {
		let mut tx = self.db.begin_tenant(req.tenant_id).await?;

		if !prompts::delete_prompt(&mut tx, req.prompt_id).await? {
			tracing::warn!(
				tenant_id = %req.tenant_id,
				prompt_id = %req.prompt_id,
				"Prompt not found."
			);

			return Err(Error::not_found());
		}

		tx.commit().await?;

		tracing::info!(tenant_id = %req.tenant_id, prompt_id = %req.prompt_id, "Prompt deleted.");

		Ok(DeletePromptResponse { prompt_id: req.prompt_id })
	}
}
