use serde::{Deserialize, Serialize};

use shelf_storage::{prompts, tenant::TenantId};

use crate::{Result, ShelfService};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReindexRequest {
	pub tenant_id: TenantId,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReindexReport {
	pub reindexed: u64,
}

impl ShelfService {
	/// Recomputes the search representation of the tenant's prompts with the configured
	/// language, e.g. after `search.language` changed.
	pub async fn reindex(&self, req: ReindexRequest) -> Result<ReindexReport> {
		let mut tx = self.db.begin_tenant(req.tenant_id).await?;
		let reindexed = prompts::reindex_prompts(&mut tx, &self.index).await?;

		tx.commit().await?;

		tracing::info!(
			tenant_id = %req.tenant_id,
			reindexed,
			language = self.index.language(),
			"Prompts reindexed."
		);

		Ok(ReindexReport { reindexed })
	}
}
