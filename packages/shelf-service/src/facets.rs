use serde::{Deserialize, Serialize};

use shelf_domain::writegate;
use shelf_storage::{
	facets::{self, Facet},
	tenant::TenantId,
};

use crate::{Result, ShelfService};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FacetRequest {
	pub tenant_id: TenantId,
	/// Case-insensitive prefix; blank means no prefix.
	#[serde(default)]
	pub prefix: Option<String>,
}

/// Distinct values, most used first.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FacetResponse {
	pub values: Vec<String>,
}

impl ShelfService {
	pub async fn list_categories(&self, req: FacetRequest) -> Result<FacetResponse> {
		self.facet(Facet::Category, req).await
	}

	pub async fn list_tags(&self, req: FacetRequest) -> Result<FacetResponse> {
		self.facet(Facet::Tag, req).await
	}

	async fn facet(&self, facet: Facet, req: FacetRequest) -> Result<FacetResponse> {
		if let Some(prefix) = req.prefix.as_deref() {
			writegate::reject_nul("$.prefix", prefix)?;
		}

		let mut tx = self.db.begin_tenant(req.tenant_id).await?;
		let counts = facets::facet_counts(&mut tx, facet, req.prefix.as_deref()).await?;

		tx.commit().await?;

		tracing::debug!(
			tenant_id = %req.tenant_id,
			facet = ?facet,
			values = counts.len(),
			"Facet values listed."
		);

		Ok(FacetResponse { values: counts.into_iter().map(|count| count.value).collect() })
	}
}
