use serde::{Deserialize, Serialize};

use shelf_domain::{pagination, writegate};
use shelf_storage::{
	query::PromptFilter,
	ranking::{self, Page},
	tenant::TenantId,
};

use crate::{PromptRecord, Result, ShelfService};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListRequest {
	pub tenant_id: TenantId,
	#[serde(default)]
	pub query: Option<String>,
	#[serde(default)]
	pub category: Option<String>,
	#[serde(default)]
	pub tags: Option<Vec<String>>,
	#[serde(default = "pagination::default_limit")]
	pub limit: i64,
	#[serde(default)]
	pub offset: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListResponse {
	pub records: Vec<PromptRecord>,
	pub total: i64,
	pub limit: i64,
	pub offset: i64,
}

impl ShelfService {
	pub async fn list(&self, req: ListRequest) -> Result<ListResponse> {
		let page = Page::new(req.limit, req.offset)?;

		if let Some(query) = req.query.as_deref() {
			writegate::reject_nul("$.query", query)?;
		}
		if let Some(category) = req.category.as_deref() {
			writegate::reject_nul("$.category", category)?;
		}
		for tag in req.tags.iter().flatten() {
			writegate::reject_nul("$.tags", tag)?;
		}

		let filter = PromptFilter::new(
			req.query.as_deref(),
			req.category.as_deref(),
			req.tags.as_deref().unwrap_or_default(),
		);
		let mut tx = self.db.begin_tenant(req.tenant_id).await?;
		let listed = ranking::list_prompts(&mut tx, &self.index, &filter, page).await?;

		tx.commit().await?;

		tracing::debug!(
			tenant_id = %req.tenant_id,
			returned = listed.prompts.len(),
			total = listed.total,
			ranked = filter.has_text_query(),
			"Prompts listed."
		);

		Ok(ListResponse {
			records: listed.prompts.into_iter().map(PromptRecord::from).collect(),
			total: listed.total,
			limit: page.limit(),
			offset: page.offset(),
		})
	}
}
