use serde::{Deserialize, Serialize};

use crate::ShelfService;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
	Connected,
	Disconnected,
}

/// The service answers whenever it runs; `database` reports whether Postgres does too.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
	pub status: String,
	pub database: DatabaseStatus,
}

impl ShelfService {
	/// Never fails: an unreachable database is reported, not returned as an error.
	pub async fn health(&self) -> HealthReport {
		let database = match self.db.ping().await {
			Ok(()) => DatabaseStatus::Connected,
			Err(err) => {
				tracing::warn!(error = %err, "Database health check failed.");

				DatabaseStatus::Disconnected
			},
		};

		HealthReport { status: "healthy".to_string(), database }
	}
}
