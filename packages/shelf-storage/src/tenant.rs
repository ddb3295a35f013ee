//! Binding of a tenant identity to one unit of work.
//!
//! A [`TenantTx`] is a database transaction that carries its tenant in two places: in the
//! value itself, which every storage statement must match before it runs, and in the
//! transaction-local `shelf.tenant_id` setting that the row-level security policy on
//! `prompts` compares against. The setting is created with `set_config(.., true)`, so it ends
//! with the transaction and never reaches the next borrower of the pooled connection.

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::Result;

pub const TENANT_SETTING: &str = "shelf.tenant_id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(Uuid);
impl TenantId {
	pub const fn new(id: Uuid) -> Self {
		Self(id)
	}

	pub const fn as_uuid(&self) -> Uuid {
		self.0
	}
}
impl From<Uuid> for TenantId {
	fn from(id: Uuid) -> Self {
		Self(id)
	}
}
impl Display for TenantId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}
impl FromStr for TenantId {
	type Err = uuid::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Uuid::parse_str(s).map(Self)
	}
}

/// A transaction bound to one tenant. Dropping it without [`TenantTx::commit`] rolls back.
pub struct TenantTx {
	tx: Transaction<'static, Postgres>,
	tenant_id: TenantId,
}
impl TenantTx {
	pub(crate) async fn begin(
		pool: &PgPool,
		tenant_id: TenantId,
		rls_role: Option<&str>,
	) -> Result<Self> {
		let mut tx = pool.begin().await?;

		sqlx::query("SELECT set_config($1, $2, true)")
			.bind(TENANT_SETTING)
			.bind(tenant_id.to_string())
			.execute(&mut *tx)
			.await?;

		if let Some(role) = rls_role {
			let set_role = format!(r#"SET LOCAL ROLE "{role}""#);

			sqlx::query(&set_role).execute(&mut *tx).await?;
		}

		Ok(Self { tx, tenant_id })
	}

	pub fn tenant_id(&self) -> TenantId {
		self.tenant_id
	}

	pub async fn commit(self) -> Result<()> {
		self.tx.commit().await?;

		Ok(())
	}

	pub async fn rollback(self) -> Result<()> {
		self.tx.rollback().await?;

		Ok(())
	}

	pub(crate) fn conn(&mut self) -> &mut PgConnection {
		&mut self.tx
	}
}
