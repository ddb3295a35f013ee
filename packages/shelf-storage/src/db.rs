use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::{
	Result, schema,
	tenant::{TenantId, TenantTx},
};

const SCHEMA_LOCK_ID: i64 = 7_340_112;

pub struct Db {
	pub pool: PgPool,
	rls_role: Option<String>,
}
impl Db {
	pub async fn connect(cfg: &shelf_config::Postgres) -> Result<Self> {
		let pool = pool_options(cfg).connect(&cfg.dsn).await?;

		Ok(Self { pool, rls_role: cfg.rls_role.clone() })
	}

	/// Builds the pool without opening a connection. The first query connects.
	pub fn connect_lazy(cfg: &shelf_config::Postgres) -> Result<Self> {
		let pool = pool_options(cfg).connect_lazy(&cfg.dsn)?;

		Ok(Self { pool, rls_role: cfg.rls_role.clone() })
	}

	pub fn rls_role(&self) -> Option<&str> {
		self.rls_role.as_deref()
	}

	pub async fn ensure_schema(&self) -> Result<()> {
		let sql = schema::render_schema();
		// Advisory locks are held per connection. Use a single transaction so the lock is scoped to
		// one connection and automatically released when the transaction ends.
		let mut tx = self.pool.begin().await?;

		sqlx::query("SELECT pg_advisory_xact_lock($1)")
			.bind(SCHEMA_LOCK_ID)
			.execute(&mut *tx)
			.await?;

		for statement in sql.split(';') {
			let trimmed = statement.trim();

			if trimmed.is_empty() {
				continue;
			}

			sqlx::query(trimmed).execute(&mut *tx).await?;
		}

		if let Some(role) = self.rls_role.as_deref() {
			let grant = format!(r#"GRANT SELECT, INSERT, UPDATE, DELETE ON prompts TO "{role}""#);

			sqlx::query(&grant).execute(&mut *tx).await?;
		}

		tx.commit().await?;

		Ok(())
	}

	/// Round trip without touching tenant data.
	pub async fn ping(&self) -> Result<()> {
		sqlx::query("SELECT 1").execute(&self.pool).await?;

		Ok(())
	}

	/// Opens one unit of work bound to `tenant_id`. See [`TenantTx`].
	pub async fn begin_tenant(&self, tenant_id: TenantId) -> Result<TenantTx> {
		TenantTx::begin(&self.pool, tenant_id, self.rls_role.as_deref()).await
	}
}

fn pool_options(cfg: &shelf_config::Postgres) -> PgPoolOptions {
	PgPoolOptions::new()
		.max_connections(cfg.pool_max_conns)
		.acquire_timeout(Duration::from_millis(cfg.acquire_timeout_ms))
}
