//! Statements that cannot be built without a tenant predicate.

use sqlx::{FromRow, Postgres, QueryBuilder, Type, postgres::PgRow};

use crate::{
	Error, Result,
	tenant::{TenantId, TenantTx},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Source {
	Prompts,
	/// One row per element of `prompts.tags`, exposed as `occurrence.tag`.
	TagOccurrences,
}
impl Source {
	fn as_sql(self) -> &'static str {
		match self {
			Self::Prompts => "prompts",
			Self::TagOccurrences =>
				"prompts CROSS JOIN LATERAL unnest(prompts.tags) AS occurrence(tag)",
		}
	}
}

/// A select, update or delete on `prompts` whose first predicate is always
/// `prompts.tenant_id = $n`. Further predicates are appended with [`ScopedQuery::and_where`].
pub(crate) struct ScopedQuery<'args> {
	builder: QueryBuilder<'args, Postgres>,
	tenant_id: TenantId,
}
impl<'args> ScopedQuery<'args> {
	pub(crate) fn select(tenant_id: TenantId, columns: &str, source: Source) -> Self {
		let builder = QueryBuilder::new(format!("SELECT {columns} FROM {}", source.as_sql()));

		Self::scope(builder, tenant_id)
	}

	pub(crate) fn update<F>(tenant_id: TenantId, assignments: F) -> Self
	where
		F: FnOnce(&mut QueryBuilder<'args, Postgres>),
	{
		let mut builder = QueryBuilder::new("UPDATE prompts SET ");

		assignments(&mut builder);

		Self::scope(builder, tenant_id)
	}

	pub(crate) fn delete(tenant_id: TenantId) -> Self {
		Self::scope(QueryBuilder::new("DELETE FROM prompts"), tenant_id)
	}

	fn scope(mut builder: QueryBuilder<'args, Postgres>, tenant_id: TenantId) -> Self {
		builder.push(" WHERE prompts.tenant_id = ");
		builder.push_bind(tenant_id.as_uuid());

		Self { builder, tenant_id }
	}

	pub(crate) fn and_where<F>(&mut self, predicate: F) -> &mut Self
	where
		F: FnOnce(&mut QueryBuilder<'args, Postgres>),
	{
		self.builder.push(" AND (");
		predicate(&mut self.builder);
		self.builder.push(")");

		self
	}

	/// Appends clauses that follow the predicate, such as `GROUP BY`, `ORDER BY`, `LIMIT`
	/// or `RETURNING`.
	pub(crate) fn suffix<F>(&mut self, clauses: F) -> &mut Self
	where
		F: FnOnce(&mut QueryBuilder<'args, Postgres>),
	{
		clauses(&mut self.builder);

		self
	}

	#[cfg(test)]
	pub(crate) fn sql(&self) -> &str {
		self.builder.sql()
	}

	pub(crate) async fn fetch_all<T>(mut self, tx: &mut TenantTx) -> Result<Vec<T>>
	where
		T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
	{
		self.check(tx)?;

		Ok(self.builder.build_query_as::<T>().fetch_all(tx.conn()).await?)
	}

	pub(crate) async fn fetch_optional<T>(mut self, tx: &mut TenantTx) -> Result<Option<T>>
	where
		T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
	{
		self.check(tx)?;

		Ok(self.builder.build_query_as::<T>().fetch_optional(tx.conn()).await?)
	}

	pub(crate) async fn fetch_scalar<T>(mut self, tx: &mut TenantTx) -> Result<T>
	where
		T: Type<Postgres> + Send + Unpin,
		(T,): for<'r> FromRow<'r, PgRow>,
	{
		self.check(tx)?;

		Ok(self.builder.build_query_scalar::<T>().fetch_one(tx.conn()).await?)
	}

	pub(crate) async fn execute(mut self, tx: &mut TenantTx) -> Result<u64> {
		self.check(tx)?;

		let result = self.builder.build().execute(tx.conn()).await?;

		Ok(result.rows_affected())
	}

	fn check(&self, tx: &TenantTx) -> Result<()> {
		if self.tenant_id != tx.tenant_id() {
			return Err(Error::TenantMismatch { statement: self.tenant_id, bound: tx.tenant_id() });
		}

		Ok(())
	}
}
