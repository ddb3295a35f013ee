use shelf_domain::writegate::RejectCode;

use crate::tenant::TenantId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Sqlx(#[from] sqlx::Error),
	#[error("Invalid argument at {field}: {message}")]
	InvalidArgument { field: &'static str, code: RejectCode, message: String },
	#[error("Statement scoped to tenant {statement} cannot run in a transaction bound to {bound}.")]
	TenantMismatch { statement: TenantId, bound: TenantId },
}
