use shelf_domain::writegate::{RejectCode, Rejection};

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub const PROMPT_NOT_FOUND: &str = "Prompt not found.";

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid input at {field}: {message}")]
	Validation { field: String, code: RejectCode, message: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Storage unavailable: {message}")]
	StorageUnavailable { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl Error {
	/// Same message whether the prompt is missing or owned by another tenant.
	pub fn not_found() -> Self {
		Self::NotFound { message: PROMPT_NOT_FOUND.to_string() }
	}

	pub fn is_retryable(&self) -> bool {
		matches!(self, Self::StorageUnavailable { .. })
	}
}
impl From<Rejection> for Error {
	fn from(rejection: Rejection) -> Self {
		Self::Validation {
			field: rejection.field.to_string(),
			code: rejection.code,
			message: rejection.message,
		}
	}
}
impl From<sqlx::Error> for Error {
	fn from(err: sqlx::Error) -> Self {
		if is_transient(&err) {
			Self::StorageUnavailable { message: err.to_string() }
		} else {
			Self::Storage { message: err.to_string() }
		}
	}
}

impl From<shelf_storage::Error> for Error {
	fn from(err: shelf_storage::Error) -> Self {
		match err {
			shelf_storage::Error::Sqlx(inner) => inner.into(),
			shelf_storage::Error::InvalidArgument { field, code, message } =>
				Self::Validation { field: field.to_string(), code, message },
			err @ shelf_storage::Error::TenantMismatch { .. } =>
				Self::Storage { message: err.to_string() },
		}
	}
}

fn is_transient(err: &sqlx::Error) -> bool {
	match err {
		sqlx::Error::PoolTimedOut
		| sqlx::Error::PoolClosed
		| sqlx::Error::WorkerCrashed
		| sqlx::Error::Io(_)
		| sqlx::Error::Tls(_)
		| sqlx::Error::Protocol(_) => true,
		sqlx::Error::Database(db_err) =>
			db_err.code().is_some_and(|code| is_transient_sqlstate(&code)),
		_ => false,
	}
}

/// Serialization failures, deadlocks, connection exceptions, shutdowns and connection
/// exhaustion. Everything else is reported as a permanent storage error.
fn is_transient_sqlstate(code: &str) -> bool {
	matches!(code, "40001" | "40P01" | "57P01" | "57P02" | "57P03" | "53300")
		|| code.starts_with("08")
}
