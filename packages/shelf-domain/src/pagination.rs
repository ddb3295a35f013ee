use crate::writegate::{RejectCode, Rejection};

pub const DEFAULT_LIMIT: i64 = 20;
pub const MAX_LIMIT: i64 = 100;

pub fn default_limit() -> i64 {
	DEFAULT_LIMIT
}

/// Checks a listing window: `limit` in `1..=MAX_LIMIT` and a non-negative `offset`.
pub fn validate_window(limit: i64, offset: i64) -> Result<(), Rejection> {
	if !(1..=MAX_LIMIT).contains(&limit) {
		return Err(Rejection::new(
			"$.limit",
			RejectCode::RejectOutOfRange,
			format!("limit must be between 1 and {MAX_LIMIT}."),
		));
	}
	if offset < 0 {
		return Err(Rejection::new(
			"$.offset",
			RejectCode::RejectOutOfRange,
			"offset must be zero or greater.",
		));
	}

	Ok(())
}
