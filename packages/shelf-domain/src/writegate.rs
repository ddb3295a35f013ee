pub const MAX_TITLE_CHARS: usize = 500;
pub const MAX_CATEGORY_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectCode {
	RejectEmpty,
	RejectTooLong,
	RejectOutOfRange,
	RejectInvalid,
}
impl RejectCode {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::RejectEmpty => "REJECT_EMPTY",
			Self::RejectTooLong => "REJECT_TOO_LONG",
			Self::RejectOutOfRange => "REJECT_OUT_OF_RANGE",
			Self::RejectInvalid => "REJECT_INVALID",
		}
	}
}

/// A refused input, pointing at the offending field with a JSON path such as `$.title`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
	pub field: &'static str,
	pub code: RejectCode,
	pub message: String,
}
impl Rejection {
	pub fn new(field: &'static str, code: RejectCode, message: impl Into<String>) -> Self {
		Self { field, code, message: message.into() }
	}
}

pub struct PromptInput<'a> {
	pub title: &'a str,
	pub body: &'a str,
	pub category: Option<&'a str>,
	pub tags: &'a [String],
}

pub fn writegate(prompt: &PromptInput<'_>) -> Result<(), Rejection> {
	reject_nul("$.title", prompt.title)?;
	reject_nul("$.body", prompt.body)?;

	if let Some(category) = prompt.category {
		reject_nul("$.category", category)?;
	}
	for tag in prompt.tags {
		reject_nul("$.tags", tag)?;
	}

	if prompt.title.trim().is_empty() {
		return Err(Rejection::new("$.title", RejectCode::RejectEmpty, "title must be non-empty."));
	}
	if prompt.title.chars().count() > MAX_TITLE_CHARS {
		return Err(Rejection::new(
			"$.title",
			RejectCode::RejectTooLong,
			format!("title must be at most {MAX_TITLE_CHARS} characters."),
		));
	}
	if prompt.body.trim().is_empty() {
		return Err(Rejection::new("$.body", RejectCode::RejectEmpty, "body must be non-empty."));
	}

	if let Some(category) = prompt.category
		&& category.chars().count() > MAX_CATEGORY_CHARS
	{
		return Err(Rejection::new(
			"$.category",
			RejectCode::RejectTooLong,
			format!("category must be at most {MAX_CATEGORY_CHARS} characters."),
		));
	}

	Ok(())
}

/// Refuses `U+0000`, which Postgres text columns cannot store.
pub fn reject_nul(field: &'static str, value: &str) -> Result<(), Rejection> {
	if value.contains('\0') {
		return Err(Rejection::new(
			field,
			RejectCode::RejectInvalid,
			format!("{} must not contain NUL characters.", field.trim_start_matches("$.")),
		));
	}

	Ok(())
}
