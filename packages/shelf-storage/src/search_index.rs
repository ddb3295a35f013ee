//! The weighted `tsvector` kept in `prompts.search_vector` and the matching rank expression.
//!
//! Title terms are labelled `A`, tag terms `B` and body terms `C`. `ts_rank` takes its
//! weights as `{D, C, B, A}`, so [`SearchIndex::rank_weights`] lists them in that order with
//! the unused `D` class at zero.

use sqlx::{Postgres, QueryBuilder};

use shelf_config::{Search, SearchWeights};

use crate::models::PromptFields;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightClass {
	A,
	B,
	C,
}
impl WeightClass {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::A => "A",
			Self::B => "B",
			Self::C => "C",
		}
	}
}

#[derive(Debug, Clone)]
pub struct SearchIndex {
	language: String,
	weights: SearchWeights,
}
impl SearchIndex {
	pub fn new(cfg: &Search) -> Self {
		Self { language: cfg.language.clone(), weights: cfg.weights }
	}

	pub fn language(&self) -> &str {
		&self.language
	}

	pub fn rank_weights(&self) -> Vec<f32> {
		vec![0.0, self.weights.body, self.weights.tags, self.weights.title]
	}

	/// Pushes the representation computed from bound field values, for INSERT and UPDATE.
	pub(crate) fn push_from_values<'args>(
		&self,
		builder: &mut QueryBuilder<'args, Postgres>,
		fields: &PromptFields,
	) {
		self.push_part(builder, WeightClass::A, |b| {
			b.push_bind(fields.title.clone());
		});
		builder.push(" || ");
		self.push_part(builder, WeightClass::B, |b| {
			b.push("array_to_string(");
			b.push_bind(fields.tags.clone());
			b.push(", ' ')");
		});
		builder.push(" || ");
		self.push_part(builder, WeightClass::C, |b| {
			b.push_bind(fields.body.clone());
		});
	}

	/// Pushes the representation computed from the row's stored columns.
	pub(crate) fn push_from_columns<'args>(&self, builder: &mut QueryBuilder<'args, Postgres>) {
		self.push_part(builder, WeightClass::A, |b| {
			b.push("prompts.title");
		});
		builder.push(" || ");
		self.push_part(builder, WeightClass::B, |b| {
			b.push("array_to_string(prompts.tags, ' ')");
		});
		builder.push(" || ");
		self.push_part(builder, WeightClass::C, |b| {
			b.push("prompts.body");
		});
	}

	pub(crate) fn push_tsquery<'args>(
		&self,
		builder: &mut QueryBuilder<'args, Postgres>,
		query: &str,
	) {
		builder.push("plainto_tsquery(CAST(");
		builder.push_bind(self.language.clone());
		builder.push(" AS regconfig), ");
		builder.push_bind(query.to_string());
		builder.push(")");
	}

	pub(crate) fn push_rank<'args>(
		&self,
		builder: &mut QueryBuilder<'args, Postgres>,
		query: &str,
	) {
		builder.push("ts_rank(");
		builder.push_bind(self.rank_weights());
		builder.push(", prompts.search_vector, ");
		self.push_tsquery(builder, query);
		builder.push(")");
	}

	fn push_part<'args, F>(
		&self,
		builder: &mut QueryBuilder<'args, Postgres>,
		class: WeightClass,
		text: F,
	) where
		F: FnOnce(&mut QueryBuilder<'args, Postgres>),
	{
		builder.push("setweight(to_tsvector(CAST(");
		builder.push_bind(self.language.clone());
		builder.push(" AS regconfig), ");
		text(builder);
		builder.push("), '");
		builder.push(class.as_str());
		builder.push("')");
	}
}
