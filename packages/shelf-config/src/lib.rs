mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Postgres, Search, SearchWeights, Service, Storage};

use std::{fs, path::Path};

const MAX_IDENTIFIER_BYTES: usize = 63;

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	parse(path, &raw)
}

pub fn parse(path: &Path, raw: &str) -> Result<Config> {
	let mut cfg: Config = toml::from_str(raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.dsn.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}
	if cfg.storage.postgres.acquire_timeout_ms == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.acquire_timeout_ms must be greater than zero.".to_string(),
		});
	}

	if let Some(role) = cfg.storage.postgres.rls_role.as_deref()
		&& !is_sql_identifier(role)
	{
		return Err(Error::Validation {
			message: "storage.postgres.rls_role must be a lowercase SQL identifier.".to_string(),
		});
	}

	if !is_sql_identifier(&cfg.search.language) {
		return Err(Error::Validation {
			message: "search.language must be a lowercase SQL identifier.".to_string(),
		});
	}

	let weights = cfg.search.weights;

	for (label, weight) in [
		("search.weights.title", weights.title),
		("search.weights.tags", weights.tags),
		("search.weights.body", weights.body),
	] {
		if !weight.is_finite() {
			return Err(Error::Validation { message: format!("{label} must be a finite number.") });
		}
		if weight <= 0.0 || weight > 1.0 {
			return Err(Error::Validation {
				message: format!("{label} must be in the range (0.0, 1.0]."),
			});
		}
	}

	if !(weights.title > weights.tags && weights.tags > weights.body) {
		return Err(Error::Validation {
			message: "search.weights must be strictly ordered: title > tags > body.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg.storage.postgres.rls_role.as_deref().map(|role| role.trim().is_empty()).unwrap_or(false)
	{
		cfg.storage.postgres.rls_role = None;
	}

	cfg.service.log_level = cfg.service.log_level.trim().to_string();
	cfg.search.language = cfg.search.language.trim().to_string();
}

fn is_sql_identifier(value: &str) -> bool {
	let mut chars = value.chars();
	let Some(first) = chars.next() else {
		return false;
	};

	value.len() <= MAX_IDENTIFIER_BYTES
		&& (first.is_ascii_lowercase() || first == '_')
		&& chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
