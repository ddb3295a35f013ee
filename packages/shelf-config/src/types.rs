use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	#[serde(default)]
	pub search: Search,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
	/// How long a request waits for a pooled connection before failing as unavailable.
	#[serde(default = "default_acquire_timeout_ms")]
	pub acquire_timeout_ms: u64,
	/// Optional. Role assumed with `SET LOCAL ROLE` inside every tenant-bound transaction so
	/// the row-level security policy applies even when the login role bypasses it.
	#[serde(default)]
	pub rls_role: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Search {
	/// Postgres text search configuration, e.g. "english" or "simple".
	pub language: String,
	pub weights: SearchWeights,
}
impl Default for Search {
	fn default() -> Self {
		Self { language: "english".to_string(), weights: SearchWeights::default() }
	}
}

/// Rank weight per search representation class. Title terms are class A, tags class B and
/// body terms class C.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct SearchWeights {
	pub title: f32,
	pub tags: f32,
	pub body: f32,
}
impl Default for SearchWeights {
	fn default() -> Self {
		Self { title: 1.0, tags: 0.4, body: 0.2 }
	}
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_acquire_timeout_ms() -> u64 {
	30_000
}
