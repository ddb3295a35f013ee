pub mod db;
pub mod facets;
pub mod models;
pub mod prompts;
pub mod query;
pub mod ranking;
pub mod schema;
pub mod search_index;
pub mod tenant;

mod error;
mod scoped;

pub use error::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;
