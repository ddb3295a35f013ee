use std::{io, path::PathBuf};

use clap::{
	Parser, Subcommand,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use color_eyre::eyre;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use shelf_domain::{filters, pagination};
use shelf_service::{
	CreatePromptRequest, FacetRequest, ListRequest, PromptRef, ReindexRequest, ShelfService,
	UpdatePromptRequest,
};
use shelf_storage::{db::Db, tenant::TenantId};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(
	version = VERSION,
	rename_all = "kebab",
	styles = styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
#[command(rename_all = "kebab")]
pub enum Command {
	/// Creates the prompts table, its indexes and the tenant isolation policy.
	InitSchema,
	Create(WriteArgs),
	Get(PromptArgs),
	/// Replaces every field of a prompt. Omitted options are cleared.
	Update {
		#[arg(long, value_name = "UUID")]
		prompt: Uuid,
		#[command(flatten)]
		fields: WriteArgs,
	},
	Delete(PromptArgs),
	List(ListArgs),
	Categories(FacetArgs),
	Tags(FacetArgs),
	/// Recomputes search vectors with the configured language.
	Reindex(TenantArgs),
	/// Reports whether the database answers. An unreachable database is not an error.
	Health,
}

#[derive(Debug, clap::Args)]
pub struct TenantArgs {
	#[arg(long, value_name = "UUID")]
	pub tenant: TenantId,
}

#[derive(Debug, clap::Args)]
pub struct PromptArgs {
	#[arg(long, value_name = "UUID")]
	pub tenant: TenantId,
	#[arg(long, value_name = "UUID")]
	pub prompt: Uuid,
}

#[derive(Debug, clap::Args)]
pub struct WriteArgs {
	#[arg(long, value_name = "UUID")]
	pub tenant: TenantId,
	#[arg(long)]
	pub title: String,
	#[arg(long)]
	pub body: String,
	#[arg(long)]
	pub category: Option<String>,
	/// Repeat for several tags.
	#[arg(long = "tag", value_name = "TAG")]
	pub tags: Vec<String>,
}

#[derive(Debug, clap::Args)]
pub struct ListArgs {
	#[arg(long, value_name = "UUID")]
	pub tenant: TenantId,
	#[arg(long, short = 'q')]
	pub query: Option<String>,
	#[arg(long)]
	pub category: Option<String>,
	/// Comma-separated; every listed tag must be present.
	#[arg(long, value_name = "TAGS")]
	pub tags: Option<String>,
	#[arg(long, default_value_t = pagination::DEFAULT_LIMIT)]
	pub limit: i64,
	#[arg(long, default_value_t = 0, allow_negative_numbers = true)]
	pub offset: i64,
}

#[derive(Debug, clap::Args)]
pub struct FacetArgs {
	#[arg(long, value_name = "UUID")]
	pub tenant: TenantId,
	#[arg(long)]
	pub prefix: Option<String>,
}

pub fn styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Red.on_default() | Effects::BOLD)
		.usage(AnsiColor::Red.on_default() | Effects::BOLD)
		.literal(AnsiColor::Blue.on_default() | Effects::BOLD)
		.placeholder(AnsiColor::Green.on_default())
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = shelf_config::load(&args.config)?;

	init_tracing(&config)?;

	if let Command::Health = args.command {
		let db = Db::connect_lazy(&config.storage.postgres)?;
		let service = ShelfService::new(config, db);

		return print_json(&service.health().await);
	}

	let db = Db::connect(&config.storage.postgres).await?;

	if let Command::InitSchema = args.command {
		db.ensure_schema().await?;

		tracing::info!(rls_role = ?db.rls_role(), "Schema is ready.");

		return Ok(());
	}

	let service = ShelfService::new(config, db);

	match args.command {
		Command::InitSchema | Command::Health => Ok(()),
		Command::Create(fields) => print_json(&service.create(create_request(fields)).await?),
		Command::Get(key) => print_json(&service.get(prompt_ref(key)).await?),
		Command::Update { prompt, fields } =>
			print_json(&service.update(update_request(prompt, fields)).await?),
		Command::Delete(key) => print_json(&service.delete(prompt_ref(key)).await?),
		Command::List(list) => print_json(&service.list(list_request(list)).await?),
		Command::Categories(facet) =>
			print_json(&service.list_categories(facet_request(facet)).await?),
		Command::Tags(facet) => print_json(&service.list_tags(facet_request(facet)).await?),
		Command::Reindex(TenantArgs { tenant }) =>
			print_json(&service.reindex(ReindexRequest { tenant_id: tenant }).await?),
	}
}

fn init_tracing(config: &shelf_config::Config) -> color_eyre::Result<()> {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	// Stdout carries the JSON result.
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.try_init()
		.map_err(|err| eyre::eyre!("Failed to install tracing subscriber: {err}."))?;

	Ok(())
}

fn print_json<T>(value: &T) -> color_eyre::Result<()>
where
	T: Serialize,
{
	println!("{}", serde_json::to_string_pretty(value)?);

	Ok(())
}

fn create_request(args: WriteArgs) -> CreatePromptRequest {
	CreatePromptRequest {
		tenant_id: args.tenant,
		title: args.title,
		body: args.body,
		category: args.category,
		tags: Some(args.tags),
	}
}

fn update_request(prompt_id: Uuid, args: WriteArgs) -> UpdatePromptRequest {
	UpdatePromptRequest {
		tenant_id: args.tenant,
		prompt_id,
		title: args.title,
		body: args.body,
		category: args.category,
		tags: Some(args.tags),
	}
}

fn prompt_ref(args: PromptArgs) -> PromptRef {
	PromptRef { tenant_id: args.tenant, prompt_id: args.prompt }
}

fn list_request(args: ListArgs) -> ListRequest {
	ListRequest {
		tenant_id: args.tenant,
		query: args.query,
		category: args.category,
		tags: args.tags.as_deref().map(filters::parse_tag_list),
		limit: args.limit,
		offset: args.offset,
	}
}

fn facet_request(args: FacetArgs) -> FacetRequest {
	FacetRequest { tenant_id: args.tenant, prefix: args.prefix }
}
