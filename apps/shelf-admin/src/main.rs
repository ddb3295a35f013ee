use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = shelf_admin::Args::parse();

	shelf_admin::run(args).await
}
