use clap::Parser;
use sublock::cli::Args;
use sublock::output;
use sublock::pipeline::find_and_check_subdomains;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    output::print_banner();

    let args = Args::parse();
    tracing::debug!(domain = %args.domain, threads = args.threads, "starting");

    find_and_check_subdomains(&args.domain, args.threads).await?;
    Ok(())
}
