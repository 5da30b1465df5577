use clap::Parser;
use ira_cli::{logging, run, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_json);
    let stdout = std::io::stdout();
    run(cli, &mut stdout.lock()).await
}
