// Entry point: loads config, applies CLI/env overrides, and runs the TUI.

use clap::Parser;

use tubegrid::app::App;
use tubegrid::config::Config;
use tubegrid::logging;

#[derive(Parser)]
#[command(name = "tubegrid", about = "Browse trending videos and play them in the terminal")]
struct Cli {
    /// Backend base URL serving /api/trending and /api/search.
    #[arg(long, env = "TUBEGRID_BACKEND_URL")]
    backend_url: Option<String>,

    /// Host used for https://<host>/embed/<id>.
    #[arg(long)]
    embed_host: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_default();
    if let Some(url) = cli.backend_url {
        config.backend.base_url = url;
    }
    if let Some(host) = cli.embed_host {
        config.embed.host = host;
    }
    logging::init(&config.general.log_level)?;

    let mut app = App::new(config)?;
    app.run().await?;

    Ok(())
}
