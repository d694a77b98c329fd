use clap::{Parser, Subcommand};
use likes::api::http::HttpLikeApi;
use likes::config::Timeouts;
use likes::{Environment, LikeApi, LikeError, LikesConfig, like_url};
use tracing_subscriber::EnvFilter;

/// Flags override the `LIKES_*` environment variables read by
/// `LikesConfig::from_env`.
#[derive(Parser, Debug)]
#[command(name = "likes", about = "Toggle message likes on a warbler backend")]
struct Cli {
    /// `local` or `deployed` (default: `LIKES_ENV`, else local).
    #[arg(long)]
    env: Option<Environment>,

    /// Overrides the environment's default base URL.
    #[arg(long)]
    base_url: Option<String>,

    #[arg(long)]
    request_timeout_secs: Option<u64>,

    #[arg(long)]
    connect_timeout_secs: Option<u64>,

    /// Print one JSON object per result instead of plain text.
    #[arg(long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Toggle the like on each message, in order; stop at the first failure.
    Toggle {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Print the endpoint a toggle for `id` would hit.
    Url { id: String },
}

impl Cli {
    fn config(&self) -> Result<LikesConfig, LikeError> {
        let mut config = LikesConfig::from_env()?;
        if let Some(env) = self.env {
            config = config.with_environment(env);
        }
        if let Some(url) = &self.base_url {
            config = config.with_base_url(url);
        }
        let timeouts = Timeouts {
            request_secs: self.request_timeout_secs.unwrap_or(config.timeouts.request_secs),
            connect_secs: self.connect_timeout_secs.unwrap_or(config.timeouts.connect_secs),
        };
        Ok(config.with_timeouts(timeouts))
    }
}

#[tokio::main]
async fn main() -> Result<(), LikeError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config()?;

    match &cli.command {
        Command::Url { id } => {
            let url = like_url(&config.base_url, id);
            if cli.json {
                println!("{}", serde_json::json!({ "id": id, "environment": config.environment, "url": url }));
            } else {
                println!("{url}");
            }
        }
        Command::Toggle { ids } => {
            let api = HttpLikeApi::new(&config)?;
            tracing::debug!(base_url = %api.base_url(), count = ids.len(), "toggling likes");
            for id in ids {
                if let Err(e) = api.toggle_like(id).await {
                    tracing::error!(message_id = %id, error = %e, "like toggle failed");
                    return Err(e);
                }
                if cli.json {
                    println!("{}", serde_json::json!({ "id": id, "toggled": true }));
                } else {
                    println!("toggled {id}");
                }
            }
        }
    }
    Ok(())
}
