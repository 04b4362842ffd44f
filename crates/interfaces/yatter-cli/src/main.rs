use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use yatter_cli::{commands, CliConfig};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    #[arg(long, global = true, env = "YATTER_BASE_URL", default_value = yatter_config::DEFAULT_BASE_URL)]
    base_url: String,
    #[arg(long, global = true, default_value_t = yatter_config::DEFAULT_HTTP_TIMEOUT_SECS)]
    timeout_secs: u64,
    #[arg(long, global = true, help = "Directory holding session.json")]
    session_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and show the public timeline
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long, env = "YATTER_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Show the public timeline
    Timeline,
    /// Forget the stored session
    Logout,
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = CliConfig {
        base_url: cli.base_url,
        timeout_secs: cli.timeout_secs,
        session_dir: cli.session_dir,
    };

    match cli.command {
        Commands::Login { username, password } => {
            commands::cmd_login(&config, &username, &password).await?
        }
        Commands::Timeline => commands::cmd_timeline(&config).await?,
        Commands::Logout => commands::cmd_logout(&config).await?,
    }

    Ok(())
}
