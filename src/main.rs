use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use moodtune::{cli, config, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the local Spotify token broker
    Serve(ServeOptions),

    /// Get song recommendations for a mood
    Recommend(RecommendOptions),

    /// Show past recommendations
    History(HistoryOptions),

    /// Open a song from history in the browser
    Open(OpenOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Address to bind, e.g. 127.0.0.1:5004 (defaults to SERVER_ADDRESS)
    #[clap(long)]
    pub address: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct RecommendOptions {
    /// Describe your mood (e.g. "I'm tired but hopeful")
    #[clap(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Fetch catalog tokens from a running broker instead of using local credentials
    #[clap(long)]
    pub broker_url: Option<String>,

    /// Look up all songs concurrently
    #[clap(long)]
    pub parallel: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct HistoryOptions {
    /// Only list the most recent N entries
    #[clap(long)]
    pub limit: Option<usize>,

    /// Print the songs of entry N (1 = most recent)
    #[clap(long)]
    pub show: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct OpenOptions {
    /// History entry (1 = most recent)
    pub entry: usize,

    /// Song within the entry (1-5)
    pub song: usize,

    /// Open the YouTube search instead of Spotify
    #[clap(long)]
    pub youtube: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Command::Serve(_) => init_tracing("moodtune=info,tower_http=info"),
        _ => init_tracing("moodtune=warn"),
    }

    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment file. Err: {}", e);
    }

    match cli.command {
        Command::Serve(opt) => cli::serve(opt.address).await,
        Command::Recommend(opt) => {
            cli::recommend(opt.text.join(" "), opt.broker_url, opt.parallel).await
        }
        Command::History(opt) => cli::history(opt.limit, opt.show).await,
        Command::Open(opt) => cli::open(opt.entry, opt.song, opt.youtube).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
