use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use scdlcli::{cli, config, error, selection::TrackSelection, types::GatherMode};

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
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Download the tracks behind a SoundCloud URL
    Download(DownloadOptions),

    /// Download charted tracks for a genre
    Charts(ChartsOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct DownloadOptions {
    /// URL of a track, user profile, or playlist
    pub url: String,

    /// Directory to save the tracks in
    #[clap(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Maximum number of successful downloads
    #[clap(short, long)]
    pub limit: Option<usize>,

    /// 1-based track positions to always download
    #[clap(short, long, num_args = 1.., value_name = "POS")]
    pub include: Vec<usize>,

    /// 1-based track positions to skip
    #[clap(short, long, num_args = 1.., value_name = "POS")]
    pub exclude: Vec<usize>,

    /// Inclusive positional range to download
    #[clap(short, long, num_args = 2, value_names = ["START", "END"])]
    pub range: Option<Vec<usize>>,

    /// Download a user's liked tracks instead of their uploads
    #[clap(long)]
    pub likes: bool,

    /// Download a user's liked and uploaded tracks
    #[clap(long)]
    pub all: bool,

    /// Also download tracks similar to the resolved track
    #[clap(long)]
    pub similar: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ChartsOptions {
    /// Fetch the trending chart instead of the top chart
    #[clap(long)]
    pub new: bool,

    /// Chart genre
    #[clap(short, long, default_value = "all-music")]
    pub genre: String,

    /// Number of charted tracks to download
    #[clap(short, long, default_value_t = 10)]
    pub limit: usize,

    /// Directory to save the tracks in
    #[clap(short, long, default_value = ".")]
    pub dir: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Download(opt) => {
            let range = opt.range.map(|r| (r[0], r[1]));
            let selection = TrackSelection::new(opt.limit, opt.include, opt.exclude, range);
            let mode = GatherMode {
                likes: opt.likes,
                all: opt.all,
                similar: opt.similar,
            };
            cli::download(opt.url, opt.dir, selection, mode).await
        }
        Command::Charts(opt) => cli::charts(opt.new, opt.genre, opt.limit, opt.dir).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
