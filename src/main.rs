use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use washcli::{cli, config, error};

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
    /// Run the proxy server
    Serve,

    /// Continuously display remaining cycle time
    Watch(WatchOptions),

    /// One-shot status table for all machines
    Status(StatusOptions),

    /// Authorize with the SmartThings API
    Auth,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct WatchOptions {
    /// Watch a single machine number instead of all of them
    #[clap(long)]
    pub machine: Option<usize>,

    /// Poll interval in seconds (default from WATCH_INTERVAL_SECS or 30)
    #[clap(long)]
    pub interval: Option<u64>,
}

#[derive(Parser, Debug, Clone)]
pub struct StatusOptions {
    /// Query a single machine number instead of all of them
    #[clap(long)]
    pub machine: Option<usize>,
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
        Command::Serve => cli::serve().await,
        Command::Watch(opt) => cli::watch(opt.machine, opt.interval).await,
        Command::Status(opt) => cli::status(opt.machine).await,
        Command::Auth => cli::auth().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
