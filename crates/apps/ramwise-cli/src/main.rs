use anyhow::Result;
use clap::{Parser, Subcommand};

mod calc;
mod clear;
mod compare;
mod config;
mod history;
mod input;
mod load;
mod preset;
mod tutorial;
mod ui;

#[derive(Parser)]
#[command(name = "ramwise")]
#[command(version = "0.1.0")]
#[command(about = "Ramwise - NAS memory sizing advisor", long_about = None)]
#[command(styles = styles())]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

fn styles() -> clap::builder::Styles {
    use clap::builder::styling::{AnsiColor, Effects, Styles};
    Styles::styled()
        .header(AnsiColor::Magenta.on_default() | Effects::BOLD)
        .usage(AnsiColor::Magenta.on_default() | Effects::BOLD)
        .literal(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default())
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Compute a sizing recommendation")]
    Calc(calc::CalcArgs),
    #[command(about = "List presets or show one template")]
    Preset { name: Option<String> },
    #[command(about = "Show saved configurations")]
    History {
        #[arg(long, short)]
        limit: Option<usize>,
        #[arg(long)]
        all: bool,
    },
    #[command(about = "Recompute from the most recent saved configuration")]
    Load,
    #[command(about = "Compare saved configurations side by side")]
    Compare {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    #[command(about = "Delete all saved configurations")]
    Clear {
        #[arg(long, short)]
        yes: bool,
    },
    #[command(about = "Manage settings")]
    Config {
        #[arg(long, short)]
        get: Option<String>,
        #[arg(long, short)]
        set: Option<String>,
        #[arg(long)]
        reset: bool,
    },
    #[command(about = "Show the getting-started walkthrough")]
    Tutorial,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Calc(args)) => calc::handle_calc(args),
        Some(Commands::Preset { name }) => preset::handle_preset(name),
        Some(Commands::History { limit, all }) => history::handle_history(limit, all),
        Some(Commands::Load) => load::handle_load(),
        Some(Commands::Compare { ids }) => compare::handle_compare(ids),
        Some(Commands::Clear { yes }) => clear::handle_clear(yes),
        Some(Commands::Config { get, set, reset }) => config::handle_config(get, set, reset),
        Some(Commands::Tutorial) => tutorial::handle_tutorial(),
        None => history::handle_history(None, false),
    }
}
