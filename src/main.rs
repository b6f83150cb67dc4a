use std::io;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use joy_zoo::console::Console;
use joy_zoo::menu::{Menu, MenuState, Settings};
use joy_zoo::zoo::Zoo;

#[derive(Parser)]
#[command(name = "joy-zoo")]
#[command(about = "Browse and manage the animals of JOY Zoo")]
struct Cli {
    /// Show the menu again after each action until Exit is chosen
    #[arg(long)]
    repeat: bool,

    /// Skip the welcome banner
    #[arg(long)]
    no_banner: bool,
}

/// Initialize tracing on stderr so stdout carries only the console dialogue
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "joy_zoo=warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let settings = Settings {
        repeat: cli.repeat,
        banner: !cli.no_banner,
    };

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut menu = Menu::new(console, Zoo::with_residents());

    if menu.run(settings)? == MenuState::Terminated {
        tracing::debug!("exit requested");
    }

    Ok(())
}
