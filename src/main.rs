use anyhow::Result;
use clap::Parser;
use gridsnake::game::GameConfig;
use gridsnake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "gridsnake")]
#[command(version, about = "Classic snake on a fixed 20x20 grid")]
struct Cli {
    /// Disable sound effects
    #[arg(long)]
    mute: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // Grid size and speed are fixed; the config carries the reference
    // constants.
    let config = GameConfig::default();

    let mut human_mode = HumanMode::new(config, cli.mute);
    human_mode.run().await?;

    Ok(())
}
