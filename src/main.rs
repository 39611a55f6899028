use anyhow::{Context, bail};
use canvasboard::config::Config;
use canvasboard::input::InputState;
use canvasboard::script;
use clap::{ArgAction, Parser};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "canvasboard")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("CANVASBOARD_GIT_HASH"), ")"),
    about = "Vector whiteboard core with headless event replay"
)]
struct Cli {
    /// Event script to replay (one command per line)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Write the final surface to this PNG file
    #[arg(long, short = 'o', value_name = "PNG", requires = "script")]
    output: Option<PathBuf>,

    /// Configuration file (defaults to ~/.config/canvasboard/config.toml)
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Initial surface width in pixels
    #[arg(long, default_value_t = 800)]
    width: i32,

    /// Initial surface height in pixels
    #[arg(long, default_value_t = 600)]
    height: i32,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = match cli.config {
            Some(path) => path,
            None => Config::get_config_path()?,
        };
        Config::create_default_file(&path)?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let Some(script_path) = cli.script else {
        bail!("Nothing to do: pass --script FILE (and optionally --output PNG), or --init-config");
    };

    if cli.width <= 0 || cli.height <= 0 {
        bail!("Surface size must be positive, got {}x{}", cli.width, cli.height);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    let source = fs::read_to_string(&script_path)
        .with_context(|| format!("Failed to read script {}", script_path.display()))?;
    let commands = script::parse_script(&source)
        .with_context(|| format!("Invalid script {}", script_path.display()))?;

    let mut state = InputState::from_config(&config)?;
    state.resize(cli.width, cli.height);
    script::run(&mut state, &commands);

    log::info!(
        "Replayed {} commands: {} element(s), zoom {}%",
        commands.len(),
        state.scene().len(),
        state.viewport().zoom_percent()
    );
    println!("{} element(s)", state.scene().len());

    if let Some(output) = cli.output {
        let surface = state
            .surface_mut()
            .context("Script left no surface to write")?;
        surface
            .write_png(&output)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        log::info!("Wrote {}", output.display());
    }

    Ok(())
}
