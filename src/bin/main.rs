//! Line-driven host for the panel viewer.
//!
//! Plays the presentation layer: loads the manifest, restores session state,
//! feeds raw input read from stdin and prints what a page would show.

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};
use panelview_core::{
    app::ViewerApp,
    config::ViewerConfig,
    input::RawInput,
    manifest::EpisodeManifest,
    session::{MemorySessionStore, SessionStore},
};

use commands::Command;
use session_file::FileSessionStore;

#[path = "main/commands.rs"]
mod commands;
#[path = "main/output.rs"]
mod output;
#[path = "main/session_file.rs"]
mod session_file;

#[derive(Parser, Debug)]
#[command(
    name = "panelview",
    about = "Page through episode panels listed in a JSON manifest"
)]
struct Cli {
    /// Episode manifest to load
    #[arg(long, default_value = "comics.json")]
    manifest: PathBuf,
    /// Location fragment to open at startup, e.g. `ep1:3`
    #[arg(long)]
    fragment: Option<String>,
    /// Scratch file standing in for tab session storage (memory when omitted)
    #[arg(long)]
    session_file: Option<PathBuf>,
    /// Minimum horizontal swipe travel in pixels
    #[arg(long, default_value_t = 40)]
    swipe_threshold: u32,
    /// Minimum vertical swipe travel in pixels
    #[arg(long, default_value_t = 50)]
    vertical_threshold: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = ViewerConfig::default()
        .with_horizontal_swipe_px(cli.swipe_threshold)
        .with_vertical_swipe_px(cli.vertical_threshold);

    match cli.session_file.as_ref() {
        Some(path) => run(&cli, FileSessionStore::new(path), config),
        None => run(&cli, MemorySessionStore::new(), config),
    }
}

fn run<S: SessionStore>(cli: &Cli, store: S, config: ViewerConfig) -> Result<()> {
    // Navigation stays inert until the manifest is in.
    let mut app = ViewerApp::new(EpisodeManifest::empty(), store, config);
    match EpisodeManifest::from_path(&cli.manifest) {
        Ok(manifest) => app.replace_manifest(manifest),
        Err(err) => warn!(
            "manifest: load failed path={} err={}; continuing without episodes",
            cli.manifest.display(),
            err
        ),
    }
    app.restore_from_fragment(cli.fragment.as_deref());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::write_screen(&mut out, &app.screen())?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        let command = match commands::parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                warn!("input: {err:#}");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::List => output::write_episode_list(&mut out, &app.episode_list())?,
            Command::Show => output::write_screen(&mut out, &app.screen())?,
            Command::Input(raw) => apply_input(&mut app, raw, &mut out)?,
        }
        out.flush()?;
    }

    info!("viewer: exit mode={:?}", app.mode());
    Ok(())
}

fn apply_input<S: SessionStore>(
    app: &mut ViewerApp<S>,
    raw: RawInput,
    out: &mut impl Write,
) -> Result<()> {
    let Some(transition) = app.handle_input(raw) else {
        return Ok(());
    };

    if let Some(fragment) = transition.fragment.as_deref() {
        output::write_fragment(out, fragment)?;
        // A browser reports the new fragment back as a change notification.
        let echo = app.handle_input(RawInput::FragmentChanged(format!("#{fragment}")));
        debug!("input: echo handled transition={:?}", echo);
    }

    if transition.changed {
        output::write_screen(out, &app.screen())?;
    }
    Ok(())
}
