//! Realm terminal client.
//!
//! Line-oriented front end: type a command and press enter, the map and the
//! message log are redrawn after every turn.
//!
//! # Examples
//!
//! ```bash
//! # Replay a fixed world with custom content
//! REALM_SEED=42 REALM_DATA_DIR=./data cargo run -p realm-client
//! ```

mod command;
mod config;
mod render;

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use realm_content::ContentFactory;
use realm_runtime::GameSession;

use command::{Command, HELP};
use config::CliConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_env();
    let content = ContentFactory::new(&config.data_dir)
        .load()
        .with_context(|| format!("loading content from {}", config.data_dir.display()))?;
    let seed = config.seed.unwrap_or_else(clock_seed);

    tracing::info!(seed, data_dir = %config.data_dir.display(), "starting realm");
    let mut session = GameSession::with_config(content, seed, config.session())?;

    run(&mut session)?;

    tracing::info!(turns = session.turn(), "session closed");
    Ok(())
}

fn run(session: &mut GameSession) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    draw(&mut stdout, session)?;
    for line in stdin.lock().lines() {
        let line = line.context("reading input")?;
        match Command::parse(&line, session.mode()) {
            Some(Command::Quit) => break,
            Some(Command::Help) => writeln!(stdout, "{HELP}")?,
            Some(Command::Play(intent)) => {
                if let Err(error) = session.submit(intent) {
                    writeln!(stdout, "{error}")?;
                }
                draw(&mut stdout, session)?;
            }
            None => writeln!(stdout, "Unknown command. Type ? for help.")?,
        }
        stdout.flush()?;
    }
    Ok(())
}

fn draw(out: &mut impl Write, session: &GameSession) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{}", render::screen(session.state(), session.log()))?;
    write!(out, "> ")?;
    out.flush()
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
