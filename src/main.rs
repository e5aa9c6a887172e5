use anyhow::{Context, Result};
use clap::Parser;

use earshot::cli::CliArgs;
use earshot::config::EditorConfig;
use earshot::feedback::{CommandNarrator, LoggingFeedback, Narrator, SoxToneGenerator, ToneGenerator};
use earshot::runtime::{self, ScriptedKeys, TerminalKeys};
use earshot::session::{EditingSession, Flow};

fn backends(config: &EditorConfig) -> Result<(Box<dyn Narrator>, Box<dyn ToneGenerator>)> {
    if config.log_cues {
        tracing::info!("Logging cues instead of playing them");
        return Ok((Box::new(LoggingFeedback), Box::new(LoggingFeedback)));
    }

    let narrator = CommandNarrator::from_config(&config.speech)
        .context("no speech synthesizer (install espeak or run with --log-cues)")?;
    let tones = SoxToneGenerator::from_config(&config.tones)
        .context("no tone player (install sox or run with --log-cues)")?;
    Ok((Box::new(narrator), Box::new(tones)))
}

fn main() -> Result<()> {
    earshot::tracing::init();

    let startup = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;

    let mut config = EditorConfig::load();
    startup.apply(&mut config);

    let (narrator, tones) = backends(&config)?;

    let path = startup.path.as_deref();
    let mut session = EditingSession::open(path, narrator.as_ref(), tones.as_ref())
        .with_context(|| match path {
            Some(path) => format!("failed to open {}", path.display()),
            None => "failed to start session".to_string(),
        })?
        .with_keys(config.keys)
        .with_boundary_tone(config.tones.boundary_interval());

    let mut flow = Flow::Continue;
    if let Some(script) = &startup.script {
        flow = runtime::run(&mut session, &mut ScriptedKeys::from_text(script))?;
    }

    if flow == Flow::Continue && startup.interactive {
        let mut keys = TerminalKeys::open().context("failed to put terminal in raw mode")?;
        runtime::run(&mut session, &mut keys)?;
    }

    session.finish().context("failed to save")?;
    Ok(())
}
