mod commands;

use std::io;
use std::io::Write;
use std::process::ExitCode;

use ansi_cout::{
    ColorBase, EmitError, Emitter, EmitterConfig, ScreenMode, TextAttribute, WriteFailurePolicy,
};
use ansi_cout_common::init_tracing;
use clap::CommandFactory;
use clap::Parser;
use clap_complete::generate;
use thiserror::Error;
use tracing::{debug, error};

use commands::{Cli, Commands, Direction, EraseTarget, ModeAction, Shell};

#[derive(Error, Debug)]
enum DemoError {
    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error("Unknown screen mode {0}")]
    UnknownMode(u16),
}

impl DemoError {
    fn exit_code(&self) -> u8 {
        match self {
            DemoError::Emit(_) => 74,        // EX_IOERR
            DemoError::UnknownMode(_) => 64, // EX_USAGE
        }
    }

    fn suggestion(&self) -> String {
        match self {
            DemoError::Emit(e) => e.suggestion(),
            DemoError::UnknownMode(_) => {
                "Valid modes are 0-7 and 13-19. Mode 7 toggles line wrapping.".to_string()
            }
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(self, DemoError::Emit(e) if e.is_retryable())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let telemetry = init_tracing(if cli.verbose { "debug" } else { "warn" });

    let code = match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match &e {
                DemoError::Emit(emit) => {
                    error!(context = %emit.context(), "command failed: {}", e)
                }
                DemoError::UnknownMode(_) => error!("command failed: {}", e),
            }
            eprintln!("Error: {}", e);
            eprintln!("Suggestion: {}", e.suggestion());
            if e.is_retryable() {
                eprintln!("(This error may be transient - retry may succeed)");
            }
            ExitCode::from(e.exit_code())
        }
    };

    telemetry.shutdown();
    code
}

fn run(cli: Cli) -> Result<(), DemoError> {
    let mut config = EmitterConfig::from_env();
    if cli.ignore_write_errors {
        config = config.with_on_write_failure(WriteFailurePolicy::Ignore);
    }
    if cli.flush {
        config = config.with_auto_flush(true);
    }
    debug!(?config, command = ?cli.command, "running");

    let mut emitter = Emitter::with_config(io::stdout().lock(), config);

    match cli.command {
        Commands::Move { direction, count } => match direction {
            Direction::Up => emitter.cursor_up(count)?,
            Direction::Down => emitter.cursor_down(count)?,
            Direction::Forward => emitter.cursor_forward(count)?,
            Direction::Backward => emitter.cursor_backward(count)?,
        },
        Commands::Position { x, y } => emitter.position(x, y)?,
        Commands::Save => emitter.cursor_save()?,
        Commands::Restore => emitter.cursor_restore()?,
        Commands::Erase { target } => match target {
            EraseTarget::Display => emitter.erase_display()?,
            EraseTarget::Line => emitter.erase_line()?,
        },
        Commands::Color { fg, bg } => {
            if let Some(color) = fg {
                emitter.foreground(color)?;
            }
            if let Some(color) = bg {
                emitter.background(color)?;
            }
        }
        Commands::Attr { attributes } => emitter.attribute(&attributes)?,
        Commands::Sgr { values } => emitter.set_graphics_mode(&values)?,
        Commands::Mode { action, mode } => {
            let mode = ScreenMode::from_code(mode).ok_or(DemoError::UnknownMode(mode))?;
            match action {
                ModeAction::Set => emitter.set_mode(mode)?,
                ModeAction::Reset => emitter.reset_mode(mode)?,
            }
        }
        Commands::Palette => palette(&mut emitter)?,
        Commands::Completions { shell } => completions(shell, &mut emitter)?,
    }

    emitter.flush()?;
    Ok(())
}

fn palette<W: Write>(emitter: &mut Emitter<W>) -> Result<(), EmitError> {
    for color in ColorBase::ALL {
        emitter.background(color)?;
        emitter.text(&format!("{:<8}", color))?;
        emitter.normal()?;
        emitter.text(" ")?;
        emitter.foreground(color)?;
        emitter.text(&format!("{:<8}", color))?;
        emitter.normal()?;
        emitter.text("\n")?;
    }

    for attr in TextAttribute::ALL {
        emitter.attribute(&[attr])?;
        emitter.text(attr.name())?;
        emitter.normal()?;
        emitter.text("\n")?;
    }

    emitter.set_graphics_mode(&[])
}

// generate() panics on a failed write, so render into memory first.
fn completions<W: Write>(shell: Shell, emitter: &mut Emitter<W>) -> Result<(), EmitError> {
    let mut script = Vec::new();
    generate(shell, &mut Cli::command(), "ansi-cout-demo", &mut script);
    emitter.text(&String::from_utf8_lossy(&script))
}
