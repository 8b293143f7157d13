use std::io;
use std::io::Write;

use tracing::{trace, warn};

use crate::config::EmitterConfig;
use crate::config::WriteFailurePolicy;
use crate::error::EmitError;
use crate::sequence;
use crate::types::ColorBase;
use crate::types::ScreenMode;
use crate::types::TextAttribute;
use crate::Result;

/// Writes ANSI escape sequences to a sink.
///
/// The emitter keeps no terminal state: every call formats one complete
/// sequence and hands it to the sink in a single `write_all`. Whether a
/// failing sink surfaces as an error is decided by
/// [`EmitterConfig::on_write_failure`].
#[derive(Debug)]
pub struct Emitter<W: Write = io::Stdout> {
    out: W,
    config: EmitterConfig,
}

impl Emitter<io::Stdout> {
    /// An emitter on process standard output, configured from the environment.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W) -> Self {
        Self::with_config(out, EmitterConfig::default())
    }

    pub fn with_config(out: W, config: EmitterConfig) -> Self {
        Self { out, config }
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// `ESC[x;y`.
    ///
    /// Note that no `H` follows the coordinates, so most terminals will not
    /// treat this as a complete cursor-position command.
    pub fn position(&mut self, x: u32, y: u32) -> Result<()> {
        self.emit("position", &sequence::position(x, y))
    }

    /// Moves the cursor up `n` rows. Terminals ignore this on the top row.
    pub fn cursor_up(&mut self, n: u32) -> Result<()> {
        self.emit("cursor_up", &sequence::cursor_up(n))
    }

    pub fn cursor_down(&mut self, n: u32) -> Result<()> {
        self.emit("cursor_down", &sequence::cursor_down(n))
    }

    pub fn cursor_forward(&mut self, n: u32) -> Result<()> {
        self.emit("cursor_forward", &sequence::cursor_forward(n))
    }

    pub fn cursor_backward(&mut self, n: u32) -> Result<()> {
        self.emit("cursor_backward", &sequence::cursor_backward(n))
    }

    /// `cursor_up(1)`.
    pub fn up(&mut self) -> Result<()> {
        self.cursor_up(1)
    }

    /// `cursor_down(1)`.
    pub fn down(&mut self) -> Result<()> {
        self.cursor_down(1)
    }

    /// `cursor_forward(1)`.
    pub fn forward(&mut self) -> Result<()> {
        self.cursor_forward(1)
    }

    /// `cursor_backward(1)`.
    pub fn backward(&mut self) -> Result<()> {
        self.cursor_backward(1)
    }

    pub fn cursor_save(&mut self) -> Result<()> {
        self.emit("cursor_save", &sequence::cursor_save())
    }

    /// Returns to the position stored by [`cursor_save`](Self::cursor_save).
    pub fn cursor_restore(&mut self) -> Result<()> {
        self.emit("cursor_restore", &sequence::cursor_restore())
    }

    /// Clears the screen; the terminal homes the cursor.
    pub fn erase_display(&mut self) -> Result<()> {
        self.emit("erase_display", &sequence::erase_display())
    }

    /// Clears from the cursor to the end of the line, cursor cell included.
    pub fn erase_line(&mut self) -> Result<()> {
        self.emit("erase_line", &sequence::erase_line())
    }

    /// SGR `color + 40`.
    ///
    /// 40-47 is the ANSI *background* range; see [`background`](Self::background).
    pub fn foreground(&mut self, color: ColorBase) -> Result<()> {
        self.emit("foreground", &sequence::foreground(color))
    }

    /// SGR `color + 30`, the ANSI foreground range.
    pub fn background(&mut self, color: ColorBase) -> Result<()> {
        self.emit("background", &sequence::background(color))
    }

    /// One SGR carrying every attribute, in order.
    pub fn attribute(&mut self, attrs: &[TextAttribute]) -> Result<()> {
        self.emit("attribute", &sequence::attribute(attrs))
    }

    pub fn blink(&mut self) -> Result<()> {
        self.attribute(&[TextAttribute::Blink])
    }

    pub fn normal(&mut self) -> Result<()> {
        self.attribute(&[TextAttribute::Normal])
    }

    pub fn bold(&mut self) -> Result<()> {
        self.attribute(&[TextAttribute::Bold])
    }

    pub fn underscore(&mut self) -> Result<()> {
        self.attribute(&[TextAttribute::Underscore])
    }

    pub fn concealed(&mut self) -> Result<()> {
        self.attribute(&[TextAttribute::Concealed])
    }

    pub fn reverse_video(&mut self) -> Result<()> {
        self.attribute(&[TextAttribute::ReverseVideo])
    }

    /// Raw SGR: `ESC[v0;v1;...m`. With no values this is `ESC[m`.
    ///
    /// Graphics settings stay active until the next SGR.
    pub fn set_graphics_mode(&mut self, values: &[u16]) -> Result<()> {
        self.emit("set_graphics_mode", &sequence::set_graphics_mode(values))
    }

    /// ANSI.SYS Set Mode, `ESC[=<mode>h`.
    pub fn set_mode(&mut self, mode: ScreenMode) -> Result<()> {
        self.emit("set_mode", &sequence::set_mode(mode))
    }

    /// ANSI.SYS Reset Mode, `ESC[=<mode>l`.
    pub fn reset_mode(&mut self, mode: ScreenMode) -> Result<()> {
        self.emit("reset_mode", &sequence::reset_mode(mode))
    }

    /// Plain text between sequences, under the same failure policy.
    pub fn text(&mut self, text: &str) -> Result<()> {
        self.emit("text", text)
    }

    pub fn flush(&mut self) -> Result<()> {
        match self.out.flush() {
            Ok(()) => Ok(()),
            Err(e) => self.handle_failure(EmitError::Flush(e)),
        }
    }

    fn emit(&mut self, operation: &'static str, seq: &str) -> Result<()> {
        trace!(operation, bytes = seq.len(), "emit");

        if let Err(source) = self.out.write_all(seq.as_bytes()) {
            return self.handle_failure(EmitError::Write { operation, source });
        }

        if self.config.auto_flush {
            self.flush()?;
        }
        Ok(())
    }

    fn handle_failure(&self, err: EmitError) -> Result<()> {
        match self.config.on_write_failure {
            WriteFailurePolicy::Propagate => Err(err),
            WriteFailurePolicy::Ignore => {
                warn!(
                    operation = err.operation(),
                    error = %err,
                    "ignoring failed write"
                );
                Ok(())
            }
        }
    }
}
