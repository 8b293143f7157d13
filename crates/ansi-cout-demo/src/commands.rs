use ansi_cout::ColorBase;
use ansi_cout::TextAttribute;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
pub use clap_complete::Shell;

const LONG_ABOUT: &str = r#"ansi-cout-demo writes ANSI escape sequences to standard output.

Sequences are written unconditionally; nothing is detected or negotiated.
Logs go to stderr (or to the file in ANSI_COUT_LOG), never to stdout.

EXAMPLES:
    # Bold, underlined text
    ansi-cout-demo attr bold underscore; echo hello; ansi-cout-demo attr normal

    # Move up two lines and clear them
    ansi-cout-demo move up 2; ansi-cout-demo erase line

    # Show every color and attribute
    ansi-cout-demo palette"#;

#[derive(Debug, Parser)]
#[command(name = "ansi-cout-demo")]
#[command(author, version)]
#[command(about = "Write ANSI escape sequences to standard output")]
#[command(long_about = LONG_ABOUT)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Report write failures as success (overrides ANSI_COUT_ON_WRITE_FAILURE)
    #[arg(long, global = true)]
    pub ignore_write_errors: bool,

    /// Flush after every sequence (overrides ANSI_COUT_AUTO_FLUSH)
    #[arg(long, global = true)]
    pub flush: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Move the cursor relative to its current position
    Move {
        direction: Direction,

        /// Rows or columns to move
        #[arg(default_value = "1")]
        count: u32,
    },

    /// Emit the (unterminated) position sequence ESC[x;y
    Position { x: u32, y: u32 },

    /// Save the cursor position
    Save,

    /// Restore the saved cursor position
    Restore,

    /// Erase the display or the rest of the line
    Erase { target: EraseTarget },

    /// Set colors by name (black, red, green, yellow, blue, magenta, cyan, white)
    Color {
        /// Color passed to the foreground method (SGR 40-47)
        #[arg(long)]
        fg: Option<ColorBase>,

        /// Color passed to the background method (SGR 30-37)
        #[arg(long)]
        bg: Option<ColorBase>,
    },

    /// Set text attributes (normal, bold, underscore, blink, reverse-video, concealed)
    Attr {
        #[arg(required = true)]
        attributes: Vec<TextAttribute>,
    },

    /// Emit a raw graphics-mode sequence; no values emits ESC[m
    Sgr { values: Vec<u16> },

    /// Set or reset an ANSI.SYS screen mode by number
    Mode { action: ModeAction, mode: u16 },

    /// Print every color and attribute, then reset
    Palette,

    /// Generate shell completion scripts
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    Up,
    Down,
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EraseTarget {
    Display,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeAction {
    Set,
    Reset,
}
