//! Command-line argument parsing for the keymatch binary
//!
//! Supports:
//! - Checking one key event against an accelerator
//! - Printing how an accelerator parses on a given platform
//! - Listing the commands a shortcut file would fire for an event

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use keymatch::accelerator::{KeyInput, Modifiers, PlatformSetting};

/// Match keyboard events against accelerator patterns
#[derive(Parser, Debug)]
#[command(name = "keymatch", version, about = "Match key events against accelerators")]
pub struct CliArgs {
    /// Log at debug level when RUST_LOG is unset
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Check whether a key event satisfies an accelerator
    Check {
        /// Accelerator, e.g. "CmdOrCtrl+Shift+S"
        pattern: String,

        #[command(flatten)]
        event: EventArgs,

        /// Platform the Apple-only aliases resolve for (auto, apple, other)
        #[arg(long, default_value_t = PlatformSetting::Auto)]
        platform: PlatformSetting,
    },

    /// Print the parsed form of an accelerator
    Parse {
        pattern: String,

        /// Platform the Apple-only aliases resolve for (auto, apple, other)
        #[arg(long, default_value_t = PlatformSetting::Auto)]
        platform: PlatformSetting,

        /// Print JSON instead of the display form
        #[arg(long)]
        json: bool,
    },

    /// List the commands a shortcut file binds to a key event, in file order
    Dispatch {
        #[command(flatten)]
        event: EventArgs,

        /// Shortcut file (defaults to ~/.config/keymatch/shortcuts.yaml)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

/// A key event described on the command line
#[derive(Args, Debug, Clone)]
pub struct EventArgs {
    /// Key label as a DOM KeyboardEvent would report it ("Enter", " ", "ArrowUp", "s")
    #[arg(long, allow_hyphen_values = true)]
    pub key: String,

    #[arg(long)]
    pub ctrl: bool,

    #[arg(long)]
    pub alt: bool,

    #[arg(long)]
    pub shift: bool,

    /// Cmd on macOS, Win/Super elsewhere
    #[arg(long)]
    pub meta: bool,
}

impl EventArgs {
    pub fn to_key_input(&self) -> KeyInput {
        KeyInput::new(
            self.key.clone(),
            Modifiers::new(self.ctrl, self.shift, self.alt, self.meta),
        )
    }
}
