//! Shared reporting for command handlers.
//!
//! Requested output goes to stdout; everything else goes to stderr as
//! `error:` or `note:` lines. Notes are gated by verbosity.

use std::fmt;
use std::path::Path;

use dispatchgen_compiler::WrittenArtifact;
use dispatchgen_core::Colors;

pub struct Reporter {
    colors: Colors,
    verbosity: u8,
}

impl Reporter {
    pub fn new(color: bool, verbosity: u8) -> Self {
        Self {
            colors: Colors::new(color),
            verbosity,
        }
    }

    pub fn colors(&self) -> Colors {
        self.colors
    }

    /// Print `error: <err>` and exit with status 1.
    pub fn fail(&self, err: impl fmt::Display) -> ! {
        let c = self.colors;
        eprintln!("{}error{}: {}", c.red, c.reset, err);
        std::process::exit(1)
    }

    /// Print `note: <msg>` when running at `level` or above.
    pub fn note(&self, level: u8, msg: impl fmt::Display) {
        if self.verbosity < level {
            return;
        }
        let c = self.colors;
        eprintln!("{}note{}: {}", c.green, c.reset, msg);
    }

    pub fn written(&self, artifact: &WrittenArtifact) {
        let c = self.colors;
        self.note(
            1,
            format_args!(
                "wrote {}{}{} {}({}, {}){}",
                c.blue,
                artifact.class_name,
                c.reset,
                c.dim,
                artifact.interface.display(),
                artifact.implementation.display(),
                c.reset
            ),
        );
        match artifact.geometry {
            Some(geometry) => self.note(
                2,
                format_args!(
                    "{}: {} entries, {}",
                    artifact.class_name, artifact.entries, geometry
                ),
            ),
            None => self.note(
                2,
                format_args!("{}: {} entries", artifact.class_name, artifact.entries),
            ),
        }
    }

    pub fn removed(&self, path: &Path) {
        let c = self.colors;
        self.note(
            1,
            format_args!("removed {}{}{}", c.dim, path.display(), c.reset),
        );
    }
}
