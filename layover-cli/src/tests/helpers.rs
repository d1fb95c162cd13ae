//! Test helpers for writing terminal documents into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use layover_core::TerminalSpec;
use layover_core::test_support::{sample_locations, sample_rows};
use tempfile::TempDir;

use super::*;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write file");
}

/// A temporary directory holding a terminal document.
#[derive(Debug)]
pub(super) struct TerminalWorkspace {
    _dir: TempDir,
    root: Utf8PathBuf,
    terminal_path: Utf8PathBuf,
}

impl TerminalWorkspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let terminal_path = root.join("terminal.json");
        Self {
            _dir: dir,
            root,
            terminal_path,
        }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn terminal_path(&self) -> &Utf8Path {
        &self.terminal_path
    }

    pub(super) fn write_terminal(&self, spec: &TerminalSpec) {
        let payload = serde_json::to_string_pretty(spec).expect("serialise terminal");
        write_utf8(&self.terminal_path, payload.as_bytes());
    }

    pub(super) fn write_sample_terminal(&self) {
        self.write_terminal(&sample_document());
    }
}

pub(super) fn sample_document() -> TerminalSpec {
    TerminalSpec {
        locations: sample_locations(),
        adjacency: sample_rows(),
    }
}

/// Plan arguments for the sample scenario: a six-hour layover from the
/// arrival gate to the departure gate with lounge, food and quick interests.
pub(super) fn sample_args(terminal: &Utf8Path) -> PlanArgs {
    PlanArgs {
        terminal: Some(terminal.to_path_buf()),
        arrival: Some(0),
        departure: Some(1),
        layover_minutes: Some(360),
        interests: Some(vec!["lounge".into(), "food".into(), "quick".into()]),
        ..PlanArgs::default()
    }
}
