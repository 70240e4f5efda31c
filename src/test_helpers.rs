//! Shared test utilities for the art-preview test suite.
//!
//! Builds a throwaway batch laid out the way users keep one on disk:
//!
//! ```text
//! tmp/
//! ├── frames/      # frame mockups (empty files; names are what matter)
//! └── work/        # working directory holding the artwork
//! ```
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let batch = BatchFixture::new(&["wraps/GW-24-30.png"], &["piece-vertical.png"]);
//! let plan = plan(&batch.working_dir(), &PreviewConfig::default()).unwrap();
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct BatchFixture {
    pub tmp: TempDir,
}

impl BatchFixture {
    /// Create `frames/` and `work/` with empty files at the given relative paths.
    pub fn new(frames: &[&str], artwork: &[&str]) -> Self {
        let tmp = TempDir::new().unwrap();
        let fixture = Self { tmp };
        fs::create_dir_all(fixture.frames_dir()).unwrap();
        fs::create_dir_all(fixture.working_dir()).unwrap();
        for name in frames {
            touch(&fixture.frames_dir().join(name));
        }
        for name in artwork {
            touch(&fixture.working_dir().join(name));
        }
        fixture
    }

    pub fn working_dir(&self) -> PathBuf {
        self.tmp.path().join("work")
    }

    pub fn frames_dir(&self) -> PathBuf {
        self.tmp.path().join("frames")
    }

    /// Default output directory for the stock config.
    pub fn output_dir(&self) -> PathBuf {
        self.working_dir().join("output")
    }
}

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}

/// File names of a list of paths, in order.
pub fn file_names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect()
}
