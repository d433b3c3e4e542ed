//! Shared helpers for the directory suite

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;
use tempfile::TempDir;

use rolodex::{ContactValues, Directory, DirectoryConfig, Gender, Observer};

/// Route test logging through tracing; safe to call from every test.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

pub fn table_path(dir: &TempDir) -> PathBuf {
    dir.path().join("contacts.tbl")
}

pub fn open_directory(dir: &TempDir) -> Directory {
    init_logging();
    Directory::open(DirectoryConfig::new(table_path(dir))).unwrap()
}

pub fn terminous() -> ContactValues {
    ContactValues::new()
        .name("Terminous")
        .email("abc@ijk.xyz")
        .gender(Gender::Male)
        .mobile("9718666289")
}

/// Observer that records every address it hears about.
pub struct Recorder {
    pub seen: Mutex<Vec<String>>,
}

impl Recorder {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            seen: Mutex::new(Vec::new()),
        })
    }
}

impl Observer for Recorder {
    fn on_change(&self, address: &str) {
        self.seen.lock().push(address.to_string());
    }
}
