//! Common test utilities for stalepkg integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A fake system: an installed package database plus a saved merge log
pub struct TestSystem {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the temporary root
    pub path: PathBuf,
}

impl TestSystem {
    /// Create a new test system with an empty package database
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join("db")).expect("Failed to create db directory");
        Self { temp, path }
    }

    /// Path to the package database
    pub fn db_path(&self) -> PathBuf {
        self.path.join("db")
    }

    /// Path to the saved merge log
    pub fn log_path(&self) -> PathBuf {
        self.path.join("merge.log")
    }

    /// Mark `category/package-version` as installed
    #[allow(dead_code)]
    pub fn install(&self, cpv: &str) {
        let dir = self.db_path().join(cpv);
        std::fs::create_dir_all(&dir).expect("Failed to create package entry");
        std::fs::write(dir.join("SLOT"), "0\n").expect("Failed to write SLOT");
    }

    /// Mark a package as installed in a specific slot
    #[allow(dead_code)]
    pub fn install_slotted(&self, cpv: &str, slot: &str) {
        let dir = self.db_path().join(cpv);
        std::fs::create_dir_all(&dir).expect("Failed to create package entry");
        std::fs::write(dir.join("SLOT"), format!("{slot}\n")).expect("Failed to write SLOT");
    }

    /// Write the merge log
    pub fn write_log(&self, content: &str) {
        std::fs::write(self.log_path(), content).expect("Failed to write merge log");
    }

    /// Write a file relative to the test root
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Write an executable script that prints `output` and exits with `code`
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn write_fake_qlop(&self, output: &str, code: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = format!("#!/bin/sh\ncat <<'EOF'\n{output}\nEOF\nexit {code}\n");
        let path = self.write_file("bin/qlop", &script);
        let mut perms = std::fs::metadata(&path)
            .expect("Failed to stat script")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("Failed to chmod script");
        path
    }

    /// A stalepkg command reading the saved log and the fake database
    pub fn cmd(&self) -> Command {
        let mut cmd = stalepkg_cmd(&self.path);
        cmd.arg("--db")
            .arg(self.db_path())
            .arg("--history-file")
            .arg(self.log_path());
        cmd
    }
}

impl Default for TestSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// A stalepkg command isolated from the caller's environment
pub fn stalepkg_cmd(home: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("stalepkg").expect("Failed to find stalepkg binary");
    cmd.env_remove("STALEPKG_DB")
        .env_remove("STALEPKG_HISTORY_CMD")
        .env_remove("STALEPKG_CONFIG")
        .env_remove("STALEPKG_LOG")
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

/// Format a legacy merge log record
#[allow(dead_code)]
pub fn record(when: chrono::NaiveDateTime, atom: &str) -> String {
    format!("{} >>> {atom}\n", when.format("%a %b %d %H:%M:%S %Y"))
}

/// Local time `days` days ago
#[allow(dead_code)]
pub fn days_ago(days: i64) -> chrono::NaiveDateTime {
    chrono::Local::now().naive_local() - chrono::Duration::days(days)
}
