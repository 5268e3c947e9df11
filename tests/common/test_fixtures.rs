//! Apps directory fixture and helpers for driving the CLI in-process

use pams::infrastructure::process::ProcessRunner;
use pams::presentation::cli::CliApp;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary apps directory
pub struct AppsFixture {
    _temp: TempDir,
    apps_dir: PathBuf,
}

impl AppsFixture {
    /// Fixture whose apps directory does not exist yet
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let apps_dir = temp.path().join("apps");
        Self {
            _temp: temp,
            apps_dir,
        }
    }

    pub fn apps_dir(&self) -> &Path {
        &self.apps_dir
    }

    pub fn app_dir(&self, name: &str) -> PathBuf {
        self.apps_dir.join(name)
    }

    /// Create `<apps>/<name>` holding `files`
    pub fn install_app(&self, name: &str, files: &[&str]) -> PathBuf {
        let dir = self.app_dir(name);
        fs::create_dir_all(&dir).unwrap();
        for file in files {
            fs::write(dir.join(file), "print('hello')\n").unwrap();
        }
        dir
    }

    /// Run `pams <args>` in-process with `stdin` as input; returns stdout
    pub fn run_cli(&self, runner: &dyn ProcessRunner, args: &[&str], stdin: &str) -> String {
        let mut argv = vec![
            "pams".to_string(),
            "--no-color".to_string(),
            "--apps-dir".to_string(),
            self.apps_dir.display().to_string(),
        ];
        argv.extend(args.iter().map(|a| a.to_string()));

        let mut input = Cursor::new(stdin.to_string());
        let mut output: Vec<u8> = Vec::new();
        CliApp::from_args(argv)
            .execute(runner, &mut input, &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }
}
