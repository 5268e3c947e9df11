//! Install command integration tests, driven through the CLI entry point

mod common;

use common::{AppsFixture, RecordingRunner};
use pretty_assertions::assert_eq;
use std::fs;

#[test]
fn test_install_clones_into_apps_dir() {
    let fixture = AppsFixture::new();
    let runner = RecordingRunner::new();

    let stdout = fixture.run_cli(&runner, &["install", "octocat/weather-bot"], "");

    assert_eq!(stdout, "Installing octocat/weather-bot...\nInstall completed.\n");

    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].program, "git");
    assert_eq!(
        calls[0].args_lossy(),
        vec![
            "clone".to_string(),
            "https://github.com/octocat/weather-bot.git".to_string(),
            fixture.app_dir("weather-bot").display().to_string(),
        ]
    );
    assert!(fixture.apps_dir().is_dir());
}

#[test]
fn test_install_clone_failure() {
    let fixture = AppsFixture::new();
    let runner = RecordingRunner::new().with_exit_codes(&[128]);

    let stdout = fixture.run_cli(&runner, &["install", "owner/repo"], "");

    assert!(stdout.contains("Git clone failed."));
    assert!(!stdout.contains("Install completed."));
    assert_eq!(runner.call_count(), 1);
}

#[test]
fn test_install_without_git_installed() {
    let fixture = AppsFixture::new();
    let runner = RecordingRunner::new().missing_executable();

    let stdout = fixture.run_cli(&runner, &["install", "owner/repo"], "");

    assert!(stdout.contains("Git clone failed: SCM executable not found: git"));
    assert!(!stdout.contains("Install completed."));
}

#[test]
fn test_install_rejects_identifier_without_separator() {
    let fixture = AppsFixture::new();
    let runner = RecordingRunner::new();

    let stdout = fixture.run_cli(&runner, &["install", "weather-bot"], "");

    assert_eq!(stdout, "Repository format must be owner/repo\n");
    assert_eq!(runner.call_count(), 0);
    assert!(!fixture.app_dir("weather-bot").exists());
}

#[test]
fn test_install_missing_identifier() {
    let fixture = AppsFixture::new();
    let runner = RecordingRunner::new();

    let stdout = fixture.run_cli(&runner, &["install"], "");

    assert_eq!(stdout, "Missing repository name.\n");
    assert_eq!(runner.call_count(), 0);
}

#[test]
fn test_install_already_installed_leaves_directory_untouched() {
    let fixture = AppsFixture::new();
    let existing = fixture.install_app("repo", &["main.py"]);
    let before = fs::read_to_string(existing.join("main.py")).unwrap();
    let runner = RecordingRunner::new();

    let stdout = fixture.run_cli(&runner, &["install", "owner/repo"], "");

    assert_eq!(stdout, "Application is already installed.\n");
    assert_eq!(runner.call_count(), 0);
    assert_eq!(fs::read_to_string(existing.join("main.py")).unwrap(), before);
}

#[test]
fn test_install_command_is_case_insensitive() {
    let fixture = AppsFixture::new();
    let runner = RecordingRunner::new();

    let stdout = fixture.run_cli(&runner, &["INSTALL", "owner/repo"], "");

    assert!(stdout.contains("Install completed."));
    assert_eq!(runner.call_count(), 1);
}

#[test]
fn test_install_custom_host() {
    let fixture = AppsFixture::new();
    let runner = RecordingRunner::new();

    fixture.run_cli(
        &runner,
        &["--host", "git.example.org", "--git", "/opt/git", "install", "team/tool"],
        "",
    );

    let calls = runner.calls();
    assert_eq!(calls[0].program, "/opt/git");
    assert_eq!(calls[0].args_lossy()[1], "https://git.example.org/team/tool.git");
}

#[test]
fn test_install_then_run() {
    let fixture = AppsFixture::new();
    let runner = RecordingRunner::new().with_clone_files(&[("main.py", "print('hi')\n")]);

    fixture.run_cli(&runner, &["install", "owner/tool"], "");
    let stdout = fixture.run_cli(&runner, &["run", "tool"], "");

    assert_eq!(stdout, "");
    let calls = runner.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].program, "python");
    assert_eq!(
        calls[1].args_lossy(),
        vec![fixture.app_dir("tool").join("main.py").display().to_string()]
    );
}
