use std::path::PathBuf;

use crate::cli::{AppMode, CliOptions, DEFAULT_CONFIG_PATH, ask_for_mode};
use crate::error::{SetupError, Stage};
use crate::prompt::{PromptError, Prompter, ScriptedPrompter};

#[test]
fn mode_prompt_offers_both_modes() {
    let mut p = ScriptedPrompter::new(["Use CLI"]);
    assert_eq!(ask_for_mode(&mut p).unwrap(), AppMode::Cli);
    assert_eq!(p.asked(), &["Choose Application Mode"]);

    let mut p = ScriptedPrompter::new(["Start HTTP Server"]);
    assert_eq!(ask_for_mode(&mut p).unwrap(), AppMode::Server);
}

#[test]
fn mode_prompt_abort_is_staged() {
    let mut p = ScriptedPrompter::new(Vec::<String>::new());
    let err = ask_for_mode(&mut p).unwrap_err();
    assert_eq!(err.stage, Stage::SelectMode);
    assert!(err.is_aborted());
}

/// Prompter that answers every selection with a fixed text, offered or not.
struct Stubborn(&'static str);

impl Prompter for Stubborn {
    fn select(&mut self, _label: &str, _items: &[String]) -> Result<String, PromptError> {
        Ok(self.0.to_string())
    }

    fn input(&mut self, _label: &str) -> Result<String, PromptError> {
        Ok(self.0.to_string())
    }
}

#[test]
fn unknown_mode_answer_is_an_invalid_choice() {
    let err = ask_for_mode(&mut Stubborn("Batch Job")).unwrap_err();

    assert_eq!(err.stage, Stage::SelectMode);
    assert!(matches!(
        err.error,
        SetupError::InteractionAborted(PromptError::InvalidChoice { ref answer, .. })
            if answer == "Batch Job"
    ));
}

#[test]
fn mode_names_parse_loosely() {
    assert_eq!(AppMode::from_name("server"), Some(AppMode::Server));
    assert_eq!(AppMode::from_name(" HTTP "), Some(AppMode::Server));
    assert_eq!(AppMode::from_name("use cli"), Some(AppMode::Cli));
    assert_eq!(AppMode::from_name("CLI"), Some(AppMode::Cli));
    assert_eq!(AppMode::from_name("daemon"), None);
}

#[test]
fn options_default_to_the_standard_config_path() {
    let opts = CliOptions::default();
    assert_eq!(opts.config, PathBuf::from(DEFAULT_CONFIG_PATH));
    assert!(!opts.reconfigure);
    assert!(!opts.plain);
    assert_eq!(opts.mode, None);
}

#[test]
fn wizard_runs_when_config_is_missing_or_forced() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");

    let opts = CliOptions::new().with_config(&path);
    assert!(opts.should_run_wizard());

    std::fs::write(&path, "inputMethod: CSV\n").expect("write");
    assert!(!opts.should_run_wizard());
    assert!(opts.clone().with_reconfigure().should_run_wizard());
}

#[test]
fn builder_methods_set_flags() {
    let opts = CliOptions::new().with_plain().with_mode(AppMode::Server);
    assert!(opts.plain);
    assert_eq!(opts.mode, Some(AppMode::Server));
}
