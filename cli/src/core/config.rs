//! # ChatBot Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatbot
//!
//! ## Overview
//!
//! This module implements the configuration system for ChatBot, handling loading,
//! merging, validation, and access to configuration data. It supports a multi-level
//! configuration approach that combines defaults, user settings, project-specific
//! overrides, and finally command-line flags.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (`--db`, `--questions`, `--threshold`)
//! 2. Project-specific `.chatbot.toml` in current directory or ancestors
//! 3. User-specific `~/.config/chatbot/config.toml`
//! 4. Default values defined in the code
//!
//! When an explicit file is given (`--config` or `CHATBOT_CONFIG`), it replaces
//! sources 2 and 3 and must exist.
//!
//! ## Examples
//!
//! ```toml
//! [data]
//! knowledge_base = "~/chatbot/ChatBotDB.csv"
//! questions = "~/chatbot/QuestionDB.csv"
//!
//! [matching]
//! threshold = 2
//!
//! [display]
//! speaker_label = "Bot:"
//! ```
//!
//! ```rust
//! let cfg = config::load_config(None, &ConfigOverrides::default())?;
//! let threshold = cfg.matching.threshold;
//! ```
//!
use crate::core::error::{ChatbotError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Locations of the two flat-text data files.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    /// `key phrase,answer` records, one per line (can use ~).
    #[serde(default = "default_knowledge_base")]
    pub knowledge_base: String,
    /// Question catalogue, one question per line (can use ~).
    #[serde(default = "default_questions")]
    pub questions: String,
}

/// Settings for the matching engine.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MatchingConfig {
    /// Minimum overlap score an entry needs before it can be selected.
    #[serde(default = "default_threshold")]
    pub threshold: u32,
}

/// Texts the interactive session prints.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Prefix of the first line of every answer (no space is inserted after it).
    #[serde(default = "default_speaker_label")]
    pub speaker_label: String,
    /// Line printed when the session ends.
    #[serde(default = "default_farewell")]
    pub farewell: String,
    /// Shown before each line read in the chat loop.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            knowledge_base: default_knowledge_base(),
            questions: default_questions(),
        }
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            speaker_label: default_speaker_label(),
            farewell: default_farewell(),
            prompt: default_prompt(),
        }
    }
}

fn default_knowledge_base() -> String {
    "ChatBotDB.csv".to_string()
}
fn default_questions() -> String {
    "QuestionDB.csv".to_string()
}
fn default_threshold() -> u32 {
    1
}
fn default_speaker_label() -> String {
    "ChatBot:".to_string()
}
fn default_farewell() -> String {
    "ChatBot: Goodbye!".to_string()
}
fn default_prompt() -> String {
    "You: ".to_string()
}

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub knowledge_base: Option<PathBuf>,
    pub questions: Option<PathBuf>,
    pub threshold: Option<u32>,
}

const PROJECT_CONFIG_FILENAME: &str = ".chatbot.toml";

pub fn load_config(explicit: Option<&Path>, overrides: &ConfigOverrides) -> Result<Config> {
    let mut merged_config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?
        }
        None => {
            let user_config = load_user_config()?;
            let current_dir =
                std::env::current_dir().context("Failed to get current directory")?;
            let project_config = load_project_config(&current_dir)?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    apply_overrides(&mut merged_config, overrides);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "ChatBot", "chatbot") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path(start) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file (.chatbot.toml) found in {} or ancestors.",
            start.display()
        );
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root; a `.git` directory ends the search.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .map_err(|e| anyhow!(ChatbotError::Config(e.to_string())))
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the built-in default.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.data.knowledge_base = if project_cfg.data.knowledge_base != default_knowledge_base() {
        project_cfg.data.knowledge_base
    } else {
        user.data.knowledge_base
    };
    merged.data.questions = if project_cfg.data.questions != default_questions() {
        project_cfg.data.questions
    } else {
        user.data.questions
    };
    merged.matching.threshold = if project_cfg.matching.threshold != default_threshold() {
        project_cfg.matching.threshold
    } else {
        user.matching.threshold
    };
    merged.display.speaker_label = if project_cfg.display.speaker_label != default_speaker_label()
    {
        project_cfg.display.speaker_label
    } else {
        user.display.speaker_label
    };
    merged.display.farewell = if project_cfg.display.farewell != default_farewell() {
        project_cfg.display.farewell
    } else {
        user.display.farewell
    };
    merged.display.prompt = if project_cfg.display.prompt != default_prompt() {
        project_cfg.display.prompt
    } else {
        user.display.prompt
    };
    merged
}

fn apply_overrides(config: &mut Config, overrides: &ConfigOverrides) {
    if let Some(path) = &overrides.knowledge_base {
        config.data.knowledge_base = path.to_string_lossy().into_owned();
    }
    if let Some(path) = &overrides.questions {
        config.data.questions = path.to_string_lossy().into_owned();
    }
    if let Some(threshold) = overrides.threshold {
        config.matching.threshold = threshold;
    }
}

fn expand_config_paths(config: &mut Config) {
    config.data.knowledge_base = shellexpand::tilde(&config.data.knowledge_base).into_owned();
    config.data.questions = shellexpand::tilde(&config.data.questions).into_owned();
    debug!(
        "Expanded data paths: knowledge_base={}, questions={}",
        config.data.knowledge_base, config.data.questions
    );
}

fn validate_config(config: &Config) -> Result<()> {
    if config.data.knowledge_base.trim().is_empty() {
        return Err(anyhow!(ChatbotError::Config(
            "data.knowledge_base cannot be empty.".to_string()
        )));
    }
    if config.data.questions.trim().is_empty() {
        return Err(anyhow!(ChatbotError::Config(
            "data.questions cannot be empty.".to_string()
        )));
    }
    if config.matching.threshold == 0 {
        warn!("matching.threshold is 0; entries still need at least one shared word to be selected.");
    }
    Ok(())
}
