// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{CheckseqError, Result};
use crate::plan::expand::compile_pattern;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = CheckseqError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.config, raw.targets, raw.tools))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    ensure_non_empty(cfg)?;
    validate_tools(cfg)?;
    validate_targets(cfg)?;
    Ok(())
}

fn ensure_non_empty(cfg: &RawConfigFile) -> Result<()> {
    if cfg.targets.is_empty() {
        return Err(CheckseqError::ConfigError(
            "config must contain at least one [[target]] entry".to_string(),
        ));
    }
    if cfg.tools.is_empty() {
        return Err(CheckseqError::ConfigError(
            "config must contain at least one [[tool]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_tools(cfg: &RawConfigFile) -> Result<()> {
    let mut seen = HashSet::new();
    for (idx, tool) in cfg.tools.iter().enumerate() {
        if tool.name.trim().is_empty() {
            return Err(CheckseqError::ConfigError(format!(
                "tool #{} has an empty name",
                idx + 1
            )));
        }
        if tool.program.trim().is_empty() {
            return Err(CheckseqError::ConfigError(format!(
                "tool '{}' has an empty program",
                tool.name
            )));
        }
        if !seen.insert(tool.name.as_str()) {
            return Err(CheckseqError::ConfigError(format!(
                "duplicate tool name '{}'",
                tool.name
            )));
        }
    }
    Ok(())
}

fn validate_targets(cfg: &RawConfigFile) -> Result<()> {
    let mut seen = HashSet::new();
    for (idx, target) in cfg.targets.iter().enumerate() {
        if target.name.trim().is_empty() {
            return Err(CheckseqError::ConfigError(format!(
                "target #{} has an empty name",
                idx + 1
            )));
        }
        if !seen.insert(target.name.as_str()) {
            return Err(CheckseqError::ConfigError(format!(
                "duplicate target name '{}'",
                target.name
            )));
        }
        if target.paths.is_empty() {
            return Err(CheckseqError::ConfigError(format!(
                "target '{}' must list at least one path pattern",
                target.name
            )));
        }
        for pattern in &target.paths {
            if pattern.trim().is_empty() {
                return Err(CheckseqError::ConfigError(format!(
                    "target '{}' contains an empty path pattern",
                    target.name
                )));
            }
            compile_pattern(pattern)?;
        }
    }
    Ok(())
}
