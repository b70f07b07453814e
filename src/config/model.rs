// src/config/model.rs

use serde::Deserialize;

use crate::types::UnmatchedGlobBehaviour;

/// Configuration exactly as read from a TOML file, before validation.
///
/// ```toml
/// [config]
/// unmatched_glob = "literal"
///
/// [[target]]
/// name = "scripts"
/// paths = ["scripts/*.py"]
///
/// [[tool]]
/// name = "black"
/// program = "black"
/// args = ["--check"]
/// ```
///
/// `[[target]]` and `[[tool]]` are arrays of tables; their order in the file
/// is the order things run in.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    /// Global behaviour from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// File groups, in execution order.
    #[serde(default, rename = "target")]
    pub targets: Vec<TargetConfig>,

    /// Tools, in execution order within each target.
    #[serde(default, rename = "tool")]
    pub tools: Vec<ToolConfig>,
}

/// `[config]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigSection {
    /// `"literal"` (default) or `"drop"`.
    #[serde(default)]
    pub unmatched_glob: UnmatchedGlobBehaviour,
}

/// `[[target]]` entry: a named group of glob patterns relative to the root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TargetConfig {
    pub name: String,
    pub paths: Vec<String>,
}

/// `[[tool]]` entry: an external program and its fixed leading arguments.
///
/// The expanded target paths are appended after `args`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ToolConfig {
    pub name: String,
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl TargetConfig {
    pub fn new(name: impl Into<String>, paths: &[&str]) -> Self {
        Self {
            name: name.into(),
            paths: paths.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl ToolConfig {
    pub fn new(name: impl Into<String>, program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// A validated configuration.
///
/// Only obtainable through `TryFrom<RawConfigFile>` (see `validate.rs`) or
/// [`ConfigFile::builtin`], so holders can rely on the invariants checked
/// there.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    config: ConfigSection,
    targets: Vec<TargetConfig>,
    tools: Vec<ToolConfig>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        config: ConfigSection,
        targets: Vec<TargetConfig>,
        tools: Vec<ToolConfig>,
    ) -> Self {
        Self {
            config,
            targets,
            tools,
        }
    }

    /// The plan used when no config file is found: check-only isort, black,
    /// flake8 and mypy over the requirement tests, then over the scripts.
    pub fn builtin() -> Self {
        Self::new_unchecked(
            ConfigSection::default(),
            vec![
                TargetConfig::new("requirement-tests", &["tests/requirements/test/*.py"]),
                TargetConfig::new("scripts", &["scripts/*.py"]),
            ],
            vec![
                ToolConfig::new("isort", "isort", &["--check-only"]),
                ToolConfig::new("black", "black", &["--check"]),
                ToolConfig::new("flake8", "flake8", &[]),
                ToolConfig::new("mypy", "mypy", &[]),
            ],
        )
    }

    pub fn config(&self) -> &ConfigSection {
        &self.config
    }

    pub fn targets(&self) -> &[TargetConfig] {
        &self.targets
    }

    pub fn tools(&self) -> &[ToolConfig] {
        &self.tools
    }
}
