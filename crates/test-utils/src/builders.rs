use checkseq::config::{ConfigFile, ConfigSection, RawConfigFile, TargetConfig, ToolConfig};
use checkseq::types::UnmatchedGlobBehaviour;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                config: ConfigSection::default(),
                targets: Vec::new(),
                tools: Vec::new(),
            },
        }
    }

    pub fn with_target(mut self, name: &str, paths: &[&str]) -> Self {
        self.config.targets.push(TargetConfig::new(name, paths));
        self
    }

    pub fn with_tool(mut self, name: &str, program: &str, args: &[&str]) -> Self {
        self.config.tools.push(ToolConfig::new(name, program, args));
        self
    }

    pub fn unmatched_glob(mut self, behaviour: UnmatchedGlobBehaviour) -> Self {
        self.config.config.unmatched_glob = behaviour;
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The built-in tool line-up with `n` literal (non-glob) targets, so plans
/// can be built without touching the filesystem.
pub fn python_checks_with_targets(n: usize) -> ConfigFile {
    let mut builder = ConfigFileBuilder::new()
        .with_tool("isort", "isort", &["--check-only"])
        .with_tool("black", "black", &["--check"])
        .with_tool("flake8", "flake8", &[])
        .with_tool("mypy", "mypy", &[]);
    for i in 0..n {
        let name = format!("target{i}");
        let path = format!("dir{i}/file.py");
        builder = builder.with_target(&name, &[path.as_str()]);
    }
    builder.build()
}
