// src/plan/mod.rs

//! Turning a validated config into the ordered list of invocations.
//!
//! Order is target-major: every tool runs against the first target before
//! any tool runs against the second.

pub mod expand;

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::ConfigFile;
use crate::errors::Result;

pub use expand::{expand_pattern, expand_target};

/// One external tool run against one target's files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// 1-based position in the plan.
    pub index: usize,
    pub tool: String,
    pub target: String,
    pub program: String,
    /// Tool arguments followed by the expanded target paths.
    pub args: Vec<String>,
}

impl Invocation {
    /// Program and arguments joined by spaces, for display only.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} on {}", self.index, self.tool, self.target)
    }
}

/// The ordered invocations for one run, plus the directory they run in.
#[derive(Debug, Clone)]
pub struct Plan {
    root: PathBuf,
    invocations: Vec<Invocation>,
}

impl Plan {
    /// Expand every target against `root` and pair it with every tool.
    pub fn build(cfg: &ConfigFile, root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let unmatched = cfg.config().unmatched_glob;
        let mut invocations = Vec::with_capacity(cfg.targets().len() * cfg.tools().len());

        for target in cfg.targets() {
            let paths = expand_target(&root, &target.paths, unmatched)?;
            debug!(target = %target.name, count = paths.len(), "expanded target paths");

            for tool in cfg.tools() {
                let mut args = tool.args.clone();
                args.extend(paths.iter().cloned());
                invocations.push(Invocation {
                    index: invocations.len() + 1,
                    tool: tool.name.clone(),
                    target: target.name.clone(),
                    program: tool.program.clone(),
                    args,
                });
            }
        }

        Ok(Self { root, invocations })
    }

    /// Build a plan from pre-made invocations.
    pub fn from_invocations(root: impl Into<PathBuf>, invocations: Vec<Invocation>) -> Self {
        Self {
            root: root.into(),
            invocations,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    pub fn len(&self) -> usize {
        self.invocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invocations.is_empty()
    }
}
