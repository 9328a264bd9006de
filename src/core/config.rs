use std::path::{Path, PathBuf};

use super::error::ConfigError;

/// Hook rewriting raw specifier strings before classification.
pub type SpecifierRewrite = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Build configuration for [`GraphBuilder`](crate::core::GraphBuilder).
pub struct GraphConfig {
    root: PathBuf,
    aliases: Vec<(String, String)>,
    rewrite: Option<SpecifierRewrite>,
}

impl GraphConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            aliases: Vec::new(),
            rewrite: None,
        }
    }

    /// Register a prefix alias, e.g. `@app` -> `src`. A relative target is
    /// interpreted against the project root.
    pub fn alias(mut self, prefix: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.push((prefix.into(), target.into()));
        self
    }

    /// Rewrite every raw specifier before classification. Default: identity.
    pub fn rewrite_specifiers(mut self, hook: SpecifierRewrite) -> Self {
        self.rewrite = Some(hook);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn alias_pairs(&self) -> Vec<(String, String)> {
        self.aliases.clone()
    }

    pub(crate) fn apply_rewrite(&self, raw: &str) -> String {
        match &self.rewrite {
            Some(hook) => hook(raw),
            None => raw.to_string(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.root.as_os_str().is_empty() {
            return Err(ConfigError::MissingRoot);
        }
        if self.aliases.iter().any(|(prefix, _)| prefix.is_empty()) {
            return Err(ConfigError::EmptyAliasPrefix);
        }
        Ok(())
    }
}
