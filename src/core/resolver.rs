use path_clean::PathClean;
use std::path::{Path, PathBuf};

use super::graph::ModuleGraph;

/// Fixed probe order for a resolved path with no exact node: directory index
/// files first, then extension suffixes.
const INDEX_CANDIDATES: [&str; 2] = ["index.js", "index.jsx"];
const EXTENSION_CANDIDATES: [&str; 2] = ["js", "jsx"];

/// Outcome of resolving one specifier from one importing module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// A path inside the project root. The key may have no node if every
    /// fallback candidate missed; the builder records such edges as
    /// unresolved.
    Local { key: String },
    /// A bare specifier referencing an external package, keyed verbatim.
    External { key: String },
}

/// Classifies raw specifiers and resolves them to node keys.
pub struct SpecifierResolver {
    root: PathBuf,
    /// Ordered longest prefix first so overlapping prefixes match
    /// deterministically.
    aliases: Vec<(String, String)>,
}

impl SpecifierResolver {
    pub fn new(root: PathBuf, mut aliases: Vec<(String, String)>) -> Self {
        aliases.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        Self { root, aliases }
    }

    /// Resolve `specifier` as written in the module keyed `importer`.
    ///
    /// Classification order: relative, aliased, bare. Relative specifiers
    /// resolve against the importing file's directory; alias targets that are
    /// relative resolve against the project root.
    pub fn resolve(&self, importer: &str, specifier: &str, graph: &ModuleGraph) -> Resolved {
        if specifier.starts_with("./") || specifier.starts_with("../") {
            let base = Path::new(importer).parent().unwrap_or_else(|| Path::new(""));
            let candidate = base.join(specifier).clean();
            return Resolved::Local {
                key: self.materialize(candidate, graph),
            };
        }

        for (prefix, target) in &self.aliases {
            if let Some(rest) = match_alias(specifier, prefix) {
                let substituted = PathBuf::from(format!("{target}{rest}"));
                let candidate = if substituted.is_absolute() {
                    substituted.clean()
                } else {
                    self.root.join(substituted).clean()
                };
                return Resolved::Local {
                    key: self.materialize(candidate, graph),
                };
            }
        }

        Resolved::External {
            key: specifier.to_string(),
        }
    }

    /// Extension/index fallback. Keeps the exact key when it has a node,
    /// otherwise probes `P/index.js`, `P/index.jsx`, `P.js`, `P.jsx` and
    /// takes the first hit. With no hit the exact key is returned unchanged
    /// and will dangle.
    fn materialize(&self, path: PathBuf, graph: &ModuleGraph) -> String {
        let exact = path_key(&path);
        if graph.contains_key(&exact) {
            return exact;
        }
        for name in INDEX_CANDIDATES {
            let probe = path_key(&path.join(name));
            if graph.contains_key(&probe) {
                return probe;
            }
        }
        for ext in EXTENSION_CANDIDATES {
            let probe = format!("{exact}.{ext}");
            if graph.contains_key(&probe) {
                return probe;
            }
        }
        exact
    }
}

/// `@app` matches `@app` and `@app/...`, never `@apple/...`.
fn match_alias<'s>(specifier: &'s str, prefix: &str) -> Option<&'s str> {
    let rest = specifier.strip_prefix(prefix)?;
    if rest.is_empty() || rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}

pub(crate) fn path_key(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
