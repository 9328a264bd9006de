use rayon::prelude::*;
use std::fs;
use std::path::Path;

use super::config::GraphConfig;
use super::error::{BuildError, BuildWarning, ConfigError};
use super::graph::ModuleGraph;
use super::resolver::{path_key, Resolved, SpecifierResolver};
use super::scanner::FileScanner;
use crate::extract::cache::SpecifierCache;
use crate::extract::{read_source, JsSpecifierExtractor, SpecifierExtractor};

/// Everything a finished build produced. `build` returns it only after
/// discovery and every per-file resolution has settled; per-file failures
/// land in `errors` instead of aborting the build.
#[derive(Debug)]
pub struct BuildReport {
    pub graph: ModuleGraph,
    pub errors: Vec<BuildError>,
    pub warnings: Vec<BuildWarning>,
}

impl BuildReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Builds the module graph for one project root.
///
/// Holds no graph state between invocations: every `build` call rebuilds
/// from scratch, so concurrent or repeated builds cannot observe each other.
pub struct GraphBuilder {
    config: GraphConfig,
    scanner: FileScanner,
    extractor: Box<dyn SpecifierExtractor + Send + Sync>,
    cache: SpecifierCache,
}

impl GraphBuilder {
    /// Fails with [`ConfigError`] when the configuration is unusable; every
    /// later failure is per-file and lands on the report instead.
    pub fn new(config: GraphConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            scanner: FileScanner::new(),
            extractor: Box::new(JsSpecifierExtractor::new()),
            cache: SpecifierCache::new(None).unwrap_or_else(|err| {
                eprintln!("Warning: failed to initialize disk specifier cache: {err}");
                SpecifierCache::in_memory_only()
            }),
        })
    }

    /// Swap in a different extractor. The default parses JavaScript/JSX.
    pub fn with_extractor(mut self, extractor: Box<dyn SpecifierExtractor + Send + Sync>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Discover files, create one node per file, then resolve every
    /// extracted specifier into edges.
    pub fn build(&self) -> BuildReport {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut graph = ModuleGraph::new();

        let root = match fs::canonicalize(self.config.root()) {
            Ok(root) => root,
            Err(err) => {
                errors.push(BuildError::Discovery {
                    root: self.config.root().to_path_buf(),
                    message: err.to_string(),
                });
                return BuildReport {
                    graph,
                    errors,
                    warnings,
                };
            }
        };

        let (files, walk_errors) = self.scanner.scan_root(&root);
        for err in walk_errors {
            errors.push(BuildError::Discovery {
                root: root.clone(),
                message: err.to_string(),
            });
        }

        for file in files {
            if !graph.insert_file(&path_key(&file)) {
                warnings.push(BuildWarning::DuplicateFile { path: file });
            }
        }

        let resolver = SpecifierResolver::new(root, self.config.alias_pairs());

        // Read + extract fan-out. Completion order does not matter: the edge
        // recording fold below is commutative and idempotent per node.
        let keys: Vec<String> = graph.keys().cloned().collect();
        let extractions: Vec<(String, Result<Vec<String>, BuildError>)> = keys
            .into_par_iter()
            .map(|key| {
                let outcome = self.load_specifiers(Path::new(&key));
                (key, outcome)
            })
            .collect();

        for (key, outcome) in extractions {
            match outcome {
                Ok(specifiers) => {
                    for raw in specifiers {
                        let specifier = self.config.apply_rewrite(&raw);
                        match resolver.resolve(&key, &specifier, &graph) {
                            Resolved::Local { key: target } => {
                                graph.record_dependency(&key, &target);
                            }
                            Resolved::External { key: target } => {
                                graph.ensure_external(&target);
                                graph.record_dependency(&key, &target);
                            }
                        }
                    }
                }
                Err(err) => errors.push(err),
            }
        }

        BuildReport {
            graph,
            errors,
            warnings,
        }
    }

    /// Cached read + extract for one file. A fresh cache entry skips both
    /// the read and the parse; the cache stores raw extraction output, so the
    /// rewrite hook still runs on every build.
    fn load_specifiers(&self, path: &Path) -> Result<Vec<String>, BuildError> {
        if let Some(specifiers) = self.cache.lookup(path) {
            return Ok(specifiers);
        }

        let source = read_source(path).map_err(|source| BuildError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let specifiers = self
            .extractor
            .extract(&source)
            .map_err(|err| BuildError::Parse {
                path: path.to_path_buf(),
                message: format!("{err:#}"),
            })?;

        if let Err(err) = self.cache.store(path, &specifiers) {
            eprintln!(
                "Warning: failed to cache specifiers for {}: {err}",
                path.display()
            );
        }
        Ok(specifiers)
    }
}
