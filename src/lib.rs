//! # MODMAP
//!
//! Fast module dependency graph extraction for JavaScript projects.
//!
//! modmap discovers every `.js`/`.jsx` file under a project root, extracts
//! each file's `import`/`require` specifiers and resolves them into a
//! bidirectional module graph: for every module, what it depends on and what
//! includes it.
//!
//! ## Resolution
//!
//! Specifiers are classified in order: relative (`./`, `../`), aliased
//! (configured prefix substitutions), bare (external packages). Resolved
//! paths with no exact match are probed as `P/index.js`, `P/index.jsx`,
//! `P.js`, `P.jsx`; imports that still have no target stay in the graph as
//! explicitly unresolved edges.
//!
//! ```no_run
//! use modmap::core::{GraphBuilder, GraphConfig};
//!
//! let config = GraphConfig::new("path/to/project").alias("@app", "src");
//! let report = GraphBuilder::new(config)?.build();
//! for (key, module) in report.graph.iter() {
//!     println!("{key} -> {:?}", module.depends_on);
//! }
//! # Ok::<(), modmap::core::ConfigError>(())
//! ```

pub mod core;
pub mod extract;
pub mod formatters;
