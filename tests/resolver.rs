use modmap::core::{ModuleGraph, Resolved, SpecifierResolver};
use std::path::PathBuf;

fn graph_with(keys: &[&str]) -> ModuleGraph {
    let mut graph = ModuleGraph::new();
    for key in keys {
        assert!(graph.insert_file(key));
    }
    graph
}

fn resolver(aliases: &[(&str, &str)]) -> SpecifierResolver {
    SpecifierResolver::new(
        PathBuf::from("/project"),
        aliases
            .iter()
            .map(|(prefix, target)| (prefix.to_string(), target.to_string()))
            .collect(),
    )
}

fn local(key: &str) -> Resolved {
    Resolved::Local {
        key: key.to_string(),
    }
}

#[test]
fn relative_specifier_resolves_exact_file() {
    let graph = graph_with(&["/project/src/app.js", "/project/src/util.js"]);
    let resolved = resolver(&[]).resolve("/project/src/app.js", "./util.js", &graph);
    assert_eq!(resolved, local("/project/src/util.js"));
}

#[test]
fn parent_traversal_is_normalized() {
    let graph = graph_with(&["/project/src/b.js", "/project/lib/a.js"]);
    let resolved = resolver(&[]).resolve("/project/src/b.js", "../lib/a.js", &graph);
    assert_eq!(resolved, local("/project/lib/a.js"));
}

#[test]
fn directory_index_beats_suffixed_file() {
    let graph = graph_with(&[
        "/project/src/app.js",
        "/project/src/foo/index.js",
        "/project/src/foo.js",
    ]);
    let resolved = resolver(&[]).resolve("/project/src/app.js", "./foo", &graph);
    assert_eq!(resolved, local("/project/src/foo/index.js"));
}

#[test]
fn fallback_probes_jsx_variants_in_order() {
    let graph = graph_with(&["/project/src/app.js", "/project/src/foo/index.jsx"]);
    let resolved = resolver(&[]).resolve("/project/src/app.js", "./foo", &graph);
    assert_eq!(resolved, local("/project/src/foo/index.jsx"));

    let graph = graph_with(&["/project/src/app.js", "/project/src/foo.jsx"]);
    let resolved = resolver(&[]).resolve("/project/src/app.js", "./foo", &graph);
    assert_eq!(resolved, local("/project/src/foo.jsx"));

    let graph = graph_with(&[
        "/project/src/app.js",
        "/project/src/foo.js",
        "/project/src/foo.jsx",
    ]);
    let resolved = resolver(&[]).resolve("/project/src/app.js", "./foo", &graph);
    assert_eq!(resolved, local("/project/src/foo.js"));
}

#[test]
fn alias_prefix_rewrites_to_root_relative_target() {
    let graph = graph_with(&["/project/app.js", "/project/src/utils/math.js"]);
    let resolved = resolver(&[("@app", "src")]).resolve("/project/app.js", "@app/utils/math", &graph);
    assert_eq!(resolved, local("/project/src/utils/math.js"));
}

#[test]
fn alias_precedence_matches_relative_form() {
    let graph = graph_with(&["/project/app.js", "/project/src/utils/math.js"]);
    let resolver = resolver(&[("@app", "src")]);

    let via_alias = resolver.resolve("/project/app.js", "@app/utils/math", &graph);
    let via_relative = resolver.resolve("/project/app.js", "./src/utils/math", &graph);
    assert_eq!(via_alias, via_relative);
}

#[test]
fn alias_matches_whole_specifier_but_not_longer_names() {
    let graph = graph_with(&["/project/app.js", "/project/src/index.js"]);
    let resolver = resolver(&[("@app", "src")]);

    // bare alias resolves through the index fallback
    let resolved = resolver.resolve("/project/app.js", "@app", &graph);
    assert_eq!(resolved, local("/project/src/index.js"));

    // "@apple/ui" must not match the "@app" prefix
    let resolved = resolver.resolve("/project/app.js", "@apple/ui", &graph);
    assert_eq!(
        resolved,
        Resolved::External {
            key: "@apple/ui".to_string()
        }
    );
}

#[test]
fn longest_alias_prefix_wins() {
    let graph = graph_with(&[
        "/project/app.js",
        "/project/widgets/button.js",
        "/project/src/ui/button.js",
    ]);
    let resolver = resolver(&[("@app", "src"), ("@app/ui", "widgets")]);

    let resolved = resolver.resolve("/project/app.js", "@app/ui/button", &graph);
    assert_eq!(resolved, local("/project/widgets/button.js"));
}

#[test]
fn bare_specifiers_are_external_verbatim() {
    let graph = graph_with(&["/project/app.js"]);
    let resolver = resolver(&[]);

    for specifier in ["react", "lodash/debounce", "@scope/pkg"] {
        let resolved = resolver.resolve("/project/app.js", specifier, &graph);
        assert_eq!(
            resolved,
            Resolved::External {
                key: specifier.to_string()
            }
        );
    }
}

#[test]
fn unmatched_relative_keeps_cleaned_key() {
    let graph = graph_with(&["/project/app.js"]);
    let resolved = resolver(&[]).resolve("/project/app.js", "./missing", &graph);
    assert_eq!(resolved, local("/project/missing"));
}
