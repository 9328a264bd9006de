use modmap::extract::{JsSpecifierExtractor, SpecifierExtractor};

#[test]
fn extracts_imports_and_requires_in_source_order() {
    let code = r#"
import React from "react";
import { useState } from 'react';
import "./styles.css";

const fs = require("fs");

function load() {
  return require("./lazy");
}
"#;

    let specifiers = JsSpecifierExtractor::new().extract(code).unwrap();
    assert_eq!(
        specifiers,
        vec!["react", "react", "./styles.css", "fs", "./lazy"]
    );
}

#[test]
fn duplicates_are_preserved_for_the_caller() {
    let code = r#"
const a = require("./util");
const b = require("./util");
"#;
    let specifiers = JsSpecifierExtractor::new().extract(code).unwrap();
    assert_eq!(specifiers, vec!["./util", "./util"]);
}

#[test]
fn ignores_non_require_calls_and_non_string_arguments() {
    let code = r#"
const real = require("./real");
const dynamic = require(moduleName);
const templated = require(`./templated`);
const other = requireAll("./glob");
fetch("https://example.com");
"#;
    let specifiers = JsSpecifierExtractor::new().extract(code).unwrap();
    assert_eq!(specifiers, vec!["./real"]);
}

#[test]
fn side_effect_import_keeps_verbatim_specifier() {
    let specifiers = JsSpecifierExtractor::new()
        .extract("import '@scope/pkg/register';\n")
        .unwrap();
    assert_eq!(specifiers, vec!["@scope/pkg/register"]);
}

#[test]
fn jsx_sources_parse() {
    let code = r#"
import React from "react";

const App = () => <div className="app">hello</div>;

export default App;
"#;
    let specifiers = JsSpecifierExtractor::new().extract(code).unwrap();
    assert_eq!(specifiers, vec!["react"]);
}

#[test]
fn unparsable_source_is_an_error_not_a_partial_sequence() {
    let result = JsSpecifierExtractor::new().extract("import { from ';;;\n");
    assert!(result.is_err());
}

#[test]
fn extraction_is_restartable() {
    let code = "import a from \"./a\";\nconst b = require(\"./b\");\n";
    let extractor = JsSpecifierExtractor::new();

    let first = extractor.extract(code).unwrap();
    let second = extractor.extract(code).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, vec!["./a", "./b"]);
}
