use anyhow::Result;
use serde_json::json;
use std::fs;
use std::path::Path;

use crate::core::BuildReport;

/// Compact JSON dump of a build report for programmatic consumption.
pub struct JsonGraphFormatter;

impl JsonGraphFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_to_file(&self, report: &BuildReport, output_path: &Path) -> Result<()> {
        let json_content = self.format_report(report)?;
        fs::write(output_path, json_content)?;
        Ok(())
    }

    pub fn format_report(&self, report: &BuildReport) -> Result<String> {
        let graph = &report.graph;

        let mut modules = serde_json::Map::new();
        for (key, node) in graph.iter() {
            modules.insert(
                key.clone(),
                json!({
                    "dependsOn": node.depends_on,
                    "includedBy": node.included_by,
                    "unresolved": node.unresolved,
                    "external": node.is_external,
                }),
            );
        }

        let external_count = graph.iter().filter(|(_, node)| node.is_external).count();
        let output = json!({
            "meta": {
                "modules": graph.len(),
                "external": external_count,
                "errors": report.errors.len(),
                "warnings": report.warnings.len(),
            },
            "modules": modules,
            "errors": report.errors.iter().map(|e| e.to_string()).collect::<Vec<_>>(),
            "warnings": report.warnings.iter().map(|w| w.to_string()).collect::<Vec<_>>(),
        });

        Ok(serde_json::to_string(&output)?)
    }
}

impl Default for JsonGraphFormatter {
    fn default() -> Self {
        Self::new()
    }
}
