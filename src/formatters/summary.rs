use anyhow::Result;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::core::BuildReport;

/// Human-readable run summary: module counts, external packages ranked by
/// importer count, unresolved imports, accumulated errors.
pub struct SummaryFormatter {
    /// How many external packages to list.
    top_externals: usize,
}

impl SummaryFormatter {
    pub fn new() -> Self {
        Self { top_externals: 20 }
    }

    pub fn with_top_externals(mut self, top_externals: usize) -> Self {
        self.top_externals = top_externals;
        self
    }

    pub fn format_to_file(&self, report: &BuildReport, output_path: &Path) -> Result<()> {
        let content = self.format_report(report)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    pub fn format_report(&self, report: &BuildReport) -> Result<String> {
        let graph = &report.graph;
        let mut out = String::new();

        writeln!(out, "# MODULE GRAPH")?;
        let local_count = graph.iter().filter(|(_, node)| !node.is_external).count();
        writeln!(
            out,
            "modules: {} local, {} external",
            local_count,
            graph.len() - local_count
        )?;

        let mut externals: Vec<_> = graph.iter().filter(|(_, node)| node.is_external).collect();
        externals.sort_by(|a, b| {
            b.1.included_by
                .len()
                .cmp(&a.1.included_by.len())
                .then_with(|| a.0.cmp(b.0))
        });
        if !externals.is_empty() {
            writeln!(out, "\nEXTERNAL PACKAGES:")?;
            for (key, node) in externals.iter().take(self.top_externals) {
                writeln!(out, "  {key} <- {} importer(s)", node.included_by.len())?;
            }
            if externals.len() > self.top_externals {
                writeln!(out, "  ... and {} more", externals.len() - self.top_externals)?;
            }
        }

        let dangling: Vec<_> = graph
            .iter()
            .flat_map(|(key, node)| node.unresolved.iter().map(move |target| (key, target)))
            .collect();
        if !dangling.is_empty() {
            writeln!(out, "\nUNRESOLVED IMPORTS:")?;
            for (source, target) in dangling {
                writeln!(out, "  {source} -> {target}")?;
            }
        }

        if !report.errors.is_empty() {
            writeln!(out, "\nERRORS:")?;
            for error in &report.errors {
                writeln!(out, "  {error}")?;
            }
        }
        if !report.warnings.is_empty() {
            writeln!(out, "\nWARNINGS:")?;
            for warning in &report.warnings {
                writeln!(out, "  {warning}")?;
            }
        }

        Ok(out)
    }
}

impl Default for SummaryFormatter {
    fn default() -> Self {
        Self::new()
    }
}
