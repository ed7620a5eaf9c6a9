use crate::navigator::Navigation;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// The chain of pages a walk went through, ready to be written out.
pub struct GraphExporter<'a> {
    navigation: &'a Navigation,
}

impl<'a> GraphExporter<'a> {
    pub fn new(navigation: &'a Navigation) -> Self {
        Self { navigation }
    }

    fn nodes(&self) -> Vec<&str> {
        let mut nodes: Vec<&str> = Vec::new();
        for page in &self.navigation.path {
            if !nodes.contains(&page.as_str()) {
                nodes.push(page.as_str());
            }
        }
        nodes
    }

    fn edges(&self) -> Vec<(&str, &str)> {
        self.navigation
            .path
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
            .collect()
    }

    pub fn to_dot(&self) -> String {
        let mut output = String::from("digraph philosophy {\n");
        output.push_str("  graph [rankdir=LR];\n");
        output.push_str("  node [shape=box, style=rounded];\n");
        output.push_str("  edge [color=gray50];\n\n");

        for node in self.nodes() {
            let label = node.rsplit('/').next().unwrap_or(node);
            output.push_str(&format!("  \"{}\" [label=\"{}\"];\n", escape(node), escape(label)));
        }

        output.push('\n');
        for (from, to) in self.edges() {
            output.push_str(&format!("  \"{}\" -> \"{}\";\n", escape(from), escape(to)));
        }

        output.push_str("}\n");
        output
    }

    pub fn to_json(&self) -> Result<String> {
        let graph_data = serde_json::json!({
            "nodes": self.nodes(),
            "edges": self.edges(),
            "path": self.navigation.path,
            "outcome": self.navigation.outcome,
            "stats": self.navigation.stats,
        });

        Ok(serde_json::to_string_pretty(&graph_data)?)
    }

    pub fn export_dot(&self, path: &Path) -> Result<()> {
        write_file(path, &self.to_dot())
    }

    pub fn export_json(&self, path: &Path) -> Result<()> {
        write_file(path, &self.to_json()?)
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}
