use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::parser::types::*;
use crate::template::Component;

/// Turns JSON tree descriptions into component trees
pub struct SpecParser;

impl SpecParser {
    pub fn from_str(&self, json: &str) -> Result<ComponentSpec> {
        serde_json::from_str(json).context("Failed to parse component tree description")
    }

    pub fn from_reader<R: Read>(&self, reader: R) -> Result<ComponentSpec> {
        serde_json::from_reader(reader).context("Failed to parse component tree description")
    }

    pub fn from_path(&self, path: &Path) -> Result<ComponentSpec> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        self.from_str(&content)
            .with_context(|| format!("Invalid tree description in {}", path.display()))
    }

    /// Builds the described tree, attaching children depth-first in order
    pub fn build(&self, spec: &ComponentSpec) -> Component {
        debug!(root = %spec.label, nodes = spec.node_count(), "building component tree");
        let mut root = match spec.indentation {
            Some(level) => Component::with_indentation(&spec.label, level),
            None => Component::new(&spec.label),
        };
        self.attach_children(&mut root, &spec.children);
        root
    }

    fn attach_children(&self, parent: &mut Component, children: &[ComponentSpec]) {
        for child_spec in children {
            let mut child = Component::new(&child_spec.label);
            self.attach_children(&mut child, &child_spec.children);
            parent.attach(child);
        }
    }

    pub fn parse_component(&self, json: &str) -> Result<Component> {
        let spec = self.from_str(json)?;
        Ok(self.build(&spec))
    }
}
