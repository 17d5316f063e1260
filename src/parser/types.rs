use serde::Deserialize;

/// Declarative description of a component tree, as loaded from JSON.
///
/// ```json
/// { "label": "App", "indentation": 0, "children": [{ "label": "Header" }] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentSpec {
    pub label: String,
    /// Only honoured on the root; attached children are re-levelled anyway
    #[serde(default)]
    pub indentation: Option<usize>,
    #[serde(default)]
    pub children: Vec<ComponentSpec>,
}

impl ComponentSpec {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            indentation: None,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<ComponentSpec>) -> Self {
        self.children = children;
        self
    }

    /// Number of nodes in the described tree, this one included
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(ComponentSpec::node_count).sum::<usize>()
    }
}
