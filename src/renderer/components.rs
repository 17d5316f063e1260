/// Marker written in front of every label
pub const COMPONENT_MARKER: &str = "Component";

/// One indentation level
pub const INDENT_UNIT: &str = "  ";

/// Helper for building the three tag shapes
pub struct TagRenderer;

impl TagRenderer {
    pub fn open(&self, label: &str) -> String {
        format!("<{} {}>", COMPONENT_MARKER, label)
    }

    pub fn close(&self, label: &str) -> String {
        format!("</{} {}>", COMPONENT_MARKER, label)
    }

    pub fn self_closed(&self, label: &str) -> String {
        format!("<{} {} />", COMPONENT_MARKER, label)
    }
}

/// Helper for consistent indentation
pub struct IndentationHelper;

impl IndentationHelper {
    pub fn indent_for_depth(depth: usize) -> String {
        INDENT_UNIT.repeat(depth)
    }

    /// Prefixes every line of `text`, including lines inside labels
    pub fn indent_lines(text: &str, depth: usize) -> String {
        let indent = Self::indent_for_depth(depth);
        text.split('\n')
            .map(|line| format!("{}{}", indent, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
