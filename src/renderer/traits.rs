use crate::renderer::components::IndentationHelper;
use crate::template::Component;

/// Context shared by every node of one rendering pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Indentation level of the component `render` was invoked on
    pub base: usize,
    /// Levels added in front of everything rendered at `base`
    pub depth: usize,
}

impl RenderContext {
    pub fn new() -> Self {
        Self { base: 0, depth: 0 }
    }

    /// Context that renders `root` flush left
    pub fn for_root(root: &Component) -> Self {
        Self {
            base: root.indentation(),
            depth: 0,
        }
    }

    pub fn with_depth(&self, depth: usize) -> Self {
        Self {
            base: self.base,
            depth,
        }
    }

    /// Depth of a node at indentation `level`, counted from `base`
    pub fn depth_of(&self, level: usize) -> usize {
        self.depth + level.saturating_sub(self.base)
    }

    pub fn indent(&self) -> String {
        IndentationHelper::indent_for_depth(self.depth)
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Core rendering trait for template nodes
pub trait Render {
    fn render(&self, context: &RenderContext) -> String;
}
