use std::fmt;
use tracing::trace;

use crate::renderer::traits::*;

/// Indentation level given to a component built with [`Component::new`]
pub const DEFAULT_INDENTATION: usize = 1;

/// Indentation level for a component that starts a zero-indent tree
pub const ROOT_INDENTATION: usize = 0;

/// A labeled template element with ordered children.
///
/// Children are owned by value, so a component can only ever live under one
/// parent and a tree can never contain itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    label: String,
    indentation: usize,
    children: Vec<Component>,
}

impl Component {
    /// Creates a childless component at [`DEFAULT_INDENTATION`]
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_indentation(label, DEFAULT_INDENTATION)
    }

    /// Creates a childless component at an explicit indentation level
    pub fn with_indentation(label: impl Into<String>, indentation: usize) -> Self {
        Self {
            label: label.into(),
            indentation,
            children: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn indentation(&self) -> usize {
        self.indentation
    }

    pub fn children(&self) -> &[Component] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Mutable access to an attached child, for attaching further below it.
    ///
    /// The child's own indentation can only change through [`Component::attach`].
    pub fn child_mut(&mut self, index: usize) -> Option<&mut Component> {
        self.children.get_mut(index)
    }

    /// Appends `child` as the last child and moves its whole subtree one
    /// level below this component.
    ///
    /// # Examples
    ///
    /// ```
    /// use artisan::Component;
    ///
    /// let mut page = Component::new("1");
    /// page.attach(Component::new("2"));
    ///
    /// assert_eq!(page.children()[0].indentation(), page.indentation() + 1);
    /// ```
    pub fn attach(&mut self, mut child: Component) {
        let level = self.indentation + 1;
        trace!(
            parent = %self.label,
            child = %child.label,
            from = child.indentation,
            to = level,
            "attaching component"
        );
        child.set_indentation(level);
        self.children.push(child);
    }

    /// Consuming form of [`Component::attach`]
    pub fn with_child(mut self, child: Component) -> Self {
        self.attach(child);
        self
    }

    /// Re-levels this subtree so that this component sits at `level` and every
    /// descendant sits exactly one level below its parent.
    pub(crate) fn set_indentation(&mut self, level: usize) {
        if self.indentation != level {
            trace!(label = %self.label, from = self.indentation, to = level, "re-levelling");
        }
        self.indentation = level;
        for child in &mut self.children {
            child.set_indentation(level + 1);
        }
    }

    /// Renders this component and its subtree as indented tag text
    pub fn render(&self) -> String {
        Render::render(self, &RenderContext::for_root(self))
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
