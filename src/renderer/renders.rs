use crate::renderer::components::*;
use crate::renderer::traits::*;
use crate::template::Component;

impl Render for Component {
    fn render(&self, context: &RenderContext) -> String {
        let depth = context.depth_of(self.indentation());
        let tags = TagRenderer;

        if self.is_leaf() {
            return IndentationHelper::indent_lines(&tags.self_closed(self.label()), depth);
        }

        let mut lines = Vec::with_capacity(self.children().len() + 2);
        lines.push(IndentationHelper::indent_lines(&tags.open(self.label()), depth));

        // Children share the context and come back already indented
        for child in self.children() {
            lines.push(Render::render(child, context));
        }

        lines.push(IndentationHelper::indent_lines(&tags.close(self.label()), depth));
        lines.join("\n")
    }
}
