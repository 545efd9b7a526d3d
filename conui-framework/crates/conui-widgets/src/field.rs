//! Text field focus and input.

use conui_core::{ColorAttr, Error, Result};
use conui_terminal::{LineReader, RenderTarget};
use conui_text::display_width;

use crate::element::ElementKind;
use crate::tree::{ElementId, ElementTree};

impl ElementTree {
    /// Places the terminal cursor right after a text field's text, in the
    /// field's colors.
    pub fn focus(&self, field: ElementId, target: &mut dyn RenderTarget) -> Result<()> {
        let element = self.element(field)?;
        let ElementKind::TextField(block) = element.kind() else {
            return Err(Error::WrongKind {
                expected: "text_field",
                found: element.kind().name(),
            });
        };

        let width = i32::try_from(display_width(&block.text)).unwrap_or(i32::MAX);
        let cursor = self.absolute_position(field)?.offset(width, 0);
        target.set_colors(ColorAttr::new(element.fore(), element.back()))?;
        target.set_cursor(cursor)?;
        target.flush()
    }

    /// Focuses a text field and reads one line of input for it.
    pub fn read_field(
        &self,
        field: ElementId,
        target: &mut dyn RenderTarget,
        reader: &mut dyn LineReader,
    ) -> Result<String> {
        self.focus(field, target)?;
        let line = reader.read_line()?;
        tracing::debug!(?field, len = line.len(), "read field input");
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use conui_core::{Color, Position};
    use conui_terminal::{CaptureTarget, ScriptedLineReader};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_focus_puts_cursor_after_text() {
        let mut tree = ElementTree::new();
        let root = tree.insert(Element::interface().position((3, 2)).build());
        let field = tree
            .add_new_child(
                root,
                Element::text_field().text("> ").fore(Color::Yellow).position((1, 1)).build(),
            )
            .unwrap();

        let mut target = CaptureTarget::new(20, 5);
        tree.focus(field, &mut target).unwrap();
        assert_eq!(target.cursor(), Position::new(6, 3));
        assert_eq!(target.attr().fg, Color::Yellow);
    }

    #[test]
    fn test_read_field() {
        let mut tree = ElementTree::new();
        let field = tree.insert(Element::text_field().text("Name: ").build());
        let mut target = CaptureTarget::new(20, 1);
        let mut reader = ScriptedLineReader::new(["Ada"]);

        assert_eq!(tree.read_field(field, &mut target, &mut reader).unwrap(), "Ada");
        assert!(tree.read_field(field, &mut target, &mut reader).is_err());
    }

    #[test]
    fn test_focus_requires_text_field() {
        let mut tree = ElementTree::new();
        let label = tree.insert(Element::label().text("x").build());
        let mut target = CaptureTarget::new(5, 1);
        assert!(matches!(
            tree.focus(label, &mut target),
            Err(Error::WrongKind { found: "label", .. })
        ));
    }
}
