//! Ready-made screens assembled from the basic elements.
//!
//! Each builder inserts a full-screen interface into the tree and returns
//! the ids a caller needs afterwards: the root to render and the element to
//! read from.

use conui_core::{Color, Result, Size};
use conui_text::WrapMode;

use crate::element::Element;
use crate::tree::{ElementId, ElementTree};

/// Size of the full-screen interface every composite is placed in.
pub const SCREEN_SIZE: Size = Size::new(80, 25);

const PANEL_WIDTH: i32 = 40;

/// Colors used by the composite screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Frame borders.
    pub frame: Color,
    /// Screen titles.
    pub title: Color,
    /// Input prompts.
    pub prompt: Color,
    /// Default modal message text.
    pub modal_text: Color,
    /// Menu entries.
    pub entry: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            frame: Color::Blue,
            title: Color::Cyan,
            prompt: Color::Yellow,
            modal_text: Color::LightRed,
            entry: Color::Gray,
        }
    }
}

/// Ids of a menu screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuScreen {
    /// The full-screen root.
    pub root: ElementId,
    /// The menu to read a choice from.
    pub menu: ElementId,
}

/// Ids of a prompt panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptPanel {
    /// The full-screen root.
    pub root: ElementId,
    /// The field to read an answer from.
    pub field: ElementId,
}

/// Ids of a choice panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoicePanel {
    /// The full-screen root.
    pub root: ElementId,
    /// The menu holding the choices.
    pub menu: ElementId,
}

/// A word-wrapped label centered horizontally within `max_width` columns,
/// one row from the top.
pub fn centered_label(text: &str, max_width: i32, max_height: i32, color: Color) -> Element {
    let mut label = Element::label()
        .text(text)
        .fore(color)
        .wrap(WrapMode::Word)
        .centered()
        .max_size((max_width, max_height))
        .build();
    let x = max_width / 2 - label.size().width / 2;
    label.set_position((x, 1).into());
    label
}

fn screen(tree: &mut ElementTree, back: Color) -> ElementId {
    tree.insert(Element::interface().back(back).size(SCREEN_SIZE).build())
}

fn framed(tree: &mut ElementTree, root: ElementId, size: Size, theme: &Theme) -> Result<ElementId> {
    tree.add_new_child(root, Element::frame().fore(theme.frame).size(size).build())
}

/// Builds a modal showing `text` in `color`.
///
/// The text is wrapped into at most 25x10 cells and centered. The frame
/// leaves two cells of padding around it. Returns the root.
pub fn modal_text(
    tree: &mut ElementTree,
    text: &str,
    color: Color,
    theme: &Theme,
) -> Result<ElementId> {
    let root = screen(tree, Color::Black);
    let frame = framed(tree, root, Size::ZERO, theme)?;
    let label = Element::label()
        .text(text)
        .position((2, 2))
        .size((25, 10))
        .fore(color)
        .wrap(WrapMode::Word)
        .centered()
        .max_size((25, 10))
        .fit_text()
        .build();
    let size = label.size().grow(4, 4);
    tree.add_new_child(frame, label)?;
    tree.element_mut(frame)?.set_size(size);
    Ok(root)
}

/// Builds a modal around an existing element.
///
/// The content is attached at (1, 1) inside a frame that just encloses it.
/// Returns the root.
pub fn modal_content(tree: &mut ElementTree, content: ElementId, theme: &Theme) -> Result<ElementId> {
    let root = screen(tree, Color::Black);
    let frame = framed(tree, root, Size::ZERO, theme)?;

    let element = tree.element_mut(content)?;
    element.set_position((1, 1).into());
    let size = element.size().grow(2, 2);
    tree.add_child(frame, content)?;
    tree.element_mut(frame)?.set_size(size);
    Ok(root)
}

/// Builds a framed menu with an optional centered title.
pub fn menu_screen<I, S>(
    tree: &mut ElementTree,
    title: Option<&str>,
    entries: I,
    theme: &Theme,
) -> Result<MenuScreen>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let root = screen(tree, Color::Transparent);
    let frame = framed(tree, root, Size::new(PANEL_WIDTH, 11), theme)?;

    let mut menu_y = 1;
    if let Some(title) = title {
        let label = centered_label(title, PANEL_WIDTH, 4, theme.title);
        menu_y = label.bottom() + 1;
        tree.add_new_child(frame, label)?;
    }

    let menu = Element::menu(entries)
        .fore(theme.entry)
        .prompt_color(theme.prompt)
        .position((2, menu_y))
        .size((PANEL_WIDTH - 4, 1))
        .build();
    let menu = tree.add_new_child(frame, menu)?;
    tree.layout_menu(menu)?;
    tree.size_to_fit_children(menu)?;
    tree.size_to_fit_children(frame)?;
    Ok(MenuScreen { root, menu })
}

fn panel_label(tree: &mut ElementTree, frame: ElementId, text: &str) -> Result<(i32, i32)> {
    let label = Element::label().text(text).position((1, 1)).size((PANEL_WIDTH, 2)).build();
    let placement = (label.bottom(), label.size().width);
    tree.add_new_child(frame, label)?;
    Ok(placement)
}

/// Builds a framed question with an input field under it.
pub fn prompt_panel(tree: &mut ElementTree, label: &str, theme: &Theme) -> Result<PromptPanel> {
    let root = screen(tree, Color::Transparent);
    let frame = framed(tree, root, Size::new(PANEL_WIDTH, 5), theme)?;
    let (label_bottom, label_width) = panel_label(tree, frame, label)?;

    let field = Element::text_field()
        .text("> ")
        .fore(theme.prompt)
        .position((1, label_bottom))
        .size((label_width, 1))
        .build();
    let field = tree.add_new_child(frame, field)?;
    Ok(PromptPanel { root, field })
}

/// Builds a framed question followed by a numbered list of choices.
pub fn choice_panel<I, S>(
    tree: &mut ElementTree,
    label: &str,
    choices: I,
    theme: &Theme,
) -> Result<ChoicePanel>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let root = screen(tree, Color::Transparent);
    let frame = framed(tree, root, Size::new(PANEL_WIDTH, 5), theme)?;
    let (label_bottom, _) = panel_label(tree, frame, label)?;

    let menu = Element::menu(choices)
        .fore(theme.entry)
        .prompt_color(theme.prompt)
        .position((2, label_bottom + 1))
        .size((PANEL_WIDTH - 4, 1))
        .build();
    let menu = tree.add_new_child(frame, menu)?;
    tree.layout_menu(menu)?;
    tree.size_to_fit_children(menu)?;
    tree.size_to_fit_children(frame)?;
    Ok(ChoicePanel { root, menu })
}
