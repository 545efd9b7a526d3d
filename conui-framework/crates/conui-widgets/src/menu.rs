//! Numbered menus.
//!
//! A menu element owns a list of entries. [`ElementTree::layout_menu`] turns
//! them into one label per entry followed by a prompt field, and
//! [`ElementTree::read_menu`] reads a line from that field and resolves it
//! against the entries.

use conui_core::{Color, Error, Result};
use conui_terminal::{LineReader, RenderTarget};

use crate::element::{Element, ElementKind};
use crate::tree::{ElementId, ElementTree};

/// Entries and prompt settings of a menu element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    /// Entry texts, shown numbered from 1.
    pub entries: Vec<String>,
    /// Text of the input field under the entries.
    pub prompt: String,
    /// Foreground color of the input field.
    pub prompt_color: Color,
    input: Option<ElementId>,
}

impl MenuState {
    /// Creates a menu state with the default `"> "` prompt.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
            prompt: "> ".to_string(),
            prompt_color: Color::Yellow,
            input: None,
        }
    }

    /// The input field generated by the last layout.
    pub fn input(&self) -> Option<ElementId> {
        self.input
    }

    /// Resolves a line of input against the entries.
    ///
    /// ```
    /// use conui_widgets::{MenuSelection, MenuState};
    ///
    /// let menu = MenuState::new(["Start", "Quit"]);
    /// assert_eq!(menu.choose(" 2 "), MenuSelection::Entry(1));
    /// assert_eq!(menu.choose("3"), MenuSelection::Other("3".to_string()));
    /// ```
    pub fn choose(&self, input: &str) -> MenuSelection {
        match input.trim().parse::<usize>() {
            Ok(number) if (1..=self.entries.len()).contains(&number) => {
                MenuSelection::Entry(number - 1)
            }
            _ => MenuSelection::Other(input.to_string()),
        }
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

/// The outcome of reading a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuSelection {
    /// A listed entry, by zero-based index.
    Entry(usize),
    /// Input that does not name an entry, as typed.
    Other(String),
}

fn menu_state(element: &Element) -> Result<&MenuState> {
    match element.kind() {
        ElementKind::Menu(state) => Ok(state),
        other => Err(Error::WrongKind {
            expected: "menu",
            found: other.name(),
        }),
    }
}

impl ElementTree {
    /// Rebuilds the children of a menu from its entries.
    ///
    /// Previous children are freed. Each entry becomes a label reading
    /// `"{n} - {entry}"`, stacked under the previous one and at most as wide
    /// as the menu. The prompt field goes one row below the last entry and
    /// spans the menu width. Returns the id of the prompt field.
    pub fn layout_menu(&mut self, menu: ElementId) -> Result<ElementId> {
        let element = self.element(menu)?;
        let state = menu_state(element)?;
        let entries = state.entries.clone();
        let prompt = state.prompt.clone();
        let prompt_color = state.prompt_color;
        let width = element.size().width;
        let entry_color = element.fore();

        self.clear_children(menu)?;

        let mut bottom = None;
        for (index, entry) in entries.iter().enumerate() {
            let label = Element::label()
                .text(format!("{} - {}", index + 1, entry))
                .fore(entry_color)
                .max_size((width, 0))
                .fit_text()
                .position((0, bottom.unwrap_or(0)))
                .build();
            bottom = Some(label.bottom());
            self.add_new_child(menu, label)?;
        }

        let field = Element::text_field()
            .text(prompt)
            .fore(prompt_color)
            .position((0, bottom.map_or(0, |b| b + 1)))
            .size((width, 1))
            .build();
        let field = self.add_new_child(menu, field)?;

        if let ElementKind::Menu(state) = self.element_mut(menu)?.kind_mut() {
            state.input = Some(field);
        }
        tracing::debug!(?menu, entries = entries.len(), "laid out menu");
        Ok(field)
    }

    /// Focuses the menu's prompt, reads a line and resolves it.
    ///
    /// The menu must have been laid out with [`ElementTree::layout_menu`].
    pub fn read_menu(
        &self,
        menu: ElementId,
        target: &mut dyn RenderTarget,
        reader: &mut dyn LineReader,
    ) -> Result<MenuSelection> {
        let state = menu_state(self.element(menu)?)?;
        let input = state
            .input
            .ok_or_else(|| Error::ElementNotFound(format!("input field of menu {menu:?}")))?;
        let line = self.read_field(input, target, reader)?;
        let selection = state.choose(&line);
        tracing::debug!(?menu, ?selection, "menu choice");
        Ok(selection)
    }
}
