//! The render pass.
//!
//! Rendering is a single depth-first walk from a root element. Each element
//! enters its colors on a [`RenderContext`], draws itself through a
//! [`Painter`] confined to its active clip, renders its visible children and
//! then restores the colors it entered with.
//!
//! Clips are threaded through the recursion as values. When an element clips
//! its children (or was itself narrowed by an ancestor) each child receives
//! its own clip intersected with the parent's children region; nothing is
//! written back to the elements.

use std::borrow::Cow;

use smallvec::SmallVec;

use conui_core::{Color, ColorAttr, Error, Position, Rect, Result};
use conui_terminal::RenderTarget;
use conui_text::{clip_columns, layout_lines, place_lines};

use crate::border::BorderChars;
use crate::clip::{is_rejected, resolve_child_clip};
use crate::element::{to_usize, Element, ElementKind, TextBlock};
use crate::tree::{ElementId, ElementTree};

/// A user-supplied draw strategy for [`ElementKind::Custom`] elements.
pub trait Draw {
    /// Draws `element` through `painter`.
    ///
    /// Coordinates given to the painter are element-local; anything outside
    /// the element's active clip is discarded.
    fn draw(&self, element: &Element, painter: &mut Painter<'_, '_>) -> Result<()>;
}

/// A render target together with the scoped color state of a pass.
pub struct RenderContext<'t> {
    target: &'t mut dyn RenderTarget,
    current: ColorAttr,
    saved: SmallVec<[ColorAttr; 16]>,
}

impl<'t> RenderContext<'t> {
    /// Starts a context writing to `target` with the default attribute.
    pub fn new(target: &'t mut dyn RenderTarget) -> Self {
        Self {
            target,
            current: ColorAttr::default(),
            saved: SmallVec::new(),
        }
    }

    /// The attribute currently in effect.
    #[inline]
    pub fn current(&self) -> ColorAttr {
        self.current
    }

    /// How many scopes are open.
    #[inline]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Opens a color scope. Transparent channels keep the enclosing color.
    pub fn enter(&mut self, fore: Color, back: Color) -> Result<()> {
        self.saved.push(self.current);
        self.current = self.current.compose(fore, back);
        self.target.set_colors(self.current)
    }

    /// Closes the innermost scope and restores the attribute it replaced.
    pub fn exit(&mut self) -> Result<()> {
        match self.saved.pop() {
            Some(previous) => {
                self.current = previous;
                self.target.set_colors(previous)
            }
            None => Ok(()),
        }
    }

    /// Flushes the underlying target.
    pub fn flush(&mut self) -> Result<()> {
        self.target.flush()
    }
}

impl std::fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("current", &self.current)
            .field("depth", &self.saved.len())
            .finish_non_exhaustive()
    }
}

/// The drawing surface handed to one element.
///
/// Holds the element's absolute origin and its active clip in element-local
/// coordinates. Every write is cut to the clip and to the non-negative part
/// of the screen before it reaches the target.
pub struct Painter<'a, 't> {
    ctx: &'a mut RenderContext<'t>,
    origin: Position,
    clip: Rect,
}

impl<'a, 't> Painter<'a, 't> {
    /// Creates a painter for an element at `origin` with the given clip.
    pub fn new(ctx: &'a mut RenderContext<'t>, origin: Position, clip: Rect) -> Self {
        Self { ctx, origin, clip }
    }

    /// Absolute position of the element.
    #[inline]
    pub fn origin(&self) -> Position {
        self.origin
    }

    /// The active clip in element-local coordinates.
    #[inline]
    pub fn clip(&self) -> Rect {
        self.clip
    }

    /// The attribute text is written with.
    #[inline]
    pub fn attr(&self) -> ColorAttr {
        self.ctx.current()
    }

    /// Writes `text` starting at element-local `(x, y)`, keeping only the
    /// visible columns.
    ///
    /// Tabs are measured as one column by the layout engine, so each is sent
    /// to the target as a single space.
    pub fn put_str(&mut self, x: i32, y: i32, text: &str) -> Result<()> {
        if y < self.clip.y || y >= self.clip.bottom() || self.origin.y + y < 0 {
            return Ok(());
        }
        let text = expand_tabs(text);
        let left = self.clip.x.max(-self.origin.x);
        let Some((col, run)) = clip_columns(&text, x, left..self.clip.right()) else {
            return Ok(());
        };
        self.ctx.target.set_cursor(self.origin.offset(col, y))?;
        self.ctx.target.write_str(run)
    }

    /// Fills an element-local rectangle with spaces in the current colors.
    pub fn fill_rect(&mut self, rect: Rect) -> Result<()> {
        let area = rect.intersection(self.clip);
        if area.is_empty() {
            return Ok(());
        }
        let blank = " ".repeat(to_usize(area.width));
        for y in area.y..area.bottom() {
            self.put_str(area.x, y, &blank)?;
        }
        Ok(())
    }
}

fn expand_tabs(text: &str) -> Cow<'_, str> {
    if text.contains('\t') {
        Cow::Owned(text.replace('\t', " "))
    } else {
        Cow::Borrowed(text)
    }
}

impl ElementTree {
    /// Renders the subtree rooted at `root` into `target`.
    ///
    /// The root is placed at its absolute position and uses its own clip.
    /// The target is flushed once the pass completes.
    pub fn render(&self, root: ElementId, target: &mut dyn RenderTarget) -> Result<()> {
        let span = tracing::debug_span!("render", ?root);
        let _enter = span.enter();

        let origin = self.absolute_position(root)?;
        tracing::debug!(?origin, "render pass started");
        let mut ctx = RenderContext::new(target);
        self.render_node(root, origin, None, &mut ctx)?;
        ctx.flush()?;
        tracing::debug!("render pass finished");
        Ok(())
    }

    fn render_node(
        &self,
        id: ElementId,
        origin: Position,
        inherited: Option<Rect>,
        ctx: &mut RenderContext<'_>,
    ) -> Result<()> {
        let element = self.element(id)?;
        if !element.is_visible() {
            tracing::trace!(?id, "skipping hidden element");
            return Ok(());
        }

        let clip = inherited.unwrap_or_else(|| element.own_clip());
        ctx.enter(element.fore(), element.back())?;
        let drawn = self.render_scope(id, element, origin, clip, inherited.is_some(), ctx);
        let restored = ctx.exit();
        drawn.and(restored)
    }

    fn render_scope(
        &self,
        id: ElementId,
        element: &Element,
        origin: Position,
        clip: Rect,
        narrowed: bool,
        ctx: &mut RenderContext<'_>,
    ) -> Result<()> {
        paint(element, &mut Painter::new(ctx, origin, clip))?;

        let narrowing = narrowed || element.clips_children();
        let region = element.clip_insets().apply(clip);

        for &child_id in self.children(id) {
            let child = self.element(child_id)?;
            if !child.is_visible() {
                tracing::trace!(id = ?child_id, "skipping hidden element");
                continue;
            }
            let child_clip = if narrowing {
                if is_rejected(region, child.bounds()) {
                    tracing::trace!(id = ?child_id, "child outside clip region");
                    continue;
                }
                Some(resolve_child_clip(region, child.position(), child.own_clip()))
            } else {
                None
            };
            self.render_node(child_id, origin + child.position(), child_clip, ctx)?;
        }
        Ok(())
    }
}

/// Runs the draw behavior of the element's kind.
fn paint(element: &Element, painter: &mut Painter<'_, '_>) -> Result<()> {
    match element.kind() {
        ElementKind::Bare => Err(Error::UnimplementedBehavior("bare")),
        ElementKind::Interface => {
            if element.back().is_transparent() {
                return Ok(());
            }
            painter.fill_rect(Rect::from_parts(Position::ZERO, element.size()))
        }
        ElementKind::Frame(chars) => draw_frame(element, chars, painter),
        ElementKind::Label(block) | ElementKind::TextField(block) => {
            draw_text(element, block, painter)
        }
        ElementKind::Menu(_) => Ok(()),
        ElementKind::Custom(draw) => draw.draw(element, painter),
    }
}

fn draw_frame(element: &Element, chars: &BorderChars, painter: &mut Painter<'_, '_>) -> Result<()> {
    let size = element.size();
    if size.is_empty() {
        return Ok(());
    }
    let width = to_usize(size.width);
    let last_row = size.height - 1;

    painter.put_str(0, 0, &chars.edge(width, true))?;
    if last_row > 0 {
        painter.put_str(0, last_row, &chars.edge(width, false))?;
    }

    let opaque_back = !element.back().is_transparent();
    let opaque_fore = !element.fore().is_transparent();
    let middle = chars.middle(width);
    let vertical = chars.vertical.to_string();
    for row in 1..last_row {
        if opaque_back {
            painter.put_str(0, row, &middle)?;
        } else if opaque_fore {
            painter.put_str(0, row, &vertical)?;
            if size.width > 1 {
                painter.put_str(size.width - 1, row, &vertical)?;
            }
        }
    }
    Ok(())
}

fn draw_text(element: &Element, block: &TextBlock, painter: &mut Painter<'_, '_>) -> Result<()> {
    let size = element.size();
    if !element.back().is_transparent() {
        painter.fill_rect(Rect::from_parts(Position::ZERO, size))?;
    }

    let options = block.layout_options(size.width, size.height);
    let lines = layout_lines(&block.text, options);
    let placed = place_lines(
        lines,
        to_usize(size.width),
        to_usize(size.height),
        block.h_align,
        block.v_align,
    );
    for line in &placed {
        painter.put_str(line.x, line.y, &line.text)?;
    }
    Ok(())
}
