//! Size and geometry computation for message content views.
//!
//! Each content-view kind has a provider that turns `(MessageData, width)`
//! into a size, and `(MessageData, MeasuredSize)` into a layout tree of rects in the
//! view's own coordinate space. Sections stack top to bottom in a fixed
//! order: replied message, text, attachments. An absent section contributes
//! neither height nor margin.
//!
//! Providers own a text measurer as scratch state and take `&mut self`; they
//! are meant to be driven from the UI thread only. Nothing is cached between
//! calls. Widths must be finite and non-negative; this is not checked.

mod bubble;
mod replied;

pub use bubble::{BubbleLayout, BubbleLayoutProvider};
pub use replied::{RepliedMessageLayout, RepliedMessageLayoutProvider};

use eframe::egui::{pos2, vec2, Rect, Vec2};

use crate::config::LayoutConfig;
use crate::model::MessageData;

/// A measured size together with the width it was measured at.
///
/// `layout` re-measures every section at `max_width`, so the geometry it
/// produces is the same walk `measure` did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeasuredSize {
    pub size: Vec2,
    pub max_width: f32,
}

impl MeasuredSize {
    pub fn new(size: Vec2, max_width: f32) -> Self {
        Self { size, max_width }
    }
}

/// A bare size lays out as if it had been measured at its own width.
impl From<Vec2> for MeasuredSize {
    fn from(size: Vec2) -> Self {
        Self::new(size, size.x)
    }
}

/// Measures and lays out one kind of content view.
pub trait LayoutProvider {
    type Layout;

    /// Size needed to show `data` when at most `max_width` is available.
    fn measure(&mut self, data: &MessageData, max_width: f32) -> MeasuredSize;

    /// Concrete geometry for `data` inside `measured.size`.
    ///
    /// For `measured = measure(data, w)` no region of the result leaves
    /// `measured.size`.
    fn layout(&mut self, data: &MessageData, measured: MeasuredSize) -> Self::Layout;
}

/// Layout of a nested content view, tagged by kind.
///
/// Sibling layout types refer to each other through this enum instead of
/// directly, and the consuming view picks the variant it renders.
#[derive(Clone, Debug, PartialEq)]
pub enum NestedLayout {
    Bubble(BubbleLayout),
    RepliedMessage(RepliedMessageLayout),
}

impl NestedLayout {
    pub fn size(&self) -> Vec2 {
        match self {
            NestedLayout::Bubble(layout) => layout.size,
            NestedLayout::RepliedMessage(layout) => layout.size,
        }
    }

    pub fn as_bubble(&self) -> Option<&BubbleLayout> {
        match self {
            NestedLayout::Bubble(layout) => Some(layout),
            _ => None,
        }
    }

    pub fn as_replied(&self) -> Option<&RepliedMessageLayout> {
        match self {
            NestedLayout::RepliedMessage(layout) => Some(layout),
            _ => None,
        }
    }
}

impl From<BubbleLayout> for NestedLayout {
    fn from(layout: BubbleLayout) -> Self {
        NestedLayout::Bubble(layout)
    }
}

impl From<RepliedMessageLayout> for NestedLayout {
    fn from(layout: RepliedMessageLayout) -> Self {
        NestedLayout::RepliedMessage(layout)
    }
}

/// Measure every row at `width`, in order.
///
/// Nothing is retained; callers that reuse rows across scrolling keep the
/// result themselves.
pub fn measure_rows<P: LayoutProvider>(provider: &mut P, rows: &[MessageData], width: f32) -> Vec<MeasuredSize> {
    rows.iter().map(|row| provider.measure(row, width)).collect()
}

/// Apply the minimum-size floor to both dimensions.
pub(crate) fn clamp_to_floor(size: Vec2, config: &LayoutConfig) -> Vec2 {
    vec2(size.x.max(config.min_size), size.y.max(config.min_size))
}

/// One zero-height rect per image attachment at the bottom of the stack.
///
/// Attachments reserve no height yet; the rects only tell the gallery where
/// its container starts. After a section they sit on the bottom edge of the
/// size, below the margin box.
// TODO: give the gallery real height once thumbnail sizing is settled.
pub(crate) fn attachment_placeholders(data: &MessageData, x: f32, y: f32, width: f32) -> Vec<Rect> {
    let origin = pos2(x, y);
    data.image_attachments()
        .iter()
        .map(|_| Rect::from_min_size(origin, vec2(width.max(0.0), 0.0)))
        .collect()
}
