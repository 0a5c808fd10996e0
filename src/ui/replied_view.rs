use eframe::egui::{CornerRadius, Stroke};

use super::frame::{ChildFrame, ContentStyle};
use super::theme::BubbleTheme;
use crate::layout::RepliedMessageLayout;
use crate::model::MessageData;

/// Quoted-message preview shown at the top of a bubble.
pub struct RepliedMessageView {
    theme: BubbleTheme,
    content: Option<MessageData>,
    layout: Option<RepliedMessageLayout>,
    style: Option<ContentStyle>,
    pub text: ChildFrame,
}

impl RepliedMessageView {
    pub fn new(theme: BubbleTheme) -> Self {
        Self {
            theme,
            content: None,
            layout: None,
            style: None,
            text: ChildFrame::hidden(),
        }
    }

    pub fn content(&self) -> Option<&MessageData> {
        self.content.as_ref()
    }

    pub fn style(&self) -> Option<&ContentStyle> {
        self.style.as_ref()
    }

    pub fn layout(&self) -> Option<&RepliedMessageLayout> {
        self.layout.as_ref()
    }

    pub fn set_content(&mut self, content: Option<MessageData>) {
        self.style = content.as_ref().map(|_| ContentStyle {
            fill: self.theme.quote_fill,
            stroke: Stroke::new(self.theme.border_width, self.theme.quote_border),
            corner_radius: CornerRadius::same(self.theme.corner_radius / 2),
        });
        self.content = content;
        self.layout = None;
        self.layout_subviews();
    }

    /// Replace the layout tree wholesale and reposition the children.
    pub fn set_layout(&mut self, layout: Option<RepliedMessageLayout>) {
        self.layout = layout;
        self.layout_subviews();
    }

    pub fn layout_subviews(&mut self) {
        match (&self.content, &self.layout) {
            (Some(_), Some(layout)) => self.text.place(layout.text_rect),
            _ => self.text.hide(),
        }
    }
}
