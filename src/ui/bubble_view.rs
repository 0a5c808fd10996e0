//! Message bubble view.
//!
//! The view never measures. It is handed a `BubbleLayout` computed by the
//! layout provider and moves its children to the rects named there, hiding
//! any child whose rect is absent.

use eframe::egui::{CornerRadius, Rect, Stroke};

use super::frame::{ChildFrame, ContentStyle};
use super::replied_view::RepliedMessageView;
use super::theme::BubbleTheme;
use crate::layout::BubbleLayout;
use crate::model::{Attachment, MessageData};

type AttachmentTap = Box<dyn FnMut(&Attachment)>;

/// Container handed to the image gallery: where it goes and what it shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryFrame {
    pub frame: ChildFrame,
    /// Image attachments, sorted by locator
    pub images: Vec<Attachment>,
}

pub struct BubbleView {
    theme: BubbleTheme,
    content: Option<MessageData>,
    layout: Option<BubbleLayout>,
    style: Option<ContentStyle>,
    pub text: ChildFrame,
    pub replied: RepliedMessageView,
    /// Where the replied preview sits inside the bubble
    pub replied_frame: ChildFrame,
    pub gallery: GalleryFrame,
    on_attachment_tap: Option<AttachmentTap>,
}

impl BubbleView {
    pub fn new(theme: BubbleTheme) -> Self {
        Self {
            replied: RepliedMessageView::new(theme.clone()),
            theme,
            content: None,
            layout: None,
            style: None,
            text: ChildFrame::hidden(),
            replied_frame: ChildFrame::hidden(),
            gallery: GalleryFrame::default(),
            on_attachment_tap: None,
        }
    }

    pub fn content(&self) -> Option<&MessageData> {
        self.content.as_ref()
    }

    pub fn layout(&self) -> Option<&BubbleLayout> {
        self.layout.as_ref()
    }

    pub fn style(&self) -> Option<&ContentStyle> {
        self.style.as_ref()
    }

    pub fn set_on_attachment_tap(&mut self, callback: impl FnMut(&Attachment) + 'static) {
        self.on_attachment_tap = Some(Box::new(callback));
    }

    /// Assign a new message, or clear the view with `None`.
    ///
    /// Any previously assigned layout belonged to the old content and is
    /// dropped; children stay hidden until `set_layout` provides a new one.
    pub fn set_content(&mut self, content: Option<MessageData>) {
        self.style = content.as_ref().map(|msg| bubble_style(&self.theme, msg));
        self.gallery.images = content
            .as_ref()
            .map(|msg| msg.image_attachments().into_iter().cloned().collect())
            .unwrap_or_default();
        self.replied
            .set_content(content.as_ref().and_then(|msg| msg.parent.as_deref().cloned()));
        self.content = content;
        self.layout = None;
        self.layout_subviews();
    }

    /// Replace the layout tree wholesale.
    pub fn set_layout(&mut self, layout: BubbleLayout) {
        self.layout = Some(layout);
        self.layout_subviews();
    }

    pub fn layout_subviews(&mut self) {
        let (Some(_), Some(layout)) = (&self.content, &self.layout) else {
            self.text.hide();
            self.replied_frame.hide();
            self.gallery.frame.hide();
            self.replied.set_layout(None);
            return;
        };

        self.text.place(layout.text_rect);
        self.replied_frame.place(layout.replied_rect);
        self.replied.set_layout(layout.replied_message_layout().cloned());
        self.gallery.frame.place(union_of(&layout.attachment_rects));
    }

    /// Forward a tap on the gallery image at `index`.
    ///
    /// Returns false when there is no such image or no callback.
    pub fn tap_attachment(&mut self, index: usize) -> bool {
        let Some(attachment) = self.gallery.images.get(index) else {
            return false;
        };
        match self.on_attachment_tap.as_mut() {
            Some(callback) => {
                callback(attachment);
                true
            }
            None => false,
        }
    }
}

fn union_of(rects: &[Rect]) -> Option<Rect> {
    rects.iter().copied().reduce(|a, b| a.union(b))
}

fn bubble_style(theme: &BubbleTheme, msg: &MessageData) -> ContentStyle {
    let (fill, border) = if msg.is_sent_by_current_user {
        (theme.outgoing_fill, theme.outgoing_border)
    } else {
        (theme.incoming_fill, theme.incoming_border)
    };
    ContentStyle {
        fill,
        stroke: Stroke::new(theme.border_width, border),
        corner_radius: bubble_corners(theme.corner_radius, msg.is_last_in_group, msg.is_sent_by_current_user),
    }
}

/// Rounded corners with the sender-side bottom corner squared off on the
/// last message of a group.
pub fn bubble_corners(radius: u8, is_last_in_group: bool, is_sent_by_current_user: bool) -> CornerRadius {
    let mut corners = CornerRadius::same(radius);
    if is_last_in_group {
        if is_sent_by_current_user {
            corners.se = 0;
        } else {
            corners.sw = 0;
        }
    }
    corners
}
