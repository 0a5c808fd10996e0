//! Message view-models consumed by the layout providers and views.
//!
//! Values here are resolved upstream (feed, fixtures, persisted chat state)
//! and are read-only to everything in this crate.

use serde::{Deserialize, Serialize};

/// Kind of an attached resource
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Image,
    Other,
}

/// An attachment on a message, addressed by its resource locator
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    pub kind: AttachmentKind,
    pub url: String,
}

impl Attachment {
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            kind: AttachmentKind::Image,
            url: url.into(),
        }
    }

    pub fn other(url: impl Into<String>) -> Self {
        Self {
            kind: AttachmentKind::Other,
            url: url.into(),
        }
    }

    pub fn is_image(&self) -> bool {
        self.kind == AttachmentKind::Image
    }
}

/// One message as it should be rendered in a single render pass
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct MessageData {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub text: String,
    /// The quoted message this one replies to
    #[serde(default)]
    pub parent: Option<Box<MessageData>>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub is_sent_by_current_user: bool,
    /// Whether this is the last message of a consecutive run from one sender
    #[serde(default)]
    pub is_last_in_group: bool,
}

impl MessageData {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_parent(mut self, parent: MessageData) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    pub fn sent_by_current_user(mut self, sent: bool) -> Self {
        self.is_sent_by_current_user = sent;
        self
    }

    pub fn last_in_group(mut self, last: bool) -> Self {
        self.is_last_in_group = last;
        self
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    /// Image attachments only, ordered by locator ascending.
    pub fn image_attachments(&self) -> Vec<&Attachment> {
        let mut images: Vec<&Attachment> = self.attachments.iter().filter(|a| a.is_image()).collect();
        images.sort_by(|a, b| a.url.cmp(&b.url));
        images
    }
}

/// Set `is_last_in_group` on every message that ends a consecutive run from
/// one author; clear it on the rest.
pub fn mark_group_ends(messages: &mut [MessageData]) {
    let len = messages.len();
    for i in 0..len {
        let last = i + 1 == len || messages[i + 1].author != messages[i].author;
        messages[i].is_last_in_group = last;
    }
}
