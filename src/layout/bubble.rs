use eframe::egui::{pos2, vec2, Rect, Vec2};

use super::{
    attachment_placeholders, clamp_to_floor, LayoutProvider, MeasuredSize, NestedLayout,
    RepliedMessageLayout, RepliedMessageLayoutProvider,
};
use crate::config::LayoutConfig;
use crate::model::MessageData;
use crate::text::{GalleyMeasurer, TextMeasurer};

/// Geometry of a message bubble, in the bubble's own coordinates
#[derive(Clone, Debug, PartialEq)]
pub struct BubbleLayout {
    pub size: Vec2,
    pub text_rect: Option<Rect>,
    pub replied_rect: Option<Rect>,
    pub replied_layout: Option<Box<NestedLayout>>,
    /// One rect per image attachment, in `MessageData::image_attachments` order.
    ///
    /// Attachments reserve no height, so these are zero-height markers for
    /// where the gallery starts. When any section is present they lie on the
    /// bottom edge (`y == size.y`), outside the margin box.
    pub attachment_rects: Vec<Rect>,
}

impl BubbleLayout {
    /// The nested quote layout, if it is the replied-message kind.
    pub fn replied_message_layout(&self) -> Option<&RepliedMessageLayout> {
        self.replied_layout.as_deref().and_then(NestedLayout::as_replied)
    }
}

/// Lays out a chat bubble: optional quote, then text, then attachments.
pub struct BubbleLayoutProvider<M> {
    measurer: M,
    replied: RepliedMessageLayoutProvider<M>,
    config: LayoutConfig,
}

impl<M: TextMeasurer> BubbleLayoutProvider<M> {
    pub fn new(measurer: M, replied: RepliedMessageLayoutProvider<M>, config: LayoutConfig) -> Self {
        Self {
            measurer,
            replied,
            config,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }
}

impl BubbleLayoutProvider<GalleyMeasurer> {
    /// Providers measuring with egui's default proportional font.
    pub fn with_default_fonts(config: LayoutConfig, pixels_per_point: f32) -> Self {
        let replied = RepliedMessageLayoutProvider::new(
            GalleyMeasurer::proportional(config.reply_font_size(), pixels_per_point),
            config,
        );
        Self::new(
            GalleyMeasurer::proportional(config.font_size, pixels_per_point),
            replied,
            config,
        )
    }
}

impl<M: TextMeasurer> LayoutProvider for BubbleLayoutProvider<M> {
    type Layout = BubbleLayout;

    fn measure(&mut self, data: &MessageData, max_width: f32) -> MeasuredSize {
        let margin = self.config.margin;
        let working_width = max_width - 2.0 * margin;
        let mut height = margin;
        let mut content_width: f32 = 0.0;

        if let Some(parent) = data.parent.as_deref() {
            let replied_size = self.replied.measure(parent, working_width).size;
            height += replied_size.y + margin;
            content_width = content_width.max(replied_size.x);
        }

        if data.has_text() {
            let text_size = self.measurer.measure(&data.text, working_width);
            height += text_size.y + margin;
            content_width = content_width.max(text_size.x);
        }

        let size = clamp_to_floor(vec2(2.0 * margin + content_width, height), &self.config);
        log::trace!("bubble measured {:?} at width {}", size, max_width);
        MeasuredSize::new(size, max_width)
    }

    fn layout(&mut self, data: &MessageData, measured: MeasuredSize) -> BubbleLayout {
        let margin = self.config.margin;
        let size = measured.size;
        // Same widths as `measure`, so every section gets the height it was sized with
        let working_width = measured.max_width - 2.0 * margin;
        let mut offset_y = margin;

        let mut replied_rect = None;
        let mut replied_layout = None;
        if let Some(parent) = data.parent.as_deref() {
            let replied_measured = self.replied.measure(parent, working_width);
            replied_rect = Some(Rect::from_min_size(pos2(margin, offset_y), replied_measured.size));
            replied_layout = Some(Box::new(self.replied.layout(parent, replied_measured).into()));
            offset_y += replied_measured.size.y + margin;
        }

        let mut text_rect = None;
        if data.has_text() {
            let text_size = self.measurer.measure(&data.text, working_width);
            text_rect = Some(Rect::from_min_size(pos2(margin, offset_y), text_size));
            offset_y += text_size.y + margin;
        }

        BubbleLayout {
            size,
            text_rect,
            replied_rect,
            replied_layout,
            attachment_rects: attachment_placeholders(data, margin, offset_y, size.x - 2.0 * margin),
        }
    }
}
