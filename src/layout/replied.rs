use eframe::egui::{pos2, vec2, Rect, Vec2};

use super::{attachment_placeholders, clamp_to_floor, LayoutProvider, MeasuredSize};
use crate::config::LayoutConfig;
use crate::model::MessageData;
use crate::text::TextMeasurer;

/// Geometry of a quoted-message preview
#[derive(Clone, Debug, PartialEq)]
pub struct RepliedMessageLayout {
    pub size: Vec2,
    pub text_rect: Option<Rect>,
    /// Zero-height placeholders, one per image attachment; see `BubbleLayout`
    pub attachment_rects: Vec<Rect>,
}

/// Lays out the preview of a replied-to message.
///
/// Shows one level only: the quoted message's own parent is ignored.
pub struct RepliedMessageLayoutProvider<M> {
    measurer: M,
    config: LayoutConfig,
}

impl<M: TextMeasurer> RepliedMessageLayoutProvider<M> {
    pub fn new(measurer: M, config: LayoutConfig) -> Self {
        Self { measurer, config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }
}

impl<M: TextMeasurer> LayoutProvider for RepliedMessageLayoutProvider<M> {
    type Layout = RepliedMessageLayout;

    fn measure(&mut self, data: &MessageData, max_width: f32) -> MeasuredSize {
        let margin = self.config.margin;
        let working_width = max_width - 2.0 * margin;
        let mut height = margin;
        let mut content_width: f32 = 0.0;

        if data.has_text() {
            let text_size = self.measurer.measure(&data.text, working_width);
            height += text_size.y + margin;
            content_width = content_width.max(text_size.x);
        }

        let size = clamp_to_floor(vec2(2.0 * margin + content_width, height), &self.config);
        log::trace!("replied preview measured {:?} at width {}", size, max_width);
        MeasuredSize::new(size, max_width)
    }

    fn layout(&mut self, data: &MessageData, measured: MeasuredSize) -> RepliedMessageLayout {
        let margin = self.config.margin;
        let size = measured.size;
        let mut offset_y = margin;

        let text_rect = if data.has_text() {
            let text_size = self.measurer.measure(&data.text, measured.max_width - 2.0 * margin);
            let rect = Rect::from_min_size(pos2(margin, offset_y), text_size);
            offset_y += text_size.y + margin;
            Some(rect)
        } else {
            None
        };

        RepliedMessageLayout {
            size,
            text_rect,
            attachment_rects: attachment_placeholders(data, margin, offset_y, size.x - 2.0 * margin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Attachment;
    use crate::text::MonospaceMeasurer;

    fn provider() -> RepliedMessageLayoutProvider<MonospaceMeasurer> {
        RepliedMessageLayoutProvider::new(MonospaceMeasurer::new(6.0, 12.0), LayoutConfig::default())
    }

    #[test]
    fn test_ignores_grandparent() {
        let mut p = provider();
        let quoted = MessageData::new("alice", "original question");
        let with_parent = quoted.clone().with_parent(MessageData::new("carol", "much older message"));
        assert_eq!(p.measure(&quoted, 200.0), p.measure(&with_parent, 200.0));
    }

    #[test]
    fn test_text_size() {
        let mut p = provider();
        // 17 chars * 6 = 102 wide, one 12pt line
        let size = p.measure(&MessageData::new("alice", "original question"), 200.0);
        // Height 8 + 12 + 8 is below the floor
        assert_eq!(size.size, vec2(118.0, 32.0));
        assert_eq!(size.max_width, 200.0);

        let layout = p.layout(&MessageData::new("alice", "original question"), size);
        assert_eq!(layout.text_rect, Some(Rect::from_min_size(pos2(8.0, 8.0), vec2(102.0, 12.0))));
    }

    #[test]
    fn test_empty_preview_is_floor_sized() {
        let mut p = provider();
        let data = MessageData::new("alice", "").with_attachment(Attachment::image("a.png"));
        let size = p.measure(&data, 200.0);
        assert_eq!(size.size, vec2(32.0, 32.0));

        let layout = p.layout(&data, size);
        assert!(layout.text_rect.is_none());
        assert_eq!(layout.attachment_rects.len(), 1);
    }

    #[test]
    fn test_layout_rewraps_at_measured_width() {
        let mut p = provider();
        // capacity 4 at width 40: "abcd" | "ef"
        let data = MessageData::new("alice", "abcd ef");
        let measured = p.measure(&data, 40.0);
        assert_eq!(measured.size, vec2(40.0, 8.0 + 24.0 + 8.0));

        let layout = p.layout(&data, measured);
        let text = layout.text_rect.unwrap();
        assert_eq!(text.max.y + 8.0, measured.size.y);
    }
}
