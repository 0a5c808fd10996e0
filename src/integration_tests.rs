//! Integration tests for bubble-layout
//!
//! These tests drive the providers and views together the way the list
//! renderer does: measure, lay out at the measured size, hand the tree to a
//! view.

#[cfg(test)]
mod integration_tests {
    use eframe::egui::{pos2, Rect, Vec2};

    use crate::config::LayoutConfig;
    use crate::feed::demo_conversation;
    use crate::layout::{measure_rows, BubbleLayoutProvider, LayoutProvider, RepliedMessageLayoutProvider};
    use crate::model::{Attachment, MessageData};
    use crate::text::{MonospaceMeasurer, TextMeasurer};
    use crate::ui::{BubbleTheme, BubbleView};

    const MARGIN: f32 = 8.0;

    fn provider() -> BubbleLayoutProvider<MonospaceMeasurer> {
        let config = LayoutConfig::default();
        let replied = RepliedMessageLayoutProvider::new(MonospaceMeasurer::new(6.0, 12.0), config);
        BubbleLayoutProvider::new(MonospaceMeasurer::new(8.0, 16.0), replied, config)
    }

    fn sample_messages() -> Vec<MessageData> {
        let mut messages = demo_conversation("me");
        messages.push(MessageData::default());
        messages.push(
            MessageData::new("bob", "replying to something quite long with a short answer").with_parent(
                MessageData::new("alice", "this is the message being quoted, and it runs over a few lines"),
            ),
        );
        messages.push(MessageData::new("bob", "unbrokenwordthatislongerthanmostbubblescanfit"));
        messages
    }

    fn inside_content_box(rect: Rect, size: Vec2) -> bool {
        rect.min.x >= MARGIN && rect.min.y >= MARGIN && rect.max.x <= size.x - MARGIN && rect.max.y <= size.y - MARGIN
    }

    /// Empty content is floor-sized at every width that can hold the floor
    #[test]
    fn test_empty_content_floor() {
        let mut p = provider();
        let empty = MessageData::default();
        for width in [48.0, 64.0, 200.0, 2000.0] {
            assert_eq!(p.measure(&empty, width).size, Vec2::splat(32.0));
        }
    }

    /// Measured regions never leave the measured size
    #[test]
    fn test_regions_fit_measured_size() {
        let mut p = provider();
        for msg in sample_messages() {
            for width in [120.0, 200.0, 320.0, 600.0] {
                let measured = p.measure(&msg, width);
                let size = measured.size;
                let layout = p.layout(&msg, measured);
                if let Some(text) = layout.text_rect {
                    assert!(inside_content_box(text, size), "text {:?} outside {:?} for {:?}", text, size, msg.text);
                }
                if let Some(replied) = layout.replied_rect {
                    assert!(inside_content_box(replied, size), "reply {:?} outside {:?}", replied, size);
                    let nested = layout.replied_message_layout().unwrap();
                    if let Some(text) = nested.text_rect {
                        assert!(inside_content_box(text, nested.size));
                    }
                }
                for rect in &layout.attachment_rects {
                    assert!(Rect::from_min_max(pos2(0.0, 0.0), size.to_pos2()).contains_rect(*rect));
                }
            }
        }
    }

    /// Same containment with the egui measurer the demo ships
    #[test]
    fn test_galley_regions_fit_measured_size() {
        let mut p = BubbleLayoutProvider::with_default_fonts(LayoutConfig::default(), 1.0);
        let msg = MessageData::new(
            "bob",
            "Perfect. Could you also check whether the ferry runs on weekends this late in the season?",
        )
        .with_parent(MessageData::new("alice", "Are we still on for the trip planning call tomorrow?"));

        for width in (40..500).step_by(7) {
            let measured = p.measure(&msg, width as f32);
            let size = measured.size;
            let layout = p.layout(&msg, measured);

            let replied = layout.replied_rect.unwrap();
            let text = layout.text_rect.unwrap();
            assert!(fits(replied, size), "reply {:?} outside {:?} at width {}", replied, size, width);
            assert!(fits(text, size), "text {:?} outside {:?} at width {}", text, size, width);
            assert_eq!(replied.max.y + MARGIN, text.min.y);
            // The walk ends exactly where measure said it would
            assert!((text.max.y + MARGIN - size.y).abs() < 1e-3, "height drift at width {}", width);
        }
    }

    fn fits(rect: Rect, size: Vec2) -> bool {
        const EPS: f32 = 1e-3;
        rect.min.x >= MARGIN - EPS
            && rect.min.y >= MARGIN - EPS
            && rect.max.x <= size.x - MARGIN + EPS
            && rect.max.y <= size.y - MARGIN + EPS
    }

    #[test]
    fn test_measure_idempotent() {
        let mut p = provider();
        let messages = sample_messages();
        let first = measure_rows(&mut p, &messages, 280.0);
        let second = measure_rows(&mut p, &messages, 280.0);
        assert_eq!(first, second);
        assert_eq!(first.len(), messages.len());
    }

    #[test]
    fn test_text_height_monotonic_in_width() {
        let mut p = provider();
        let msg = MessageData::new("alice", "how tall this bubble is depends only on how many lines the words need");
        let mut last = f32::INFINITY;
        for width in (48..700).step_by(9) {
            let height = p.measure(&msg, width as f32).size.y;
            assert!(height <= last, "height grew at width {}", width);
            last = height;
        }
    }

    #[test]
    fn test_reply_then_text_ordering() {
        let mut p = provider();
        let msg = MessageData::new("bob", "agreed").with_parent(MessageData::new("alice", "ship it?"));
        let measured = p.measure(&msg, 300.0);
        let size = measured.size;
        let layout = p.layout(&msg, measured);
        let replied = layout.replied_rect.unwrap();
        let text = layout.text_rect.unwrap();
        assert_eq!(replied.max.y + MARGIN, text.min.y);
    }

    /// "hi" at width 300 with margin 8: margin + text height + margin
    #[test]
    fn test_short_text_scenario() {
        let mut p = provider();
        let msg = MessageData::new("bob", "hi");
        let mut measurer = MonospaceMeasurer::new(8.0, 16.0);
        let text_height = measurer.measure("hi", 284.0).y;

        let measured = p.measure(&msg, 300.0);
        let size = measured.size;
        assert_eq!(size.y, (MARGIN + text_height + MARGIN).max(32.0));
        let layout = p.layout(&msg, measured);
        assert_eq!(layout.text_rect.unwrap().min, pos2(8.0, 8.0));
    }

    #[test]
    fn test_images_only_scenario() {
        let mut p = provider();
        let msg = MessageData::new("bob", "")
            .with_attachment(Attachment::image("https://img.example/2.png"))
            .with_attachment(Attachment::image("https://img.example/1.png"));
        let measured = p.measure(&msg, 300.0);
        let size = measured.size;
        assert_eq!(size.y, 32.0);

        let layout = p.layout(&msg, measured);
        assert_eq!(layout.attachment_rects.len(), msg.image_attachments().len());

        let mut view = BubbleView::new(BubbleTheme::dark());
        view.set_content(Some(msg));
        view.set_layout(layout);
        assert!(view.text.is_hidden());
        assert!(view.replied_frame.is_hidden());
        assert_eq!(view.gallery.images[0].url, "https://img.example/1.png");
        assert!(!view.gallery.frame.is_hidden());
    }

    /// A view fed a measured layout exposes exactly the provider's rects
    #[test]
    fn test_view_mirrors_layout_tree() {
        let mut p = provider();
        let mut view = BubbleView::new(BubbleTheme::light());
        for msg in sample_messages() {
            let measured = p.measure(&msg, 260.0);
            let layout = p.layout(&msg, measured);
            view.set_content(Some(msg.clone()));
            view.set_layout(layout.clone());

            assert_eq!(view.text.rect, layout.text_rect);
            assert_eq!(view.replied_frame.rect, layout.replied_rect);
            assert_eq!(
                view.replied.text.rect,
                layout.replied_message_layout().and_then(|l| l.text_rect)
            );
            assert_eq!(view.gallery.frame.is_hidden(), layout.attachment_rects.is_empty());
        }
        view.set_content(None);
        assert!(view.text.is_hidden() && view.replied_frame.is_hidden() && view.gallery.frame.is_hidden());
    }
}
