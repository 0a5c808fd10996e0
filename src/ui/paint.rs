//! Draw laid-out views with an egui painter.
//!
//! Painting only reads the frames the views already hold; a hidden frame
//! draws nothing.

use eframe::egui::{FontId, Painter, Pos2, Rect, StrokeKind, Vec2};

use super::bubble_view::BubbleView;
use super::frame::ContentStyle;
use super::replied_view::RepliedMessageView;
use super::theme::BubbleTheme;
use crate::config::LayoutConfig;

/// Paint `view` with its top-left corner at `origin`.
pub fn paint_bubble(painter: &Painter, origin: Pos2, view: &BubbleView, theme: &BubbleTheme, config: &LayoutConfig) {
    let (Some(msg), Some(layout), Some(style)) = (view.content(), view.layout(), view.style()) else {
        return;
    };

    let offset = origin.to_vec2();
    paint_background(painter, Rect::from_min_size(origin, layout.size), style);

    if let Some(rect) = view.replied_frame.rect {
        paint_replied(painter, rect.translate(offset), &view.replied, theme, config);
    }

    if let Some(rect) = view.text.rect {
        let galley = painter.layout(
            msg.text.clone(),
            FontId::proportional(config.font_size),
            theme.text_primary,
            rect.width(),
        );
        painter.galley(rect.min + offset, galley, theme.text_primary);
    }
}

fn paint_replied(painter: &Painter, rect: Rect, view: &RepliedMessageView, theme: &BubbleTheme, config: &LayoutConfig) {
    let (Some(msg), Some(style)) = (view.content(), view.style()) else {
        return;
    };
    paint_background(painter, rect, style);

    if let Some(text_rect) = view.text.rect {
        let galley = painter.layout(
            msg.text.clone(),
            FontId::proportional(config.reply_font_size()),
            theme.text_secondary,
            text_rect.width(),
        );
        painter.galley(text_rect.min + rect.min.to_vec2(), galley, theme.text_secondary);
    }
}

fn paint_background(painter: &Painter, rect: Rect, style: &ContentStyle) {
    if rect.size() == Vec2::ZERO {
        return;
    }
    painter.rect_filled(rect, style.corner_radius, style.fill);
    painter.rect_stroke(rect, style.corner_radius, style.stroke, StrokeKind::Inside);
}
