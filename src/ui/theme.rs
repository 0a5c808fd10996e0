//! Colour palettes and shape constants for message bubbles.
//!
//! Themes are plain values handed to views at construction; views only read
//! them.

use eframe::egui::Color32;

#[derive(Clone, Debug, PartialEq)]
pub struct BubbleTheme {
    pub name: String,
    /// Bubble background for messages sent by the current user
    pub outgoing_fill: Color32,
    /// Bubble background for everyone else
    pub incoming_fill: Color32,
    pub outgoing_border: Color32,
    pub incoming_border: Color32,
    /// Replied-message preview background and border
    pub quote_fill: Color32,
    pub quote_border: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub corner_radius: u8,
    pub border_width: f32,
}

impl BubbleTheme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            outgoing_fill: Color32::from_rgb(88, 101, 242),
            incoming_fill: Color32::from_rgb(46, 46, 62),
            outgoing_border: Color32::from_rgb(71, 82, 196),
            incoming_border: Color32::from_rgb(64, 68, 75),
            quote_fill: Color32::from_rgb(28, 28, 38),
            quote_border: Color32::from_rgb(114, 118, 125),
            text_primary: Color32::WHITE,
            text_secondary: Color32::from_rgb(185, 187, 190),
            corner_radius: 16,
            border_width: 1.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            outgoing_fill: Color32::from_rgb(212, 222, 255),
            incoming_fill: Color32::from_rgb(242, 243, 245),
            outgoing_border: Color32::from_rgb(180, 190, 240),
            incoming_border: Color32::from_rgb(210, 213, 219),
            quote_fill: Color32::from_rgb(255, 255, 255),
            quote_border: Color32::from_rgb(180, 185, 192),
            text_primary: Color32::from_rgb(6, 6, 7),
            text_secondary: Color32::from_rgb(79, 86, 96),
            corner_radius: 16,
            border_width: 1.0,
        }
    }

    /// Look up a theme by settings name, falling back to dark.
    pub fn by_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "light" => Self::light(),
            "dark" => Self::dark(),
            other => {
                log::warn!("unknown theme {:?}, using dark", other);
                Self::dark()
            }
        }
    }
}

impl Default for BubbleTheme {
    fn default() -> Self {
        Self::dark()
    }
}
