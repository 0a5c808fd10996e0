use eframe::egui::{Color32, CornerRadius, Rect, Stroke};

/// Placement of one child element inside a content view.
///
/// `None` means hidden; a missing region in the layout is a normal state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChildFrame {
    pub rect: Option<Rect>,
}

impl ChildFrame {
    pub fn hidden() -> Self {
        Self { rect: None }
    }

    pub fn place(&mut self, rect: Option<Rect>) {
        self.rect = rect;
    }

    pub fn hide(&mut self) {
        self.rect = None;
    }

    pub fn is_hidden(&self) -> bool {
        self.rect.is_none()
    }
}

/// Background, border and corner shape of a content view
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentStyle {
    pub fill: Color32,
    pub stroke: Stroke,
    pub corner_radius: CornerRadius,
}
