//! Content views for the message list.
//!
//! - `bubble_view`: message bubble holding text, quote and gallery frames
//! - `replied_view`: quoted-message preview nested in a bubble
//! - `frame`: child placement and style values shared by the views
//! - `paint`: egui drawing of laid-out views
//! - `theme`: colour palettes

mod bubble_view;
mod frame;
mod paint;
mod replied_view;
mod theme;

pub use bubble_view::{bubble_corners, BubbleView, GalleryFrame};
pub use frame::{ChildFrame, ContentStyle};
pub use paint::paint_bubble;
pub use replied_view::RepliedMessageView;
pub use theme::BubbleTheme;
