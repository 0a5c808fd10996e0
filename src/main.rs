//! bubble-demo - scrollable chat viewer for the bubble layout engine
//!
//! Architecture:
//! - Main thread: runs the egui UI, measures and lays out every row
//! - Feed thread: plays a scripted conversation into the UI
//! - Communication via a crossbeam channel

use std::time::Duration;

use crossbeam_channel::Receiver;
use eframe::egui;

use bubble_layout::config::{load_settings, Settings};
use bubble_layout::feed::{demo_conversation, spawn_feed, FeedEvent};
use bubble_layout::layout::{BubbleLayoutProvider, LayoutProvider};
use bubble_layout::text::GalleyMeasurer;
use bubble_layout::ui::{paint_bubble, BubbleTheme, BubbleView};

const CURRENT_USER: &str = "me";
/// Fraction of the row width a bubble may take
const MAX_BUBBLE_FRACTION: f32 = 0.75;
const ROW_SPACING: f32 = 4.0;

struct DemoApp {
    settings: Settings,
    theme: BubbleTheme,
    provider: BubbleLayoutProvider<GalleyMeasurer>,
    feed: Receiver<FeedEvent>,
    rows: Vec<BubbleView>,
    feed_finished: bool,
}

impl DemoApp {
    fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let theme = BubbleTheme::by_name(&settings.theme);
        let provider = BubbleLayoutProvider::with_default_fonts(settings.layout, cc.egui_ctx.pixels_per_point());
        let feed = spawn_feed(demo_conversation(CURRENT_USER), Duration::from_millis(600));

        Self {
            settings,
            theme,
            provider,
            feed,
            rows: Vec::new(),
            feed_finished: false,
        }
    }

    fn process_feed(&mut self) {
        while let Ok(event) = self.feed.try_recv() {
            match event {
                FeedEvent::Message(msg) => {
                    let mut view = BubbleView::new(self.theme.clone());
                    view.set_on_attachment_tap(|attachment| log::info!("tapped {}", attachment.url));
                    view.set_content(Some(msg));
                    self.rows.push(view);
                }
                FeedEvent::Finished => {
                    log::debug!("feed finished after {} messages", self.rows.len());
                    self.feed_finished = true;
                }
            }
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_feed();

        let theme = &self.theme;
        let config = &self.settings.layout;
        let provider = &mut self.provider;
        let rows = &mut self.rows;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    let row_width = ui.available_width();
                    let max_bubble_width = row_width * MAX_BUBBLE_FRACTION;

                    for view in rows.iter_mut() {
                        let Some(msg) = view.content() else {
                            continue;
                        };
                        let outgoing = msg.is_sent_by_current_user;
                        let measured = provider.measure(msg, max_bubble_width);
                        let size = measured.size;
                        let layout = provider.layout(msg, measured);
                        view.set_layout(layout);

                        let (row_rect, _) =
                            ui.allocate_exact_size(egui::vec2(row_width, size.y), egui::Sense::hover());
                        let origin = if outgoing {
                            egui::pos2(row_rect.right() - size.x, row_rect.top())
                        } else {
                            row_rect.left_top()
                        };
                        paint_bubble(ui.painter(), origin, view, theme, config);
                        ui.add_space(ROW_SPACING);
                    }
                });
        });

        if !self.feed_finished {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let settings = load_settings().unwrap_or_else(|e| {
        log::info!("using default settings ({})", e);
        Settings::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.demo_width, 640.0])
            .with_min_inner_size([240.0, 200.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Bubble layout demo",
        options,
        Box::new(|cc| Ok(Box::new(DemoApp::new(cc, settings)))),
    )
}
