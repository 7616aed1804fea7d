//! Article rendering with the applied display settings.

use super::super::*;
use eframe::egui::{self, FontId, RichText};

const TITLE_SCALE: f32 = 1.7;
const BYLINE_SCALE: f32 = 0.85;
const PAGE_MARGIN: f32 = 32.0;
const MIN_COLUMN_WIDTH: f32 = 240.0;

impl ReadPaneApp {
    /// Renders the article in a centered column using the applied
    /// selections for family, size, colors, and column width.
    pub(crate) fn render_article(&mut self, ctx: &egui::Context) {
        let background = color32(self.applied.background.rgb);
        let text_color = color32(self.applied.font_color.rgb);
        let family = self.family_for(self.applied.font_family.slot);
        let size = self.applied.font_size.points;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(background))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        let available = ui.available_width();
                        let column = self
                            .applied
                            .content_width
                            .points
                            .min(available - 2.0 * PAGE_MARGIN)
                            .max(MIN_COLUMN_WIDTH);
                        let indent = ((available - column) * 0.5).max(0.0);

                        ui.horizontal(|ui| {
                            ui.add_space(indent);
                            ui.vertical(|ui| {
                                ui.set_width(column);
                                ui.add_space(PAGE_MARGIN);
                                ui.label(
                                    RichText::new(&self.article.title)
                                        .font(FontId::new(size * TITLE_SCALE, family.clone()))
                                        .color(text_color)
                                        .strong(),
                                );
                                if let Some(byline) = &self.article.byline {
                                    ui.add_space(4.0);
                                    ui.label(
                                        RichText::new(byline)
                                            .font(FontId::new(size * BYLINE_SCALE, family.clone()))
                                            .color(text_color.gamma_multiply(0.7))
                                            .italics(),
                                    );
                                }
                                ui.add_space(16.0);
                                for paragraph in &self.article.paragraphs {
                                    ui.label(
                                        RichText::new(paragraph)
                                            .font(FontId::new(size, family.clone()))
                                            .color(text_color),
                                    );
                                    ui.add_space(10.0);
                                }
                                ui.add_space(2.0 * PAGE_MARGIN);
                            });
                        });
                    });
            });
    }
}
