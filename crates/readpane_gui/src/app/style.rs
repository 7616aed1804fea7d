//! Theme constants and one-time style application for the egui app.

use super::ReadPaneApp;
use eframe::egui::{self, Color32, FontData, FontDefinitions, FontFamily, Margin, Visuals};
use tracing::{info, warn};

pub(super) const COLOR_PANEL_BG: Color32 = Color32::from_rgb(0x16, 0x1b, 0x22);
pub(super) const COLOR_TEXT_PRIMARY: Color32 = Color32::from_rgb(0xc9, 0xd1, 0xd9);
pub(super) const COLOR_TEXT_MUTED: Color32 = Color32::from_rgb(0x6e, 0x76, 0x81);
pub(super) const COLOR_ACCENT: Color32 = Color32::from_rgb(0xE5, 0x70, 0x00);
pub(super) const COLOR_BORDER: Color32 = Color32::from_rgb(0x30, 0x36, 0x3d);

/// Family name the serif option renders with when a system serif was found.
pub(super) const SERIF_FAMILY: &str = "Serif";

/// Common installation paths for a serif face, checked in order.
const SERIF_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf",
    "/usr/share/fonts/TTF/DejaVuSerif.ttf",
    "/usr/share/fonts/dejavu/DejaVuSerif.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSerif-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSerif-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Times New Roman.ttf",
    "C:\\Windows\\Fonts\\times.ttf",
];

/// Converts a core option color to an egui color.
pub(super) fn color32(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

fn load_serif_font() -> Option<Vec<u8>> {
    for path in SERIF_CANDIDATES {
        if let Ok(bytes) = std::fs::read(path) {
            info!("serif option uses {}", path);
            return Some(bytes);
        }
    }
    None
}

impl ReadPaneApp {
    /// Applies fonts and widget styling once, on the first frame.
    pub(super) fn ensure_style(&mut self, ctx: &egui::Context) {
        if self.style_applied {
            return;
        }

        let mut fonts = FontDefinitions::default();
        match load_serif_font() {
            Some(bytes) => {
                fonts
                    .font_data
                    .insert(SERIF_FAMILY.to_string(), FontData::from_owned(bytes).into());
                fonts.families.insert(
                    FontFamily::Name(SERIF_FAMILY.into()),
                    vec![SERIF_FAMILY.to_string(), "Ubuntu-Light".to_string()],
                );
                self.serif_loaded = true;
            }
            None => {
                warn!("no system serif font found; serif option falls back to the default family");
            }
        }
        ctx.set_fonts(fonts);

        let mut style = (*ctx.style()).clone();
        style.visuals = Visuals::dark();
        style.visuals.panel_fill = COLOR_PANEL_BG;
        style.visuals.window_fill = COLOR_PANEL_BG;
        style.visuals.selection.bg_fill = COLOR_ACCENT.linear_multiply(0.4);
        style.spacing.menu_margin = Margin::same(8);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        ctx.set_style(style);

        self.style_applied = true;
    }
}
