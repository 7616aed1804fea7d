//! egui app shell wiring the article view and the display settings panel.

mod style;
mod ui;

#[cfg(test)]
mod tests;

use eframe::egui;
use readpane_core::options::{
    ColorOption, ContentWidthOption, FontFamilyOption, FontSizeOption, FontSlot,
};
use readpane_core::{Article, Config, DisplaySettings};
use style::*;
use tracing::{info, warn};
use ui::settings_panel::{self, PanelHooks, PanelState};

/// Minimum enforced window size to keep the panel and a readable column usable.
pub(crate) const MIN_WINDOW_SIZE: [f32; 2] = [640.0, 480.0];

/// Application shell.
///
/// Owns the article, the two copies of the selection state (the draft the
/// panel edits and the applied state the article renders with), and the
/// panel visibility state. Everything runs inside the egui frame loop; there
/// is no background work.
pub(crate) struct ReadPaneApp {
    article: Article,
    draft: DisplaySettings,
    applied: DisplaySettings,
    panel: PanelState,
    reduce_motion: bool,
    style_applied: bool,
    serif_loaded: bool,
}

impl ReadPaneApp {
    pub(crate) fn new(config: &Config) -> Self {
        let article = match &config.article_path {
            Some(path) => match Article::load_from_path(path) {
                Ok(article) => {
                    info!("loaded article from {}", path.display());
                    article
                }
                Err(err) => {
                    warn!(
                        "failed to load article from {}: {}; using the built-in sample",
                        path.display(),
                        err
                    );
                    Article::sample()
                }
            },
            None => Article::sample(),
        };

        Self {
            article,
            draft: DisplaySettings::default(),
            applied: DisplaySettings::default(),
            panel: PanelState::new(),
            reduce_motion: config.reduce_motion,
            style_applied: false,
            serif_loaded: false,
        }
    }

    /// One full frame: style setup, article view, settings panel.
    ///
    /// Split out of [`eframe::App::update`] so tests can drive frames with a
    /// bare [`egui::Context`].
    pub(crate) fn run_frame(&mut self, ctx: &egui::Context) {
        self.ensure_style(ctx);
        self.render_article(ctx);
        self.render_settings_panel(ctx);
    }

    /// Renders the panel and routes its callback events into host state.
    ///
    /// The hooks record picks and button requests into frame-locals; they
    /// are folded into the draft/applied states once rendering is done.
    pub(crate) fn render_settings_panel(&mut self, ctx: &egui::Context) {
        let mut family_pick: Option<&'static FontFamilyOption> = None;
        let mut size_pick: Option<&'static FontSizeOption> = None;
        let mut color_pick: Option<&'static ColorOption> = None;
        let mut background_pick: Option<&'static ColorOption> = None;
        let mut width_pick: Option<&'static ContentWidthOption> = None;
        let mut reset_requested = false;
        let mut apply_requested = false;

        {
            let hooks = PanelHooks {
                on_font_family: &mut |option| family_pick = Some(option),
                on_font_size: &mut |option| size_pick = Some(option),
                on_font_color: &mut |option| color_pick = Some(option),
                on_background: &mut |option| background_pick = Some(option),
                on_content_width: &mut |option| width_pick = Some(option),
                on_reset: &mut || reset_requested = true,
                on_apply: &mut || apply_requested = true,
            };
            settings_panel::show(ctx, &mut self.panel, &self.draft, self.reduce_motion, hooks);
        }

        if let Some(option) = family_pick {
            self.draft.font_family = option;
        }
        if let Some(option) = size_pick {
            self.draft.font_size = option;
        }
        if let Some(option) = color_pick {
            self.draft.font_color = option;
        }
        if let Some(option) = background_pick {
            self.draft.background = option;
        }
        if let Some(option) = width_pick {
            self.draft.content_width = option;
        }
        if reset_requested {
            self.reset_settings();
        }
        if apply_requested {
            self.apply_settings();
        }
    }

    /// Copies the draft selections into the applied state.
    pub(crate) fn apply_settings(&mut self) {
        self.applied = self.draft;
    }

    /// Restores both draft and applied selections to the defaults.
    pub(crate) fn reset_settings(&mut self) {
        self.draft = DisplaySettings::default();
        self.applied = DisplaySettings::default();
    }

    /// Resolves a font slot to a registered egui family.
    ///
    /// The serif slot falls back to the proportional family when no system
    /// serif font could be loaded at startup.
    pub(crate) fn family_for(&self, slot: FontSlot) -> egui::FontFamily {
        match slot {
            FontSlot::Sans => egui::FontFamily::Proportional,
            FontSlot::Mono => egui::FontFamily::Monospace,
            FontSlot::Serif => {
                if self.serif_loaded {
                    egui::FontFamily::Name(SERIF_FAMILY.into())
                } else {
                    egui::FontFamily::Proportional
                }
            }
        }
    }
}

impl eframe::App for ReadPaneApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_frame(ctx);
    }
}
