//! Slide-out display settings panel: visibility state, dismissal
//! classification, and the settings controls.

use super::super::*;
use eframe::egui::{self, RichText};
use readpane_core::options::{
    self, ColorOption, BACKGROUND_COLOR_OPTIONS, CONTENT_WIDTH_OPTIONS, FONT_COLOR_OPTIONS,
    FONT_FAMILY_OPTIONS, FONT_SIZE_OPTIONS,
};
use readpane_core::DisplaySettings;

/// Panel width when fully open, in logical points.
pub(crate) const PANEL_WIDTH: f32 = 320.0;
const PANEL_PADDING: f32 = 16.0;
const SLIDE_SECONDS: f32 = 0.2;
const TOGGLE_SIZE: f32 = 36.0;
const TOGGLE_MARGIN: f32 = 8.0;

/// Host-supplied handlers the panel forwards selection and button events to.
///
/// Plain function values; the panel never inspects or transforms what it
/// forwards.
pub(crate) struct PanelHooks<'a> {
    pub(crate) on_font_family: &'a mut dyn FnMut(&'static options::FontFamilyOption),
    pub(crate) on_font_size: &'a mut dyn FnMut(&'static options::FontSizeOption),
    pub(crate) on_font_color: &'a mut dyn FnMut(&'static options::ColorOption),
    pub(crate) on_background: &'a mut dyn FnMut(&'static options::ColorOption),
    pub(crate) on_content_width: &'a mut dyn FnMut(&'static options::ContentWidthOption),
    pub(crate) on_reset: &'a mut dyn FnMut(),
    pub(crate) on_apply: &'a mut dyn FnMut(),
}

/// Open/closed visibility state for the slide-out panel.
///
/// Closed on construction; transitions only through [`PanelState::toggle`]
/// and the dismissal paths in [`show`].
#[derive(Debug, Default)]
pub(crate) struct PanelState {
    open: bool,
}

impl PanelState {
    pub(crate) fn new() -> Self {
        Self { open: false }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    /// Flips between open and closed.
    pub(crate) fn toggle(&mut self) {
        self.open = !self.open;
    }

    fn dismiss(&mut self) {
        self.open = false;
    }
}

/// A primary pointer press observed this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PointerPress {
    /// Press position, when the backend reported one.
    pub(crate) pos: Option<egui::Pos2>,
    /// Whether the press landed on a floating layer (dropdown popup,
    /// tooltip); those belong to the panel's interaction surface.
    pub(crate) on_overlay: bool,
}

/// Returns whether a press should dismiss the open panel.
///
/// Presses inside the panel rect, on the toggle affordance (which has its
/// own toggle contract), on a floating overlay, or with an unknown position
/// never dismiss. Rects must be the ones produced this frame.
pub(crate) fn press_dismisses(
    open: bool,
    press: Option<PointerPress>,
    panel_rect: egui::Rect,
    toggle_rect: egui::Rect,
) -> bool {
    if !open {
        return false;
    }
    let Some(press) = press else {
        return false;
    };
    if press.on_overlay {
        return false;
    }
    let Some(pos) = press.pos else {
        return false;
    };
    !panel_rect.contains(pos) && !toggle_rect.contains(pos)
}

/// Returns whether this frame's key input should dismiss the open panel.
pub(crate) fn escape_dismisses(open: bool, escape_pressed: bool) -> bool {
    open && escape_pressed
}

/// Forwards a selector change to its hook when the chosen value differs
/// from the current one.
///
/// Unknown values (impossible through the rendered controls) are dropped
/// rather than forwarded.
fn forward_pick<T>(
    chosen: &str,
    current: &str,
    lookup: impl Fn(&str) -> Option<&'static T>,
    hook: &mut dyn FnMut(&'static T),
) {
    if chosen == current {
        return;
    }
    if let Some(option) = lookup(chosen) {
        hook(option);
    }
}

/// Renders the panel, its toggle affordance, and processes dismissal input.
///
/// `current` is the host-owned draft selection the controls display;
/// changes flow back through `hooks` only.
pub(crate) fn show(
    ctx: &egui::Context,
    state: &mut PanelState,
    current: &DisplaySettings,
    reduce_motion: bool,
    mut hooks: PanelHooks<'_>,
) {
    let openness = if reduce_motion {
        if state.open {
            1.0
        } else {
            0.0
        }
    } else {
        ctx.animate_bool_with_time(
            egui::Id::new("settings_panel_slide"),
            state.open,
            SLIDE_SECONDS,
        )
    };

    let screen = ctx.screen_rect();
    let panel_rect = if openness > 0.0 {
        let panel_x = (openness - 1.0) * PANEL_WIDTH;
        let response = egui::Area::new(egui::Id::new("settings_panel"))
            .order(egui::Order::Middle)
            .fixed_pos(egui::pos2(panel_x, screen.top()))
            .constrain(false)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(COLOR_PANEL_BG)
                    .stroke(egui::Stroke::new(1.0, COLOR_BORDER))
                    .inner_margin(egui::Margin::same(PANEL_PADDING as i8))
                    .show(ui, |ui| {
                        ui.set_width(PANEL_WIDTH - 2.0 * PANEL_PADDING);
                        ui.set_min_height(screen.height() - 2.0 * PANEL_PADDING);
                        render_controls(ui, current, &mut hooks);
                    });
            })
            .response;
        response.rect
    } else {
        egui::Rect::NOTHING
    };

    let toggle_rect = show_toggle(ctx, state, openness, screen);

    if press_dismisses(state.is_open(), frame_press(ctx), panel_rect, toggle_rect) {
        state.dismiss();
    }
    let escape_pressed = ctx.input(|input| input.key_pressed(egui::Key::Escape));
    if escape_dismisses(state.is_open(), escape_pressed) {
        state.dismiss();
    }
}

/// Snapshot of this frame's primary press, if any.
fn frame_press(ctx: &egui::Context) -> Option<PointerPress> {
    let pressed = ctx.input(|input| input.pointer.primary_pressed());
    if !pressed {
        return None;
    }
    let pos = ctx.input(|input| input.pointer.press_origin().or(input.pointer.interact_pos()));
    let on_overlay = pos
        .and_then(|pos| ctx.layer_id_at(pos))
        .is_some_and(|layer| {
            matches!(layer.order, egui::Order::Foreground | egui::Order::Tooltip)
        });
    Some(PointerPress { pos, on_overlay })
}

/// Renders the arrow affordance at the panel's leading edge.
///
/// # Returns
/// The affordance rect for outside-press exclusion.
fn show_toggle(
    ctx: &egui::Context,
    state: &mut PanelState,
    openness: f32,
    screen: egui::Rect,
) -> egui::Rect {
    let pos = egui::pos2(
        openness * PANEL_WIDTH + TOGGLE_MARGIN,
        screen.center().y - TOGGLE_SIZE * 0.5,
    );
    let glyph = if state.is_open() { "\u{2039}" } else { "\u{203a}" };
    let area = egui::Area::new(egui::Id::new("settings_panel_toggle"))
        .order(egui::Order::Middle)
        .fixed_pos(pos)
        .show(ctx, |ui| {
            ui.add(
                egui::Button::new(RichText::new(glyph).size(20.0).color(COLOR_TEXT_PRIMARY))
                    .min_size(egui::vec2(TOGGLE_SIZE, TOGGLE_SIZE))
                    .corner_radius(egui::CornerRadius::same((TOGGLE_SIZE / 2.0) as u8)),
            )
        });
    if area.inner.clicked() {
        state.toggle();
    }
    area.response.rect
}

fn render_controls(ui: &mut egui::Ui, current: &DisplaySettings, hooks: &mut PanelHooks<'_>) {
    ui.heading("Display settings");
    ui.separator();

    ui.label(RichText::new("Font family").small().color(COLOR_TEXT_MUTED));
    let mut family_value = current.font_family.value;
    egui::ComboBox::from_id_salt("panel_font_family")
        .width(ui.available_width())
        .selected_text(current.font_family.label)
        .show_ui(ui, |ui| {
            for option in FONT_FAMILY_OPTIONS {
                ui.selectable_value(&mut family_value, option.value, option.label);
            }
        });
    forward_pick(
        family_value,
        current.font_family.value,
        options::font_family_by_value,
        hooks.on_font_family,
    );

    ui.add_space(6.0);
    ui.label(RichText::new("Font size").small().color(COLOR_TEXT_MUTED));
    ui.horizontal(|ui| {
        for option in FONT_SIZE_OPTIONS {
            let selected = option.value == current.font_size.value;
            if ui.radio(selected, option.label).clicked() {
                forward_pick(
                    option.value,
                    current.font_size.value,
                    options::font_size_by_value,
                    hooks.on_font_size,
                );
            }
        }
    });

    ui.add_space(6.0);
    ui.label(RichText::new("Font color").small().color(COLOR_TEXT_MUTED));
    let mut color_value = current.font_color.value;
    egui::ComboBox::from_id_salt("panel_font_color")
        .width(ui.available_width())
        .selected_text(current.font_color.label)
        .show_ui(ui, |ui| {
            for option in FONT_COLOR_OPTIONS {
                color_option_row(ui, &mut color_value, option);
            }
        });
    forward_pick(
        color_value,
        current.font_color.value,
        options::font_color_by_value,
        hooks.on_font_color,
    );

    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);

    ui.label(
        RichText::new("Background color")
            .small()
            .color(COLOR_TEXT_MUTED),
    );
    let mut background_value = current.background.value;
    egui::ComboBox::from_id_salt("panel_background")
        .width(ui.available_width())
        .selected_text(current.background.label)
        .show_ui(ui, |ui| {
            for option in BACKGROUND_COLOR_OPTIONS {
                color_option_row(ui, &mut background_value, option);
            }
        });
    forward_pick(
        background_value,
        current.background.value,
        options::background_by_value,
        hooks.on_background,
    );

    ui.add_space(6.0);
    ui.label(
        RichText::new("Content width")
            .small()
            .color(COLOR_TEXT_MUTED),
    );
    let mut width_value = current.content_width.value;
    egui::ComboBox::from_id_salt("panel_content_width")
        .width(ui.available_width())
        .selected_text(current.content_width.label)
        .show_ui(ui, |ui| {
            for option in CONTENT_WIDTH_OPTIONS {
                ui.selectable_value(&mut width_value, option.value, option.label);
            }
        });
    forward_pick(
        width_value,
        current.content_width.value,
        options::content_width_by_value,
        hooks.on_content_width,
    );

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.button("Reset").clicked() {
            (hooks.on_reset)();
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Apply").clicked() {
                (hooks.on_apply)();
            }
        });
    });
}

/// One dropdown row with a color swatch next to the label.
fn color_option_row(
    ui: &mut egui::Ui,
    selected_value: &mut &'static str,
    option: &'static ColorOption,
) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
        ui.painter()
            .rect_filled(rect, egui::CornerRadius::same(2), color32(option.rgb));
        ui.selectable_value(selected_value, option.value, option.label);
    });
}
