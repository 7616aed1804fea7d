//! Open/close behavior of the settings panel under real frame input.

use super::*;
use crate::app::ui::settings_panel::PANEL_WIDTH;

/// Position well to the right of the panel and its toggle affordance.
fn outside_pos() -> egui::Pos2 {
    egui::pos2(1000.0, 450.0)
}

#[test]
fn panel_starts_closed() {
    let app = make_app();
    assert!(!app.panel.is_open());
}

#[test]
fn outside_press_closes_the_open_panel() {
    let mut app = make_app();
    app.panel.toggle();
    let ctx = egui::Context::default();
    run_frame_with(&mut app, &ctx, test_input(Vec::new()));

    run_frame_with(&mut app, &ctx, test_input(press_events(outside_pos())));
    assert!(!app.panel.is_open());
}

#[test]
fn press_inside_the_panel_keeps_it_open() {
    let mut app = make_app();
    app.panel.toggle();
    let ctx = egui::Context::default();
    run_frame_with(&mut app, &ctx, test_input(Vec::new()));

    let inside = egui::pos2(PANEL_WIDTH * 0.5, 700.0);
    run_frame_with(&mut app, &ctx, test_input(press_events(inside)));
    assert!(app.panel.is_open());
}

#[test]
fn press_on_the_toggle_affordance_is_not_an_outside_press() {
    let mut app = make_app();
    app.panel.toggle();
    let ctx = egui::Context::default();
    run_frame_with(&mut app, &ctx, test_input(Vec::new()));

    // Center of the affordance: just past the open panel's edge, mid-height.
    let on_toggle = egui::pos2(PANEL_WIDTH + 8.0 + 18.0, 450.0);
    run_frame_with(&mut app, &ctx, test_input(press_events(on_toggle)));
    assert!(app.panel.is_open());
}

#[test]
fn escape_closes_the_open_panel() {
    let mut app = make_app();
    app.panel.toggle();
    let ctx = egui::Context::default();
    run_frame_with(&mut app, &ctx, test_input(Vec::new()));

    run_frame_with(&mut app, &ctx, test_input(key_events(egui::Key::Escape)));
    assert!(!app.panel.is_open());
}

#[test]
fn other_keys_leave_the_open_panel_alone() {
    let mut app = make_app();
    app.panel.toggle();
    let ctx = egui::Context::default();
    run_frame_with(&mut app, &ctx, test_input(Vec::new()));

    run_frame_with(&mut app, &ctx, test_input(key_events(egui::Key::Tab)));
    assert!(app.panel.is_open());
}

#[test]
fn a_closed_panel_ignores_outside_presses_and_escape() {
    let mut app = make_app();
    let ctx = egui::Context::default();
    run_frame_with(&mut app, &ctx, test_input(Vec::new()));

    run_frame_with(&mut app, &ctx, test_input(press_events(outside_pos())));
    assert!(!app.panel.is_open());

    run_frame_with(&mut app, &ctx, test_input(key_events(egui::Key::Escape)));
    assert!(!app.panel.is_open());
}

#[test]
fn dismissal_scenario_walkthrough() {
    let mut app = make_app();
    let ctx = egui::Context::default();

    app.panel.toggle();
    assert!(app.panel.is_open());
    run_frame_with(&mut app, &ctx, test_input(Vec::new()));

    run_frame_with(&mut app, &ctx, test_input(press_events(outside_pos())));
    assert!(!app.panel.is_open());

    app.panel.toggle();
    assert!(app.panel.is_open());
    run_frame_with(&mut app, &ctx, test_input(Vec::new()));

    run_frame_with(&mut app, &ctx, test_input(key_events(egui::Key::Tab)));
    assert!(app.panel.is_open());

    run_frame_with(&mut app, &ctx, test_input(key_events(egui::Key::Escape)));
    assert!(!app.panel.is_open());
}

#[test]
fn dismissal_does_not_touch_selections() {
    let mut app = make_app();
    app.draft.font_size = &readpane_core::options::FONT_SIZE_OPTIONS[1];
    app.panel.toggle();
    let ctx = egui::Context::default();
    run_frame_with(&mut app, &ctx, test_input(Vec::new()));

    run_frame_with(&mut app, &ctx, test_input(press_events(outside_pos())));
    assert!(!app.panel.is_open());
    assert_eq!(
        app.draft.font_size,
        &readpane_core::options::FONT_SIZE_OPTIONS[1]
    );
    assert_eq!(app.applied, DisplaySettings::default());
}
