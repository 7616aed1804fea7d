//! Frame-driven behavior tests for the panel and host settings flows.

use super::*;

fn make_app() -> ReadPaneApp {
    ReadPaneApp {
        article: Article::sample(),
        draft: DisplaySettings::default(),
        applied: DisplaySettings::default(),
        panel: PanelState::new(),
        reduce_motion: true,
        style_applied: true,
        serif_loaded: false,
    }
}

fn test_config() -> Config {
    Config {
        article_path: None,
        window_width: 1200.0,
        window_height: 900.0,
        reduce_motion: true,
    }
}

fn test_input(events: Vec<egui::Event>) -> egui::RawInput {
    egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(
            egui::pos2(0.0, 0.0),
            egui::vec2(1200.0, 900.0),
        )),
        events,
        ..Default::default()
    }
}

fn run_frame_with(app: &mut ReadPaneApp, ctx: &egui::Context, input: egui::RawInput) {
    let _ = ctx.run(input, |ctx| app.run_frame(ctx));
}

fn press_events(pos: egui::Pos2) -> Vec<egui::Event> {
    vec![
        egui::Event::PointerMoved(pos),
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: true,
            modifiers: egui::Modifiers::default(),
        },
    ]
}

fn key_events(key: egui::Key) -> Vec<egui::Event> {
    vec![egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers::default(),
    }]
}

mod panel_behaviors;
