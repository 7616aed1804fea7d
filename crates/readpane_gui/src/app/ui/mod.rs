//! UI surfaces extracted from the app update loop.

/// Article rendering with the applied display settings.
pub(super) mod article_view;
/// Slide-out display settings panel.
pub(super) mod settings_panel;
