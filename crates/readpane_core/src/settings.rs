//! The five-field display selection state shared by the panel and the
//! article view.

use crate::options::{
    ColorOption, ContentWidthOption, FontFamilyOption, FontSizeOption, BACKGROUND_COLOR_OPTIONS,
    CONTENT_WIDTH_OPTIONS, FONT_COLOR_OPTIONS, FONT_FAMILY_OPTIONS, FONT_SIZE_OPTIONS,
};

/// One selection per settings field.
///
/// Fields are references into the fixed option tables, so every selection is
/// a member of its table by construction. The struct is `Copy`; the host
/// keeps two copies (draft and applied) and overwrites them whole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySettings {
    pub font_family: &'static FontFamilyOption,
    pub font_size: &'static FontSizeOption,
    pub font_color: &'static ColorOption,
    pub background: &'static ColorOption,
    pub content_width: &'static ContentWidthOption,
}

impl Default for DisplaySettings {
    /// The first entry of each option table.
    fn default() -> Self {
        Self {
            font_family: &FONT_FAMILY_OPTIONS[0],
            font_size: &FONT_SIZE_OPTIONS[0],
            font_color: &FONT_COLOR_OPTIONS[0],
            background: &BACKGROUND_COLOR_OPTIONS[0],
            content_width: &CONTENT_WIDTH_OPTIONS[0],
        }
    }
}
