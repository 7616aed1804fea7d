//! Fixed option tables backing the display settings selectors.
//!
//! Each table is an ordered `'static` slice; selections are references into
//! these tables, so a selection can never name a value outside its table.
//! The first entry of every table is the default.

/// Font family slot resolved to a concrete font by the GUI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSlot {
    Sans,
    Serif,
    Mono,
}

/// Font family option metadata for the family selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontFamilyOption {
    pub label: &'static str,
    pub value: &'static str,
    pub slot: FontSlot,
}

/// Font family options, default first.
pub const FONT_FAMILY_OPTIONS: &[FontFamilyOption] = &[
    FontFamilyOption {
        label: "Sans",
        value: "sans",
        slot: FontSlot::Sans,
    },
    FontFamilyOption {
        label: "Serif",
        value: "serif",
        slot: FontSlot::Serif,
    },
    FontFamilyOption {
        label: "Monospace",
        value: "mono",
        slot: FontSlot::Mono,
    },
];

/// Font size option metadata for the size radio row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizeOption {
    pub label: &'static str,
    pub value: &'static str,
    pub points: f32,
}

/// Font size options, default first.
pub const FONT_SIZE_OPTIONS: &[FontSizeOption] = &[
    FontSizeOption {
        label: "18",
        value: "18",
        points: 18.0,
    },
    FontSizeOption {
        label: "22",
        value: "22",
        points: 22.0,
    },
    FontSizeOption {
        label: "28",
        value: "28",
        points: 28.0,
    },
];

/// Named color option metadata shared by the text and background selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOption {
    pub label: &'static str,
    pub value: &'static str,
    pub rgb: [u8; 3],
}

/// Text color options, default first.
pub const FONT_COLOR_OPTIONS: &[ColorOption] = &[
    ColorOption {
        label: "Ink",
        value: "ink",
        rgb: [0x1a, 0x1a, 0x1a],
    },
    ColorOption {
        label: "Slate",
        value: "slate",
        rgb: [0x44, 0x4c, 0x56],
    },
    ColorOption {
        label: "Sepia",
        value: "sepia",
        rgb: [0x5b, 0x46, 0x36],
    },
    ColorOption {
        label: "Moss",
        value: "moss",
        rgb: [0x41, 0x5e, 0x43],
    },
    ColorOption {
        label: "Ivory",
        value: "ivory",
        rgb: [0xf2, 0xef, 0xe6],
    },
];

/// Page background options, default first.
pub const BACKGROUND_COLOR_OPTIONS: &[ColorOption] = &[
    ColorOption {
        label: "Paper",
        value: "paper",
        rgb: [0xfa, 0xf7, 0xf0],
    },
    ColorOption {
        label: "White",
        value: "white",
        rgb: [0xff, 0xff, 0xff],
    },
    ColorOption {
        label: "Sepia",
        value: "sepia",
        rgb: [0xf4, 0xe8, 0xd2],
    },
    ColorOption {
        label: "Slate",
        value: "slate",
        rgb: [0x2e, 0x34, 0x3b],
    },
    ColorOption {
        label: "Charcoal",
        value: "charcoal",
        rgb: [0x1b, 0x1e, 0x23],
    },
];

/// Content column width option metadata.
///
/// `points` is the maximum column width; `f32::INFINITY` means "fill the
/// window".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentWidthOption {
    pub label: &'static str,
    pub value: &'static str,
    pub points: f32,
}

/// Content width options, default first.
pub const CONTENT_WIDTH_OPTIONS: &[ContentWidthOption] = &[
    ContentWidthOption {
        label: "Medium",
        value: "medium",
        points: 680.0,
    },
    ContentWidthOption {
        label: "Narrow",
        value: "narrow",
        points: 540.0,
    },
    ContentWidthOption {
        label: "Wide",
        value: "wide",
        points: 860.0,
    },
    ContentWidthOption {
        label: "Full",
        value: "full",
        points: f32::INFINITY,
    },
];

/// Looks up a font family option by its stable value key.
///
/// # Returns
/// The matching table entry, or `None` for unknown values.
pub fn font_family_by_value(value: &str) -> Option<&'static FontFamilyOption> {
    FONT_FAMILY_OPTIONS
        .iter()
        .find(|option| option.value == value)
}

/// Looks up a font size option by its stable value key.
pub fn font_size_by_value(value: &str) -> Option<&'static FontSizeOption> {
    FONT_SIZE_OPTIONS.iter().find(|option| option.value == value)
}

/// Looks up a text color option by its stable value key.
pub fn font_color_by_value(value: &str) -> Option<&'static ColorOption> {
    FONT_COLOR_OPTIONS
        .iter()
        .find(|option| option.value == value)
}

/// Looks up a background option by its stable value key.
pub fn background_by_value(value: &str) -> Option<&'static ColorOption> {
    BACKGROUND_COLOR_OPTIONS
        .iter()
        .find(|option| option.value == value)
}

/// Looks up a content width option by its stable value key.
pub fn content_width_by_value(value: &str) -> Option<&'static ContentWidthOption> {
    CONTENT_WIDTH_OPTIONS
        .iter()
        .find(|option| option.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_unique_values(values: &[&str]) {
        for (idx, value) in values.iter().enumerate() {
            assert!(
                !values[idx + 1..].contains(value),
                "duplicate option value {:?}",
                value
            );
        }
    }

    #[test]
    fn option_values_are_unique_within_each_table() {
        assert_unique_values(
            &FONT_FAMILY_OPTIONS
                .iter()
                .map(|option| option.value)
                .collect::<Vec<_>>(),
        );
        assert_unique_values(
            &FONT_SIZE_OPTIONS
                .iter()
                .map(|option| option.value)
                .collect::<Vec<_>>(),
        );
        assert_unique_values(
            &FONT_COLOR_OPTIONS
                .iter()
                .map(|option| option.value)
                .collect::<Vec<_>>(),
        );
        assert_unique_values(
            &BACKGROUND_COLOR_OPTIONS
                .iter()
                .map(|option| option.value)
                .collect::<Vec<_>>(),
        );
        assert_unique_values(
            &CONTENT_WIDTH_OPTIONS
                .iter()
                .map(|option| option.value)
                .collect::<Vec<_>>(),
        );
    }

    #[test]
    fn by_value_lookup_round_trips_every_entry() {
        for option in FONT_FAMILY_OPTIONS {
            assert_eq!(font_family_by_value(option.value), Some(option));
        }
        for option in FONT_SIZE_OPTIONS {
            assert_eq!(font_size_by_value(option.value), Some(option));
        }
        for option in FONT_COLOR_OPTIONS {
            assert_eq!(font_color_by_value(option.value), Some(option));
        }
        for option in BACKGROUND_COLOR_OPTIONS {
            assert_eq!(background_by_value(option.value), Some(option));
        }
        for option in CONTENT_WIDTH_OPTIONS {
            assert_eq!(content_width_by_value(option.value), Some(option));
        }
    }

    #[test]
    fn by_value_lookup_rejects_unknown_values() {
        assert_eq!(font_family_by_value("comic-sans"), None);
        assert_eq!(font_size_by_value("11"), None);
        assert_eq!(font_color_by_value(""), None);
        assert_eq!(background_by_value("plaid"), None);
        assert_eq!(content_width_by_value("hairline"), None);
    }

    #[test]
    fn every_table_has_at_least_two_choices() {
        assert!(FONT_FAMILY_OPTIONS.len() >= 2);
        assert!(FONT_SIZE_OPTIONS.len() >= 2);
        assert!(FONT_COLOR_OPTIONS.len() >= 2);
        assert!(BACKGROUND_COLOR_OPTIONS.len() >= 2);
        assert!(CONTENT_WIDTH_OPTIONS.len() >= 2);
    }
}
