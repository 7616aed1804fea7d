//! Article model and plain-text parsing.

use crate::error::AppError;
use std::path::Path;

const SAMPLE_TEXT: &str = "\
The Quiet Craft of Reading Comfort

by the ReadPane authors

Most of what makes long-form text pleasant to read was settled long before
screens existed. Printers learned that a line should carry sixty to seventy
characters, that a page wants more margin than a first instinct allows, and
that type chosen for headlines rarely survives a full chapter.

Screens reopened every one of those questions. A window can be any width, a
paragraph can be set in any face at any size, and the background is no
longer paper but whatever the reader asks for. The result is that comfort
became a setting instead of a default.

This sample page exists to exercise those settings. Open the panel at the
left edge, change the typeface, the size, the colors, or the column width,
and apply the result. Reset returns everything here to how it first loaded.

A serif face tends to reward longer paragraphs, where the reader's eye
settles into a rhythm. A sans face keeps short, dense passages crisp. The
monospace option is mostly a curiosity for prose, but it makes quoted
configuration and code read exactly as it would in a terminal.

Color is the most personal of the choices. Dark text on a warm paper tone
is the closest match to print, while the slate and charcoal backgrounds
trade brightness for calm in a dim room. No pairing is enforced; a reader
who wants ivory on white is free to squint.

Width is the least obvious setting and the most consequential. Narrow
columns slow a fast reader down and rest a tired one. Full width uses every
pixel the window offers and asks the eye to travel for it. Somewhere in
between is usually right, which is why it is the default.
";

/// A parsed article: title, optional byline, body paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub byline: Option<String>,
    pub paragraphs: Vec<String>,
}

/// Collapses text into blank-line-separated blocks, joining wrapped lines.
fn blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current = String::new();
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(trimmed);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

impl Article {
    /// Parses an article from plain text.
    ///
    /// The first block is the title (a leading Markdown `#` marker is
    /// tolerated), an optional following `by ...` block is the byline, and
    /// every remaining block is a body paragraph.
    ///
    /// # Errors
    /// Returns [`AppError::Article`] when the text contains no blocks.
    pub fn from_plain_text(text: &str) -> Result<Self, AppError> {
        let mut blocks = blocks(text).into_iter();
        let title = blocks
            .next()
            .ok_or_else(|| AppError::Article("article text is empty".to_string()))?;
        let title = title.trim_start_matches('#').trim().to_string();

        let mut byline = None;
        let mut paragraphs: Vec<String> = Vec::new();
        for (idx, block) in blocks.enumerate() {
            let lowered = block.to_ascii_lowercase();
            if idx == 0 && lowered.starts_with("by ") {
                byline = Some(block);
            } else {
                paragraphs.push(block);
            }
        }

        Ok(Self {
            title,
            byline,
            paragraphs,
        })
    }

    /// Reads and parses an article from a file.
    ///
    /// # Errors
    /// Propagates read failures as [`AppError::Io`] and parse failures as
    /// [`AppError::Article`].
    pub fn load_from_path(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_plain_text(&text)
    }

    /// The built-in sample article shipped with the app.
    pub fn sample() -> Self {
        Self::from_plain_text(SAMPLE_TEXT).expect("built-in sample article parses")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_title_byline_and_paragraphs() {
        let article = Article::from_plain_text(
            "# A Title\n\nby Someone\n\nFirst paragraph\nwrapped line.\n\nSecond paragraph.\n",
        )
        .expect("parse");

        assert_eq!(article.title, "A Title");
        assert_eq!(article.byline.as_deref(), Some("by Someone"));
        assert_eq!(
            article.paragraphs,
            vec![
                "First paragraph wrapped line.".to_string(),
                "Second paragraph.".to_string()
            ]
        );
    }

    #[test]
    fn byline_is_only_recognized_directly_after_the_title() {
        let article =
            Article::from_plain_text("Title\n\nOpening paragraph.\n\nby a stray credit line\n")
                .expect("parse");

        assert_eq!(article.byline, None);
        assert_eq!(article.paragraphs.len(), 2);
    }

    #[test]
    fn title_only_articles_parse_with_empty_body() {
        let article = Article::from_plain_text("Just a headline").expect("parse");
        assert_eq!(article.title, "Just a headline");
        assert_eq!(article.byline, None);
        assert!(article.paragraphs.is_empty());
    }

    #[test]
    fn blank_input_is_rejected() {
        assert!(matches!(
            Article::from_plain_text("  \n\n \n"),
            Err(AppError::Article(_))
        ));
    }

    #[test]
    fn sample_article_has_title_and_body() {
        let article = Article::sample();
        assert!(!article.title.is_empty());
        assert!(article.byline.is_some());
        assert!(article.paragraphs.len() >= 3);
    }

    #[test]
    fn load_from_path_round_trips_a_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "Disk Title\n\nBody paragraph.\n").expect("write");

        let article = Article::load_from_path(file.path()).expect("load");
        assert_eq!(article.title, "Disk Title");
        assert_eq!(article.paragraphs, vec!["Body paragraph.".to_string()]);
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let err = Article::load_from_path(Path::new("/nonexistent/readpane-article.txt"))
            .expect_err("missing file");
        assert!(matches!(err, AppError::Io(_)));
    }
}
