//! Plain-text export of a match list.

use crate::error::Result;
use crate::text::collapse_whitespace;
use crate::types::Verse;
use anyhow::Context;
use std::path::Path;

/// File name used when the caller does not choose one.
pub const DEFAULT_EXPORT_FILE: &str = "search-results.txt";

/// Renders one line per verse: `Book chapter:verse text`.
///
/// Line breaks inside verse text are folded into spaces so each verse stays on
/// its own line.
pub fn render_export<'a>(verses: impl IntoIterator<Item = &'a Verse>) -> String {
    verses
        .into_iter()
        .map(|verse| {
            let text = collapse_whitespace(&verse.text);
            if text.is_empty() {
                verse.reference()
            } else {
                format!("{} {}", verse.reference(), text)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes an export to disk, UTF-8, with a trailing newline.
pub async fn write_export(path: &Path, contents: &str) -> Result<()> {
    tokio::fs::write(path, format!("{contents}\n"))
        .await
        .with_context(|| format!("Failed to write export to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_render_lines() {
        let verses = [
            Verse::new("Jubilees", 4, 1, "In the\nbeginning"),
            Verse::new("Enoch", 1, 2, ""),
        ];
        check!(render_export(&verses) == "Jubilees 4:1 In the beginning\nEnoch 1:2");
    }

    #[test]
    fn test_render_empty() {
        let verses: [Verse; 0] = [];
        check!(render_export(&verses).is_empty());
    }

    #[tokio::test]
    async fn test_write_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_FILE);
        write_export(&path, "Enoch 1:1 text").await.unwrap();
        check!(std::fs::read_to_string(&path).unwrap() == "Enoch 1:1 text\n");
    }
}
