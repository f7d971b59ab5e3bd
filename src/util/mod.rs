//! Utility functions and helpers

use directories::ProjectDirs;
use std::path::PathBuf;

/// File name of the catalog inside the config directory.
pub const CATALOG_FILE_NAME: &str = "catalog.toml";

pub fn get_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("dev", "subpanel", "subpanel").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Default catalog location: `<config dir>/catalog.toml`.
pub fn default_catalog_path() -> Option<PathBuf> {
    get_config_dir().map(|d| d.join(CATALOG_FILE_NAME))
}

pub mod text {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    /// Marker appended to text cut short by [`truncate_to_width`].
    pub const ELLIPSIS: char = '…';

    pub fn visible_width(s: &str) -> usize {
        s.width()
    }

    /// Fits `s` on a single line of at most `max_width` columns.
    ///
    /// Line breaks become spaces. Text that does not fit is cut and ends
    /// with [`ELLIPSIS`]; the result never exceeds `max_width` columns.
    pub fn truncate_to_width(s: &str, max_width: usize) -> String {
        let single_line: String = s
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();

        if single_line.width() <= max_width {
            return single_line;
        }
        if max_width == 0 {
            return String::new();
        }

        let budget = max_width - 1;
        let mut used = 0;
        let mut out = String::new();
        for c in single_line.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > budget {
                break;
            }
            used += w;
            out.push(c);
        }
        out.push(ELLIPSIS);
        out
    }
}
