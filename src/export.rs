//! CSV export of batch results.
//!
//! One line per result row, submission order preserved. Not-found and
//! error outcomes leave the artist fields empty so the table always has
//! one row per input query.

use std::fmt::Write as _;
use std::path::Path;

use crate::batch::ResultRow;
use crate::error::Result;

/// Column order of the exported dataset.
pub const CSV_HEADER: &str = "search_term,artist_name,artist_id,followers_count,url,image_url";

/// Render rows as a CSV document, header included.
pub fn to_csv(rows: &[ResultRow]) -> String {
    let mut out = String::new();
    out.push_str(CSV_HEADER);
    out.push('\n');

    for row in rows {
        let artist = row.outcome.artist();
        write_field(&mut out, Some(row.search_term.as_str()));
        out.push(',');
        write_field(&mut out, artist.map(|a| a.name.as_str()));
        out.push(',');
        if let Some(id) = artist.map(|a| a.id) {
            let _ = write!(out, "{id}");
        }
        out.push(',');
        if let Some(count) = artist.and_then(|a| a.followers_count) {
            let _ = write!(out, "{count}");
        }
        out.push(',');
        write_field(&mut out, artist.and_then(|a| a.url.as_deref()));
        out.push(',');
        write_field(&mut out, artist.and_then(|a| a.image_url.as_deref()));
        out.push('\n');
    }

    out
}

/// Write the CSV to `path`, creating parent directories as needed.
pub fn write_csv(path: &Path, rows: &[ResultRow]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, to_csv(rows))?;
    Ok(())
}

/// Append one field, quoting when it contains a comma, quote, or newline.
/// `None` serializes as the empty field.
fn write_field(out: &mut String, field: Option<&str>) {
    let Some(field) = field else {
        return;
    };
    if field.contains([',', '"', '\n', '\r']) {
        out.push('"');
        for c in field.chars() {
            if c == '"' {
                out.push('"');
            }
            out.push(c);
        }
        out.push('"');
    } else {
        out.push_str(field);
    }
}
