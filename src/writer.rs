// src/writer.rs

use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::{
    error::WriteError,
    schema::{Column, Record},
};

/// Write the summary line, a blank line, the header and every record to `out`.
///
/// The two leading lines are plain text ending in `\n`; the summary is not
/// quoted. Header and data rows use minimal RFC 4180 quoting with CRLF
/// terminators. Returns the number of detail rows written.
pub fn write_records<W: Write>(
    mut out: W,
    summary_text: &str,
    records: &[Record],
) -> Result<usize, WriteError> {
    write!(out, "Summary: {}\n\n", summary_text)?;

    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(out);

    wtr.write_record(Column::header())?;
    for record in records {
        wtr.write_record(record.values())?;
    }
    wtr.flush()?;

    Ok(records.len())
}

/// Write the full CSV to `path`, replacing any existing file.
///
/// Output goes to a hidden sibling first and is renamed over `path` once
/// complete, so a failed run never leaves a half-written CSV behind.
#[tracing::instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
pub fn write_csv<P: AsRef<Path>>(
    path: P,
    summary_text: &str,
    records: &[Record],
) -> Result<usize, WriteError> {
    let path = path.as_ref();
    let tmp_path = temp_sibling(path);
    debug!(tmp = %tmp_path.display(), "writing temp file");

    let rows = match write_file(&tmp_path, summary_text, records) {
        Ok(rows) => rows,
        Err(e) => {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }
    };

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    info!(rows, "csv written");
    Ok(rows)
}

fn write_file(path: &Path, summary_text: &str, records: &[Record]) -> Result<usize, WriteError> {
    let mut buf = BufWriter::new(File::create(path)?);
    let rows = write_records(&mut buf, summary_text, records)?;
    buf.flush()?;
    Ok(rows)
}

// ".<name>.tmp" next to the target, so the final rename stays on one filesystem.
fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output.csv".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}
