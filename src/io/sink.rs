use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{FpError, Result};
use crate::fp::utils::PatternStore;

fn write_lines<W: Write>(patterns: &PatternStore, mut writer: W) -> io::Result<()> {
    for (itemset, support) in patterns.iter() {
        writeln!(writer, "{} : {}", itemset.join(" "), support)?;
    }
    writer.flush()
}

/// Writes one `items : support` line per itemset, in store order.
pub fn write_patterns<W: Write>(patterns: &PatternStore, writer: W) -> Result<()> {
    write_lines(patterns, writer).map_err(|source| FpError::SinkUnavailable { path: None, source })
}

/// Creates or truncates `path` and writes the patterns to it.
pub fn write_patterns_to_file(patterns: &PatternStore, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let sink_error = |source| FpError::SinkUnavailable {
        path: Some(path.to_path_buf()),
        source,
    };

    let file = File::create(path).map_err(sink_error)?;
    write_lines(patterns, BufWriter::new(file)).map_err(sink_error)
}
