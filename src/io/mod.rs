//! Writing encoded canvases to files and other sinks.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::canvas::Canvas;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write image to {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write image: {0}")]
    Io(#[from] io::Error),
}

/// Write the PPM text of `canvas` to `sink`.
pub fn write_ppm<W: Write>(canvas: &Canvas, mut sink: W) -> Result<(), ExportError> {
    let text = canvas.encode();
    sink.write_all(text.as_bytes())?;
    sink.flush()?;
    debug!(
        width = canvas.width(),
        height = canvas.height(),
        bytes = text.len(),
        "ppm written"
    );
    Ok(())
}

/// Create (or truncate) the file at `path` and write the PPM text into it.
pub fn save_ppm<P: AsRef<Path>>(canvas: &Canvas, path: P) -> Result<(), ExportError> {
    let path = path.as_ref();
    let with_path = |source| ExportError::File {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(with_path)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(canvas.encode().as_bytes())
        .and_then(|_| writer.flush())
        .map_err(with_path)?;

    debug!(path = %path.display(), "ppm saved");
    Ok(())
}
