use crate::infrastructure::error::InfrastructureError;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Buffered output file, truncated on creation.
///
/// The destination is opened in place: existing permissions are kept and a
/// symlinked path writes through to its target. A run that fails after
/// [`OutputFile::create`] leaves whatever was already flushed.
pub struct OutputFile {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl OutputFile {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, InfrastructureError> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| InfrastructureError::Write {
            path: path.clone(),
            source,
        })?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    /// Flush buffered lines and close the file.
    pub fn finish(self) -> Result<PathBuf, InfrastructureError> {
        let Self { path, writer } = self;

        writer
            .into_inner()
            .map_err(|e| InfrastructureError::Write {
                path: path.clone(),
                source: e.into_error(),
            })?;

        Ok(path)
    }
}

impl Write for OutputFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
