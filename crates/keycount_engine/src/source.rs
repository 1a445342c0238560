use std::fs::File;
use std::io::{self, BufReader, Read, StdinLock};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("unable to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("read failed: {0}")]
    Read(#[from] io::Error),
}

/// Pull-style byte provider: one byte per call, `None` once exhausted.
pub trait ByteSource {
    fn next_byte(&mut self) -> Result<Option<u8>, ScanError>;
}

/// Adapts any `Read` into a `ByteSource`.
#[derive(Debug)]
pub struct ReaderSource<R> {
    inner: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    fn next_byte(&mut self) -> Result<Option<u8>, ScanError> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(ScanError::Read(err)),
            }
        }
    }
}

/// The interactive variant: locked stdin.
pub type ConsoleSource = ReaderSource<StdinLock<'static>>;

/// The file variant: a named file opened read-only.
pub type FileSource = ReaderSource<BufReader<File>>;

pub fn console() -> ConsoleSource {
    ReaderSource::new(io::stdin().lock())
}

/// Opens `path` read-only for scanning. The handle is released when the
/// returned source goes out of scope.
pub fn open_file(path: &Path) -> Result<FileSource, ScanError> {
    let file = File::open(path).map_err(|source| ScanError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ReaderSource::new(BufReader::new(file)))
}
