//! Raw access to recorded trace data.
//!
//! A [`File`] owns the bytes of one trace, either memory-mapped from disk or held in a
//! `Vec<u8>`. Decoding those bytes into entries is done by [`crate::trace`] on top of the
//! [`parser::Parser`] cursor.
//!
//! # Examples
//!
//! ```rust
//! use pathflip::file::File;
//!
//! let file = File::from_mem(vec![0x50, 0x46, 0x54, 0x52, 0x01])?;
//! assert_eq!(file.len(), 5);
//! assert_eq!(file.data_slice(0, 4)?, b"PFTR");
//! # Ok::<(), pathflip::Error>(())
//! ```

pub mod io;
pub mod parser;

use std::{fs, path::Path};

use memmap2::Mmap;

use crate::{
    Error::{Empty, Error, FileError},
    Result,
};

/// Where the bytes of a [`File`] live.
enum Source {
    /// Read-only mapping of a trace on disk
    Mapped(Mmap),
    /// A trace handed over in memory
    Owned(Vec<u8>),
}

impl Source {
    fn bytes(&self) -> &[u8] {
        match self {
            Source::Mapped(mmap) => mmap.as_ref(),
            Source::Owned(data) => data.as_slice(),
        }
    }
}

/// The bytes of one recorded trace. Never empty.
pub struct File {
    source: Source,
}

impl File {
    /// Memory-map a trace from disk.
    ///
    /// Traces of long executions are scanned once, front to back, so the mapping lets the
    /// operating system page them in on demand.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be opened,
    /// [`crate::Error::Empty`] if it has no content and [`crate::Error::Error`] if the
    /// mapping fails.
    pub fn from_file(path: &Path) -> Result<File> {
        let file = fs::File::open(path).map_err(FileError)?;
        if file.metadata().map_err(FileError)?.len() == 0 {
            return Err(Empty);
        }

        let mmap = unsafe { Mmap::map(&file) }.map_err(|error| Error(error.to_string()))?;
        log::debug!("Mapped {} bytes from {}", mmap.len(), path.display());

        Ok(File {
            source: Source::Mapped(mmap),
        })
    }

    /// Wrap a trace that is already in memory.
    ///
    /// # Errors
    /// Returns [`crate::Error::Empty`] if `data` is empty.
    pub fn from_mem(data: Vec<u8>) -> Result<File> {
        if data.is_empty() {
            return Err(Empty);
        }

        Ok(File {
            source: Source::Owned(data),
        })
    }

    /// Number of bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data().len()
    }

    /// Always `false` for a loaded file.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the bytes are memory-mapped from disk.
    #[must_use]
    pub fn is_mapped(&self) -> bool {
        matches!(self.source, Source::Mapped(_))
    }

    /// Borrow all bytes.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.source.bytes()
    }

    /// Borrow `len` bytes starting at `offset`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the range leaves the data.
    pub fn data_slice(&self, offset: usize, len: usize) -> Result<&[u8]> {
        let data = self.data();
        match offset.checked_add(len) {
            Some(end) if end <= data.len() => Ok(&data[offset..end]),
            _ => Err(out_of_bounds_error!()),
        }
    }
}

impl std::fmt::Debug for File {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("File")
            .field("len", &self.len())
            .field("mapped", &self.is_mapped())
            .finish()
    }
}
