//! Selected file - the file-like input handed to the validation gate
//!
//! Metadata (name, declared type, size) is known up front. Contents are only
//! read once the file has been admitted to preview, so oversized picks never
//! touch the disk. Reads are capped one byte past the size limit: a file that
//! lied about its size (or grew since the picker looked) is still caught.

use std::io::Read;
use std::path::PathBuf;

use bytes::Bytes;

/// Where a selected file's contents live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// Contents already in memory (drag-and-drop, clipboard, tests)
    Memory(Bytes),
    /// Contents on the local filesystem, read lazily
    Disk(PathBuf),
}

/// A locally selected file with declared metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name shown to the user
    pub name: String,
    /// Declared MIME type (may be empty)
    pub mime: String,
    /// Declared size in bytes
    pub size: u64,
    /// Where the contents are read from
    pub source: FileSource,
}

impl SelectedFile {
    /// File whose contents are already in memory. Size is the buffer length.
    pub fn from_bytes(
        name: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        let data: Bytes = data.into();
        Self {
            name: name.into(),
            mime: mime.into(),
            size: data.len() as u64,
            source: FileSource::Memory(data),
        }
    }

    /// File on disk with metadata taken from the picker.
    pub fn on_disk(
        name: impl Into<String>,
        mime: impl Into<String>,
        size: u64,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
            source: FileSource::Disk(path.into()),
        }
    }

    /// Read at most `limit + 1` bytes of the contents.
    ///
    /// A result longer than `limit` means the real contents exceed it.
    pub fn load_limited(&self, limit: u64) -> std::io::Result<Bytes> {
        let cap = limit.saturating_add(1);
        match &self.source {
            FileSource::Memory(data) => {
                let end = usize::try_from(cap).unwrap_or(usize::MAX).min(data.len());
                Ok(data.slice(..end))
            }
            FileSource::Disk(path) => {
                let mut buf = Vec::new();
                std::fs::File::open(path)?.take(cap).read_to_end(&mut buf)?;
                Ok(Bytes::from(buf))
            }
        }
    }

    /// Pull the contents into memory, at most `limit + 1` bytes of them.
    ///
    /// The declared size is replaced by the number of bytes actually read,
    /// so the validation gate judges what was loaded.
    pub fn into_memory(self, limit: u64) -> std::io::Result<Self> {
        if let FileSource::Memory(_) = self.source {
            return Ok(self);
        }
        let data = self.load_limited(limit)?;
        Ok(Self {
            size: data.len() as u64,
            source: FileSource::Memory(data),
            ..self
        })
    }
}
