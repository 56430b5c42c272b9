use std::path::{Path, PathBuf};

use crate::invoke::{self, Invoker, Subprocess};
use crate::{parse, provision, tag, TagSet};

/// A handle to a usable AtomicParsley executable.
///
/// The handle is the only piece of configuration tag operations need: the binary path and
/// the invoker that runs it, both fixed at construction and immutable afterwards. All
/// operations are synchronous and block the calling thread until the subprocess exits.
/// Concurrent calls on different files are independent; calls on the same file are not
/// synchronized.
#[derive(Clone, Debug)]
pub struct AtomicParsley<I: Invoker = Subprocess> {
    binary: PathBuf,
    invoker: I,
}

impl AtomicParsley {
    /// Ensures an AtomicParsley executable exists at the deterministic per platform path,
    /// downloading it on first use, and returns a handle to it.
    ///
    /// Provisioning failures (unsupported platform, network failure, permissions) are fatal
    /// to any subsequent tag operation and surface here, once; they are not retried
    /// automatically.
    pub fn provision() -> crate::Result<Self> {
        let binary = provision::ensure_binary()?;
        Ok(Self { binary, invoker: Subprocess })
    }

    /// Returns a handle using the AtomicParsley executable at `binary`, without
    /// provisioning anything.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self { binary: binary.into(), invoker: Subprocess }
    }
}

impl<I: Invoker> AtomicParsley<I> {
    /// Returns a handle using the executable at `binary` and a custom invoker.
    pub fn with_invoker(binary: impl Into<PathBuf>, invoker: I) -> Self {
        Self { binary: binary.into(), invoker }
    }

    /// Returns the path of the executable this handle runs.
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Reads all recognized metadata atoms of the file at the path.
    ///
    /// Atoms the tool prints but the dictionary cannot resolve are skipped, favoring a best
    /// effort read over a strict one.
    pub fn read_tags(&self, path: impl AsRef<Path>) -> crate::Result<TagSet> {
        let args = invoke::read_args(path.as_ref());
        let dump = self.invoker.run(&self.binary, &args)?;
        Ok(parse::parse_dump(&dump))
    }

    /// Validates a write request and applies it to the file at the path.
    ///
    /// Unrecognized tag names are dropped before the tool is invoked; structurally invalid
    /// requests fail with the matching [`ErrorKind`] before any subprocess is launched, so
    /// no partial writes are attempted.
    ///
    /// [`ErrorKind`]: crate::ErrorKind
    pub fn write_tags(&self, path: impl AsRef<Path>, tags: TagSet) -> crate::Result<()> {
        let path = path.as_ref();
        let tags = tag::prepare(path, tags)?;
        let args = invoke::write_args(path, &tags);
        self.invoker.run(&self.binary, &args)?;
        Ok(())
    }
}
