//! Command-line driver: logging setup, stdin/stdout and in-place file
//! rewriting around [`transform_document`](crate::transform_document).

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::sync::Once;

use tempfile::NamedTempFile;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::decode::ParseError;
use crate::flags::{Invocation, UsageError};
use crate::transform::Chain;

/// Label used in messages for standard input.
const STDIN: &str = "<stdin>";

/// Failure of a command-line run. Every variant ends the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bad flags or values.
    #[error(transparent)]
    Usage(#[from] UsageError),
    /// A document that is not valid HPGL.
    #[error("{path}: {source}")]
    Parse {
        /// File the document came from, or `<stdin>`.
        path: String,
        /// What was wrong with it.
        source: ParseError,
    },
    /// Reading or writing failed.
    #[error("{path}: {source}")]
    Io {
        /// File being read or written, or `<stdin>`/`<stdout>`.
        path: String,
        /// Underlying error.
        source: io::Error,
    },
}

impl Error {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 2,
            Self::Parse { .. } | Self::Io { .. } => 1,
        }
    }
}

fn io_error(path: impl AsRef<Path>, source: io::Error) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

static INIT_ONCE: Once = Once::new();

/// Install the stderr log subscriber. Later calls are no-ops.
///
/// `RUST_LOG` wins when set; otherwise `verbosity` picks the level for this
/// crate: 0 → warn, 1 → info, 2 → debug, 3+ → trace.
pub fn init_logging(verbosity: u8) {
    INIT_ONCE.call_once(|| {
        let level = match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("hpgl_transform={level}")));
        // A subscriber installed by an embedding program takes precedence.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init();
    });
}

/// Execute an invocation.
///
/// With no files, the whole of `stdin` is transformed to `stdout`. Otherwise
/// each file is rewritten in place, in order, stopping at the first failure.
pub fn run<R: Read, W: Write>(invocation: &Invocation, stdin: R, stdout: W) -> Result<(), Error> {
    debug!(chain = %invocation.chain, files = invocation.files.len(), "starting run");

    if invocation.uses_stdio() {
        return run_stdio(&invocation.chain, stdin, stdout);
    }
    for file in &invocation.files {
        rewrite_in_place(Path::new(file), &invocation.chain)?;
    }
    Ok(())
}

fn run_stdio<R: Read, W: Write>(chain: &Chain, mut stdin: R, mut stdout: W) -> Result<(), Error> {
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .map_err(|e| io_error(STDIN, e))?;

    let out = crate::transform_document(&text, chain).map_err(|source| Error::Parse {
        path: String::from(STDIN),
        source,
    })?;

    stdout
        .write_all(out.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| io_error("<stdout>", e))
}

/// Transform one file and replace its contents.
///
/// The file is fully read and decoded before anything is written, and the
/// new contents replace the old atomically, so a failure at any step leaves
/// the original file as it was.
pub fn rewrite_in_place(path: &Path, chain: &Chain) -> Result<(), Error> {
    let text = fs::read_to_string(path).map_err(|e| io_error(path, e))?;

    let out = crate::transform_document(&text, chain).map_err(|source| Error::Parse {
        path: path.display().to_string(),
        source,
    })?;

    atomic_write(path, out.as_bytes())?;
    info!(path = %path.display(), bytes = out.len(), "rewrote file");
    Ok(())
}

/// Replace the contents of `target` with `content` atomically.
///
/// Symlinks are followed, so the file they point at is rewritten and the link
/// stays a link. The new contents go to a uniquely named temp file in the
/// same directory, take the original's permissions, and are then renamed
/// over it. On failure the temp file is removed and `target` is untouched.
pub fn atomic_write(target: &Path, content: &[u8]) -> Result<(), Error> {
    let resolved = fs::canonicalize(target).map_err(|e| io_error(target, e))?;
    let dir = resolved.parent().unwrap_or_else(|| Path::new("."));

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| io_error(target, e))?;
    temp.write_all(content)
        .and_then(|()| {
            let permissions = fs::metadata(&resolved)?.permissions();
            temp.as_file().set_permissions(permissions)
        })
        .map_err(|e| io_error(target, e))?;

    temp.persist(&resolved).map_err(|e| io_error(target, e.error))?;
    Ok(())
}
