/*!

  Error types for the workbench.

*/

use std::path::PathBuf;
use thiserror::Error;

/// The error returned when the export artifact cannot be persisted.
///
/// Export is the only fallible operation in the crate: every toggle, reset,
/// and row selection is total over bits.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The destination could not be written
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// The destination that failed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
