use thiserror::Error;

/// Errors that can occur while converting a document from disk.
///
/// The conversion core itself never fails: every input line is classified
/// into some block (or dropped, for over-deep headings). Errors only arise
/// at the file boundary.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input path does not refer to an existing regular file.
    #[error("Missing {path}")]
    MissingInput {
        /// The path that was supplied on the command line.
        path: String,
    },
    /// IO error while reading the input or writing the output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
