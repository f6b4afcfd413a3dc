use std::error::Error;
use std::fmt;
use std::io;

/// Result type for table of contents operations
pub type Result<T> = std::result::Result<T, MdtocError>;

/// Error types for mdtoc operations
#[derive(Debug)]
pub enum MdtocError {
    /// The document already contains a generated table of contents and
    /// overwriting was not requested
    ExistingToc,
    /// A begin sentinel was found without a matching end sentinel
    UnterminatedToc,
    /// Reading lines from the document failed
    Scan(io::Error),
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
}

impl MdtocError {
    /// True for the conflict that `force` resolves
    pub fn is_existing_toc(&self) -> bool {
        matches!(self, MdtocError::ExistingToc)
    }
}

impl fmt::Display for MdtocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MdtocError::ExistingToc => write!(f, "document has existing table of contents"),
            MdtocError::UnterminatedToc => {
                write!(f, "existing table of contents has no end marker")
            }
            MdtocError::Scan(err) => write!(f, "Scan error: {}", err),
            MdtocError::Io(err) => write!(f, "IO error: {}", err),
            MdtocError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl Error for MdtocError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MdtocError::Scan(err) | MdtocError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for MdtocError {
    fn from(err: io::Error) -> Self {
        MdtocError::Io(err)
    }
}
