/// Errors raised by the catalog itself.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A song referenced an album name that is not in the directory.
    #[error("invalid album reference: no album named '{album}'")]
    InvalidReference { album: String },

    /// A required argument was not supplied.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Errors raised while populating a catalog from CSV files. Only the
/// import glue can hit these, the in-memory core does no I/O.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Catalog(#[from] CatalogError),
}
