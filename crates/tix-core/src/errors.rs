//! Error types for the normalization pipeline.
//!
//! Network errors live in `tix-board` and `tix-dataservice`. The CLI
//! converges everything into `anyhow`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A card references a member id that the board's member list does not contain.
    #[error("unknown member id {id}: not a member of the board")]
    UnknownMember { id: String },

    /// Writing export rows failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
