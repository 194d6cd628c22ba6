//! Error types for planex-stanza

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors. A missing stanza is not one of them; see
/// [`Outcome::StanzaMissing`](crate::Outcome::StanzaMissing).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] planex_fs::Error),

    #[error("Interrupted before writing")]
    Interrupted,
}
