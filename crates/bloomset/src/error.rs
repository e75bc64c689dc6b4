use thiserror::Error;

/// Errors returned by [`crate::Filter::add`].
///
/// `test`, `clear`, `memsize`, and `upgraded` never fail -- allocation is
/// the only thing `add` can fail at, and only while growing or upgrading.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Growing or upgrading the filter could not allocate the storage it
    /// needed. The filter is left exactly as it was before the call; the
    /// key was not inserted.
    #[error("bloomset: allocation failed while growing the filter")]
    OutOfMemory,
}
