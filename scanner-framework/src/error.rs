use thiserror::Error;

/// Errors raised while pulling input.
///
/// Input content never fails to scan; the only failure is the underlying
/// reader giving up.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read input at byte {offset}: {source}")]
    Read {
        offset: usize,
        #[source]
        source: std::io::Error,
    },
}
