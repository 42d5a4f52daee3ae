//! Failure taxonomy for provider queries.
//!
//! Only genuine query failures are errors. An absent window or view is
//! ordinary data (`is_open`/`is_visible` flags, `None` lists) and an invalid
//! record is silently excluded by the validity filter — neither reaches this
//! type. Errors never cross an aggregator boundary: the cache layer logs them
//! and keeps the previous value.

/// A provider raised while servicing a sub-query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Reading from the host failed mid-query.
    #[error("host read failed: {0}")]
    HostRead(String),

    /// A window or view the query was walking disappeared before the read
    /// completed (scene transitions can tear views down between lookups).
    #[error("{0} view vanished mid-query")]
    ViewVanished(&'static str),
}

pub type QueryResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_the_failure_context() {
        assert_eq!(
            QueryError::HostRead("partial read at 0x30".into()).to_string(),
            "host read failed: partial read at 0x30"
        );
        assert_eq!(
            QueryError::ViewVanished("stash").to_string(),
            "stash view vanished mid-query"
        );
    }
}
