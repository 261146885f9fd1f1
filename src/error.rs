//! Errors reported when configuring a paginator.

use thiserror::Error;

/// An invalid paginator configuration.
///
/// Returned by [`Config::validate`](crate::paginator::Config::validate) and the
/// fallible paginator constructors. A paginator is never built from a
/// configuration that fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The page size was zero; every page must hold at least one item.
    #[error("page size must be at least 1")]
    ZeroPageSize,
    /// The initial page was zero; pages are numbered from 1.
    #[error("initial page must be at least 1 (pages are numbered from 1)")]
    ZeroInitialPage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ConfigError::ZeroPageSize.to_string(),
            "page size must be at least 1"
        );
        assert!(ConfigError::ZeroInitialPage
            .to_string()
            .starts_with("initial page must be at least 1"));
    }
}
