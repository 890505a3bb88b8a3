//! Request validation module

use crate::error::ApiError;

/// Validates the size of the submitted `content` string
///
/// Data-URL media can be large; the limit keeps the fingerprint and
/// classifier passes bounded.
pub fn validate_content_size(size: usize, max_size: usize) -> Result<(), ApiError> {
    if size > max_size {
        Err(ApiError::PayloadTooLarge {
            size,
            max: max_size,
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_content_size_ok() {
        let max = 10 * 1024 * 1024; // 10 MB
        assert!(validate_content_size(0, max).is_ok());
        assert!(validate_content_size(1024, max).is_ok());
        assert!(validate_content_size(max, max).is_ok()); // exactly max
    }

    #[test]
    fn test_validate_content_size_too_large() {
        let max = 10 * 1024 * 1024;
        assert!(matches!(
            validate_content_size(max + 1, max),
            Err(ApiError::PayloadTooLarge { .. })
        ));
    }
}
