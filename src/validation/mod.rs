//! Candidate file validation

use thiserror::Error;

/// Default upload size ceiling: 10 MiB
pub const DEFAULT_MAX_UPLOAD_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select an image file")]
    NotAnImage { mime_type: String },

    #[error("File size must be less than {max_mb} MB")]
    FileTooLarge { max_mb: u64 },
}

/// Validate a candidate file before it becomes the selection.
///
/// Rules are evaluated in order and the first failure wins:
/// 1. MIME type must begin with `image/`
/// 2. Byte size must not exceed `max_size_bytes`
pub fn validate_candidate(
    mime_type: &str,
    file_size: u64,
    max_size_bytes: u64,
) -> Result<(), ValidationError> {
    if !mime_type.starts_with("image/") {
        return Err(ValidationError::NotAnImage {
            mime_type: mime_type.to_string(),
        });
    }

    if file_size > max_size_bytes {
        return Err(ValidationError::FileTooLarge {
            max_mb: max_size_bytes / (1024 * 1024),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_image_under_limit() {
        assert!(validate_candidate("image/png", 2 * 1024 * 1024, DEFAULT_MAX_UPLOAD_SIZE).is_ok());
        assert!(validate_candidate("image/jpeg", 1024, DEFAULT_MAX_UPLOAD_SIZE).is_ok());
        assert!(validate_candidate("image/webp", 0, DEFAULT_MAX_UPLOAD_SIZE).is_ok());
    }

    #[test]
    fn test_rejects_non_image() {
        assert!(matches!(
            validate_candidate("application/pdf", 1024 * 1024, DEFAULT_MAX_UPLOAD_SIZE),
            Err(ValidationError::NotAnImage { .. })
        ));
        assert!(matches!(
            validate_candidate("text/plain", 10, DEFAULT_MAX_UPLOAD_SIZE),
            Err(ValidationError::NotAnImage { .. })
        ));
        // "image" without the slash is not an image MIME type
        assert!(matches!(
            validate_candidate("imagepng", 10, DEFAULT_MAX_UPLOAD_SIZE),
            Err(ValidationError::NotAnImage { .. })
        ));
    }

    #[test]
    fn test_rejects_oversized_image() {
        assert!(matches!(
            validate_candidate("image/jpeg", 11 * 1024 * 1024, DEFAULT_MAX_UPLOAD_SIZE),
            Err(ValidationError::FileTooLarge { max_mb: 10 })
        ));
    }

    #[test]
    fn test_limit_is_inclusive() {
        assert!(validate_candidate("image/png", DEFAULT_MAX_UPLOAD_SIZE, DEFAULT_MAX_UPLOAD_SIZE)
            .is_ok());
        assert!(validate_candidate(
            "image/png",
            DEFAULT_MAX_UPLOAD_SIZE + 1,
            DEFAULT_MAX_UPLOAD_SIZE
        )
        .is_err());
    }

    #[test]
    fn test_mime_check_runs_first() {
        // An oversized non-image reports the MIME failure, not the size one
        assert!(matches!(
            validate_candidate("application/pdf", 11 * 1024 * 1024, DEFAULT_MAX_UPLOAD_SIZE),
            Err(ValidationError::NotAnImage { .. })
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = validate_candidate("application/pdf", 10, DEFAULT_MAX_UPLOAD_SIZE).unwrap_err();
        assert_eq!(err.to_string(), "Please select an image file");

        let err =
            validate_candidate("image/png", 11 * 1024 * 1024, DEFAULT_MAX_UPLOAD_SIZE).unwrap_err();
        assert_eq!(err.to_string(), "File size must be less than 10 MB");
    }
}
