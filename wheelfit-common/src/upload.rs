use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

/// Largest car photo accepted for upload (10MB).
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Please choose an image file")]
    NotAnImage,
    #[error("File size must not exceed 10MB")]
    TooLarge { size: u64 },
    #[error("Could not read the selected file: {0}")]
    Read(String),
}

/// Check a candidate file before reading it.
///
/// The type check runs first, so an oversize non-image reports `NotAnImage`.
/// A missing content type is treated as non-image.
pub fn validate_image(content_type: Option<&str>, size: u64) -> Result<(), UploadError> {
    let is_image = content_type
        .map(|ct| ct.starts_with("image/"))
        .unwrap_or(false);
    if !is_image {
        return Err(UploadError::NotAnImage);
    }
    if size > MAX_IMAGE_BYTES {
        return Err(UploadError::TooLarge { size });
    }
    Ok(())
}

/// Encode file bytes as a `data:` URL, the same shape `FileReader.readAsDataURL` produces.
pub fn encode_data_url(content_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", content_type, STANDARD.encode(bytes))
}

/// The car photo currently held for submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectedImage {
    pub data_url: String,
    pub file_name: String,
    pub size: u64,
}

impl SelectedImage {
    /// Validate and encode a file read from the browser.
    pub fn from_file(
        file_name: String,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<Self, UploadError> {
        let size = bytes.len() as u64;
        validate_image(content_type, size)?;
        // validate_image already rejected a missing content type
        let content_type = content_type.unwrap_or_default();
        Ok(Self {
            data_url: encode_data_url(content_type, bytes),
            file_name,
            size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_small_image() {
        assert_eq!(validate_image(Some("image/jpeg"), 1024), Ok(()));
    }

    #[test]
    fn accepts_exactly_max_size() {
        assert_eq!(validate_image(Some("image/png"), MAX_IMAGE_BYTES), Ok(()));
    }

    #[test]
    fn rejects_non_image() {
        assert_eq!(
            validate_image(Some("application/pdf"), 10),
            Err(UploadError::NotAnImage)
        );
    }

    #[test]
    fn rejects_missing_content_type() {
        assert_eq!(validate_image(None, 10), Err(UploadError::NotAnImage));
    }

    #[test]
    fn rejects_oversize_image() {
        let size = MAX_IMAGE_BYTES + 1;
        assert_eq!(
            validate_image(Some("image/png"), size),
            Err(UploadError::TooLarge { size })
        );
    }

    #[test]
    fn oversize_non_image_is_still_rejected() {
        assert!(validate_image(Some("video/mp4"), MAX_IMAGE_BYTES * 3).is_err());
    }

    #[test]
    fn error_messages_match_banner_text() {
        assert_eq!(UploadError::NotAnImage.to_string(), "Please choose an image file");
        assert_eq!(
            UploadError::TooLarge { size: 0 }.to_string(),
            "File size must not exceed 10MB"
        );
    }

    #[test]
    fn encodes_data_url() {
        assert_eq!(
            encode_data_url("image/png", b"hello"),
            "data:image/png;base64,aGVsbG8="
        );
    }

    #[test]
    fn from_file_never_keeps_non_image_data() {
        let result = SelectedImage::from_file("notes.txt".into(), Some("text/plain"), b"abc");
        assert_eq!(result, Err(UploadError::NotAnImage));
    }

    #[test]
    fn from_file_records_name_and_size() {
        let image = SelectedImage::from_file("car.jpg".into(), Some("image/jpeg"), &[1, 2, 3])
            .unwrap();
        assert_eq!(image.file_name, "car.jpg");
        assert_eq!(image.size, 3);
        assert!(image.data_url.starts_with("data:image/jpeg;base64,"));
    }
}
