use crate::consts::{ALLOWED_EXTENSIONS, ALLOWED_MIME_TYPES, MAX_UPLOAD_BYTES};
use crate::error::ValidationError;

use super::target::UploadTarget;

pub type ValidationResult = std::result::Result<(), ValidationError>;

/// Check a candidate file against the default 10 MiB limit and the
/// jpeg/png allow-list. The first failing rule wins.
pub fn validate(target: &UploadTarget) -> ValidationResult {
    validate_with_limit(target, MAX_UPLOAD_BYTES)
}

/// Same as [`validate`] with a caller-supplied size limit.
pub fn validate_with_limit(target: &UploadTarget, max_bytes: u64) -> ValidationResult {
    if target.size > max_bytes {
        return Err(ValidationError::TooLarge {
            size: target.size,
            limit: max_bytes,
        });
    }

    if !has_allowed_type(&target.declared_type) && !has_allowed_extension(&target.name) {
        return Err(ValidationError::UnsupportedType {
            name: target.name.clone(),
            declared_type: target.declared_type.clone(),
        });
    }

    Ok(())
}

fn has_allowed_type(declared_type: &str) -> bool {
    ALLOWED_MIME_TYPES.contains(&declared_type)
}

fn has_allowed_extension(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    ALLOWED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}
