use crate::shared::error::ValidatorError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum manifest size accepted for reading (10 MB).
/// Real pom.xml files are a few kilobytes; anything larger is rejected unread.
pub const MAX_MANIFEST_SIZE: u64 = 10 * 1024 * 1024;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
/// Submissions are uploaded by untrusted parties, so a symlink pointing at
/// another student's files must never be followed.
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist or its metadata cannot be read
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| ValidatorError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(ValidatorError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Symbolic links are not allowed. Point to the file itself.".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(metadata.len())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(ValidatorError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Make sure the path points to a pom.xml file.".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Reads the raw bytes of a file after the regular-file and size checks pass
///
/// Decoding is left to the caller; a file in a legacy encoding is not a read error.
pub fn read_checked_bytes(path: &Path, file_description: &str, max_size: u64) -> Result<Vec<u8>> {
    let size = validate_regular_file(path, file_description)?;
    validate_file_size(size, path, max_size)?;

    fs::read(path).map_err(|e| {
        ValidatorError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}
