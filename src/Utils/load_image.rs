use base64::Engine as _;
use log::info;
use std::fs;
use std::path::Path;

/// Reads an image file and encodes its bytes to base64 for the
/// label-detection payload. Errors are returned as plain strings because they
/// end up verbatim on the results surface.
pub fn load_image_base64(path: &Path) -> Result<String, String> {
    if !path.exists() {
        return Err(format!("File '{}' does not exist", path.display()));
    }

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => return Err(format!("Failed to read file '{}': {}", path.display(), e)),
    };
    info!("read {} bytes from '{}'", bytes.len(), path.display());

    Ok(base64::engine::general_purpose::STANDARD.encode(&bytes))
}
