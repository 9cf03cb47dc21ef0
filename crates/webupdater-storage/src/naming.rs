//! Server-side generation of on-disk file names.

use uuid::Uuid;

/// Generate a fresh storage name for an upload.
///
/// The name is a random 32-character hex token followed by the extension
/// of `original_name` (including the dot), if it has a usable one. Nothing
/// else from the client-supplied name reaches the disk.
pub fn generate_storage_name(original_name: Option<&str>) -> String {
    let token = Uuid::new_v4().simple().to_string();
    match original_name.and_then(extension_of) {
        Some(ext) => format!("{token}.{ext}"),
        None => token,
    }
}

/// Extension of the final path component, without the dot.
///
/// Dotfiles such as `.hidden` have no extension. Extensions containing
/// anything but ASCII alphanumerics are dropped.
fn extension_of(name: &str) -> Option<&str> {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let stem_len = base.trim_start_matches('.').len();
    let base = &base[base.len() - stem_len..];
    let (_, ext) = base.rsplit_once('.')?;
    if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext)
}
