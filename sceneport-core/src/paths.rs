//! Destination path resolution
//!
//! The target data tree has no concept of nested scene folders, so scene
//! paths are flattened into a single `Scenes/` namespace by encoding the
//! original folder structure into the file name.

/// Namespace prefix every exported scene lives under
pub const SCENES_PREFIX: &str = "Scenes/";

/// Extension of exported markup documents
pub const MARKUP_EXTENSION: &str = ".xml";

/// Resolve the destination-relative path for a scene asset
///
/// The extension is rewritten to the markup extension and the result is
/// unconditionally rooted under [`SCENES_PREFIX`]. Any remaining path
/// separators after the prefix are collapsed into underscores so that two
/// scenes from different subfolders can never collide on the same name.
/// Never fails; an empty source path yields a degenerate but usable output.
pub fn resolve_scene_path(source_path: &str) -> String {
    let name = replace_extension(&normalize_separators(source_path), MARKUP_EXTENSION);
    let remainder = match strip_prefix_ignore_case(&name, SCENES_PREFIX) {
        Some(rest) => rest,
        None => name.as_str(),
    };
    format!("{}{}", SCENES_PREFIX, remainder.replace('/', "_"))
}

/// Rewrite the extension of a relative path
///
/// `new_extension` includes its leading dot, or is empty to strip the
/// extension entirely. Only the final path segment is considered.
pub fn replace_extension(path: &str, new_extension: &str) -> String {
    let stem_end = match path.rfind('.') {
        // A dot inside an earlier segment is not an extension separator
        Some(pos) if !path[pos..].contains('/') => pos,
        _ => path.len(),
    };
    format!("{}{}", &path[..stem_end], new_extension)
}

/// Flatten platform-specific separators to forward slashes
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

fn strip_prefix_ignore_case<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    // get() avoids slicing mid-character when a multi-byte char straddles
    // the prefix length
    match value.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => Some(&value[prefix.len()..]),
        _ => None,
    }
}
