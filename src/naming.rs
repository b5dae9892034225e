//! Logical-name derivation for selected files.
//!
//! The generated module keys images by bare file name — folder structure is
//! deliberately not preserved, so `photos/2024/dawn.png` and `icons/dawn.png`
//! would collide. Collisions are caught later by the generator's uniqueness
//! check; this module only extracts the name.

use std::path::Path;

/// Derive the logical name for a source path: its final file-name component.
///
/// Returns `None` for paths without one (`/`, `..`, an empty path). Non-UTF-8
/// file names are converted lossily — the generated module is UTF-8 text and
/// cannot embed arbitrary byte sequences as keys.
pub fn derive_logical_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_directories() {
        assert_eq!(
            derive_logical_name(Path::new("photos/2024/dawn.png")),
            Some("dawn.png".to_string())
        );
    }

    #[test]
    fn bare_file_name_passes_through() {
        assert_eq!(
            derive_logical_name(Path::new("a.gif")),
            Some("a.gif".to_string())
        );
    }

    #[test]
    fn absolute_path_keeps_only_the_name() {
        assert_eq!(
            derive_logical_name(Path::new("/var/img/logo.jpeg")),
            Some("logo.jpeg".to_string())
        );
    }

    #[test]
    fn root_has_no_name() {
        assert_eq!(derive_logical_name(Path::new("/")), None);
    }

    #[test]
    fn parent_dir_has_no_name() {
        assert_eq!(derive_logical_name(Path::new("..")), None);
    }

    #[test]
    fn empty_path_has_no_name() {
        assert_eq!(derive_logical_name(Path::new("")), None);
    }
}
