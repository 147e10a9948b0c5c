use std::path::{Path, PathBuf};

/// Extensions offered by the file picker
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["jpg", "png", "jpeg", "webp"];

/// Strip the braces some platforms wrap around dropped paths
/// (paths with spaces arrive as `{C:/My Pictures/a.png}`).
pub fn clean_drop_path(raw: &str) -> PathBuf {
    let cleaned: String = raw.chars().filter(|c| !matches!(c, '{' | '}')).collect();
    PathBuf::from(cleaned)
}

/// Check if a path has one of the picker's image extensions
pub fn is_supported_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_drop_path_strips_braces() {
        assert_eq!(
            clean_drop_path("{/home/me/My Pictures/cat.png}"),
            PathBuf::from("/home/me/My Pictures/cat.png")
        );
        assert_eq!(clean_drop_path("/tmp/plain.jpg"), PathBuf::from("/tmp/plain.jpg"));
        assert_eq!(clean_drop_path("{/tmp/a}b}.webp"), PathBuf::from("/tmp/ab.webp"));
    }

    #[test]
    fn test_clean_drop_path_keeps_whitespace() {
        assert_eq!(
            clean_drop_path("{/tmp/ leading and trailing .png}"),
            PathBuf::from("/tmp/ leading and trailing .png")
        );
        assert_eq!(clean_drop_path(" /tmp/x.png "), PathBuf::from(" /tmp/x.png "));
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_extension(Path::new("a.jpg")));
        assert!(is_supported_extension(Path::new("a.JPEG")));
        assert!(is_supported_extension(Path::new("dir/a.Png")));
        assert!(is_supported_extension(Path::new("a.webp")));
        assert!(!is_supported_extension(Path::new("a.gif")));
        assert!(!is_supported_extension(Path::new("noext")));
    }
}
