use std::path::Path;

/// Attributes of a catalog entry that are derived from its path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParts {
    pub name: String,
    pub extension: String,
}

pub fn extract_path_components(path: &str) -> PathParts {
    let path = Path::new(path);

    // Get the base file name (with no path)
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    // Dot-files such as `.bashrc` have no extension
    let extension = path
        .extension()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    PathParts { name, extension }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_extension() {
        let parts = extract_path_components("photos/2021/IMG_0042.JPG");
        assert_eq!(parts.name, "IMG_0042.JPG");
        assert_eq!(parts.extension, "JPG");
    }

    #[test]
    fn test_only_last_extension_is_taken() {
        let parts = extract_path_components("backups/site.tar.gz");
        assert_eq!(parts.name, "site.tar.gz");
        assert_eq!(parts.extension, "gz");
    }

    #[test]
    fn test_no_extension() {
        assert_eq!(extract_path_components("bin/README").extension, "");
        let dotfile = extract_path_components("/home/user/.bashrc");
        assert_eq!(dotfile.name, ".bashrc");
        assert_eq!(dotfile.extension, "");
    }

    #[test]
    fn test_empty_path() {
        let parts = extract_path_components("");
        assert_eq!(parts.name, "");
        assert_eq!(parts.extension, "");
    }
}
