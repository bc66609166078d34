// Long-description resolution for the package metadata.
//
// This file is `include!`d by build.rs as well as compiled into the crate,
// so it must stay free of `use` declarations, inner doc comments, and
// non-std dependencies.

/// Description used when no README.md is present.
pub const FALLBACK_DESCRIPTION: &str = "GitHub repository batch classification clone script";

/// Resolve the long description from a README file.
///
/// An absent file yields [`FALLBACK_DESCRIPTION`]; any other read failure
/// is propagated so that packaging fails loudly.
pub fn long_description(readme: &std::path::Path) -> std::io::Result<String> {
    match std::fs::read_to_string(readme) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Ok(FALLBACK_DESCRIPTION.to_string())
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_present_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "# repos\n\nBatch clone tool.").unwrap();

        let text = long_description(&path).unwrap();
        assert_eq!(text, "# repos\n\nBatch clone tool.\n");
    }

    #[test]
    fn test_absent_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let text = long_description(&dir.path().join("README.md")).unwrap();
        assert_eq!(text, FALLBACK_DESCRIPTION);
    }

    #[test]
    fn test_unreadable_path_propagates() {
        // Reading a directory as a file is an error other than NotFound
        let dir = tempfile::tempdir().unwrap();
        assert!(long_description(dir.path()).is_err());
    }
}
