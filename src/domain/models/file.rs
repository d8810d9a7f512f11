use crate::config::FILE_ACCEPT_HINT;

/// A file picked through the composer's upload button
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub media_type: String,
    /// Browser handle, so the upload callback can read the content
    #[cfg(target_arch = "wasm32")]
    pub handle: Option<web_sys::File>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64, media_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            media_type: media_type.into(),
            #[cfg(target_arch = "wasm32")]
            handle: None,
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_web_file(file: web_sys::File) -> Self {
        Self {
            name: file.name(),
            size: file.size() as u64,
            media_type: file.type_(),
            handle: Some(file),
        }
    }

    /// Identity used by the picker control: two selections of the same file compare equal
    pub fn identity(&self) -> (&str, u64, &str) {
        (&self.name, self.size, &self.media_type)
    }

    /// Whether the file name ends with one of the advisory accept extensions.
    /// Informational only; nothing is rejected on this basis.
    pub fn matches_accept_hint(&self) -> bool {
        let name = self.name.to_lowercase();
        FILE_ACCEPT_HINT
            .split(',')
            .any(|ext| name.ends_with(ext.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_hint_matching() {
        assert!(SelectedFile::new("report.PDF", 10, "application/pdf").matches_accept_hint());
        assert!(SelectedFile::new("photo.jpeg", 10, "image/jpeg").matches_accept_hint());
        assert!(!SelectedFile::new("archive.zip", 10, "application/zip").matches_accept_hint());
        assert!(!SelectedFile::new("pdf", 10, "").matches_accept_hint());
    }

    #[test]
    fn test_identity() {
        let a = SelectedFile::new("a.txt", 3, "text/plain");
        let b = SelectedFile::new("a.txt", 3, "text/plain");
        assert_eq!(a.identity(), b.identity());
        assert_ne!(a.identity(), SelectedFile::new("a.txt", 4, "text/plain").identity());
    }
}
