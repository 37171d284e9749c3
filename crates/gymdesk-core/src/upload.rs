//! Upload Validation
//!
//! Client-side gatekeeping before a file leaves the browser: byte-size
//! ceiling and an extension/MIME allow-list. Validation is all-or-nothing
//! per batch; one invalid file voids the whole drop.

use thiserror::Error;

/// Metadata of one selected or dropped file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMeta {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

/// Aggregated rejection: one line per violating file.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct UploadError {
    pub message: String,
}

/// Validation rules for an upload zone.
///
/// Allow-list entries are either a literal extension beginning with a dot
/// (compared case-insensitively) or a MIME-type pattern where `*` matches
/// any substring. An empty allow-list accepts every type.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRules {
    pub max_bytes: u64,
    pub accept: Vec<String>,
    pub multiple: bool,
}

impl UploadRules {
    pub fn new(max_bytes: u64, accept: &[&str], multiple: bool) -> Self {
        Self {
            max_bytes,
            accept: accept.iter().map(|s| s.to_string()).collect(),
            multiple,
        }
    }

    /// Common image-upload preset (logos, exercise photos).
    pub fn images(max_bytes: u64) -> Self {
        Self::new(max_bytes, &[".png", ".jpg", ".jpeg", ".webp", "image/*"], false)
    }

    fn type_allowed(&self, file: &FileMeta) -> bool {
        if self.accept.is_empty() {
            return true;
        }
        self.accept.iter().any(|entry| {
            if let Some(ext) = entry.strip_prefix('.') {
                file.name
                    .to_lowercase()
                    .ends_with(&format!(".{}", ext.to_lowercase()))
            } else {
                wildcard_match(entry, &file.mime)
            }
        })
    }

    fn violation(&self, file: &FileMeta) -> Option<String> {
        if file.size > self.max_bytes {
            return Some(format!(
                "{}: exceeds the {} byte limit",
                file.name, self.max_bytes
            ));
        }
        if !self.type_allowed(file) {
            return Some(format!("{}: file type not allowed", file.name));
        }
        None
    }

    /// Validate a batch. On success returns the indices of the files to
    /// forward (only the first when multiple selection is disabled); on any
    /// violation returns the aggregated error and forwards nothing.
    pub fn check_batch(&self, files: &[FileMeta]) -> Result<Vec<usize>, UploadError> {
        let violations: Vec<String> = files.iter().filter_map(|f| self.violation(f)).collect();
        if !violations.is_empty() {
            return Err(UploadError {
                message: violations.join("\n"),
            });
        }
        let mut accepted: Vec<usize> = (0..files.len()).collect();
        if !self.multiple {
            accepted.truncate(1);
        }
        Ok(accepted)
    }
}

/// `*` matches any substring; other segments must appear in order, anchored
/// at the ends when the pattern does not start or end with `*`.
fn wildcard_match(pattern: &str, value: &str) -> bool {
    let pattern = pattern.to_lowercase();
    let value = value.to_lowercase();
    if !pattern.contains('*') {
        return pattern == value;
    }

    let segments: Vec<&str> = pattern.split('*').collect();
    let mut rest = value.as_str();

    if let Some(first) = segments.first() {
        if !first.is_empty() {
            match rest.strip_prefix(first) {
                Some(r) => rest = r,
                None => return false,
            }
        }
    }
    if let Some(last) = segments.last() {
        if segments.len() > 1 && !last.is_empty() {
            match rest.strip_suffix(last) {
                Some(r) => rest = r,
                None => return false,
            }
        }
    }
    for segment in &segments[1..segments.len().saturating_sub(1)] {
        if segment.is_empty() {
            continue;
        }
        match rest.find(segment) {
            Some(idx) => rest = &rest[idx + segment.len()..],
            None => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size: u64, mime: &str) -> FileMeta {
        FileMeta {
            name: name.to_string(),
            size,
            mime: mime.to_string(),
        }
    }

    fn rules() -> UploadRules {
        UploadRules::new(1_000_000, &[".png", ".JPG", "image/*"], true)
    }

    #[test]
    fn valid_batch_forwards_every_file() {
        let batch = vec![
            file("logo.png", 100, "image/png"),
            file("photo.jpg", 200, "image/jpeg"),
        ];
        assert_eq!(rules().check_batch(&batch).unwrap(), vec![0, 1]);
    }

    #[test]
    fn single_selection_forwards_only_the_first() {
        let mut single = rules();
        single.multiple = false;
        let batch = vec![
            file("a.png", 100, "image/png"),
            file("b.png", 100, "image/png"),
        ];
        assert_eq!(single.check_batch(&batch).unwrap(), vec![0]);
    }

    #[test]
    fn one_invalid_file_voids_the_whole_batch() {
        let batch = vec![
            file("ok.png", 100, "image/png"),
            file("huge.png", 2_000_000, "image/png"),
            file("notes.txt", 100, "text/plain"),
        ];
        let err = rules().check_batch(&batch).unwrap_err();
        let lines: Vec<&str> = err.message.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("huge.png:"));
        assert!(lines[1].starts_with("notes.txt:"));
    }

    #[test]
    fn extensions_compare_case_insensitively() {
        let batch = vec![file("SHOT.PNG", 10, "application/octet-stream")];
        assert!(rules().check_batch(&batch).is_ok());
        let batch = vec![file("shot.jpg", 10, "application/octet-stream")];
        assert!(rules().check_batch(&batch).is_ok());
    }

    #[test]
    fn mime_wildcard_matches_any_substring() {
        assert!(wildcard_match("image/*", "image/png"));
        assert!(wildcard_match("*/png", "image/png"));
        assert!(wildcard_match("*", "anything/at-all"));
        assert!(!wildcard_match("image/*", "video/mp4"));
        assert!(!wildcard_match("image/png", "image/jpeg"));
    }

    #[test]
    fn empty_allow_list_accepts_any_type() {
        let any = UploadRules::new(1_000, &[], true);
        let batch = vec![file("notes.txt", 10, "text/plain")];
        assert!(any.check_batch(&batch).is_ok());
    }
}
