//! Analysis backend abstraction
//!
//! The view talks to the analysis service through [`AnalysisBackend`], so the
//! native front end can use `reqwest`, the browser front end can use `fetch`,
//! and tests can substitute a stub.

use async_trait::async_trait;
use std::path::Path;

use super::error::AnalysisResult;
use super::response::AnalysisResponse;

/// Default analysis endpoint
pub const DEFAULT_ENDPOINT_URL: &str = "https://punctuation-omdx.vercel.app/process-file";

/// Multipart field the file is sent under
pub const FILE_FIELD: &str = "file";

/// Something that can run an uploaded file through the analysis service.
///
/// `F` is the front end's file handle. Futures are not required to be `Send`:
/// the view is single-threaded and the browser fetch API is not `Send`.
#[async_trait(?Send)]
pub trait AnalysisBackend<F> {
    /// Endpoint the backend posts to, for logging
    fn endpoint(&self) -> &str;

    /// Upload the file and decode the response body
    async fn analyze(&self, file: &F) -> AnalysisResult<AnalysisResponse>;
}

#[async_trait(?Send)]
impl<F, B> AnalysisBackend<F> for &B
where
    B: AnalysisBackend<F> + ?Sized,
{
    fn endpoint(&self) -> &str {
        (**self).endpoint()
    }

    async fn analyze(&self, file: &F) -> AnalysisResult<AnalysisResponse> {
        (**self).analyze(file).await
    }
}

/// A file read into memory for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, keeping only its final path component as the
    /// upload filename
    pub fn from_path(path: &Path) -> AnalysisResult<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload.csv".to_string());

        Ok(Self { file_name, bytes })
    }

    /// Whether the name carries the `.csv` extension the picker hints at.
    ///
    /// Advisory only: nothing refuses to upload other files.
    pub fn has_csv_extension(&self) -> bool {
        Path::new(&self.file_name)
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_path_reads_bytes_and_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("essay.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"text\nHello, world!\n").unwrap();

        let upload = UploadFile::from_path(&path).unwrap();
        assert_eq!(upload.file_name, "essay.csv");
        assert_eq!(upload.bytes, b"text\nHello, world!\n");
        assert!(upload.has_csv_extension());
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(UploadFile::from_path(&dir.path().join("nope.csv")).is_err());
    }

    #[test]
    fn test_csv_extension_is_advisory() {
        assert!(UploadFile::new("DATA.CSV", Vec::new()).has_csv_extension());
        assert!(!UploadFile::new("notes.txt", Vec::new()).has_csv_extension());
        assert!(!UploadFile::new("README", Vec::new()).has_csv_extension());
    }
}
