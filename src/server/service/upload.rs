//! Attachment storage on the local filesystem.
//!
//! Files for a complaint are written to `<upload_dir>/<complaint_id>/<millis>_<index>_<name>`,
//! where `index` is the file's position in the submission. Only the final component of the
//! client-supplied name is kept, and an existing file is never overwritten.

use chrono::Utc;
use std::path::Path;
use tokio::{fs::OpenOptions, io::AsyncWriteExt};

use crate::server::{error::AppError, model::complaint::UploadedFile};

/// Name used when the client sends a file without a usable name.
const FALLBACK_FILE_NAME: &str = "attachment";

pub struct UploadService<'a> {
    upload_dir: &'a Path,
}

impl<'a> UploadService<'a> {
    pub fn new(upload_dir: &'a Path) -> Self {
        Self { upload_dir }
    }

    /// Writes the non-empty files of a submission to disk.
    ///
    /// If any file cannot be written, the files already written for this submission are
    /// removed again before the error is returned.
    ///
    /// # Arguments
    /// - `complaint_id` - Public complaint ID, used as the directory name
    /// - `files` - Files received with the submission
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Paths of the written files, in input order
    /// - `Err(AppError::IoErr)` - Creating the directory or writing a file failed
    pub async fn store(
        &self,
        complaint_id: &str,
        files: Vec<UploadedFile>,
    ) -> Result<Vec<String>, AppError> {
        let files: Vec<UploadedFile> = files.into_iter().filter(|f| !f.bytes.is_empty()).collect();
        if files.is_empty() {
            return Ok(Vec::new());
        }

        let dir = self.upload_dir.join(complaint_id);
        match write_files(&dir, files).await {
            Ok(paths) => Ok(paths),
            Err(e) => {
                self.remove(complaint_id).await;
                Err(e.into())
            }
        }
    }

    /// Deletes every stored file of a complaint. A missing directory is not an error.
    pub async fn remove(&self, complaint_id: &str) {
        let dir = self.upload_dir.join(complaint_id);
        match tokio::fs::remove_dir_all(&dir).await {
            Ok(()) => tracing::debug!("Removed attachments in {}", dir.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::error!("Failed to remove {}: {}", dir.display(), e),
        }
    }
}

async fn write_files(dir: &Path, files: Vec<UploadedFile>) -> std::io::Result<Vec<String>> {
    tokio::fs::create_dir_all(dir).await?;

    let millis = Utc::now().timestamp_millis();
    let mut paths = Vec::with_capacity(files.len());
    for (index, file) in files.into_iter().enumerate() {
        let path = dir.join(format!("{}_{}_{}", millis, index, base_name(&file.file_name)));

        let mut out = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;
        out.write_all(&file.bytes).await?;
        out.flush().await?;
        tracing::debug!("Stored attachment {}", path.display());

        paths.push(path.to_string_lossy().into_owned());
    }

    Ok(paths)
}

/// Last path component of a client file name, splitting on both separators.
fn base_name(file_name: &str) -> &str {
    let name = file_name.rsplit(['/', '\\']).next().unwrap_or("").trim();
    match name {
        "" | "." | ".." => FALLBACK_FILE_NAME,
        name => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_upload_dir() -> PathBuf {
        std::env::temp_dir().join(format!(
            "resolveit-upload-{}-{}",
            std::process::id(),
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ))
    }

    /// Tests stripping directories from client file names.
    ///
    /// Expected: only the final component survives and traversal names fall back
    #[test]
    fn strips_path_components() {
        assert_eq!(base_name("photo.png"), "photo.png");
        assert_eq!(base_name("../../etc/passwd"), "passwd");
        assert_eq!(base_name("C:\\Users\\me\\receipt.pdf"), "receipt.pdf");
        assert_eq!(base_name(".."), FALLBACK_FILE_NAME);
        assert_eq!(base_name(""), FALLBACK_FILE_NAME);
    }

    /// Tests storing a mix of empty and non-empty files.
    ///
    /// Expected: only the non-empty file is written, under the complaint directory
    #[tokio::test]
    async fn stores_non_empty_files() -> Result<(), AppError> {
        let dir = temp_upload_dir();
        let service = UploadService::new(&dir);

        let paths = service
            .store(
                "CMP-1",
                vec![
                    UploadedFile {
                        file_name: "empty.txt".to_string(),
                        bytes: Vec::new(),
                    },
                    UploadedFile {
                        file_name: "../note.txt".to_string(),
                        bytes: b"hello".to_vec(),
                    },
                ],
            )
            .await?;

        assert_eq!(paths.len(), 1);
        let stored = PathBuf::from(&paths[0]);
        assert_eq!(stored.parent(), Some(dir.join("CMP-1").as_path()));
        assert!(stored.to_string_lossy().ends_with("_0_note.txt"));
        assert_eq!(tokio::fs::read(&stored).await?, b"hello");

        tokio::fs::remove_dir_all(&dir).await?;

        Ok(())
    }

    /// Tests storing two files that share a client name in one submission.
    ///
    /// Expected: two distinct paths, each holding its own content
    #[tokio::test]
    async fn keeps_same_named_files_apart() -> Result<(), AppError> {
        let dir = temp_upload_dir();
        let service = UploadService::new(&dir);

        let paths = service
            .store(
                "CMP-2",
                vec![
                    UploadedFile {
                        file_name: "receipt.pdf".to_string(),
                        bytes: b"first".to_vec(),
                    },
                    UploadedFile {
                        file_name: "receipt.pdf".to_string(),
                        bytes: b"second".to_vec(),
                    },
                ],
            )
            .await?;

        assert_eq!(paths.len(), 2);
        assert_ne!(paths[0], paths[1]);
        assert_eq!(tokio::fs::read(&paths[0]).await?, b"first");
        assert_eq!(tokio::fs::read(&paths[1]).await?, b"second");

        tokio::fs::remove_dir_all(&dir).await?;

        Ok(())
    }

    /// Tests storing into an upload root that is a regular file.
    ///
    /// Expected: IoErr and nothing written
    #[tokio::test]
    async fn fails_when_upload_root_is_a_file() -> Result<(), AppError> {
        let root = temp_upload_dir();
        tokio::fs::write(&root, b"not a directory").await?;
        let service = UploadService::new(&root);

        let result = service
            .store(
                "CMP-3",
                vec![UploadedFile {
                    file_name: "photo.png".to_string(),
                    bytes: b"png".to_vec(),
                }],
            )
            .await;

        assert!(matches!(result, Err(AppError::IoErr(_))));
        assert!(tokio::fs::metadata(&root).await?.is_file());

        tokio::fs::remove_file(&root).await?;

        Ok(())
    }
}
