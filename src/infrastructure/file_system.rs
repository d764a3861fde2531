use crate::core::interfaces::FileSystemService;
use crate::utils::{Logger, MinicatError, Result};
use std::path::Path;
use tokio::fs;

pub struct TokioFileSystemService;

#[async_trait::async_trait]
impl FileSystemService for TokioFileSystemService {
    async fn list_files(&self, dir: &Path) -> Result<Vec<String>> {
        let dir_err = |source: std::io::Error| MinicatError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        };

        let mut names = Vec::new();
        let mut entries = fs::read_dir(dir).await.map_err(dir_err)?;

        while let Some(entry) = entries.next_entry().await.map_err(dir_err)? {
            let file_type = entry.file_type().await.map_err(dir_err)?;
            if file_type.is_dir() {
                continue;
            }

            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => {
                    Logger::warn(&format!("Skipping non UTF-8 file name {:?}", name));
                }
            }
        }

        names.sort();
        Ok(names)
    }

    async fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).await.map_err(|source| MinicatError::FileRead {
            path: path.to_path_buf(),
            source,
        })
    }

    async fn remove_file(&self, path: &Path) -> Result<bool> {
        if fs::metadata(path).await.is_err() {
            return Ok(false);
        }

        fs::remove_file(path)
            .await
            .map_err(|source| MinicatError::Delete {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(true)
    }

    async fn write_file(&self, path: &Path, content: &[u8]) -> Result<()> {
        let write_err = |source: std::io::Error| MinicatError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(write_err)?;
            }
        }

        fs::write(path, content).await.map_err(write_err)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, std::fs::Permissions::from_mode(0o644))
                .await
                .map_err(write_err)?;
        }

        Ok(())
    }
}
