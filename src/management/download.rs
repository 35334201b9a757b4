use std::path::{Path, PathBuf};

pub struct DownloadManager {
    target_dir: PathBuf,
}

impl DownloadManager {
    pub fn new(target_dir: PathBuf) -> Self {
        Self { target_dir }
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub async fn ensure_dir(&self) -> Result<(), String> {
        async_fs::create_dir_all(&self.target_dir)
            .await
            .map_err(|e| e.to_string())
    }

    pub async fn write_track(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, String> {
        let path = self.target_dir.join(filename);
        async_fs::write(&path, bytes)
            .await
            .map_err(|e| e.to_string())?;
        Ok(path)
    }
}
