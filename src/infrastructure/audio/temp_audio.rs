use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Request-scoped temporary audio file.
///
/// Each instance gets a unique name under the OS temp dir, so concurrent
/// uploads never touch each other's data. The file is removed on drop,
/// best-effort: a failed deletion is ignored, not retried.
pub struct TempAudioFile {
    path: PathBuf,
}

impl TempAudioFile {
    pub async fn write(data: &[u8]) -> std::io::Result<Self> {
        let path = std::env::temp_dir().join(format!("recording-{}.wav", Uuid::new_v4()));
        tokio::fs::write(&path, data).await?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempAudioFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
