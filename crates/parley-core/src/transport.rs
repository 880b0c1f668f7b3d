//! Request file transport and cleanup guard
//!
//! Each exchange serializes its batch as `{ "questions": [...] }` into a
//! uniquely named file that the presenter reads via `--input`. The file is
//! owned by a [`RequestFile`] and removed when it is dropped, so every exit
//! path of the exchange (success, cancellation, error, panic unwinding)
//! cleans up after itself.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;
use uuid::Uuid;

use crate::error::{AskError, ParleyResult};
use crate::question::QuestionBatch;

/// On-disk shape of a request file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestPayload {
    pub questions: QuestionBatch,
}

#[derive(Serialize)]
struct OutgoingPayload<'a> {
    questions: &'a QuestionBatch,
}

/// An ephemeral request file, deleted on drop
#[derive(Debug)]
pub struct RequestFile {
    path: PathBuf,
    released: bool,
}

impl RequestFile {
    /// Serialize `batch` into a fresh `<prefix><uuid>.json` file inside `dir`.
    ///
    /// The file is fully written and closed before this returns. If writing
    /// fails half-way the partial file is removed again.
    pub async fn write(batch: &QuestionBatch, dir: &Path, prefix: &str) -> ParleyResult<Self> {
        let body = serde_json::to_vec(&OutgoingPayload { questions: batch })
            .map_err(|e| AskError::transport_write(format!("Failed to serialize questions: {}", e)))?;

        fs::create_dir_all(dir).await.map_err(|e| {
            AskError::transport_write_at(
                format!("Failed to create request directory: {}", e),
                dir.display().to_string(),
            )
        })?;

        let path = dir.join(format!("{}{}.json", prefix, Uuid::new_v4()));
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| write_error(&path, e))?;

        // From here on the guard owns the file, including a partial one.
        let guard = Self {
            path,
            released: false,
        };

        file.write_all(&body)
            .await
            .map_err(|e| write_error(&guard.path, e))?;
        file.flush().await.map_err(|e| write_error(&guard.path, e))?;
        drop(file);

        debug!(
            "wrote request file {} ({} bytes, {} questions)",
            guard.path.display(),
            body.len(),
            batch.len()
        );
        Ok(guard)
    }

    /// Path handed to the presenter
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file back
    pub async fn read_payload(&self) -> ParleyResult<RequestPayload> {
        let content = fs::read(&self.path).await.map_err(|e| {
            AskError::io_with_path(e.to_string(), self.path.display().to_string())
        })?;
        serde_json::from_slice(&content).map_err(|e| {
            AskError::io_with_path(
                format!("Request file is not a valid payload: {}", e),
                self.path.display().to_string(),
            )
        })
    }

    /// Remove the file now. Failures are logged and swallowed.
    pub fn remove(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if let Err(e) = std::fs::remove_file(&self.path) {
            debug!(
                "ignoring failure to remove request file {}: {}",
                self.path.display(),
                e
            );
        }
    }
}

impl Drop for RequestFile {
    fn drop(&mut self) {
        self.release();
    }
}

fn write_error(path: &Path, err: std::io::Error) -> AskError {
    AskError::transport_write_at(
        format!("Failed to write request file: {}", err),
        path.display().to_string(),
    )
}
