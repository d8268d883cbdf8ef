// src/services/storage.rs
//! Resume object storage: a local directory or an S3 bucket

use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

use crate::common::config::{AppConfig, StorageType};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("S3 operation failed: {0}")]
    S3(String),

    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid object key: {0}")]
    InvalidKey(String),
}

pub enum ResumeStorage {
    Local {
        root: PathBuf,
    },
    S3 {
        client: S3Client,
        bucket: String,
        region: String,
    },
}

impl ResumeStorage {
    pub fn local(root: impl Into<PathBuf>) -> Self {
        ResumeStorage::Local { root: root.into() }
    }

    pub async fn from_config(config: &AppConfig) -> Self {
        match (&config.storage_type, &config.s3_bucket) {
            (StorageType::S3, Some(bucket)) => {
                let region = config
                    .aws_region
                    .clone()
                    .unwrap_or_else(|| "us-east-1".to_string());

                let aws_config = aws_config::defaults(BehaviorVersion::latest())
                    .region(Region::new(region.clone()))
                    .load()
                    .await;

                info!(bucket = %bucket, region = %region, "Using S3 resume storage");
                ResumeStorage::S3 {
                    client: S3Client::new(&aws_config),
                    bucket: bucket.clone(),
                    region,
                }
            }
            _ => {
                info!(dir = %config.resumes_dir.display(), "Using local resume storage");
                Self::local(config.resumes_dir.clone())
            }
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, ResumeStorage::Local { .. })
    }

    /// Stores an object and returns its public URL.
    ///
    /// Local objects have no public URL of their own, so `local_url` is
    /// returned for them (the API route that serves the file).
    pub async fn put(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
        local_url: &str,
    ) -> Result<String, StorageError> {
        match self {
            ResumeStorage::Local { root } => {
                let path = local_path(root, key)?;
                if let Some(parent) = path.parent() {
                    tokio::fs::create_dir_all(parent).await?;
                }
                tokio::fs::write(&path, data).await?;
                info!(key = %key, "Resume stored on local disk");
                Ok(local_url.to_string())
            }
            ResumeStorage::S3 {
                client,
                bucket,
                region,
            } => {
                client
                    .put_object()
                    .bucket(bucket)
                    .key(key)
                    .body(ByteStream::from(Bytes::from(data)))
                    .content_type(content_type)
                    .send()
                    .await
                    .map_err(|e| {
                        error!(error = %e, key = %key, "Failed to upload resume to S3");
                        StorageError::S3(format!("Upload failed: {}", e))
                    })?;

                info!(key = %key, bucket = %bucket, "Resume uploaded to S3");
                Ok(format!("https://{}.s3.{}.amazonaws.com/{}", bucket, region, key))
            }
        }
    }

    /// Reads a locally stored object. S3 objects are served from their own URL.
    pub async fn read_local(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match self {
            ResumeStorage::Local { root } => {
                let path = local_path(root, key)?;
                match tokio::fs::read(&path).await {
                    Ok(bytes) => Ok(Some(bytes)),
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
                    Err(e) => Err(e.into()),
                }
            }
            ResumeStorage::S3 { .. } => Ok(None),
        }
    }

    pub async fn delete(&self, key: &str) -> Result<(), StorageError> {
        match self {
            ResumeStorage::Local { root } => {
                let path = local_path(root, key)?;
                match tokio::fs::remove_file(&path).await {
                    Ok(()) => Ok(()),
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                    Err(e) => Err(e.into()),
                }
            }
            ResumeStorage::S3 { client, bucket, .. } => {
                client
                    .delete_object()
                    .bucket(bucket)
                    .key(key)
                    .send()
                    .await
                    .map_err(|e| {
                        error!(error = %e, key = %key, "Failed to delete S3 object");
                        StorageError::S3(format!("Delete failed: {}", e))
                    })?;
                info!(key = %key, "Resume deleted from S3");
                Ok(())
            }
        }
    }
}

/// Resolves a key under `root`, rejecting absolute paths and `..`
fn local_path(root: &Path, key: &str) -> Result<PathBuf, StorageError> {
    let relative = Path::new(key);
    let is_plain = relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)));

    if key.is_empty() || !is_plain {
        return Err(StorageError::InvalidKey(key.to_string()));
    }

    Ok(root.join(relative))
}
