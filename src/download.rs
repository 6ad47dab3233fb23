use std::path::{Path, PathBuf};

use futures::StreamExt;
use http::StatusCode;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::info;

use crate::error::{Error, Result};
use crate::progress::JobProgress;
use crate::session::AtlasSession;

const DOWNLOAD_BUFFER_SIZE: usize = 8192;

pub fn ftdc_file_name(replica_set: &str, job_id: &str) -> String {
  format!("ftdc_data_{replica_set}_job_{job_id}.tar.gz")
}

/// Streams the archive of a finished job to disk.
///
/// A mid-stream failure leaves the partially written file in place.
pub struct ArtifactDownloader<'a> {
  session: &'a AtlasSession,
  progress: &'a dyn JobProgress,
}

impl<'a> ArtifactDownloader<'a> {
  pub fn new(session: &'a AtlasSession, progress: &'a dyn JobProgress) -> Self {
    ArtifactDownloader { session, progress }
  }

  pub async fn download(
    &self,
    group_key: &str,
    job_id: &str,
    replica_set: &str,
    output_dir: &Path,
  ) -> Result<PathBuf> {
    let download_path = format!("{group_key}/logCollectionJobs/{job_id}/download");
    let response = self.session.get(&download_path).await?;

    if response.status() != StatusCode::OK {
      return Err(Error::Download(format!(
        "Failed to download FTDC data. Status: {status}, URL: {url}",
        status = response.status(),
        url = self.session.url(&download_path)
      )));
    }

    self.progress.download_started(job_id);
    let file_path = output_dir.join(ftdc_file_name(replica_set, job_id));
    info!(%job_id, path = %file_path.display(), "downloading FTDC data");

    let mut out = BufWriter::with_capacity(DOWNLOAD_BUFFER_SIZE, File::create(&file_path).await?);
    let mut body = response.bytes_stream();
    let mut written = 0u64;
    while let Some(chunk) = body.next().await {
      let chunk = chunk?;
      out.write_all(&chunk).await?;
      written += chunk.len() as u64;
    }
    out.flush().await?;

    info!(%job_id, bytes = written, "FTDC data downloaded");
    self.progress.download_finished(job_id, &file_path);
    Ok(file_path)
  }
}
