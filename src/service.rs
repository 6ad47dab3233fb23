use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::download::ArtifactDownloader;
use crate::error::Result;
use crate::job::JobSubmitter;
use crate::poller::JobPoller;
use crate::progress::{JobProgress, SilentProgress};
use crate::resolver::ReplicaSetResolver;
use crate::session::AtlasSession;

#[async_trait]
pub trait FtdcLoader {
  /// Resolves the replica set, runs an FTDC log collection job for it and
  /// downloads the result into `output_dir` (current directory if `None`).
  async fn get_ftdc_data(
    &self,
    group_key: &str,
    replica_set_name: &str,
    byte_size: u64,
    output_dir: Option<&Path>,
  ) -> Result<PathBuf>;
}

pub struct FtdcDataService {
  session: AtlasSession,
  progress: Arc<dyn JobProgress>,
}

impl FtdcDataService {
  pub fn new(session: AtlasSession) -> Self {
    FtdcDataService { session, progress: Arc::new(SilentProgress) }
  }

  pub fn with_progress(mut self, progress: Arc<dyn JobProgress>) -> Self {
    self.progress = progress;
    self
  }

  async fn run_stages(
    &self,
    group_key: &str,
    replica_set_name: &str,
    byte_size: u64,
    output_dir: &Path,
  ) -> Result<PathBuf> {
    let progress = self.progress.as_ref();

    info!(%group_key, %replica_set_name, "looking for replica set");
    let replica_set = ReplicaSetResolver::new(&self.session)
      .resolve(group_key, replica_set_name)
      .await?;

    let job_id = JobSubmitter::new(&self.session)
      .submit(group_key, &replica_set, byte_size)
      .await?
      .id;

    let _download_url = JobPoller::new(&self.session, progress)
      .await_completion(group_key, &job_id)
      .await?;

    ArtifactDownloader::new(&self.session, progress)
      .download(group_key, &job_id, &replica_set, output_dir)
      .await
  }
}

/// The given directory, or the current working directory if there is none.
pub fn output_dir_or_cwd(output_dir: Option<&Path>) -> Result<PathBuf> {
  match output_dir {
    Some(dir) => Ok(dir.to_path_buf()),
    None => Ok(env::current_dir()?),
  }
}

#[async_trait]
impl FtdcLoader for FtdcDataService {
  async fn get_ftdc_data(
    &self,
    group_key: &str,
    replica_set_name: &str,
    byte_size: u64,
    output_dir: Option<&Path>,
  ) -> Result<PathBuf> {
    let result = match output_dir_or_cwd(output_dir) {
      Ok(dir) => self.run_stages(group_key, replica_set_name, byte_size, &dir).await,
      Err(error) => Err(error),
    };

    if let Err(error) = &result {
      self.progress.aborted(error);
    }
    result
  }
}
