use std::str::FromStr;
use std::time::Duration;

use http::StatusCode;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::model::{JobState, JobStatus};
use crate::progress::JobProgress;
use crate::session::AtlasSession;

/// Queries a log collection job until it reaches a terminal state.
///
/// The first query is issued right away. Every `IN_PROGRESS` answer is
/// followed by one wait of `poll_interval`. Without `max_wait` there is no
/// bound on the number of queries.
pub struct JobPoller<'a> {
  session: &'a AtlasSession,
  progress: &'a dyn JobProgress,
  poll_interval: Duration,
  max_wait: Option<Duration>,
}

impl<'a> JobPoller<'a> {
  pub fn new(session: &'a AtlasSession, progress: &'a dyn JobProgress) -> Self {
    let config = session.config();
    JobPoller {
      session,
      progress,
      poll_interval: config.poll_interval,
      max_wait: config.max_wait,
    }
  }

  pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
    self.poll_interval = poll_interval;
    self
  }

  pub fn with_max_wait(mut self, max_wait: Option<Duration>) -> Self {
    self.max_wait = max_wait;
    self
  }

  /// Returns the download URL of the finished job, verbatim.
  pub async fn await_completion(&self, group_key: &str, job_id: &str) -> Result<String> {
    let started = Instant::now();
    let mut queries = 0u64;

    loop {
      queries += 1;
      let job_status = self.query(group_key, job_id).await?;
      let state = JobState::from_str(&job_status.status)?;
      debug!(%job_id, %state, queries, "polled job status");

      if state.is_success() {
        info!(%job_id, %state, queries, "job finished");
        self.progress.job_succeeded(job_id, state);
        return Ok(job_status.download_url);
      }
      if state.is_terminal() {
        warn!(%job_id, %state, "job did not succeed");
        self.progress.job_failed(job_id, state);
        return Err(Error::CheckJobStatus(format!("Job {job_id} failed with status: {state}")));
      }

      if let Some(max_wait) = self.max_wait {
        if started.elapsed() + self.poll_interval > max_wait {
          warn!(%job_id, queries, "giving up on job, maximum wait exceeded");
          return Err(Error::CheckJobStatus(format!(
            "Job {job_id} did not finish within {secs}s",
            secs = max_wait.as_secs()
          )));
        }
      }
      self.progress.job_in_progress(job_id);
      sleep(self.poll_interval).await;
    }
  }

  async fn query(&self, group_key: &str, job_id: &str) -> Result<JobStatus> {
    let check_job_status = self
      .session
      .get(&format!("{group_key}/logCollectionJobs/{job_id}"))
      .await?;

    match check_job_status.status() {
      StatusCode::OK => Ok(serde_json::from_str::<JobStatus>(&check_job_status.text().await?)?),
      status => Err(Error::CheckJobStatus(format!(
        "Failed to check job status. Status: {status}, Response: {body}",
        body = check_job_status.text().await?
      ))),
    }
  }
}
