use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{Error, Result};
use crate::model::JobState;

/// Receives the user facing milestones of an FTDC run.
pub trait JobProgress: Send + Sync {
  /// Called once per `IN_PROGRESS` observation, right before the poller waits.
  fn job_in_progress(&self, job_id: &str);
  fn job_succeeded(&self, job_id: &str, state: JobState);
  fn job_failed(&self, job_id: &str, state: JobState);
  fn download_started(&self, job_id: &str);
  fn download_finished(&self, job_id: &str, path: &Path);
  /// Called once when a run ends with an error, after any stage specific callback.
  fn aborted(&self, error: &Error);
}

pub struct SilentProgress;

impl JobProgress for SilentProgress {
  fn job_in_progress(&self, _job_id: &str) {}
  fn job_succeeded(&self, _job_id: &str, _state: JobState) {}
  fn job_failed(&self, _job_id: &str, _state: JobState) {}
  fn download_started(&self, _job_id: &str) {}
  fn download_finished(&self, _job_id: &str, _path: &Path) {}
  fn aborted(&self, _error: &Error) {}
}

/// Renders the milestones on a terminal spinner.
pub struct SpinnerProgress {
  spinner: ProgressBar,
}

impl SpinnerProgress {
  pub fn new(message: String) -> Result<Self> {
    Ok(SpinnerProgress { spinner: SpinnerHelper::create(message)? })
  }
}

impl JobProgress for SpinnerProgress {
  fn job_in_progress(&self, job_id: &str) {
    self.spinner.set_message(format!("IN_PROGRESS – job id: {job_id}"));
  }

  fn job_succeeded(&self, job_id: &str, state: JobState) {
    self
      .spinner
      .set_message(format!("{state} – FTDC data for job with id {job_id} will be downloaded."));
  }

  fn job_failed(&self, job_id: &str, state: JobState) {
    self.spinner.abandon_with_message(format!("{state} – job with id {job_id} did not succeed."));
  }

  fn download_started(&self, job_id: &str) {
    self.spinner.set_message(format!("PROGRESS – Download FTDC data for job with id: {job_id}"));
  }

  fn download_finished(&self, job_id: &str, path: &Path) {
    self.spinner.finish_with_message(format!(
      "SUCCESS – FTDC data for job with id {job_id} downloaded to {path}.",
      path = path.display()
    ));
  }

  fn aborted(&self, error: &Error) {
    if !self.spinner.is_finished() {
      self.spinner.abandon_with_message(format!("ABORTED – {error}"));
    }
  }
}

pub struct SpinnerHelper;

impl SpinnerHelper {
  pub fn create(message: String) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner.set_style(
      ProgressStyle::default_spinner()
        // For more spinners check out the cli-spinners project:
        // https://github.com/sindresorhus/cli-spinners/blob/master/spinners.json
        .tick_strings(&[
          "□ □ □ □ □",
          "■ □ □ □ □",
          "□ ■ □ □ □",
          "□ □ ■ □ □",
          "□ □ □ ■ □",
          "□ □ □ □ ■",
          "■ ■ ■ ■ ■",
        ])
        .template("{spinner:.blue} {msg}")?,
    );
    spinner.set_message(message);
    Ok(spinner)
  }
}
