use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the FTDC client can run into.
///
/// The first block are failures of the log collection workflow itself. The
/// second block wraps the transport and local I/O errors the stages propagate
/// unchanged.
#[derive(Debug, Error)]
pub enum Error {
  #[error("{0}")]
  ReplicaSetNotFound(String),
  #[error("{0}")]
  CreateJob(String),
  #[error("{0}")]
  CheckJobStatus(String),
  #[error("{0}")]
  Download(String),
  #[error("{0}")]
  Authentication(String),

  #[error(transparent)]
  Diqwest(#[from] diqwest::error::Error),
  #[error(transparent)]
  Reqwest(#[from] reqwest::Error),
  #[error(transparent)]
  Json(#[from] serde_json::Error),
  #[error(transparent)]
  Io(#[from] std::io::Error),
  #[error(transparent)]
  Template(#[from] indicatif::style::TemplateError),
}

impl Error {
  /// `true` for failures of the workflow, `false` for transport or local errors.
  pub fn is_ftdc_error(&self) -> bool {
    matches!(
      self,
      Error::ReplicaSetNotFound(_)
        | Error::CreateJob(_)
        | Error::CheckJobStatus(_)
        | Error::Download(_)
        | Error::Authentication(_)
    )
  }
}
