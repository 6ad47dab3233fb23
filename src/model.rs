use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const RESOURCE_TYPE_REPLICA_SET: &str = "REPLICASET";
pub const LOG_TYPE_FTDC: &str = "FTDC";

/// Body of the log collection job creation request.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogCollectionJob<'a> {
  resource_type: &'a str,
  resource_name: &'a str,
  redacted: bool,
  size_requested_per_file_bytes: u64,
  log_types: Vec<&'a str>,
}

impl LogCollectionJob<'_> {
  pub(crate) fn from(replica_set_name: &str, bytes: u64) -> LogCollectionJob {
    LogCollectionJob {
      resource_name: replica_set_name,
      size_requested_per_file_bytes: bytes,
      resource_type: RESOURCE_TYPE_REPLICA_SET,
      redacted: true,
      log_types: vec![LOG_TYPE_FTDC],
    }
  }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Clusters {
  #[serde(default)]
  pub results: Vec<Shard>,
}

/// One process of a cluster as listed by the processes endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Shard {
  #[serde(default)]
  pub user_alias: String,
  #[serde(default)]
  pub type_name: String,
  pub replica_set_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobId {
  pub id: String,
}

impl Display for JobId {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.id)
  }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobStatus {
  #[serde(default)]
  pub id: String,
  #[serde(default)]
  pub download_url: String,
  #[serde(default)]
  pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
  Success,
  Failure,
  InProgress,
  MarkedForExpiry,
  Expired,
}

impl JobState {
  pub fn is_terminal(self) -> bool {
    !matches!(self, JobState::InProgress)
  }

  pub fn is_success(self) -> bool {
    matches!(self, JobState::Success | JobState::MarkedForExpiry)
  }

  pub fn as_str(self) -> &'static str {
    match self {
      JobState::Success => "SUCCESS",
      JobState::Failure => "FAILURE",
      JobState::InProgress => "IN_PROGRESS",
      JobState::MarkedForExpiry => "MARKED_FOR_EXPIRY",
      JobState::Expired => "EXPIRED",
    }
  }
}

impl Display for JobState {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for JobState {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Error> {
    match s {
      "SUCCESS" => Ok(JobState::Success),
      "FAILURE" => Ok(JobState::Failure),
      "IN_PROGRESS" => Ok(JobState::InProgress),
      "MARKED_FOR_EXPIRY" => Ok(JobState::MarkedForExpiry),
      "EXPIRED" => Ok(JobState::Expired),
      unknown => Err(Error::CheckJobStatus(format!("Unknown job status: {unknown}"))),
    }
  }
}
