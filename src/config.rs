//! Runtime settings of the Atlas client.

use std::time::Duration;

use serde::Deserialize;

pub const ATLAS_GROUPS_URL: &str = "https://cloud.mongodb.com/api/atlas/v1.0/groups";
pub const DEFAULT_BYTE_SIZE: u64 = 10_000_000;
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

#[derive(Clone, Debug, Deserialize)]
pub struct AtlasConfig {
  /// Base URL of the groups API, every endpoint is addressed below it.
  #[serde(default = "default_base_url")]
  pub base_url: String,
  /// Pause between two job status queries.
  #[serde(default = "default_poll_interval", with = "seconds")]
  pub poll_interval: Duration,
  /// Upper bound for waiting on a job. `None` polls until the job is terminal.
  #[serde(default, with = "optional_seconds")]
  pub max_wait: Option<Duration>,
}

impl Default for AtlasConfig {
  fn default() -> Self {
    AtlasConfig {
      base_url: default_base_url(),
      poll_interval: default_poll_interval(),
      max_wait: None,
    }
  }
}

impl AtlasConfig {
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
    self.poll_interval = poll_interval;
    self
  }

  pub fn with_max_wait(mut self, max_wait: Option<Duration>) -> Self {
    self.max_wait = max_wait;
    self
  }
}

fn default_base_url() -> String {
  String::from(ATLAS_GROUPS_URL)
}

fn default_poll_interval() -> Duration {
  DEFAULT_POLL_INTERVAL
}

mod seconds {
  use std::time::Duration;

  use serde::{Deserialize, Deserializer};

  pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    u64::deserialize(deserializer).map(Duration::from_secs)
  }
}

mod optional_seconds {
  use std::time::Duration;

  use serde::{Deserialize, Deserializer};

  pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
  ) -> Result<Option<Duration>, D::Error> {
    Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_secs))
  }
}
