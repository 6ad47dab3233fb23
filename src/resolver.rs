use http::StatusCode;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::model::{Clusters, Shard};
use crate::session::AtlasSession;

/// Maps a user supplied replica set or shard name to the replica set name Atlas knows.
pub struct ReplicaSetResolver<'a> {
  session: &'a AtlasSession,
}

impl<'a> ReplicaSetResolver<'a> {
  pub fn new(session: &'a AtlasSession) -> Self {
    ReplicaSetResolver { session }
  }

  pub async fn resolve(&self, group_key: &str, replica_set_name: &str) -> Result<String> {
    let processes = self.session.get(&format!("{group_key}/processes")).await?;

    match processes.status() {
      StatusCode::OK => {
        let shards = serde_json::from_str::<Clusters>(&processes.text().await?)?.results;
        debug!(%group_key, processes = shards.len(), "listed processes");

        let replica_set = first_match(&shards, replica_set_name)?;
        info!(%group_key, %replica_set, "resolved replica set");
        Ok(replica_set)
      }
      status => Err(Error::ReplicaSetNotFound(format!(
        "Failed to get processes. Status: {status}, Response: {body}",
        body = processes.text().await?
      ))),
    }
  }
}

/// Picks the first process whose replica set name or alias contains `name`.
///
/// Only the first hit counts. If it carries no replica set name the lookup
/// fails, later hits are not considered.
pub fn first_match(shards: &[Shard], name: &str) -> Result<String> {
  let shard = shards
    .iter()
    .find(|s| {
      let in_replica_set = s
        .replica_set_name
        .as_deref()
        .is_some_and(|rs| !rs.is_empty() && rs.contains(name));
      in_replica_set || s.user_alias.contains(name)
    })
    .ok_or_else(|| {
      Error::ReplicaSetNotFound(format!("No replica set found that corresponds to {name}"))
    })?;

  match shard.replica_set_name.as_deref() {
    Some(replica_set) if !replica_set.is_empty() => Ok(replica_set.to_string()),
    _ => Err(Error::ReplicaSetNotFound(format!(
      "Replica set name not found in matching shard: {alias}",
      alias = shard.user_alias
    ))),
  }
}
