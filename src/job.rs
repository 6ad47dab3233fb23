use http::StatusCode;
use tracing::info;

use crate::error::{Error, Result};
use crate::model::{JobId, LogCollectionJob};
use crate::session::AtlasSession;

/// Creates FTDC log collection jobs. A single attempt, no retries.
pub struct JobSubmitter<'a> {
  session: &'a AtlasSession,
}

impl<'a> JobSubmitter<'a> {
  pub fn new(session: &'a AtlasSession) -> Self {
    JobSubmitter { session }
  }

  pub async fn submit(&self, group_key: &str, replica_set: &str, byte_size: u64) -> Result<JobId> {
    if byte_size == 0 {
      return Err(Error::CreateJob(
        "Failed to create FTDC job. The requested byte size must be at least 1".to_string(),
      ));
    }
    info!(%group_key, %replica_set, byte_size, "creating FTDC log collection job");

    let create_ftdc_job = self
      .session
      .post_json(
        &format!("{group_key}/logCollectionJobs"),
        &LogCollectionJob::from(replica_set, byte_size),
      )
      .await?;

    match create_ftdc_job.status() {
      StatusCode::CREATED => {
        let job_id = serde_json::from_str::<JobId>(&create_ftdc_job.text().await?)?;
        info!(%group_key, job_id = %job_id, "created FTDC log collection job");
        Ok(job_id)
      }
      status => Err(Error::CreateJob(format!(
        "Failed to create FTDC job. Status: {status}, Response: {body}",
        body = create_ftdc_job.text().await?
      ))),
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{body_json, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::JobSubmitter;
  use crate::error::Error;
  use crate::model::JobId;
  use crate::session::tests::session_for;

  #[tokio::test]
  async fn given_replica_set_when_submit_then_give_job_id() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/my-group-key/logCollectionJobs"))
      .and(body_json(json!({
        "resourceType": "REPLICASET",
        "resourceName": "another-rs-shard-00",
        "redacted": true,
        "sizeRequestedPerFileBytes": 10,
        "logTypes": ["FTDC"],
      })))
      .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "new-job-id-73"})))
      .expect(1)
      .mount(&server)
      .await;
    let session = session_for(&server);

    // When
    let response = JobSubmitter::new(&session)
      .submit("my-group-key", "another-rs-shard-00", 10)
      .await
      .unwrap();

    // Then
    assert_eq!(response, JobId { id: String::from("new-job-id-73") });
  }

  #[tokio::test]
  async fn given_ok_instead_of_created_when_submit_then_create_job_error() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/my-group-key/logCollectionJobs"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "new-job-id-73"})))
      .expect(1)
      .mount(&server)
      .await;
    let session = session_for(&server);

    // When
    let error = JobSubmitter::new(&session)
      .submit("my-group-key", "another-rs-shard-00", 10)
      .await
      .unwrap_err();

    // Then
    assert!(matches!(error, Error::CreateJob(_)));
    assert!(error.to_string().contains("Status: 200 OK"));
  }

  #[tokio::test]
  async fn given_bad_request_when_submit_then_create_job_error_with_body() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/my-group-key/logCollectionJobs"))
      .respond_with(ResponseTemplate::new(400).set_body_string("INVALID_RESOURCE"))
      .mount(&server)
      .await;
    let session = session_for(&server);

    // When
    let error = JobSubmitter::new(&session)
      .submit("my-group-key", "unknown", 10)
      .await
      .unwrap_err();

    // Then
    assert!(matches!(error, Error::CreateJob(_)));
    assert!(error.to_string().ends_with("Response: INVALID_RESOURCE"));
  }

  #[tokio::test]
  async fn given_zero_byte_size_when_submit_then_no_job_is_posted() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/my-group-key/logCollectionJobs"))
      .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "new-job-id-73"})))
      .expect(0)
      .mount(&server)
      .await;
    let session = session_for(&server);

    // When
    let error = JobSubmitter::new(&session)
      .submit("my-group-key", "another-rs-shard-00", 0)
      .await
      .unwrap_err();

    // Then
    assert!(matches!(error, Error::CreateJob(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
  }
}
