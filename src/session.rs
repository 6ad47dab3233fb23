//! Authenticated access to the Atlas groups API.

use std::fmt::{Debug, Formatter};

use diqwest::WithDigestAuth;
use http::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::Serialize;
use tracing::debug;

use crate::config::AtlasConfig;
use crate::error::{Error, Result};

/// Public/private key pair of an Atlas API key.
#[derive(Clone)]
pub struct Credentials {
  public: String,
  private: String,
}

impl Credentials {
  pub fn new(public: impl Into<String>, private: impl Into<String>) -> Result<Self> {
    let (public, private) = (public.into(), private.into());
    if public.is_empty() || private.is_empty() {
      return Err(Error::Authentication(
        "Both the public and the private key of the Atlas API key are required".to_string(),
      ));
    }
    Ok(Credentials { public, private })
  }
}

impl Debug for Credentials {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Credentials")
      .field("public", &self.public)
      .field("private", &"***")
      .finish()
  }
}

/// One HTTP client plus the credentials every request is signed with.
///
/// Built once per run and handed to each stage by reference. Requests go
/// through digest challenge-response, the private key never leaves the process.
#[derive(Debug)]
pub struct AtlasSession {
  client: Client,
  credentials: Credentials,
  config: AtlasConfig,
}

impl AtlasSession {
  pub fn new(credentials: Credentials, config: AtlasConfig) -> Self {
    AtlasSession::with_client(Client::new(), credentials, config)
  }

  pub fn with_client(client: Client, credentials: Credentials, config: AtlasConfig) -> Self {
    AtlasSession { client, credentials, config }
  }

  pub fn config(&self) -> &AtlasConfig {
    &self.config
  }

  pub fn url(&self, path: &str) -> String {
    format!(
      "{base}/{path}",
      base = self.config.base_url.trim_end_matches('/'),
      path = path.trim_start_matches('/')
    )
  }

  pub async fn get(&self, path: &str) -> Result<Response> {
    let url = self.url(path);
    debug!(%url, "GET");
    let response = self
      .client
      .get(&url)
      .send_with_digest_auth(&self.credentials.public, &self.credentials.private)
      .await?;
    debug!(%url, status = %response.status(), "GET answered");
    Ok(response)
  }

  pub async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Response> {
    let url = self.url(path);
    debug!(%url, "POST");
    let response = self
      .client
      .post(&url)
      .header(CONTENT_TYPE, "application/json; charset=utf-8")
      .json(body)
      .send_with_digest_auth(&self.credentials.public, &self.credentials.private)
      .await?;
    debug!(%url, status = %response.status(), "POST answered");
    Ok(response)
  }
}
