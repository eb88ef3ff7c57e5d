//! Schedule stored in a GitHub repository, through the contents API.
//!
//! The version marker is the blob sha GitHub reports for the file. A `PUT`
//! carrying a stale sha is rejected by GitHub, which is what turns concurrent
//! edits into conflicts instead of lost updates.

use super::{RemoteStore, Snapshot, VersionMarker};
use crate::config::GithubConfig;
use crate::errors::{AppError, AppResult};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const ACCEPT: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";

pub struct GithubStore {
    client: Client,
    url: String,
    branch: String,
    token: Option<String>,
    commit_message: String,
    label: String,
}

/// Body of `GET /repos/{owner}/{repo}/contents/{path}`.
#[derive(Debug, Deserialize)]
pub struct ContentResponse {
    pub sha: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub encoding: String,
}

/// Body of the `PUT` request.
#[derive(Debug, Serialize)]
pub struct PutRequest<'a> {
    pub message: &'a str,
    pub content: String,
    pub branch: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct PutResponse {
    content: PutContent,
}

#[derive(Debug, Deserialize)]
struct PutContent {
    sha: String,
}

/// `{api}/repos/{owner}/{repo}/contents/{path}`
pub fn contents_url(api_url: &str, owner: &str, repo: &str, path: &str) -> String {
    format!(
        "{}/repos/{}/{}/contents/{}",
        api_url.trim_end_matches('/'),
        owner,
        repo,
        path.trim_start_matches('/')
    )
}

/// Decode the base64 payload; GitHub wraps it at 60 columns.
pub fn decode_content(resp: &ContentResponse) -> AppResult<Vec<u8>> {
    if !resp.encoding.is_empty() && resp.encoding != "base64" {
        return Err(AppError::Transport(format!(
            "unsupported content encoding '{}'",
            resp.encoding
        )));
    }

    let compact: String = resp
        .content
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| AppError::Transport(format!("invalid base64 content: {e}")))
}

pub fn put_request<'a>(
    message: &'a str,
    bytes: &[u8],
    branch: &'a str,
    expected: Option<&'a VersionMarker>,
) -> PutRequest<'a> {
    PutRequest {
        message,
        content: STANDARD.encode(bytes),
        branch,
        sha: expected.map(|m| m.as_str()),
    }
}

/// Map a non-success status of a `PUT` to an error.
///
/// 409 is a sha mismatch; 422 mentioning the sha means the file exists and no
/// sha was sent. Both mean someone else wrote first.
pub fn put_status_error(status: StatusCode, body: &str) -> AppError {
    match status {
        StatusCode::CONFLICT => AppError::Conflict("remote file changed".into()),
        StatusCode::UNPROCESSABLE_ENTITY if body.contains("sha") => {
            AppError::Conflict("remote file already exists".into())
        }
        _ => AppError::Transport(format!("GitHub returned HTTP {}: {}", status, short(body))),
    }
}

fn short(body: &str) -> String {
    let mut s: String = body.chars().take(200).collect();
    if body.chars().count() > 200 {
        s.push('…');
    }
    s
}

impl GithubStore {
    pub fn new(cfg: &GithubConfig) -> AppResult<Self> {
        if cfg.owner.trim().is_empty() || cfg.repo.trim().is_empty() {
            return Err(AppError::Config(
                "github.owner and github.repo must be set for the github backend".into(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .user_agent(concat!("truckplan/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let token = std::env::var(&cfg.token_env)
            .ok()
            .filter(|t| !t.trim().is_empty());

        Ok(Self {
            client,
            url: contents_url(&cfg.api_url, &cfg.owner, &cfg.repo, &cfg.path),
            branch: cfg.branch.clone(),
            token,
            commit_message: cfg.commit_message.clone(),
            label: format!("github:{}/{}/{}@{}", cfg.owner, cfg.repo, cfg.path, cfg.branch),
        })
    }

    fn authorized(&self, req: RequestBuilder) -> RequestBuilder {
        let req = req
            .header(reqwest::header::ACCEPT, ACCEPT)
            .header("X-GitHub-Api-Version", API_VERSION);
        match &self.token {
            Some(t) => req.bearer_auth(t),
            None => req,
        }
    }
}

impl RemoteStore for GithubStore {
    fn read(&self) -> AppResult<Option<Snapshot>> {
        let resp = self
            .authorized(self.client.get(&self.url))
            .query(&[("ref", self.branch.as_str())])
            .send()?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(AppError::Transport(format!(
                "GitHub returned HTTP {}: {}",
                status,
                short(&body)
            )));
        }

        let content: ContentResponse = resp.json()?;
        let bytes = decode_content(&content)?;

        Ok(Some(Snapshot {
            bytes,
            marker: VersionMarker::new(content.sha),
        }))
    }

    fn write(&self, bytes: &[u8], expected: Option<&VersionMarker>) -> AppResult<VersionMarker> {
        let body = put_request(&self.commit_message, bytes, &self.branch, expected);

        let resp = self.authorized(self.client.put(&self.url)).json(&body).send()?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().unwrap_or_default();
            return Err(put_status_error(status, &text));
        }

        let parsed: PutResponse = resp.json()?;
        Ok(VersionMarker::new(parsed.content.sha))
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
