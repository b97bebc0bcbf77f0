//! GraphQL access to the platform.
//!
//! Two queries are consumed: the recent-accepted-submissions list and the
//! per-problem code snippets. Both sit behind small capability traits so
//! the pipeline can run against in-memory fakes.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

use leetsync_core::{CodeSnippet, LangTag, Slug, Submission, SyncConfig};

use crate::error::SyncError;
use crate::pacing::{FixedDelay, Pacer};

const REFERER: &str = "https://leetcode.com";
const USER_AGENT: &str = "Mozilla/5.0";

pub const SUBMISSIONS_QUERY: &str = r#"
query recentAcSubmissions($username: String!, $limit: Int!) {
  recentAcSubmissionList(username: $username, limit: $limit) {
    title
    titleSlug
    timestamp
    lang
  }
}
"#;

pub const SNIPPETS_QUERY: &str = r#"
query questionData($titleSlug: String!) {
  question(titleSlug: $titleSlug) {
    codeSnippets {
      lang
      code
    }
  }
}
"#;

// ---------------------------------------------------------------------------
// Capability traits
// ---------------------------------------------------------------------------

/// Lists a user's most recent accepted submissions.
pub trait SubmissionSource {
    /// Platform order, not re-sorted. An unknown user or a user with no
    /// accepted submissions yields `Ok(vec![])`.
    fn recent_accepted(&self, username: &str, limit: u32) -> Result<Vec<Submission>, SyncError>;
}

/// Fetches every code snippet stored for a problem.
pub trait SnippetSource {
    /// Never fails: any transport, status or decode problem is logged and
    /// reported as no snippets.
    fn snippets(&self, slug: &Slug) -> Vec<CodeSnippet>;
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

#[derive(Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecentAcData {
    recent_ac_submission_list: Option<Vec<RawSubmission>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSubmission {
    title: String,
    title_slug: String,
    timestamp: RawTimestamp,
    lang: String,
}

/// The platform sends epoch seconds as a string; accept plain numbers too.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Int(i64),
    Text(String),
}

impl RawTimestamp {
    fn seconds(&self) -> Option<i64> {
        match self {
            RawTimestamp::Int(n) => Some(*n),
            RawTimestamp::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl TryFrom<RawSubmission> for Submission {
    type Error = String;

    fn try_from(raw: RawSubmission) -> Result<Self, Self::Error> {
        let timestamp = raw
            .timestamp
            .seconds()
            .ok_or_else(|| format!("submission '{}' has a non-numeric timestamp", raw.title))?;
        Ok(Submission {
            title: raw.title,
            slug: Slug::from(raw.title_slug),
            timestamp,
            lang: LangTag::from(raw.lang),
        })
    }
}

#[derive(Deserialize)]
struct QuestionData {
    question: Option<RawQuestion>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    code_snippets: Option<Vec<RawSnippet>>,
}

#[derive(Deserialize)]
struct RawSnippet {
    lang: String,
    code: String,
}

/// Why a single GraphQL POST did not produce a decoded body.
#[derive(Debug)]
enum RequestError {
    Status(u16),
    Transport(String),
    Decode(String),
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestError::Status(code) => write!(f, "HTTP status {code}"),
            RequestError::Transport(msg) => write!(f, "transport error: {msg}"),
            RequestError::Decode(msg) => write!(f, "malformed response: {msg}"),
        }
    }
}

// ---------------------------------------------------------------------------
// LeetCodeClient
// ---------------------------------------------------------------------------

/// Anonymous client for the platform's public GraphQL endpoint.
pub struct LeetCodeClient {
    agent: ureq::Agent,
    endpoint: String,
    pacer: Box<dyn Pacer>,
}

impl LeetCodeClient {
    pub fn new(endpoint: impl Into<String>, pacer: Box<dyn Pacer>) -> Self {
        let agent = ureq::AgentBuilder::new().user_agent(USER_AGENT).build();
        Self {
            agent,
            endpoint: endpoint.into(),
            pacer,
        }
    }

    /// Client for `config.endpoint`, pausing `config.request_delay()` after
    /// each snippet fetch.
    pub fn from_config(config: &SyncConfig) -> Self {
        Self::new(
            config.endpoint.clone(),
            Box::new(FixedDelay(config.request_delay())),
        )
    }

    fn post<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<GraphqlResponse<T>, RequestError> {
        let body = GraphqlRequest { query, variables };
        tracing::debug!("POST {}", self.endpoint);

        let response = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json")
            .set("Referer", REFERER)
            .send_json(&body)
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => RequestError::Status(code),
                ureq::Error::Transport(t) => RequestError::Transport(t.to_string()),
            })?;

        response
            .into_json::<GraphqlResponse<T>>()
            .map_err(|e| RequestError::Decode(e.to_string()))
    }

    fn fetch_snippets(&self, slug: &Slug) -> Result<Vec<CodeSnippet>, RequestError> {
        let response: GraphqlResponse<QuestionData> =
            self.post(SNIPPETS_QUERY, json!({ "titleSlug": slug.0 }))?;

        for err in &response.errors {
            tracing::warn!("snippets for '{slug}': {}", err.message);
        }

        let snippets = response
            .data
            .and_then(|d| d.question)
            .and_then(|q| q.code_snippets)
            .unwrap_or_default()
            .into_iter()
            .map(|raw| CodeSnippet {
                lang: LangTag::from(raw.lang),
                code: raw.code,
            })
            .collect();
        Ok(snippets)
    }
}

impl SubmissionSource for LeetCodeClient {
    fn recent_accepted(&self, username: &str, limit: u32) -> Result<Vec<Submission>, SyncError> {
        let listing_err = |reason: String| SyncError::Listing {
            username: username.to_string(),
            reason,
        };

        let response: GraphqlResponse<RecentAcData> = self
            .post(
                SUBMISSIONS_QUERY,
                json!({ "username": username, "limit": limit }),
            )
            .map_err(|e| listing_err(e.to_string()))?;

        for err in &response.errors {
            tracing::warn!("submissions for '{username}': {}", err.message);
        }

        let Some(data) = response.data else {
            let messages: Vec<&str> = response.errors.iter().map(|e| e.message.as_str()).collect();
            return Err(listing_err(if messages.is_empty() {
                "response carried no data".to_string()
            } else {
                format!("response carried no data: {}", messages.join("; "))
            }));
        };
        let Some(raw) = data.recent_ac_submission_list else {
            return Ok(vec![]);
        };

        raw.into_iter()
            .map(Submission::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(listing_err)
    }
}

impl SnippetSource for LeetCodeClient {
    fn snippets(&self, slug: &Slug) -> Vec<CodeSnippet> {
        let result = self.fetch_snippets(slug);
        self.pacer.pause();

        match result {
            Ok(snippets) => snippets,
            Err(RequestError::Status(code)) => {
                tracing::warn!("failed to fetch snippets for '{slug}': HTTP status {code}");
                vec![]
            }
            Err(e) => {
                tracing::error!("error fetching snippets for '{slug}': {e}");
                vec![]
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
