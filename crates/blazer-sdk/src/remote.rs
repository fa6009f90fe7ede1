//! RemoteClient — HTTP client for a running endpoint
//!
//! Speaks the Blazegraph REST flavour of the SPARQL protocol: `query=` and
//! `update=` URL parameters, plus the `HASSTMT`, `GETSTMTS` and
//! `updatePost` statement-level calls.

use async_trait::async_trait;
use blazer::config::BlazegraphConfig;
use blazer::rdf::{parse_quads, serialize_quad, serialize_quads, PartialGraphPattern, Quad, RdfFormat, UpdateQuad};
use blazer::sparql::{
    encode_query, parse_commit_stats, parse_pattern_existence, BindingResult, CommitStats,
    SparqlQueryResults,
};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

use crate::client::SparqlClient;
use crate::error::{ClientError, ClientResult};
use crate::models::{PayloadOptions, RdfPayload, UpdatePostBody};

const SPARQL_JSON: &str = "application/sparql-results+json, application/json";

/// Network client bound to one SPARQL endpoint URL.
pub struct RemoteClient {
    endpoint_url: String,
    http_client: Client,
}

impl RemoteClient {
    /// Create a client for a full endpoint URL, e.g.
    /// `http://localhost:9999/bigdata/namespace/kb/sparql`.
    ///
    /// # Example
    /// ```no_run
    /// # use blazer_sdk::RemoteClient;
    /// let client = RemoteClient::new("http://localhost:9999/bigdata/namespace/kb/sparql");
    /// ```
    pub fn new(endpoint_url: &str) -> Self {
        Self::with_http_client(endpoint_url, Client::new())
    }

    /// Create a client around a preconfigured `reqwest::Client`
    pub fn with_http_client(endpoint_url: &str, http_client: Client) -> Self {
        Self {
            endpoint_url: endpoint_url.trim_end_matches('/').to_string(),
            http_client,
        }
    }

    /// Validate `config` and connect to the endpoint it describes
    pub fn from_config(config: &BlazegraphConfig) -> ClientResult<Self> {
        config.validate()?;
        let http_client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(Self::with_http_client(&config.endpoint_url(), http_client))
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Send a request and return its body; only 200 counts as success
    async fn send(&self, request: RequestBuilder) -> ClientResult<(String, Option<String>)> {
        let response = request.send().await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "endpoint rejected request");
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok((body, content_type))
    }

    fn pattern_url(&self, command: &str, pattern: &PartialGraphPattern, with_inferred: bool) -> String {
        let mut url = format!(
            "{}?{}&includeInferred={}",
            self.endpoint_url, command, with_inferred
        );
        let params = pattern.to_query_params();
        if !params.is_empty() {
            url.push('&');
            url.push_str(&params);
        }
        url
    }
}

fn require_query(query: &str) -> ClientResult<()> {
    if query.trim().is_empty() {
        return Err(ClientError::EmptyQuery);
    }
    Ok(())
}

fn trig_payload(value: String) -> RdfPayload {
    RdfPayload {
        options: PayloadOptions {
            content_type: RdfFormat::TriG.mime_type().to_string(),
        },
        value,
    }
}

#[async_trait]
impl SparqlClient for RemoteClient {
    async fn query(&self, query: &str, with_inferred: bool) -> ClientResult<Vec<BindingResult>> {
        require_query(query)?;
        debug!(query, "sparql query");

        let url = format!(
            "{}?query={}&includeInferred={}",
            self.endpoint_url,
            encode_query(query),
            with_inferred
        );
        let (body, _) = self
            .send(self.http_client.get(&url).header(ACCEPT, SPARQL_JSON))
            .await?;
        Ok(SparqlQueryResults::parse(&body)?.into_bindings())
    }

    async fn update(&self, update: &str) -> ClientResult<CommitStats> {
        require_query(update)?;
        debug!(update, "sparql update");

        let url = format!("{}?update={}", self.endpoint_url, encode_query(update));
        let (body, _) = self
            .send(self.http_client.post(&url).header(ACCEPT, "application/json"))
            .await?;
        Ok(parse_commit_stats(&body)?)
    }

    async fn delete_by_query(&self, query: &str) -> ClientResult<Vec<BindingResult>> {
        require_query(query)?;
        debug!(query, "delete by query");

        let url = format!("{}?query={}", self.endpoint_url, encode_query(query));
        let (body, _) = self
            .send(self.http_client.delete(&url).header(ACCEPT, SPARQL_JSON))
            .await?;
        Ok(SparqlQueryResults::parse(&body)?.into_bindings())
    }

    async fn check_pattern_existence(
        &self,
        pattern: &PartialGraphPattern,
        with_inferred: bool,
    ) -> ClientResult<bool> {
        pattern.validate()?;

        let url = self.pattern_url("HASSTMT", pattern, with_inferred);
        let (body, _) = self.send(self.http_client.get(&url)).await?;
        if body.is_empty() {
            return Err(blazer::sparql::ResultsError::EmptyBody.into());
        }
        Ok(parse_pattern_existence(&body))
    }

    async fn read_quads(
        &self,
        pattern: &PartialGraphPattern,
        with_inferred: bool,
    ) -> ClientResult<Vec<Quad>> {
        pattern.validate()?;

        let url = self.pattern_url("GETSTMTS", pattern, with_inferred);
        let (body, content_type) = self
            .send(
                self.http_client
                    .get(&url)
                    .header(ACCEPT, RdfFormat::TriG.mime_type()),
            )
            .await?;

        let format = content_type
            .as_deref()
            .map(RdfFormat::from_content_type)
            .unwrap_or(RdfFormat::TriG);
        let quads = parse_quads(&body, format)?;
        debug!(count = quads.len(), "read quads");
        Ok(quads)
    }

    async fn create_quads(&self, quads: &[Quad]) -> ClientResult<String> {
        for quad in quads {
            quad.validate()?;
        }

        let (body, _) = self
            .send(
                self.http_client
                    .post(&self.endpoint_url)
                    .header(CONTENT_TYPE, RdfFormat::TriG.mime_type())
                    .body(serialize_quads(quads)),
            )
            .await?;
        Ok(body)
    }

    async fn update_quad(&self, quad: &UpdateQuad) -> ClientResult<String> {
        quad.validate()?;

        let payload = UpdatePostBody {
            remove: trig_payload(serialize_quad(&quad.old_quad())),
            add: trig_payload(serialize_quad(&quad.new_quad())),
        };
        let url = format!("{}?updatePost", self.endpoint_url);
        let (body, _) = self
            .send(self.http_client.post(&url).json(&payload))
            .await?;
        Ok(body)
    }

    async fn delete_quads(&self, pattern: &PartialGraphPattern) -> ClientResult<String> {
        pattern.validate()?;
        if pattern.is_unbounded() {
            return Err(ClientError::UnboundedDelete);
        }

        let url = format!("{}?{}", self.endpoint_url, pattern.to_query_params());
        let (body, _) = self.send(self.http_client.delete(&url)).await?;
        Ok(body)
    }
}
