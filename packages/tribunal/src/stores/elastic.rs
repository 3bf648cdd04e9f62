//! Elasticsearch-backed precedent store.
//!
//! Composes the index's query primitives — term filters, a painless
//! proximity sort or a plain descending sort, a result limit, and an `avg`
//! aggregation — without reimplementing any ranking.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::store::PrecedentStore;
use crate::types::{FieldFilter, PrecedentQuery, PrecedentRecord, QueryOrder, RiskField};

/// Default precedent index name.
pub const DEFAULT_INDEX: &str = "martian_precedents";

/// Connection settings for the precedent index.
#[derive(Debug, Clone)]
pub struct ElasticConfig {
    /// Base URL of the cluster, e.g. `http://localhost:9200`
    pub base_url: String,

    /// Index holding precedent documents
    pub index: String,

    /// Optional basic-auth username
    pub username: Option<String>,

    /// Optional basic-auth password
    pub password: Option<SecretString>,

    /// Per-request timeout
    pub timeout: std::time::Duration,
}

impl Default for ElasticConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9200".to_string(),
            index: DEFAULT_INDEX.to_string(),
            username: None,
            password: None,
            timeout: std::time::Duration::from_secs(30),
        }
    }
}

impl ElasticConfig {
    /// Create a config for a cluster URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Read `ES_URL`, `ES_USER`, and `ES_PASS` from the environment,
    /// falling back to a local unauthenticated cluster.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("ES_URL") {
            config.base_url = url;
        }
        if let (Ok(user), Ok(pass)) = (std::env::var("ES_USER"), std::env::var("ES_PASS")) {
            config.username = Some(user);
            config.password = Some(SecretString::from(pass));
        }
        config
    }

    /// Override the index name.
    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.index = index.into();
        self
    }

    /// Set basic-auth credentials.
    pub fn with_credentials(mut self, username: impl Into<String>, password: SecretString) -> Self {
        self.username = Some(username.into());
        self.password = Some(password);
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Precedent store backed by an Elasticsearch index.
pub struct ElasticStore {
    config: ElasticConfig,
    client: reqwest::Client,
}

impl ElasticStore {
    /// Create a store from config.
    pub fn new(config: ElasticConfig) -> StoreResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| StoreError::Unavailable(Box::new(e)))?;

        Ok(Self { config, client })
    }

    async fn search(&self, body: &Value) -> StoreResult<String> {
        let url = format!("{}/{}/_search", self.config.base_url, self.config.index);
        debug!(index = %self.config.index, "querying precedent index");

        let mut request = self.client.post(&url).json(body);
        if let (Some(user), Some(pass)) = (&self.config.username, &self.config.password) {
            request = request.basic_auth(user, Some(pass.expose_secret()));
        }

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(Box::new(e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| StoreError::Unavailable(Box::new(e)))?;

        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(text)
    }
}

#[async_trait]
impl PrecedentStore for ElasticStore {
    async fn find_nearest(&self, query: &PrecedentQuery) -> StoreResult<Vec<PrecedentRecord>> {
        let body = search_body(query);
        let text = self.search(&body).await?;
        let response: SearchResponse = serde_json::from_str(&text)?;

        let mut records = Vec::with_capacity(response.hits.hits.len());
        for hit in response.hits.hits {
            let mut record: PrecedentRecord = serde_json::from_value(hit.source)?;
            if record.case_id.is_empty() {
                record.case_id = hit.id;
            }
            records.push(record);
        }
        Ok(records)
    }

    async fn sector_trend(&self, sector: &str, field: RiskField) -> StoreResult<f64> {
        let body = trend_body(sector, field);
        let text = self.search(&body).await?;
        let response: TrendResponse = serde_json::from_str(&text)?;

        Ok(response
            .aggregations
            .and_then(|a| a.avg_value.value)
            .unwrap_or(0.0))
    }
}

/// Build the `_search` body for a nearest-precedent query.
fn search_body(query: &PrecedentQuery) -> Value {
    let must: Vec<Value> = query.filters.iter().map(term_clause).collect();

    let sort = match &query.order {
        QueryOrder::NearestTo { field, target } => json!([{
            "_script": {
                "type": "number",
                "script": {
                    "lang": "painless",
                    "source": format!("Math.abs(doc['{field}'].value - params.target)"),
                    "params": { "target": target }
                },
                "order": "asc"
            }
        }]),
        QueryOrder::Descending { field } => json!([{ (field.as_str()): { "order": "desc" } }]),
    };

    let mut body = json!({ "size": query.limit, "sort": sort });
    if !must.is_empty() {
        body["query"] = json!({ "bool": { "must": must } });
    }
    body
}

/// Build the `_search` body for the advisory sector-average aggregation.
fn trend_body(sector: &str, field: RiskField) -> Value {
    json!({
        "size": 0,
        "query": { "term": { "sector": sector } },
        "aggs": {
            "avg_value": { "avg": { "field": field.field_name() } }
        }
    })
}

fn term_clause(filter: &FieldFilter) -> Value {
    match filter {
        FieldFilter::Sector(sector) => json!({ "term": { "sector": sector } }),
        FieldFilter::DevelopmentType(dev) => json!({ "term": { "development_type": dev } }),
        FieldFilter::TerraformingImpact(flag) => json!({ "term": { "terraforming_impact": flag } }),
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: HitsEnvelope,
}

#[derive(Debug, Deserialize)]
struct HitsEnvelope {
    #[serde(default)]
    hits: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(rename = "_id")]
    id: String,

    #[serde(rename = "_source", default)]
    source: Value,
}

#[derive(Debug, Deserialize)]
struct TrendResponse {
    #[serde(default)]
    aggregations: Option<Aggregations>,
}

#[derive(Debug, Deserialize)]
struct Aggregations {
    avg_value: AvgValue,
}

#[derive(Debug, Deserialize)]
struct AvgValue {
    value: Option<f64>,
}
