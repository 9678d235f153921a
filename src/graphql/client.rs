//! GraphQL Client
//!
//! HTTP transport with auth/organization headers, backed by the shared
//! normalized cache. Queries keep partial data alongside errors; mutations
//! treat any GraphQL error as a transport failure.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use super::cache::{NormalizedCache, TypePolicies};
use super::error::TransportError;
use super::operations::Operation;
use crate::models::Organization;
use crate::session::{read_json, LocalStorage, SessionStorage, ORGANIZATION_KEY, TOKEN_KEY};

pub const ORGANIZATION_HEADER: &str = "X-Organization-Slug";

/// Headers attached to every request, read fresh from storage
pub fn request_headers<S: SessionStorage>(storage: &S) -> Vec<(&'static str, String)> {
    let mut headers = Vec::with_capacity(2);
    if let Some(token) = storage.get(TOKEN_KEY).filter(|t| !t.is_empty()) {
        headers.push(("Authorization", format!("Bearer {}", token)));
    }
    let slug = read_json::<Organization, _>(storage, ORGANIZATION_KEY)
        .map(|org| org.slug)
        .unwrap_or_default();
    headers.push((ORGANIZATION_HEADER, slug));
    headers
}

/// Cache key for an operation with its variables
pub fn query_key(op: &Operation, variables: &Value) -> String {
    format!("{}({})", op.name, variables)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestBody<'a> {
    query: &'a str,
    operation_name: &'a str,
    variables: &'a Value,
}

fn error_messages(body: &Value) -> Vec<String> {
    body.get("errors")
        .and_then(Value::as_array)
        .map(|errors| {
            errors
                .iter()
                .map(|e| {
                    e.get("message")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                        .unwrap_or_else(|| e.to_string())
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Extract `data.<root_field>` from a response body.
/// With `allow_partial`, errors are tolerated as long as the field is present.
pub fn parse_response(body: &Value, root_field: &str, allow_partial: bool) -> Result<Value, TransportError> {
    let errors = error_messages(body);
    let field = body.get("data").and_then(|d| d.get(root_field));

    match field {
        Some(value) if errors.is_empty() => Ok(value.clone()),
        Some(value) if allow_partial => {
            log::warn!("[GQL] Partial result for {}: {}", root_field, errors.join("; "));
            Ok(value.clone())
        }
        _ if !errors.is_empty() => Err(TransportError::GraphQl(errors)),
        _ if body.get("data").is_some() => Err(TransportError::MissingField(root_field.to_string())),
        _ => Err(TransportError::Decode("response has neither data nor errors".to_string())),
    }
}

type RefetchFn = Arc<dyn Fn() + Send + Sync>;

struct ActiveQuery {
    operation: &'static str,
    refetch: RefetchFn,
}

/// Shared client handle provided via context
#[derive(Clone)]
pub struct GraphQlClient {
    endpoint: Arc<str>,
    cache: Arc<RwLock<NormalizedCache>>,
    version: RwSignal<u64>,
    active: Arc<Mutex<HashMap<u64, ActiveQuery>>>,
    next_id: Arc<AtomicU64>,
}

impl GraphQlClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: Arc::from(endpoint),
            cache: Arc::new(RwLock::new(NormalizedCache::new(TypePolicies::standard()))),
            version: RwSignal::new(0),
            active: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Subscribe the current reactive scope to cache writes
    pub fn track(&self) {
        self.version.track();
    }

    /// Read a cached root result as `T`; None when absent or unreadable
    pub fn read_query<T: DeserializeOwned>(&self, op: &Operation, variables: &Value) -> Option<T> {
        let key = query_key(op, variables);
        let value = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .read_root(&key)?;
        match serde_json::from_value(value) {
            Ok(data) => Some(data),
            Err(e) => {
                log::warn!("[GQL] Cached {} does not match its type: {}", op.name, e);
                None
            }
        }
    }

    /// Issue a query and store its result
    pub async fn query(&self, op: &Operation, variables: Value) -> Result<Value, TransportError> {
        let body = self.send(op, &variables).await?;
        let data = parse_response(&body, op.root_field, true)?;
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .write_root(&query_key(op, &variables), &data);
        self.bump();
        Ok(data)
    }

    /// Issue a mutation and merge any returned entities into the cache
    pub async fn mutate(&self, op: &Operation, variables: Value) -> Result<Value, TransportError> {
        let body = self.send(op, &variables).await?;
        let data = parse_response(&body, op.root_field, false)?;
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .write_entities(&data);
        self.bump();
        Ok(data)
    }

    /// Drop every cached entity and result (used on sign-out)
    pub fn reset_cache(&self) {
        self.cache.write().unwrap_or_else(PoisonError::into_inner).clear();
        self.bump();
    }

    pub fn register_active(&self, operation: &'static str, refetch: RefetchFn) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, ActiveQuery { operation, refetch });
        id
    }

    pub fn unregister_active(&self, id: u64) {
        self.active.lock().unwrap_or_else(PoisonError::into_inner).remove(&id);
    }

    /// Re-run every active query whose operation name is listed
    pub fn refetch_named(&self, names: &[&str]) -> usize {
        let count = self.refetch_where(|operation| names.contains(&operation));
        log::debug!("[GQL] Refetched {} active queries for {:?}", count, names);
        count
    }

    /// Re-run every active query (after an organization switch)
    pub fn refetch_all(&self) -> usize {
        self.refetch_where(|_| true)
    }

    fn refetch_where(&self, matches: impl Fn(&str) -> bool) -> usize {
        // Collect first so callbacks can register/unregister freely
        let targets: Vec<RefetchFn> = self
            .active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|q| matches(q.operation))
            .map(|q| q.refetch.clone())
            .collect();
        for refetch in &targets {
            refetch();
        }
        targets.len()
    }

    fn bump(&self) {
        let _ = self.version.try_update(|v| *v += 1);
    }

    async fn send(&self, op: &Operation, variables: &Value) -> Result<Value, TransportError> {
        log::debug!("[GQL] {} {}", op.name, variables);
        let mut request = reqwest::Client::new().post(self.endpoint.as_ref());
        for (name, value) in request_headers(&LocalStorage) {
            request = request.header(name, value);
        }
        let response = request
            .json(&RequestBody { query: op.document, operation_name: op.name, variables })
            .send()
            .await?;

        let status = response.status();
        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(_) if !status.is_success() => return Err(TransportError::Status(status.as_u16())),
            Err(e) => return Err(e.into()),
        };
        if !status.is_success() && body.get("errors").is_none() {
            return Err(TransportError::Status(status.as_u16()));
        }
        Ok(body)
    }
}

/// Variables object from a serializable struct
pub fn variables<T: Serialize>(vars: &T) -> Value {
    serde_json::to_value(vars).unwrap_or_else(|e| {
        log::error!("[GQL] Could not serialize variables: {}", e);
        json!({})
    })
}

pub fn use_graphql_client() -> GraphQlClient {
    expect_context::<GraphQlClient>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::operations::{GET_PROJECTS, GET_TASKS};
    use crate::session::{MemoryStorage, USER_KEY};

    #[test]
    fn test_headers_with_token_and_organization() {
        let storage = MemoryStorage::default();
        storage.set(TOKEN_KEY, "mock-token-42").unwrap();
        storage.set(ORGANIZATION_KEY, r#"{"id":"1","name":"Demo","slug":"demo-org"}"#).unwrap();

        let headers = request_headers(&storage);
        assert_eq!(
            headers,
            vec![
                ("Authorization", "Bearer mock-token-42".to_string()),
                (ORGANIZATION_HEADER, "demo-org".to_string()),
            ]
        );
    }

    #[test]
    fn test_headers_without_session() {
        let storage = MemoryStorage::default();
        storage.set(USER_KEY, "{}").unwrap();
        assert_eq!(request_headers(&storage), vec![(ORGANIZATION_HEADER, String::new())]);
    }

    #[test]
    fn test_corrupt_organization_yields_empty_slug() {
        let storage = MemoryStorage::default();
        storage.set(TOKEN_KEY, "t").unwrap();
        storage.set(ORGANIZATION_KEY, "{{oops").unwrap();
        let headers = request_headers(&storage);
        assert_eq!(headers[1], (ORGANIZATION_HEADER, String::new()));
        assert_eq!(headers[0].1, "Bearer t");
    }

    #[test]
    fn test_query_keys_include_variables() {
        assert_eq!(query_key(&GET_PROJECTS, &json!({})), "GetProjects({})");
        assert_eq!(
            query_key(&GET_TASKS, &json!({ "projectId": "3" })),
            r#"GetTasks({"projectId":"3"})"#
        );
    }

    #[test]
    fn test_parse_response_success() {
        let body = json!({ "data": { "projects": [] } });
        assert_eq!(parse_response(&body, "projects", false).unwrap(), json!([]));
    }

    #[test]
    fn test_parse_response_partial_data() {
        let body = json!({
            "data": { "projects": [{ "id": "1" }] },
            "errors": [{ "message": "field x failed" }]
        });
        assert!(parse_response(&body, "projects", true).is_ok());
        assert_eq!(
            parse_response(&body, "projects", false),
            Err(TransportError::GraphQl(vec!["field x failed".to_string()]))
        );
    }

    #[test]
    fn test_parse_response_errors_only() {
        let body = json!({ "data": null, "errors": [{ "message": "Unknown argument" }] });
        assert_eq!(
            parse_response(&body, "createTask", true),
            Err(TransportError::GraphQl(vec!["Unknown argument".to_string()]))
        );
    }

    #[test]
    fn test_parse_response_missing_field() {
        let body = json!({ "data": {} });
        assert_eq!(
            parse_response(&body, "task", true),
            Err(TransportError::MissingField("task".to_string()))
        );
        assert!(matches!(parse_response(&json!({}), "task", true), Err(TransportError::Decode(_))));
    }
}
