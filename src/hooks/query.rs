//! Watched Queries
//!
//! Cache-and-network: `data` reads the cache immediately and follows every
//! cache write, while a network request reconciles it in the background.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::graphql::{use_graphql_client, Operation, TransportError};

pub struct QueryHandle<T: Send + Sync + 'static> {
    pub data: Signal<Option<T>>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
    refetch: Callback<()>,
}

impl<T: Send + Sync + 'static> Clone for QueryHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for QueryHandle<T> {}

impl<T: Send + Sync + 'static> QueryHandle<T> {
    /// Reissue the network request
    pub fn refetch(&self) {
        self.refetch.run(());
    }
}

/// Decode a fetched root value; a wrong shape is a malformed response
pub fn decode_result<T: DeserializeOwned>(op: &Operation, value: Value) -> Result<T, TransportError> {
    serde_json::from_value(value).map_err(|e| {
        TransportError::Decode(format!("{} returned an unexpected shape: {}", op.name, e))
    })
}

/// Watch `op` with `variables`. When `skip` is set no request is made.
pub fn watch_query<T>(op: &'static Operation, variables: Value, skip: bool) -> QueryHandle<T>
where
    T: DeserializeOwned + Clone + PartialEq + Send + Sync + 'static,
{
    let client = use_graphql_client();
    let loading = RwSignal::new(!skip);
    let error = RwSignal::new(None::<String>);

    let data = {
        let client = client.clone();
        let variables = variables.clone();
        Memo::new(move |_| {
            client.track();
            if skip {
                None
            } else {
                client.read_query::<T>(op, &variables)
            }
        })
    };

    let fetch: Arc<dyn Fn() + Send + Sync> = {
        let client = client.clone();
        Arc::new(move || {
            if skip {
                return;
            }
            let client = client.clone();
            let variables = variables.clone();
            let _ = loading.try_set(true);
            spawn_local(async move {
                match client.query(op, variables).await.and_then(|value| decode_result::<T>(op, value)) {
                    Ok(_) => {
                        let _ = error.try_set(None);
                    }
                    Err(e) => {
                        log::warn!("[GQL] {} failed: {}", op.name, e);
                        let _ = error.try_set(Some(e.to_string()));
                    }
                }
                let _ = loading.try_set(false);
            });
        })
    };

    if !skip {
        let id = client.register_active(op.name, fetch.clone());
        on_cleanup(move || client.unregister_active(id));
        fetch();
    }

    QueryHandle {
        data: data.into(),
        loading: loading.into(),
        error: error.into(),
        refetch: Callback::new(move |_: ()| fetch()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::operations::{GET_PROJECTS, GET_TASK};
    use crate::graphql::client::parse_response;
    use crate::models::{Project, Task};
    use crate::view_state::{EntityState, ListState};
    use serde_json::json;

    #[test]
    fn test_wrong_shape_projects_render_as_error() {
        let body = json!({ "data": { "projects": "oops" } });
        let value = parse_response(&body, "projects", true).unwrap();
        let err = decode_result::<Vec<Project>>(&GET_PROJECTS, value).unwrap_err();
        assert!(matches!(err, TransportError::Decode(_)));

        let message = err.to_string();
        assert!(matches!(
            ListState::<Project>::select(None, false, Some(&message)),
            ListState::Error(_)
        ));
    }

    #[test]
    fn test_well_formed_results_decode() {
        let projects = decode_result::<Vec<Project>>(&GET_PROJECTS, json!([])).unwrap();
        assert!(projects.is_empty());

        let missing = decode_result::<Option<Task>>(&GET_TASK, Value::Null).unwrap();
        assert_eq!(EntityState::select(Some(&missing), false, None), EntityState::NotFound);
    }
}
