//! Mutations
//!
//! Payloads carry an application-level verdict (`success`, `errors`)
//! separate from transport failures. Listed queries are refetched after
//! every delivered response, successful or not.

use std::marker::PhantomData;

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::graphql::{use_graphql_client, variables, GraphQlClient, MutationSpec, TransportError};
use crate::toast::{use_toaster, Toaster};

const UNCONFIRMED_MESSAGE: &str = "The server did not confirm the change";

#[derive(Debug, Clone, PartialEq)]
pub struct MutationPayload<T> {
    pub entity: Option<T>,
    pub success: bool,
    pub errors: Vec<String>,
    pub message: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct PayloadFlags {
    success: Option<bool>,
    errors: Option<Vec<Option<String>>>,
    message: Option<String>,
}

/// How a delivered payload should be reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// First application error
    Failed(String),
    Succeeded,
    /// No errors but no success flag either
    Unconfirmed(Option<String>),
}

impl<T: DeserializeOwned> MutationPayload<T> {
    pub fn from_value(value: &Value, entity_field: Option<&str>) -> Result<Self, TransportError> {
        let flags: PayloadFlags = if value.is_null() {
            PayloadFlags::default()
        } else {
            serde_json::from_value(value.clone())?
        };

        let entity = match entity_field.and_then(|field| value.get(field)) {
            Some(raw) if !raw.is_null() => Some(serde_json::from_value(raw.clone())?),
            _ => None,
        };

        Ok(Self {
            entity,
            success: flags.success.unwrap_or(false),
            errors: flags.errors.unwrap_or_default().into_iter().flatten().collect(),
            message: flags.message,
        })
    }
}

impl<T> MutationPayload<T> {
    /// True only when the server reported success without errors
    pub fn is_success(&self) -> bool {
        self.success && self.errors.is_empty()
    }

    pub fn completion(&self) -> Completion {
        match self.errors.first() {
            Some(first) => Completion::Failed(first.clone()),
            None if self.success => Completion::Succeeded,
            None => Completion::Unconfirmed(self.message.clone()),
        }
    }
}

/// Toast text for a completion: `(is_error, message)`
pub fn completion_notice(completion: &Completion, success_message: &str) -> (bool, String) {
    match completion {
        Completion::Failed(error) => (true, error.clone()),
        Completion::Succeeded => (false, success_message.to_string()),
        Completion::Unconfirmed(message) => (
            true,
            message
                .clone()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| UNCONFIRMED_MESSAGE.to_string()),
        ),
    }
}

pub struct MutationHandle<T> {
    spec: &'static MutationSpec,
    client: StoredValue<GraphQlClient>,
    toaster: Toaster,
    loading: RwSignal<bool>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for MutationHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MutationHandle<T> {}

pub fn use_mutation<T>(spec: &'static MutationSpec) -> MutationHandle<T> {
    MutationHandle {
        spec,
        client: StoredValue::new(use_graphql_client()),
        toaster: use_toaster(),
        loading: RwSignal::new(false),
        _entity: PhantomData,
    }
}

impl<T: DeserializeOwned> MutationHandle<T> {
    pub fn loading(&self) -> Signal<bool> {
        self.loading.into()
    }

    pub async fn run<V: Serialize>(self, vars: V) -> Result<MutationPayload<T>, TransportError> {
        let vars = variables(&vars);
        let Some(client) = self.client.try_get_value() else {
            return Err(TransportError::Network("client is no longer available".to_string()));
        };

        let _ = self.loading.try_set(true);
        let result = client.mutate(&self.spec.op, vars).await;
        let _ = self.loading.try_set(false);

        let value = match result {
            Ok(value) => value,
            Err(e) => {
                log::error!("[GQL] {} failed: {}", self.spec.op.name, e);
                self.toaster.error(e.to_string());
                return Err(e);
            }
        };

        client.refetch_named(self.spec.refetch);

        let payload = match MutationPayload::<T>::from_value(&value, self.spec.entity_field) {
            Ok(payload) => payload,
            Err(e) => {
                log::error!("[GQL] {} returned an unreadable payload: {}", self.spec.op.name, e);
                self.toaster.error(e.to_string());
                return Err(e);
            }
        };

        let completion = payload.completion();
        let (is_error, message) = completion_notice(&completion, self.spec.success_message);
        if is_error {
            log::warn!("[GQL] {} not applied: {}", self.spec.op.name, message);
            self.toaster.error(message);
        } else {
            log::info!("[GQL] {}", message);
            self.toaster.success(message);
        }
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Project;
    use serde_json::json;

    #[test]
    fn test_successful_payload_with_entity() {
        let value = json!({
            "project": { "__typename": "ProjectType", "id": "9", "name": "Apollo", "status": "PLANNING" },
            "success": true,
            "errors": null
        });
        let payload = MutationPayload::<Project>::from_value(&value, Some("project")).unwrap();
        assert!(payload.is_success());
        assert_eq!(payload.entity.map(|p| p.name), Some("Apollo".to_string()));
        assert_eq!(
            completion_notice(&payload_completion(&value), "Project created successfully"),
            (false, "Project created successfully".to_string())
        );
    }

    fn payload_completion(value: &Value) -> Completion {
        MutationPayload::<()>::from_value(value, None).unwrap().completion()
    }

    #[test]
    fn test_first_error_wins() {
        let value = json!({ "project": null, "success": false, "errors": ["Name taken", "Bad date"] });
        let payload = MutationPayload::<Project>::from_value(&value, Some("project")).unwrap();
        assert!(!payload.is_success());
        assert!(payload.entity.is_none());
        assert_eq!(payload.completion(), Completion::Failed("Name taken".to_string()));
    }

    #[test]
    fn test_errors_with_success_flag_is_not_success() {
        let value = json!({ "success": true, "errors": ["Partially applied"] });
        let payload = MutationPayload::<()>::from_value(&value, None).unwrap();
        assert!(!payload.is_success());
    }

    #[test]
    fn test_unconfirmed_uses_message_or_generic_text() {
        let with_message = json!({ "success": false, "message": "Task not found", "errors": [] });
        assert_eq!(
            completion_notice(&payload_completion(&with_message), "ok"),
            (true, "Task not found".to_string())
        );

        let bare = json!({ "success": false });
        assert_eq!(
            completion_notice(&payload_completion(&bare), "ok"),
            (true, UNCONFIRMED_MESSAGE.to_string())
        );

        assert_eq!(payload_completion(&Value::Null), Completion::Unconfirmed(None));
    }

    #[test]
    fn test_delete_payload_message_is_kept() {
        let value = json!({ "success": true, "message": "Task deleted", "errors": null });
        let payload = MutationPayload::<()>::from_value(&value, None).unwrap();
        assert!(payload.is_success());
        assert_eq!(payload.message.as_deref(), Some("Task deleted"));
    }

    #[test]
    fn test_wrong_entity_shape_is_decode_error() {
        let value = json!({ "project": "oops", "success": true });
        assert!(matches!(
            MutationPayload::<Project>::from_value(&value, Some("project")),
            Err(TransportError::Decode(_))
        ));
    }
}
