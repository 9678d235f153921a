//! Normalized Cache
//!
//! Entities carrying `__typename` and `id` are stored once under
//! `Typename:id` and referenced by `{"__ref": key}` links. Root query
//! results are stored per query key. Field merges follow `TypePolicies`.

use std::collections::HashMap;

use serde_json::{Map, Value};

const REF_KEY: &str = "__ref";
const MAX_DEPTH: usize = 32;

/// How an incoming field value combines with the cached one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Incoming value wholly replaces the cached value
    Replace,
    /// Objects are merged key by key, incoming wins
    Merge,
}

/// Per-type field merge rules
#[derive(Debug, Clone, Default)]
pub struct TypePolicies {
    fields: HashMap<(String, String), MergePolicy>,
}

impl TypePolicies {
    /// A project's task list and a task's comment list are always replaced
    pub fn standard() -> Self {
        Self::default()
            .with_field(&["Project", "ProjectType"], "tasks", MergePolicy::Replace)
            .with_field(&["Task", "TaskType"], "comments", MergePolicy::Replace)
    }

    pub fn with_field(mut self, typenames: &[&str], field: &str, policy: MergePolicy) -> Self {
        for typename in typenames {
            self.fields.insert((typename.to_string(), field.to_string()), policy);
        }
        self
    }

    pub fn policy_for(&self, typename: &str, field: &str, incoming: &Value) -> MergePolicy {
        if let Some(policy) = self.fields.get(&(typename.to_string(), field.to_string())) {
            return *policy;
        }
        if incoming.is_object() && incoming.get(REF_KEY).is_none() {
            MergePolicy::Merge
        } else {
            MergePolicy::Replace
        }
    }
}

fn merge_values(existing: Option<Value>, incoming: Value, policy: MergePolicy) -> Value {
    match (policy, existing, incoming) {
        (MergePolicy::Merge, Some(Value::Object(mut old)), Value::Object(new)) => {
            for (key, value) in new {
                let previous = old.remove(&key);
                let nested = if value.is_object() && value.get(REF_KEY).is_none() {
                    MergePolicy::Merge
                } else {
                    MergePolicy::Replace
                };
                old.insert(key, merge_values(previous, value, nested));
            }
            Value::Object(old)
        }
        (_, _, incoming) => incoming,
    }
}

/// Key for an entity object, if it is identifiable
pub fn entity_key(object: &Map<String, Value>) -> Option<String> {
    let typename = object.get("__typename")?.as_str()?;
    let id = match object.get("id")? {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    Some(format!("{}:{}", typename, id))
}

#[derive(Debug, Default)]
pub struct NormalizedCache {
    entities: HashMap<String, Map<String, Value>>,
    roots: HashMap<String, Value>,
    policies: TypePolicies,
}

impl NormalizedCache {
    pub fn new(policies: TypePolicies) -> Self {
        Self { policies, ..Default::default() }
    }

    /// Store a root field result under `query_key`, replacing the previous one
    pub fn write_root(&mut self, query_key: &str, value: &Value) {
        let normalized = self.normalize(value);
        self.roots.insert(query_key.to_string(), normalized);
    }

    /// Merge any entities in `value` without touching root results
    pub fn write_entities(&mut self, value: &Value) {
        self.normalize(value);
    }

    pub fn read_root(&self, query_key: &str) -> Option<Value> {
        self.roots.get(query_key).map(|v| self.denormalize(v, 0))
    }

    pub fn has_root(&self, query_key: &str) -> bool {
        self.roots.contains_key(query_key)
    }

    pub fn entity(&self, key: &str) -> Option<Value> {
        self.entities
            .get(key)
            .map(|fields| self.denormalize(&Value::Object(fields.clone()), 0))
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
        self.roots.clear();
    }

    fn normalize(&mut self, value: &Value) -> Value {
        match value {
            Value::Array(items) => Value::Array(items.iter().map(|v| self.normalize(v)).collect()),
            Value::Object(object) => {
                let mut fields = Map::new();
                for (key, child) in object {
                    fields.insert(key.clone(), self.normalize(child));
                }
                match entity_key(object) {
                    Some(key) => {
                        self.merge_entity(&key, fields);
                        let mut link = Map::new();
                        link.insert(REF_KEY.to_string(), Value::String(key));
                        Value::Object(link)
                    }
                    None => Value::Object(fields),
                }
            }
            other => other.clone(),
        }
    }

    fn merge_entity(&mut self, key: &str, incoming: Map<String, Value>) {
        let typename = key.split(':').next().unwrap_or_default().to_string();
        let entry = self.entities.entry(key.to_string()).or_default();
        for (field, value) in incoming {
            let policy = self.policies.policy_for(&typename, &field, &value);
            let previous = entry.remove(&field);
            entry.insert(field, merge_values(previous, value, policy));
        }
    }

    fn denormalize(&self, value: &Value, depth: usize) -> Value {
        if depth > MAX_DEPTH {
            return Value::Null;
        }
        match value {
            Value::Array(items) => Value::Array(items.iter().map(|v| self.denormalize(v, depth + 1)).collect()),
            Value::Object(object) => {
                if let Some(Value::String(key)) = object.get(REF_KEY) {
                    return match self.entities.get(key) {
                        Some(fields) => {
                            let mut out = Map::new();
                            for (k, v) in fields {
                                out.insert(k.clone(), self.denormalize(v, depth + 1));
                            }
                            Value::Object(out)
                        }
                        None => Value::Null,
                    };
                }
                let mut out = Map::new();
                for (k, v) in object {
                    out.insert(k.clone(), self.denormalize(v, depth + 1));
                }
                Value::Object(out)
            }
            other => other.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn project(id: &str, name: &str, status: &str) -> Value {
        json!({ "__typename": "ProjectType", "id": id, "name": name, "status": status })
    }

    #[test]
    fn test_entities_are_shared_between_roots() {
        let mut cache = NormalizedCache::new(TypePolicies::standard());
        cache.write_root("GetProjects({})", &json!([project("1", "Acme", "planning")]));
        cache.write_root("GetProject({\"id\":\"1\"})", &project("1", "Acme", "planning"));

        // A mutation payload updates the entity everywhere it is referenced
        cache.write_entities(&json!({ "project": project("1", "Acme v2", "active"), "success": true }));

        let list = cache.read_root("GetProjects({})").unwrap();
        assert_eq!(list[0]["name"], "Acme v2");
        let single = cache.read_root("GetProject({\"id\":\"1\"})").unwrap();
        assert_eq!(single["status"], "active");
        assert_eq!(cache.entity_count(), 1);
    }

    #[test]
    fn test_partial_entity_writes_merge_fields() {
        let mut cache = NormalizedCache::new(TypePolicies::standard());
        cache.write_entities(&json!({
            "__typename": "TaskType", "id": "5", "title": "Old", "priority": "HIGH"
        }));
        cache.write_entities(&json!({ "__typename": "TaskType", "id": "5", "title": "New" }));

        let task = cache.entity("TaskType:5").unwrap();
        assert_eq!(task["title"], "New");
        assert_eq!(task["priority"], "HIGH");
    }

    #[test]
    fn test_task_list_of_project_is_replaced_wholesale() {
        let mut cache = NormalizedCache::new(TypePolicies::standard());
        cache.write_entities(&json!({
            "__typename": "ProjectType", "id": "1",
            "tasks": [
                { "__typename": "TaskType", "id": "10", "title": "a" },
                { "__typename": "TaskType", "id": "11", "title": "b" }
            ]
        }));
        cache.write_entities(&json!({
            "__typename": "ProjectType", "id": "1",
            "tasks": [{ "__typename": "TaskType", "id": "11", "title": "b" }]
        }));

        let project = cache.entity("ProjectType:1").unwrap();
        let tasks = project["tasks"].as_array().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0]["id"], "11");
    }

    #[test]
    fn test_comment_list_policy_applies_to_both_typenames() {
        let policies = TypePolicies::standard();
        let list = json!([]);
        assert_eq!(policies.policy_for("Task", "comments", &list), MergePolicy::Replace);
        assert_eq!(policies.policy_for("TaskType", "comments", &list), MergePolicy::Replace);
        // Unlisted object fields merge
        assert_eq!(policies.policy_for("TaskType", "meta", &json!({"a": 1})), MergePolicy::Merge);
    }

    #[test]
    fn test_replace_policy_overrides_object_merge() {
        let policies = TypePolicies::default().with_field(&["Widget"], "config", MergePolicy::Replace);
        let mut cache = NormalizedCache::new(policies);
        cache.write_entities(&json!({ "__typename": "Widget", "id": 1, "config": { "a": 1, "b": 2 } }));
        cache.write_entities(&json!({ "__typename": "Widget", "id": 1, "config": { "a": 3 } }));
        assert_eq!(cache.entity("Widget:1").unwrap()["config"], json!({ "a": 3 }));
    }

    #[test]
    fn test_refetch_after_create_and_delete() {
        let mut cache = NormalizedCache::new(TypePolicies::standard());
        let key = "GetProjects({})";
        cache.write_root(key, &json!([project("1", "Existing", "active")]));

        // createProject response, then the list refetch
        cache.write_entities(&json!({ "project": project("2", "Acme Launch", "planning"), "success": true, "errors": null }));
        cache.write_root(key, &json!([project("2", "Acme Launch", "planning"), project("1", "Existing", "active")]));
        let list = cache.read_root(key).unwrap();
        assert!(list
            .as_array()
            .unwrap()
            .iter()
            .any(|p| p["name"] == "Acme Launch" && p["status"] == "planning"));

        // deleteProject, then the list refetch no longer has it
        cache.write_root(key, &json!([project("1", "Existing", "active")]));
        let list = cache.read_root(key).unwrap();
        assert!(!list.as_array().unwrap().iter().any(|p| p["name"] == "Acme Launch"));
    }

    #[test]
    fn test_values_without_identity_stay_inline() {
        let mut cache = NormalizedCache::new(TypePolicies::standard());
        cache.write_root("GetProjectStats({})", &json!({ "totalProjects": 4, "completedTasks": 2 }));
        assert_eq!(cache.entity_count(), 0);
        assert_eq!(cache.read_root("GetProjectStats({})").unwrap()["totalProjects"], 4);
        assert!(cache.read_root("missing").is_none());
    }

    #[test]
    fn test_dangling_reference_reads_null() {
        let mut cache = NormalizedCache::new(TypePolicies::standard());
        cache.write_root("q", &project("1", "A", "active"));
        cache.entities.clear();
        assert_eq!(cache.read_root("q").unwrap(), Value::Null);
    }
}
