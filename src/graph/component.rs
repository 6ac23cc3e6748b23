//! Component model for discovered stack members.
//!
//! A [`Component`] is one node of the dependency graph: an application, a
//! managed service instance, or a user-provided service instance. The JSON
//! shape (`id`/`name`/`kind`/`dependentOf`/`isClonable`) is the wire format
//! returned by the discovery endpoint.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Kind of a deployable component in the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentKind {
    /// A deployable application that can bind services and expose routes.
    Application,
    /// A provisioned service instance with an associated service plan.
    ManagedService,
    /// A service instance without a plan, carrying free-form credentials.
    UserProvidedService,
}

/// A node in the dependency graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Platform-assigned identifier, stable across calls.
    pub id: String,

    /// Display name.
    pub name: String,

    pub kind: ComponentKind,

    /// Identifiers of the components that depend on this one. A shared
    /// service accumulates every dependent; only the discovery root stays
    /// empty.
    pub dependent_of: BTreeSet<String>,

    /// Whether the component should be included if the stack is replicated.
    /// Always true for nodes discovered in the current scope.
    pub is_clonable: bool,
}

impl Component {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            dependent_of: BTreeSet::new(),
            is_clonable: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_component_is_clonable_with_no_dependents() {
        let c = Component::new("app-1", "frontend", ComponentKind::Application);
        assert!(c.is_clonable);
        assert!(c.dependent_of.is_empty());
    }

    #[test]
    fn test_wire_field_names() {
        let mut c = Component::new("svc-1", "db", ComponentKind::ManagedService);
        c.dependent_of.insert("app-1".to_string());

        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["id"], "svc-1");
        assert_eq!(json["name"], "db");
        assert_eq!(json["kind"], "ManagedService");
        assert_eq!(json["dependentOf"][0], "app-1");
        assert_eq!(json["isClonable"], true);
    }

    #[test]
    fn test_kind_round_trips_as_variant_name() {
        let json = serde_json::to_string(&ComponentKind::UserProvidedService).unwrap();
        assert_eq!(json, "\"UserProvidedService\"");
        let kind: ComponentKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, ComponentKind::UserProvidedService);
    }
}
