//! Resource descriptor data model.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kinds of resources the generators emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    ApiEnablement,
    IamBinding,
    BillingAssociation,
    LogSink,
    VmInstance,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::ApiEnablement => "api_enablement",
            ResourceKind::IamBinding => "iam_binding",
            ResourceKind::BillingAssociation => "billing_association",
            ResourceKind::LogSink => "log_sink",
            ResourceKind::VmInstance => "vm_instance",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single named, typed unit of cloud infrastructure configuration,
/// destined for the provisioning engine.
///
/// Properties keep insertion order so serialized manifests are stable
/// between runs with identical input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub kind: ResourceKind,
    pub name: String,
    #[serde(default)]
    pub properties: IndexMap<String, Value>,
    /// Names of resources that must be created before this one.
    #[serde(default)]
    pub depends_on: Vec<String>,
}

impl ResourceDescriptor {
    pub fn new(kind: ResourceKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            properties: IndexMap::new(),
            depends_on: Vec::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn depends_on(mut self, name: impl Into<String>) -> Self {
        self.depends_on.push(name.into());
        self
    }
}

/// The complete, dependency-ordered set of resource descriptors for one
/// deployment. Handed to the external deployment engine and discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentDescriptor {
    pub resources: Vec<ResourceDescriptor>,
}

impl DeploymentDescriptor {
    pub fn new(resources: Vec<ResourceDescriptor>) -> Self {
        Self { resources }
    }

    /// Position of a resource in the creation sequence.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.resources.iter().position(|r| r.name == name)
    }

    /// Whether every declared dependency precedes its dependent.
    pub fn is_topologically_ordered(&self) -> bool {
        self.resources.iter().enumerate().all(|(i, resource)| {
            resource
                .depends_on
                .iter()
                .all(|dep| self.index_of(dep).map_or(false, |j| j < i))
        })
    }
}
