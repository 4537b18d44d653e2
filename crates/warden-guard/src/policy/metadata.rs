//! Declarative annotation storage.
//!
//! Annotations are registered when handlers are defined and read on every
//! invocation. Each entry is keyed by its target (a handler or its
//! declaring class) and a [`MetadataKey`].

use super::types::{ClassRef, HandlerRef};
use std::collections::HashMap;

/// Annotation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataKey {
    /// Handler bypasses authentication.
    Public,
    /// Handler admits anonymous callers.
    Optional,
    /// Required system roles.
    Roles,
    /// Required organization roles.
    OrgRoles,
}

impl MetadataKey {
    /// Annotation name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "PUBLIC",
            Self::Optional => "OPTIONAL",
            Self::Roles => "ROLES",
            Self::OrgRoles => "ORG_ROLES",
        }
    }
}

/// Boolean annotation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKey {
    /// See [`MetadataKey::Public`].
    Public,
    /// See [`MetadataKey::Optional`].
    Optional,
}

impl From<FlagKey> for MetadataKey {
    fn from(key: FlagKey) -> Self {
        match key {
            FlagKey::Public => Self::Public,
            FlagKey::Optional => Self::Optional,
        }
    }
}

/// Role-list annotation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RolesKey {
    /// See [`MetadataKey::Roles`].
    Roles,
    /// See [`MetadataKey::OrgRoles`].
    OrgRoles,
}

impl From<RolesKey> for MetadataKey {
    fn from(key: RolesKey) -> Self {
        match key {
            RolesKey::Roles => Self::Roles,
            RolesKey::OrgRoles => Self::OrgRoles,
        }
    }
}

/// Annotation value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataValue {
    /// Value of a [`FlagKey`].
    Flag(bool),
    /// Value of a [`RolesKey`].
    Roles(Vec<String>),
}

impl MetadataValue {
    /// The boolean, if this is a flag.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            Self::Roles(_) => None,
        }
    }

    /// The role list, if this is one.
    pub fn as_roles(&self) -> Option<&[String]> {
        match self {
            Self::Roles(roles) => Some(roles),
            Self::Flag(_) => None,
        }
    }
}

/// What an annotation is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// A single handler method.
    Handler(HandlerRef),
    /// Every handler declared by a class.
    Class(ClassRef),
}

impl From<HandlerRef> for Target {
    fn from(handler: HandlerRef) -> Self {
        Self::Handler(handler)
    }
}

impl From<&HandlerRef> for Target {
    fn from(handler: &HandlerRef) -> Self {
        Self::Handler(handler.clone())
    }
}

impl From<ClassRef> for Target {
    fn from(class: ClassRef) -> Self {
        Self::Class(class)
    }
}

impl From<&ClassRef> for Target {
    fn from(class: &ClassRef) -> Self {
        Self::Class(class.clone())
    }
}

/// Key/value annotation store.
#[derive(Debug, Clone, Default)]
pub struct MetadataStore {
    entries: HashMap<(Target, MetadataKey), MetadataValue>,
}

impl MetadataStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start annotating `target`.
    pub fn annotate(&mut self, target: impl Into<Target>) -> Annotate<'_> {
        Annotate {
            store: self,
            target: target.into(),
        }
    }

    /// Value stored for exactly this target.
    pub fn get(&self, target: &Target, key: MetadataKey) -> Option<&MetadataValue> {
        self.entries.get(&(target.clone(), key))
    }

    /// First value found walking `targets` in order.
    pub fn resolve(&self, key: MetadataKey, targets: &[Target]) -> Option<&MetadataValue> {
        targets.iter().find_map(|target| self.get(target, key))
    }

    /// First boolean stored under `key` walking `targets` in order.
    /// Entries of another shape are skipped.
    pub fn resolve_flag(&self, key: FlagKey, targets: &[Target]) -> Option<bool> {
        let key = key.into();
        targets
            .iter()
            .find_map(|target| self.get(target, key).and_then(MetadataValue::as_flag))
    }

    /// First role list stored under `key` walking `targets` in order.
    /// Entries of another shape are skipped.
    pub fn resolve_roles(&self, key: RolesKey, targets: &[Target]) -> Option<&[String]> {
        let key = key.into();
        targets
            .iter()
            .find_map(|target| self.get(target, key).and_then(MetadataValue::as_roles))
    }

    /// Number of stored annotations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was annotated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, target: Target, key: MetadataKey, value: MetadataValue) {
        self.entries.insert((target, key), value);
    }
}

/// Builder attaching annotations to one target. Re-annotating a key
/// replaces the previous value.
pub struct Annotate<'a> {
    store: &'a mut MetadataStore,
    target: Target,
}

impl Annotate<'_> {
    /// Exempt from authentication.
    pub fn public(self) -> Self {
        self.flag(FlagKey::Public, true)
    }

    /// Allow anonymous callers.
    pub fn optional(self) -> Self {
        self.flag(FlagKey::Optional, true)
    }

    /// Set a boolean annotation explicitly.
    pub fn flag(self, key: FlagKey, value: bool) -> Self {
        self.store
            .insert(self.target.clone(), key.into(), MetadataValue::Flag(value));
        self
    }

    /// Require one of these system roles.
    pub fn roles<I, S>(self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.role_list(RolesKey::Roles, roles)
    }

    /// Require one of these organization roles.
    pub fn org_roles<I, S>(self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.role_list(RolesKey::OrgRoles, roles)
    }

    fn role_list<I, S>(self, key: RolesKey, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles = roles.into_iter().map(Into::into).collect();
        self.store
            .insert(self.target.clone(), key.into(), MetadataValue::Roles(roles));
        self
    }
}
