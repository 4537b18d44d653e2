//! Handler identities and resolved route policy.

use crate::roles::RoleSet;
use std::fmt;
use std::sync::Arc;

/// Identity of a handler's declaring class (controller, resolver, gateway).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassRef(Arc<str>);

impl ClassRef {
    /// Class identity by name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Class name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Identity of a handler method within its declaring class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandlerRef {
    class: ClassRef,
    method: Arc<str>,
}

impl HandlerRef {
    /// Handler identity from its class and method names.
    pub fn new(class: impl AsRef<str>, method: impl AsRef<str>) -> Self {
        Self {
            class: ClassRef::new(class),
            method: Arc::from(method.as_ref()),
        }
    }

    /// The declaring class.
    pub fn class(&self) -> &ClassRef {
        &self.class
    }

    /// Method name.
    pub fn method(&self) -> &str {
        &self.method
    }
}

impl fmt::Display for HandlerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.class.name(), self.method)
    }
}

/// Access policy of one handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutePolicy {
    /// Bypasses authentication entirely.
    pub is_public: bool,
    /// Lets anonymous callers through.
    pub is_optional: bool,
    /// System roles, any of which grants access.
    pub required_roles: RoleSet,
    /// Organization roles, any of which grants access.
    pub required_org_roles: RoleSet,
}
