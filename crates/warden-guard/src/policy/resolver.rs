//! Policy resolution with handler-over-class precedence.

use super::metadata::{FlagKey, MetadataStore, RolesKey, Target};
use super::types::{HandlerRef, RoutePolicy};
use crate::roles::{role_set, RoleSet};
use std::sync::Arc;

/// Resolves the access policy of a handler from its annotations.
///
/// Reads never mutate the store, so resolving the same handler always
/// yields the same policy.
#[derive(Debug, Clone, Default)]
pub struct PolicyResolver {
    store: Arc<MetadataStore>,
}

impl PolicyResolver {
    /// Resolver over a populated annotation store.
    pub fn new(store: Arc<MetadataStore>) -> Self {
        Self { store }
    }

    /// Resolve all four policy fields for `handler`.
    pub fn resolve(&self, handler: &HandlerRef) -> RoutePolicy {
        let targets = [
            Target::Handler(handler.clone()),
            Target::Class(handler.class().clone()),
        ];

        RoutePolicy {
            is_public: self.flag(FlagKey::Public, &targets),
            is_optional: self.flag(FlagKey::Optional, &targets),
            required_roles: self.roles(RolesKey::Roles, &targets),
            required_org_roles: self.roles(RolesKey::OrgRoles, &targets),
        }
    }

    fn flag(&self, key: FlagKey, targets: &[Target]) -> bool {
        self.store.resolve_flag(key, targets).unwrap_or(false)
    }

    fn roles(&self, key: RolesKey, targets: &[Target]) -> RoleSet {
        self.store
            .resolve_roles(key, targets)
            .map(role_set)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(configure: impl FnOnce(&mut MetadataStore)) -> PolicyResolver {
        let mut store = MetadataStore::new();
        configure(&mut store);
        PolicyResolver::new(Arc::new(store))
    }

    #[test]
    fn test_no_annotations_is_default_policy() {
        let resolver = resolver(|_| {});
        let policy = resolver.resolve(&HandlerRef::new("Users", "list"));
        assert_eq!(policy, RoutePolicy::default());
    }

    #[test]
    fn test_handler_overrides_class() {
        let handler = HandlerRef::new("Users", "list");
        let resolver = resolver(|store| {
            store.annotate(handler.class()).roles(["admin"]).public();
            store
                .annotate(&handler)
                .roles(["moderator"])
                .flag(FlagKey::Public, false);
        });

        let policy = resolver.resolve(&handler);
        assert!(!policy.is_public);
        assert_eq!(policy.required_roles, role_set(["moderator"]));
    }

    #[test]
    fn test_class_applies_when_handler_omits() {
        let handler = HandlerRef::new("Orgs", "settings");
        let resolver = resolver(|store| {
            store.annotate(handler.class()).org_roles(["owner", "admin"]);
            store.annotate(&handler).optional();
        });

        let policy = resolver.resolve(&handler);
        assert!(policy.is_optional);
        assert_eq!(policy.required_org_roles, role_set(["owner", "admin"]));
        assert!(policy.required_roles.is_empty());
    }

    #[test]
    fn test_handler_flags_keep_class_roles() {
        let handler = HandlerRef::new("Admin", "audit");
        let resolver = resolver(|store| {
            store.annotate(handler.class()).roles(["admin"]);
            store
                .annotate(&handler)
                .flag(FlagKey::Public, false)
                .flag(FlagKey::Optional, false);
        });

        let policy = resolver.resolve(&handler);
        assert_eq!(policy.required_roles, role_set(["admin"]));
        assert!(!policy.is_public);
        assert!(!policy.is_optional);
    }

    #[test]
    fn test_class_annotation_does_not_leak_to_other_classes() {
        let resolver = resolver(|store| {
            store.annotate(crate::policy::ClassRef::new("Admin")).roles(["admin"]);
        });

        let policy = resolver.resolve(&HandlerRef::new("Users", "list"));
        assert!(policy.required_roles.is_empty());
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let handler = HandlerRef::new("Users", "delete");
        let resolver = resolver(|store| {
            store.annotate(&handler).roles(["admin"]);
        });

        let first = resolver.resolve(&handler);
        for _ in 0..10 {
            assert_eq!(resolver.resolve(&handler), first);
        }
    }
}
