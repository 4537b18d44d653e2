//! Decision engine benchmarks.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{HeaderMap, Request};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tokio::runtime::Runtime;
use warden_guard::provider::{ActiveMemberRoleApi, MemberRole, SessionRecord};
use warden_guard::roles::{role_set, roles_match};
use warden_guard::{
    AuthGuard, ExecutionContext, HandlerRef, IdentityProvider, MetadataStore, ProviderError,
    RoleValue, Session, User,
};

struct StaticProvider {
    session: Session,
}

#[async_trait]
impl IdentityProvider for StaticProvider {
    async fn get_session(&self, _headers: &HeaderMap) -> Result<Option<Session>, ProviderError> {
        Ok(Some(self.session.clone()))
    }

    fn active_member_role(&self) -> Option<&dyn ActiveMemberRoleApi> {
        Some(self)
    }
}

#[async_trait]
impl ActiveMemberRoleApi for StaticProvider {
    async fn get_active_member_role(
        &self,
        _headers: &HeaderMap,
    ) -> Result<Option<MemberRole>, ProviderError> {
        Ok(Some(MemberRole {
            role: RoleValue::from("owner"),
        }))
    }
}

fn bench_guard() -> AuthGuard {
    let provider = StaticProvider {
        session: Session {
            user: User::new("bench-user").with_role("user,moderator"),
            session: SessionRecord {
                id: "bench-session".into(),
                user_id: "bench-user".into(),
                active_organization_id: Some("org-1".into()),
                expires_at: None,
            },
        },
    };

    let mut store = MetadataStore::new();
    store.annotate(HandlerRef::new("Bench", "public")).public();
    store.annotate(HandlerRef::new("Bench", "roles")).roles(["admin", "moderator"]);
    store
        .annotate(HandlerRef::new("Bench", "org"))
        .roles(["moderator"])
        .org_roles(["owner", "admin"]);

    AuthGuard::builder()
        .provider(Arc::new(provider))
        .metadata(store)
        .transports(["http", "rpc"])
        .build()
        .unwrap()
}

fn benchmark_role_match(c: &mut Criterion) {
    let required = role_set(["admin", "moderator", "editor"]);
    let held = RoleValue::from("viewer, editor");

    c.bench_function("roles_match_comma_separated", |b| {
        b.iter(|| roles_match(black_box(Some(&held)), black_box(&required)))
    });
}

fn benchmark_can_activate(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let guard = bench_guard();
    let guard = &guard;

    for method in ["public", "roles", "org"] {
        let handler = HandlerRef::new("Bench", method);
        let handler = &handler;
        c.bench_function(&format!("can_activate_http_{method}"), |b| {
            b.to_async(&rt).iter(|| async move {
                let (mut parts, _) = Request::new(()).into_parts();
                let _ = guard
                    .can_activate(ExecutionContext::Http(&mut parts), black_box(handler))
                    .await;
            })
        });
    }
}

criterion_group!(benches, benchmark_role_match, benchmark_can_activate);
criterion_main!(benches);
