//! Guard construction.

use super::engine::AuthGuard;
use crate::config::{validate_config, AuditConfig, GuardConfig};
use crate::context::TransportKind;
use crate::error::{ErrorMapper, GuardError};
use crate::policy::{MetadataStore, PolicyResolver};
use crate::provider::IdentityProvider;
use std::sync::Arc;
use tracing::info;

/// Builder for [`AuthGuard`].
///
/// All configuration problems surface from [`GuardBuilder::build`]; a built
/// guard never fails for setup reasons at request time.
#[derive(Default)]
pub struct GuardBuilder {
    provider: Option<Arc<dyn IdentityProvider>>,
    metadata: Arc<MetadataStore>,
    config: GuardConfig,
}

impl GuardBuilder {
    /// Builder with default configuration and no provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity provider used for sessions and organization roles.
    pub fn provider(mut self, provider: Arc<dyn IdentityProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Annotation store populated at handler-definition time.
    pub fn metadata(mut self, metadata: impl Into<Arc<MetadataStore>>) -> Self {
        self.metadata = metadata.into();
        self
    }

    /// Guard configuration.
    pub fn config(mut self, config: GuardConfig) -> Self {
        self.config = config;
        self
    }

    /// Only audit configuration, keeping other settings.
    pub fn audit(mut self, audit: AuditConfig) -> Self {
        self.config.audit = audit;
        self
    }

    /// Transports to serve, by configuration name.
    pub fn transports<I, S>(mut self, transports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.transports = transports.into_iter().map(Into::into).collect();
        self
    }

    /// Validate and build the guard.
    pub fn build(self) -> Result<AuthGuard, GuardError> {
        let provider = self.provider.ok_or(GuardError::MissingProvider)?;

        let transports = self
            .config
            .transports
            .iter()
            .map(|name| name.parse::<TransportKind>())
            .collect::<Result<Vec<_>, _>>()?;

        validate_config(&self.config).map_err(|errors| {
            let message = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            GuardError::Config(message)
        })?;

        info!(
            transports = ?transports,
            annotations = self.metadata.len(),
            "Authorization guard ready"
        );

        Ok(AuthGuard {
            provider,
            resolver: PolicyResolver::new(self.metadata),
            errors: ErrorMapper,
            transports,
            audit: self.config.audit,
        })
    }
}
