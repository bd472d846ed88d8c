//! Lookup context
//!
//! The search-path and resolution collaborators a lookup runs against.
//! A context is read-only and cheap to clone; sessions built from it never
//! write back into it.

use std::fmt;
use std::sync::Arc;

use svcload_domain::ports::{ResourceLocator, TypeResolver};

use crate::policy::FailurePolicy;

/// Collaborators and policy used by every session started from it
#[derive(Clone)]
pub struct LookupContext {
    locator: Arc<dyn ResourceLocator>,
    resolver: Arc<dyn TypeResolver>,
    policy: FailurePolicy,
}

impl LookupContext {
    /// Create a context with the default fail-fast policy
    pub fn new(locator: Arc<dyn ResourceLocator>, resolver: Arc<dyn TypeResolver>) -> Self {
        Self {
            locator,
            resolver,
            policy: FailurePolicy::default(),
        }
    }

    /// Set the failure policy
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the resource locator
    pub fn with_locator(mut self, locator: Arc<dyn ResourceLocator>) -> Self {
        self.locator = locator;
        self
    }

    /// Replace the type resolver
    pub fn with_resolver(mut self, resolver: Arc<dyn TypeResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Resource locator for registry resources
    pub fn locator(&self) -> &Arc<dyn ResourceLocator> {
        &self.locator
    }

    /// Type resolver for provider names
    pub fn resolver(&self) -> &Arc<dyn TypeResolver> {
        &self.resolver
    }

    /// Failure policy for invalid entries
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }
}

impl fmt::Debug for LookupContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupContext")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
