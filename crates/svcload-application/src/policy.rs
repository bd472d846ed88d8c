//! Failure policy
//!
//! Decides what a lookup session does when a single registry entry fails to
//! resolve, validate or instantiate. Resource access failures are always
//! fatal; only entry failures are subject to the policy.

use serde::{Deserialize, Serialize};
use svcload_domain::error::{Error, Result};
use tracing::warn;

/// What to do with an entry that fails to resolve, validate or instantiate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Abort the remainder of the lookup on the first failure
    #[default]
    FailFast,
    /// Log the failing entry and continue with the next one
    SkipInvalid,
}

impl FailurePolicy {
    /// Admit or reject a failure raised while producing the next item
    ///
    /// Returns `Ok(())` when the session should carry on past the failing
    /// entry, or gives the error back when it must terminate the session.
    pub fn admit(self, error: Error) -> Result<()> {
        match self {
            Self::SkipInvalid if error.is_entry_failure() => {
                warn!(error = %error, "Skipping invalid provider entry");
                Ok(())
            }
            _ => Err(error),
        }
    }
}
