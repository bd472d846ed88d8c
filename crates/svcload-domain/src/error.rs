//! Error handling types
//!
//! Every discovery failure is fatal for the lookup session that raised it.
//! Errors surface at the point of the lazy sequence where the offending entry
//! would have been produced, so items yielded before remain usable.

use thiserror::Error;

use crate::value_objects::BoxError;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for svcload
#[derive(Error, Debug)]
pub enum Error {
    /// A registry resource could not be opened or read
    #[error("Resource access error at {location}: {message}")]
    ResourceAccess {
        /// Location of the resource (path or logical name)
        location: String,
        /// Description of the failure
        message: String,
        /// Underlying I/O error, if any
        #[source]
        source: Option<std::io::Error>,
    },

    /// A named provider could not be resolved to any known type
    #[error("Provider '{name}' listed in {resource} could not be resolved")]
    TypeResolution {
        /// The provider name as written in the registry
        name: String,
        /// Location of the registry resource naming it
        resource: String,
    },

    /// A resolved type does not satisfy the category's capability contract
    #[error(
        "Provider '{name}' listed in {resource} does not implement category {category} \
         (expected {expected}, found {actual})"
    )]
    TypeMismatch {
        /// The provider name as written in the registry
        name: String,
        /// Location of the registry resource naming it
        resource: String,
        /// Category identifier being looked up
        category: String,
        /// Contract required by the category
        expected: String,
        /// Contract the provider actually offers
        actual: String,
    },

    /// Construction of a provider's default instance failed
    #[error("Provider '{name}' for category {category} could not be instantiated: {source}")]
    Instantiation {
        /// The provider name
        name: String,
        /// Category identifier being looked up
        category: String,
        /// The underlying construction failure
        #[source]
        source: BoxError,
    },

    /// Configuration-related error (simple form)
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
    },

    /// Configuration-related error (with source)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O error outside registry access (log files, config files)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Discovery error creation methods
impl Error {
    /// Create a resource access error
    pub fn resource_access<L: Into<String>, S: Into<String>>(location: L, message: S) -> Self {
        Self::ResourceAccess {
            location: location.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a resource access error wrapping an I/O failure
    pub fn resource_access_with_source<L: Into<String>>(
        location: L,
        source: std::io::Error,
    ) -> Self {
        Self::ResourceAccess {
            location: location.into(),
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Create a type resolution error
    pub fn type_resolution<N: Into<String>, R: Into<String>>(name: N, resource: R) -> Self {
        Self::TypeResolution {
            name: name.into(),
            resource: resource.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(
        name: impl Into<String>,
        resource: impl Into<String>,
        category: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            name: name.into(),
            resource: resource.into(),
            category: category.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an instantiation error wrapping the construction failure
    pub fn instantiation<N: Into<String>, C: Into<String>>(
        name: N,
        category: C,
        source: BoxError,
    ) -> Self {
        Self::Instantiation {
            name: name.into(),
            category: category.into(),
            source,
        }
    }

    /// Whether this error concerns a single registry entry rather than a
    /// whole resource
    ///
    /// Entry failures are the ones a skip-invalid policy may drop.
    pub fn is_entry_failure(&self) -> bool {
        matches!(
            self,
            Self::TypeResolution { .. } | Self::TypeMismatch { .. } | Self::Instantiation { .. }
        )
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error (simple)
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
