//! Class iterator
//!
//! Lazily merges every registry resource of a category into one ordered,
//! deduplicated stream of type handles.
//!
//! ```text
//!             next resource            line read
//! NeedResource ───────────▶ NeedLine ──────────────┐
//!      ▲   │ none left        │  ▲ blank/comment  │
//!      │   ▼                  │  └────────────────┘
//!      │ Exhausted ◀── error ─┤ fresh name
//!      └── resource drained ──┘     ▼
//!                               HaveItem ── yielded ──▶ NeedLine
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use svcload_domain::error::{Error, Result};
use svcload_domain::ports::{ResourceIter, TypeResolver};
use svcload_domain::value_objects::{Category, TypeHandle};
use tracing::debug;

use super::parser::parse_line;
use super::reader::RegistryReader;
use super::type_cache::{Resolution, TypeCache};
use crate::policy::FailurePolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    NeedResource,
    NeedLine,
    HaveItem,
    Exhausted,
}

/// Lazy stream of type handles for the providers of category `C`
///
/// Resources are visited in locator order and lines in file order. A name
/// already resolved in this session is skipped silently. The first fatal
/// error is yielded once and the stream then ends.
///
/// At most one resource is open at a time. It is closed when drained, when
/// an error ends the stream, or when the iterator is dropped.
pub struct Classes<C: Category> {
    resources: ResourceIter,
    resolver: Arc<dyn TypeResolver>,
    policy: FailurePolicy,
    current: Option<RegistryReader>,
    buffered: Option<TypeHandle>,
    cache: TypeCache,
    state: State,
    resources_opened: usize,
    _category: PhantomData<fn() -> C>,
}

impl<C: Category> Classes<C> {
    /// Start a session over `resources`
    pub fn new(
        resources: ResourceIter,
        resolver: Arc<dyn TypeResolver>,
        policy: FailurePolicy,
    ) -> Self {
        Self {
            resources,
            resolver,
            policy,
            current: None,
            buffered: None,
            cache: TypeCache::new(),
            state: State::NeedResource,
            resources_opened: 0,
            _category: PhantomData,
        }
    }

    /// Whether another handle is available, reading ahead as needed
    ///
    /// A fatal error is returned here and ends the stream.
    pub fn has_next(&mut self) -> Result<bool> {
        self.advance()
    }

    /// Provider names resolved so far in this session, in discovery order
    pub fn provider_names(&self) -> impl Iterator<Item = &str> {
        self.cache.names()
    }

    /// Number of registry resources opened so far
    pub fn resources_opened(&self) -> usize {
        self.resources_opened
    }

    /// Whether a registry resource is currently held open
    pub fn is_resource_open(&self) -> bool {
        self.current.as_ref().is_some_and(RegistryReader::is_open)
    }

    fn advance(&mut self) -> Result<bool> {
        loop {
            match self.state {
                State::HaveItem => return Ok(true),
                State::Exhausted => return Ok(false),
                State::NeedResource => match self.resources.next() {
                    None => {
                        debug!(
                            category = C::NAME,
                            resources = self.resources_opened,
                            "Provider discovery exhausted"
                        );
                        self.state = State::Exhausted;
                        return Ok(false);
                    }
                    Some(Err(e)) => return Err(self.fail(e)),
                    Some(Ok(resource)) => match RegistryReader::open(resource.as_ref()) {
                        Ok(reader) => {
                            self.current = Some(reader);
                            self.resources_opened += 1;
                            self.state = State::NeedLine;
                        }
                        Err(e) => return Err(self.fail(e)),
                    },
                },
                State::NeedLine => {
                    let Some(reader) = self.current.as_mut() else {
                        self.state = State::NeedResource;
                        continue;
                    };
                    let line = match reader.next_line() {
                        Ok(Some(line)) => line,
                        Ok(None) => {
                            self.release();
                            self.state = State::NeedResource;
                            continue;
                        }
                        Err(e) => return Err(self.fail(e)),
                    };
                    let Some(name) = parse_line(&line) else {
                        continue;
                    };
                    let resolved =
                        self.cache
                            .resolve::<C>(name, reader.location(), self.resolver.as_ref());
                    match resolved {
                        Ok(Resolution::Fresh(handle)) => {
                            self.buffered = Some(handle);
                            self.state = State::HaveItem;
                            return Ok(true);
                        }
                        Ok(Resolution::Cached(_)) => {
                            debug!(
                                provider = name,
                                resource = reader.location(),
                                "Skipping duplicate provider entry"
                            );
                        }
                        Err(e) => {
                            if let Err(e) = self.policy.admit(e) {
                                return Err(self.fail(e));
                            }
                        }
                    }
                }
            }
        }
    }

    fn release(&mut self) {
        if let Some(mut reader) = self.current.take() {
            reader.close();
        }
    }

    fn fail(&mut self, error: Error) -> Error {
        self.release();
        self.buffered = None;
        self.state = State::Exhausted;
        error
    }
}

impl<C: Category> Iterator for Classes<C> {
    type Item = Result<TypeHandle>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.advance() {
            Ok(true) => {
                self.state = State::NeedLine;
                self.buffered.take().map(Ok)
            }
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

impl<C: Category> std::iter::FusedIterator for Classes<C> {}
