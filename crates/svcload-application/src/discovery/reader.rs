//! Registry reader
//!
//! Owns the open stream of exactly one registry resource. The stream is
//! released exactly once: on end of input, on the first read or decoding
//! error, on an explicit [`close`](RegistryReader::close), or when the reader
//! is dropped, whichever comes first.

use std::io::{BufRead, Lines};

use svcload_domain::error::{Error, Result};
use svcload_domain::ports::RegistryResource;
use tracing::debug;

/// Line-by-line reader over one opened registry resource
pub struct RegistryReader {
    location: String,
    lines: Option<Lines<Box<dyn BufRead + Send>>>,
    line_number: usize,
}

impl RegistryReader {
    /// Open a registry resource for reading
    pub fn open(resource: &dyn RegistryResource) -> Result<Self> {
        let location = resource.location().to_string();
        let stream = resource
            .open()
            .map_err(|e| Error::resource_access_with_source(location.clone(), e))?;
        debug!(resource = %location, "Opened registry resource");
        Ok(Self {
            location,
            lines: Some(stream.lines()),
            line_number: 0,
        })
    }

    /// Location of the underlying resource
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Number of lines read so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Whether the underlying stream is still open
    pub fn is_open(&self) -> bool {
        self.lines.is_some()
    }

    /// Read the next raw line, decoded as UTF-8
    ///
    /// Returns `Ok(None)` once the resource is exhausted or closed. A read
    /// or decoding error closes the stream before it is returned.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        let Some(lines) = self.lines.as_mut() else {
            return Ok(None);
        };
        match lines.next() {
            Some(Ok(line)) => {
                self.line_number += 1;
                Ok(Some(line))
            }
            Some(Err(e)) => {
                self.close();
                Err(Error::ResourceAccess {
                    location: self.location.clone(),
                    message: format!("read failed after line {}: {e}", self.line_number),
                    source: Some(e),
                })
            }
            None => {
                self.close();
                Ok(None)
            }
        }
    }

    /// Release the underlying stream; later calls are no-ops
    pub fn close(&mut self) {
        if self.lines.take().is_some() {
            debug!(
                resource = %self.location,
                lines = self.line_number,
                "Closed registry resource"
            );
        }
    }
}

impl Drop for RegistryReader {
    fn drop(&mut self) {
        self.close();
    }
}
