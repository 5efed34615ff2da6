//! Preload Link header formatting.

use std::fmt;

use crate::manifest::compiler::ResourceDescriptor;

/// One `Link: rel=preload` header value for a pushable resource.
///
/// Renders per RFC 8288: the target in angle brackets, `rel=preload`,
/// then `as=<destination>` unless the destination is unspecified, then
/// `weight=<n>` when the manifest declared one.
#[derive(Debug, Clone, Copy)]
pub struct PreloadLink<'a> {
    resource: &'a ResourceDescriptor,
}

impl<'a> PreloadLink<'a> {
    /// Wrap a compiled resource for formatting.
    pub fn new(resource: &'a ResourceDescriptor) -> Self {
        Self { resource }
    }
}

impl fmt::Display for PreloadLink<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>; rel=preload", self.resource.path)?;
        if !self.resource.destination.is_unspecified() {
            write!(f, "; as={}", self.resource.destination)?;
        }
        if let Some(weight) = &self.resource.weight {
            write!(f, "; weight={weight}")?;
        }
        Ok(())
    }
}
