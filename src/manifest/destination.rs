//! Request destinations.
//!
//! The fixed vocabulary of the Fetch specification's request-destination
//! enumeration. Any other token is rejected during deserialization.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a pushed resource will be used for (the `as=` parameter of the
/// preload header).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestDestination {
    Audio,
    Audioworklet,
    Document,
    Embed,
    Font,
    Frame,
    Iframe,
    Image,
    Manifest,
    Object,
    Paintworklet,
    Report,
    Script,
    Sharedworker,
    Style,
    Track,
    Video,
    Worker,
    Xslt,
    /// The empty destination: the manifest did not say what the resource is.
    #[default]
    #[serde(rename = "")]
    Unspecified,
}

impl RequestDestination {
    /// Token used in the `as=` header parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Audioworklet => "audioworklet",
            Self::Document => "document",
            Self::Embed => "embed",
            Self::Font => "font",
            Self::Frame => "frame",
            Self::Iframe => "iframe",
            Self::Image => "image",
            Self::Manifest => "manifest",
            Self::Object => "object",
            Self::Paintworklet => "paintworklet",
            Self::Report => "report",
            Self::Script => "script",
            Self::Sharedworker => "sharedworker",
            Self::Style => "style",
            Self::Track => "track",
            Self::Video => "video",
            Self::Worker => "worker",
            Self::Xslt => "xslt",
            Self::Unspecified => "",
        }
    }

    /// True when no destination was declared.
    pub fn is_unspecified(&self) -> bool {
        matches!(self, Self::Unspecified)
    }
}

impl fmt::Display for RequestDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
