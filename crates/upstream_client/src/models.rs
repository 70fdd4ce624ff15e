//! Wire models for the control plane's change-notification API.
//!
//! The v9 notification body is a tagged record:
//!
//! ```json
//! { "Kind": "image", "Source": { "Name": "index.docker.io/library/nginx" } }
//! ```
//!
//! Field casing follows the control plane's API, hence the explicit serde
//! renames.

use serde::{Deserialize, Serialize};

/// A normalized "something changed" record sent to the control plane.
///
/// Transient: constructed per webhook delivery, sent once, not retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// What kind of change this is.
    #[serde(rename = "Kind")]
    pub kind: ChangeKind,

    /// The thing that changed, shaped per kind.
    #[serde(rename = "Source")]
    pub source: ChangeSource,
}

impl ChangeEvent {
    /// Build an "image changed" event for the given image name.
    ///
    /// The name is the image reference without its tag, e.g.
    /// `index.docker.io/library/nginx`.
    pub fn image_changed(name: impl Into<String>) -> Self {
        Self {
            kind: ChangeKind::Image,
            source: ChangeSource::Image(ImageUpdate { name: name.into() }),
        }
    }
}

/// Kinds of change the control plane understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    /// A container image has a new or updated tag.
    #[serde(rename = "image")]
    Image,
}

/// Kind-specific payload of a change event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChangeSource {
    /// Payload for [`ChangeKind::Image`].
    Image(ImageUpdate),
}

/// Details of an image change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUpdate {
    /// Image name without tag.
    #[serde(rename = "Name")]
    pub name: String,
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
