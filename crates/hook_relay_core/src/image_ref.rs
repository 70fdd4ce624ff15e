//! Container image reference parsing.
//!
//! Webhook payloads name artifacts as image references of the form
//! `[domain/]path[:tag]`, e.g. `index.docker.io/library/nginx:1.27`. The
//! change event sent upstream carries the reference *name* — everything
//! except the tag — so this module parses and validates just enough of the
//! reference grammar to extract it reliably.

use crate::errors::ImageRefError;

/// Longest tag accepted, matching the registry tag grammar.
const MAX_TAG_LENGTH: usize = 128;

/// A parsed container image reference.
///
/// The first path segment is treated as a registry domain when it contains a
/// dot or a port (or is `localhost`); otherwise the whole reference is a
/// repository path on the default registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    domain: String,
    path: String,
    tag: Option<String>,
}

impl ImageRef {
    /// Parse an image reference string from a webhook payload.
    ///
    /// # Errors
    ///
    /// Returns [`ImageRefError::Empty`] for an empty string,
    /// [`ImageRefError::InvalidTag`] for a malformed tag, and
    /// [`ImageRefError::InvalidCharacter`] for anything else that violates
    /// the reference grammar. The error carries the raw input for logging.
    pub fn parse(reference: &str) -> Result<Self, ImageRefError> {
        if reference.is_empty() {
            return Err(ImageRefError::Empty);
        }

        let (name, tag) = split_tag(reference);
        if let Some(tag) = tag {
            if !is_valid_tag(tag) {
                return Err(ImageRefError::InvalidTag {
                    reference: reference.to_string(),
                });
            }
        }

        let (domain, path) = split_domain(name);
        if path.is_empty() || !path.split('/').all(is_valid_path_component) {
            return Err(ImageRefError::InvalidCharacter {
                reference: reference.to_string(),
            });
        }
        if let Some(domain) = domain {
            if !is_valid_domain(domain) {
                return Err(ImageRefError::InvalidCharacter {
                    reference: reference.to_string(),
                });
            }
        }

        Ok(Self {
            domain: domain.unwrap_or_default().to_string(),
            path: path.to_string(),
            tag: tag.map(str::to_string),
        })
    }

    /// Registry domain, empty when the reference carries none.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Repository path, e.g. `library/nginx`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Tag, when the reference carries one.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// The reference without its tag — what the change event names.
    pub fn name(&self) -> String {
        if self.domain.is_empty() {
            self.path.clone()
        } else {
            format!("{}/{}", self.domain, self.path)
        }
    }
}

/// Split off the tag: the part after the last `:`, provided that colon comes
/// after the last `/` (a colon earlier in the string is a domain port).
fn split_tag(reference: &str) -> (&str, Option<&str>) {
    match reference.rfind(':') {
        Some(idx) if idx > reference.rfind('/').unwrap_or(0) || !reference.contains('/') => {
            (&reference[..idx], Some(&reference[idx + 1..]))
        }
        _ => (reference, None),
    }
}

/// Split off the registry domain: the first path segment when it looks like
/// a host (contains a dot or port, or is `localhost`).
fn split_domain(name: &str) -> (Option<&str>, &str) {
    match name.split_once('/') {
        Some((first, rest))
            if first.contains('.') || first.contains(':') || first == "localhost" =>
        {
            (Some(first), rest)
        }
        _ => (None, name),
    }
}

fn is_valid_tag(tag: &str) -> bool {
    if tag.is_empty() || tag.len() > MAX_TAG_LENGTH {
        return false;
    }
    let mut chars = tag.chars();
    let first = chars.next().unwrap_or_default();
    (first.is_ascii_alphanumeric() || first == '_')
        && tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

/// Repository path components are lowercase alphanumeric runs joined by
/// single separators, per the distribution reference grammar.
fn is_valid_path_component(component: &str) -> bool {
    let alnum = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit();
    !component.is_empty()
        && component.starts_with(alnum)
        && component.ends_with(alnum)
        && component
            .chars()
            .all(|c| alnum(c) || matches!(c, '.' | '_' | '-'))
}

fn is_valid_domain(domain: &str) -> bool {
    let (host, port) = match domain.split_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (domain, None),
    };
    if host.is_empty()
        || !host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'))
    {
        return false;
    }
    match port {
        Some(port) => !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()),
        None => true,
    }
}

#[cfg(test)]
#[path = "image_ref_tests.rs"]
mod tests;
