//! Content entries uploaded to the content store.

use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Body of a description entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionDocument {
    /// Full description text.
    pub description: String,
}

/// Single named entry uploaded as a content-store folder.
///
/// Serializes as `{"path": "...", "content": {"description": "..."}}`, the
/// shape the upload endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    path: String,
    content: DescriptionDocument,
}

impl ContentEntry {
    /// Prefix of generated description entry names.
    pub const DESCRIPTION_PREFIX: &'static str = "description-";

    /// Packages description text as an entry named
    /// `description-<epoch millis>`.
    ///
    /// The millisecond suffix keeps entries created in one session from
    /// colliding on the same path.
    #[must_use]
    pub fn description(text: impl Into<String>, clock: &impl Clock) -> Self {
        let millis = clock.utc().timestamp_millis();
        Self {
            path: format!("{}{millis}", Self::DESCRIPTION_PREFIX),
            content: DescriptionDocument {
                description: text.into(),
            },
        }
    }

    /// Returns the entry name.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the entry body.
    #[must_use]
    pub const fn content(&self) -> &DescriptionDocument {
        &self.content
    }
}
