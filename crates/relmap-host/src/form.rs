//! Form drafts for creating disasters and field reports.
//!
//! Drafts accumulate user input and validate into the insert shapes at
//! submit time. Validation is local; the backend may still reject an
//! insert.

use std::error::Error;
use std::fmt;

use relmap_core::entity::{NewDisaster, NewReport, Tags};
use relmap_core::RecordId;

/// Quick-pick tags offered on the disaster form.
pub const COMMON_TAGS: [&str; 8] = [
    "flood",
    "fire",
    "earthquake",
    "hurricane",
    "tornado",
    "evacuation",
    "urgent",
    "medical",
];

/// Local form validation failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// The disaster title is empty.
    MissingTitle,
    /// The disaster location is empty.
    MissingLocation,
    /// The report body is empty.
    MissingContent,
    /// The priority code is not one of `normal`, `high`, `urgent`.
    InvalidPriority {
        /// The rejected code.
        given: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "title is required"),
            Self::MissingLocation => write!(f, "location is required"),
            Self::MissingContent => write!(f, "content is required"),
            Self::InvalidPriority { given } => write!(f, "invalid priority {given:?}"),
        }
    }
}

impl Error for ValidationError {}

/// Draft state of the new-disaster form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisasterDraft {
    /// Display title.
    pub title: String,
    /// Human-readable location description.
    pub location_name: String,
    /// Free-form descriptive text.
    pub description: String,
    /// Selected tags, deduplicated.
    pub tags: Tags,
}

impl DisasterDraft {
    /// Add a tag unless it is blank or already selected.
    pub fn add_tag(&mut self, tag: &str) {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return;
        }
        self.tags.push(tag.to_string());
    }

    /// Remove a selected tag.
    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    /// Validate into an insert record.
    ///
    /// New disasters always start `active`, owned by the current user.
    pub fn validate(&self, owner_id: &str) -> Result<NewDisaster, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.location_name.trim().is_empty() {
            return Err(ValidationError::MissingLocation);
        }
        let description = self.description.trim();
        Ok(NewDisaster {
            title: self.title.trim().to_string(),
            location_name: self.location_name.trim().to_string(),
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
            tags: self.tags.clone(),
            owner_id: owner_id.to_string(),
            status: "active".to_string(),
        })
    }
}

/// Draft state of the field-report form.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportDraft {
    /// The disaster this report concerns, if any.
    pub disaster_id: Option<RecordId>,
    /// Report body text.
    pub content: String,
    /// Attached image URL.
    pub image_url: String,
    /// Priority code. Defaults to `normal`.
    pub priority: String,
}

impl Default for ReportDraft {
    fn default() -> Self {
        Self {
            disaster_id: None,
            content: String::new(),
            image_url: String::new(),
            priority: "normal".to_string(),
        }
    }
}

impl ReportDraft {
    /// Validate into an insert record.
    pub fn validate(&self) -> Result<NewReport, ValidationError> {
        if self.content.trim().is_empty() {
            return Err(ValidationError::MissingContent);
        }
        match self.priority.as_str() {
            "normal" | "high" | "urgent" => {}
            other => {
                return Err(ValidationError::InvalidPriority {
                    given: other.to_string(),
                })
            }
        }
        let image_url = self.image_url.trim();
        Ok(NewReport {
            disaster_id: self.disaster_id.clone(),
            content: self.content.trim().to_string(),
            image_url: if image_url.is_empty() {
                None
            } else {
                Some(image_url.to_string())
            },
            priority: self.priority.clone(),
        })
    }
}
