//! # Project Data Structures
//!
//! A `Project` groups the beams of one job. Projects serialize to `.bcp`
//! (beam calculation project) files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! └── items: HashMap<Uuid, BeamInput> (all beams)
//! ```
//!
//! Only inputs are stored. Results are recomputed on demand, so a saved
//! project never carries stale numbers.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::project::Project;
//! use beam_core::calculations::BeamInput;
//! use beam_core::calculations::beam::BeamConfig;
//! use beam_core::loads::Load;
//!
//! let mut project = Project::new("Jane Engineer", "25-042", "ACME Corp");
//! let id = project.add_item(BeamInput {
//!     label: "B-1".to_string(),
//!     config: BeamConfig::simply_supported(4000.0),
//!     loads: vec![Load::point(5000.0, 2000.0)],
//!     cross_section: Default::default(),
//!     material: Default::default(),
//! });
//!
//! let result = project.get_item(&id).unwrap().analyze();
//! assert!(result.safety_factor > 1.0);
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{AnalysisResult, BeamInput};

/// Current schema version for .bcp files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// Items are stored in a flat UUID-keyed map so ids stay stable when
/// beams are added or removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// All beams, keyed by UUID
    pub items: HashMap<Uuid, BeamInput>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Arguments
    ///
    /// * `engineer` - Name of the responsible engineer
    /// * `job_id` - Job/project number (e.g., "25-001")
    /// * `client` - Client name
    ///
    /// # Example
    ///
    /// ```rust
    /// use beam_core::project::Project;
    ///
    /// let project = Project::new("John Doe", "25-001", "Client Corp");
    /// assert_eq!(project.meta.engineer, "John Doe");
    /// ```
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>, client: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            items: HashMap::new(),
        }
    }

    /// Add a beam to the project and return its new UUID.
    pub fn add_item(&mut self, item: BeamInput) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove a beam by UUID.
    ///
    /// Returns the removed beam if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<BeamInput> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    /// Get a beam by UUID.
    pub fn get_item(&self, id: &Uuid) -> Option<&BeamInput> {
        self.items.get(id)
    }

    /// Get a mutable reference to a beam by UUID.
    ///
    /// Marks the project as modified when the beam exists.
    pub fn get_item_mut(&mut self, id: &Uuid) -> Option<&mut BeamInput> {
        if self.items.contains_key(id) {
            self.meta.modified = Utc::now();
            self.items.get_mut(id)
        } else {
            None
        }
    }

    /// Find the first beam with the given label.
    pub fn find_by_label(&self, label: &str) -> Option<(&Uuid, &BeamInput)> {
        self.items.iter().find(|(_, item)| item.label == label)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Number of beams in the project
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Analyze every beam, sorted by label.
    pub fn analyze_all(&self) -> Vec<(Uuid, &BeamInput, AnalysisResult)> {
        let mut results: Vec<_> = self
            .items
            .iter()
            .map(|(id, item)| (*id, item, item.analyze()))
            .collect();
        results.sort_by(|a, b| a.1.label.cmp(&b.1.label));
        results
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}
