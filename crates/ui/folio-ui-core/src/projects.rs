//! Static project records and the node-to-project mapping.
//!
//! The records are site content, not computed state: they are authored as
//! JSON, parsed once at startup, and only ever read afterwards. The graph
//! viewer reports selected node ids; `selection_for` turns those into the
//! selection signal the sequencer consumes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use folio_stage_core::{ProjectId, SelectionSignal};

/// Error type for project content handling.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ProjectError {
    /// Project record not found
    #[error("Project not found: {id}")]
    ProjectNotFound { id: String },

    /// Node id has no project mapping
    #[error("Node has no project mapping: {node}")]
    UnmappedNode { node: String },

    /// Content parse error
    #[error("Project content parse error: {reason}")]
    Parse { reason: String },
}

impl From<serde_json::Error> for ProjectError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}

/// One portfolio project, with everything the detail surfaces render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    pub long_description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    pub main_image: String,
    #[serde(default)]
    pub inspiration_images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    pub year: String,
    pub role: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// All project records plus the node-id mapping used to resolve selections.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectLibrary {
    pub projects: HashMap<ProjectId, ProjectRecord>,
    pub node_map: HashMap<String, ProjectId>,
}

impl ProjectLibrary {
    /// Get a record by project id.
    #[inline]
    pub fn get(&self, id: &ProjectId) -> Option<&ProjectRecord> {
        self.projects.get(id)
    }

    /// Get a record by project id, as a Result for callers that treat a
    /// missing record as a content bug.
    pub fn require(&self, id: &ProjectId) -> Result<&ProjectRecord, ProjectError> {
        self.get(id).ok_or_else(|| ProjectError::ProjectNotFound {
            id: id.to_string(),
        })
    }

    /// Resolve a graph node id to its project record.
    pub fn resolve_node(&self, node: &str) -> Option<&ProjectRecord> {
        self.node_map.get(node).and_then(|id| self.projects.get(id))
    }

    /// Build the selection signal for the viewer's reported pick state.
    ///
    /// A selected node with no mapping still produces `has_selection = true`
    /// with `project = None` — the sequence runs and consumers render
    /// generic content.
    pub fn selection_for(&self, selected_node: Option<&str>) -> SelectionSignal {
        match selected_node {
            None => SelectionSignal::cleared(),
            Some(node) => {
                let project = self.node_map.get(node).cloned();
                if project.is_none() {
                    log::warn!("selected node '{node}' has no project mapping");
                }
                SelectionSignal::selected(project)
            }
        }
    }

    /// Number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// Parse a project library from its JSON authoring format.
pub fn parse_project_library(json: &str) -> Result<ProjectLibrary, ProjectError> {
    let library: ProjectLibrary = serde_json::from_str(json)?;
    for (node, id) in &library.node_map {
        if !library.projects.contains_key(id) {
            return Err(ProjectError::Parse {
                reason: format!("node '{node}' maps to unknown project '{id}'"),
            });
        }
    }
    Ok(library)
}
