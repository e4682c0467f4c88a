//! Selection input contract.
//!
//! The graph viewer reports selection changes; this crate never computes
//! which node is picked, it only reacts. The viewer resolves node ids to
//! project ids before signalling (see `folio-ui-core`'s project library).

use serde::{Deserialize, Serialize};

/// Stable identifier of a project record. Opaque to the sequencer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ProjectId(pub String);

impl ProjectId {
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One logical selection or deselection event from the graph viewer.
///
/// `project` is only meaningful while `has_selection` is true, and may still
/// be `None` there when no node-to-project mapping resolves; consumers must
/// render generic content in that case rather than fail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SelectionSignal {
    pub has_selection: bool,
    #[serde(default)]
    pub project: Option<ProjectId>,
}

impl SelectionSignal {
    /// A node was selected, optionally resolved to a project.
    #[inline]
    pub fn selected(project: Option<ProjectId>) -> Self {
        Self {
            has_selection: true,
            project,
        }
    }

    /// Selection was cleared.
    #[inline]
    pub fn cleared() -> Self {
        Self {
            has_selection: false,
            project: None,
        }
    }
}
