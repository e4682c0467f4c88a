//! Node-detail overlay: the radial action buttons and the inspiration-image
//! strip that appear around a selected node late in the sequence.

use serde::{Deserialize, Serialize};

use folio_stage_core::AnimationStage;

use crate::projects::ProjectRecord;

/// Offset of a radial button (or its arc waypoint) from the node, in px.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadialOffset {
    pub top: f64,
    pub right: f64,
}

/// Placement and arc tuning for the radial menu.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadialMenuConfig {
    /// Seconds per button reveal.
    pub arc_duration: f64,
    /// Seconds between consecutive button reveals.
    pub arc_stagger: f64,
    pub lightbulb: RadialOffset,
    pub link: RadialOffset,
    pub github: RadialOffset,
    /// Arc waypoints for the curved travel of the outer buttons.
    pub link_waypoint: RadialOffset,
    pub github_waypoint: RadialOffset,
}

impl Default for RadialMenuConfig {
    fn default() -> Self {
        Self {
            arc_duration: 0.5,
            arc_stagger: 0.08,
            lightbulb: RadialOffset {
                top: -72.0,
                right: -16.0,
            },
            link: RadialOffset {
                top: -32.0,
                right: -64.0,
            },
            github: RadialOffset {
                top: 32.0,
                right: -64.0,
            },
            link_waypoint: RadialOffset {
                top: -80.0,
                right: -48.0,
            },
            github_waypoint: RadialOffset {
                top: -24.0,
                right: -80.0,
            },
        }
    }
}

/// Layout tuning for the inspiration-image fan.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InspirationImagesConfig {
    pub enabled: bool,
    /// Images shown at most.
    pub count: usize,
    pub spacing: f64,
    pub rotation_deg: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub hover_offset_x: f64,
    pub hover_offset_y: f64,
}

impl Default for InspirationImagesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            count: 3,
            spacing: 12.0,
            rotation_deg: 8.0,
            offset_x: -120.0,
            offset_y: 80.0,
            hover_offset_x: -18.0,
            hover_offset_y: -31.0,
        }
    }
}

/// One action button around the node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RadialButton {
    /// Toggles the inspiration-image fan; always present.
    Lightbulb,
    /// Opens the live project.
    Link { url: String },
    /// Opens the repository.
    Github { url: String },
}

/// The overlay as derived from `(stage, project)`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlayView {
    pub visible: bool,
    pub buttons: Vec<RadialButton>,
    pub inspiration_images: Vec<String>,
}

impl OverlayView {
    /// Derive the overlay for the current stage and selection.
    ///
    /// Visible only in the node-details and bottom-nav stages. A selection
    /// without a resolved record still yields a valid (generic) overlay:
    /// the lightbulb with nothing behind it.
    pub fn derive(
        stage: AnimationStage,
        record: Option<&ProjectRecord>,
        images: &InspirationImagesConfig,
    ) -> Self {
        if !stage.shows_node_details() {
            return Self::default();
        }

        let mut buttons = vec![RadialButton::Lightbulb];
        let mut inspiration_images = Vec::new();
        if let Some(record) = record {
            if let Some(url) = &record.live_url {
                buttons.push(RadialButton::Link { url: url.clone() });
            }
            if let Some(url) = &record.github_url {
                buttons.push(RadialButton::Github { url: url.clone() });
            }
            if images.enabled {
                inspiration_images = record
                    .inspiration_images
                    .iter()
                    .take(images.count)
                    .cloned()
                    .collect();
            }
        }

        Self {
            visible: true,
            buttons,
            inspiration_images,
        }
    }
}
