//! The post-selection animation stage.

use serde::{Deserialize, Serialize};

/// A discrete point on the post-selection animation timeline.
///
/// Totally ordered for forward progress: once a node is selected the stage
/// only advances through this list until deselection resets it to `Idle`.
/// The serialized names match the stage strings the web host uses.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationStage {
    /// No node selected; every region in its resting state
    #[default]
    Idle,
    /// Top navigation collapses into its line form (synchronous with selection)
    TopNavMorph,
    /// Camera recenters and zooms on the selected node
    Zoom,
    /// Radial buttons and inspiration imagery around the node
    NodeDetails,
    /// Bottom drawer slides up
    BottomNav,
}

impl AnimationStage {
    /// Get the wire name of this stage
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::TopNavMorph => "top-nav-morph",
            Self::Zoom => "zoom",
            Self::NodeDetails => "node-details",
            Self::BottomNav => "bottom-nav",
        }
    }

    /// True only when no node is selected
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether the top nav renders its collapsed line form
    #[inline]
    pub fn morphs_top_nav(&self) -> bool {
        !self.is_idle()
    }

    /// Whether the camera should be focused on the selected node
    #[inline]
    pub fn zooms_camera(&self) -> bool {
        matches!(self, Self::Zoom | Self::NodeDetails | Self::BottomNav)
    }

    /// Whether the node detail overlay (radial buttons, imagery) is visible
    #[inline]
    pub fn shows_node_details(&self) -> bool {
        matches!(self, Self::NodeDetails | Self::BottomNav)
    }

    /// Whether the bottom drawer is visible
    #[inline]
    pub fn shows_bottom_drawer(&self) -> bool {
        matches!(self, Self::BottomNav)
    }
}

impl From<&str> for AnimationStage {
    fn from(s: &str) -> Self {
        match s {
            "top-nav-morph" => Self::TopNavMorph,
            "zoom" => Self::Zoom,
            "node-details" => Self::NodeDetails,
            "bottom-nav" => Self::BottomNav,
            _ => Self::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_order_is_total_and_forward() {
        assert!(AnimationStage::Idle < AnimationStage::TopNavMorph);
        assert!(AnimationStage::TopNavMorph < AnimationStage::Zoom);
        assert!(AnimationStage::Zoom < AnimationStage::NodeDetails);
        assert!(AnimationStage::NodeDetails < AnimationStage::BottomNav);
    }

    #[test]
    fn region_predicates() {
        assert!(!AnimationStage::Idle.morphs_top_nav());
        assert!(AnimationStage::TopNavMorph.morphs_top_nav());

        assert!(!AnimationStage::TopNavMorph.zooms_camera());
        assert!(AnimationStage::Zoom.zooms_camera());
        assert!(AnimationStage::BottomNav.zooms_camera());

        assert!(!AnimationStage::Zoom.shows_node_details());
        assert!(AnimationStage::NodeDetails.shows_node_details());
        assert!(AnimationStage::BottomNav.shows_node_details());

        assert!(!AnimationStage::NodeDetails.shows_bottom_drawer());
        assert!(AnimationStage::BottomNav.shows_bottom_drawer());
    }

    #[test]
    fn wire_names_round_trip() {
        for stage in [
            AnimationStage::Idle,
            AnimationStage::TopNavMorph,
            AnimationStage::Zoom,
            AnimationStage::NodeDetails,
            AnimationStage::BottomNav,
        ] {
            assert_eq!(AnimationStage::from(stage.name()), stage);
            let json = serde_json::to_string(&stage).unwrap();
            assert_eq!(json, format!("\"{}\"", stage.name()));
        }
    }
}
