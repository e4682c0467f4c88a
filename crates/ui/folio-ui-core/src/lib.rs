//! Folio UI Core
//!
//! View models for the regions that react to the animation stage: the
//! morphing top navigation, the node-detail overlay (radial buttons and
//! inspiration imagery), the bottom drawer, and the static project records
//! behind them. Every model here is a function of the `(stage, project)`
//! pair published by `folio-stage-core`; none of them feed anything back
//! into the sequencer.

pub mod drawer;
pub mod nav;
pub mod overlay;
pub mod projects;

pub use drawer::{BottomDrawer, DrawerTab};
pub use nav::{NavItem, NavMorph, NavView, TopNav};
pub use overlay::{InspirationImagesConfig, OverlayView, RadialButton, RadialMenuConfig};
pub use projects::{parse_project_library, ProjectError, ProjectLibrary, ProjectRecord};
