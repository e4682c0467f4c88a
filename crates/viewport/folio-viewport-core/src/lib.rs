//! Folio Viewport Core
//!
//! Camera focus/zoom behavior driven by the animation stage: once the
//! sequence reaches the zoom stage the camera centers on the selected node
//! with a device-class-specific profile, and full deselection restores the
//! framing captured before the zoom began. The graph viewer owns the actual
//! rendering; this crate only talks to it through the [`Viewport`] trait.

pub mod controller;
pub mod framing;
pub mod profile;

pub use controller::{Viewport, ZoomController};
pub use framing::{Framing, NodeAnchor, Point};
pub use profile::{Breakpoints, DeviceClass, ZoomProfile, ZoomProfiles};
