//! Stage-driven zoom controller.

use folio_stage_core::AnimationStage;

use crate::framing::{Framing, NodeAnchor, Point};
use crate::profile::{DeviceClass, ZoomProfile, ZoomProfiles};

/// Camera primitives exposed by the graph viewer. The controller only
/// consumes these; it never renders anything itself.
pub trait Viewport {
    fn current_framing(&self) -> Framing;
    fn set_framing(&mut self, framing: Framing, duration_ms: f64);
    fn center_on(&mut self, point: Point, zoom: f64, duration_ms: f64);
}

/// Moves the camera when the stage sequence reaches the zoom stage and
/// restores the pre-zoom framing on full deselection.
///
/// Exactly one snapshot is retained: it is captured immediately before the
/// first zoom of a sequence and only ever consumed from the idle stage, so
/// reselecting a different node mid-zoom overwrites nothing.
#[derive(Debug)]
pub struct ZoomController {
    profiles: ZoomProfiles,
    class: DeviceClass,
    saved: Option<Framing>,
    focused: Option<Point>,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new(ZoomProfiles::default())
    }
}

impl ZoomController {
    pub fn new(profiles: ZoomProfiles) -> Self {
        Self {
            profiles,
            class: DeviceClass::default(),
            saved: None,
            focused: None,
        }
    }

    /// Active device class.
    #[inline]
    pub fn class(&self) -> DeviceClass {
        self.class
    }

    /// Profile for the active device class.
    #[inline]
    pub fn active_profile(&self) -> &ZoomProfile {
        self.profiles.for_class(self.class)
    }

    /// Whether a pre-zoom framing snapshot is currently held.
    #[inline]
    pub fn has_saved_framing(&self) -> bool {
        self.saved.is_some()
    }

    /// Reclassify after a layout change. The profile choice is static until
    /// the next call.
    pub fn set_viewport_width(&mut self, width: f64) {
        let class = self.profiles.breakpoints.classify(width);
        if class != self.class {
            log::debug!("viewport reclassified {} -> {}", self.class.name(), class.name());
            self.class = class;
        }
    }

    /// Reconcile the camera with the current stage.
    ///
    /// Called by the host whenever the stage or the selected node's anchor
    /// changes. Repeat calls with an unchanged target are no-ops, so hosts
    /// may call this every frame.
    pub fn sync<V: Viewport>(
        &mut self,
        viewport: &mut V,
        stage: AnimationStage,
        selected: Option<&NodeAnchor>,
    ) {
        let profile = *self.profiles.for_class(self.class);

        if stage.is_idle() {
            // Idle always clears the focus target and consumes the snapshot,
            // even when the active profile is disabled (the class may have
            // changed since the snapshot was taken). A disabled class still
            // never touches the camera, so the snapshot is dropped unused
            // rather than restored.
            self.focused = None;
            if let Some(previous) = self.saved.take() {
                if profile.enabled {
                    log::debug!("restoring pre-zoom framing");
                    viewport.set_framing(previous, profile.duration_ms);
                } else {
                    log::debug!("discarding pre-zoom framing, {} zoom disabled", self.class.name());
                }
            }
            return;
        }

        if !profile.enabled {
            // Disabled class: the camera is never touched, and no snapshot
            // is taken that a later stage could restore.
            return;
        }

        if stage.zooms_camera() {
            if let Some(anchor) = selected {
                let target = anchor
                    .center()
                    .offset(profile.offset_x, profile.offset_y);
                if self.focused == Some(target) {
                    return;
                }
                if self.saved.is_none() {
                    self.saved = Some(viewport.current_framing());
                }
                log::debug!(
                    "centering on ({:.1}, {:.1}) at zoom {}",
                    target.x,
                    target.y,
                    profile.zoom_level
                );
                viewport.center_on(target, profile.zoom_level, profile.duration_ms);
                self.focused = Some(target);
            }
        }
        // TopNavMorph: the camera holds still until the zoom stage.
    }
}
