//! Device-class zoom profiles.
//!
//! The decision logic (pick profile, compute target, animate) is identical
//! across classes; only the tuning differs, so the class is a small tagged
//! variant chosen once per layout change rather than anything inspected at
//! zoom time.

use serde::{Deserialize, Serialize};

/// Viewport width class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl DeviceClass {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }
}

/// Width thresholds separating the classes, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Breakpoints {
    /// Widths below this are mobile.
    pub mobile: f64,
    /// Widths below this (and at least `mobile`) are tablet.
    pub tablet: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile: 768.0,
            tablet: 1024.0,
        }
    }
}

impl Breakpoints {
    /// Classify a viewport width.
    pub fn classify(&self, width: f64) -> DeviceClass {
        if width < self.mobile {
            DeviceClass::Mobile
        } else if width < self.tablet {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }
}

/// Per-class zoom tuning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomProfile {
    pub enabled: bool,
    pub zoom_level: f64,
    /// World-space offset added to the node center before centering.
    pub offset_x: f64,
    pub offset_y: f64,
    /// Camera animation duration in milliseconds.
    pub duration_ms: f64,
}

/// The three tuned profiles plus the breakpoints that select between them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomProfiles {
    pub breakpoints: Breakpoints,
    pub mobile: ZoomProfile,
    pub tablet: ZoomProfile,
    pub desktop: ZoomProfile,
}

impl Default for ZoomProfiles {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            mobile: ZoomProfile {
                enabled: true,
                zoom_level: 0.8,
                offset_x: 0.0,
                offset_y: 240.0,
                duration_ms: 550.0,
            },
            tablet: ZoomProfile {
                enabled: true,
                zoom_level: 1.5,
                offset_x: 0.0,
                offset_y: 130.0,
                duration_ms: 575.0,
            },
            desktop: ZoomProfile {
                enabled: true,
                zoom_level: 1.5,
                offset_x: 0.0,
                offset_y: 160.0,
                duration_ms: 600.0,
            },
        }
    }
}

impl ZoomProfiles {
    /// The profile for a device class.
    #[inline]
    pub fn for_class(&self, class: DeviceClass) -> &ZoomProfile {
        match class {
            DeviceClass::Mobile => &self.mobile,
            DeviceClass::Tablet => &self.tablet,
            DeviceClass::Desktop => &self.desktop,
        }
    }
}
