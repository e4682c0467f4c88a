//! Top navigation view model.
//!
//! The nav renders one of two forms: the normal icon bar, or the collapsed
//! line it morphs into while a node is selected. Which form is a pure
//! function of the stage; the active item and the morph-direction tag are
//! the only local state.

use serde::{Deserialize, Serialize};

use folio_stage_core::AnimationStage;

/// Items in the top navigation, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavItem {
    #[default]
    Home,
    Canvas,
    Timeline,
    Contact,
}

impl NavItem {
    pub const ALL: [NavItem; 4] = [Self::Home, Self::Canvas, Self::Timeline, Self::Contact];

    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Canvas => "Canvas",
            Self::Timeline => "Timeline",
            Self::Contact => "Contact",
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|i| i == self).unwrap_or(0)
    }
}

/// The two visual forms of the nav.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavView {
    #[default]
    Normal,
    Line,
}

/// Direction tag for the morph animation variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavMorph {
    NormalToLine,
    LineToNormal,
}

/// Top navigation state.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TopNav {
    active: NavItem,
    view: NavView,
    /// Last morph direction, for the host's enter/exit animation variants.
    last_morph: Option<NavMorph>,
}

impl TopNav {
    // Highlight clip-path geometry: four items, each 25% wide, highlight
    // centered at 12.5% into its slot.
    const ITEM_WIDTH_PCT: f64 = 25.0;
    const X_OFFSET_PCT: f64 = 12.5;

    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn active(&self) -> NavItem {
        self.active
    }

    #[inline]
    pub fn view(&self) -> NavView {
        self.view
    }

    #[inline]
    pub fn last_morph(&self) -> Option<NavMorph> {
        self.last_morph
    }

    /// Activate a nav item (a route change; independent of the morph).
    pub fn activate(&mut self, item: NavItem) {
        self.active = item;
    }

    /// Horizontal position of the active-item highlight, in percent.
    #[inline]
    pub fn highlight_x_pct(&self) -> f64 {
        self.active.index() as f64 * Self::ITEM_WIDTH_PCT + Self::X_OFFSET_PCT
    }

    /// Reconcile the view form with the stage: the line form whenever any
    /// selection sequence is running.
    pub fn sync(&mut self, stage: AnimationStage) {
        let target = if stage.morphs_top_nav() {
            NavView::Line
        } else {
            NavView::Normal
        };
        if target != self.view {
            self.last_morph = Some(match target {
                NavView::Line => NavMorph::NormalToLine,
                NavView::Normal => NavMorph::LineToNormal,
            });
            self.view = target;
        }
    }
}
