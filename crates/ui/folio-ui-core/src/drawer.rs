//! Bottom drawer view model.
//!
//! The drawer is the last region to arrive: it opens when the sequence
//! reaches its final stage and then reveals its own chrome in two staggered
//! phases (tab row first, tab content after). The stagger runs on the same
//! deadline-queue mechanism the sequencer uses, so a teardown or deselect
//! between the phases cancels the pending reveals instead of letting them
//! fire against a closed drawer.

use serde::{Deserialize, Serialize};

use folio_stage_core::{AnimationStage, StageTime, StageTimer};

/// Tabs inside the drawer, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DrawerTab {
    #[default]
    Overview,
    Process,
    Assets,
    Research,
}

impl DrawerTab {
    pub const ALL: [DrawerTab; 4] = [
        Self::Overview,
        Self::Process,
        Self::Assets,
        Self::Research,
    ];

    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Process => "Process",
            Self::Assets => "Assets",
            Self::Research => "Research",
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }
}

/// The two staggered reveal phases after the drawer opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
enum DrawerPhase {
    Tabs,
    Content,
}

/// Reveal stagger relative to the drawer opening, in ms.
const TABS_REVEAL_DELAY_MS: u64 = 200;
const CONTENT_REVEAL_DELAY_MS: u64 = 400;

/// Bottom drawer state.
///
/// Drive it with `sync` on every stage change and `update` on every host
/// tick; both take the host clock so the reveal deadlines line up with the
/// sequencer's.
#[derive(Debug, Default)]
pub struct BottomDrawer {
    visible: bool,
    tabs_revealed: bool,
    content_revealed: bool,
    selected_tab: DrawerTab,
    reveals: StageTimer<DrawerPhase>,
}

impl BottomDrawer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn tabs_revealed(&self) -> bool {
        self.tabs_revealed
    }

    #[inline]
    pub fn content_revealed(&self) -> bool {
        self.content_revealed
    }

    #[inline]
    pub fn selected_tab(&self) -> DrawerTab {
        self.selected_tab
    }

    /// Reconcile with the stage. Entering the final stage opens the drawer
    /// on the default tab and arms the reveal stagger; any other stage
    /// closes it and drops whatever reveals are still pending.
    pub fn sync(&mut self, stage: AnimationStage, now: StageTime) {
        let open = stage.shows_bottom_drawer();
        if open == self.visible {
            return;
        }
        self.reveals.cancel_all();
        self.tabs_revealed = false;
        self.content_revealed = false;
        self.visible = open;
        if open {
            self.selected_tab = DrawerTab::Overview;
            self.reveals.schedule(
                now,
                StageTime::from_millis(TABS_REVEAL_DELAY_MS),
                DrawerPhase::Tabs,
            );
            self.reveals.schedule(
                now,
                StageTime::from_millis(CONTENT_REVEAL_DELAY_MS),
                DrawerPhase::Content,
            );
        }
    }

    /// Apply any reveal whose deadline has passed.
    pub fn update(&mut self, now: StageTime) {
        for phase in self.reveals.drain_due(now) {
            match phase {
                DrawerPhase::Tabs => self.tabs_revealed = true,
                DrawerPhase::Content => self.content_revealed = true,
            }
        }
    }

    /// Switch tabs; returns the slide direction for the content transition
    /// (+1 rightward, -1 leftward, 0 when the tab is unchanged or the
    /// drawer is closed).
    pub fn select_tab(&mut self, tab: DrawerTab) -> i8 {
        if !self.visible || tab == self.selected_tab {
            return 0;
        }
        let direction = if tab.index() > self.selected_tab.index() {
            1
        } else {
            -1
        };
        self.selected_tab = tab;
        direction
    }
}
