// ABOUTME: Pane slots, dividers, and the percentage triple that sizes them.
// ABOUTME: PaneWidths is the immutable layout snapshot handed to renderers.

use std::ops::Index;

use lotus_core::config::SUM_TOLERANCE;

/// One of the three horizontally arranged content regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneSlot {
    Left,
    Middle,
    Right,
}

impl PaneSlot {
    pub const ALL: [PaneSlot; 3] = [PaneSlot::Left, PaneSlot::Middle, PaneSlot::Right];

    pub fn index(self) -> usize {
        match self {
            PaneSlot::Left => 0,
            PaneSlot::Middle => 1,
            PaneSlot::Right => 2,
        }
    }

    /// Panel hosted in this slot by the console
    pub fn title(self) -> &'static str {
        match self {
            PaneSlot::Left => "Terms",
            PaneSlot::Middle => "Query & Studies",
            PaneSlot::Right => "Viewer",
        }
    }
}

/// The draggable boundary between two adjacent panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DividerId {
    LeftMiddle,
    MiddleRight,
}

impl DividerId {
    pub const ALL: [DividerId; 2] = [DividerId::LeftMiddle, DividerId::MiddleRight];

    /// The pane pair this divider negotiates between, leading pane first.
    pub fn panes(self) -> (PaneSlot, PaneSlot) {
        match self {
            DividerId::LeftMiddle => (PaneSlot::Left, PaneSlot::Middle),
            DividerId::MiddleRight => (PaneSlot::Middle, PaneSlot::Right),
        }
    }

    /// The pane a drag on this divider never resizes.
    pub fn untouched(self) -> PaneSlot {
        match self {
            DividerId::LeftMiddle => PaneSlot::Right,
            DividerId::MiddleRight => PaneSlot::Left,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DividerId::LeftMiddle => "Resize left/middle",
            DividerId::MiddleRight => "Resize middle/right",
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum LayoutError {
    #[error("Pane {0:?} width is not a finite number")]
    NonFinite(PaneSlot),

    #[error("Pane {0:?} width is negative: {1}")]
    NegativeWidth(PaneSlot, f64),

    #[error("Pane widths must add up to 100%, got {0}")]
    BadSum(f64),
}

/// Width of each pane in percent of the container. Always non-negative and
/// adding up to 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneWidths([f64; 3]);

impl PaneWidths {
    pub fn new(percents: [f64; 3]) -> Result<Self, LayoutError> {
        for slot in PaneSlot::ALL {
            let value = percents[slot.index()];
            if !value.is_finite() {
                return Err(LayoutError::NonFinite(slot));
            }
            if value < 0.0 {
                return Err(LayoutError::NegativeWidth(slot, value));
            }
        }

        let sum: f64 = percents.iter().sum();
        if (sum - 100.0).abs() > SUM_TOLERANCE {
            return Err(LayoutError::BadSum(sum));
        }

        Ok(Self(percents))
    }

    /// Build from values the redistribution already keeps in range.
    pub(crate) fn from_parts(percents: [f64; 3]) -> Self {
        debug_assert!(percents.iter().all(|p| *p >= 0.0));
        Self(percents)
    }

    pub fn get(&self, slot: PaneSlot) -> f64 {
        self.0[slot.index()]
    }

    pub fn as_array(&self) -> [f64; 3] {
        self.0
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Pixel width of each pane inside a container of the given width.
    pub fn to_pixels(&self, container_width_px: f64) -> [f64; 3] {
        self.0.map(|p| (p / 100.0) * container_width_px)
    }
}

impl Default for PaneWidths {
    fn default() -> Self {
        Self([28.0, 44.0, 28.0])
    }
}

impl Index<PaneSlot> for PaneWidths {
    type Output = f64;

    fn index(&self, slot: PaneSlot) -> &f64 {
        &self.0[slot.index()]
    }
}
