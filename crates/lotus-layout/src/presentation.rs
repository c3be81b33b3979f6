// ABOUTME: Stateless geometry for drawing the split view.
// ABOUTME: Places the three pane boxes and the divider grab areas, and hit-tests pointer-downs.

use crate::pane::{DividerId, PaneSlot, PaneWidths};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneBox {
    pub slot: PaneSlot,
    pub x: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerBox {
    pub id: DividerId,
    pub x: f64,
    pub width: f64,
}

impl DividerBox {
    pub fn center(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.x && x <= self.x + self.width
    }
}

/// One rendered frame of the split view, in container pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitFrame {
    pub panes: [PaneBox; 3],
    pub dividers: [DividerBox; 2],
}

impl SplitFrame {
    /// Lay out panes left to right by percentage; each divider's grab area
    /// is centred on the boundary it controls.
    pub fn compute(widths: &PaneWidths, container_width_px: f64, divider_hit_px: f64) -> Self {
        let container = if container_width_px.is_finite() {
            container_width_px.max(0.0)
        } else {
            0.0
        };
        let px = widths.to_pixels(container);

        let mut x = 0.0;
        let panes = PaneSlot::ALL.map(|slot| {
            let pane = PaneBox {
                slot,
                x,
                width: px[slot.index()],
            };
            x += pane.width;
            pane
        });

        let dividers = DividerId::ALL.map(|id| {
            let (lead, _) = id.panes();
            let boundary = panes[lead.index()].x + panes[lead.index()].width;
            DividerBox {
                id,
                x: boundary - divider_hit_px / 2.0,
                width: divider_hit_px,
            }
        });

        Self { panes, dividers }
    }

    /// Divider grabbed by a pointer-down at `x`. When grab areas overlap
    /// the nearer boundary wins.
    pub fn divider_at(&self, x: f64) -> Option<DividerId> {
        self.dividers
            .iter()
            .filter(|d| d.contains(x))
            .min_by(|a, b| {
                let da = (a.center() - x).abs();
                let db = (b.center() - x).abs();
                da.total_cmp(&db)
            })
            .map(|d| d.id)
    }

    pub fn pane_at(&self, x: f64) -> Option<PaneSlot> {
        self.panes
            .iter()
            .find(|p| x >= p.x && x < p.x + p.width)
            .map(|p| p.slot)
    }

    pub fn pane(&self, slot: PaneSlot) -> &PaneBox {
        &self.panes[slot.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panes_tile_the_container() {
        let frame = SplitFrame::compute(&PaneWidths::default(), 1000.0, 8.0);
        assert_eq!(frame.pane(PaneSlot::Left).x, 0.0);
        assert!((frame.pane(PaneSlot::Middle).x - 280.0).abs() < 1e-9);
        assert!((frame.pane(PaneSlot::Right).x - 720.0).abs() < 1e-9);
        let end = frame.pane(PaneSlot::Right).x + frame.pane(PaneSlot::Right).width;
        assert!((end - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn dividers_hit_near_boundaries() {
        let frame = SplitFrame::compute(&PaneWidths::default(), 1000.0, 8.0);
        assert_eq!(frame.divider_at(281.0), Some(DividerId::LeftMiddle));
        assert_eq!(frame.divider_at(716.5), Some(DividerId::MiddleRight));
        assert_eq!(frame.divider_at(500.0), None);
        assert_eq!(frame.pane_at(500.0), Some(PaneSlot::Middle));
    }

    #[test]
    fn overlapping_dividers_pick_nearest() {
        let widths = PaneWidths::new([50.0, 0.5, 49.5]).unwrap();
        let frame = SplitFrame::compute(&widths, 1000.0, 8.0);
        // Grab areas are [496, 504] and [501, 509].
        assert_eq!(frame.divider_at(502.0), Some(DividerId::LeftMiddle));
        assert_eq!(frame.divider_at(504.0), Some(DividerId::MiddleRight));
        assert_eq!(frame.divider_at(508.0), Some(DividerId::MiddleRight));
    }

    #[test]
    fn empty_container_renders_zero_width_panes() {
        let frame = SplitFrame::compute(&PaneWidths::default(), 0.0, 8.0);
        assert!(frame.panes.iter().all(|p| p.width == 0.0));
        assert_eq!(frame.pane_at(0.0), None);
    }
}
