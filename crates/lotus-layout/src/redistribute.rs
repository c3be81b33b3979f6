// ABOUTME: Maps a pointer position during a divider drag to new pane widths.
// ABOUTME: Pure function of the drag origin and pointer, computed in pixels, published in percent.

use crate::pane::{PaneSlot, PaneWidths};
use crate::session::DragOrigin;

/// Compute the layout for `pointer_x` during the drag described by `origin`.
///
/// Only the two panes adjacent to the divider change; the third keeps its
/// starting pixel width. Returns `None` when the container was unmeasurable
/// at drag start or the pointer coordinate is not a number, in which case the
/// caller keeps the current layout.
///
/// A pointer further than one container width from the start saturates: the
/// pair can never hold more than the container, so the result equals a drag
/// of exactly one container width.
pub(crate) fn redistribute(
    origin: &DragOrigin,
    pointer_x: f64,
    min_pane_width_px: f64,
) -> Option<PaneWidths> {
    if !origin.is_measurable() || !pointer_x.is_finite() {
        return None;
    }

    let dx = pointer_x - origin.start_pointer_x;
    if dx == 0.0 {
        return Some(origin.start_widths);
    }

    let total = origin.container_width_px;
    let dx = dx.clamp(-total, total);
    let (lead, trail) = origin.divider.panes();
    let (new_lead, new_trail) = borrow_pair(
        origin.start_widths_px[lead.index()] + dx,
        origin.start_widths_px[trail.index()] - dx,
        min_pane_width_px,
    );

    let lead_pct = (new_lead / total) * 100.0;
    let trail_pct = (new_trail / total) * 100.0;

    let mut percents = [0.0; 3];
    percents[lead.index()] = lead_pct;
    percents[trail.index()] = trail_pct;
    let other = origin.divider.untouched();
    // The right pane absorbs rounding; the left pane is copied verbatim.
    percents[other.index()] = match other {
        PaneSlot::Right => (100.0 - lead_pct - trail_pct).max(0.0),
        _ => origin.start_widths.get(other),
    };

    Some(PaneWidths::from_parts(percents))
}

/// Push the pair back above the minimum by moving the deficit to the partner.
///
/// This is a single pass: if the pair together is narrower than twice the
/// minimum, the second correction leaves the leading pane below the minimum.
/// The pair's combined width is conserved, and the leading pane is floored at
/// zero with the trailing pane taking the whole pair.
fn borrow_pair(mut lead: f64, mut trail: f64, min: f64) -> (f64, f64) {
    let budget = lead + trail;

    if lead < min {
        trail -= min - lead;
        lead = min;
    }
    if trail < min {
        lead -= min - trail;
        trail = min;
    }

    if lead < 0.0 {
        lead = 0.0;
        trail = budget.max(0.0);
    }

    (lead, trail)
}
