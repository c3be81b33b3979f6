// ABOUTME: State captured when a divider drag starts.
// ABOUTME: Geometry is frozen for the whole gesture; listeners live as long as the session.

use crate::pane::{DividerId, PaneWidths};
use crate::surface::ListenerGuard;

/// Container smaller than this is treated as unmeasured.
pub(crate) const MIN_MEASURABLE_WIDTH_PX: f64 = 1e-6;

/// Where a drag started. Every pointer move is computed from this, never
/// from the layout published by the previous move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DragOrigin {
    pub(crate) divider: DividerId,
    pub(crate) start_pointer_x: f64,
    /// Measured once at gesture start, not re-measured mid-drag.
    pub(crate) container_width_px: f64,
    pub(crate) start_widths: PaneWidths,
    pub(crate) start_widths_px: [f64; 3],
}

impl DragOrigin {
    pub(crate) fn capture(
        divider: DividerId,
        pointer_x: f64,
        container_width_px: f64,
        widths: PaneWidths,
    ) -> Self {
        // NaN or negative measurements collapse to an unmeasured container.
        let container_width_px = if container_width_px.is_finite() {
            container_width_px.max(0.0)
        } else {
            0.0
        };
        Self {
            divider,
            start_pointer_x: pointer_x,
            container_width_px,
            start_widths: widths,
            start_widths_px: widths.to_pixels(container_width_px),
        }
    }

    pub(crate) fn is_measurable(&self) -> bool {
        self.container_width_px.is_finite() && self.container_width_px >= MIN_MEASURABLE_WIDTH_PX
    }
}

#[derive(Debug)]
pub(crate) struct DragSession {
    pub(crate) origin: DragOrigin,
    _listeners: ListenerGuard,
}

impl DragSession {
    pub(crate) fn open(origin: DragOrigin, listeners: ListenerGuard) -> Self {
        Self {
            origin,
            _listeners: listeners,
        }
    }
}
