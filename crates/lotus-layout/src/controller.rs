// ABOUTME: Owns the pane layout and turns divider drags into layout updates.
// ABOUTME: The only writer of the layout; everyone else reads PaneWidths snapshots.

use std::rc::Rc;

use lotus_core::LayoutSettings;

use crate::pane::{DividerId, LayoutError, PaneWidths};
use crate::redistribute::redistribute;
use crate::session::{DragOrigin, DragSession};
use crate::surface::{ContainerMetrics, ListenerGuard, PointerSurface};

/// Current pane widths. Private to this module so nothing but the
/// controller can replace them.
#[derive(Debug)]
struct LayoutState {
    widths: PaneWidths,
}

impl LayoutState {
    fn snapshot(&self) -> PaneWidths {
        self.widths
    }

    /// Whole-triple replacement; there is no per-pane setter.
    fn replace(&mut self, widths: PaneWidths) {
        self.widths = widths;
    }
}

pub struct ResizeController {
    layout: LayoutState,
    session: Option<DragSession>,
    min_pane_width_px: f64,
    surface: Rc<dyn PointerSurface>,
    container: Rc<dyn ContainerMetrics>,
}

impl ResizeController {
    pub fn new(
        settings: &LayoutSettings,
        surface: Rc<dyn PointerSurface>,
        container: Rc<dyn ContainerMetrics>,
    ) -> Result<Self, LayoutError> {
        let widths = PaneWidths::new(settings.initial_sizes)?;
        Ok(Self {
            layout: LayoutState { widths },
            session: None,
            min_pane_width_px: settings.min_pane_width_px.max(0.0),
            surface,
            container,
        })
    }

    /// Current pane widths.
    pub fn layout(&self) -> PaneWidths {
        self.layout.snapshot()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn active_divider(&self) -> Option<DividerId> {
        self.session.as_ref().map(|s| s.origin.divider)
    }

    /// Start dragging `divider` from `pointer_x`.
    ///
    /// Measures the container once and subscribes to window-wide move/up
    /// signals. A drag that is still open is replaced: its listeners are
    /// removed before the new ones are added.
    pub fn begin_drag(&mut self, divider: DividerId, pointer_x: f64) {
        if let Some(stale) = self.session.take() {
            tracing::warn!(
                "Drag on {:?} still open when {:?} was grabbed, replacing it",
                stale.origin.divider,
                divider
            );
            drop(stale);
        }

        let container_width_px = self.container.width_px();
        let origin = DragOrigin::capture(divider, pointer_x, container_width_px, self.layout.snapshot());
        if !origin.is_measurable() {
            tracing::warn!(
                "Container width {} is not measurable, drag on {:?} will not resize",
                container_width_px,
                divider
            );
        }

        let listeners = ListenerGuard::acquire(self.surface.clone());
        tracing::debug!(
            "{} from x={} (container {}px, listeners {:?})",
            divider.label(),
            pointer_x,
            origin.container_width_px,
            listeners.handles()
        );
        self.session = Some(DragSession::open(origin, listeners));
    }

    /// Recompute the layout for a pointer move. Returns whether the layout
    /// was replaced; moves outside a drag are ignored.
    pub fn on_pointer_move(&mut self, pointer_x: f64) -> bool {
        let Some(session) = &self.session else {
            tracing::debug!("Pointer move at x={} with no drag open, ignored", pointer_x);
            return false;
        };

        match redistribute(&session.origin, pointer_x, self.min_pane_width_px) {
            Some(widths) => {
                self.layout.replace(widths);
                true
            }
            None => false,
        }
    }

    /// Finish the drag and remove its listeners. Harmless when no drag is open.
    pub fn end_drag(&mut self) {
        match self.session.take() {
            Some(session) => {
                tracing::debug!(
                    "End drag on {:?}, layout {:?}",
                    session.origin.divider,
                    self.layout.snapshot().as_array()
                );
            }
            None => tracing::debug!("End drag with no drag open"),
        }
    }
}

impl std::fmt::Debug for ResizeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeController")
            .field("layout", &self.layout)
            .field("session", &self.session)
            .field("min_pane_width_px", &self.min_pane_width_px)
            .finish()
    }
}
