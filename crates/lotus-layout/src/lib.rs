// ABOUTME: Three-pane resizable split view for the LoTUS-BF console.
// ABOUTME: Turns divider drags into pane widths while keeping panes above a minimum width.

mod controller;
mod pane;
mod presentation;
mod redistribute;
mod session;
mod surface;

pub use controller::ResizeController;
pub use pane::{DividerId, LayoutError, PaneSlot, PaneWidths};
pub use presentation::{DividerBox, PaneBox, SplitFrame};
pub use surface::{
    ContainerMetrics, ContainerWidth, ListenerGuard, ListenerHandle, ListenerRegistry,
    PointerListener, PointerSurface,
};
