// ABOUTME: Seams between the split view and its host: pointer capture and container size.
// ABOUTME: ListenerGuard removes drag listeners on every exit path.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Global pointer signals a drag subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerListener {
    Move,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(pub u64);

/// The window-wide input surface. Drags listen here rather than on the
/// divider so a fast pointer that leaves the divider keeps driving the drag.
pub trait PointerSurface {
    fn add_listener(&self, kind: PointerListener) -> ListenerHandle;
    fn remove_listener(&self, handle: ListenerHandle);
}

/// Measures the rendered width of the split view container.
pub trait ContainerMetrics {
    fn width_px(&self) -> f64;
}

/// Window-level listener table. Hosts route global pointer signals to the
/// controller only while a drag holds the matching listener.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerHandle, PointerListener)>>,
}

impl ListenerRegistry {
    pub fn is_listening(&self, kind: PointerListener) -> bool {
        self.listeners.borrow().iter().any(|(_, k)| *k == kind)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl PointerSurface for ListenerRegistry {
    fn add_listener(&self, kind: PointerListener) -> ListenerHandle {
        let handle = ListenerHandle(self.next_id.get());
        self.next_id.set(handle.0 + 1);
        self.listeners.borrow_mut().push((handle, kind));
        handle
    }

    fn remove_listener(&self, handle: ListenerHandle) {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(h, _)| *h != handle);
        if listeners.len() == before {
            tracing::warn!("Removing unknown pointer listener {:?}", handle);
        }
    }
}

/// Container width as last reported by the host's layout pass.
#[derive(Debug)]
pub struct ContainerWidth {
    width_px: Cell<f64>,
}

impl ContainerWidth {
    pub fn new(width_px: f64) -> Self {
        Self {
            width_px: Cell::new(width_px),
        }
    }

    pub fn resize(&self, width_px: f64) {
        self.width_px.set(width_px);
    }
}

impl ContainerMetrics for ContainerWidth {
    fn width_px(&self) -> f64 {
        self.width_px.get()
    }
}

/// Move and up listeners held for the lifetime of one drag.
pub struct ListenerGuard {
    surface: Rc<dyn PointerSurface>,
    handles: [ListenerHandle; 2],
}

impl ListenerGuard {
    pub fn acquire(surface: Rc<dyn PointerSurface>) -> Self {
        let handles = [
            surface.add_listener(PointerListener::Move),
            surface.add_listener(PointerListener::Up),
        ];
        Self { surface, handles }
    }

    pub fn handles(&self) -> &[ListenerHandle] {
        &self.handles
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        for handle in self.handles {
            self.surface.remove_listener(handle);
        }
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("handles", &self.handles)
            .finish()
    }
}
