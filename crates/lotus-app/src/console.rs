// ABOUTME: The console host: shared query string plus the three-pane split view.
// ABOUTME: Routes pointer events to the resize controller and term picks to the query.

use std::rc::Rc;

use serde::Deserialize;

use lotus_core::{Config, QueryString, TokenKind};
use lotus_layout::{
    ContainerMetrics, ContainerWidth, LayoutError, ListenerRegistry, PaneSlot, PaneWidths,
    PointerListener, ResizeController, SplitFrame,
};

/// Input delivered to the console, in delivery order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    PointerDown { x: f64 },
    PointerMove { x: f64 },
    PointerUp { x: f64 },
    /// Pointer left the window mid-gesture
    PointerLeave,
    /// Window lost focus
    Blur,
    ResizeContainer { width: f64 },
    PickTerm { term: String },
    SetQuery { query: String },
}

pub struct Console {
    query: QueryString,
    query_param: String,
    controller: ResizeController,
    surface: Rc<ListenerRegistry>,
    container: Rc<ContainerWidth>,
    divider_hit_px: f64,
}

impl Console {
    pub fn new(config: &Config, container_width_px: f64) -> Result<Self, LayoutError> {
        let surface = Rc::new(ListenerRegistry::default());
        let container = Rc::new(ContainerWidth::new(container_width_px));
        let controller = ResizeController::new(&config.layout, surface.clone(), container.clone())?;

        Ok(Self {
            query: QueryString::default(),
            query_param: config.query_param.clone(),
            controller,
            surface,
            container,
            divider_hit_px: config.layout.divider_hit_px,
        })
    }

    pub fn query(&self) -> &QueryString {
        &self.query
    }

    pub fn layout(&self) -> PaneWidths {
        self.controller.layout()
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    pub fn surface(&self) -> &ListenerRegistry {
        &self.surface
    }

    pub fn frame(&self) -> SplitFrame {
        SplitFrame::compute(
            &self.controller.layout(),
            self.container.width_px(),
            self.divider_hit_px,
        )
    }

    /// End any open drag and drop its listeners. Returns whether one was open.
    pub fn release_pointer(&mut self) -> bool {
        let was_dragging = self.controller.is_dragging();
        if was_dragging {
            self.controller.end_drag();
        }
        was_dragging
    }

    /// Apply one event. Returns whether the pane layout changed.
    pub fn handle(&mut self, event: &HostEvent) -> bool {
        match event {
            HostEvent::PointerDown { x } => {
                if let Some(divider) = self.frame().divider_at(*x) {
                    self.controller.begin_drag(divider, *x);
                }
                false
            }
            HostEvent::PointerMove { x } => {
                if self.surface.is_listening(PointerListener::Move) {
                    self.controller.on_pointer_move(*x)
                } else {
                    false
                }
            }
            HostEvent::PointerUp { .. } => {
                if self.surface.is_listening(PointerListener::Up) {
                    self.controller.end_drag();
                }
                false
            }
            HostEvent::PointerLeave | HostEvent::Blur => {
                if self.release_pointer() {
                    tracing::debug!("Gesture interrupted by {:?}, drag ended", event);
                }
                false
            }
            HostEvent::ResizeContainer { width } => {
                self.container.resize(*width);
                false
            }
            HostEvent::PickTerm { term } => {
                self.query.append_term(term);
                tracing::info!("{}={}", self.query_param, self.query.as_str());
                false
            }
            HostEvent::SetQuery { query } => {
                self.query.set(query.clone());
                tracing::info!("{}={}", self.query_param, self.query.as_str());
                false
            }
        }
    }

    /// Header line: terms as-is, operators in brackets.
    pub fn header(&self) -> String {
        if self.query.tokens().is_empty() {
            return format!("Current query: {}", self.query.display());
        }
        let rendered: Vec<String> = self
            .query
            .tokens()
            .iter()
            .map(|t| match t.kind {
                TokenKind::Operator => format!("[{}]", t.text),
                TokenKind::Term => t.text.to_string(),
            })
            .collect();
        format!("Current query: {}", rendered.join(" "))
    }

    /// One-line summary of the pane widths.
    pub fn describe_layout(&self) -> String {
        let frame = self.frame();
        PaneSlot::ALL
            .iter()
            .map(|slot| {
                format!(
                    "{} {:.2}% ({:.0}px)",
                    slot.title(),
                    self.layout()[*slot],
                    frame.pane(*slot).width
                )
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }
}
