// ABOUTME: Pointer event traces replayed by the headless console.
// ABOUTME: Reads JSON event lists from disk and provides a built-in demo gesture.

use std::path::Path;

use anyhow::{Context, Result};

use crate::console::HostEvent;

/// Read a JSON array of events, e.g. `[{"type": "pointer_down", "x": 280.0}]`.
pub fn load(path: &Path) -> Result<Vec<HostEvent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read trace {}", path.display()))?;
    parse(&content).with_context(|| format!("Failed to parse trace {}", path.display()))
}

pub fn parse(content: &str) -> Result<Vec<HostEvent>> {
    Ok(serde_json::from_str(content)?)
}

/// Pick two terms, widen the term list, then squeeze the viewer past its minimum.
pub fn demo() -> Vec<HostEvent> {
    vec![
        HostEvent::PickTerm {
            term: "emotion".to_string(),
        },
        HostEvent::PickTerm {
            term: "amygdala".to_string(),
        },
        HostEvent::PointerDown { x: 336.0 },
        HostEvent::PointerMove { x: 360.0 },
        HostEvent::PointerMove { x: 420.0 },
        HostEvent::PointerUp { x: 420.0 },
        HostEvent::PointerDown { x: 864.0 },
        HostEvent::PointerMove { x: 1000.0 },
        HostEvent::PointerMove { x: 1150.0 },
        HostEvent::PointerLeave,
        HostEvent::PointerMove { x: 1190.0 },
    ]
}
