// ABOUTME: Headless host for the LoTUS-BF console layout.
// ABOUTME: Wires the query, the split view controller, and the pointer listener registry together.

pub mod console;
pub mod trace;

pub use console::{Console, HostEvent};
