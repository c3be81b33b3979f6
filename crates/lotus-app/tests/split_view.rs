// ABOUTME: End-to-end drag scenarios through the console host.
// ABOUTME: Covers minimum widths, pane isolation, round trips, and gesture termination.

use lotus_app::{trace, Console, HostEvent};
use lotus_core::Config;
use lotus_layout::{PaneSlot, PaneWidths};

fn console(width: f64) -> Console {
    Console::new(&Config::default(), width).unwrap()
}

fn pixels(console: &Console, width: f64) -> [f64; 3] {
    console.layout().to_pixels(width)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn drag_middle_right_left_borrows_from_right() {
    let mut console = console(1000.0);
    console.handle(&HostEvent::PointerDown { x: 720.0 });
    assert!(console.handle(&HostEvent::PointerMove { x: 420.0 }));
    console.handle(&HostEvent::PointerUp { x: 420.0 });

    let widths = console.layout();
    assert_close(widths[PaneSlot::Left], 28.0);
    assert_close(widths[PaneSlot::Middle], 24.0);
    assert_close(widths[PaneSlot::Right], 48.0);
    assert_eq!(console.surface().listener_count(), 0);
}

#[test]
fn left_pane_clamped_at_minimum() {
    let mut console = console(1200.0);
    console.handle(&HostEvent::PointerDown { x: 336.0 });
    console.handle(&HostEvent::PointerMove { x: -664.0 });

    let px = pixels(&console, 1200.0);
    assert_close(px[0], 240.0);
    assert_close(px[1], 624.0);
    assert_close(px[2], 336.0);
}

#[test]
fn middle_never_negative_on_huge_drag() {
    let mut console = console(1200.0);
    console.handle(&HostEvent::PointerDown { x: 336.0 });
    console.handle(&HostEvent::PointerMove { x: 1336.0 });

    let px = pixels(&console, 1200.0);
    assert_close(px[1], 240.0);
    assert!(px.iter().all(|w| *w >= 0.0));
}

#[test]
fn pointer_leaving_divider_keeps_driving_drag() {
    let mut console = console(1000.0);
    console.handle(&HostEvent::PointerDown { x: 280.0 });
    // Far outside the divider's grab area, still routed through the window.
    console.handle(&HostEvent::PointerMove { x: 450.0 });
    assert_close(console.layout()[PaneSlot::Left], 45.0);
    assert_close(console.layout()[PaneSlot::Middle], 27.0);
}

#[test]
fn sum_stays_at_100_through_a_long_session() {
    let mut console = console(1000.0);
    let mut x = 280.0;
    console.handle(&HostEvent::PointerDown { x });
    for step in 0..200 {
        x += if step % 3 == 0 { -37.0 } else { 23.5 };
        console.handle(&HostEvent::PointerMove { x });
        assert!((console.layout().sum() - 100.0).abs() < 1e-6);
    }
    console.handle(&HostEvent::PointerUp { x });

    let boundary = console.frame().dividers[1].center();
    console.handle(&HostEvent::PointerDown { x: boundary });
    for step in 0..200 {
        let x = boundary + ((step * 53) % 900) as f64 - 450.0;
        console.handle(&HostEvent::PointerMove { x });
        assert!((console.layout().sum() - 100.0).abs() < 1e-6);
    }
}

#[test]
fn scrubbing_back_to_origin_restores_layout() {
    let mut console = console(1000.0);
    let before = console.layout();
    console.handle(&HostEvent::PointerDown { x: 281.0 });
    console.handle(&HostEvent::PointerMove { x: 500.0 });
    console.handle(&HostEvent::PointerMove { x: 120.0 });
    console.handle(&HostEvent::PointerMove { x: 281.0 });

    let after = console.layout();
    for slot in PaneSlot::ALL {
        assert_eq!(after[slot].to_bits(), before[slot].to_bits());
    }
}

#[test]
fn middle_right_drag_leaves_left_untouched() {
    let mut console = console(1000.0);
    console.handle(&HostEvent::PointerDown { x: 720.0 });
    for x in [100.0, 650.0, 990.0, 2000.0] {
        console.handle(&HostEvent::PointerMove { x });
        assert_eq!(console.layout()[PaneSlot::Left], 28.0);
    }
}

#[test]
fn zero_width_container_does_not_resize() {
    let mut console = console(1000.0);
    console.handle(&HostEvent::ResizeContainer { width: 0.0 });
    // Every grab area collapses onto x = 0.
    console.handle(&HostEvent::PointerDown { x: 0.0 });
    assert!(console.is_dragging());
    assert!(!console.handle(&HostEvent::PointerMove { x: 250.0 }));
    assert_eq!(console.layout(), PaneWidths::default());
    console.handle(&HostEvent::PointerUp { x: 250.0 });
    assert_eq!(console.surface().listener_count(), 0);
}

#[test]
fn moves_after_release_are_ignored() {
    let mut console = console(1000.0);
    console.handle(&HostEvent::PointerDown { x: 280.0 });
    console.handle(&HostEvent::PointerMove { x: 330.0 });
    console.handle(&HostEvent::PointerUp { x: 330.0 });
    let settled = console.layout();

    assert!(!console.handle(&HostEvent::PointerMove { x: 900.0 }));
    assert_eq!(console.layout(), settled);
}

#[test]
fn demo_trace_ends_with_listeners_released() {
    let mut console = console(1200.0);
    for event in trace::demo() {
        console.handle(&event);
    }

    assert!(!console.is_dragging());
    assert_eq!(console.surface().listener_count(), 0);
    assert_eq!(console.query().as_str(), "emotion amygdala");

    let px = pixels(&console, 1200.0);
    assert_close(px[0], 420.0);
    assert_close(px[1], 540.0);
    assert_close(px[2], 240.0);
}
