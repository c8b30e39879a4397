use super::*;

#[derive(Default)]
struct Recorder {
    events: Vec<BlurEvent>,
}

impl FocusOutsideHandler for Recorder {
    fn handle_focus_outside(&mut self, event: &BlurEvent) {
        self.events.push(event.clone());
    }
}

fn bound() -> FocusOutsideMonitor<Recorder> {
    let mut monitor = FocusOutsideMonitor::new();
    monitor.bind(Recorder::default());
    monitor
}

fn blur(target: usize) -> BlurEvent {
    BlurEvent {
        target: Some(NodeId(target)),
        related_target: None,
    }
}

fn calls(monitor: &FocusOutsideMonitor<Recorder>) -> usize {
    monitor.handler().map_or(0, |h| h.events.len())
}

#[test]
fn test_blur_then_turn_fires() {
    let mut monitor = bound();
    monitor.on_blur(blur(3));
    assert!(monitor.has_pending());
    assert!(monitor.run_pending());
    assert_eq!(monitor.handler().unwrap().events, vec![blur(3)]);
    assert!(!monitor.has_pending());
}

#[test]
fn test_focus_within_cancels() {
    let mut monitor = bound();
    monitor.on_blur(blur(3));
    monitor.on_focus();
    assert!(!monitor.run_pending());
    assert_eq!(calls(&monitor), 0);
}

#[test]
fn test_run_pending_without_blur() {
    let mut monitor = bound();
    assert!(!monitor.run_pending());
}

#[test]
fn test_later_blur_replaces_pending() {
    let mut monitor = bound();
    monitor.on_blur(blur(1));
    monitor.on_blur(blur(2));
    assert!(monitor.run_pending());
    assert!(!monitor.run_pending());
    assert_eq!(monitor.handler().unwrap().events, vec![blur(2)]);
}

#[test]
fn test_button_press_suppresses_blur() {
    let mut monitor = bound();
    let button = Element::new("button");

    monitor.on_pointer(PointerKind::MouseDown, &button);
    monitor.on_blur(blur(1));
    assert!(!monitor.has_pending());

    monitor.on_pointer(PointerKind::MouseUp, &button);
    monitor.on_blur(blur(1));
    assert!(monitor.has_pending());
}

#[test]
fn test_touch_on_submit_input_suppresses_blur() {
    let mut monitor = bound();
    let submit = Element::new("input").with_attribute("type", "submit");

    monitor.on_pointer(PointerKind::TouchStart, &submit);
    monitor.on_blur(blur(1));
    assert!(!monitor.has_pending());

    monitor.on_pointer(PointerKind::TouchEnd, &Element::new("div"));
    monitor.on_blur(blur(1));
    assert!(monitor.has_pending());
}

#[test]
fn test_press_on_plain_element_does_not_suppress() {
    let mut monitor = bound();
    monitor.on_pointer(PointerKind::MouseDown, &Element::new("div"));
    monitor.on_blur(blur(1));
    assert!(monitor.has_pending());
}

#[test]
fn test_unbind_cancels_pending() {
    let mut monitor = bound();
    monitor.on_blur(blur(1));
    let handler = monitor.unbind().unwrap();
    assert!(handler.events.is_empty());
    assert!(!monitor.has_pending());
    assert!(!monitor.run_pending());
}

#[test]
fn test_pending_without_handler_is_dropped() {
    let mut monitor: FocusOutsideMonitor<Recorder> = FocusOutsideMonitor::new();
    monitor.on_blur(blur(1));
    assert!(!monitor.run_pending());
    assert!(!monitor.has_pending());
}

#[test]
fn test_closure_handler() {
    let mut count = 0;
    {
        let mut monitor = FocusOutsideMonitor::new();
        monitor.bind(|_: &BlurEvent| count += 1);
        monitor.on_blur(BlurEvent::default());
        monitor.run_pending();
    }
    assert_eq!(count, 1);
}

#[test]
fn test_focus_normalized_buttons() {
    assert!(is_focus_normalized_button(&Element::new("a")));
    assert!(is_focus_normalized_button(&Element::new("BUTTON")));
    assert!(is_focus_normalized_button(
        &Element::new("input").with_attribute("type", "button")
    ));
    assert!(!is_focus_normalized_button(
        &Element::new("input").with_attribute("type", "text")
    ));
    assert!(!is_focus_normalized_button(&Element::new("input")));
    assert!(!is_focus_normalized_button(&Element::new("span")));
}
