use todolist::ui::core::{EventHandler, EventType};
use tokio::time::Duration;

#[test]
fn test_default_tick_rate() {
    let handler = EventHandler::default();
    assert_eq!(handler.tick_rate(), Duration::from_millis(50));
}

#[test]
fn test_custom_tick_rate() {
    let handler = EventHandler::new(Duration::from_millis(200));
    assert_eq!(handler.tick_rate(), Duration::from_millis(200));
}

#[test]
fn test_event_types_compare() {
    assert_eq!(EventType::Resize(80, 24), EventType::Resize(80, 24));
    assert_ne!(EventType::Tick, EventType::Other);
}
