use sentencelens::ui::core::event_handler::DEFAULT_TICK_RATE;
use sentencelens::ui::core::EventHandler;
use std::time::Duration;

#[test]
fn test_default_tick_rate() {
    let handler = EventHandler::default();
    assert_eq!(handler.tick_rate(), DEFAULT_TICK_RATE);
    assert_eq!(DEFAULT_TICK_RATE, Duration::from_millis(100));
}

#[test]
fn test_custom_tick_rate() {
    let handler = EventHandler::with_tick_rate(Duration::from_millis(25));
    assert_eq!(handler.tick_rate(), Duration::from_millis(25));
}
