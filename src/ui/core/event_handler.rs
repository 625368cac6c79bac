use crossterm::event::{poll, Event, KeyEvent, KeyEventKind};
use tokio::time::Duration;

/// Default interval between ticks when no terminal event arrives
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(100);

pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::with_tick_rate(DEFAULT_TICK_RATE)
    }

    pub fn with_tick_rate(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            return Ok(Self::convert(crossterm::event::read()?));
        }

        // If no immediate event, yield to background tasks and return a tick
        tokio::time::sleep(self.tick_rate).await;
        Ok(EventType::Tick)
    }

    fn convert(event: Event) -> EventType {
        match event {
            // Windows reports releases too
            Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
            Event::Paste(text) => EventType::Paste(text),
            Event::Resize(w, h) => EventType::Resize(w, h),
            _ => EventType::Other,
        }
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Paste(String),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
