use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Serialize, Debug)]
pub struct WalkStats {
    pub pages_fetched: usize,
    pub links_followed: usize,
    pub start_time: u64, // Time in milliseconds since UNIX_EPOCH
    pub elapsed_ms: u64,
}

impl WalkStats {
    pub fn new() -> Self {
        Self {
            pages_fetched: 0,
            links_followed: 0,
            start_time: current_time_millis(),
            elapsed_ms: 0,
        }
    }

    pub fn finish(&mut self) {
        self.elapsed_ms = current_time_millis().saturating_sub(self.start_time);
    }
}

fn current_time_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis() as u64)
        .unwrap_or(0)
}
