use chrono::{Datelike, Local, Timelike};
use dockside_core::clock::{WallClock, WallTime};

/// Host local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl WallClock for LocalClock {
    fn now(&self) -> WallTime {
        let now = Local::now();
        WallTime {
            year: u16::try_from(now.year()).unwrap_or(0),
            month: now.month() as u8,
            day: now.day() as u8,
            hour: now.hour() as u8,
            minute: now.minute() as u8,
            second: now.second() as u8,
        }
    }
}
