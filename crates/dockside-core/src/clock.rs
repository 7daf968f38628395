//! Wall-clock source for the footer time and date.

use core::fmt::Write;

use heapless::String as HeaplessString;

pub const TIME_LABEL_BYTES: usize = 12;
pub const DATE_LABEL_BYTES: usize = 10;

/// Broken-down local time as supplied by the platform.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WallTime {
    pub year: u16,
    /// 1..=12
    pub month: u8,
    /// 1..=31
    pub day: u8,
    /// 0..=23
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// Anything that can tell the kiosk what time it is.
pub trait WallClock {
    fn now(&self) -> WallTime;
}

/// Clock frozen at one instant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FixedClock(pub WallTime);

impl WallClock for FixedClock {
    fn now(&self) -> WallTime {
        self.0
    }
}

/// `h:mm:ss AM` in 12-hour form.
pub fn time_label(time: WallTime) -> HeaplessString<TIME_LABEL_BYTES> {
    let marker = if time.hour < 12 { "AM" } else { "PM" };
    let hour = match time.hour % 12 {
        0 => 12,
        hour => hour,
    };

    let mut out = HeaplessString::new();
    let _ = write!(
        out,
        "{}:{:02}:{:02} {}",
        hour,
        time.minute.min(59),
        time.second.min(59),
        marker
    );
    out
}

/// `M/D/YYYY`.
pub fn date_label(time: WallTime) -> HeaplessString<DATE_LABEL_BYTES> {
    let mut out = HeaplessString::new();
    let _ = write!(out, "{}/{}/{}", time.month, time.day, time.year.min(9_999));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u8, minute: u8, second: u8) -> WallTime {
        WallTime {
            year: 2026,
            month: 10,
            day: 16,
            hour,
            minute,
            second,
        }
    }

    #[test]
    fn formats_twelve_hour_time() {
        assert_eq!(time_label(at(0, 5, 9)).as_str(), "12:05:09 AM");
        assert_eq!(time_label(at(9, 30, 0)).as_str(), "9:30:00 AM");
        assert_eq!(time_label(at(12, 0, 0)).as_str(), "12:00:00 PM");
        assert_eq!(time_label(at(23, 59, 59)).as_str(), "11:59:59 PM");
    }

    #[test]
    fn formats_us_date() {
        assert_eq!(date_label(at(8, 0, 0)).as_str(), "10/16/2026");
        let new_year = WallTime {
            month: 1,
            day: 2,
            ..at(8, 0, 0)
        };
        assert_eq!(date_label(new_year).as_str(), "1/2/2026");
    }

    #[test]
    fn fixed_clock_reports_its_instant() {
        let clock = FixedClock(at(13, 4, 5));
        assert_eq!(clock.now().hour, 13);
    }
}
