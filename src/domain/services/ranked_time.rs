use chrono::{DateTime, Timelike, Utc};

/// Length of a ranked session in whole minutes, counted from its start
/// minute up to and including the half-hour mark of the following hour.
const RANKED_WINDOW_MINUTES: u32 = 61;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankedRegion {
    West,
    Central,
    East,
}

impl RankedRegion {
    pub fn label(&self) -> &'static str {
        match self {
            RankedRegion::West => "West",
            RankedRegion::Central => "Central",
            RankedRegion::East => "East",
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct RankedWindow {
    region: RankedRegion,
    utc_hour: u32,
    utc_minute: u32,
}

impl RankedWindow {
    fn start_minute_of_day(&self) -> u32 {
        self.utc_hour * 60 + self.utc_minute
    }
}

// All three sessions start at 20:30 local time; the UTC starts below are
// fixed and do not follow daylight-saving changes.
const RANKED_WINDOWS: [RankedWindow; 3] = [
    RankedWindow {
        region: RankedRegion::West,
        utc_hour: 1,
        utc_minute: 30,
    },
    RankedWindow {
        region: RankedRegion::Central,
        utc_hour: 18,
        utc_minute: 30,
    },
    RankedWindow {
        region: RankedRegion::East,
        utc_hour: 11,
        utc_minute: 30,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankedStatus {
    pub active: bool,
    pub minutes_left: u32,
    pub region: Option<RankedRegion>,
}

impl RankedStatus {
    fn inactive() -> Self {
        Self::default()
    }
}

pub fn check_ranked_time(now: DateTime<Utc>) -> RankedStatus {
    let minute_of_day = now.hour() * 60 + now.minute();

    for window in RANKED_WINDOWS {
        let start = window.start_minute_of_day();
        let end = start + RANKED_WINDOW_MINUTES;
        if (start..end).contains(&minute_of_day) {
            return RankedStatus {
                active: true,
                minutes_left: end - minute_of_day,
                region: Some(window.region),
            };
        }
    }

    RankedStatus::inactive()
}
