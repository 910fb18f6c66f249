//! Time module for solar-system position calculations
//!
//! This module provides [`Instant`], the single time value used throughout the
//! crate. An instant is stored as a Julian Day on the UT scale; the Julian
//! Ephemeris Day (the argument of every planetary series) is derived from it by
//! adding ΔT = TT − UT from a piecewise polynomial model.

use crate::constants::{DAYS_PER_CENTURY, DAYS_PER_MILLENNIUM, DAY_S, J2000};
use chrono::{DateTime, Datelike, NaiveDateTime, Timelike, Utc};
use std::fmt;
use std::ops::{Add, Sub};
use thiserror::Error;

/// Error type for time operations
#[derive(Debug, Error)]
pub enum TimeError {
    #[error("Invalid time format: {0}")]
    InvalidFormat(String),

    #[error("Calendar error: {0}")]
    CalendarError(String),
}

/// Result type for time operations
pub type Result<T> = std::result::Result<T, TimeError>;

/// Calendar tuple for representing a date and time
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTuple {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

/// A moment in time, stored as a UT Julian Day
///
/// `Instant` is an immutable value type. Adding a number of days yields a new
/// instant; subtracting two instants yields their separation in days.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Instant {
    jd: f64,
}

impl Instant {
    /// Create an instant from a UT Julian Day
    pub fn from_jd(jd: f64) -> Self {
        Instant { jd }
    }

    /// Create an instant from a Julian Ephemeris Day (TT)
    ///
    /// ΔT depends on the UT date it is evaluated at, so the inversion takes two
    /// fixed-point passes, which is far below a millisecond of residual.
    pub fn from_jde(jde: f64) -> Self {
        let mut jd = jde - delta_t(jde) / DAY_S;
        jd = jde - delta_t(jd) / DAY_S;
        Instant { jd }
    }

    /// Create an instant from a Gregorian calendar date and UT time of day
    pub fn from_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Self {
        let day_fraction = (hour as f64 + minute as f64 / 60.0 + second / 3600.0) / 24.0;
        // julian_day() numbers the day that starts at the preceding noon
        let jd = julian_day(year, month, day) as f64 - 0.5 + day_fraction;
        Instant { jd }
    }

    /// Create an instant from a chrono UTC timestamp (UTC is taken as UT)
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self::from_calendar(
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second() as f64 + dt.nanosecond() as f64 / 1_000_000_000.0,
        )
    }

    /// The current wall-clock time
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Parse an ISO-8601 UT timestamp
    ///
    /// Accepts RFC 3339 strings (`2003-06-14T15:26:00Z`) as well as the bare
    /// forms `2003-06-14T15:26:00`, `2003-06-14T15:26` and `2003-06-14`.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Ok(Self::from_datetime(dt.with_timezone(&Utc)));
        }
        for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(text, pattern) {
                return Ok(Self::from_datetime(naive.and_utc()));
            }
        }
        if let Ok(date) = chrono::NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return Ok(Self::from_calendar(
                date.year(),
                date.month(),
                date.day(),
                0,
                0,
                0.0,
            ));
        }
        Err(TimeError::InvalidFormat(text.to_string()))
    }

    /// UT Julian Day
    pub fn jd(&self) -> f64 {
        self.jd
    }

    /// ΔT = TT − UT in seconds at this instant
    pub fn delta_t(&self) -> f64 {
        delta_t(self.jd)
    }

    /// Julian Ephemeris Day (TT)
    pub fn jde(&self) -> f64 {
        self.jd + self.delta_t() / DAY_S
    }

    /// Days of TT elapsed since J2000.0
    pub fn days_since_j2000(&self) -> f64 {
        self.jde() - J2000
    }

    /// Julian centuries of TT since J2000.0
    pub fn centuries_since_j2000(&self) -> f64 {
        self.days_since_j2000() / DAYS_PER_CENTURY
    }

    /// Julian millennia of TT since J2000.0 (τ of the VSOP87 series)
    pub fn millennia_since_j2000(&self) -> f64 {
        self.days_since_j2000() / DAYS_PER_MILLENNIUM
    }

    /// Julian centuries of UT since J2000.0, the argument of sidereal time
    pub fn ut_centuries_since_j2000(&self) -> f64 {
        (self.jd - J2000) / DAYS_PER_CENTURY
    }

    /// Convert back to a Gregorian calendar date and UT time of day
    ///
    /// The time of day is rounded to the nearest millisecond, carrying into
    /// the next day when it rounds up to midnight.
    pub fn to_calendar(&self) -> CalendarTuple {
        let ms_per_day = DAY_S * 1000.0;
        let total_ms = ((self.jd + 0.5) * ms_per_day).round();
        let z = (total_ms / ms_per_day).floor();
        let ms_of_day = (total_ms - z * ms_per_day) as u64;

        let (year, month, day) = julian_day_to_calendar_date(z as i32);

        let hour = (ms_of_day / 3_600_000) as u32;
        let minute = (ms_of_day % 3_600_000 / 60_000) as u32;
        let second = (ms_of_day % 60_000) as f64 / 1000.0;

        CalendarTuple {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Convert to a chrono UTC timestamp
    pub fn to_datetime(&self) -> Result<DateTime<Utc>> {
        let cal = self.to_calendar();
        let date = chrono::NaiveDate::from_ymd_opt(cal.year, cal.month, cal.day).ok_or_else(
            || TimeError::CalendarError(format!("{}-{}-{}", cal.year, cal.month, cal.day)),
        )?;
        let whole = cal.second.floor();
        let nanos = ((cal.second - whole) * 1e9).round().min(999_999_999.0) as u32;
        let time = chrono::NaiveTime::from_hms_nano_opt(cal.hour, cal.minute, whole as u32, nanos)
            .ok_or_else(|| {
                TimeError::CalendarError(format!("{}:{}:{}", cal.hour, cal.minute, cal.second))
            })?;
        Ok(NaiveDateTime::new(date, time).and_utc())
    }
}

/// ΔT (TT − UT) in seconds for a given Julian Day
///
/// Piecewise polynomials by decimal year from the Five Millennium Canon of
/// Solar Eclipses (Espenak & Meeus), with the long-term parabola outside the
/// tabulated range.
pub fn delta_t(jd: f64) -> f64 {
    let year = (jd - 1721045.0) / 365.25;
    delta_t_for_year(year)
}

fn delta_t_for_year(year: f64) -> f64 {
    if year < -500.0 {
        let t = year / 100.0;
        -20.0 + 32.0 * t * t
    } else if year < 500.0 {
        let t = year / 100.0;
        10583.6 - 1014.41 * t + 33.78311 * t * t - 5.952053 * t.powi(3) - 0.1798452 * t.powi(4)
            + 0.022174192 * t.powi(5)
            + 0.0090316521 * t.powi(6)
    } else if year < 1600.0 {
        let t = (year - 1000.0) / 100.0;
        1574.2 - 556.01 * t + 71.23472 * t * t + 0.319781 * t.powi(3)
            - 0.8503463 * t.powi(4)
            - 0.005050998 * t.powi(5)
            + 0.0083572073 * t.powi(6)
    } else if year < 1700.0 {
        let t = year - 1600.0;
        120.0 - 0.9808 * t - 0.01532 * t * t + t.powi(3) / 7129.0
    } else if year < 1800.0 {
        let t = year - 1700.0;
        8.83 + 0.1603 * t - 0.0059285 * t * t + 0.00013336 * t.powi(3) - t.powi(4) / 1174000.0
    } else if year < 1860.0 {
        let t = year - 1800.0;
        13.72 - 0.332447 * t + 0.0068612 * t * t + 0.0041116 * t.powi(3)
            - 0.00037436 * t.powi(4)
            + 0.0000121272 * t.powi(5)
            - 0.0000001699 * t.powi(6)
            + 0.000000000875 * t.powi(7)
    } else if year < 1900.0 {
        let t = year - 1860.0;
        7.62 + 0.5737 * t - 0.251754 * t * t + 0.01680668 * t.powi(3) - 0.0004473624 * t.powi(4)
            + t.powi(5) / 233174.0
    } else if year < 1920.0 {
        let t = year - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t * t + 0.0061966 * t.powi(3) - 0.000197 * t.powi(4)
    } else if year < 1941.0 {
        let t = year - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t * t + 0.0020936 * t.powi(3)
    } else if year < 1961.0 {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t * t / 233.0 + t.powi(3) / 2547.0
    } else if year < 1986.0 {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t * t / 260.0 - t.powi(3) / 718.0
    } else if year < 2005.0 {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t * t
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if year < 2050.0 {
        let t = year - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t * t
    } else if year < 2150.0 {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - year)
    } else {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    }
}

/// Normalize a month value to the range 1-12, adjusting the year as needed
fn normalize_month(year: i32, month: u32) -> (i32, u32) {
    if (1..=12).contains(&month) {
        return (year, month);
    }
    let month_0 = month as i32 - 1;
    (year + month_0.div_euclid(12), (month_0.rem_euclid(12) + 1) as u32)
}

/// Julian day number of a Gregorian calendar date
///
/// Explanatory Supplement to the Astronomical Almanac 15.11.
pub fn julian_day(year: i32, month: u32, day: u32) -> i32 {
    let (year, month) = normalize_month(year, month);

    let janfeb = month <= 2;
    let g = year + 4716 - if janfeb { 1 } else { 0 };
    let f = (month + 9) % 12;
    let e = 1461 * g / 4 + day as i32 - 1402;
    let j = e + (153 * f as i32 + 2) / 5;

    j + 38 - (g + 184) / 100 * 3 / 4
}

/// Gregorian calendar date of a Julian day number
///
/// Explanatory Supplement to the Astronomical Almanac 15.11.
pub fn julian_day_to_calendar_date(jd: i32) -> (i32, u32, u32) {
    let f = jd + 1401 + (4 * jd + 274277) / 146097 * 3 / 4 - 38;

    let e = 4 * f + 3;
    let g = (e % 1461) / 4;
    let h = 5 * g + 2;

    let day = (h % 153) / 5 + 1;
    let month = ((h / 153) + 2) % 12 + 1;
    let year = e / 1461 - 4716 + (12 + 2 - month) / 12;

    (year, month as u32, day as u32)
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cal = self.to_calendar();
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3} UT",
            cal.year, cal.month, cal.day, cal.hour, cal.minute, cal.second
        )
    }
}

impl Add<f64> for Instant {
    type Output = Instant;

    fn add(self, days: f64) -> Self::Output {
        Instant {
            jd: self.jd + days,
        }
    }
}

impl Sub<f64> for Instant {
    type Output = Instant;

    fn sub(self, days: f64) -> Self::Output {
        Instant {
            jd: self.jd - days,
        }
    }
}

impl Sub<Instant> for Instant {
    type Output = f64;

    fn sub(self, other: Instant) -> Self::Output {
        self.jd - other.jd
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(dt)
    }
}
