// Date localization
//
// Topic dates are displayed the way a fa-IR locale prints them: Solar Hijri
// (Jalali) calendar, Persian digits, `year/month/day` without zero padding.
// ISO output is available for terminals without Persian fonts.

use chrono::{Datelike, NaiveDate};

/// How dates are rendered in rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateStyle {
    /// Jalali calendar with Persian digits, e.g. `۱۴۰۳/۱/۱`
    #[default]
    Persian,
    /// Gregorian `YYYY-MM-DD`
    Iso,
}

impl DateStyle {
    /// Parse style string from config; unknown values fall back to Persian
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "iso" | "gregorian" => Self::Iso,
            _ => Self::Persian,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Persian => "persian",
            Self::Iso => "iso",
        }
    }

    pub fn format(&self, date: NaiveDate) -> String {
        match self {
            Self::Persian => format_persian(date),
            Self::Iso => date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// A date in the Solar Hijri calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JalaliDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Cumulative day counts at the start of each Gregorian month (non-leap)
const GREGORIAN_MONTH_OFFSETS: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Convert a Gregorian date to Jalali using the 33-year arithmetic cycle
///
/// Exact for the years topic data realistically covers (1800..2200 CE).
pub fn to_jalali(date: NaiveDate) -> JalaliDate {
    let gy = date.year() as i64;
    let gm = date.month() as usize;
    let gd = date.day() as i64;

    // Leap-day correction counts years through the current one once March starts
    let gy2 = if gm > 2 { gy + 1 } else { gy };
    let mut days = 355_666 + 365 * gy + (gy2 + 3) / 4 - (gy2 + 99) / 100
        + (gy2 + 399) / 400
        + gd
        + GREGORIAN_MONTH_OFFSETS[gm - 1];

    let mut jy = -1595 + 33 * (days / 12_053);
    days %= 12_053;
    jy += 4 * (days / 1461);
    days %= 1461;
    if days > 365 {
        jy += (days - 1) / 365;
        days = (days - 1) % 365;
    }

    let (month, day) = if days < 186 {
        (1 + days / 31, 1 + days % 31)
    } else {
        (7 + (days - 186) / 30, 1 + (days - 186) % 30)
    };

    JalaliDate {
        year: jy as i32,
        month: month as u32,
        day: day as u32,
    }
}

/// Replace ASCII digits with Extended Arabic-Indic (Persian) digits
pub fn persian_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0x06F0 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}

/// `2024-03-20` → `۱۴۰۳/۱/۱`
pub fn format_persian(date: NaiveDate) -> String {
    let j = to_jalali(date);
    persian_digits(&format!("{}/{}/{}", j.year, j.month, j.day))
}
