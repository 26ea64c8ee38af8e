//! Duration and distance formatting for whole and fractional counts.

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;
const METERS_PER_KILOMETER: i64 = 1_000;

/// Formatting for integers that count seconds or meters.
pub trait I64DurationExt {
    /// Seconds as minutes and seconds joined by `:`, leaving out whichever
    /// component is zero. Neither component is padded.
    ///
    /// ```
    /// use base_type_extensions::I64DurationExt;
    ///
    /// assert_eq!(90_i64.time_string(), "1:30");
    /// assert_eq!(45_i64.time_string(), "45");
    /// assert_eq!(120_i64.time_string(), "2");
    /// assert_eq!(0_i64.time_string(), "");
    /// ```
    fn time_string(&self) -> String;

    /// Seconds split into `(hours, minutes, seconds)`.
    fn to_hours_minutes_seconds(&self) -> (i64, i64, i64);

    /// Meters as `"500 m"`, `"1.5 km"` or, from 1000 km up, `"2000 km"`.
    fn distance_text_key(&self) -> String;
}

impl I64DurationExt for i64 {
    fn time_string(&self) -> String {
        let minutes = self / SECONDS_PER_MINUTE;
        let seconds = self % SECONDS_PER_MINUTE;
        match (minutes > 0, seconds > 0) {
            (true, true) => format!("{minutes}:{seconds}"),
            (true, false) => minutes.to_string(),
            (false, true) => seconds.to_string(),
            (false, false) => String::new(),
        }
    }

    fn to_hours_minutes_seconds(&self) -> (i64, i64, i64) {
        let remainder = self % SECONDS_PER_HOUR;
        (
            self / SECONDS_PER_HOUR,
            remainder / SECONDS_PER_MINUTE,
            remainder % SECONDS_PER_MINUTE,
        )
    }

    fn distance_text_key(&self) -> String {
        let meters = *self;
        if meters < METERS_PER_KILOMETER {
            format!("{meters} m")
        } else if meters < METERS_PER_KILOMETER * METERS_PER_KILOMETER {
            let km = (meters as f64 / METERS_PER_KILOMETER as f64 * 10.0).round() / 10.0;
            format!("{km:.1} km")
        } else {
            format!("{} km", meters / METERS_PER_KILOMETER)
        }
    }
}

/// Formatting for fractional second counts.
pub trait F64DurationExt {
    /// Seconds as `"H:MM"`; seconds are dropped. Negative or non-finite
    /// input renders `"0:00"`.
    fn convert_to_time_format(&self) -> String;
}

impl F64DurationExt for f64 {
    fn convert_to_time_format(&self) -> String {
        if !self.is_finite() || *self < 0.0 {
            return "0:00".to_string();
        }
        // Saturates for values beyond i64.
        let total = self.trunc() as i64;
        let hours = total / SECONDS_PER_HOUR;
        let minutes = (total - hours * SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
        format!("{hours}:{minutes:02}")
    }
}
