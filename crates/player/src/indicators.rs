/// Values refreshed periodically for the progress track and time label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Indicators {
    /// Fraction of the duration covered by buffered data, in `[0, 1]`.
    pub loaded_fraction: f64,
    /// Fraction of the duration already played, in `[0, 1]`.
    pub played_fraction: f64,
    pub current_label: String,
    pub duration_label: String,
}

pub(crate) fn build(
    current_time: f64,
    duration: Option<f64>,
    buffered_end: Option<f64>,
) -> Indicators {
    let Some(duration) = duration.filter(|value| value.is_finite() && *value > 0.0) else {
        return Indicators {
            loaded_fraction: 0.0,
            played_fraction: 0.0,
            current_label: format_clock(current_time),
            duration_label: format_clock(0.0),
        };
    };

    Indicators {
        loaded_fraction: floor_fraction(buffered_end.unwrap_or(0.0) / duration),
        played_fraction: floor_fraction(current_time / duration),
        current_label: format_clock(current_time),
        duration_label: format_clock(duration),
    }
}

/// Clamps into `[0, 1]` and floors to four decimal places, so the rendered
/// bar width is stable across refreshes within the same hundredth percent.
fn floor_fraction(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value.clamp(0.0, 1.0) * 10_000.0).floor() / 10_000.0
}

/// Formats seconds as `mm:ss`, growing to `hh:mm:ss` from one hour up.
///
/// # Example
/// ```
/// use player::indicators::format_clock;
///
/// assert_eq!(format_clock(61.0), "01:01");
/// assert_eq!(format_clock(3_661.0), "01:01:01");
/// ```
pub fn format_clock(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let hours = total / 3_600;
    let minutes = (total % 3_600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::{build, floor_fraction, format_clock};

    #[test]
    fn fractions_are_floored_to_four_decimals() {
        let indicators = build(1.0, Some(3.0), Some(2.0));
        assert_eq!(indicators.played_fraction, 0.3333);
        assert_eq!(indicators.loaded_fraction, 0.6666);
    }

    #[test]
    fn unknown_duration_reports_zero_fractions() {
        let indicators = build(5.0, None, Some(4.0));
        assert_eq!(indicators.played_fraction, 0.0);
        assert_eq!(indicators.loaded_fraction, 0.0);
        assert_eq!(indicators.duration_label, "00:00");
    }

    #[test]
    fn zero_duration_is_treated_as_unknown() {
        let indicators = build(0.0, Some(0.0), None);
        assert_eq!(indicators.played_fraction, 0.0);
        assert_eq!(indicators.loaded_fraction, 0.0);
    }

    #[test]
    fn overshooting_position_clamps_to_full_bar() {
        assert_eq!(floor_fraction(1.7), 1.0);
        assert_eq!(floor_fraction(-0.2), 0.0);
    }

    #[test]
    fn clock_grows_to_hours_only_when_needed() {
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(59.9), "00:59");
        assert_eq!(format_clock(61.0), "01:01");
        assert_eq!(format_clock(3_661.0), "01:01:01");
    }

    #[test]
    fn clock_guards_non_finite_input() {
        assert_eq!(format_clock(f64::NAN), "00:00");
        assert_eq!(format_clock(f64::INFINITY), "00:00");
    }
}
