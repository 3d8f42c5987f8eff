//! Per-subject prompt text.

use celestial_core::profile::Profile;
use chrono::{DateTime, Utc};
use chrono_tz::Asia::Shanghai;

/// Location text used when the profile has no coordinates.
pub const UNKNOWN_LOCATION: &str = "未知地点";

/// Formats `now` as wall-clock time in the reference timezone.
#[must_use]
pub fn reference_time(now: DateTime<Utc>) -> String {
    now.with_timezone(&Shanghai)
        .format("%Y/%-m/%-d %H:%M:%S")
        .to_string()
}

/// Describes the profile location, or the unknown sentinel.
#[must_use]
pub fn location_text(profile: &Profile) -> String {
    match &profile.location {
        Some(coords) => format!("经纬度 ({}, {})", coords.latitude, coords.longitude),
        None => UNKNOWN_LOCATION.to_owned(),
    }
}

/// Builds the prompt embedding name, birth moment, current time, and
/// location.
#[must_use]
pub fn build_prompt(profile: &Profile, now: DateTime<Utc>) -> String {
    format!(
        "行者：{} | 出生：{} {} | 实况：{} | 位置：{}",
        profile.name,
        profile.birth_date,
        profile.birth_time,
        reference_time(now),
        location_text(profile),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::location::Coordinates;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 5).unwrap()
    }

    #[test]
    fn test_reference_time_is_shanghai_wall_clock() {
        assert_eq!(reference_time(fixed_now()), "2026/1/15 18:00:05");
    }

    #[test]
    fn test_reference_time_rolls_over_date() {
        let late = Utc.with_ymd_and_hms(2026, 3, 31, 20, 30, 0).unwrap();
        assert_eq!(reference_time(late), "2026/4/1 04:30:00");
    }

    #[test]
    fn test_build_prompt_without_location_uses_sentinel() {
        let profile = Profile::new("晓", "1990-05-01", "08:30");

        let prompt = build_prompt(&profile, fixed_now());

        assert_eq!(
            prompt,
            "行者：晓 | 出生：1990-05-01 08:30 | 实况：2026/1/15 18:00:05 | 位置：未知地点"
        );
    }

    #[test]
    fn test_build_prompt_with_location_embeds_coordinates() {
        let profile = Profile::new("晓", "1990-05-01", "08:30")
            .with_location(Some(Coordinates::new(30.66, 104.06)));

        let prompt = build_prompt(&profile, fixed_now());

        assert!(prompt.ends_with("位置：经纬度 (30.66, 104.06)"));
    }
}
