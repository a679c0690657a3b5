//! Write-time checks applied to a candidate [`Video`].
//!
//! Reads never go through here: a stored row with a bad date is still
//! returned by a listing.

use crate::error::ValidationError;
use crate::video::Video;
use jiff::civil::Date;

/// Checks every rule a record must satisfy before it is stored.
pub fn validate_video(video: &Video) -> Result<(), ValidationError> {
    validate_post_date(&video.post_date).map(|_| ())
}

/// Parses a `YYYY-MM-DD` post date.
///
/// The text must be exactly four digits, a dash, two digits, a dash and two
/// digits, and must name a real calendar day: `2025-02-30` has the right
/// shape and is still rejected.
pub fn validate_post_date(value: &str) -> Result<Date, ValidationError> {
    let invalid = || ValidationError::InvalidDate(value.to_string());

    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !well_formed {
        return Err(invalid());
    }

    let year: i16 = value[0..4].parse().map_err(|_| invalid())?;
    let month: i8 = value[5..7].parse().map_err(|_| invalid())?;
    let day: i8 = value[8..10].parse().map_err(|_| invalid())?;

    // Year zero is representable in jiff but is not a calendar year here.
    if year < 1 {
        return Err(invalid());
    }

    Date::new(year, month, day).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(post_date: &str) -> Video {
        Video {
            id: 1,
            name: "clip".to_string(),
            href: "https://videos.example/clip".to_string(),
            post_date: post_date.to_string(),
            views_count: 0,
        }
    }

    #[test]
    fn accepts_real_dates() {
        assert!(validate_post_date("2025-02-28").is_ok());
        assert!(validate_post_date("2024-02-29").is_ok());
        assert!(validate_post_date("0001-01-01").is_ok());
        assert!(validate_video(&video("1999-12-31")).is_ok());
    }

    #[test]
    fn parses_components() {
        let date = validate_post_date("2023-07-04").unwrap();
        assert_eq!(date.year(), 2023);
        assert_eq!(date.month(), 7);
        assert_eq!(date.day(), 4);
    }

    #[test]
    fn rejects_impossible_days() {
        assert!(validate_post_date("2025-02-30").is_err());
        assert!(validate_post_date("2023-02-29").is_err());
        assert!(validate_post_date("2025-13-01").is_err());
        assert!(validate_post_date("2025-00-10").is_err());
        assert!(validate_post_date("2025-04-31").is_err());
        assert!(validate_post_date("0000-01-01").is_err());
    }

    #[test]
    fn rejects_wrong_shape() {
        for value in [
            "",
            "2025-2-28",
            "25-02-28",
            "2025/02/28",
            "2025-02-28T00:00",
            " 2025-02-28",
            "2025-O2-28",
            "２０２５-02-28",
        ] {
            assert_eq!(
                validate_post_date(value),
                Err(ValidationError::InvalidDate(value.to_string())),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn validate_video_reports_the_offending_date() {
        let err = validate_video(&video("2025-02-30")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidDate("2025-02-30".to_string()));
    }
}
