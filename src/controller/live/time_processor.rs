use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt::Display;
use tracing::warn;

pub const GAME_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Parses the scoreboard's `gameTimeUTC`. A missing `Z` or offset is read as UTC.
///
/// # Errors
///
/// Will return `Err` if the string is not an ISO-8601 timestamp
pub fn parse_game_time_utc(game_time_utc: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let trimmed = game_time_utc.trim();
    match DateTime::parse_from_rfc3339(trimmed) {
        Ok(dt) => Ok(dt.with_timezone(&Utc)),
        Err(rfc_err) => {
            let naive = trimmed.trim_end_matches('Z');
            NaiveDateTime::parse_from_str(naive, "%Y-%m-%dT%H:%M:%S%.f")
                .or_else(|_| NaiveDateTime::parse_from_str(naive, "%Y-%m-%dT%H:%M"))
                .map(|dt| dt.and_utc())
                .map_err(|_| rfc_err)
        }
    }
}

/// `YYYY-MM-DD HH:MM:SS <zone>` in `tz`, with the zone's abbreviation (`EST`, `UTC`).
pub fn format_game_time<Zone>(utc: DateTime<Utc>, tz: &Zone) -> String
where
    Zone: TimeZone,
    Zone::Offset: Display,
{
    utc.with_timezone(tz).format(GAME_TIME_FORMAT).to_string()
}

/// # Errors
///
/// Will return `Err` if the string is not an ISO-8601 timestamp
pub fn localize_game_time_in<Zone>(
    game_time_utc: &str,
    tz: &Zone,
) -> Result<String, chrono::ParseError>
where
    Zone: TimeZone,
    Zone::Offset: Display,
{
    parse_game_time_utc(game_time_utc).map(|utc| format_game_time(utc, tz))
}

/// The host's zone: `TZ` when it names one, then the system setting, then UTC.
#[must_use]
pub fn host_time_zone() -> Tz {
    let from_env = std::env::var("TZ").ok();
    let from_system = iana_time_zone::get_timezone().ok();
    from_env
        .into_iter()
        .chain(from_system)
        .find_map(|name| parse_zone_name(&name))
        .unwrap_or_else(|| {
            warn!("host time zone is unknown, game times are shown in UTC");
            Tz::UTC
        })
}

fn parse_zone_name(name: &str) -> Option<Tz> {
    name.trim().trim_start_matches(':').parse::<Tz>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use chrono_tz::America::{Los_Angeles, New_York};
    use chrono_tz::Asia::Tokyo;

    #[test]
    fn utc_host_is_labelled_utc() {
        for expected in [
            localize_game_time_in("2021-01-18T20:00:00Z", &Utc),
            localize_game_time_in("2021-01-18T20:00:00Z", &Tz::UTC),
        ] {
            assert_eq!(expected, Ok("2021-01-18 20:00:00 UTC".to_string()));
        }
    }

    #[test]
    fn zone_abbreviation_follows_daylight_saving() {
        assert_eq!(
            localize_game_time_in("2021-01-18T20:00:00Z", &New_York),
            Ok("2021-01-18 15:00:00 EST".to_string())
        );
        assert_eq!(
            localize_game_time_in("2023-10-25T00:30:00Z", &New_York),
            Ok("2023-10-24 20:30:00 EDT".to_string())
        );
    }

    #[test]
    fn offsets_cross_midnight() {
        assert_eq!(
            localize_game_time_in("2021-01-19T03:00:00Z", &Tokyo),
            Ok("2021-01-19 12:00:00 JST".to_string())
        );
        assert_eq!(
            localize_game_time_in("2021-01-19T03:00:00Z", &Los_Angeles),
            Ok("2021-01-18 19:00:00 PST".to_string())
        );
        // a bare offset has no abbreviation to show
        let fixed = FixedOffset::east_opt(9 * 3600).expect("valid offset");
        assert_eq!(
            localize_game_time_in("2021-01-19T03:00:00Z", &fixed),
            Ok("2021-01-19 12:00:00 +09:00".to_string())
        );
    }

    #[test]
    fn lenient_inputs() {
        let expected = Ok("2023-10-25 00:30:00 UTC".to_string());
        for input in [
            "2023-10-25T00:30:00",
            "2023-10-25T00:30:00.000Z",
            " 2023-10-25T00:30:00+00:00 ",
            "2023-10-25T00:30Z",
        ] {
            assert_eq!(localize_game_time_in(input, &Utc), expected, "{input}");
        }
        assert!(localize_game_time_in("2023-10-25", &Utc).is_err());
        assert!(localize_game_time_in("", &Utc).is_err());
    }

    #[test]
    fn zone_names() {
        assert_eq!(parse_zone_name("America/New_York"), Some(New_York));
        assert_eq!(parse_zone_name(":Asia/Tokyo"), Some(Tokyo));
        assert_eq!(parse_zone_name("Etc/UTC"), Some(Tz::Etc__UTC));
        assert_eq!(parse_zone_name("Mars/Olympus_Mons"), None);
        assert_eq!(parse_zone_name(""), None);
    }
}
