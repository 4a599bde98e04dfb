//! Scoring rules for beer die.
//!
//! Pure mapping from a catalog-resolved event name to the points it is
//! worth for the team that performed it. Separated from the session so
//! the mapping can be checked in isolation.

/// Returns the point value of an event, case-insensitively.
///
/// Every recognized event that is not a scoring play is worth zero.
/// Callers are expected to pass names already validated by the event
/// catalog; an arbitrary string simply scores zero here.
pub fn points(event_name: &str) -> u32 {
    match event_name.trim().to_ascii_lowercase().as_str() {
        "1 pointer" | "successful fifa" => 1,
        "2 pointer" => 2,
        "sink" => 3,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::points;

    #[test]
    fn test_scoring_plays() {
        assert_eq!(points("1 pointer"), 1);
        assert_eq!(points("2 pointer"), 2);
        assert_eq!(points("sink"), 3);
        assert_eq!(points("successful fifa"), 1);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(points("SINK"), 3);
        assert_eq!(points("2 Pointer"), 2);
        assert_eq!(points("Successful Fifa"), 1);
    }

    #[test]
    fn test_non_scoring_plays() {
        assert_eq!(points("airball"), 0);
        assert_eq!(points("too short"), 0);
        assert_eq!(points("unsuccessful fifa"), 0);
        assert_eq!(points("two-hand catch"), 0);
    }

    #[test]
    fn test_whitespace_tolerated() {
        assert_eq!(points("  sink "), 3);
    }
}
