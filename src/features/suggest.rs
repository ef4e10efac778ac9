//! City name autocomplete

/// Cities offered as suggestions while typing
pub const CITIES: &[&str] = &[
    "London",
    "Paris",
    "New York",
    "Tokyo",
    "Berlin",
    "Madrid",
    "Rome",
    "Sydney",
    "Toronto",
    "Moscow",
    "Beijing",
    "Mumbai",
    "Cairo",
    "Dubai",
    "Singapore",
    "Los Angeles",
    "Chicago",
    "Amsterdam",
    "Vienna",
    "Prague",
    "Lisbon",
    "Dublin",
    "Stockholm",
    "Oslo",
    "Helsinki",
    "Seoul",
    "Bangkok",
    "Istanbul",
    "Mexico City",
    "Buenos Aires",
    "Nairobi",
    "Cape Town",
    "Athens",
    "Warsaw",
    "Zurich",
];

/// Case-insensitive substring matches of `query` in `cities`, in list order.
/// A blank query matches nothing.
pub fn suggestions<'a>(query: &str, cities: &[&'a str]) -> Vec<&'a str> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    cities
        .iter()
        .copied()
        .filter(|city| city.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lon_matches_london_only() {
        assert_eq!(suggestions("Lon", CITIES), vec!["London"]);
    }

    #[test]
    fn test_empty_query_has_no_suggestions() {
        assert!(suggestions("", CITIES).is_empty());
        assert!(suggestions("   ", CITIES).is_empty());
    }

    #[test]
    fn test_case_insensitive_and_ordered() {
        assert_eq!(suggestions("o", &["Oslo", "Rome", "Paris", "Tokyo"]), vec![
            "Oslo", "Rome", "Tokyo"
        ]);
        assert_eq!(suggestions("NEW", CITIES), vec!["New York"]);
        assert_eq!(suggestions("an", CITIES), vec![
            "Los Angeles",
            "Bangkok",
            "Istanbul",
        ]);
    }

    #[test]
    fn test_no_match() {
        assert!(suggestions("Atlantis", CITIES).is_empty());
    }
}
