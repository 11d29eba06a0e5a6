//! Form conventions for venue, artist and show submissions.
//!
//! Submissions pass user input through with minimal validation. The only
//! interpretation applied here is the checkbox sentinel for the "seeking"
//! flags, plus the choice lists the create/edit forms offer.

/* --------------------------------------------------------------------------
Seeking flags
-------------------------------------------------------------------------- */

/// The value a checked "seeking" checkbox submits.
pub const SEEKING_SENTINEL: &str = "y";

/// Default `seeking_description` for venues that omit one on create.
pub const DEFAULT_VENUE_SEEKING_DESCRIPTION: &str = "Not looking for talent";

/// Default `seeking_description` for artists that omit one on create.
pub const DEFAULT_ARTIST_SEEKING_DESCRIPTION: &str = "Not looking for venues";

/// Interpret a submitted "seeking" field.
///
/// Only the exact sentinel `"y"` counts as checked. Anything else, including
/// an absent field, `"Y"` or `"yes"`, is `false`.
pub fn seeking_flag(value: Option<&str>) -> bool {
    value == Some(SEEKING_SENTINEL)
}

/* --------------------------------------------------------------------------
Choice lists
-------------------------------------------------------------------------- */

/// Genres offered by the venue and artist forms.
pub const GENRE_CHOICES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// US state codes offered by the venue and artist forms.
pub const STATE_CHOICES: &[&str] = &[
    "AK", "AL", "AR", "AZ", "CA", "CO", "CT", "DC", "DE", "FL", "GA", "HI", "IA", "ID", "IL", "IN",
    "KS", "KY", "LA", "MA", "MD", "ME", "MI", "MN", "MO", "MS", "MT", "NC", "ND", "NE", "NH", "NJ",
    "NM", "NV", "NY", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VA", "VT", "WA",
    "WI", "WV", "WY",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_means_seeking() {
        assert!(seeking_flag(Some("y")));
    }

    #[test]
    fn anything_else_means_not_seeking() {
        assert!(!seeking_flag(None));
        assert!(!seeking_flag(Some("")));
        assert!(!seeking_flag(Some("Y")));
        assert!(!seeking_flag(Some("yes")));
        assert!(!seeking_flag(Some("true")));
        assert!(!seeking_flag(Some(" y")));
    }

    #[test]
    fn state_choices_are_unique_two_letter_codes() {
        assert_eq!(STATE_CHOICES.len(), 51);
        for code in STATE_CHOICES {
            assert_eq!(code.len(), 2, "bad state code {code}");
        }
        let mut sorted = STATE_CHOICES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), STATE_CHOICES.len());
    }

    #[test]
    fn genre_choices_include_other() {
        assert!(GENRE_CHOICES.contains(&"Other"));
        assert!(GENRE_CHOICES.contains(&"Jazz"));
    }
}
