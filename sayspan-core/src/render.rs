//! Natural-language rendering of a decomposed duration.
//!
//! Units with a zero count are omitted; the rest are phrased as
//! `"<count> <name>"` with an "s" appended for counts above one, then
//! joined with English list punctuation.

use crate::decompose::Decomposed;

/// Phrases one unit count, pluralizing the name for counts above one.
fn unit_phrase(count: u64, name: &str) -> String {
    if count == 1 {
        format!("{count} {name}")
    } else {
        format!("{count} {name}s")
    }
}

/// Joins phrases with English list punctuation: commas between all but the
/// final pair, and " and " before the last phrase.
///
/// A single phrase is returned as-is; an empty slice yields an empty
/// string.
#[must_use]
pub fn join_phrases(phrases: &[String]) -> String {
    match phrases {
        [] => String::new(),
        [only] => only.clone(),
        [rest @ .., last] => format!("{} and {}", rest.join(", "), last),
    }
}

/// Renders the non-zero units of a decomposed duration, largest first.
///
/// Callers handle the all-zero case separately; for it this returns an
/// empty string.
#[must_use]
pub fn render(decomposed: &Decomposed) -> String {
    let phrases: Vec<String> = decomposed
        .by_unit()
        .filter(|&(count, _)| count > 0)
        .map(|(count, unit)| unit_phrase(count, unit.name))
        .collect();
    join_phrases(&phrases)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_join_phrases() {
        assert_eq!(join_phrases(&phrases(&[])), "");
        assert_eq!(join_phrases(&phrases(&["5 days"])), "5 days");
        assert_eq!(
            join_phrases(&phrases(&["10 years", "5 days"])),
            "10 years and 5 days"
        );
        assert_eq!(
            join_phrases(&phrases(&["1 year", "2 days", "3 minutes", "4 seconds"])),
            "1 year, 2 days, 3 minutes and 4 seconds"
        );
        assert_eq!(
            join_phrases(&phrases(&[
                "10 years",
                "2 days",
                "5 hours",
                "1 minute",
                "33 seconds"
            ])),
            "10 years, 2 days, 5 hours, 1 minute and 33 seconds"
        );
    }

    #[test]
    fn test_pluralization() {
        assert_eq!(
            render(&Decomposed {
                years: 4,
                ..Decomposed::default()
            }),
            "4 years"
        );
        assert_eq!(
            render(&Decomposed {
                years: 1,
                ..Decomposed::default()
            }),
            "1 year"
        );
    }

    #[test]
    fn test_render_skips_zero_counts() {
        assert_eq!(
            render(&Decomposed {
                years: 2,
                minutes: 3,
                ..Decomposed::default()
            }),
            "2 years and 3 minutes"
        );
        assert_eq!(render(&Decomposed::default()), "");
    }
}
