//! Result ordering for the results view.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::types::SearchItem;

/// Ordering applied to a result list before rendering.
///
/// Wire values match the sort control's option values; the empty string keeps
/// the API's own order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Order returned by the API
    #[default]
    #[serde(rename = "")]
    Relevance,
    /// Title A to Z
    #[serde(rename = "A_Z")]
    TitleAsc,
    /// Title Z to A
    #[serde(rename = "Z_A")]
    TitleDesc,
    /// Newest first
    #[serde(rename = "DESC")]
    YearDesc,
    /// Oldest first
    #[serde(rename = "ASC")]
    YearAsc,
}

impl SortOrder {
    /// All orders in the order the sort control lists them.
    pub const ALL: [SortOrder; 5] = [
        SortOrder::Relevance,
        SortOrder::TitleAsc,
        SortOrder::TitleDesc,
        SortOrder::YearDesc,
        SortOrder::YearAsc,
    ];

    /// Value used in URLs and form fields.
    pub fn as_param(self) -> &'static str {
        match self {
            SortOrder::Relevance => "",
            SortOrder::TitleAsc => "A_Z",
            SortOrder::TitleDesc => "Z_A",
            SortOrder::YearDesc => "DESC",
            SortOrder::YearAsc => "ASC",
        }
    }

    /// Label shown in the sort control.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Relevance => "Sort by",
            SortOrder::TitleAsc => "Title: A-Z",
            SortOrder::TitleDesc => "Title: Z-A",
            SortOrder::YearDesc => "Date: DESC",
            SortOrder::YearAsc => "Date: ASC",
        }
    }

    /// Parses a URL value, falling back to [`SortOrder::Relevance`] for
    /// anything unrecognized.
    pub fn from_param(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|order| order.as_param() == value.trim())
            .unwrap_or_default()
    }

    /// Compares two items under this order.
    pub fn compare(self, a: &SearchItem, b: &SearchItem) -> Ordering {
        match self {
            SortOrder::Relevance => Ordering::Equal,
            SortOrder::TitleAsc => compare_titles(a, b),
            SortOrder::TitleDesc => compare_titles(b, a),
            SortOrder::YearDesc => compare_years(a.release_year(), b.release_year(), true),
            SortOrder::YearAsc => compare_years(a.release_year(), b.release_year(), false),
        }
    }

    /// Sorts in place. Stable: ties keep their API order.
    pub fn apply(self, items: &mut [SearchItem]) {
        if self != SortOrder::Relevance {
            items.sort_by(|a, b| self.compare(a, b));
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_param())
    }
}

fn compare_titles(a: &SearchItem, b: &SearchItem) -> Ordering {
    a.title.to_lowercase().cmp(&b.title.to_lowercase())
}

// Items without a year go last in both directions.
fn compare_years(a: Option<u16>, b: Option<u16>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) if descending => y.cmp(&x),
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::types::{MediaType, Poster};

    fn item(title: &str, year: &str, id: &str) -> SearchItem {
        SearchItem {
            title: title.to_string(),
            year: year.to_string(),
            imdb_id: id.to_string(),
            media_type: MediaType::Movie,
            poster: Poster::Missing,
        }
    }

    fn ids(items: &[SearchItem]) -> Vec<&str> {
        items.iter().map(|i| i.imdb_id.as_str()).collect()
    }

    #[test]
    fn test_param_round_trip_and_fallback() {
        for order in SortOrder::ALL {
            assert_eq!(SortOrder::from_param(order.as_param()), order);
        }
        assert_eq!(SortOrder::from_param("sideways"), SortOrder::Relevance);
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let mut items = vec![
            item("zodiac", "2007", "a"),
            item("Alien", "1979", "b"),
            item("memento", "2000", "c"),
        ];

        SortOrder::TitleAsc.apply(&mut items);
        assert_eq!(ids(&items), ["b", "c", "a"]);

        SortOrder::TitleDesc.apply(&mut items);
        assert_eq!(ids(&items), ["a", "c", "b"]);
    }

    #[test]
    fn test_year_sort_puts_unknown_years_last() {
        let mut items = vec![
            item("Unknown", "N/A", "u"),
            item("Old", "1985", "o"),
            item("Series", "2019–2021", "s"),
            item("New", "2023", "n"),
        ];

        SortOrder::YearDesc.apply(&mut items);
        assert_eq!(ids(&items), ["n", "s", "o", "u"]);

        SortOrder::YearAsc.apply(&mut items);
        assert_eq!(ids(&items), ["o", "s", "n", "u"]);
    }

    #[test]
    fn test_relevance_keeps_api_order() {
        let mut items = vec![item("B", "2001", "1"), item("A", "2000", "2")];
        SortOrder::Relevance.apply(&mut items);
        assert_eq!(ids(&items), ["1", "2"]);
    }

    fn arb_items() -> impl Strategy<Value = Vec<SearchItem>> {
        prop::collection::vec(
            ("[a-cA-C]{1,2}", prop_oneof![Just("N/A".to_string()), "(199|200)[0-2]"]),
            0..12,
        )
        .prop_map(|pairs| {
            pairs
                .into_iter()
                .enumerate()
                .map(|(index, (title, year))| item(&title, &year, &index.to_string()))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_sort_is_a_stable_permutation(items in arb_items(), order_index in 0usize..5) {
            let order = SortOrder::ALL[order_index];
            let mut sorted = items.clone();
            order.apply(&mut sorted);

            let mut before: Vec<_> = items.iter().map(|i| i.imdb_id.clone()).collect();
            let mut after: Vec<_> = sorted.iter().map(|i| i.imdb_id.clone()).collect();
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);

            for pair in sorted.windows(2) {
                let ordering = order.compare(&pair[0], &pair[1]);
                prop_assert_ne!(ordering, Ordering::Greater);
                if ordering == Ordering::Equal {
                    let first: usize = pair[0].imdb_id.parse().unwrap();
                    let second: usize = pair[1].imdb_id.parse().unwrap();
                    prop_assert!(first < second);
                }
            }
        }
    }
}
