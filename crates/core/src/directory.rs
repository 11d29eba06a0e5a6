//! Grouping of venues into areas for the venue directory page.

use std::collections::BTreeMap;

use serde::Serialize;

/// Anything that sits in a city and state.
pub trait Located {
    fn city(&self) -> &str;
    fn state(&self) -> &str;
}

/// All venues sharing one `(city, state)` pair.
#[derive(Debug, Clone, Serialize)]
pub struct Area<T> {
    pub city: String,
    pub state: String,
    pub venues: Vec<T>,
}

/// Group entries by unique `(city, state)`.
///
/// Areas come out ordered by state, then city. Entries inside an area keep
/// the order they were given in. City and state are compared exactly, so
/// "Austin"/"TX" and "austin"/"TX" are different areas.
pub fn group_by_area<T, I>(entries: I) -> Vec<Area<T>>
where
    T: Located,
    I: IntoIterator<Item = T>,
{
    let mut areas: BTreeMap<(String, String), Vec<T>> = BTreeMap::new();
    for entry in entries {
        let key = (entry.state().to_string(), entry.city().to_string());
        areas.entry(key).or_default().push(entry);
    }

    areas
        .into_iter()
        .map(|((state, city), venues)| Area {
            city,
            state,
            venues,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Spot {
        id: i64,
        city: &'static str,
        state: &'static str,
    }

    impl Located for Spot {
        fn city(&self) -> &str {
            self.city
        }
        fn state(&self) -> &str {
            self.state
        }
    }

    fn spot(id: i64, city: &'static str, state: &'static str) -> Spot {
        Spot { id, city, state }
    }

    #[test]
    fn groups_by_city_and_state() {
        let areas = group_by_area(vec![
            spot(1, "San Francisco", "CA"),
            spot(2, "New York", "NY"),
            spot(3, "San Francisco", "CA"),
        ]);

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].city, "San Francisco");
        assert_eq!(areas[0].state, "CA");
        let ids: Vec<i64> = areas[0].venues.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(areas[1].city, "New York");
        assert_eq!(areas[1].venues.len(), 1);
    }

    #[test]
    fn same_city_in_different_states_is_split() {
        let areas = group_by_area(vec![spot(1, "Portland", "OR"), spot(2, "Portland", "ME")]);

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].state, "ME");
        assert_eq!(areas[1].state, "OR");
    }

    #[test]
    fn areas_ordered_by_state_then_city() {
        let areas = group_by_area(vec![
            spot(1, "Oakland", "CA"),
            spot(2, "Austin", "TX"),
            spot(3, "Berkeley", "CA"),
        ]);

        let keys: Vec<(&str, &str)> = areas
            .iter()
            .map(|a| (a.state.as_str(), a.city.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![("CA", "Berkeley"), ("CA", "Oakland"), ("TX", "Austin")]
        );
    }

    #[test]
    fn no_venues_no_areas() {
        assert!(group_by_area(Vec::<Spot>::new()).is_empty());
    }
}
