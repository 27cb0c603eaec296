use thiserror::Error;

use crate::{consts::consts::RecordId, model::person::Person};

/// Misuse by a presentation layer, e.g. opening the detail view on a record
/// that is no longer active. Never caused by user data.
#[derive(Error, Debug, PartialEq)]
pub enum NavigationError {
    #[error("Cannot navigate an empty active set")]
    EmptyActiveSet,
    #[error("Index {index} is out of range for {len} active records")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Record {0} is not in the active set")]
    NotInActiveSet(RecordId),
}

#[derive(Debug, PartialEq)]
pub struct Neighbors<'a> {
    pub previous: &'a Person,
    pub next: &'a Person,
}

/// Previous and next records around `current_index`, treating the active set as
/// circular. A single record is its own neighbor on both sides.
#[tracing::instrument(skip(active))]
pub fn neighbors(active: &[Person], current_index: usize) -> Result<Neighbors<'_>, NavigationError> {
    let len = active.len();

    if len == 0 {
        return Err(NavigationError::EmptyActiveSet);
    }

    if current_index >= len {
        return Err(NavigationError::IndexOutOfRange {
            index: current_index,
            len,
        });
    }

    let previous_index = if current_index == 0 {
        len - 1
    } else {
        current_index - 1
    };

    let next_index = if current_index == len - 1 {
        0
    } else {
        current_index + 1
    };

    Ok(Neighbors {
        previous: &active[previous_index],
        next: &active[next_index],
    })
}

pub fn locate(active: &[Person], id: RecordId) -> Result<usize, NavigationError> {
    active
        .iter()
        .position(|person| person.id == id)
        .ok_or(NavigationError::NotInActiveSet(id))
}

/// Exact, case-sensitive name lookup for views that only know the rendered name.
///
/// Names are not unique: with duplicates this always resolves to the first one
/// in fetch order, so the later records cannot be reached this way. Prefer
/// `locate` with the record's id.
pub fn locate_by_name(active: &[Person], name: &str) -> Option<usize> {
    active.iter().position(|person| person.name == name)
}

/// Whether prev/next controls are worth showing.
pub fn navigation_enabled(active: &[Person]) -> bool {
    active.len() > 1
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn xyz() -> Vec<Person> {
        Person::new_test_list(&["X", "Y", "Z"])
    }

    mod neighbors {
        use super::*;

        #[test]
        fn last_index_wraps_next_to_first() {
            let active = xyz();

            let result = neighbors(&active, 2).unwrap();

            assert_eq!(result.previous.name, "Y");
            assert_eq!(result.next.name, "X");
        }

        #[test]
        fn first_index_wraps_previous_to_last() {
            let active = xyz();

            let result = neighbors(&active, 0).unwrap();

            assert_eq!(result.previous.name, "Z");
            assert_eq!(result.next.name, "Y");
        }

        #[test]
        fn middle_index_has_plain_neighbors() {
            let active = xyz();

            let result = neighbors(&active, 1).unwrap();

            assert_eq!(result.previous.name, "X");
            assert_eq!(result.next.name, "Z");
        }

        #[test]
        fn single_record_is_a_self_loop() {
            let active = Person::new_test_list(&["Solo"]);

            let result = neighbors(&active, 0).unwrap();

            assert_eq!(result.previous, &active[0]);
            assert_eq!(result.next, &active[0]);
        }

        #[rstest]
        #[case(2)]
        #[case(5)]
        #[case(12)]
        fn wraparound_holds_for_any_length(#[case] len: usize) {
            let names: Vec<String> = (0..len).map(|i| format!("Person {}", i)).collect();
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            let active = Person::new_test_list(&names);

            assert_eq!(neighbors(&active, 0).unwrap().previous, &active[len - 1]);
            assert_eq!(neighbors(&active, len - 1).unwrap().next, &active[0]);
        }

        #[test]
        fn empty_set_is_an_error() {
            assert_eq!(neighbors(&[], 0), Err(NavigationError::EmptyActiveSet));
        }

        #[test]
        fn out_of_range_is_an_error() {
            assert_eq!(
                neighbors(&xyz(), 3),
                Err(NavigationError::IndexOutOfRange { index: 3, len: 3 })
            );
        }
    }

    mod lookup {
        use super::*;

        #[test]
        fn locate_by_id() {
            let active = xyz();

            assert_eq!(locate(&active, RecordId(1)), Ok(1));
            assert_eq!(
                locate(&active, RecordId(7)),
                Err(NavigationError::NotInActiveSet(RecordId(7)))
            );
        }

        #[test]
        fn locate_by_id_inside_a_filtered_set() {
            let all = Person::new_test_list(&["Alice", "Bob", "Carla"]);
            let active = vec![all[0].clone(), all[2].clone()];

            assert_eq!(locate(&active, RecordId(2)), Ok(1));
        }

        #[test]
        fn name_lookup_is_exact_and_case_sensitive() {
            let active = Person::new_test_list(&["Alice Smith", "Bob Jones"]);

            assert_eq!(locate_by_name(&active, "Bob Jones"), Some(1));
            assert_eq!(locate_by_name(&active, "bob jones"), None);
            assert_eq!(locate_by_name(&active, "Bob"), None);
        }

        #[test]
        fn duplicate_names_resolve_to_the_first_but_ids_stay_distinct() {
            let active = Person::new_test_list(&["Sam Lee", "Ann Park", "Sam Lee"]);

            assert_eq!(locate_by_name(&active, "Sam Lee"), Some(0));
            assert_eq!(locate(&active, RecordId(2)), Ok(2));
        }
    }

    #[rstest]
    #[case(0, false)]
    #[case(1, false)]
    #[case(2, true)]
    fn navigation_controls_need_two_records(#[case] len: usize, #[case] expected: bool) {
        let active = Person::new_test_list(&["A", "B"][..len]);

        assert_eq!(navigation_enabled(&active), expected);
    }
}
