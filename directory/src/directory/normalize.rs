use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    consts::consts::RecordId,
    model::{
        person::Person,
        raw::{RawApiRecord, RawLocation},
    },
};

#[derive(Error, Debug, PartialEq)]
pub enum NormalizeError {
    #[error("Malformed record at position {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },
}

pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Flattens raw API records into `Person`s, in input order.
///
/// The batch is all or nothing: the first malformed record fails the whole load,
/// so a partially rendered directory is never produced.
#[tracing::instrument(skip(raw_records))]
pub fn normalize(raw_records: &[serde_json::Value]) -> NormalizeResult<Vec<Person>> {
    raw_records
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let raw = RawApiRecord::deserialize(value).map_err(|e| {
                NormalizeError::MalformedRecord {
                    index,
                    reason: e.to_string(),
                }
            })?;

            normalize_record(RecordId(index), raw)
        })
        .collect()
}

pub fn normalize_record(id: RecordId, raw: RawApiRecord) -> NormalizeResult<Person> {
    let date_of_birth =
        parse_date_of_birth(&raw.dob.date).ok_or_else(|| NormalizeError::MalformedRecord {
            index: id.to_number(),
            reason: format!("unparseable date of birth: {:?}", raw.dob.date),
        })?;

    Ok(Person {
        id,
        picture_url: raw.picture.large,
        name: format!("{} {}", raw.name.first, raw.name.last),
        email: raw.email,
        phone: format_phone(&raw.cell),
        address: format_address(&raw.location),
        city: raw.location.city,
        date_of_birth,
    })
}

/// Drops the separator after the area code: `"(272)-790-0888"` becomes
/// `"(272) 790-0888"`. Assumes the separator sits at index 5 and never fails,
/// other layouts just come out mangled.
pub fn format_phone(cell: &str) -> String {
    let area: String = cell.chars().take(5).collect();
    let rest: String = cell.chars().skip(6).collect();

    format!("{} {}", area, rest)
}

pub fn format_address(location: &RawLocation) -> String {
    format!(
        "{} {}\n{}, {} {}",
        location.street.number,
        location.street.name,
        location.city,
        location.state,
        location.postcode
    )
}

/// Only the `YYYY-MM-DD` prefix is meaningful, time and offset are ignored.
pub fn parse_date_of_birth(date: &str) -> Option<NaiveDate> {
    let prefix: String = date.chars().take(10).collect();

    NaiveDate::parse_from_str(&prefix, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::model::raw::ApiResponse;

    fn raw_record(first: &str, last: &str) -> serde_json::Value {
        json!({
            "name": { "title": "Ms", "first": first, "last": last },
            "location": {
                "street": { "number": 9278, "name": "New Road" },
                "city": "Kilcoole",
                "state": "Waterford",
                "postcode": 93027
            },
            "email": format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
            "dob": { "date": "1993-07-20T09:44:18.674Z", "age": 26 },
            "cell": "(272)-790-0888",
            "picture": {
                "large": "https://randomuser.me/api/portraits/men/75.jpg",
                "medium": "https://randomuser.me/api/portraits/med/men/75.jpg"
            }
        })
    }

    mod records {
        use super::*;

        #[test]
        fn flattens_every_field() {
            let people = normalize(&[raw_record("Brad", "Gibson")]).unwrap();

            assert_eq!(
                people,
                vec![Person {
                    id: RecordId(0),
                    picture_url: "https://randomuser.me/api/portraits/men/75.jpg".to_string(),
                    name: "Brad Gibson".to_string(),
                    email: "brad.gibson@example.com".to_string(),
                    city: "Kilcoole".to_string(),
                    phone: "(272) 790-0888".to_string(),
                    address: "9278 New Road\nKilcoole, Waterford 93027".to_string(),
                    date_of_birth: NaiveDate::from_ymd_opt(1993, 7, 20).unwrap(),
                }]
            );
        }

        #[test]
        fn keeps_length_and_order() {
            let raw = vec![
                raw_record("Alice", "Smith"),
                raw_record("Bob", "Jones"),
                raw_record("Carla", "Diaz"),
            ];

            let people = normalize(&raw).unwrap();

            let names: Vec<&str> = people.iter().map(|p| p.name.as_str()).collect();
            let ids: Vec<RecordId> = people.iter().map(|p| p.id).collect();

            assert_eq!(names, vec!["Alice Smith", "Bob Jones", "Carla Diaz"]);
            assert_eq!(ids, vec![RecordId(0), RecordId(1), RecordId(2)]);
        }

        #[test]
        fn empty_batch_is_empty() {
            assert_eq!(normalize(&[]).unwrap(), vec![]);
        }

        #[test]
        fn fixture_body_normalizes() {
            let body: ApiResponse =
                serde_json::from_str(include_str!("../../fixtures/people.json")).unwrap();

            let people = normalize(&body.results).unwrap();

            assert_eq!(people.len(), 12);
            assert_eq!(people[0].name, "Brad Gibson");
        }
    }

    mod malformed {
        use super::*;

        #[test]
        fn missing_nested_field_fails_the_batch() {
            // Given a batch where the second record has no location
            let mut broken = raw_record("Bob", "Jones");
            broken
                .as_object_mut()
                .unwrap()
                .remove("location")
                .unwrap();

            // When normalizing
            let result = normalize(&[raw_record("Alice", "Smith"), broken]);

            // Then the whole batch fails and names the record
            assert!(matches!(
                result,
                Err(NormalizeError::MalformedRecord { index: 1, .. })
            ));
        }

        #[test]
        fn wrong_field_type_is_malformed() {
            let mut broken = raw_record("Bob", "Jones");
            broken["name"] = json!("Bob Jones");

            let result = normalize(&[raw_record("Alice", "Smith"), broken]);

            assert!(matches!(
                result,
                Err(NormalizeError::MalformedRecord { index: 1, .. })
            ));
        }

        #[test]
        fn unparseable_date_is_malformed() {
            let mut broken = raw_record("Bob", "Jones");
            broken["dob"]["date"] = json!("not a date");

            let result = normalize(&[broken]);

            assert!(matches!(
                result,
                Err(NormalizeError::MalformedRecord { index: 0, .. })
            ));
        }
    }

    #[rstest]
    #[case("(272)-790-0888", "(272) 790-0888")]
    #[case("081-454-0666", "081-4 4-0666")]
    #[case("123", "123 ")]
    #[case("", " ")]
    fn phone_drops_the_character_at_index_five(#[case] cell: &str, #[case] expected: &str) {
        assert_eq!(format_phone(cell), expected);
    }

    #[rstest]
    #[case("1993-07-20T09:44:18.674Z", Some((1993, 7, 20)))]
    #[case("1944-12-31", Some((1944, 12, 31)))]
    #[case("1993-02-30T00:00:00Z", None)]
    #[case("20", None)]
    fn date_of_birth_uses_the_date_prefix(
        #[case] date: &str,
        #[case] expected: Option<(i32, u32, u32)>,
    ) {
        let expected = expected.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d));

        assert_eq!(parse_date_of_birth(date), expected);
    }

    #[test]
    fn postcode_as_string_is_kept_verbatim() {
        let mut record = raw_record("Brad", "Gibson");
        record["location"]["postcode"] = json!("T4N 2K1");

        let people = normalize(&[record]).unwrap();

        assert_eq!(people[0].address, "9278 New Road\nKilcoole, Waterford T4N 2K1");
    }
}
