use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::consts::consts::RecordId;

/// Flat display record shared by the grid and the detail overlay.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Person {
    pub id: RecordId,
    pub picture_url: String,
    /// `"<first> <last>"`. Not guaranteed unique, use `id` to identify a record.
    pub name: String,
    pub email: String,
    pub city: String,
    pub phone: String,
    /// Street line, then `"<city>, <state> <postcode>"`, separated by `\n`.
    pub address: String,
    pub date_of_birth: NaiveDate,
}

impl Person {
    pub fn address_lines(&self) -> impl Iterator<Item = &str> {
        self.address.lines()
    }

    /// `(year, month, day)` so a presentation layer can pick its own date format.
    pub fn birthday_components(&self) -> (i32, u32, u32) {
        (
            self.date_of_birth.year(),
            self.date_of_birth.month(),
            self.date_of_birth.day(),
        )
    }

    pub fn new_test(id: usize, name: &str) -> Self {
        let slug = name.to_lowercase().replace(' ', ".");

        Person {
            id: RecordId(id),
            picture_url: format!("https://randomuser.me/api/portraits/women/{}.jpg", id),
            name: name.to_string(),
            email: format!("{}@example.com", slug),
            city: "Springfield".to_string(),
            phone: "(555) 555-0100".to_string(),
            address: "742 Evergreen Terrace\nSpringfield, Oregon 97403".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap_or(NaiveDate::MIN),
        }
    }

    pub fn new_test_list(names: &[&str]) -> Vec<Person> {
        names
            .iter()
            .enumerate()
            .map(|(index, name)| Person::new_test(index, name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_lines_split_street_from_locality() {
        let person = Person::new_test(0, "Alice Smith");

        let lines: Vec<&str> = person.address_lines().collect();

        assert_eq!(
            lines,
            vec!["742 Evergreen Terrace", "Springfield, Oregon 97403"]
        );
    }

    #[test]
    fn birthday_components_come_from_the_date() {
        let mut person = Person::new_test(0, "Alice Smith");
        person.date_of_birth = NaiveDate::from_ymd_opt(1983, 7, 29).unwrap();

        assert_eq!(person.birthday_components(), (1983, 7, 29));
    }
}
