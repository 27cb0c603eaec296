use std::fmt::Write;

use directory::{
    consts::consts::EMPTY_STATE_MESSAGE,
    directory::cursor::Neighbors,
    model::person::Person,
};

/// `MM/DD/YYYY`, the layout the directory has always shown.
pub fn format_birthday(person: &Person) -> String {
    person.date_of_birth.format("%m/%d/%Y").to_string()
}

pub fn render_card(position: usize, person: &Person) -> String {
    format!(
        "[{}] {}\n    {}\n    {}\n    {}\n",
        position, person.name, person.email, person.city, person.picture_url
    )
}

/// Cards are numbered by their position in the active set, starting at 1.
pub fn render_grid(active: &[Person], query: &str) -> String {
    let mut out = String::new();

    if !query.is_empty() {
        let _ = writeln!(out, "Filter: {:?}", query);
    }

    if active.is_empty() {
        let _ = writeln!(out, "{}", EMPTY_STATE_MESSAGE);
        return out;
    }

    for (index, person) in active.iter().enumerate() {
        out.push_str(&render_card(index + 1, person));
    }

    out
}

/// Prev/next controls only appear when `neighbors` is given, i.e. when there is
/// somewhere else to go.
pub fn render_detail(person: &Person, neighbors: Option<&Neighbors>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "+-- {} [x] close", person.name);
    let _ = writeln!(out, "|  {}", person.picture_url);
    let _ = writeln!(out, "|  {}", person.email);
    let _ = writeln!(out, "|  {}", person.city);
    let _ = writeln!(out, "|  ----");
    let _ = writeln!(out, "|  {}", person.phone);

    for line in person.address_lines() {
        let _ = writeln!(out, "|  {}", line);
    }

    let _ = writeln!(out, "|  Birthday: {}", format_birthday(person));

    if let Some(neighbors) = neighbors {
        let _ = writeln!(
            out,
            "|  < Previous ({})    Next ({}) >",
            neighbors.previous.name, neighbors.next.name
        );
    }

    out.push_str("+--\n");
    out
}
