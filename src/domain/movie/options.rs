//! Form choices offered by the dropdown revision of the form

use crate::domain::encoding::{CategoricalField, SchemaRevision};

pub const DEFAULT_V1_DIRECTOR: &str = "Christopher Nolan";
pub const DEFAULT_V1_LEAD_ACTOR: &str = "Cillian Murphy";
pub const DEFAULT_V1_PRIMARY_COMPANY: &str = "Universal Pictures";

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const MAIN_GENRES: &[&str] = &[
    "Action",
    "Adventure",
    "Fantasy",
    "Animation",
    "Other",
    "Drama",
    "Thriller",
    "Comedy",
    "Romance",
    "Crime",
    "Horror",
];

pub const ORIGINAL_LANGUAGES: &[&str] = &[
    "English", "Japanese", "French", "Chinese", "Spanish", "German", "Hindi", "Other", "Italian",
];

pub const PRIMARY_COUNTRIES: &[&str] = &[
    "United States of America",
    "United Kingdom",
    "Other",
    "New Zealand",
    "China",
    "Canada",
    "Germany",
    "Japan",
    "France",
    "Australia",
    "Italy",
    "Spain",
    "India",
    "Unknown",
    "Hong Kong",
    "Mexico",
];

pub const DIRECTORS: &[&str] = &[
    "Other",
    "Sam Raimi",
    "Ridley Scott",
    "Tim Burton",
    "Michael Bay",
    "Steven Spielberg",
    "Robert Zemeckis",
    "Martin Scorsese",
    "Oliver Stone",
    "Shawn Levy",
    "Ron Howard",
    "Richard Donner",
    "Chris Columbus",
    "Joel Schumacher",
    "Steven Soderbergh",
    "Tony Scott",
    "Renny Harlin",
    "Brian De Palma",
    "Paul W.S. Anderson",
    "Barry Levinson",
    "Bobby Farrelly",
    "Clint Eastwood",
    "Robert Rodriguez",
    "Rob Reiner",
    "Joel Coen",
    "Francis Ford Coppola",
    "Spike Lee",
    "John Carpenter",
    "Kevin Smith",
    "Woody Allen",
    "Richard Linklater",
];

pub const LEAD_ACTORS: &[&str] = &[
    "Other",
    "Johnny Depp",
    "Christian Bale",
    "Ben Affleck",
    "Mark Wahlberg",
    "Tom Hanks",
    "Brad Pitt",
    "Leonardo DiCaprio",
    "Harrison Ford",
    "Tom Cruise",
    "Kevin Costner",
    "Keanu Reeves",
    "Arnold Schwarzenegger",
    "Nicolas Cage",
    "Ben Stiller",
    "John Travolta",
    "Bruce Willis",
    "Jim Carrey",
    "Dwayne Johnson",
    "Matt Damon",
    "Will Ferrell",
    "George Clooney",
    "Sandra Bullock",
    "Denzel Washington",
    "Robert De Niro",
    "Sylvester Stallone",
    "Eddie Murphy",
    "Adam Sandler",
    "Robin Williams",
    "Meryl Streep",
    "Sean Connery",
];

pub const PRIMARY_COMPANIES: &[&str] = &[
    "Other",
    "Walt Disney Pictures",
    "Columbia Pictures",
    "Warner Bros.",
    "Paramount Pictures",
    "New Line Cinema",
    "Universal Pictures",
    "Twentieth Century Fox Film Corporation",
    "Village Roadshow Pictures",
    "DreamWorks SKG",
    "Summit Entertainment",
    "Regency Enterprises",
    "Lionsgate",
    "Columbia Pictures Corporation",
    "TriStar Pictures",
    "Touchstone Pictures",
    "Miramax Films",
    "United Artists",
    "The Weinstein Company",
    "Metro-Goldwyn-Mayer (MGM)",
    "Unknown",
    "Fox Searchlight Pictures",
];

/// Dropdown choices for `field`; the first entry is the default selection
pub fn choices(field: CategoricalField) -> &'static [&'static str] {
    match field {
        CategoricalField::MainGenre => MAIN_GENRES,
        CategoricalField::OriginalLanguage => ORIGINAL_LANGUAGES,
        CategoricalField::PrimaryCountry => PRIMARY_COUNTRIES,
        CategoricalField::Director => DIRECTORS,
        CategoricalField::LeadActor => LEAD_ACTORS,
        CategoricalField::PrimaryCompany => PRIMARY_COMPANIES,
    }
}

/// Pre-filled value for `field` under `revision`
pub fn default_choice(revision: SchemaRevision, field: CategoricalField) -> &'static str {
    if revision.uses_dropdowns() {
        return choices(field)[0];
    }

    match field {
        CategoricalField::Director => DEFAULT_V1_DIRECTOR,
        CategoricalField::LeadActor => DEFAULT_V1_LEAD_ACTOR,
        CategoricalField::PrimaryCompany => DEFAULT_V1_PRIMARY_COMPANY,
        other => choices(other)[0],
    }
}

/// Month number for an English month name, case-insensitive
pub fn month_from_name(name: &str) -> Option<u32> {
    let name = name.trim();
    MONTH_NAMES
        .iter()
        .position(|m| m.eq_ignore_ascii_case(name))
        .map(|i| i as u32 + 1)
}

/// Parse a month given either as a number ("7") or a name ("July")
pub fn parse_month(value: &str) -> Option<u32> {
    match value.trim().parse::<u32>() {
        Ok(n) if (1..=12).contains(&n) => Some(n),
        Ok(_) => None,
        Err(_) => month_from_name(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names_round_trip() {
        assert_eq!(month_from_name("July"), Some(7));
        assert_eq!(month_from_name("december"), Some(12));
        assert_eq!(month_from_name(" march "), Some(3));
        assert_eq!(month_from_name("Smarch"), None);
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("7"), Some(7));
        assert_eq!(parse_month(" March "), Some(3));
        assert_eq!(parse_month("13"), None);
        assert_eq!(parse_month("Smarch"), None);
    }

    #[test]
    fn test_default_choices() {
        assert_eq!(
            default_choice(SchemaRevision::V1, CategoricalField::Director),
            "Christopher Nolan"
        );
        assert_eq!(
            default_choice(SchemaRevision::V2, CategoricalField::Director),
            "Other"
        );
        assert_eq!(
            default_choice(SchemaRevision::V2, CategoricalField::PrimaryCountry),
            "United States of America"
        );
    }

    #[test]
    fn test_choice_list_sizes() {
        assert_eq!(choices(CategoricalField::MainGenre).len(), 11);
        assert_eq!(choices(CategoricalField::OriginalLanguage).len(), 9);
        assert_eq!(choices(CategoricalField::PrimaryCountry).len(), 16);
        assert_eq!(choices(CategoricalField::PrimaryCompany).len(), 22);
    }
}
