//! Country/state/city catalog for the cascading location selects.
//! Pure lookups: changing the country re-derives states, changing the
//! state re-derives cities. Unknown codes yield empty slices.

pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub states: &'static [State],
}

pub struct State {
    pub code: &'static str,
    pub name: &'static str,
    pub cities: &'static [&'static str],
}

pub const COUNTRIES: &[Country] = &[
    Country {
        code: "US",
        name: "United States",
        states: &[
            State {
                code: "CA",
                name: "California",
                cities: &["Los Angeles", "San Diego", "San Francisco"],
            },
            State {
                code: "NY",
                name: "New York",
                cities: &["New York City", "Buffalo", "Rochester"],
            },
            State {
                code: "FL",
                name: "Florida",
                cities: &["Miami", "Orlando", "Tampa"],
            },
        ],
    },
    Country {
        code: "CA",
        name: "Canada",
        states: &[
            State {
                code: "ON",
                name: "Ontario",
                cities: &["Toronto", "Ottawa"],
            },
            State {
                code: "BC",
                name: "British Columbia",
                cities: &["Vancouver", "Victoria"],
            },
        ],
    },
    Country {
        code: "FR",
        name: "France",
        states: &[
            State {
                code: "IDF",
                name: "Île-de-France",
                cities: &["Paris", "Versailles"],
            },
            State {
                code: "PAC",
                name: "Provence-Alpes-Côte d'Azur",
                cities: &["Nice", "Marseille", "Cannes"],
            },
        ],
    },
];

pub fn all_countries() -> &'static [Country] {
    COUNTRIES
}

pub fn states_of(country: &str) -> &'static [State] {
    COUNTRIES
        .iter()
        .find(|c| c.code == country)
        .map(|c| c.states)
        .unwrap_or(&[])
}

pub fn cities_of(country: &str, state: &str) -> &'static [&'static str] {
    states_of(country)
        .iter()
        .find(|s| s.code == state)
        .map(|s| s.cities)
        .unwrap_or(&[])
}
