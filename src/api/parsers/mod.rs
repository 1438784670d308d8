pub mod names;
pub mod year;

pub use names::{names_from_pairs, split_names, NameList};
pub use year::parse_birth_year;
