use serde::Deserialize;

/// Player names as submitted: a list, or one comma-separated string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NameList {
    Many(Vec<String>),
    Joined(String),
}

impl Default for NameList {
    fn default() -> Self {
        NameList::Many(Vec::new())
    }
}

impl NameList {
    pub fn into_names(self) -> Vec<String> {
        match self {
            NameList::Many(names) => names,
            NameList::Joined(joined) => split_names(&joined),
        }
    }
}

/// Split "Anna, Ben" into trimmed, non-empty names
pub fn split_names(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Collect every value of `key` (or `key[]`) from decoded form pairs
pub fn names_from_pairs(pairs: &[(String, String)], key: &str) -> Vec<String> {
    let bracketed = format!("{}[]", key);
    pairs
        .iter()
        .filter(|(name, _)| name == key || *name == bracketed)
        .flat_map(|(_, value)| split_names(value))
        .collect()
}
