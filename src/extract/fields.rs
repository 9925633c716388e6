use std::collections::HashMap;

/// Key/value pairs parsed from the `Key: Value` lines of a note.
///
/// Keys are lower-cased on insert and on lookup, so `DOB`, `dob` and `Dob`
/// all address the same entry. A repeated key keeps the last value seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: HashMap<String, String>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses note text, one entry per line that contains a colon.
    ///
    /// Only the first colon splits a line, so values may contain colons
    /// themselves (times, ratios, URLs).
    pub fn parse(text: &str) -> Self {
        let mut map = Self::new();

        for line in text.split('\n') {
            if line.trim().is_empty() {
                continue;
            }

            if let Some((key, value)) = line.split_once(':') {
                map.insert(key.trim(), value.trim());
            }
        }

        map
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.entries.insert(normalize(key), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(&normalize(key)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

fn normalize(key: &str) -> String {
    key.to_lowercase()
}
