use tracing::debug;

// Raw input header -> canonical header, in input column order.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderMap {
    entries: Vec<HeaderEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderEntry {
    pub raw: String,
    pub canonical: String,
}

impl HeaderMap {
    pub fn from_raw<'a>(raw_headers: impl IntoIterator<Item = &'a str>) -> Self {
        let entries: Vec<HeaderEntry> = raw_headers.into_iter()
            .map(|raw| HeaderEntry {
                raw: raw.to_owned(),
                canonical: canonicalize_header(raw),
            })
            .collect();

        for entry in &entries {
            if entry.raw != entry.canonical {
                debug!("header {:?} normalized to {:?}", entry.raw, entry.canonical);
            }
        }

        Self {
            entries,
        }
    }

    pub fn entries(&self) -> &[HeaderEntry] {
        &self.entries
    }

    pub fn canonical_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.canonical.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // First match wins when canonicalization produces duplicates.
    pub fn position(&self, name: &str) -> Option<usize> {
        let canonical = canonicalize_header(name);
        self.entries.iter().position(|entry| entry.canonical == canonical)
    }
}

pub fn canonicalize_header(raw: &str) -> String {
    title_case(raw.trim())
}

// A letter is uppercased when it starts a word (follows a non-letter), otherwise lowercased.
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut previous_is_letter = false;

    for c in value.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }

    result
}
