/// Image locators parsed from a free-text field. Order and duplicates are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocatorList(Vec<String>);

impl LocatorList {
    /// Commas and runs of whitespace are equivalent separators.
    pub fn parse(raw: &str) -> Self {
        let locators = raw
            .split(|ch: char| ch == ',' || ch.is_whitespace())
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();
        Self(locators)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

pub fn single_locator(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}
