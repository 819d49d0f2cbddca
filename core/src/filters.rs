use std::fmt;

use url::form_urlencoded;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterKey {
    Medium,
    Year,
}

impl FilterKey {
    pub const ALL: [FilterKey; 2] = [FilterKey::Medium, FilterKey::Year];

    /// Query parameter and form field name.
    pub fn name(self) -> &'static str {
        match self {
            FilterKey::Medium => "medium",
            FilterKey::Year => "year",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Active search filters. A filter with no value is inactive and never
/// reaches the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    medium: Option<String>,
    year: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the filters from a page query string, with or without the
    /// leading `?`. The first occurrence of a repeated key wins.
    pub fn from_query(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        let mut state = Self::new();
        if query.is_empty() {
            return state;
        }
        for (name, value) in form_urlencoded::parse(query.as_bytes()) {
            let Some(key) = FilterKey::from_name(&name) else {
                continue;
            };
            if state.get(key).is_none() {
                state.set(key, Some(value.as_ref()));
            }
        }
        state
    }

    /// Builds the state from the current selector values.
    pub fn from_values(medium: &str, year: &str) -> Self {
        let mut state = Self::new();
        state.set(FilterKey::Medium, Some(medium));
        state.set(FilterKey::Year, Some(year));
        state
    }

    pub fn get(&self, key: FilterKey) -> Option<&str> {
        self.slot(key).as_deref()
    }

    pub fn set(&mut self, key: FilterKey, value: Option<&str>) {
        let value = value
            .filter(|value| !value.trim().is_empty())
            .map(str::to_string);
        *self.slot_mut(key) = value;
    }

    pub fn is_active(&self, key: FilterKey) -> bool {
        self.slot(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        FilterKey::ALL.iter().all(|key| !self.is_active(*key))
    }

    /// Hidden form fields to inject before submitting, one per active filter.
    pub fn hidden_fields(&self) -> Vec<(&'static str, String)> {
        FilterKey::ALL
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| (key.name(), value.to_string())))
            .collect()
    }

    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in self.hidden_fields() {
            serializer.append_pair(name, &value);
        }
        serializer.finish()
    }

    fn slot(&self, key: FilterKey) -> &Option<String> {
        match key {
            FilterKey::Medium => &self.medium,
            FilterKey::Year => &self.year,
        }
    }

    fn slot_mut(&mut self, key: FilterKey) -> &mut Option<String> {
        match key {
            FilterKey::Medium => &mut self.medium,
            FilterKey::Year => &mut self.year,
        }
    }
}
