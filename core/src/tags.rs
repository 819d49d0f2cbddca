pub const TAG_DELIMITER: char = ',';

/// How a new tag is compared against the tags already in the set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicateCheck {
    /// Reject the candidate when any existing tag contains it as a substring.
    /// Adding `art` next to `contemporary art` is refused.
    #[default]
    Containment,
    /// Reject only an identical tag.
    Exact,
}

impl DuplicateCheck {
    fn rejects(self, existing: &str, candidate: &str) -> bool {
        match self {
            DuplicateCheck::Containment => existing.contains(candidate),
            DuplicateCheck::Exact => existing == candidate,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagCommit {
    pub added: Vec<String>,
    pub rejected: Vec<String>,
}

impl TagCommit {
    pub fn changed(&self) -> bool {
        !self.added.is_empty()
    }
}

/// Ordered tag set backing the tag editor. Chips and the hidden form field are
/// both rendered from it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
    check: DuplicateCheck,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_check(check: DuplicateCheck) -> Self {
        Self {
            tags: Vec::new(),
            check,
        }
    }

    /// Rebuilds a set from a serialized field value such as `"oil,portrait"`.
    pub fn from_serialized(raw: &str, check: DuplicateCheck) -> Self {
        let mut set = Self::with_check(check);
        set.commit(raw);
        set
    }

    pub fn check(&self) -> DuplicateCheck {
        self.check
    }

    /// Commits free text typed into the entry field. Text holding the
    /// delimiter becomes several tags so the serialized form stays faithful.
    pub fn commit(&mut self, raw: &str) -> TagCommit {
        let mut outcome = TagCommit::default();
        for piece in raw.split(TAG_DELIMITER) {
            let candidate = piece.trim();
            if candidate.is_empty() {
                continue;
            }
            if self.insert_one(candidate) {
                outcome.added.push(candidate.to_string());
            } else {
                outcome.rejected.push(candidate.to_string());
            }
        }
        outcome
    }

    fn insert_one(&mut self, candidate: &str) -> bool {
        let check = self.check;
        if self
            .tags
            .iter()
            .any(|existing| check.rejects(existing, candidate))
        {
            return false;
        }
        self.tags.push(candidate.to_string());
        true
    }

    pub fn remove(&mut self, tag: &str) -> bool {
        let Some(index) = self.tags.iter().position(|existing| existing == tag) else {
            return false;
        };
        self.tags.remove(index);
        true
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|existing| existing == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for (idx, tag) in self.tags.iter().enumerate() {
            if idx > 0 {
                out.push(TAG_DELIMITER);
            }
            out.push_str(tag);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_trims_and_ignores_blank_text() {
        let mut set = TagSet::new();
        assert!(!set.commit("   ").changed());
        assert!(set.commit("  ink  ").changed());
        assert_eq!(set.as_slice(), ["ink"]);
    }

    #[test]
    fn exact_check_accepts_substrings() {
        let mut set = TagSet::with_check(DuplicateCheck::Exact);
        set.commit("contemporary art");
        assert!(set.commit("art").changed());
        assert!(!set.commit("art").changed());
        assert_eq!(set.serialize(), "contemporary art,art");
    }
}
