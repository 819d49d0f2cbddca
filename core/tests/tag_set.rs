use artfolio_core::{DuplicateCheck, TagSet};

fn joined(set: &TagSet) -> String {
    set.iter().collect::<Vec<_>>().join(",")
}

#[test]
fn serialized_field_tracks_every_mutation() {
    let mut set = TagSet::new();
    let steps: [(&str, bool); 7] = [
        ("oil", true),
        ("portrait", true),
        ("landscape", true),
        ("portrait", false),
        ("ink", true),
        ("oil", false),
        ("watercolor", true),
    ];
    for (tag, add) in steps {
        if add {
            set.commit(tag);
        } else {
            assert!(set.remove(tag));
        }
        assert_eq!(set.serialize(), joined(&set));
    }
    assert_eq!(set.serialize(), "landscape,ink,watercolor");
}

#[test]
fn duplicate_commit_leaves_set_unchanged() {
    let mut set = TagSet::new();
    set.commit("oil");
    set.commit("portrait");
    let before = set.clone();
    let outcome = set.commit("oil");
    assert!(!outcome.changed());
    assert_eq!(outcome.rejected, vec!["oil".to_string()]);
    assert_eq!(set, before);
}

#[test]
fn containment_check_rejects_substring_of_existing_tag() {
    let mut set = TagSet::new();
    set.commit("contemporary art");
    assert!(!set.commit("art").changed());
    assert_eq!(set.serialize(), "contemporary art");
    // The longer tag is not contained in the shorter one.
    let mut set = TagSet::new();
    set.commit("art");
    assert!(set.commit("contemporary art").changed());
    assert_eq!(set.len(), 2);
}

#[test]
fn tags_are_case_sensitive() {
    let mut set = TagSet::new();
    set.commit("Oil");
    assert!(set.commit("oil").changed());
    assert_eq!(set.serialize(), "Oil,oil");
}

#[test]
fn delimited_text_becomes_separate_tags() {
    let mut set = TagSet::new();
    let outcome = set.commit("a, b,,c ");
    assert_eq!(outcome.added, vec!["a", "b", "c"]);
    let reparsed = TagSet::from_serialized(&set.serialize(), DuplicateCheck::Containment);
    assert_eq!(reparsed, set);
}

#[test]
fn prefill_restores_server_value_in_order() {
    let set = TagSet::from_serialized(" sketch ,study,, sketch", DuplicateCheck::Exact);
    assert_eq!(set.as_slice(), ["sketch", "study"]);
    assert_eq!(set.check(), DuplicateCheck::Exact);
}

#[test]
fn removing_unknown_tag_is_a_no_op() {
    let mut set = TagSet::new();
    set.commit("oil");
    assert!(!set.remove("acrylic"));
    assert!(set.contains("oil"));
}
