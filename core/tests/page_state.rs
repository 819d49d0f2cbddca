use artfolio_core::config::normalize_api_base;
use artfolio_core::{
    single_locator, ArtworkDraft, FilterKey, FilterState, LocatorList, PageConfig, RequiredField,
};

#[test]
fn locators_split_on_commas_and_whitespace() {
    let list = LocatorList::parse("a, b   c,,d");
    assert_eq!(list.into_vec(), vec!["a", "b", "c", "d"]);
}

#[test]
fn locators_keep_order_and_duplicates() {
    let list = LocatorList::parse("\n https://x/1.png\thttps://x/2.png, https://x/1.png ");
    assert_eq!(
        list.iter().collect::<Vec<_>>(),
        vec!["https://x/1.png", "https://x/2.png", "https://x/1.png"]
    );
    assert!(LocatorList::parse(" ,  , ").is_empty());
}

#[test]
fn single_locator_is_trimmed() {
    assert_eq!(single_locator("  https://x/a.jpg "), Some("https://x/a.jpg".to_string()));
    assert_eq!(single_locator("   "), None);
}

#[test]
fn filters_from_query_string() {
    let state = FilterState::from_query("?medium=oil&year=2020");
    assert_eq!(state.get(FilterKey::Medium), Some("oil"));
    assert_eq!(state.get(FilterKey::Year), Some("2020"));

    let state = FilterState::from_query("q=cats&medium=oil%20paint&medium=ink");
    assert_eq!(state.get(FilterKey::Medium), Some("oil paint"));
    assert_eq!(state.get(FilterKey::Year), None);

    assert!(FilterState::from_query("").is_empty());
    assert!(FilterState::from_query("?year=").is_empty());
}

#[test]
fn only_active_filters_become_hidden_fields() {
    let state = FilterState::from_values("oil", "");
    assert_eq!(state.hidden_fields(), vec![("medium", "oil".to_string())]);
    assert_eq!(state.to_query(), "medium=oil");

    let state = FilterState::from_values("", "2020");
    assert_eq!(state.hidden_fields(), vec![("year", "2020".to_string())]);
    assert!(FilterState::from_values("", " ").hidden_fields().is_empty());
}

#[test]
fn filter_query_round_trip() {
    let state = FilterState::from_values("mixed media", "1999");
    assert_eq!(FilterState::from_query(&state.to_query()), state);
}

#[test]
fn filter_key_names() {
    assert_eq!(FilterKey::from_name("year"), Some(FilterKey::Year));
    assert_eq!(FilterKey::from_name("q"), None);
    assert_eq!(FilterKey::Medium.to_string(), "medium");
}

#[test]
fn validation_reports_first_missing_field() {
    let err = ArtworkDraft::new("Dawn", "  ", "Oil on canvas")
        .validate()
        .unwrap_err();
    assert_eq!(err.field, RequiredField::ImageUrl);
    assert_eq!(err.to_string(), "Please provide an image URL for your artwork");

    let err = ArtworkDraft::new("", "", "").validate().unwrap_err();
    assert_eq!(err.field, RequiredField::Title);

    let err = ArtworkDraft::new("Dawn", "https://x/a.jpg", "\n").validate().unwrap_err();
    assert_eq!(err.field, RequiredField::Description);

    assert!(ArtworkDraft::new(" Dawn ", "https://x/a.jpg", "Oil").validate().is_ok());
}

#[test]
fn api_base_is_normalized() {
    assert_eq!(normalize_api_base(" https://art.example/ "), "https://art.example");
    assert_eq!(PageConfig::with_api_base("").api_base, "");
    assert_eq!(PageConfig::default().ids.tags_field, "tagsInput");
}

#[test]
fn filter_change_binding_is_opt_in() {
    assert!(!PageConfig::default().bind_filter_changes);
    assert!(!PageConfig::with_api_base("https://art.example").bind_filter_changes);
}
