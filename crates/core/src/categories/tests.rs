use super::*;

#[test]
fn default_set_matches_the_builtin_labels() {
    let set = CategorySet::default_set();
    assert_eq!(set.labels(), labels::DEFAULT_LABELS);
    assert!(set.contains("uncategorized"));
    assert!(set.contains("gameplay"));
}

#[test]
fn list_prepends_the_all_sentinel() {
    let set = CategorySet::default_set();
    let listed = set.list();
    assert_eq!(listed[0], "all");
    assert_eq!(&listed[1..], set.labels());
}

#[test]
fn add_appends_in_order() {
    let mut set = CategorySet::default_set();
    set.add("boss fights").unwrap();
    set.add("economy").unwrap();
    let labels = set.labels();
    assert_eq!(labels[labels.len() - 2], "boss fights");
    assert_eq!(labels[labels.len() - 1], "economy");
}

#[test]
fn add_trims_surrounding_whitespace() {
    let mut set = CategorySet::default_set();
    set.add("  puzzles  ").unwrap();
    assert!(set.contains("puzzles"));
    assert!(!set.contains("  puzzles  "));
}

#[test]
fn add_rejects_empty_and_blank_labels() {
    let mut set = CategorySet::default_set();
    assert_eq!(set.add("").unwrap_err(), CategoryError::Empty);
    assert_eq!(set.add("   ").unwrap_err(), CategoryError::Empty);
}

#[test]
fn add_rejects_the_all_sentinel_in_any_case() {
    let mut set = CategorySet::default_set();
    assert_eq!(
        set.add("all").unwrap_err(),
        CategoryError::Reserved("all".to_string())
    );
    assert_eq!(
        set.add("ALL").unwrap_err(),
        CategoryError::Reserved("ALL".to_string())
    );
    assert_eq!(
        set.add(" All ").unwrap_err(),
        CategoryError::Reserved("All".to_string())
    );
}

#[test]
fn add_rejects_duplicates_case_insensitively() {
    let mut set = CategorySet::default_set();
    assert_eq!(
        set.add("Gameplay").unwrap_err(),
        CategoryError::Duplicate("gameplay".to_string())
    );
    set.add("Boss Fights").unwrap();
    assert_eq!(
        set.add("boss fights").unwrap_err(),
        CategoryError::Duplicate("Boss Fights".to_string())
    );
}

#[test]
fn remove_drops_the_label() {
    let mut set = CategorySet::default_set();
    set.remove("skin").unwrap();
    assert!(!set.contains("skin"));
    assert!(!set.list().contains(&"skin".to_string()));
}

#[test]
fn remove_refuses_protected_labels() {
    let mut set = CategorySet::default_set();
    assert_eq!(
        set.remove("uncategorized").unwrap_err(),
        CategoryError::Reserved("uncategorized".to_string())
    );
    assert_eq!(
        set.remove("Uncategorized").unwrap_err(),
        CategoryError::Reserved("Uncategorized".to_string())
    );
    assert_eq!(
        set.remove("all").unwrap_err(),
        CategoryError::Reserved("all".to_string())
    );
}

#[test]
fn remove_unknown_label_fails() {
    let mut set = CategorySet::default_set();
    assert_eq!(
        set.remove("quests").unwrap_err(),
        CategoryError::Unknown("quests".to_string())
    );
}

#[test]
fn seeded_always_contains_uncategorized() {
    let set = CategorySet::seeded(["weapons", "maps"]).unwrap();
    assert_eq!(set.labels(), &["uncategorized", "weapons", "maps"]);

    let set = CategorySet::seeded(["story", "uncategorized"]).unwrap();
    assert_eq!(set.labels(), &["story", "uncategorized"]);
}

#[test]
fn seeded_rejects_invalid_seeds() {
    assert_eq!(
        CategorySet::seeded(["all"]).unwrap_err(),
        CategoryError::Reserved("all".to_string())
    );
    assert_eq!(
        CategorySet::seeded([""]).unwrap_err(),
        CategoryError::Empty
    );
    assert_eq!(
        CategorySet::seeded(["maps", "Maps"]).unwrap_err(),
        CategoryError::Duplicate("maps".to_string())
    );
}

#[test]
fn sentinel_and_protection_checks_ignore_case() {
    assert!(labels::is_all_sentinel("all"));
    assert!(labels::is_all_sentinel("All"));
    assert!(labels::is_all_sentinel("ALL"));
    assert!(!labels::is_all_sentinel("allx"));

    assert!(labels::is_protected("uncategorized"));
    assert!(labels::is_protected("UNCATEGORIZED"));
    assert!(!labels::is_protected("gameplay"));
}
