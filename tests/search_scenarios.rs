//! Search Scenario Tests
//!
//! Five-item catalog:
//! Red/Small, Red/Medium, Black/Medium, Blue/Medium, Blue/Large

use facetsearch::catalog::{AttributeValue, Color, Item, Size};
use facetsearch::engine::{SearchEngine, SearchOptions};
use uuid::Uuid;

const RED_SMALL: &str = "DC1E8E26-2D52-471E-A7CA-2E2A33A5E074";
const RED_MEDIUM: &str = "5AA962ED-2D54-41D2-B0F7-316CA4AB8843";
const BLACK_MEDIUM: &str = "FE735FD2-096B-4310-9337-84F1CE835C0F";
const BLUE_MEDIUM: &str = "3D288AAD-89EE-45FB-92D4-0C504BEED567";
const BLUE_LARGE: &str = "C68C5789-8926-42F2-AD97-ABECBCCD4DA9";

// =============================================================================
// Helper Functions
// =============================================================================

fn id(s: &str) -> Uuid {
    Uuid::parse_str(s).unwrap()
}

fn make_engine() -> SearchEngine {
    let items = vec![
        Item::new(id(RED_SMALL), "Red - Small", Size::small(), Color::red()),
        Item::new(id(RED_MEDIUM), "Red - Medium", Size::medium(), Color::red()),
        Item::new(id(BLACK_MEDIUM), "Black - Medium", Size::medium(), Color::black()),
        Item::new(id(BLUE_MEDIUM), "Blue - Medium", Size::medium(), Color::blue()),
        Item::new(id(BLUE_LARGE), "Blue - Large", Size::large(), Color::blue()),
    ];
    SearchEngine::new(items, Size::all(), Color::all()).unwrap()
}

fn color(name: &str) -> Color {
    Color::all().find_by_name(name).cloned().unwrap()
}

fn size(name: &str) -> Size {
    Size::all().find_by_name(name).cloned().unwrap()
}

// =============================================================================
// Color Searches
// =============================================================================

/// Existing colors report their bucket size, and that color is the only nonzero one.
#[test]
fn test_search_existing_color() {
    let engine = make_engine();

    for (name, expected) in [("Black", 1), ("Red", 2), ("Blue", 2)] {
        let results = engine
            .search(&SearchOptions::new().with_color(color(name)))
            .unwrap();

        assert_eq!(results.len(), expected);
        assert_eq!(results.color_count(&color(name)), Some(expected));

        let nonzero: Vec<&str> = results
            .color_counts
            .iter()
            .filter(|c| c.count > 0)
            .map(|c| c.value.name())
            .collect();
        assert_eq!(nonzero, vec![name]);
    }
}

/// Colors no item has report zero and match nothing.
#[test]
fn test_search_missing_color() {
    let engine = make_engine();

    for name in ["Yellow", "White"] {
        let results = engine
            .search(&SearchOptions::new().with_color(color(name)))
            .unwrap();

        assert!(results.is_empty());
        assert_eq!(results.color_count(&color(name)), Some(0));
    }
}

/// Red: two items, Red:2, every other color 0.
#[test]
fn test_red_counts() {
    let engine = make_engine();
    let results = engine
        .search(&SearchOptions::new().with_color(Color::red()))
        .unwrap();

    assert_eq!(results.len(), 2);
    let counts: Vec<(&str, usize)> = results
        .color_counts
        .iter()
        .map(|c| (c.value.name(), c.count))
        .collect();
    assert_eq!(
        counts,
        vec![("Red", 2), ("Blue", 0), ("Yellow", 0), ("White", 0), ("Black", 0)]
    );
    assert!(results.size_counts.iter().all(|c| c.count == 0));
}

// =============================================================================
// Size Searches
// =============================================================================

#[test]
fn test_search_by_size() {
    let engine = make_engine();

    for (name, expected) in [("Small", 1), ("Medium", 3), ("Large", 1)] {
        let results = engine
            .search(&SearchOptions::new().with_size(size(name)))
            .unwrap();

        assert_eq!(results.len(), expected);
        assert_eq!(results.size_count(&size(name)), Some(expected));
    }
}

/// Medium alone returns exactly the Medium bucket.
#[test]
fn test_medium_bucket_exactly() {
    let engine = make_engine();
    let results = engine
        .search(&SearchOptions::new().with_size(Size::medium()))
        .unwrap();

    assert_eq!(
        results.item_ids(),
        vec![id(RED_MEDIUM), id(BLACK_MEDIUM), id(BLUE_MEDIUM)]
    );
    assert_eq!(results.size_count(&Size::small()), Some(0));
    assert_eq!(results.size_count(&Size::medium()), Some(3));
    assert_eq!(results.size_count(&Size::large()), Some(0));
}

// =============================================================================
// Combined Searches
// =============================================================================

/// Medium + Red is a union across axes, not an intersection.
#[test]
fn test_size_and_color_union() {
    let engine = make_engine();
    let options = SearchOptions::new()
        .with_size(Size::medium())
        .with_color(Color::red());

    let results = engine.search(&options).unwrap();

    assert_eq!(results.len(), 4);
    for matched in [RED_SMALL, RED_MEDIUM, BLACK_MEDIUM, BLUE_MEDIUM] {
        assert!(results.contains(id(matched)), "{} should match", matched);
    }
    assert!(!results.contains(id(BLUE_LARGE)));

    assert_eq!(results.size_count(&Size::medium()), Some(3));
    assert_eq!(results.color_count(&Color::red()), Some(2));
    // Black/Medium matched through size, but Black was not selected
    assert_eq!(results.color_count(&Color::black()), Some(0));
}

/// Every returned item satisfies at least one of the selections.
#[test]
fn test_every_match_satisfies_an_axis() {
    let engine = make_engine();
    let options = SearchOptions::new()
        .with_size(Size::large())
        .with_color(Color::black());

    let results = engine.search(&options).unwrap();

    assert_eq!(results.len(), 2);
    assert!(results
        .items
        .iter()
        .all(|item| item.size() == &Size::large() || item.color() == &Color::black()));
}

#[test]
fn test_everything_selected() {
    let engine = make_engine();
    let options = SearchOptions::new()
        .with_sizes(Size::all().iter().cloned())
        .with_colors(Color::all().iter().cloned());

    let results = engine.search(&options).unwrap();

    assert_eq!(results.len(), 5);
    assert_eq!(results.size_counts.iter().map(|c| c.count).sum::<usize>(), 5);
    assert_eq!(results.color_counts.iter().map(|c| c.count).sum::<usize>(), 5);
}

// =============================================================================
// Empty Searches
// =============================================================================

#[test]
fn test_empty_options() {
    let engine = make_engine();
    let results = engine.search(&SearchOptions::new()).unwrap();

    assert!(results.is_empty());
    assert_eq!(results.size_counts.len(), 3);
    assert_eq!(results.color_counts.len(), 5);
    assert!(results.size_counts.iter().all(|c| c.count == 0));
    assert!(results.color_counts.iter().all(|c| c.count == 0));
}

#[test]
fn test_empty_catalog() {
    let engine = SearchEngine::new(Vec::new(), Size::all(), Color::all()).unwrap();
    let results = engine
        .search(&SearchOptions::new().with_size(Size::small()))
        .unwrap();

    assert!(engine.is_empty());
    assert!(results.is_empty());
    assert_eq!(results.size_count(&Size::small()), Some(0));
}
