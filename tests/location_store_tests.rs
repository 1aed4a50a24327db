use route_canvas::RouteCanvasError;
use route_canvas::core::{INVALID_LOCATION_NOTICE, LocationStore, RoutePoint};

#[test]
fn add_appends_in_insertion_order_with_fresh_ids() {
    let mut store = LocationStore::new();
    let a = store.add("Warehouse", 0.0, 0.0).expect("a");
    let b = store.add("Customer A", 5.0, 5.0).expect("b");
    let c = store.add("Customer B", -2.5, 9.0).expect("c");

    assert!(a < b && b < c);
    let names: Vec<&str> = store.locations().iter().map(|l| l.name()).collect();
    assert_eq!(names, ["Warehouse", "Customer A", "Customer B"]);
}

#[test]
fn add_rejects_empty_or_whitespace_name() {
    let mut store = LocationStore::new();
    store.add("Depot", 1.0, 1.0).expect("seed");
    let before = store.clone();

    for name in ["", "   ", "\t\n"] {
        let err = store.add(name, 1.0, 2.0).expect_err("blank name must fail");
        assert!(matches!(err, RouteCanvasError::Validation(_)));
        assert_eq!(format!("{err}"), INVALID_LOCATION_NOTICE);
    }
    assert_eq!(store, before);
}

#[test]
fn add_rejects_non_finite_coordinates() {
    let mut store = LocationStore::new();

    for (x, y) in [
        (f64::NAN, 0.0),
        (0.0, f64::NAN),
        (f64::INFINITY, 0.0),
        (0.0, f64::NEG_INFINITY),
    ] {
        let err = store.add("Depot", x, y).expect_err("non-finite must fail");
        assert!(matches!(err, RouteCanvasError::Validation(_)));
    }
    assert!(store.is_empty());
}

#[test]
fn existing_entries_are_unchanged_by_later_adds() {
    let mut store = LocationStore::new();
    let id = store.add("First", 1.0, 2.0).expect("first");
    let first = store.get(id).cloned().expect("stored");

    store.add("Second", 3.0, 4.0).expect("second");

    assert_eq!(store.get(id), Some(&first));
    assert_eq!(store.locations()[0], first);
}

#[test]
fn snapshot_strips_ids_and_keeps_order() {
    let mut store = LocationStore::new();
    store.add("A", 0.0, 0.0).expect("a");
    store.add("B", 10.0, 0.0).expect("b");
    store.add("A", 0.0, 10.0).expect("duplicate names allowed");

    assert_eq!(
        store.snapshot(),
        vec![
            RoutePoint::new("A", 0.0, 0.0),
            RoutePoint::new("B", 10.0, 0.0),
            RoutePoint::new("A", 0.0, 10.0),
        ]
    );
}
