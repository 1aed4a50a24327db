use proptest::prelude::*;
use route_canvas::api::{RenderStyle, build_route_frame};
use route_canvas::core::{LocationStore, RoutePoint, Viewport, ViewportTransform};

proptest! {
    #[test]
    fn identical_inputs_produce_identical_frames(
        coords in prop::collection::vec((-10_000.0f64..10_000.0, -10_000.0f64..10_000.0), 1..16),
        route_len in 0usize..16,
        pan_x in -200.0f64..200.0,
        pan_y in -200.0f64..200.0,
    ) {
        let mut store = LocationStore::new();
        for (index, (x, y)) in coords.iter().enumerate() {
            store.add(&format!("P{index}"), *x, *y).expect("valid location");
        }
        let mut transform = ViewportTransform::default();
        transform
            .auto_fit(store.locations(), Viewport::new(640, 480), 32)
            .expect("fit");
        transform.pan(pan_x, pan_y);

        let route: Vec<RoutePoint> = store.snapshot().into_iter().cycle().take(route_len).collect();
        let style = RenderStyle::default();

        let first = build_route_frame(&store, &transform, Some(route.as_slice()), &style);
        let second = build_route_frame(&store, &transform, Some(route.as_slice()), &style);
        prop_assert_eq!(&first, &second);
        prop_assert!(first.validate().is_ok());
        prop_assert_eq!(first.circles().count(), coords.len());
        prop_assert_eq!(first.polylines().count(), usize::from(route_len >= 2));
    }
}
