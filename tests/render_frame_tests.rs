use route_canvas::api::{RenderStyle, build_route_frame};
use route_canvas::core::{LocationStore, RoutePoint, ScreenPoint, Viewport, ViewportTransform};
use route_canvas::render::{DrawCommand, NullRenderer, RenderFrame, Renderer};

fn fixture() -> (LocationStore, ViewportTransform) {
    let mut store = LocationStore::new();
    store.add("A", 0.0, 0.0).expect("a");
    store.add("B", 10.0, 0.0).expect("b");
    store.add("C", 0.0, 10.0).expect("c");

    let mut transform = ViewportTransform::default();
    transform
        .auto_fit(store.locations(), Viewport::new(500, 500), 40)
        .expect("fit");
    (store, transform)
}

fn route() -> Vec<RoutePoint> {
    vec![
        RoutePoint::new("A", 0.0, 0.0),
        RoutePoint::new("B", 10.0, 0.0),
        RoutePoint::new("C", 0.0, 10.0),
    ]
}

#[test]
fn frame_clears_then_draws_each_location_marker_and_label() {
    let (store, transform) = fixture();
    let style = RenderStyle::default();

    let frame = build_route_frame(&store, &transform, None, &style);
    frame.validate().expect("valid frame");

    assert_eq!(frame.viewport, Viewport::new(500, 500));
    assert_eq!(frame.commands.len(), 1 + 2 * 3);
    assert_eq!(frame.commands[0], DrawCommand::Clear(style.clear_color));

    let expected = [("A", 40.0, 40.0), ("B", 460.0, 40.0), ("C", 40.0, 460.0)];
    for (index, (name, x, y)) in expected.into_iter().enumerate() {
        let DrawCommand::Circle(circle) = &frame.commands[1 + 2 * index] else {
            panic!("expected circle at {index}");
        };
        assert_eq!((circle.center_x, circle.center_y), (x, y));
        assert_eq!(circle.radius, style.point_radius_px);

        let DrawCommand::Text(label) = &frame.commands[2 + 2 * index] else {
            panic!("expected label at {index}");
        };
        assert_eq!(label.text, name);
        assert_eq!(label.x, x + style.label_offset_x_px);
        assert_eq!(label.y, y + style.label_offset_y_px);
    }
}

#[test]
fn route_polyline_is_one_stroke_drawn_last_in_route_order() {
    let (store, transform) = fixture();
    let route = vec![
        RoutePoint::new("C", 0.0, 10.0),
        RoutePoint::new("A", 0.0, 0.0),
        RoutePoint::new("B", 10.0, 0.0),
    ];

    let frame = build_route_frame(&store, &transform, Some(route.as_slice()), &RenderStyle::default());

    assert_eq!(frame.polylines().count(), 1);
    let Some(DrawCommand::Polyline(polyline)) = frame.commands.last() else {
        panic!("route must be the last draw command");
    };
    assert_eq!(
        polyline.points,
        vec![
            ScreenPoint::new(40.0, 460.0),
            ScreenPoint::new(40.0, 40.0),
            ScreenPoint::new(460.0, 40.0),
        ]
    );
    assert_eq!(polyline.segment_count(), 2);
}

#[test]
fn route_with_fewer_than_two_points_draws_no_polyline() {
    let (store, transform) = fixture();
    let style = RenderStyle::default();
    let without_route = build_route_frame(&store, &transform, None, &style);

    for route in [vec![], vec![RoutePoint::new("A", 0.0, 0.0)]] {
        let frame = build_route_frame(&store, &transform, Some(route.as_slice()), &style);
        assert_eq!(frame.polylines().count(), 0);
        assert_eq!(frame, without_route);
    }
}

#[test]
fn location_commands_do_not_depend_on_route_presence() {
    let (store, transform) = fixture();
    let style = RenderStyle::default();
    let route = route();

    let plain = build_route_frame(&store, &transform, None, &style);
    let with_route = build_route_frame(&store, &transform, Some(route.as_slice()), &style);

    assert_eq!(
        &with_route.commands[..with_route.commands.len() - 1],
        plain.commands.as_slice()
    );
}

#[test]
fn frame_building_is_idempotent() {
    let (store, transform) = fixture();
    let style = RenderStyle::default();
    let route = route();

    let first = build_route_frame(&store, &transform, Some(route.as_slice()), &style);
    let second = build_route_frame(&store, &transform, Some(route.as_slice()), &style);
    assert_eq!(first, second);
}

#[test]
fn empty_store_renders_blank_frame() {
    let store = LocationStore::new();
    let transform = ViewportTransform::identity(Viewport::new(300, 200), 10);

    let frame = build_route_frame(&store, &transform, None, &RenderStyle::default());

    assert!(frame.is_blank());
    assert_eq!(frame.commands.len(), 1);
}

#[test]
fn null_renderer_records_counts_and_last_frame() {
    let (store, transform) = fixture();
    let route = route();
    let frame = build_route_frame(&store, &transform, Some(route.as_slice()), &RenderStyle::default());

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");

    assert_eq!(renderer.render_count, 1);
    assert_eq!(renderer.last_circle_count, 3);
    assert_eq!(renderer.last_text_count, 3);
    assert_eq!(renderer.last_polyline_count, 1);
    assert_eq!(renderer.last_frame.as_ref(), Some(&frame));
}

#[test]
fn null_renderer_rejects_invalid_frame() {
    let frame = RenderFrame::new(Viewport::new(0, 10));
    let mut renderer = NullRenderer::default();

    renderer.render(&frame).expect_err("invalid viewport must fail");
    assert_eq!(renderer.render_count, 0);
}
