use route_canvas::api::{RouteCanvasConfig, RouteCanvasEngine};
use route_canvas::core::Viewport;
use route_canvas::interaction::{PanController, PanDelta, PanGesture};
use route_canvas::render::NullRenderer;

fn build_engine() -> RouteCanvasEngine<NullRenderer> {
    let config = RouteCanvasConfig::new(Viewport::new(500, 500)).with_padding_px(40);
    let mut engine = RouteCanvasEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.add_location("A", 0.0, 0.0).expect("a");
    engine.add_location("B", 10.0, 0.0).expect("b");
    engine.add_location("C", 0.0, 10.0).expect("c");
    engine
}

#[test]
fn controller_follows_idle_dragging_idle() {
    let mut controller = PanController::new();
    assert_eq!(controller.gesture(), PanGesture::Idle);

    controller.on_pointer_down(100.0, 100.0);
    assert_eq!(
        controller.gesture(),
        PanGesture::Dragging {
            last_x: 100.0,
            last_y: 100.0
        }
    );

    assert_eq!(
        controller.on_pointer_move(120.0, 90.0),
        Some(PanDelta { dx: 20.0, dy: -10.0 })
    );
    assert_eq!(
        controller.on_pointer_move(125.0, 90.0),
        Some(PanDelta { dx: 5.0, dy: 0.0 })
    );

    controller.on_pointer_up();
    assert_eq!(controller.gesture(), PanGesture::Idle);
    assert_eq!(controller.on_pointer_move(300.0, 300.0), None);
}

#[test]
fn drag_pans_view_without_rescale() {
    let mut engine = build_engine();
    let scale = engine.transform().scale();
    let (offset_x, offset_y) = engine.transform().offset();
    let renders_before = engine.renderer().render_count;

    engine.pointer_down(100.0, 100.0);
    let panned = engine.pointer_move(120.0, 90.0).expect("pan");

    assert!(panned);
    assert_eq!(engine.transform().scale(), scale);
    assert_eq!(engine.transform().offset(), (offset_x + 20.0, offset_y - 10.0));
    assert_eq!(engine.renderer().render_count, renders_before + 1);
}

#[test]
fn pointer_leave_ends_drag_so_later_moves_do_not_pan() {
    let mut engine = build_engine();

    engine.pointer_down(100.0, 100.0);
    engine.pointer_move(120.0, 90.0).expect("pan");
    let after_drag = *engine.transform();

    engine.pointer_leave();
    assert_eq!(engine.interaction_mode(), PanGesture::Idle);

    let renders_before = engine.renderer().render_count;
    let panned = engine.pointer_move(400.0, 20.0).expect("idle move");

    assert!(!panned);
    assert_eq!(*engine.transform(), after_drag);
    assert_eq!(engine.renderer().render_count, renders_before);
}

#[test]
fn pointer_up_then_move_is_a_no_op() {
    let mut engine = build_engine();
    let fitted = *engine.transform();

    engine.pointer_down(10.0, 10.0);
    engine.pointer_up();
    let panned = engine.pointer_move(50.0, 50.0).expect("idle move");

    assert!(!panned);
    assert_eq!(*engine.transform(), fitted);
}

#[test]
fn each_move_redraws_once() {
    let mut engine = build_engine();
    let renders_before = engine.renderer().render_count;

    engine.pointer_down(0.0, 0.0);
    for step in 1..=5 {
        engine
            .pointer_move(f64::from(step) * 3.0, 0.0)
            .expect("pan step");
    }

    assert_eq!(engine.renderer().render_count, renders_before + 5);
    let (offset_x, _) = engine.transform().offset();
    let mut fresh = build_engine();
    fresh.pointer_down(0.0, 0.0);
    fresh.pointer_move(15.0, 0.0).expect("single pan");
    assert_eq!(fresh.transform().offset().0, offset_x);
}
