//! Headless walkthrough: a scripted pointer session against a switch, with
//! the animation driven by a test clock. Run with `RUST_LOG=debug` to see
//! the widget's own logging.

use segue_core::*;
use segue_ui::*;
use web_time::{Duration, Instant};

fn pointer(event: PointerEventKind, x: f32, y: f32) -> PointerEvent {
    PointerEvent {
        id: PointerId(1),
        kind: PointerKind::Touch,
        event,
        position: Vec2 { x, y },
        pressure: 1.0,
        modifiers: Modifiers::default(),
    }
}

fn settle(switch: &SegmentedSwitchState, clock: &TestClock) {
    let mut frames = 0;
    while switch.is_animating() {
        clock.advance(Duration::from_millis(16));
        switch.tick();
        frames += 1;
    }
    log::info!(
        "indicator settled after {frames} frames at {:?}",
        switch.indicator_frame()
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let clock = TestClock::at(Instant::now());
    set_clock(clock.clone());

    let switch = SegmentedSwitchState::new(
        SwitchConfig::new(["Daily", "Weekly", "Monthly"])
            .bounds(300.0, 44.0)
            .style(SwitchStyle {
                background: Color::from_hex("#EEEEEE"),
                indicator_background: Color::from_hex("#3366FF"),
                corner_radius: 8.0,
                indicator_inset: 2.0,
                ..Default::default()
            }),
    )?;

    switch.on_change(|i| log::info!("selection changed -> {i}"));

    // Tap the third segment; a two-segment jump springs across
    switch.handle_pointer(&pointer(
        PointerEventKind::Down(PointerButton::Primary),
        260.0,
        22.0,
    ));
    switch.handle_pointer(&pointer(
        PointerEventKind::Up(PointerButton::Primary),
        260.0,
        22.0,
    ));
    settle(&switch, &clock);

    // Drag the indicator back to the first segment and let go
    switch.handle_pointer(&pointer(
        PointerEventKind::Down(PointerButton::Primary),
        250.0,
        22.0,
    ));
    for x in [220.0, 160.0, 90.0, 40.0] {
        switch.handle_pointer(&pointer(PointerEventKind::Move, x, 22.0));
    }
    switch.handle_pointer(&pointer(
        PointerEventKind::Up(PointerButton::Primary),
        40.0,
        22.0,
    ));
    settle(&switch, &clock);

    let mut scene = Scene::default();
    switch.paint(&mut scene);

    println!("selected index: {}", switch.index());
    println!("titles: {:?}", switch.titles());
    println!("scene nodes: {}", scene.nodes.len());
    Ok(())
}
