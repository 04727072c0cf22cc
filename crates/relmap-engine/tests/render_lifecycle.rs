//! Integration test: full view lifecycle against a fake SDK backend.
//!
//! Drives a [`MapView`] from mount through idle, staggered rendering,
//! clicks, and unmount, asserting on the overlays and popups the
//! backend actually saw.

use relmap_core::entity::PointEntity;
use relmap_core::style::MarkerGlyph;
use relmap_core::zone::INDIA_CENTER;
use relmap_engine::render::RenderInput;
use relmap_engine::view::{ClickTarget, MapView, ViewPhase};
use relmap_sched::TimeMs;
use relmap_surface::spec::SurfaceOptions;
use relmap_test_utils::fixtures::{disaster_at, resource_at, ungeocoded_disaster};
use relmap_test_utils::FakeMapBackend;

fn ready_view(backend: &mut FakeMapBackend) -> MapView {
    let mut view = MapView::new(SurfaceOptions::new(INDIA_CENTER, 5));
    view.mount(backend).unwrap();
    view.pump(backend, TimeMs(0)).unwrap();
    assert_eq!(view.phase(), ViewPhase::Ready);
    view
}

fn drain(view: &mut MapView, backend: &mut FakeMapBackend) {
    // Far past every stagger deadline.
    view.pump(backend, TimeMs(10_000)).unwrap();
}

#[test]
fn one_active_disaster_renders_one_red_marker_at_base_time() {
    let mut backend = FakeMapBackend::new();
    let mut view = ready_view(&mut backend);

    view.set_input(
        &mut backend,
        TimeMs(0),
        RenderInput {
            disasters: vec![disaster_at("d-0", 40.7128, -74.0060)],
            resources: Vec::new(),
            show_zones: false,
        },
    )
    .unwrap();

    // Index 0 fires at the batch base time itself.
    view.pump(&mut backend, TimeMs(0)).unwrap();
    assert_eq!(view.overlay_count(), 1);
    assert_eq!(view.pending_creations(), 0);

    let overlay = backend.live_overlays()[0];
    let spec = backend.marker_spec(overlay).unwrap();
    assert_eq!(spec.style.glyph, MarkerGlyph::FilledCircle);
    assert_eq!(spec.style.fill_color, "#dc2626");
    assert_eq!(spec.style.z_index, 1000);
    assert_eq!(spec.position.lat, 40.7128);
}

#[test]
fn overlay_count_matches_geocoded_count() {
    let mut backend = FakeMapBackend::new();
    let mut view = ready_view(&mut backend);

    view.set_input(
        &mut backend,
        TimeMs(0),
        RenderInput {
            disasters: vec![
                disaster_at("d-0", 1.0, 1.0),
                ungeocoded_disaster("d-1"),
                disaster_at("d-2", 2.0, 2.0),
            ],
            resources: vec![
                resource_at("r-0", 3.0, 3.0, "shelter"),
                resource_at("r-1", 4.0, 4.0, "medical"),
            ],
            show_zones: false,
        },
    )
    .unwrap();
    drain(&mut view, &mut backend);

    assert_eq!(view.overlay_count(), 4);
    assert_eq!(view.metrics().skipped_missing_coords, 1);
    assert_eq!(backend.live_overlay_count(), 4);
}

#[test]
fn partially_geocoded_entity_renders_nothing() {
    let mut backend = FakeMapBackend::new();
    let mut view = ready_view(&mut backend);

    let mut d = disaster_at("d-0", 40.7, -74.0);
    d.longitude = None;
    view.set_input(
        &mut backend,
        TimeMs(0),
        RenderInput {
            disasters: vec![d],
            resources: Vec::new(),
            show_zones: false,
        },
    )
    .unwrap();
    drain(&mut view, &mut backend);

    assert_eq!(view.overlay_count(), 0);
    assert_eq!(view.metrics().skipped_missing_coords, 1);
}

#[test]
fn categories_interleave_on_independent_cadences() {
    let mut backend = FakeMapBackend::new();
    let mut view = ready_view(&mut backend);

    view.set_input(
        &mut backend,
        TimeMs(0),
        RenderInput {
            disasters: vec![
                disaster_at("d-0", 1.0, 1.0),
                disaster_at("d-1", 2.0, 2.0),
            ],
            resources: vec![resource_at("r-0", 3.0, 3.0, "food")],
            show_zones: true,
        },
    )
    .unwrap();

    // t=0: zone 0, disaster 0, resource 0.
    view.pump(&mut backend, TimeMs(0)).unwrap();
    assert_eq!(view.overlay_count(), 3);

    // t=25: disaster 1. t=49 adds nothing new before the next zone.
    view.pump(&mut backend, TimeMs(25)).unwrap();
    assert_eq!(view.overlay_count(), 4);
    view.pump(&mut backend, TimeMs(49)).unwrap();
    assert_eq!(view.overlay_count(), 4);

    // t=50: zone 1.
    view.pump(&mut backend, TimeMs(50)).unwrap();
    assert_eq!(view.overlay_count(), 5);
}

#[test]
fn zone_circles_carry_risk_styling() {
    let mut backend = FakeMapBackend::new();
    let mut view = ready_view(&mut backend);

    view.set_input(
        &mut backend,
        TimeMs(0),
        RenderInput {
            disasters: Vec::new(),
            resources: Vec::new(),
            show_zones: true,
        },
    )
    .unwrap();
    drain(&mut view, &mut backend);

    assert_eq!(view.overlay_count(), 8);
    // First zone is Kashmir Valley, very-high.
    let overlay = backend.live_overlays()[0];
    let spec = backend.circle_spec(overlay).unwrap();
    assert_eq!(spec.radius_m, 80_000.0);
    assert_eq!(spec.style.fill_color, "#dc2626");
    assert_eq!(spec.style.fill_opacity, 0.25);
}

#[test]
fn click_shows_status_in_popup_and_reaches_callback() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let mut backend = FakeMapBackend::new();
    let mut view = ready_view(&mut backend);
    let clicked: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&clicked);
    view.on_disaster_click(move |d| sink.borrow_mut().push(d.id.0.clone()));

    view.set_input(
        &mut backend,
        TimeMs(0),
        RenderInput {
            disasters: vec![disaster_at("d-0", 40.7, -74.0)],
            resources: Vec::new(),
            show_zones: false,
        },
    )
    .unwrap();
    drain(&mut view, &mut backend);

    let overlay = backend.live_overlays()[0];
    let target = view.click(&mut backend, overlay).unwrap();
    assert!(matches!(
        target,
        Some(ClickTarget::Point(PointEntity::Disaster(_)))
    ));

    let popup = backend.last_popup().unwrap();
    assert!(popup.content.text().contains("Status: active"));
    assert_eq!(popup.content.title_color.as_deref(), Some("#dc2626"));
    assert_eq!(clicked.borrow().as_slice(), ["d-0"]);
}

#[test]
fn resource_click_reaches_resource_callback_with_full_record() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let mut backend = FakeMapBackend::new();
    let mut view = ready_view(&mut backend);
    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    view.on_resource_click(move |r| *sink.borrow_mut() = Some((r.id.0.clone(), r.capacity)));

    view.set_input(
        &mut backend,
        TimeMs(0),
        RenderInput {
            disasters: Vec::new(),
            resources: vec![resource_at("r-0", 40.7, -74.0, "shelter")],
            show_zones: false,
        },
    )
    .unwrap();
    drain(&mut view, &mut backend);

    let overlay = backend.live_overlays()[0];
    let target = view.click(&mut backend, overlay).unwrap();
    assert!(matches!(
        target,
        Some(ClickTarget::Point(PointEntity::Resource(_)))
    ));
    assert_eq!(*seen.borrow(), Some(("r-0".to_string(), Some(200))));
    // Resource popup headings carry no colour override.
    assert_eq!(backend.last_popup().unwrap().content.title_color, None);
}

#[test]
fn unmount_destroys_surface_and_is_idempotent() {
    let mut backend = FakeMapBackend::new();
    let mut view = ready_view(&mut backend);
    view.set_input(
        &mut backend,
        TimeMs(0),
        RenderInput {
            disasters: vec![disaster_at("d-0", 1.0, 1.0)],
            resources: Vec::new(),
            show_zones: false,
        },
    )
    .unwrap();
    drain(&mut view, &mut backend);

    view.unmount(&mut backend);
    view.unmount(&mut backend);
    assert_eq!(view.phase(), ViewPhase::Unmounted);
    assert_eq!(backend.surface_count(), 0);
    assert_eq!(backend.live_overlay_count(), 0);
}
