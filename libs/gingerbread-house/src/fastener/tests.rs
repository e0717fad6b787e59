//! Tests for fastener layout and geometry.

use super::*;
use crate::dimensions::DimensionSpec;
use approx::assert_relative_eq;

fn heights(fasteners: &[Fastener]) -> Vec<f64> {
    let mut zs: Vec<f64> = fasteners.iter().map(|f| f.offset.z).collect();
    zs.sort_by(f64::total_cmp);
    zs.dedup();
    zs
}

#[test]
fn test_wall_tab_positions_are_quarter_points() {
    for span in [76.2, 100.0, 3.0, 1e-3] {
        assert_eq!(wall_tab_positions(span), [0.25 * span, 0.75 * span]);
    }
}

#[test]
fn test_roof_tab_positions_are_symmetric() {
    let [left, right] = roof_tab_positions(116.84);
    assert_eq!(left, -right);
    assert_relative_eq!(right, 29.21, epsilon = 1e-12);
}

#[test]
fn test_slot_bounds_enclose_tab() {
    let dims = Dimensions::default();
    let offset = DVec3::new(38.1, 0.0, 19.05);
    let tab_box = Fastener::tab(offset).solid(&dims).unwrap().bounding_box();
    let slot_box = Fastener::slot(offset).solid(&dims).unwrap().bounding_box();

    assert!(slot_box.contains_box(&tab_box));
    assert!((slot_box.center() - tab_box.center()).length() < 1e-12);

    let clearance = dims.tab().tolerance;
    assert!((slot_box.size() - tab_box.size() - DVec3::splat(2.0 * clearance)).length() < 1e-9);
}

#[test]
fn test_tab_rejects_negative_tolerance() {
    assert!(tab(1.0, 1.0, 1.0, -0.1).is_err());
    assert!(tab(1.0, 1.0, 1.0, f64::NAN).is_err());
}

#[test]
fn test_edge_tabs_layout() {
    let dims = Dimensions::default();
    let tabs = edge_tabs(&dims, dims.house_width() / 2.0, dims.wall_height());

    assert_eq!(tabs.len(), 4);
    assert!(tabs.iter().all(|f| f.kind == FastenerKind::Tab));
    let x = dims.house_width() / 2.0 + dims.tab().depth / 2.0;
    assert!(tabs.iter().all(|f| f.offset.x.abs() == x && f.offset.y == 0.0));
    assert_eq!(heights(&tabs), wall_tab_positions(dims.wall_height()).to_vec());
}

#[test]
fn test_tabs_and_slots_share_heights() {
    let dims = Dimensions::default();
    let tabs = edge_tabs(&dims, dims.house_width() / 2.0, dims.wall_height());
    let slots = edge_slots(dims.house_depth() / 2.0, dims.wall_height());

    assert!(slots.iter().all(|f| f.kind == FastenerKind::Slot));
    assert!(slots
        .iter()
        .all(|f| f.offset.x.abs() == dims.house_depth() / 2.0));
    assert_eq!(heights(&tabs), heights(&slots));
}

#[test]
fn test_misaligned_span_is_detectable() {
    let dims = Dimensions::default();
    let other = Dimensions::new(&DimensionSpec {
        wall_height: 2.5,
        ..Default::default()
    })
    .unwrap();

    let tabs = edge_tabs(&dims, dims.house_width() / 2.0, dims.wall_height());
    let slots = edge_slots(other.house_depth() / 2.0, other.wall_height());
    assert_ne!(heights(&tabs), heights(&slots));
}

#[test]
fn test_slot_cut_then_tab_union_round_trip() {
    let dims = Dimensions::new(&DimensionSpec {
        tab_tolerance: 0.0,
        ..Default::default()
    })
    .unwrap();
    let host = Solid::cuboid(40.0, 20.0, 40.0).unwrap();
    let offset = DVec3::new(20.0, 0.0, 10.0);

    let slotted = Fastener::slot(offset).apply(&host, &dims).unwrap();
    let t = dims.tab();
    // Half the tab's width lies inside the host
    let removed = t.width / 2.0 * t.depth * t.height;
    assert_relative_eq!(slotted.volume(), host.volume() - removed, epsilon = 1e-6);
    assert!(!slotted.contains(offset - DVec3::new(t.width / 4.0, 0.0, 0.0)));

    let restored = Fastener::tab(offset).apply(&slotted, &dims).unwrap();
    let direct = Fastener::tab(offset).apply(&host, &dims).unwrap();
    assert_relative_eq!(restored.volume(), direct.volume(), epsilon = 1e-6);
}

#[test]
fn test_apply_all_folds_in_order() {
    let dims = Dimensions::default();
    let host = Solid::cuboid(40.0, 4.0, 40.0)
        .unwrap()
        .translated(DVec3::new(0.0, 0.0, 20.0));
    let fasteners = edge_tabs(&dims, 20.0, 40.0);

    let tabbed = apply_all(host.clone(), &fasteners, &dims).unwrap();
    assert!(tabbed.volume() > host.volume());
    for f in &fasteners {
        assert!(tabbed.contains(f.offset + DVec3::new(f.offset.x.signum(), 0.0, 0.0)));
    }
    assert!(apply_all(host.clone(), &[], &dims).unwrap().volume() == host.volume());
}

#[test]
fn test_roof_tabs_hang_from_eave() {
    let dims = Dimensions::default();
    let tabs = roof_tabs(&dims);
    let t = dims.tab();

    assert_eq!(tabs.len(), 2);
    for f in &tabs {
        assert_eq!(f.kind, FastenerKind::Tab);
        assert_relative_eq!(f.offset.x.abs(), 0.25 * dims.roof_width(), epsilon = 1e-12);
        let bbox = f.solid(&dims).unwrap().bounding_box();
        assert_relative_eq!(bbox.max.z, 0.0, epsilon = 1e-12);
        assert_relative_eq!(bbox.min.y, -dims.roof_length() / 2.0, epsilon = 1e-9);
        assert_relative_eq!(bbox.size().z, t.height, epsilon = 1e-9);
    }
}
