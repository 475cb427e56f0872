// Host-side tests for the pure layout helpers. The web crate itself is
// wasm-only, so the module is included directly.

#![allow(dead_code)]
mod layout {
    include!("../src/layout.rs");
}

use glam::Vec2;
use layout::*;

#[test]
fn slides_per_view_follows_the_breakpoints() {
    assert_eq!(slides_per_view(1440.0), (8, 15.0));
    assert_eq!(slides_per_view(1201.0), (8, 15.0));
    assert_eq!(slides_per_view(1200.0), (4, 12.0));
    assert_eq!(slides_per_view(800.0), (4, 12.0));
    assert_eq!(slides_per_view(600.0), (3, 10.0));
    assert_eq!(slides_per_view(375.0), (3, 10.0));
}

#[test]
fn slide_basis_accounts_for_the_gaps() {
    // 8 slides have 7 gaps of 15px between them
    assert_eq!(slide_basis_css(8, 15.0), "calc((100% - 105px) / 8)");
    assert_eq!(slide_basis_css(3, 10.0), "calc((100% - 20px) / 3)");
    // Degenerate single slide: no gap at all
    assert_eq!(slide_basis_css(1, 15.0), "calc((100% - 0px) / 1)");
}

#[test]
fn card_transform_orders_the_rotations() {
    assert_eq!(
        card_transform(12.5, -45.0),
        "rotateX(12.50deg) rotateY(-45.00deg)"
    );
    assert_eq!(card_transform(0.0, 0.0), "rotateX(0.00deg) rotateY(0.00deg)");
}

#[test]
fn wrapper_transition_switches_with_the_animation_lock() {
    assert_eq!(wrapper_transition(true, 0.6), "transform 0.60s ease-in-out");
    assert_eq!(wrapper_transition(true, 0.4), "transform 0.40s ease-in-out");
    assert_eq!(wrapper_transition(false, 0.6), "transform 0.25s ease-out");
}

#[test]
fn face_sizes_cover_the_card_volume() {
    let card = Vec2::new(320.0, 480.0);
    let depth = 40.0;

    assert_eq!(face_size(Face::Front, card, depth), card);
    assert_eq!(face_size(Face::Back, card, depth), card);
    assert_eq!(face_size(Face::SpineLeft, card, depth), Vec2::new(40.0, 480.0));
    assert_eq!(face_size(Face::SpineRight, card, depth), Vec2::new(40.0, 480.0));
    assert_eq!(face_size(Face::EdgeTop, card, depth), Vec2::new(320.0, 40.0));
    assert_eq!(face_size(Face::EdgeBottom, card, depth), Vec2::new(320.0, 40.0));
}

#[test]
fn face_transforms_push_each_plane_to_its_surface() {
    let card = Vec2::new(320.0, 480.0);
    let depth = 40.0;

    assert_eq!(
        face_transform(Face::Front, card, depth),
        "translate(-50%, -50%) translateZ(20px)"
    );
    assert_eq!(
        face_transform(Face::Back, card, depth),
        "translate(-50%, -50%) rotateY(180deg) translateZ(20px)"
    );
    // Spines sit half a cover-width out, edges half a cover-height
    assert_eq!(
        face_transform(Face::SpineLeft, card, depth),
        "translate(-50%, -50%) rotateY(-90deg) translateZ(160px)"
    );
    assert_eq!(
        face_transform(Face::SpineRight, card, depth),
        "translate(-50%, -50%) rotateY(90deg) translateZ(160px)"
    );
    assert_eq!(
        face_transform(Face::EdgeTop, card, depth),
        "translate(-50%, -50%) rotateX(90deg) translateZ(240px)"
    );
    assert_eq!(
        face_transform(Face::EdgeBottom, card, depth),
        "translate(-50%, -50%) rotateX(-90deg) translateZ(240px)"
    );
}

#[test]
fn the_six_faces_are_placed_distinctly() {
    let card = Vec2::new(320.0, 480.0);
    let transforms: Vec<String> = FACES
        .iter()
        .map(|f| face_transform(*f, card, 40.0))
        .collect();
    for (i, a) in transforms.iter().enumerate() {
        for b in &transforms[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
