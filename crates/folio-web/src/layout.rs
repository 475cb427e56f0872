// Pure layout and CSS math shared by the carousel and the card renderer.
// Kept free of DOM types so host-side tests can exercise it directly.

use folio_core::constants::{
    CAROUSEL_BREAK_MEDIUM_PX, CAROUSEL_BREAK_NARROW_PX, CAROUSEL_PER_VIEW_MEDIUM,
    CAROUSEL_PER_VIEW_NARROW, CAROUSEL_PER_VIEW_WIDE, CAROUSEL_SPACING_MEDIUM,
    CAROUSEL_SPACING_NARROW, CAROUSEL_SPACING_WIDE,
};
use glam::Vec2;

/// Carousel slide count and gap for a viewport width, matching the
/// stylesheet breakpoints.
#[inline]
pub fn slides_per_view(viewport_w: f64) -> (usize, f64) {
    if viewport_w <= CAROUSEL_BREAK_NARROW_PX {
        (CAROUSEL_PER_VIEW_NARROW, CAROUSEL_SPACING_NARROW)
    } else if viewport_w <= CAROUSEL_BREAK_MEDIUM_PX {
        (CAROUSEL_PER_VIEW_MEDIUM, CAROUSEL_SPACING_MEDIUM)
    } else {
        (CAROUSEL_PER_VIEW_WIDE, CAROUSEL_SPACING_WIDE)
    }
}

/// Flex basis for one slide so exactly `per_view` slides fill the strip with
/// `spacing` gaps between them.
pub fn slide_basis_css(per_view: usize, spacing: f64) -> String {
    let gaps = spacing * per_view.saturating_sub(1) as f64;
    format!("calc((100% - {}px) / {})", gaps, per_view)
}

/// Wrapper transform for the current pose.
pub fn card_transform(rotate_x_deg: f32, rotate_y_deg: f32) -> String {
    format!(
        "rotateX({:.2}deg) rotateY({:.2}deg)",
        rotate_x_deg, rotate_y_deg
    )
}

/// Transition applied to the card wrapper: the configured ease while a flip
/// is in flight, a short settle otherwise so tilt updates read as smooth
/// without any per-frame easing in state.
pub fn wrapper_transition(animating: bool, flip_duration_sec: f64) -> String {
    if animating {
        format!("transform {:.2}s ease-in-out", flip_duration_sec)
    } else {
        "transform 0.25s ease-out".to_string()
    }
}

/// The six faces of the card volume.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Face {
    Front,
    Back,
    SpineLeft,
    SpineRight,
    EdgeTop,
    EdgeBottom,
}

pub const FACES: [Face; 6] = [
    Face::Front,
    Face::Back,
    Face::SpineLeft,
    Face::SpineRight,
    Face::EdgeTop,
    Face::EdgeBottom,
];

/// Plane size of a face within a `card` (width, height) volume of the given
/// `depth`.
pub fn face_size(face: Face, card: Vec2, depth: f32) -> Vec2 {
    match face {
        Face::Front | Face::Back => card,
        Face::SpineLeft | Face::SpineRight => Vec2::new(depth, card.y),
        Face::EdgeTop | Face::EdgeBottom => Vec2::new(card.x, depth),
    }
}

/// CSS transform placing a face on the card volume: center it, orient it,
/// then push it out to its plane. Rotations keep every normal outward so
/// `backface-visibility: hidden` culls the far side.
pub fn face_transform(face: Face, card: Vec2, depth: f32) -> String {
    match face {
        Face::Front => format!("translate(-50%, -50%) translateZ({}px)", depth * 0.5),
        Face::Back => format!(
            "translate(-50%, -50%) rotateY(180deg) translateZ({}px)",
            depth * 0.5
        ),
        Face::SpineLeft => format!(
            "translate(-50%, -50%) rotateY(-90deg) translateZ({}px)",
            card.x * 0.5
        ),
        Face::SpineRight => format!(
            "translate(-50%, -50%) rotateY(90deg) translateZ({}px)",
            card.x * 0.5
        ),
        Face::EdgeTop => format!(
            "translate(-50%, -50%) rotateX(90deg) translateZ({}px)",
            card.y * 0.5
        ),
        Face::EdgeBottom => format!(
            "translate(-50%, -50%) rotateX(-90deg) translateZ({}px)",
            card.y * 0.5
        ),
    }
}
