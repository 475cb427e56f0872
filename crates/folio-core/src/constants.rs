use glam::Vec2;

use crate::card::DeviceClass;

// Shared presentation/interaction tuning used by the web frontend.

// Detail card geometry (CSS px)
pub const CARD_SIZE_DESKTOP: [f32; 2] = [320.0, 480.0];
pub const CARD_SIZE_MOBILE: [f32; 2] = [280.0, 420.0];
pub const CARD_DEPTH: f32 = 40.0; // spine/edge thickness
pub const CARD_PERSPECTIVE: f32 = 1200.0; // perspective distance of the 3D container

// Tilt tracking
pub const MAX_TILT_X_DEG: f32 = 30.0; // about the horizontal axis, from vertical pointer offset
pub const MAX_TILT_Y_DEG: f32 = 45.0; // about the vertical axis, from horizontal pointer offset

// Flip gesture
pub const SWIPE_THRESHOLD_PX: f32 = 50.0; // horizontal travel that counts as a swipe
pub const FLIP_DURATION_DESKTOP: f64 = 0.6; // seconds
pub const FLIP_DURATION_MOBILE: f64 = 0.4;

// Viewport breakpoint separating the two device classes (CSS px)
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// Carousel sizing per viewport breakpoint
pub const CAROUSEL_PER_VIEW_WIDE: usize = 8;
pub const CAROUSEL_PER_VIEW_MEDIUM: usize = 4; // under 1200 px
pub const CAROUSEL_PER_VIEW_NARROW: usize = 3; // under 600 px
pub const CAROUSEL_BREAK_MEDIUM_PX: f64 = 1200.0;
pub const CAROUSEL_BREAK_NARROW_PX: f64 = 600.0;
pub const CAROUSEL_SPACING_WIDE: f64 = 15.0;
pub const CAROUSEL_SPACING_MEDIUM: f64 = 12.0;
pub const CAROUSEL_SPACING_NARROW: f64 = 10.0;

#[inline]
pub fn card_size(device: DeviceClass) -> Vec2 {
    let [w, h] = match device {
        DeviceClass::Desktop => CARD_SIZE_DESKTOP,
        DeviceClass::Mobile => CARD_SIZE_MOBILE,
    };
    Vec2::new(w, h)
}
