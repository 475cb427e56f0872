//! Pose state for the detail-view book card.
//!
//! The interaction logic lives here, free of platform APIs: the web frontend
//! forwards raw pointer/mouse events plus a clock reading, then reads back a
//! pose snapshot once per animation frame. Every handler that needs time
//! takes `now_sec` so tests can drive the machine with a virtual clock.

use glam::Vec2;

use crate::constants::{
    FLIP_DURATION_DESKTOP, FLIP_DURATION_MOBILE, MAX_TILT_X_DEG, MAX_TILT_Y_DEG,
    SWIPE_THRESHOLD_PX,
};

/// Breakpoint-derived device classification, evaluated by the host and
/// injected at construction. The card never polls media state itself.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DeviceClass {
    Desktop,
    Mobile,
}

/// Bounding rectangle of the 3D container, in the same coordinate space as
/// the pointer positions fed to [`FlipCard::pointer_moved`].
#[derive(Clone, Copy, Debug)]
pub struct ContainerRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ContainerRect {
    /// Normalize a pointer position to [-1, 1] per axis, 0 at the center.
    ///
    /// Returns `None` for a degenerate rect (zero width or height) so a bad
    /// layout frame never reaches the rendered transform as NaN. The result
    /// is clamped because fast movement can report coordinates slightly
    /// outside the rect before the leave event fires.
    pub fn normalized(&self, x: f32, y: f32) -> Option<Vec2> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        let nx = ((x - self.left) / self.width - 0.5) * 2.0;
        let ny = ((y - self.top) / self.height - 0.5) * 2.0;
        Some(Vec2::new(nx.clamp(-1.0, 1.0), ny.clamp(-1.0, 1.0)))
    }
}

/// Host-supplied tuning for one card instance.
#[derive(Clone, Copy, Debug)]
pub struct CardConfig {
    pub device: DeviceClass,
    /// Max rotation about the horizontal axis, degrees.
    pub max_tilt_x: f32,
    /// Max rotation about the vertical axis, degrees.
    pub max_tilt_y: f32,
    /// Horizontal travel beyond which a pointer gesture counts as a swipe.
    pub swipe_threshold: f32,
    /// Flip animation window, seconds.
    pub flip_duration: f64,
}

impl CardConfig {
    pub fn for_device(device: DeviceClass) -> Self {
        let flip_duration = match device {
            DeviceClass::Desktop => FLIP_DURATION_DESKTOP,
            DeviceClass::Mobile => FLIP_DURATION_MOBILE,
        };
        Self {
            device,
            max_tilt_x: MAX_TILT_X_DEG,
            max_tilt_y: MAX_TILT_Y_DEG,
            swipe_threshold: SWIPE_THRESHOLD_PX,
            flip_duration,
        }
    }
}

/// Read-only pose consumed by the renderer once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardSnapshot {
    pub tilt_x: f32,
    pub tilt_y: f32,
    pub flipped: bool,
    pub animating: bool,
}

impl CardSnapshot {
    /// Rotation about the X axis, degrees.
    #[inline]
    pub fn rotate_x(&self) -> f32 {
        self.tilt_x
    }

    /// Combined rotation about the Y axis, degrees. The discrete flip and
    /// the continuous tilt share this axis; which face is visible follows
    /// purely from the accumulated value.
    #[inline]
    pub fn rotate_y(&self) -> f32 {
        if self.flipped {
            -180.0 + self.tilt_y
        } else {
            self.tilt_y
        }
    }
}

/// Combined tilt + flip state machine for a single open detail view.
///
/// One instance per open. Dropping it on close discards the pending
/// animation deadline, so nothing needs cancelling.
pub struct FlipCard {
    config: CardConfig,
    tilt_x: f32,
    tilt_y: f32,
    flipped: bool,
    /// Flip animation lock: tilt input is ignored until this deadline. A new
    /// flip overwrites it, superseding the previous window.
    animating_until: Option<f64>,
    /// Pointer-down X, live between pointer-down and pointer-up.
    gesture_start_x: Option<f32>,
    /// Set when the swipe path already flipped this gesture; the host fires
    /// a `click` for the same physical gesture and it must not flip again.
    swipe_consumed_click: bool,
}

impl FlipCard {
    pub fn new(config: CardConfig) -> Self {
        Self {
            config,
            tilt_x: 0.0,
            tilt_y: 0.0,
            flipped: false,
            animating_until: None,
            gesture_start_x: None,
            swipe_consumed_click: false,
        }
    }

    #[inline]
    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    #[inline]
    pub fn is_animating(&self, now_sec: f64) -> bool {
        self.animating_until.is_some_and(|t| now_sec < t)
    }

    /// Continuous tilt tracking. Desktop only, and ignored while a flip is
    /// in flight: during the animation window the flip fully determines the
    /// pose. Normalization already bounds the result by the configured
    /// maxima.
    pub fn pointer_moved(&mut self, x: f32, y: f32, rect: ContainerRect, now_sec: f64) {
        if self.config.device == DeviceClass::Mobile || self.is_animating(now_sec) {
            return;
        }
        let Some(n) = rect.normalized(x, y) else {
            return;
        };
        self.tilt_y = n.x * self.config.max_tilt_y;
        // Pointer above center tips the top of the card toward the viewer.
        self.tilt_x = -n.y * self.config.max_tilt_x;
    }

    /// Pointer left the container: the pose returns to rest at once. Easing
    /// the visual return is the renderer's transition, not state.
    pub fn pointer_left(&mut self) {
        self.tilt_x = 0.0;
        self.tilt_y = 0.0;
    }

    pub fn pointer_down(&mut self, x: f32) {
        self.gesture_start_x = Some(x);
        self.swipe_consumed_click = false;
    }

    /// End of a pointer gesture. Horizontal travel beyond the threshold
    /// flips, sign-independent; the gesture session is cleared either way.
    pub fn pointer_up(&mut self, x: f32, now_sec: f64) {
        if let Some(start_x) = self.gesture_start_x.take() {
            let distance = x - start_x;
            if distance.abs() > self.config.swipe_threshold {
                self.flip(now_sec);
                self.swipe_consumed_click = true;
            }
        }
    }

    /// Direct activation (click/tap), available on both device classes.
    /// Gated so a swipe release never toggles twice.
    pub fn clicked(&mut self, now_sec: f64) {
        if std::mem::take(&mut self.swipe_consumed_click) {
            return;
        }
        self.flip(now_sec);
    }

    /// Toggle faces. Residual tilt is discarded rather than composed into
    /// the flip rotation.
    fn flip(&mut self, now_sec: f64) {
        self.flipped = !self.flipped;
        self.tilt_x = 0.0;
        self.tilt_y = 0.0;
        self.animating_until = Some(now_sec + self.config.flip_duration);
    }

    pub fn snapshot(&self, now_sec: f64) -> CardSnapshot {
        CardSnapshot {
            tilt_x: self.tilt_x,
            tilt_y: self.tilt_y,
            flipped: self.flipped,
            animating: self.is_animating(now_sec),
        }
    }
}
