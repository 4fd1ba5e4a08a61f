//! Rotary knob control
//!
//! A [`KnobController`] owns a bounded scalar value, a value-to-angle
//! mapping, and the 3D pose it is drawn at. A pinch that starts inside the
//! knob's local interaction volume grabs the dial; while grabbed, the hand's
//! pinch point is converted to a planar angle in the knob's own frame and
//! back to a value. The angular offset between hand and pointer at grab
//! start is preserved for the whole grab, so the value never jumps to
//! wherever the hand happens to point.

use crate::error::{PanelError, PanelResult};
use crate::input::FrameInput;
use crate::math::{angle_to_point, normalize_angle};
use crate::types::{Hand, Pose, Vec3};

/// The local interaction volume extends this factor beyond the dial radius.
const GRAB_VOLUME_SCALE: f32 = 1.5;

/// Configuration for a [`KnobController`]
///
/// Angles are in degrees; `end_angle` may exceed 360 to encode a sweep that
/// wraps past the top of the circle (e.g. a 270° dial from 135° to 405°).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnobConfig {
    /// Smallest representable value
    pub minimum: f32,
    /// Largest representable value; must exceed `minimum`
    pub maximum: f32,
    /// Pointer angle at `minimum`, in degrees
    pub start_angle: f32,
    /// Pointer angle at `maximum`, in degrees; must exceed `start_angle`
    pub end_angle: f32,
    /// Dial radius, in meters; also sizes the interaction volume
    pub radius: f32,
}

impl Default for KnobConfig {
    fn default() -> Self {
        Self {
            minimum: 0.0,
            maximum: 1.0,
            start_angle: 135.0,
            end_angle: 405.0,
            radius: 0.05,
        }
    }
}

impl KnobConfig {
    /// Reject configurations that would make the angle mapping undefined
    pub fn validate(&self) -> PanelResult<()> {
        for (name, value) in [
            ("minimum", self.minimum),
            ("maximum", self.maximum),
            ("start_angle", self.start_angle),
            ("end_angle", self.end_angle),
            ("radius", self.radius),
        ] {
            if !value.is_finite() {
                return Err(PanelError::invalid_knob_config(format!(
                    "{name} must be finite (got {value})"
                )));
            }
        }
        if self.maximum <= self.minimum {
            return Err(PanelError::invalid_knob_config(format!(
                "maximum ({}) must exceed minimum ({})",
                self.maximum, self.minimum
            )));
        }
        if self.end_angle <= self.start_angle {
            return Err(PanelError::invalid_knob_config(format!(
                "end_angle ({}) must exceed start_angle ({})",
                self.end_angle, self.start_angle
            )));
        }
        if self.radius <= 0.0 {
            return Err(PanelError::invalid_knob_config(format!(
                "radius must be positive (got {})",
                self.radius
            )));
        }
        Ok(())
    }

    /// Pointer angle in radians for a value.
    ///
    /// Linear and unclamped: values outside `[minimum, maximum]` map to
    /// angles outside the configured sweep.
    pub fn value_angle(&self, value: f32) -> f32 {
        let t = (value - self.minimum) / (self.maximum - self.minimum);
        (self.start_angle + t * (self.end_angle - self.start_angle)).to_radians()
    }

    /// Value for a pointer angle in radians.
    ///
    /// The angle is first wrapped into one full turn, so any angle and that
    /// angle plus whole turns decode to the same value. The wrap seam is
    /// placed in the middle of the dial's dead zone (the part of the circle
    /// outside the sweep), keeping every in-range pointer angle safely away
    /// from it: the lower half of the dead zone decodes below `minimum`, the
    /// upper half above `maximum`. Like [`value_angle`](Self::value_angle)
    /// the linear map itself does not clamp.
    pub fn angle_value(&self, angle: f32) -> f32 {
        let dead_zone = (360.0 - (self.end_angle - self.start_angle)).max(0.0);
        let base = (self.start_angle - dead_zone * 0.5).to_radians();
        let wrapped = normalize_angle(angle, base);
        let degrees = wrapped.to_degrees();
        let t = (degrees - self.start_angle) / (self.end_angle - self.start_angle);
        self.minimum + t * (self.maximum - self.minimum)
    }

    /// Clamp a value into `[minimum, maximum]`
    pub fn clamp_value(&self, value: f32) -> f32 {
        value.clamp(self.minimum, self.maximum)
    }
}

#[derive(Debug, Clone, Copy)]
struct KnobGrab {
    hand: Hand,
    /// `angle_to_hand - value_angle(value)` captured at grab start
    angle_offset: f32,
}

/// Pinch-driven rotary dial mapping hand rotation to a bounded value
#[derive(Debug, Clone)]
pub struct KnobController {
    config: KnobConfig,
    pose: Pose,
    value: f32,
    grab: Option<KnobGrab>,
}

impl KnobController {
    /// Create a knob at the given pose.
    ///
    /// The initial value is clamped into the configured range. Fails if the
    /// configuration is invalid; see [`KnobConfig::validate`].
    pub fn new(pose: Pose, initial_value: f32, config: KnobConfig) -> PanelResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            pose,
            value: config.clamp_value(initial_value),
            grab: None,
        })
    }

    /// Current value, always within `[minimum, maximum]`
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the value externally; clamped into range
    pub fn set_value(&mut self, value: f32) {
        self.value = self.config.clamp_value(value);
    }

    /// The knob's world pose
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Reposition the knob (e.g. to follow a host window's pose)
    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    /// Active configuration
    pub fn config(&self) -> &KnobConfig {
        &self.config
    }

    /// Whether a hand currently holds the dial
    pub fn is_grabbed(&self) -> bool {
        self.grab.is_some()
    }

    /// The hand holding the dial, if any
    pub fn grabbing_hand(&self) -> Option<Hand> {
        self.grab.map(|g| g.hand)
    }

    /// Pointer angle in radians for the current value
    pub fn pointer_angle(&self) -> f32 {
        self.config.value_angle(self.value)
    }

    /// Knob-local position of the pointer geometry:
    /// `radius * (cos θ, sin θ, 0)`
    pub fn pointer_position(&self) -> Vec3 {
        let angle = self.pointer_angle();
        Vec3::new(angle.cos(), angle.sin(), 0.0) * self.config.radius
    }

    /// World-space position of the pointer geometry
    pub fn pointer_world_position(&self) -> Vec3 {
        self.pose.transform_point(self.pointer_position())
    }

    /// Advance one display frame; call exactly once per frame, after any
    /// host-driven [`set_pose`](Self::set_pose) for this frame.
    pub fn advance(&mut self, input: &FrameInput) {
        match self.grab {
            Some(grab) => self.advance_grabbed(grab, input),
            None => self.try_begin_grab(input),
        }
    }

    /// Whether a world-space point lies inside the local interaction volume
    fn volume_contains(&self, world_point: Vec3) -> bool {
        let local = self.pose.inverse_transform_point(world_point);
        local.abs().max_element() <= self.config.radius * GRAB_VOLUME_SCALE
    }

    fn try_begin_grab(&mut self, input: &FrameInput) {
        let candidate =
            input.find_hand(|hand| hand.pinch_started() && self.volume_contains(hand.pinch_position));
        if let Some(hand) = candidate {
            let angle_to_hand = angle_to_point(&self.pose, input.hand(hand).pinch_position);
            // The offset keeps value_angle(value) + offset == angle_to_hand
            // at this instant, so the first grabbed frame reproduces the
            // current value exactly.
            let angle_offset = angle_to_hand - self.config.value_angle(self.value);
            self.grab = Some(KnobGrab { hand, angle_offset });
            crate::panel_debug!("knob grabbed by {:?} hand", hand);
        }
    }

    fn advance_grabbed(&mut self, grab: KnobGrab, input: &FrameInput) {
        let snapshot = input.hand(grab.hand);
        // Unpinch or tracking loss releases; no residual motion is applied.
        if !snapshot.is_tracked() || !snapshot.is_pinching() {
            self.grab = None;
            crate::panel_debug!("knob released at value {}", self.value);
            return;
        }
        let angle = angle_to_point(&self.pose, snapshot.pinch_position) - grab.angle_offset;
        self.value = self.config.clamp_value(self.config.angle_value(angle));
    }
}
