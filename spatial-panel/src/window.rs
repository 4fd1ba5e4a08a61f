//! World-anchored grabbable window
//!
//! A [`WindowController`] owns a window's pose and size, detects pinch-grabs
//! against that pose, applies hand-relative dragging while grabbed, and after
//! a configurable idle period glides the window back to a position anchored
//! in front of the viewer. It is driven once per display frame by the host
//! loop via [`WindowController::advance`].

use crate::error::{PanelError, PanelResult};
use crate::input::FrameInput;
use crate::math::{approach, horizontal_direction};
use crate::types::{Hand, MintVec2, Pose, Vec2, Vec3};

/// Horizontal forward used when the viewer is looking straight up or down
/// at the instant a reset target is computed.
const RESET_FORWARD_FALLBACK: Vec3 = Vec3::NEG_Z;

/// Configuration for a [`WindowController`]
///
/// Plain numeric fields, validated at construction: every field must be
/// finite and positive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowConfig {
    /// Maximum palm-to-window distance for a grab, in meters
    pub grab_distance: f32,
    /// Idle seconds with no grab before the window glides back to the viewer
    pub reset_delay: f32,
    /// Distance below which a reset glide is considered converged, in meters
    pub reset_epsilon: f32,
    /// Glide rate: fraction of the remaining distance covered per second
    pub glide_speed: f32,
    /// Forward offset from the viewer's head for the reset anchor, in meters
    pub anchor_distance: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            grab_distance: 0.1,
            reset_delay: 60.0,
            reset_epsilon: 0.01,
            glide_speed: 5.0,
            anchor_distance: 0.5,
        }
    }
}

impl WindowConfig {
    /// Reject non-finite or non-positive fields
    pub fn validate(&self) -> PanelResult<()> {
        let fields = [
            ("grab_distance", self.grab_distance),
            ("reset_delay", self.reset_delay),
            ("reset_epsilon", self.reset_epsilon),
            ("glide_speed", self.glide_speed),
            ("anchor_distance", self.anchor_distance),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(PanelError::invalid_window_config(format!(
                    "{name} must be finite and positive (got {value})"
                )));
            }
        }
        Ok(())
    }
}

/// The window's interaction state; exactly one at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrabState {
    /// Not held; the idle timer accumulates
    Idle,
    /// Held by one hand, following its palm
    Grabbed(Hand),
    /// Gliding back toward the viewer-anchored target
    Resetting,
}

impl GrabState {
    /// Whether a hand currently holds the window
    pub fn is_grabbed(&self) -> bool {
        matches!(self, GrabState::Grabbed(_))
    }

    /// Whether a reset glide is in flight
    pub fn is_resetting(&self) -> bool {
        matches!(self, GrabState::Resetting)
    }
}

/// Grab-and-drag controller for a world-anchored window
#[derive(Debug, Clone)]
pub struct WindowController {
    config: WindowConfig,
    pose: Pose,
    size: Vec2,
    state: GrabState,
    idle_elapsed: f32,
    last_palm_position: Vec3,
    target_position: Vec3,
}

impl WindowController {
    /// Create a controller at the given pose with the given face size.
    ///
    /// Fails if the configuration is invalid; see [`WindowConfig::validate`].
    pub fn new(pose: Pose, size: impl Into<MintVec2>, config: WindowConfig) -> PanelResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            pose,
            size: Vec2::from(size.into()),
            state: GrabState::Idle,
            idle_elapsed: 0.0,
            last_palm_position: Vec3::ZERO,
            target_position: pose.position,
        })
    }

    /// Current window placement, used by the host as a draw transform and as
    /// the anchor for window-relative controls
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Window face size
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Current interaction state
    pub fn grab_state(&self) -> GrabState {
        self.state
    }

    /// Seconds since the last release; accumulates only while idle
    pub fn idle_elapsed(&self) -> f32 {
        self.idle_elapsed
    }

    /// The glide destination, if a reset is in flight
    pub fn reset_target(&self) -> Option<Vec3> {
        self.state.is_resetting().then_some(self.target_position)
    }

    /// Active configuration
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Reposition the window externally (host-driven placement)
    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    /// Advance one display frame.
    ///
    /// All reads come from `input`, sampled once by the host at the start of
    /// the frame. Call exactly once per frame.
    pub fn advance(&mut self, input: &FrameInput) {
        match self.state {
            GrabState::Grabbed(hand) => self.advance_grabbed(hand, input),
            GrabState::Idle => self.advance_idle(input),
            GrabState::Resetting => self.advance_resetting(input),
        }
    }

    /// First hand (dominant wins ties) pinching within grab range of the
    /// window center
    fn grab_candidate(&self, input: &FrameInput) -> Option<Hand> {
        let center = self.pose.position;
        let max_distance = self.config.grab_distance;
        input.find_hand(|hand| {
            hand.is_pinching() && hand.palm_position.distance(center) < max_distance
        })
    }

    fn begin_grab(&mut self, hand: Hand, input: &FrameInput) {
        self.last_palm_position = input.hand(hand).palm_position;
        self.idle_elapsed = 0.0;
        self.state = GrabState::Grabbed(hand);
        crate::panel_debug!("window grabbed by {:?} hand", hand);
    }

    fn advance_grabbed(&mut self, hand: Hand, input: &FrameInput) {
        let snapshot = input.hand(hand);
        // Tracking loss is an implicit release on the frame it is observed.
        if !snapshot.is_tracked() || !snapshot.is_pinching() {
            self.idle_elapsed = 0.0;
            self.state = GrabState::Idle;
            crate::panel_debug!("window released");
            return;
        }
        // Relative tracking: the palm-to-window offset at grab start is
        // preserved, so the window never jumps to the palm.
        let delta = snapshot.palm_position - self.last_palm_position;
        self.pose.position += delta;
        self.last_palm_position = snapshot.palm_position;
    }

    fn advance_idle(&mut self, input: &FrameInput) {
        if let Some(hand) = self.grab_candidate(input) {
            self.begin_grab(hand, input);
            return;
        }
        self.idle_elapsed += input.delta_seconds;
        if self.idle_elapsed >= self.config.reset_delay {
            // The target is fixed for the whole episode from the head state
            // at the instant the threshold is crossed.
            let forward = horizontal_direction(input.head.forward, RESET_FORWARD_FALLBACK);
            self.target_position = input.head.position + forward * self.config.anchor_distance;
            self.state = GrabState::Resetting;
            crate::panel_trace!("window reset started toward {:?}", self.target_position);
        }
    }

    fn advance_resetting(&mut self, input: &FrameInput) {
        // A qualifying grab cancels the glide immediately.
        if let Some(hand) = self.grab_candidate(input) {
            self.begin_grab(hand, input);
            return;
        }
        self.pose.position = approach(
            self.pose.position,
            self.target_position,
            input.delta_seconds,
            self.config.glide_speed,
        );
        if self.pose.position.distance(self.target_position) < self.config.reset_epsilon {
            self.idle_elapsed = 0.0;
            self.state = GrabState::Idle;
            crate::panel_trace!("window reset complete");
        }
    }
}
