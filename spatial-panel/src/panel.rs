//! Control-panel composition
//!
//! A [`ControlPanel`] owns one grabbable window and any number of rotary
//! knobs mounted on it at window-local anchors. Each knob is identified by a
//! caller-supplied binding tag (typically a small enum), which selects the
//! bounded quantity that knob adjusts. Per frame, the window's own
//! grab/release/reset logic runs first; each knob's world pose is then
//! re-derived from the finalized window pose before that knob advances, so
//! knob interactions always see the window placement of the current frame.

use core::fmt;

use crate::error::{PanelError, PanelResult};
use crate::input::FrameInput;
use crate::knob::{KnobConfig, KnobController};
use crate::types::{MintVec3, Pose, Vec3};
use crate::window::WindowController;

/// A knob mounted on the panel at a window-local anchor
#[derive(Debug, Clone)]
struct MountedKnob<B> {
    binding: B,
    anchor: Vec3,
    controller: KnobController,
}

/// A grabbable window hosting zero or more bound rotary knobs.
///
/// `B` is the binding tag type; using an enum gives each knob a typed
/// identity instead of a string label:
///
/// ```
/// use spatial_panel::{ControlPanel, KnobConfig, Pose, WindowConfig, WindowController};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Binding {
///     Volume,
///     Hue,
/// }
///
/// let window = WindowController::new(
///     Pose::from_position([0.0, 1.2, -0.5]),
///     [0.3, 0.2],
///     WindowConfig::default(),
/// )
/// .unwrap();
/// let mut panel = ControlPanel::new(window);
/// panel
///     .add_knob(Binding::Volume, [-0.08, 0.0, 0.0], 0.5, KnobConfig::default())
///     .unwrap();
/// panel
///     .add_knob(Binding::Hue, [0.08, 0.0, 0.0], 0.0, KnobConfig::default())
///     .unwrap();
/// assert_eq!(panel.value(Binding::Volume), Some(0.5));
/// ```
#[derive(Debug, Clone)]
pub struct ControlPanel<B> {
    window: WindowController,
    knobs: Vec<MountedKnob<B>>,
}

impl<B: Copy + PartialEq + fmt::Debug> ControlPanel<B> {
    /// Create a panel around an existing window controller
    pub fn new(window: WindowController) -> Self {
        Self {
            window,
            knobs: Vec::new(),
        }
    }

    /// Mount a knob at a window-local anchor, bound to `binding`.
    ///
    /// Fails if `binding` is already in use on this panel or if the knob
    /// configuration is invalid.
    pub fn add_knob(
        &mut self,
        binding: B,
        anchor: impl Into<MintVec3>,
        initial_value: f32,
        config: KnobConfig,
    ) -> PanelResult<()> {
        if self.knobs.iter().any(|knob| knob.binding == binding) {
            return Err(PanelError::duplicate_binding(format!("{binding:?}")));
        }
        let anchor = Vec3::from(anchor.into());
        let pose = self.knob_world_pose(anchor);
        self.knobs.push(MountedKnob {
            binding,
            anchor,
            controller: KnobController::new(pose, initial_value, config)?,
        });
        Ok(())
    }

    /// The hosted window
    pub fn window(&self) -> &WindowController {
        &self.window
    }

    /// Mutable access to the hosted window, e.g. for host-driven placement
    pub fn window_mut(&mut self) -> &mut WindowController {
        &mut self.window
    }

    /// The knob bound to `binding`, if any
    pub fn knob(&self, binding: B) -> Option<&KnobController> {
        self.knobs
            .iter()
            .find(|knob| knob.binding == binding)
            .map(|knob| &knob.controller)
    }

    /// The current value of the knob bound to `binding`, if any
    pub fn value(&self, binding: B) -> Option<f32> {
        self.knob(binding).map(KnobController::value)
    }

    /// Binding tags of every mounted knob, in mount order
    pub fn bindings(&self) -> impl Iterator<Item = B> + '_ {
        self.knobs.iter().map(|knob| knob.binding)
    }

    /// Advance one display frame: the window first, then every knob against
    /// the finalized window pose.
    pub fn advance(&mut self, input: &FrameInput) {
        self.window.advance(input);
        let pose = self.window.pose();
        for knob in &mut self.knobs {
            knob.controller.set_pose(Pose {
                position: pose.transform_point(knob.anchor),
                orientation: pose.orientation,
            });
            knob.controller.advance(input);
        }
    }

    fn knob_world_pose(&self, anchor: Vec3) -> Pose {
        let pose = self.window.pose();
        Pose {
            position: pose.transform_point(anchor),
            orientation: pose.orientation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowConfig;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Binding {
        Red,
        Green,
    }

    fn panel() -> ControlPanel<Binding> {
        let window =
            WindowController::new(Pose::IDENTITY, [0.3, 0.2], WindowConfig::default()).unwrap();
        ControlPanel::new(window)
    }

    #[test]
    fn test_duplicate_binding_rejected() {
        let mut panel = panel();
        panel
            .add_knob(Binding::Red, [0.0, 0.0, 0.0], 0.5, KnobConfig::default())
            .unwrap();
        let err = panel
            .add_knob(Binding::Red, [0.1, 0.0, 0.0], 0.5, KnobConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("Red"));
    }

    #[test]
    fn test_unknown_binding_lookup() {
        let mut panel = panel();
        panel
            .add_knob(Binding::Red, [0.0, 0.0, 0.0], 0.25, KnobConfig::default())
            .unwrap();
        assert_eq!(panel.value(Binding::Red), Some(0.25));
        assert_eq!(panel.value(Binding::Green), None);
    }
}
