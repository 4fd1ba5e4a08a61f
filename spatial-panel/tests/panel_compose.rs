use approx::assert_relative_eq;
use pretty_assertions::assert_eq;
use spatial_panel::{
    ControlPanel, FrameInput, Gesture, HandSnapshot, HeadSnapshot, KnobConfig, Pose, Quat, Vec3,
    WindowConfig, WindowController,
};

const DT: f32 = 1.0 / 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Binding {
    Volume,
    Balance,
}

fn panel_at(position: [f32; 3]) -> ControlPanel<Binding> {
    let window = WindowController::new(
        Pose::from_position(position),
        [0.3, 0.2],
        WindowConfig::default(),
    )
    .unwrap();
    let mut panel = ControlPanel::new(window);
    panel
        .add_knob(Binding::Volume, [0.12, 0.0, 0.0], 0.5, KnobConfig::default())
        .unwrap();
    panel
        .add_knob(
            Binding::Balance,
            [-0.12, 0.0, 0.0],
            0.0,
            KnobConfig::default(),
        )
        .unwrap();
    panel
}

fn right_pinch(palm: [f32; 3]) -> FrameInput {
    let hand = HandSnapshot::new(Gesture::TRACKED | Gesture::PINCH, palm, palm);
    FrameInput::new(
        HandSnapshot::untracked(),
        hand,
        HeadSnapshot::default(),
        DT,
    )
}

fn left_pinch_start(pinch: Vec3) -> FrameInput {
    let hand = HandSnapshot::new(
        Gesture::TRACKED | Gesture::PINCH | Gesture::PINCH_STARTED,
        pinch,
        pinch,
    );
    FrameInput::new(
        hand,
        HandSnapshot::untracked(),
        HeadSnapshot::default(),
        DT,
    )
}

fn left_pinch_hold(pinch: Vec3) -> FrameInput {
    let hand = HandSnapshot::new(Gesture::TRACKED | Gesture::PINCH, pinch, pinch);
    FrameInput::new(
        hand,
        HandSnapshot::untracked(),
        HeadSnapshot::default(),
        DT,
    )
}

#[test]
fn knobs_follow_a_dragged_window_in_the_same_frame() {
    let mut panel = panel_at([0.0, 1.0, -0.5]);

    // Grab the window dead center, then drag it.
    panel.advance(&right_pinch([0.0, 1.0, -0.5]));
    panel.advance(&right_pinch([0.2, 1.1, -0.5]));

    let window_position = panel.window().pose().position;
    assert_relative_eq!(
        window_position,
        Vec3::new(0.2, 1.1, -0.5),
        epsilon = 1e-6
    );

    // The knob pose was derived from this frame's window pose, not last
    // frame's.
    let knob = panel.knob(Binding::Volume).unwrap();
    assert_relative_eq!(
        knob.pose().position,
        window_position + Vec3::new(0.12, 0.0, 0.0),
        epsilon = 1e-6
    );
}

#[test]
fn knob_anchors_rotate_with_the_window() {
    let mut panel = panel_at([0.0, 1.0, -0.5]);
    let rotated = Pose::new([0.0, 1.0, -0.5], Quat::from_rotation_z(std::f32::consts::FRAC_PI_2));
    panel.window_mut().set_pose(rotated);

    panel.advance(&FrameInput::empty(HeadSnapshot::default(), DT));

    // A +X anchor lands on the window's rotated +X axis, i.e. world +Y.
    let knob = panel.knob(Binding::Volume).unwrap();
    assert_relative_eq!(
        knob.pose().position,
        Vec3::new(0.0, 1.12, -0.5),
        epsilon = 1e-6
    );
    assert_relative_eq!(
        (knob.pose().orientation * Vec3::X).y,
        1.0,
        epsilon = 1e-6
    );
}

#[test]
fn a_knob_can_be_turned_on_an_idle_panel() {
    let mut panel = panel_at([0.0, 1.0, -0.5]);
    let knob_center = Vec3::new(0.12, 1.0, -0.5);

    // Pinch on the dial plane at the pointer's current angle (value 0.5 of
    // the default 135..405 sweep is 270 degrees, straight down in dial
    // space), then turn by +27 degrees: one tenth of the sweep.
    let pointer = knob_center + Vec3::new(0.0, -0.04, 0.0);
    panel.advance(&left_pinch_start(pointer));
    assert!(panel.knob(Binding::Volume).unwrap().is_grabbed());

    let turned = {
        let radians = (270.0f32 + 27.0).to_radians();
        knob_center + Vec3::new(radians.cos(), radians.sin(), 0.0) * 0.04
    };
    panel.advance(&left_pinch_hold(turned));

    assert_relative_eq!(
        panel.value(Binding::Volume).unwrap(),
        0.6,
        epsilon = 1e-3
    );
    // The other knob is untouched.
    assert_relative_eq!(panel.value(Binding::Balance).unwrap(), 0.0);
}

#[test]
fn bindings_enumerate_in_mount_order() {
    let panel = panel_at([0.0, 0.0, 0.0]);
    let bindings: Vec<_> = panel.bindings().collect();
    assert_eq!(bindings, vec![Binding::Volume, Binding::Balance]);
}

#[test]
fn window_grab_does_not_steal_a_knob_pinch() {
    let mut panel = panel_at([0.0, 1.0, -0.5]);

    // The knob anchor sits 12 cm from the window center: outside the 10 cm
    // window grab range, inside the knob volume.
    let knob_center = Vec3::new(0.12, 1.0, -0.5);
    panel.advance(&left_pinch_start(knob_center));

    assert!(!panel.window().grab_state().is_grabbed());
    assert!(panel.knob(Binding::Volume).unwrap().is_grabbed());
}
