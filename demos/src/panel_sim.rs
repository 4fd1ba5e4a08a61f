//! Synthetic host loop driving a control panel without a headset.
//!
//! Simulates a right hand grabbing and dragging the panel window, turning a
//! knob, and then idling long enough for the auto-return glide to bring the
//! window back in front of the viewer. Run with
//! `RUST_LOG=spatial_panel=debug` to see the controllers' own transition
//! logs between the phase lines printed here.

use spatial_panel::{
    ControlPanel, FrameInput, Gesture, HandSnapshot, HeadSnapshot, KnobConfig, Pose, Vec3,
    WindowConfig, WindowController,
};
use tracing::info;

const DT: f32 = 1.0 / 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Binding {
    Volume,
}

fn head() -> HeadSnapshot {
    HeadSnapshot::new([0.0, 1.6, 0.0], [0.0, 0.0, -1.0])
}

fn right_hand(pinch_point: Vec3, gesture: Gesture) -> FrameInput {
    let hand = HandSnapshot::new(gesture, pinch_point, pinch_point);
    FrameInput::new(HandSnapshot::untracked(), hand, head(), DT)
}

fn no_hands() -> FrameInput {
    FrameInput::empty(head(), DT)
}

fn main() {
    spatial_panel::logging::init_tracing();

    // A short reset delay so the demo reaches the auto-return within seconds.
    let config = WindowConfig {
        reset_delay: 2.0,
        ..WindowConfig::default()
    };
    let window = WindowController::new(
        Pose::from_position([0.0, 1.2, -0.5]),
        [0.3, 0.2],
        config,
    )
    .expect("window config is valid");
    let mut panel = ControlPanel::new(window);
    panel
        .add_knob(Binding::Volume, [0.12, 0.0, 0.0], 0.5, KnobConfig::default())
        .expect("knob config is valid");

    info!("panel starts at {:?}", panel.window().pose().position);

    // Phase 1: grab the window and drag it half a meter to the right.
    let grab_point = panel.window().pose().position;
    panel.advance(&right_hand(grab_point, Gesture::TRACKED | Gesture::PINCH));
    for frame in 1..=60 {
        let palm = grab_point + Vec3::new(0.5 * frame as f32 / 60.0, 0.0, 0.0);
        panel.advance(&right_hand(palm, Gesture::TRACKED | Gesture::PINCH));
    }
    info!(
        "dragged to {:?} ({:?})",
        panel.window().pose().position,
        panel.window().grab_state()
    );

    // Phase 2: release.
    panel.advance(&right_hand(
        panel.window().pose().position,
        Gesture::TRACKED | Gesture::PINCH_ENDED,
    ));
    info!("released ({:?})", panel.window().grab_state());

    // Phase 3: turn the volume knob a quarter sweep. The pointer for value
    // 0.5 sits at 270 degrees in dial space; start the pinch right on it.
    let knob_center = panel.knob(Binding::Volume).unwrap().pose().position;
    let dial = |degrees: f32| {
        let radians = degrees.to_radians();
        knob_center + Vec3::new(radians.cos(), radians.sin(), 0.0) * 0.04
    };
    panel.advance(&right_hand(
        dial(270.0),
        Gesture::TRACKED | Gesture::PINCH | Gesture::PINCH_STARTED,
    ));
    for frame in 1..=30 {
        let degrees = 270.0 + 67.5 * frame as f32 / 30.0;
        panel.advance(&right_hand(dial(degrees), Gesture::TRACKED | Gesture::PINCH));
    }
    panel.advance(&right_hand(
        dial(337.5),
        Gesture::TRACKED | Gesture::PINCH_ENDED,
    ));
    info!(
        "volume turned to {:.3}",
        panel.value(Binding::Volume).unwrap()
    );

    // Phase 4: idle until the window glides back in front of the viewer.
    let mut frames = 0;
    loop {
        panel.advance(&no_hands());
        frames += 1;
        if frames > 60 * 60 {
            info!("gave up waiting for the glide");
            break;
        }
        let state = panel.window().grab_state();
        if frames > 121 && !state.is_resetting() {
            break;
        }
    }
    info!(
        "window settled at {:?} after {} idle frames",
        panel.window().pose().position,
        frames
    );
}
