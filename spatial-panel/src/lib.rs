//! # spatial-panel - Spatial Control-Panel Widgets
//!
//! Interaction primitives for floating control panels in VR/AR: a
//! world-anchored window that can be grabbed, dragged, and auto-recentered,
//! and a rotary knob that maps 3D hand rotation to a bounded numeric value.
//!
//! Both controllers are self-contained state machines driven once per
//! display frame by a host render loop. They read nothing but the
//! [`FrameInput`] snapshot passed into each advance call, so they compose
//! with any tracking backend and are testable with synthetic input.
//!
//! ## Features
//!
//! - Pinch-grab detection with dominant-hand priority
//! - Relative (delta-based) dragging with no grab-start jump
//! - Idle-timeout auto-return with exponential-decay glide
//! - Value/angle mapping with grab-offset continuity and wraparound sweeps
//! - Tagged knob bindings for typed control dispatch
//!
//! ## Quick Start
//!
//! ```
//! use spatial_panel::{
//!     FrameInput, Gesture, HandSnapshot, HeadSnapshot, Pose, WindowConfig, WindowController,
//! };
//!
//! let mut window = WindowController::new(
//!     Pose::from_position([0.0, 1.2, -0.5]),
//!     [0.3, 0.2],
//!     WindowConfig::default(),
//! )?;
//!
//! // One display frame: the right hand pinches at the window center.
//! let hand = HandSnapshot::new(
//!     Gesture::TRACKED | Gesture::PINCH,
//!     [0.0, 1.2, -0.5],
//!     [0.0, 1.2, -0.5],
//! );
//! let input = FrameInput::new(
//!     HandSnapshot::untracked(),
//!     hand,
//!     HeadSnapshot::default(),
//!     1.0 / 60.0,
//! );
//! window.advance(&input);
//! assert!(window.grab_state().is_grabbed());
//! # Ok::<(), spatial_panel::PanelError>(())
//! ```

#![deny(rust_2018_idioms)]
#![cfg_attr(test, allow(clippy::float_cmp))]

pub use self::error::*;
pub use self::input::*;
pub use self::knob::*;
pub use self::panel::*;
pub use self::types::*;
pub use self::window::*;

mod error;
mod input;
mod knob;
mod panel;
mod types;
mod window;

// Geometric helpers, exported for hosts that lay out their own widgets
pub mod math;

// Tracing setup for hosts without their own subscriber
pub mod logging;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
