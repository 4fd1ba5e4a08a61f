//! Geometric helpers for the interaction controllers

use crate::types::{Pose, Vec3};
use std::f32::consts::TAU;

/// Horizontal projections shorter than this are considered degenerate
/// (viewer looking almost straight up or down).
const MIN_HORIZONTAL_LENGTH_SQ: f32 = 1e-6;

/// Exponential-decay step toward a target.
///
/// Each call moves a fraction `delta_seconds * speed` of the remaining
/// distance, so repeated calls approach the target asymptotically rather
/// than in linear time. The fraction is clamped to `[0, 1]` so a single
/// oversized frame delta cannot overshoot past the target.
pub fn approach(current: Vec3, target: Vec3, delta_seconds: f32, speed: f32) -> Vec3 {
    let t = (delta_seconds * speed).clamp(0.0, 1.0);
    current.lerp(target, t)
}

/// Project a direction onto the horizontal (XZ) plane and renormalize.
///
/// Returns `fallback` when the projection is degenerate, which happens when
/// the direction points almost straight up or down.
pub fn horizontal_direction(dir: Vec3, fallback: Vec3) -> Vec3 {
    let flat = Vec3::new(dir.x, 0.0, dir.z);
    if flat.length_squared() < MIN_HORIZONTAL_LENGTH_SQ {
        fallback
    } else {
        flat.normalize()
    }
}

/// Wrap an angle in radians into `[base, base + 2π)`.
pub fn normalize_angle(angle: f32, base: f32) -> f32 {
    base + (angle - base).rem_euclid(TAU)
}

/// Angle of a world-space point in the XY-plane of a pose's local frame.
///
/// The point is transformed into the pose's local frame and the angle is the
/// two-argument arctangent of its local Y and X components, in `(-π, π]`.
/// The result is invariant under any rigid motion applied to both the pose
/// and the point together.
pub fn angle_to_point(pose: &Pose, world_point: Vec3) -> f32 {
    let local = pose.inverse_transform_point(world_point);
    local.y.atan2(local.x)
}
