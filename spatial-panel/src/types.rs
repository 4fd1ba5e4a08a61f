//! Core data types shared by the spatial widget controllers.
//!
//! Geometry is expressed with glam; public constructors accept any
//! mint-compatible vector so callers can pass `[f32; 3]`, `mint::Vector3`,
//! or `glam::Vec3` interchangeably.

/// 2D vector for window sizes and planar coordinates
pub type Vec2 = glam::Vec2;

/// 3D vector for world and local coordinates
pub type Vec3 = glam::Vec3;

/// Unit rotation
pub type Quat = glam::Quat;

/// Mint-compatible 2D vector type accepted at API seams
pub type MintVec2 = mint::Vector2<f32>;

/// Mint-compatible 3D vector type accepted at API seams
pub type MintVec3 = mint::Vector3<f32>;

/// Identifies one of the viewer's tracked hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    /// Left hand
    Left,
    /// Right hand
    Right,
}

impl Hand {
    /// The opposite hand
    pub fn other(self) -> Self {
        match self {
            Hand::Left => Hand::Right,
            Hand::Right => Hand::Left,
        }
    }
}

/// A placement in 3D space: position plus unit orientation.
///
/// The orientation is expected to be unit-length; callers must not feed
/// degenerate rotations. No renormalization is performed here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// World-space position
    pub position: Vec3,
    /// World-space orientation (unit quaternion)
    pub orientation: Quat,
}

impl Pose {
    /// Pose at the world origin with no rotation
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
    };

    /// Create a pose from a position and orientation
    pub fn new(position: impl Into<MintVec3>, orientation: Quat) -> Self {
        Self {
            position: Vec3::from(position.into()),
            orientation,
        }
    }

    /// Create an unrotated pose at the given position
    pub fn from_position(position: impl Into<MintVec3>) -> Self {
        Self::new(position, Quat::IDENTITY)
    }

    /// Transform a point from this pose's local frame into world space
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.position + self.orientation * local
    }

    /// Transform a world-space point into this pose's local frame
    pub fn inverse_transform_point(&self, world: Vec3) -> Vec3 {
        self.orientation.inverse() * (world - self.position)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}
