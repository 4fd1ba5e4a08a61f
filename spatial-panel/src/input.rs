//! Per-frame input snapshots
//!
//! The controllers have no hidden dependency on a tracking service: every
//! geometric read they perform (hand poses, head pose, elapsed time) comes
//! from a [`FrameInput`] sampled once at the start of the frame and treated
//! as a consistent snapshot for the whole advance call. Hosts build one
//! snapshot per display frame from their tracking layer; tests build them
//! synthetically.

use bitflags::bitflags;

use crate::types::{Hand, MintVec3, Vec3};

bitflags! {
    /// Gesture signals reported by the tracking layer for one hand
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Gesture: u8 {
        /// The hand is currently tracked; all other signals are meaningless
        /// without this bit
        const TRACKED = 1 << 0;
        /// A pinch gesture is currently active
        const PINCH = 1 << 1;
        /// The pinch began this frame
        const PINCH_STARTED = 1 << 2;
        /// The pinch ended this frame
        const PINCH_ENDED = 1 << 3;
    }
}

/// One hand's tracking state for a single frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandSnapshot {
    /// Gesture signals for this frame
    pub gesture: Gesture,
    /// Tracked position of the palm center
    pub palm_position: Vec3,
    /// Tracked position of the fingertip pinch point, distinct from the palm
    pub pinch_position: Vec3,
}

impl HandSnapshot {
    /// Create a snapshot from gesture signals and tracked positions
    pub fn new(
        gesture: Gesture,
        palm_position: impl Into<MintVec3>,
        pinch_position: impl Into<MintVec3>,
    ) -> Self {
        Self {
            gesture,
            palm_position: Vec3::from(palm_position.into()),
            pinch_position: Vec3::from(pinch_position.into()),
        }
    }

    /// Snapshot of a hand the tracking layer cannot currently see
    pub fn untracked() -> Self {
        Self {
            gesture: Gesture::empty(),
            palm_position: Vec3::ZERO,
            pinch_position: Vec3::ZERO,
        }
    }

    /// Whether the hand is tracked this frame
    pub fn is_tracked(&self) -> bool {
        self.gesture.contains(Gesture::TRACKED)
    }

    /// Whether a pinch is active this frame
    pub fn is_pinching(&self) -> bool {
        self.gesture.contains(Gesture::PINCH)
    }

    /// Whether the pinch began this frame
    pub fn pinch_started(&self) -> bool {
        self.gesture.contains(Gesture::PINCH_STARTED)
    }

    /// Whether the pinch ended this frame
    pub fn pinch_ended(&self) -> bool {
        self.gesture.contains(Gesture::PINCH_ENDED)
    }
}

impl Default for HandSnapshot {
    fn default() -> Self {
        Self::untracked()
    }
}

/// The viewer's head state for a single frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadSnapshot {
    /// Head position in world space
    pub position: Vec3,
    /// Forward direction (unit vector)
    pub forward: Vec3,
}

impl HeadSnapshot {
    /// Create a head snapshot; `forward` must be unit-length
    pub fn new(position: impl Into<MintVec3>, forward: impl Into<MintVec3>) -> Self {
        Self {
            position: Vec3::from(position.into()),
            forward: Vec3::from(forward.into()),
        }
    }
}

impl Default for HeadSnapshot {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Vec3::NEG_Z,
        }
    }
}

/// Everything the controllers may read during one frame's advance call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    hands: [HandSnapshot; 2],
    /// Viewer head state
    pub head: HeadSnapshot,
    /// Seconds elapsed since the previous frame (>= 0)
    pub delta_seconds: f32,
    dominant: Hand,
}

impl FrameInput {
    /// Assemble a frame snapshot. The dominant hand defaults to [`Hand::Right`].
    pub fn new(
        left: HandSnapshot,
        right: HandSnapshot,
        head: HeadSnapshot,
        delta_seconds: f32,
    ) -> Self {
        Self {
            hands: [left, right],
            head,
            delta_seconds,
            dominant: Hand::Right,
        }
    }

    /// A frame with both hands untracked; useful for idle simulation
    pub fn empty(head: HeadSnapshot, delta_seconds: f32) -> Self {
        Self::new(
            HandSnapshot::untracked(),
            HandSnapshot::untracked(),
            head,
            delta_seconds,
        )
    }

    /// Override which hand is evaluated first by grab detection
    pub fn with_dominant(mut self, hand: Hand) -> Self {
        self.dominant = hand;
        self
    }

    /// The snapshot for one hand
    pub fn hand(&self, hand: Hand) -> &HandSnapshot {
        match hand {
            Hand::Left => &self.hands[0],
            Hand::Right => &self.hands[1],
        }
    }

    /// The hand grab detection evaluates first
    pub fn dominant(&self) -> Hand {
        self.dominant
    }

    /// Hands in grab-detection priority order, dominant first
    pub fn hands_by_priority(&self) -> [Hand; 2] {
        [self.dominant, self.dominant.other()]
    }

    /// Shared grab detection: the first tracked hand, in priority order,
    /// whose snapshot satisfies `predicate`.
    ///
    /// If the dominant hand qualifies it wins even when the other hand also
    /// qualifies the same frame.
    pub fn find_hand(&self, predicate: impl Fn(&HandSnapshot) -> bool) -> Option<Hand> {
        self.hands_by_priority().into_iter().find(|&hand| {
            let snapshot = self.hand(hand);
            snapshot.is_tracked() && predicate(snapshot)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pinching_at(position: [f32; 3]) -> HandSnapshot {
        HandSnapshot::new(Gesture::TRACKED | Gesture::PINCH, position, position)
    }

    #[test]
    fn test_dominant_hand_wins_ties() {
        let input = FrameInput::new(
            pinching_at([0.0, 0.0, 0.0]),
            pinching_at([0.0, 0.0, 0.0]),
            HeadSnapshot::default(),
            1.0 / 60.0,
        );
        assert_eq!(input.find_hand(|h| h.is_pinching()), Some(Hand::Right));

        let input = input.with_dominant(Hand::Left);
        assert_eq!(input.find_hand(|h| h.is_pinching()), Some(Hand::Left));
    }

    #[test]
    fn test_untracked_hands_never_qualify() {
        let mut snapshot = pinching_at([0.0, 0.0, 0.0]);
        snapshot.gesture.remove(Gesture::TRACKED);
        let input = FrameInput::new(
            snapshot,
            HandSnapshot::untracked(),
            HeadSnapshot::default(),
            1.0 / 60.0,
        );
        assert_eq!(input.find_hand(|_| true), None);
    }

    #[test]
    fn test_gesture_edges() {
        let snapshot = HandSnapshot::new(
            Gesture::TRACKED | Gesture::PINCH | Gesture::PINCH_STARTED,
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0],
        );
        assert!(snapshot.pinch_started());
        assert!(!snapshot.pinch_ended());
    }
}
