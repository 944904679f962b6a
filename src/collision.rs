//! Proximity tests between entity bounding boxes.
//!
//! Every contact in the game is "center distance strictly below a
//! threshold": half-width sum for enemies, fixed radii for the hazard and
//! the coin. Hazard counts are single digits, so the checks are a plain
//! linear scan.

use crate::entities::Rect;

/// Euclidean distance between the centers of two boxes.
pub fn center_distance(a: &Rect, b: &Rect) -> f32 {
    a.center().distance(b.center())
}

/// True when the centers are closer than `threshold`. Exactly `threshold`
/// apart is not a contact.
pub fn within(a: &Rect, b: &Rect, threshold: f32) -> bool {
    center_distance(a, b) < threshold
}

/// Sum of the half widths, used as the contact radius for sprite vs sprite.
pub fn half_width_sum(a: &Rect, b: &Rect) -> f32 {
    a.size.x / 2.0 + b.size.x / 2.0
}

/// Sprite vs sprite contact, approximating both boxes as circles.
pub fn touching(a: &Rect, b: &Rect) -> bool {
    within(a, b, half_width_sum(a, b))
}

