//! The recursive hand tree.
//!
//! Every node draws a "minute" and a "second" hand from its origin, then
//! spawns two children: one at the minute tip, one at the second tip. Each
//! child inherits the parent's accumulated angle (`previous_gradient`) plus
//! the driver of the hand it grows from, so the tree rotates as a whole and
//! folds into itself as time advances.
//!
//! Tree geometry lives directly in canvas space (+Y down). Together with
//! [`PHASE_SHIFT`] this places tick 0 at 12 o'clock and sweeps clockwise.

use crate::canvas::Canvas;
use crate::color::branch_color;
use crate::config::MAX_SUPPORTED_DEPTH;
use crate::geometry::Point;
use crate::hand::create_hand;
use crate::time::Drivers;

/// Child hands are this fraction of their parent.
pub const LENGTH_DECAY: f64 = 0.7;

/// Quarter-revolution phase applied to every hand at every depth.
pub const PHASE_SHIFT: i64 = -1500;

pub const SECOND_HAND_THICKNESS: f64 = 1.5;
pub const MINUTE_HAND_THICKNESS: f64 = 2.0;

/// Number of segments a full tree of `max_depth` strokes, saturating at
/// `u64::MAX` for depths whose count does not fit.
#[inline]
pub fn segment_count(max_depth: u32) -> u64 {
    1u64.checked_shl(max_depth.saturating_add(1))
        .map_or(u64::MAX, |nodes| 2 * (nodes - 1))
}

/// Per-frame parameters shared by every node.
///
/// Only `previous_gradient`, the origin and the length change going down the
/// tree; the drivers are fixed for the whole frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FractalTree {
    seconds: i64,
    minutes: i64,
    max_depth: u32,
    ticks_per_revolution: f64,
}

impl FractalTree {
    /// Depths above [`MAX_SUPPORTED_DEPTH`] are clamped to it.
    pub fn new(drivers: Drivers, max_depth: u32, ticks_per_revolution: f64) -> Self {
        if max_depth > MAX_SUPPORTED_DEPTH {
            log::warn!("fractal depth {max_depth} clamped to {MAX_SUPPORTED_DEPTH}");
        }
        Self {
            seconds: drivers.seconds,
            minutes: drivers.minutes,
            max_depth: max_depth.min(MAX_SUPPORTED_DEPTH),
            ticks_per_revolution,
        }
    }

    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Draws the whole tree rooted at `center`.
    ///
    /// `seed_length` is the length the root decays from, so root hands are
    /// `seed_length * LENGTH_DECAY` long.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, center: Point, seed_length: f64) {
        self.draw_fractal(canvas, 0, center, 0, seed_length);
    }

    /// Draws one node and, depth permitting, both of its subtrees.
    ///
    /// Visit order is depth-first, minute branch before second branch.
    pub fn draw_fractal<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        previous_gradient: i64,
        center: Point,
        depth: u32,
        previous_length: f64,
    ) {
        let length = previous_length * LENGTH_DECAY;

        let minute_hand = create_hand(
            previous_gradient + self.minutes + PHASE_SHIFT,
            length,
            self.ticks_per_revolution,
        );
        let second_hand = create_hand(
            previous_gradient + self.seconds + PHASE_SHIFT,
            length,
            self.ticks_per_revolution,
        );

        let color = branch_color(depth, self.max_depth);
        let minute_tip = center + minute_hand;
        let second_tip = center + second_hand;

        canvas.stroke_line(SECOND_HAND_THICKNESS, center, second_tip, color);
        canvas.stroke_line(MINUTE_HAND_THICKNESS, center, minute_tip, color);

        if depth + 1 > self.max_depth {
            return;
        }

        self.draw_fractal(canvas, previous_gradient + self.minutes, minute_tip, depth + 1, length);
        self.draw_fractal(canvas, previous_gradient + self.seconds, second_tip, depth + 1, length);
    }
}
