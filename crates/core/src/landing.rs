//! Landing resolver - classifies a dropped layer against the top of the stack
//!
//! ```text
//! overlap = piece.width/2 + top.width/2 - |piece.x - top.x|
//! ```
//!
//! - `overlap <= 0`: miss, the run ends.
//! - `|piece.x - top.x| < perfect_threshold`: perfect. The new segment copies
//!   the top segment exactly (center and width), so long perfect streaks never
//!   accumulate drift.
//! - Otherwise partial: the new width is `max(min_width, overlap)`; a clamped
//!   width at or below `min_width` is a miss. The surviving part stays flush
//!   with the edge of the top segment the piece overhung.
//!
//! This module is pure: no state, no randomness, no events.

use crate::stack::StackSegment;
use crate::types::{LandingKind, MissReason, Side, CUT_PIECE_MIN_WIDTH};

/// Thresholds used to classify a drop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingRules {
    pub perfect_threshold: f32,
    pub min_width: f32,
}

/// The part of a partial drop that hangs over the edge and falls away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutPiece {
    pub center_x: f32,
    pub width: f32,
    pub side: Side,
}

/// Outcome of resolving one drop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Landing {
    Miss {
        overlap: f32,
        reason: MissReason,
    },
    Perfect {
        overlap: f32,
        segment: StackSegment,
    },
    Partial {
        overlap: f32,
        segment: StackSegment,
        cut: Option<CutPiece>,
    },
}

impl Landing {
    pub fn kind(&self) -> LandingKind {
        match self {
            Landing::Miss { .. } => LandingKind::Miss,
            Landing::Perfect { .. } => LandingKind::Perfect,
            Landing::Partial { .. } => LandingKind::Partial,
        }
    }

    pub fn overlap(&self) -> f32 {
        match *self {
            Landing::Miss { overlap, .. }
            | Landing::Perfect { overlap, .. }
            | Landing::Partial { overlap, .. } => overlap,
        }
    }

    /// Segment to append to the stack, if the drop survived.
    pub fn segment(&self) -> Option<StackSegment> {
        match *self {
            Landing::Miss { .. } => None,
            Landing::Perfect { segment, .. } | Landing::Partial { segment, .. } => Some(segment),
        }
    }

    pub fn cut(&self) -> Option<CutPiece> {
        match *self {
            Landing::Partial { cut, .. } => cut,
            _ => None,
        }
    }
}

/// Horizontal overlap between a piece and the segment below it.
///
/// Non-positive when the two do not touch.
pub fn overlap(drop_x: f32, drop_width: f32, top: &StackSegment) -> f32 {
    drop_width / 2.0 + top.width / 2.0 - (drop_x - top.center_x).abs()
}

/// Resolve a frozen piece at `drop_x` with `drop_width` against `top`.
///
/// # Examples
///
/// ```
/// use cake_tower_core::landing::{resolve, LandingRules};
/// use cake_tower_core::StackSegment;
/// use cake_tower_core::types::LandingKind;
///
/// let rules = LandingRules { perfect_threshold: 15.0, min_width: 30.0 };
/// let top = StackSegment::new(360.0, 400.0);
///
/// let landing = resolve(450.0, 400.0, &top, &rules);
/// assert_eq!(landing.kind(), LandingKind::Partial);
/// assert_eq!(landing.segment(), Some(StackSegment::new(405.0, 310.0)));
/// ```
pub fn resolve(drop_x: f32, drop_width: f32, top: &StackSegment, rules: &LandingRules) -> Landing {
    let overlap = overlap(drop_x, drop_width, top);
    if overlap <= 0.0 {
        return Landing::Miss {
            overlap,
            reason: MissReason::NoOverlap,
        };
    }

    if (drop_x - top.center_x).abs() < rules.perfect_threshold {
        return Landing::Perfect {
            overlap,
            segment: *top,
        };
    }

    let new_width = overlap.max(rules.min_width);
    if new_width <= rules.min_width {
        return Landing::Miss {
            overlap,
            reason: MissReason::TooThin,
        };
    }

    let side = if drop_x > top.center_x {
        Side::Right
    } else {
        Side::Left
    };
    let center_x = match side {
        Side::Right => top.center_x + top.width / 2.0 - overlap / 2.0,
        Side::Left => top.center_x - top.width / 2.0 + overlap / 2.0,
    };

    Landing::Partial {
        overlap,
        segment: StackSegment::new(center_x, new_width),
        cut: cut_piece(drop_x, drop_width, overlap, side),
    }
}

/// Overhanging remainder of a partial drop, positioned on the piece's outer edge.
fn cut_piece(drop_x: f32, drop_width: f32, overlap: f32, side: Side) -> Option<CutPiece> {
    let width = drop_width - overlap;
    if width <= CUT_PIECE_MIN_WIDTH {
        return None;
    }
    let center_x = drop_x + side.sign() * (drop_width / 2.0 - width / 2.0);
    Some(CutPiece {
        center_x,
        width,
        side,
    })
}
