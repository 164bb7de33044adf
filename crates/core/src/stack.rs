//! Stack module - the placed cake layers
//!
//! The stack is append-only during a run. Its last segment is always the
//! landing target for the next drop; a reset truncates it back to the base.

/// One placed layer of the tower.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackSegment {
    pub center_x: f32,
    pub width: f32,
}

impl StackSegment {
    pub fn new(center_x: f32, width: f32) -> Self {
        Self { center_x, width }
    }

    pub fn left(&self) -> f32 {
        self.center_x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.center_x + self.width / 2.0
    }
}

/// Ordered tower of segments, base first.
#[derive(Debug, Clone)]
pub struct Stack {
    segments: Vec<StackSegment>,
}

impl Stack {
    /// Create a stack holding only the base layer.
    pub fn new(base: StackSegment) -> Self {
        let mut segments = Vec::with_capacity(64);
        segments.push(base);
        Self { segments }
    }

    /// Current landing target.
    pub fn top(&self) -> StackSegment {
        // The base segment is never removed, so the stack is never empty.
        self.segments[self.segments.len() - 1]
    }

    pub fn push(&mut self, segment: StackSegment) {
        self.segments.push(segment);
    }

    /// Number of segments including the base.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Never true: the base layer is permanent.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[StackSegment] {
        &self.segments
    }

    /// Drop everything above the base layer.
    pub fn reset(&mut self, base: StackSegment) {
        self.segments.clear();
        self.segments.push(base);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stack_has_base_as_top() {
        let base = StackSegment::new(360.0, 400.0);
        let stack = Stack::new(base);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.top(), base);
        assert!(!stack.is_empty());
    }

    #[test]
    fn push_moves_top() {
        let mut stack = Stack::new(StackSegment::new(360.0, 400.0));
        stack.push(StackSegment::new(405.0, 310.0));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top(), StackSegment::new(405.0, 310.0));
    }

    #[test]
    fn reset_keeps_only_base() {
        let base = StackSegment::new(360.0, 400.0);
        let mut stack = Stack::new(base);
        for i in 0..5 {
            stack.push(StackSegment::new(360.0 + i as f32, 300.0));
        }
        stack.reset(base);
        assert_eq!(stack.segments(), &[base]);
    }

    #[test]
    fn segment_edges() {
        let s = StackSegment::new(360.0, 400.0);
        assert_eq!(s.left(), 160.0);
        assert_eq!(s.right(), 560.0);
    }
}
