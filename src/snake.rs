//! The snake: an ordered chain of segments, head first
//!
//! Every segment carries its own velocity. On each tick the head takes the
//! pending direction and every follower takes the velocity its predecessor
//! had before the tick, so the body retraces the head's path one tick behind
//! without storing any position history.

use crate::direction::Direction;
use crate::grid::{Grid, Position};

/// One cell of the snake's body
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Segment {
    pub position: Position,
    pub velocity: Direction,
    /// Creation order, never reused. Not part of any collision check.
    pub id: u64,
}

#[derive(Debug, Clone)]
pub struct Snake {
    /// Body segments, with head at index 0. Never empty.
    segments: Vec<Segment>,
    /// Velocity the head takes on the next tick
    pending: Direction,
    next_id: u64,
    grid: Grid,
}

impl Snake {
    /// Lay out `initial_length` segments along row 0, head on the right, all moving right.
    ///
    /// A length of 0 is treated as 1.
    pub fn new(initial_length: usize, grid: Grid) -> Self {
        let len = initial_length.max(1) as i32;
        let segments = (0..len)
            .map(|i| Segment {
                position: grid.wrap(Position::new(len - 1 - i, 0)),
                velocity: Direction::Right,
                id: i as u64,
            })
            .collect();

        Self {
            segments,
            pending: Direction::Right,
            next_id: len as u64,
            grid,
        }
    }

    /// Build a snake from explicit segments (head first).
    ///
    /// Panics if `segments` is empty.
    pub fn from_segments(segments: Vec<Segment>, pending: Direction, grid: Grid) -> Self {
        assert!(!segments.is_empty(), "a snake needs at least one segment");
        let next_id = segments.iter().map(|s| s.id).max().map_or(0, |id| id + 1);
        Self {
            segments,
            pending,
            next_id,
            grid,
        }
    }

    /// Request a new head direction for the next tick.
    ///
    /// A request that reverses the pending direction, or the direction the head
    /// is currently moving in, is dropped.
    pub fn set_direction(&mut self, requested: Direction) {
        if requested.is_opposite(self.pending) || requested.is_opposite(self.head().velocity) {
            log::trace!("dropping reversal request {:?}", requested);
            return;
        }
        self.pending = requested;
    }

    /// Advance every segment by one cell.
    pub fn advance_tick(&mut self) {
        let grid = self.grid;
        // Velocity handed down the chain: pending for the head, then each
        // predecessor's pre-tick velocity.
        let mut carried = self.pending;
        for segment in &mut self.segments {
            let before = segment.velocity;
            segment.velocity = carried;
            carried = before;

            let (dx, dy) = segment.velocity.delta();
            segment.position = grid.wrap(segment.position.moved_by(dx, dy));
        }
        log::trace!("head at {:?}", self.head().position);
    }

    /// Append a segment one step behind the tail.
    pub fn grow(&mut self) {
        let tail = *self.tail();
        let (dx, dy) = tail.velocity.delta();
        let segment = Segment {
            position: self.grid.wrap(tail.position.moved_by(-dx, -dy)),
            velocity: tail.velocity,
            id: self.next_id,
        };
        self.next_id += 1;
        self.segments.push(segment);
    }

    pub fn head_collides_with(&self, position: Position) -> bool {
        self.head().position == position
    }

    pub fn head_collides_with_self(&self) -> bool {
        let head = self.head().position;
        self.segments[1..].iter().any(|s| s.position == head)
    }

    pub fn head(&self) -> &Segment {
        &self.segments[0]
    }

    pub fn tail(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }
}
