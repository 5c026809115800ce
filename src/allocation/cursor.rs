//! Forward cursor over the resource pool.

/// Position in the drain order plus the remaining capacity at that
/// position.
///
/// The cursor only moves forward. A resource is loaded at full capacity
/// the first time the cursor reaches it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor {
    position: usize,
    remaining: i64,
}

impl Cursor {
    /// Places the cursor on the first resource in `capacities`.
    pub(crate) fn start(capacities: &[i64]) -> Self {
        Self {
            position: 0,
            remaining: capacities.first().copied().unwrap_or(0),
        }
    }

    /// Skips exhausted positions and returns `(position, remaining)` of the
    /// first resource with capacity left, or `None` past the end.
    pub(crate) fn current(&mut self, capacities: &[i64]) -> Option<(usize, i64)> {
        while self.remaining == 0 {
            self.position += 1;
            self.remaining = *capacities.get(self.position)?;
        }
        if self.position < capacities.len() {
            Some((self.position, self.remaining))
        } else {
            None
        }
    }

    /// Consumes `pages` from the current resource. An exhausted resource
    /// is skipped by the next [`Cursor::current`] call.
    pub(crate) fn draw(&mut self, pages: i64) {
        debug_assert!(pages <= self.remaining);
        self.remaining -= pages;
    }
}
