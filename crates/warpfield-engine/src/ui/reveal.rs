//! Fire-once tracking for scroll-triggered section reveals.

/// Tracks which observed elements have already been revealed.
/// Elements are addressed by the index they were registered under.
///
/// Revealing is one-way. Once an element has fired it never fires
/// again, no matter how often it leaves and re-enters the viewport.
#[derive(Debug, Clone)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    pub fn new(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
        }
    }

    /// Report an intersection change for one element. Returns true
    /// exactly once per element: the first time it is seen intersecting.
    pub fn on_intersect(&mut self, idx: usize, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        match self.revealed.get_mut(idx) {
            Some(seen) if !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, idx: usize) -> bool {
        self.revealed.get(idx).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|seen| **seen).count()
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}
