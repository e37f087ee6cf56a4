use std::sync::Arc;

use crate::memory::{BufferError, GrowableBuffer};

/// One instrumented backend call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderLogEntry {
    pub backend_id: Arc<str>,
    pub command: String,
    pub parameters: String,
    pub duration_ms: f64,
}

/// Fixed-capacity store of the most recent log entries.
///
/// Slots are allocated and default-filled up front; once full, each push
/// overwrites the oldest entry.
#[derive(Debug)]
pub struct LogRing {
    slots: GrowableBuffer<RenderLogEntry>,
    /// Total pushes so far; the next slot is `head % capacity`.
    head: usize,
}

impl LogRing {
    /// Allocates `capacity` empty slots.
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        let mut slots = GrowableBuffer::with_initial_capacity(capacity);
        slots.resize_with(capacity, RenderLogEntry::default)?;
        Ok(Self { slots, head: 0 })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live entries (at most `capacity`).
    #[inline]
    pub fn len(&self) -> usize {
        self.head.min(self.capacity())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == 0
    }

    /// Total entries ever pushed, including overwritten ones.
    #[inline]
    pub fn total_written(&self) -> usize {
        self.head
    }

    pub fn push(&mut self, entry: RenderLogEntry) {
        let capacity = self.capacity();
        if capacity == 0 {
            return;
        }
        self.slots[self.head % capacity] = entry;
        self.head = self.head.wrapping_add(1);
    }

    /// Live entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &RenderLogEntry> {
        let capacity = self.capacity();
        let (older, newer) = if self.head <= capacity {
            (&self.slots[..self.head], &self.slots[..0])
        } else {
            let split = self.head % capacity;
            (&self.slots[split..], &self.slots[..split])
        };
        older.iter().chain(newer)
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&RenderLogEntry> {
        if self.is_empty() {
            return None;
        }
        let capacity = self.capacity();
        self.slots.get((self.head - 1) % capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(command: &str) -> RenderLogEntry {
        RenderLogEntry {
            backend_id: Arc::from("test"),
            command: command.to_owned(),
            ..RenderLogEntry::default()
        }
    }

    fn commands(ring: &LogRing) -> Vec<&str> {
        ring.iter().map(|e| e.command.as_str()).collect()
    }

    #[test]
    fn starts_zeroed_and_empty() {
        let ring = LogRing::new(4).unwrap();
        assert_eq!(ring.capacity(), 4);
        assert!(ring.is_empty());
        assert_eq!(ring.iter().count(), 0);
        assert!(ring.latest().is_none());
    }

    #[test]
    fn keeps_insertion_order_until_full() {
        let mut ring = LogRing::new(3).unwrap();
        ring.push(entry("a"));
        ring.push(entry("b"));
        assert_eq!(commands(&ring), ["a", "b"]);
        assert_eq!(ring.latest().unwrap().command, "b");
    }

    #[test]
    fn overwrites_oldest_when_full() {
        let mut ring = LogRing::new(3).unwrap();
        for c in ["a", "b", "c", "d", "e"] {
            ring.push(entry(c));
        }
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.total_written(), 5);
        assert_eq!(commands(&ring), ["c", "d", "e"]);
        assert_eq!(ring.latest().unwrap().command, "e");
    }

    #[test]
    fn zero_capacity_drops_everything() {
        let mut ring = LogRing::new(0).unwrap();
        ring.push(entry("a"));
        assert!(ring.is_empty());
        assert_eq!(ring.iter().count(), 0);
    }
}
