//=========================================================================
// Input Buffer
//
// Ordered store of native event records produced by the window system
// and not yet taken by `poll_event`.
//
// Responsibilities:
// - Keep records in arrival order across every window
// - Coalesce back-to-back pointer motion for the same window into one
//   record carrying the latest position and the summed deltas
// - Hand records out one at a time, oldest first
//
// Notes:
// Coalescing only merges a motion record into the record directly
// before it, so a key or button event between two moves keeps both
// moves visible in order.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::VecDeque;

//=== Internal Modules ====================================================

use crate::native::{consts, RawEvent};

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    events: VecDeque<RawEvent>,
    coalesced: u64,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        const BASE_CAPACITY: usize = 128;

        Self {
            events: VecDeque::with_capacity(BASE_CAPACITY),
            coalesced: 0,
        }
    }

    //--- Push -------------------------------------------------------------

    pub(crate) fn push(&mut self, event: RawEvent) {
        if event.kind() == consts::MOUSEMOTION && self.merge_motion(&event) {
            self.coalesced += 1;
            return;
        }
        self.events.push_back(event);
    }

    /// Folds `event` into the newest record if both are motion for the
    /// same window.
    fn merge_motion(&mut self, event: &RawEvent) -> bool {
        let Some(last) = self.events.back_mut() else {
            return false;
        };
        if last.kind() != consts::MOUSEMOTION {
            return false;
        }

        let incoming = event.motion_event();
        let previous = last.motion_event();
        if previous.window_id != incoming.window_id {
            return false;
        }

        *last = RawEvent::motion(
            incoming.timestamp,
            incoming.window_id,
            incoming.x,
            incoming.y,
            previous.xrel + incoming.xrel,
            previous.yrel + incoming.yrel,
        );
        true
    }

    //--- Pop --------------------------------------------------------------

    pub(crate) fn pop(&mut self) -> Option<RawEvent> {
        self.events.pop_front()
    }

    //--- Utilities --------------------------------------------------------

    /// Drops every pending record. Keeps the allocation.
    pub(crate) fn clear(&mut self) -> usize {
        let dropped = self.events.len();
        self.events.clear();
        dropped
    }

    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Motion records merged away since construction.
    pub(crate) fn coalesced(&self) -> u64 {
        self.coalesced
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::RawKeysym;

    fn key_down(ts: u32) -> RawEvent {
        RawEvent::key(consts::KEYDOWN, ts, 1, consts::PRESSED, 0, RawKeysym::default())
    }

    #[test]
    fn pops_in_arrival_order() {
        let mut buffer = InputBuffer::new();
        buffer.push(key_down(1));
        buffer.push(RawEvent::quit(2));

        assert_eq!(buffer.pop().map(|e| e.kind()), Some(consts::KEYDOWN));
        assert_eq!(buffer.pop().map(|e| e.kind()), Some(consts::QUIT));
        assert!(buffer.pop().is_none());
    }

    #[test]
    fn consecutive_motion_is_coalesced() {
        let mut buffer = InputBuffer::new();
        buffer.push(RawEvent::motion(1, 1, 10, 10, 2, 3));
        buffer.push(RawEvent::motion(2, 1, 15, 12, 5, 2));

        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.coalesced(), 1);

        let motion = buffer.pop().unwrap().motion_event();
        assert_eq!((motion.timestamp, motion.x, motion.y), (2, 15, 12));
        assert_eq!((motion.xrel, motion.yrel), (7, 5));
    }

    #[test]
    fn motion_for_other_window_is_kept() {
        let mut buffer = InputBuffer::new();
        buffer.push(RawEvent::motion(1, 1, 0, 0, 0, 0));
        buffer.push(RawEvent::motion(2, 2, 0, 0, 0, 0));
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn motion_is_not_merged_across_other_events() {
        let mut buffer = InputBuffer::new();
        buffer.push(RawEvent::motion(1, 1, 0, 0, 1, 1));
        buffer.push(key_down(2));
        buffer.push(RawEvent::motion(3, 1, 4, 4, 1, 1));
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.coalesced(), 0);
    }

    #[test]
    fn clear_reports_dropped_and_keeps_capacity() {
        let mut buffer = InputBuffer::new();
        for ts in 0..200 {
            buffer.push(key_down(ts));
        }
        let capacity = buffer.events.capacity();

        assert_eq!(buffer.clear(), 200);
        assert!(buffer.is_empty());
        assert_eq!(buffer.events.capacity(), capacity);
    }
}
