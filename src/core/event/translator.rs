//=========================================================================
// Event Translator
//=========================================================================
//
// Drains the native event queue one record at a time and converts each
// raw tagged-union record into an `EventRecord`.
//
// Flow per call:
// ```text
//  fresh zeroed RawEvent ─► native.poll_event ─► translate ─► Some(record)
//                                  │
//                                  └─ false ─► None (buffer discarded)
// ```
//
// Every poll starts from a zeroed buffer, so no field of a previous event
// can leak into a record. `poll_into` additionally clears the caller's
// slot before polling, so an empty queue always leaves it `None`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::rc::Rc;

use log::trace;

//=== Internal Dependencies ===============================================

use super::{EventRecord, KeyEvent, KeySym};
use crate::core::lifecycle::Context;
use crate::native::{consts, NativeLibrary, RawEvent};

//=== Translation =========================================================

/// Converts one raw record. Pure; reads only the member selected by the
/// record's kind.
pub fn translate(raw: &RawEvent) -> EventRecord {
    let common = raw.common();
    match common.kind {
        consts::QUIT => EventRecord::Quit {
            timestamp: common.timestamp,
        },
        consts::KEYDOWN | consts::KEYUP => {
            let key = raw.key_event();
            let payload = KeyEvent {
                timestamp: key.timestamp,
                window_id: key.window_id,
                state: key.state,
                repeat: key.repeat,
                keysym: KeySym::from(key.keysym),
            };
            if key.kind == consts::KEYDOWN {
                EventRecord::KeyDown(payload)
            } else {
                EventRecord::KeyUp(payload)
            }
        }
        kind => EventRecord::Other {
            kind,
            timestamp: common.timestamp,
        },
    }
}

//=== EventTranslator =====================================================

/// Polls the subsystem's native queue and yields structured records.
///
/// Holds the subsystem context, so it keeps the native library alive.
/// Polling while the subsystem is not ready returns nothing without
/// touching the native layer.
pub struct EventTranslator<N: NativeLibrary> {
    context: Rc<Context<N>>,
    translated: u64,
}

impl<N: NativeLibrary> EventTranslator<N> {
    pub(crate) fn new(context: Rc<Context<N>>) -> Self {
        Self { context, translated: 0 }
    }

    /// Takes the next pending event, or `None` when the queue is empty.
    pub fn poll(&mut self) -> Option<EventRecord> {
        if !self.context.is_ready() {
            trace!(target: "event", "poll while uninitialized, skipping native call");
            return None;
        }

        let mut raw = RawEvent::zeroed();
        if !self.context.native().poll_event(&mut raw) {
            return None;
        }

        let record = translate(&raw);
        self.translated += 1;
        trace!(target: "event", "translated {:?} -> {:?}", raw, record.kind());
        Some(record)
    }

    /// Clears `slot`, then fills it with the next pending event. Returns
    /// `true` if an event was stored.
    pub fn poll_into(&mut self, slot: &mut Option<EventRecord>) -> bool {
        *slot = None;
        *slot = self.poll();
        slot.is_some()
    }

    /// Iterator over pending events, stopping at the first empty poll or
    /// after `max_events_per_drain` events, whichever comes first.
    pub fn poll_iter(&mut self) -> PollIter<'_, N> {
        let remaining = self.context.config().max_events_per_drain;
        PollIter {
            translator: self,
            remaining,
        }
    }

    /// Events translated over this translator's lifetime.
    pub fn translated(&self) -> u64 {
        self.translated
    }
}

impl<N: NativeLibrary> std::fmt::Debug for EventTranslator<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventTranslator")
            .field("ready", &self.context.is_ready())
            .field("translated", &self.translated)
            .finish()
    }
}

//=== PollIter ============================================================

/// Bounded drain of the event queue. See [`EventTranslator::poll_iter`].
#[derive(Debug)]
pub struct PollIter<'t, N: NativeLibrary> {
    translator: &'t mut EventTranslator<N>,
    remaining: usize,
}

impl<N: NativeLibrary> Iterator for PollIter<'_, N> {
    type Item = EventRecord;

    fn next(&mut self) -> Option<EventRecord> {
        if self.remaining == 0 {
            return None;
        }
        let record = self.translator.poll()?;
        self.remaining -= 1;
        Some(record)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
