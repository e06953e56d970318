//! Mode selection from the two-position physical switch.
//!
//! Two active-low input lines are polled once per frame tick. Line 1
//! asserted selects the flame mode; otherwise line 2 asserted selects
//! the steady ember mode; with neither asserted the lamp is off.
//!
//! Mode changes travel to the renderer over a small bounded channel
//! built on `critical-section` and `heapless::Deque`, so a sender could
//! also live in an interrupt handler. The poller only sends on edges —
//! a held switch position produces no traffic.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::InputLine;
use crate::effect::EffectId;

/// A request to change the lamp mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeIntent {
    pub mode: EffectId,
}

/// Bounded, interrupt-safe queue of pending mode changes.
pub struct ModeChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<ModeIntent, SIZE>>>,
}

impl<const SIZE: usize> ModeChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this channel.
    pub const fn sender(&self) -> ModeSender<'_, SIZE> {
        ModeSender { channel: self }
    }

    /// Get a receiver handle for this channel.
    pub const fn receiver(&self) -> ModeReceiver<'_, SIZE> {
        ModeReceiver { channel: self }
    }

    fn try_send(&self, intent: ModeIntent) -> Result<(), ModeIntent> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(intent)
        })
    }

    fn try_receive(&self) -> Option<ModeIntent> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front()
        })
    }
}

impl<const SIZE: usize> Default for ModeChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sender half of a [`ModeChannel`].
#[derive(Clone, Copy)]
pub struct ModeSender<'a, const SIZE: usize> {
    channel: &'a ModeChannel<SIZE>,
}

impl<const SIZE: usize> ModeSender<'_, SIZE> {
    /// Enqueue a mode change.
    ///
    /// Returns the intent back if the channel is full.
    pub fn try_send(&self, intent: ModeIntent) -> Result<(), ModeIntent> {
        self.channel.try_send(intent)
    }
}

/// Receiver half of a [`ModeChannel`].
#[derive(Clone, Copy)]
pub struct ModeReceiver<'a, const SIZE: usize> {
    channel: &'a ModeChannel<SIZE>,
}

impl<const SIZE: usize> ModeReceiver<'_, SIZE> {
    /// Dequeue the next pending mode change, if any.
    pub fn try_receive(&self) -> Option<ModeIntent> {
        self.channel.try_receive()
    }
}

/// Polls the switch lines and reports mode changes.
pub struct ModeSwitch<'a, A: InputLine, B: InputLine, const SIZE: usize> {
    flame_line: A,
    ember_line: B,
    sender: ModeSender<'a, SIZE>,
    last: Option<EffectId>,
}

impl<'a, A: InputLine, B: InputLine, const SIZE: usize> ModeSwitch<'a, A, B, SIZE> {
    pub const fn new(flame_line: A, ember_line: B, sender: ModeSender<'a, SIZE>) -> Self {
        Self {
            flame_line,
            ember_line,
            sender,
            last: None,
        }
    }

    /// Read both lines and return the selected mode.
    ///
    /// Sends a [`ModeIntent`] only when the selection differs from the
    /// previous poll. A full channel drops the intent; the next poll
    /// retries because `last` is only advanced on successful send.
    pub fn poll(&mut self) -> EffectId {
        let mode = if self.flame_line.is_asserted() {
            EffectId::Flame
        } else if self.ember_line.is_asserted() {
            EffectId::Ember
        } else {
            EffectId::Off
        };

        if self.last != Some(mode) {
            if self.sender.try_send(ModeIntent { mode }).is_ok() {
                self.last = Some(mode);
            }
        }

        mode
    }
}
