//! Deferred draw commands
//!
//! Objects may only be mutated by the context that owns them. Other contexts
//! (interrupt handlers, input tasks) post [`DrawCommand`]s into a bounded
//! [`CommandQueue`] instead, and the owner applies them between ticks.
//!
//! The queue is built on `critical-section` and `heapless::Deque`, so a
//! `static` queue can be shared with interrupt handlers.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::Duration;
use heapless::Deque;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;
use crate::draw::{BlinkState, Direction, DrawAction, DrawDuration};

/// Change to a single draw object (by index) or to the whole registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    ResetAll,
    SetAction(usize, DrawAction),
    SetDirection(usize, Direction),
    SetBlinkState(usize, BlinkState),
    SetBlinkRate(usize, Duration),
    SetDuration(usize, DrawDuration),
    SetLength(usize, usize),
    SetIncrementRate(usize, Duration),
    SetPosition(usize, usize),
    SetColor(usize, Rgb),
    SetStartPosition(usize, usize),
    SetEndPosition(usize, usize),
    SetGrow(usize, bool),
    SetReverse(usize, bool),
}

/// Error returned when the queue is full; carries the rejected command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub DrawCommand);

/// Error returned when the queue is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Bounded queue of draw commands
pub struct CommandQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<DrawCommand, SIZE>>>,
}

impl<const SIZE: usize> CommandQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { queue: self }
    }

    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { queue: self }
    }

    /// Post a command
    ///
    /// Returns the command back if the queue is full.
    pub fn try_send(&self, command: DrawCommand) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(|command| {
                #[cfg(feature = "esp32-log")]
                println!("[CommandQueue.try_send] queue full, dropping {:?}", command);
                TrySendError(command)
            })
        })
    }

    /// Take the oldest command
    pub fn try_receive(&self) -> Result<DrawCommand, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    pub fn is_empty(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().is_empty())
    }
}

impl<const SIZE: usize> Default for CommandQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Posting side of a [`CommandQueue`]
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    pub fn try_send(&self, command: DrawCommand) -> Result<(), TrySendError> {
        self.queue.try_send(command)
    }

    pub fn set_color(&self, element: usize, color: Rgb) -> Result<(), TrySendError> {
        self.try_send(DrawCommand::SetColor(element, color))
    }

    pub fn set_action(&self, element: usize, action: DrawAction) -> Result<(), TrySendError> {
        self.try_send(DrawCommand::SetAction(element, action))
    }

    pub fn set_position(&self, element: usize, position: usize) -> Result<(), TrySendError> {
        self.try_send(DrawCommand::SetPosition(element, position))
    }

    pub fn reset_all(&self) -> Result<(), TrySendError> {
        self.try_send(DrawCommand::ResetAll)
    }
}

/// Draining side of a [`CommandQueue`]
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Result<DrawCommand, TryReceiveError> {
        self.queue.try_receive()
    }
}
