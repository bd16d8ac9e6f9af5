//! Portable bounded command queue for `no_std` environments.
//!
//! Lets other execution contexts (interrupt handlers, a second control
//! task) request animation changes without touching controller state
//! directly. Built on `critical-section` and `heapless::Deque`; the
//! controller drains all pending commands at the top of every tick.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::pattern::Pattern;

/// A request to change what the controller is animating.
#[derive(Debug, Clone, Copy)]
pub enum Command {
    /// Replace the active pattern and reset it
    Start(Pattern),
    /// Stop animating and blank the strip
    Stop,
    /// Reverse the active pattern in place
    Reverse,
}

/// Error returned when trying to send to a full queue.
///
/// Carries the rejected command back to the sender; nothing ever blocks.
#[derive(Debug, Clone, Copy)]
pub struct TrySendError(pub Command);

/// Error returned when trying to receive from an empty queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// A bounded, thread-safe command queue.
///
/// Synchronized with critical sections, so senders may run in interrupt
/// context. Backed by a fixed-size `heapless::Deque`; a full queue drops
/// the command at the sender rather than blocking the control loop.
pub struct CommandQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<Command, SIZE>>>,
}

impl<const SIZE: usize> CommandQueue<SIZE> {
    /// Create a new empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this queue.
    ///
    /// Multiple senders can coexist; they share access to the same queue.
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { queue: self }
    }

    /// Get a receiver handle for this queue.
    ///
    /// Typically the controller is the only receiver.
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { queue: self }
    }

    /// Try to enqueue a command.
    ///
    /// Returns `Err(TrySendError(command))` if the queue is full.
    pub fn try_send(&self, command: Command) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(TrySendError)
        })
    }

    /// Try to dequeue the oldest pending command.
    ///
    /// Returns `Err(TryReceiveError)` if the queue is empty.
    pub fn try_receive(&self) -> Result<Command, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }
}

impl<const SIZE: usize> Default for CommandQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`CommandQueue`].
///
/// This is a lightweight reference that can be cloned and passed around.
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    /// Try to enqueue a command.
    ///
    /// Returns `Err(TrySendError(command))` if the queue is full.
    pub fn try_send(&self, command: Command) -> Result<(), TrySendError> {
        self.queue.try_send(command)
    }
}

/// A receiver handle for a [`CommandQueue`].
///
/// This is a lightweight reference that can be cloned and passed around.
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    /// Try to dequeue the oldest pending command.
    ///
    /// Returns `Err(TryReceiveError)` if the queue is empty.
    pub fn try_receive(&self) -> Result<Command, TryReceiveError> {
        self.queue.try_receive()
    }
}
