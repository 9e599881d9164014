//! Deferred mutations requested by a committed choice.
//!
//! A commit never mutates the target directly. It sends a [`Command`] naming
//! the target and the new value, and the owner of the target drains the queue
//! when it is safe to apply them.

use crossbeam_channel as cb;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command<V> {
    pub target: usize,
    pub value: V,
}

impl<V> Command<V> {
    pub fn new(target: usize, value: V) -> Self {
        Self { target, value }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("command consumer is gone, command for target {0} dropped")]
    Disconnected(usize),
}

pub struct CommandSender<V> {
    tx: cb::Sender<Command<V>>,
}

// derive would require V: Clone
impl<V> Clone for CommandSender<V> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

pub struct CommandReceiver<V> {
    rx: cb::Receiver<Command<V>>,
}

pub fn command_queue<V>() -> (CommandSender<V>, CommandReceiver<V>) {
    let (tx, rx) = cb::unbounded();
    (CommandSender { tx }, CommandReceiver { rx })
}

impl<V> CommandSender<V> {
    pub fn submit(&self, command: Command<V>) -> Result<(), CommandError> {
        let target = command.target;
        self.tx.send(command).map_err(|_| {
            warn!("dropping command for target {}", target);
            CommandError::Disconnected(target)
        })?;
        debug!("queued command for target {}", target);
        Ok(())
    }
}

impl<V> CommandReceiver<V> {
    /// Pending commands in submission order, without blocking.
    pub fn drain(&self) -> impl Iterator<Item = Command<V>> + '_ {
        self.rx.try_iter()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}
