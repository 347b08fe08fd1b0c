use std::io;
use std::thread::{self, JoinHandle};

use log::{info, warn};
use thiserror::Error;

use super::channel::{MulticastChannel, RecvError};
use crate::render::{CheerTarget, RenderError};

/// Why a receive loop stopped.
#[derive(Debug, Error)]
pub enum ListenError {
    #[error("receive failed: {0}")]
    Io(#[from] io::Error),
    #[error("render target failed: {0}")]
    Render(#[from] RenderError),
}

/// Blocking receive loop feeding decoded colours into `target`.
///
/// Malformed datagrams are expected on a shared multicast group: they are
/// logged and skipped. Socket errors and sink errors end the loop; the
/// caller decides whether to restart.
pub fn run<T: CheerTarget>(mut channel: MulticastChannel, mut target: T) -> Result<(), ListenError> {
    info!("listening on {}", channel.destination());
    loop {
        match channel.recv() {
            Ok((message, from)) => {
                info!("{from}: {message}");
                target.update(message.colour())?;
            }
            Err(RecvError::Decode(err)) => warn!("dropping datagram: {err}"),
            Err(RecvError::Io(err)) => return Err(err.into()),
        }
    }
}

/// A receive loop running on its own worker thread.
///
/// The handle is retained so shutdown can join the worker and observe how
/// the loop ended, instead of leaking a detached thread.
pub struct Listener {
    handle: JoinHandle<Result<(), ListenError>>,
}

impl Listener {
    /// Spawns [`run`] on a dedicated named thread.
    pub fn spawn<T>(channel: MulticastChannel, target: T) -> io::Result<Self>
    where
        T: CheerTarget + Send + 'static,
    {
        let handle = thread::Builder::new()
            .name("cheercast-listener".to_string())
            .spawn(move || run(channel, target))?;
        Ok(Self { handle })
    }

    /// Waits for the loop to stop and returns its exit result.
    pub fn join(self) -> Result<(), ListenError> {
        match self.handle.join() {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}
