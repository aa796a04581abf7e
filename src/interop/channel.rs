//! # Interop Channel
//!
//! One-way message channel from a gateway to the browser side. The
//! transport layer subscribes before constructing gateways and forwards
//! whatever it receives across the wire; nothing in this crate knows how
//! the bytes travel.
//!
//! Built on Tokio's broadcast channel so several transport tasks may
//! observe the same notifications. The channel holds one internal receiver
//! so publishing never fails merely because the transport has not
//! subscribed yet.

use thiserror::Error;
use tokio::sync::broadcast;
use tracing::debug;

/// A message pushed from the server to the client without a reply.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientNotification {
    /// A gateway with a non-empty registry snapshot came up; the client may
    /// start adding the listed root components.
    GatewayAttached { identifiers: Vec<String> },
}

/// Broadcast channel carrying [`ClientNotification`]s.
pub struct InteropChannel {
    sender: broadcast::Sender<ClientNotification>,
    capacity: usize,
    /// Keeps the broadcast channel alive while no transport is subscribed.
    _internal_receiver: broadcast::Receiver<ClientNotification>,
}

impl InteropChannel {
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = broadcast::channel(capacity);
        Self {
            sender,
            capacity,
            _internal_receiver: receiver,
        }
    }

    pub fn subscribe(&self) -> NotificationReceiver {
        NotificationReceiver::new(self.sender.subscribe())
    }

    pub async fn notify(&self, notification: ClientNotification) -> ChannelResult<()> {
        debug!("Publishing client notification: {:?}", notification);
        self.sender
            .send(notification)
            .map_err(|e| ChannelError::SendFailed {
                message: e.to_string(),
            })?;
        Ok(())
    }

    /// Publishes without awaiting, for synchronous construction paths.
    pub fn sync_notify(&self, notification: ClientNotification) -> ChannelResult<()> {
        debug!("Sync publishing client notification: {:?}", notification);
        self.sender
            .send(notification)
            .map_err(|e| ChannelError::SendFailed {
                message: e.to_string(),
            })?;
        Ok(())
    }

    pub fn queue_size(&self) -> usize {
        self.sender.len()
    }

    pub fn subscribers_size(&self) -> usize {
        self.sender.receiver_count()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

pub struct NotificationReceiver {
    pub receiver: broadcast::Receiver<ClientNotification>,
}

impl NotificationReceiver {
    fn new(receiver: broadcast::Receiver<ClientNotification>) -> Self {
        Self { receiver }
    }

    /// Receives the next notification. On lag the receiver resubscribes and
    /// reports how many messages were skipped; callers should keep calling
    /// `recv` promptly to avoid lagging in the first place.
    pub async fn recv(&mut self) -> ChannelResult<ClientNotification> {
        match self.receiver.recv().await {
            Ok(notification) => Ok(notification),
            Err(broadcast::error::RecvError::Lagged(n)) => {
                self.receiver = self.receiver.resubscribe();
                Err(ChannelError::Lagged { count: n })
            }
            Err(e) => Err(ChannelError::ReceiveFailed {
                message: e.to_string(),
            }),
        }
    }

    /// Non-blocking receive, for transports polling between wire writes.
    pub fn try_recv(&mut self) -> ChannelResult<Option<ClientNotification>> {
        match self.receiver.try_recv() {
            Ok(notification) => Ok(Some(notification)),
            Err(broadcast::error::TryRecvError::Empty) => Ok(None),
            Err(broadcast::error::TryRecvError::Lagged(n)) => {
                self.receiver = self.receiver.resubscribe();
                Err(ChannelError::Lagged { count: n })
            }
            Err(e) => Err(ChannelError::ReceiveFailed {
                message: e.to_string(),
            }),
        }
    }
}

#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("Notification send failed: {message}")]
    SendFailed { message: String },

    #[error("Notification receive failed: {message}")]
    ReceiveFailed { message: String },

    #[error("Notification receiver lagged: {count}")]
    Lagged { count: u64 },
}

pub type ChannelResult<T> = Result<T, ChannelError>;
