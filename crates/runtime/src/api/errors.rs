//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, the simulation core and input
//! providers so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::GameError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("input provider not set")]
    ProviderNotSet,

    #[error("input provider failed: {0}")]
    Provider(String),

    #[error("frame rate must be positive, got {frame_rate}")]
    InvalidFrameRate { frame_rate: u32 },

    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("event stream closed before the session ended")]
    EventStreamClosed,

    #[error(transparent)]
    Game(#[from] GameError),
}
