//! Overflow policies for the background sink queue
//!
//! When the background queue is full, these policies decide whether the
//! writing thread waits or the event is dropped and counted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Policy for handling a full background queue
///
/// # Example
///
/// ```
/// use rust_structured_logger::OverflowPolicy;
/// use std::time::Duration;
///
/// let policy = OverflowPolicy::default();
/// assert_eq!(policy, OverflowPolicy::DropNewest);
///
/// let policy = OverflowPolicy::BlockWithTimeout(Duration::from_millis(100));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverflowPolicy {
    /// Drop the incoming event and count it
    #[default]
    DropNewest,

    /// Wait until the worker frees a slot
    ///
    /// Applies backpressure to every writing thread.
    Block,

    /// Wait up to the timeout, then drop and count
    BlockWithTimeout(Duration),
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowPolicy::DropNewest => write!(f, "DropNewest"),
            OverflowPolicy::Block => write!(f, "Block"),
            OverflowPolicy::BlockWithTimeout(d) => write!(f, "BlockWithTimeout({:?})", d),
        }
    }
}

/// Called when events are dropped; the argument is the total dropped so far
pub type OverflowCallback = Arc<dyn Fn(u64) + Send + Sync>;
