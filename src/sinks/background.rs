//! Background sink: moves event delivery onto a worker thread
//!
//! Events are queued on a bounded channel and handed to the inner sink in
//! batches. Failures of the inner sink can no longer reach the writer, so they
//! are reported to self-diagnostics. A full queue is handled according to the
//! configured [`OverflowPolicy`].

use crate::core::{EventSink, LogEvent, LoggerError, OverflowCallback, OverflowPolicy, Result};
use crate::self_log;
use crossbeam_channel::{bounded, Receiver, SendTimeoutError, Sender, TrySendError};
use parking_lot::{Mutex, RwLock};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Default time allowed for the worker to drain on shutdown
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

const DEFAULT_CAPACITY: usize = 10_000;
const BATCH_SIZE: usize = 50;

enum Message {
    Event(LogEvent),
    Flush(Sender<Result<()>>),
}

/// Queues events for delivery by a dedicated worker thread
///
/// # Example
///
/// ```
/// use rust_structured_logger::prelude::*;
/// use rust_structured_logger::sinks::BackgroundSink;
/// use std::sync::Arc;
///
/// let memory = Arc::new(MemorySink::new());
/// let background = BackgroundSink::builder(Arc::clone(&memory))
///     .capacity(1024)
///     .overflow_policy(OverflowPolicy::Block)
///     .build()
///     .unwrap();
///
/// let logger = Logger::builder().sink(background).build().unwrap();
/// logger.info("queued", ()).unwrap();
/// logger.dispose();
///
/// assert_eq!(memory.len(), 1);
/// ```
pub struct BackgroundSink {
    sender: RwLock<Option<Sender<Message>>>,
    handle: Mutex<Option<thread::JoinHandle<()>>>,
    overflow_policy: OverflowPolicy,
    on_overflow: Option<OverflowCallback>,
    dropped: AtomicU64,
    shutdown_timeout: Duration,
}

impl BackgroundSink {
    /// Start a worker with default capacity and `DropNewest` overflow handling
    pub fn new<S: EventSink + 'static>(inner: S) -> Result<Self> {
        Self::builder(inner).build()
    }

    pub fn builder<S: EventSink + 'static>(inner: S) -> BackgroundSinkBuilder {
        BackgroundSinkBuilder {
            inner: Arc::new(inner),
            capacity: DEFAULT_CAPACITY,
            overflow_policy: OverflowPolicy::default(),
            on_overflow: None,
            shutdown_timeout: DEFAULT_SHUTDOWN_TIMEOUT,
        }
    }

    /// Events discarded because the queue was full
    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.overflow_policy
    }

    fn record_dropped(&self) {
        let dropped = self.dropped.fetch_add(1, Ordering::Relaxed) + 1;

        // Alert on first drop and periodically thereafter
        if dropped == 1 || dropped % 1000 == 0 {
            self_log!(
                "Background queue full, {} events dropped (policy: {})",
                dropped,
                self.overflow_policy
            );
        }
        if let Some(callback) = &self.on_overflow {
            callback(dropped);
        }
    }

    fn current_sender(&self) -> Option<Sender<Message>> {
        self.sender.read().clone()
    }

    fn handle_overflow(&self, sender: &Sender<Message>, message: Message) -> Result<()> {
        match self.overflow_policy {
            OverflowPolicy::DropNewest => {
                self.record_dropped();
                Ok(())
            }
            OverflowPolicy::Block => sender
                .send(message)
                .map_err(|_| LoggerError::ChannelSendError),
            OverflowPolicy::BlockWithTimeout(timeout) => {
                match sender.send_timeout(message, timeout) {
                    Ok(()) => Ok(()),
                    Err(SendTimeoutError::Timeout(_)) => {
                        self.record_dropped();
                        Ok(())
                    }
                    Err(SendTimeoutError::Disconnected(_)) => Err(LoggerError::ChannelSendError),
                }
            }
        }
    }

    /// Stop accepting events and wait for the worker to drain
    ///
    /// Returns `false` if the worker did not finish within `timeout` or
    /// panicked. Calling this more than once is harmless.
    pub fn shutdown(&self, timeout: Duration) -> bool {
        // Close the channel to signal worker thread
        drop(self.sender.write().take());

        let Some(handle) = self.handle.lock().take() else {
            return true;
        };

        let start = Instant::now();
        loop {
            if handle.is_finished() {
                if handle.join().is_err() {
                    self_log!("Background worker thread panicked during shutdown");
                    return false;
                }
                return true;
            }

            if start.elapsed() >= timeout {
                self_log!(
                    "Background worker did not finish within {:?}; some events may be lost",
                    timeout
                );
                return false;
            }

            // Small sleep to avoid busy-waiting
            thread::sleep(Duration::from_millis(10));
        }
    }
}

impl EventSink for BackgroundSink {
    fn emit(&self, event: LogEvent) -> Result<()> {
        // A blocked send must not hold the lock that shutdown needs
        let sender = self.current_sender().ok_or(LoggerError::ChannelSendError)?;

        match sender.try_send(Message::Event(event)) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(message)) => self.handle_overflow(&sender, message),
            Err(TrySendError::Disconnected(_)) => Err(LoggerError::ChannelSendError),
        }
    }

    /// Wait until everything queued so far has reached the inner sink, then
    /// flush it. After shutdown this is a no-op.
    fn flush(&self) -> Result<()> {
        let Some(sender) = self.current_sender() else {
            return Ok(());
        };
        let (ack_tx, ack_rx) = bounded(1);
        sender
            .send_timeout(Message::Flush(ack_tx), self.shutdown_timeout)
            .map_err(|_| LoggerError::ChannelSendError)?;
        drop(sender);

        ack_rx
            .recv_timeout(self.shutdown_timeout)
            .map_err(|_| LoggerError::sink("BackgroundSink", "flush timed out"))?
    }
}

impl Drop for BackgroundSink {
    fn drop(&mut self) {
        self.shutdown(self.shutdown_timeout);

        let dropped = self.dropped_count();
        if dropped > 0 {
            self_log!("Background sink shutting down with {} dropped events", dropped);
        }
    }
}

/// Builder for [`BackgroundSink`]
pub struct BackgroundSinkBuilder {
    inner: Arc<dyn EventSink>,
    capacity: usize,
    overflow_policy: OverflowPolicy,
    on_overflow: Option<OverflowCallback>,
    shutdown_timeout: Duration,
}

impl BackgroundSinkBuilder {
    #[must_use = "builder methods return a new value"]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }

    /// Callback invoked with the running total whenever an event is dropped
    #[must_use = "builder methods return a new value"]
    pub fn on_overflow(mut self, callback: OverflowCallback) -> Self {
        self.on_overflow = Some(callback);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn shutdown_timeout(mut self, timeout: Duration) -> Self {
        self.shutdown_timeout = timeout;
        self
    }

    pub fn build(self) -> Result<BackgroundSink> {
        if self.capacity == 0 {
            return Err(LoggerError::config(
                "BackgroundSink",
                "queue capacity must be greater than zero",
            ));
        }

        let (sender, receiver) = bounded(self.capacity);
        let inner = self.inner;
        let handle = thread::Builder::new()
            .name("structured-logger-worker".to_string())
            .spawn(move || run_worker(&receiver, inner.as_ref()))
            .map_err(|e| LoggerError::io_operation("spawn background worker", "thread", e))?;

        Ok(BackgroundSink {
            sender: RwLock::new(Some(sender)),
            handle: Mutex::new(Some(handle)),
            overflow_policy: self.overflow_policy,
            on_overflow: self.on_overflow,
            dropped: AtomicU64::new(0),
            shutdown_timeout: self.shutdown_timeout,
        })
    }
}

fn run_worker(receiver: &Receiver<Message>, inner: &dyn EventSink) {
    let mut batch = Vec::with_capacity(BATCH_SIZE);

    // Blocks for the first message; exits once the channel is closed and drained
    while let Ok(message) = receiver.recv() {
        batch.push(message);
        while batch.len() < BATCH_SIZE {
            match receiver.try_recv() {
                Ok(message) => batch.push(message),
                Err(_) => break,
            }
        }

        for message in batch.drain(..) {
            match message {
                Message::Event(event) => {
                    if let Err(e) = inner.emit(event) {
                        self_log!("Background sink failed to deliver event: {}", e);
                    }
                }
                Message::Flush(ack) => {
                    let _ = ack.send(inner.flush());
                }
            }
        }
    }

    if let Err(e) = inner.flush() {
        self_log!("Background sink failed to flush on shutdown: {}", e);
    }
}
