//! Background delivery of contact inquiries.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{error, info, warn};

use crate::domain::entities::Inquiry;
use crate::infrastructure::sinks::InquirySink;

/// First retry delay in milliseconds; doubles on every attempt.
const RETRY_BASE_MS: u64 = 100;

/// Drains the inquiry channel and hands each inquiry to `sink`.
///
/// Failed deliveries are retried with jittered exponential backoff up to
/// `max_retries` times; inquiries that still fail are logged and counted
/// as dropped. Returns once every sender has been dropped and the queue is empty.
pub async fn run_inquiry_worker(
    mut rx: mpsc::Receiver<Inquiry>,
    sink: Arc<dyn InquirySink>,
    max_retries: usize,
) {
    info!(sink = sink.name(), "Inquiry worker started");

    while let Some(inquiry) = rx.recv().await {
        let strategy = ExponentialBackoff::from_millis(2)
            .factor(RETRY_BASE_MS / 2)
            .map(jitter)
            .take(max_retries);

        let result = Retry::spawn(strategy, || {
            let sink = sink.clone();
            let inquiry = inquiry.clone();
            async move { sink.deliver(&inquiry).await }
        })
        .await;

        match result {
            Ok(()) => {
                info!(inquiry_id = %inquiry.id, sink = sink.name(), "Inquiry delivered");
            }
            Err(e) => {
                warn!(
                    inquiry_id = %inquiry.id,
                    sink = sink.name(),
                    error = %e,
                    "Inquiry delivery failed, dropping"
                );
                metrics::counter!("contact_inquiries_failed_total").increment(1);
            }
        }
    }

    info!("Inquiry worker stopped");
}

/// Waits up to `grace` for a spawned worker to finish draining its queue.
///
/// The worker only stops once every sender is gone, so call this after the
/// server (and with it the last `ContactService`) has been dropped. Returns
/// `false` when the worker panicked or was still busy when `grace` ran out.
pub async fn drain_inquiry_worker(worker: JoinHandle<()>, grace: Duration) -> bool {
    match tokio::time::timeout(grace, worker).await {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            error!(error = %e, "Inquiry worker aborted");
            false
        }
        Err(_) => {
            warn!(
                grace_ms = grace.as_millis() as u64,
                "Inquiry worker still busy at shutdown, queued inquiries may be lost"
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::{ContactField, ContactFormState};
    use crate::infrastructure::sinks::{MockInquirySink, SinkError};
    use chrono::Utc;

    fn inquiry() -> Inquiry {
        let mut form = ContactFormState::new("GRC");
        form.set_field(ContactField::Name, "Margaret");
        form.set_field(ContactField::Email, "m@example.com");
        form.set_field(ContactField::Message, "SOC 2 readiness assessment");
        Inquiry::from_form(form, Utc::now())
    }

    fn io_error() -> SinkError {
        SinkError::Io(std::io::Error::other("disk full"))
    }

    #[tokio::test]
    async fn test_delivers_every_queued_inquiry() {
        let mut sink = MockInquirySink::new();
        sink.expect_name().return_const("mock");
        sink.expect_deliver().times(3).returning(|_| Ok(()));

        let (tx, rx) = mpsc::channel(10);
        for _ in 0..3 {
            tx.send(inquiry()).await.unwrap();
        }
        drop(tx);

        run_inquiry_worker(rx, Arc::new(sink), 2).await;
    }

    #[tokio::test]
    async fn test_retries_then_succeeds() {
        let mut sink = MockInquirySink::new();
        let mut seq = mockall::Sequence::new();
        sink.expect_name().return_const("mock");
        sink.expect_deliver()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_| Err(io_error()));
        sink.expect_deliver()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let (tx, rx) = mpsc::channel(1);
        tx.send(inquiry()).await.unwrap();
        drop(tx);

        run_inquiry_worker(rx, Arc::new(sink), 3).await;
    }

    #[tokio::test]
    async fn test_gives_up_after_max_retries() {
        let mut sink = MockInquirySink::new();
        sink.expect_name().return_const("mock");
        // first attempt plus two retries
        sink.expect_deliver().times(3).returning(|_| Err(io_error()));

        let (tx, rx) = mpsc::channel(1);
        tx.send(inquiry()).await.unwrap();
        drop(tx);

        run_inquiry_worker(rx, Arc::new(sink), 2).await;
    }

    #[tokio::test]
    async fn test_drain_delivers_backlog_after_senders_close() {
        let delivered = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let counter = delivered.clone();

        let mut sink = MockInquirySink::new();
        sink.expect_name().return_const("mock");
        sink.expect_deliver().times(5).returning(move |_| {
            counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            Ok(())
        });

        let (tx, rx) = mpsc::channel(10);
        for _ in 0..5 {
            tx.send(inquiry()).await.unwrap();
        }

        let worker = tokio::spawn(run_inquiry_worker(rx, Arc::new(sink), 1));
        drop(tx);

        assert!(drain_inquiry_worker(worker, Duration::from_secs(5)).await);
        assert_eq!(delivered.load(std::sync::atomic::Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn test_drain_gives_up_while_a_sender_is_alive() {
        let mut sink = MockInquirySink::new();
        sink.expect_name().return_const("mock");
        sink.expect_deliver().never();

        let (tx, rx) = mpsc::channel::<Inquiry>(1);
        let worker = tokio::spawn(run_inquiry_worker(rx, Arc::new(sink), 1));

        assert!(!drain_inquiry_worker(worker, Duration::from_millis(50)).await);
        drop(tx);
    }
}
