//! Chat session
//!
//! Binds a [`MessageThread`] to a [`ReplyService`]. Each session owns one
//! worker task that answers submitted messages strictly one at a time, so
//! replies land in the order their messages were sent.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use crate::chat::thread::{MessageThread, SubmitError, ThreadSnapshot};
use crate::reply::{ReplyRequest, ReplyService};
use crate::types::message::{Message, MessageId};

const EVENT_CAPACITY: usize = 64;

/// Change notifications for whoever renders the thread
#[derive(Clone, Debug, PartialEq)]
pub enum ThreadEvent {
    MessageAppended(Message),
    TypingChanged(bool),
}

pub struct ChatSession {
    conversation_id: String,
    thread: Arc<Mutex<MessageThread>>,
    requests: mpsc::UnboundedSender<ReplyRequest>,
    events: broadcast::Sender<ThreadEvent>,
    worker: JoinHandle<()>,
}

impl ChatSession {
    /// Start the session's reply worker. Must be called from within a tokio runtime.
    pub fn spawn(thread: MessageThread, service: Arc<dyn ReplyService>) -> Self {
        let conversation_id = thread.conversation_id().to_string();
        let thread = Arc::new(Mutex::new(thread));
        let (requests, queue) = mpsc::unbounded_channel();
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        tracing::info!(
            conversation = %conversation_id,
            service = service.name(),
            "Chat session started"
        );

        let worker = tokio::spawn(run_reply_worker(
            thread.clone(),
            service,
            queue,
            events.clone(),
        ));

        Self {
            conversation_id,
            thread,
            requests,
            events,
            worker,
        }
    }

    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ThreadEvent> {
        self.events.subscribe()
    }

    pub fn snapshot(&self) -> ThreadSnapshot {
        lock(&self.thread).snapshot()
    }

    pub fn is_typing(&self) -> bool {
        lock(&self.thread).is_typing()
    }

    pub fn draft(&self) -> String {
        lock(&self.thread).draft().to_string()
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        lock(&self.thread).set_draft(text);
    }

    pub fn can_send(&self) -> bool {
        lock(&self.thread).can_send()
    }

    /// Send `text` and queue a reply for it
    pub fn submit(&self, text: &str) -> Result<MessageId, SubmitError> {
        self.submit_with(|thread| thread.submit(text))
    }

    /// Send the current draft and queue a reply for it
    pub fn submit_draft(&self) -> Result<MessageId, SubmitError> {
        self.submit_with(MessageThread::submit_draft)
    }

    fn submit_with<F>(&self, submit: F) -> Result<MessageId, SubmitError>
    where
        F: FnOnce(&mut MessageThread) -> Result<MessageId, SubmitError>,
    {
        // Events go out under the lock so they cannot overtake the worker's.
        let mut thread = lock(&self.thread);
        let was_typing = thread.is_typing();
        let id = submit(&mut thread)?;

        let Some(message) = thread.last().cloned() else {
            thread.abandon_reply();
            return Ok(id);
        };
        let request = ReplyRequest::new(&self.conversation_id, id, message.content.clone());
        let _ = self.events.send(ThreadEvent::MessageAppended(message));

        if self.requests.send(request).is_err() {
            tracing::warn!(
                conversation = %self.conversation_id,
                "Reply worker is gone, message will not be answered"
            );
            thread.abandon_reply();
        } else if !was_typing {
            let _ = self.events.send(ThreadEvent::TypingChanged(true));
        }

        Ok(id)
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        self.worker.abort();
    }
}

async fn run_reply_worker(
    thread: Arc<Mutex<MessageThread>>,
    service: Arc<dyn ReplyService>,
    mut queue: mpsc::UnboundedReceiver<ReplyRequest>,
    events: broadcast::Sender<ThreadEvent>,
) {
    while let Some(request) = queue.recv().await {
        let outcome = service.reply(&request).await;

        let mut state = lock(&thread);
        match outcome {
            Ok(content) => {
                let id = state.receive_reply(content);
                if let Some(reply) = state.get(id).cloned() {
                    let _ = events.send(ThreadEvent::MessageAppended(reply));
                }
            }
            Err(e) => {
                tracing::warn!(
                    conversation = %request.conversation_id,
                    request = %request.id,
                    "Reply failed: {}",
                    e
                );
                state.abandon_reply();
            }
        }

        if !state.is_typing() {
            let _ = events.send(ThreadEvent::TypingChanged(false));
        }
    }

    tracing::debug!("Reply worker stopped");
}

fn lock(thread: &Mutex<MessageThread>) -> MutexGuard<'_, MessageThread> {
    thread.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reply::{ReplyError, SimulatedReplyService};
    use crate::storage::demo::demo_thread_messages;
    use crate::types::message::{DeliveryStatus, Sender};
    use async_trait::async_trait;
    use tokio::sync::broadcast::error::TryRecvError;
    use tokio::time::{timeout, Duration, Instant};

    fn demo_session() -> ChatSession {
        ChatSession::spawn(
            MessageThread::with_messages("1", demo_thread_messages()),
            Arc::new(SimulatedReplyService::default()),
        )
    }

    async fn next_reply(events: &mut broadcast::Receiver<ThreadEvent>) -> Message {
        loop {
            match events.recv().await.expect("event stream closed") {
                ThreadEvent::MessageAppended(msg) if msg.sender == Sender::Counterpart => {
                    return msg
                }
                _ => {}
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_then_reply_after_delay() {
        let session = demo_session();
        let mut events = session.subscribe();
        let started = Instant::now();

        session.submit("hello").unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.messages.len(), 6);
        let last = snapshot.messages.last().unwrap();
        assert_eq!(last.content, "hello");
        assert_eq!(last.sender, Sender::Me);
        assert_eq!(last.status, DeliveryStatus::Sending);
        assert!(snapshot.is_typing);

        let reply = next_reply(&mut events).await;
        assert!(started.elapsed() >= Duration::from_millis(2000));
        assert_eq!(reply.status, DeliveryStatus::Sent);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.messages.len(), 7);
        assert_eq!(snapshot.messages.last(), Some(&reply));
        assert!(!snapshot.is_typing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_reply_before_delay() {
        let session = demo_session();
        let mut events = session.subscribe();

        session.submit("hello").unwrap();

        let early = timeout(Duration::from_millis(1900), next_reply(&mut events)).await;
        assert!(early.is_err());
        assert_eq!(session.snapshot().messages.len(), 6);
        assert!(session.is_typing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_event_order() {
        let session = demo_session();
        let mut events = session.subscribe();

        session.submit("hello").unwrap();
        let _ = next_reply(&mut events).await;
        drop(events);

        let mut events = session.subscribe();
        session.submit("again").unwrap();

        match events.recv().await.unwrap() {
            ThreadEvent::MessageAppended(msg) => assert_eq!(msg.content, "again"),
            other => panic!("unexpected event {:?}", other),
        }
        assert_eq!(events.recv().await.unwrap(), ThreadEvent::TypingChanged(true));
        match events.recv().await.unwrap() {
            ThreadEvent::MessageAppended(msg) => assert_eq!(msg.sender, Sender::Counterpart),
            other => panic!("unexpected event {:?}", other),
        }
        assert_eq!(events.recv().await.unwrap(), ThreadEvent::TypingChanged(false));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_submits_are_answered_in_order() {
        let session = demo_session();
        let mut events = session.subscribe();
        let started = Instant::now();

        let a = session.submit("a").unwrap();
        let b = session.submit("b").unwrap();
        assert!(a < b);

        let first = next_reply(&mut events).await;
        assert!(session.is_typing());
        let second = next_reply(&mut events).await;
        assert!(started.elapsed() >= Duration::from_millis(4000));
        assert!(first.id < second.id);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.messages.len(), 9);
        let tail: Vec<(Sender, &str)> = snapshot.messages[5..]
            .iter()
            .map(|m| (m.sender, m.content.as_str()))
            .collect();
        assert_eq!(tail[0], (Sender::Me, "a"));
        assert_eq!(tail[1], (Sender::Me, "b"));
        assert_eq!(tail[2].0, Sender::Counterpart);
        assert_eq!(tail[3].0, Sender::Counterpart);
        assert!(!snapshot.is_typing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_submit_is_silent() {
        let session = demo_session();
        let mut events = session.subscribe();

        assert_eq!(session.submit(""), Err(SubmitError::EmptyMessage));
        assert_eq!(session.submit("   "), Err(SubmitError::EmptyMessage));

        assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));
        let snapshot = session.snapshot();
        assert_eq!(snapshot.messages, demo_thread_messages());
        assert!(!snapshot.is_typing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_draft() {
        let session = demo_session();
        session.set_draft("from the input box");
        assert!(session.can_send());

        session.submit_draft().unwrap();

        assert_eq!(session.draft(), "");
        assert!(!session.can_send());
        assert_eq!(
            session.snapshot().messages.last().map(|m| m.content.clone()),
            Some("from the input box".to_string())
        );
    }

    struct FailingService;

    #[async_trait]
    impl ReplyService for FailingService {
        fn name(&self) -> &str {
            "failing"
        }

        async fn reply(&self, _request: &ReplyRequest) -> Result<String, ReplyError> {
            Err(ReplyError::Unavailable("offline".to_string()))
        }
    }

    #[tokio::test]
    async fn test_failed_reply_clears_typing() {
        let session = ChatSession::spawn(MessageThread::new("2"), Arc::new(FailingService));
        let mut events = session.subscribe();

        session.submit("ping").unwrap();

        loop {
            if events.recv().await.unwrap() == ThreadEvent::TypingChanged(false) {
                break;
            }
        }
        let snapshot = session.snapshot();
        assert_eq!(snapshot.messages.len(), 1);
        assert!(!snapshot.is_typing);
    }

    #[derive(Default)]
    struct RecordingService {
        seen: Mutex<Vec<ReplyRequest>>,
    }

    #[async_trait]
    impl ReplyService for RecordingService {
        fn name(&self) -> &str {
            "recording"
        }

        async fn reply(&self, request: &ReplyRequest) -> Result<String, ReplyError> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(format!("re: {}", request.content))
        }
    }

    #[tokio::test]
    async fn test_each_submit_queues_one_request_for_its_message() {
        let service = Arc::new(RecordingService::default());
        let session = ChatSession::spawn(MessageThread::new("3"), service.clone());
        let mut events = session.subscribe();

        let first = session.submit("one").unwrap();
        let second = session.submit("two").unwrap();
        let _ = next_reply(&mut events).await;
        let _ = next_reply(&mut events).await;

        let seen = service.seen.lock().unwrap().clone();
        let queued: Vec<(MessageId, &str)> = seen
            .iter()
            .map(|r| (r.message_id, r.content.as_str()))
            .collect();
        assert_eq!(queued, vec![(first, "one"), (second, "two")]);
        assert!(seen.iter().all(|r| r.conversation_id == "3"));
        assert_ne!(seen[0].id, seen[1].id);
        assert!(!session.is_typing());
        assert_eq!(session.snapshot().messages.len(), 4);
    }
}
