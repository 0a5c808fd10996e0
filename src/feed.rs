//! Scripted message source for the demo viewer.
//!
//! Stands in for the chat client: a background thread hands already-resolved
//! `MessageData` to the UI over a crossbeam channel.

use std::thread;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::model::{mark_group_ends, Attachment, MessageData};

/// Events sent from the feed thread to the UI
#[derive(Debug, Clone)]
pub enum FeedEvent {
    /// A new message at the bottom of the list
    Message(MessageData),
    /// The script has run out
    Finished,
}

/// Start a thread that sends `script` one message per `interval`.
pub fn spawn_feed(script: Vec<MessageData>, interval: Duration) -> Receiver<FeedEvent> {
    let (tx, rx) = unbounded::<FeedEvent>();
    thread::spawn(move || run_feed(script, interval, tx));
    rx
}

fn run_feed(script: Vec<MessageData>, interval: Duration, tx: Sender<FeedEvent>) {
    for msg in script {
        if tx.send(FeedEvent::Message(msg)).is_err() {
            // UI went away
            log::debug!("feed receiver dropped, stopping");
            return;
        }
        thread::sleep(interval);
    }
    let _ = tx.send(FeedEvent::Finished);
}

/// A short two-party conversation exercising every bubble section.
pub fn demo_conversation(me: &str) -> Vec<MessageData> {
    let question = MessageData::new("alice", "Are we still on for the trip planning call tomorrow?");
    let mut messages = vec![
        MessageData::new("alice", "Hey!"),
        question.clone(),
        MessageData::new(me, "Yes, 10am works for me.").with_parent(question),
        MessageData::new(me, "I'll bring the route maps.")
            .with_attachment(Attachment::image("https://img.example/route-2.png"))
            .with_attachment(Attachment::image("https://img.example/route-1.png")),
        MessageData::new("alice", ""),
        MessageData::new(
            "alice",
            "Perfect. Could you also check whether the ferry runs on weekends this late in the season? \
             Last year it stopped in early October.",
        ),
    ];
    for msg in &mut messages {
        msg.is_sent_by_current_user = msg.author == me;
    }
    mark_group_ends(&mut messages);
    messages
}
