//! Conversation summaries are derived, never persisted: one entry per
//! counterparty, recomputed from the viewer's message list on every
//! request.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

use crate::accounts::application::domain::entities::UserId;
use crate::messaging::application::ports::outgoing::MessageRecord;

#[derive(Debug, Clone, Serialize)]
pub struct ConversationSummary {
    pub counterparty_id: UserId,
    pub last_message: MessageRecord,
    pub last_at: DateTime<Utc>,
    pub unread: u64,
}

/// Fold a descending message list into one summary per counterparty.
///
/// The input order carries the semantics: because `messages_desc` is
/// newest-first, the first message seen for a counterparty is the last
/// one exchanged, and group order is conversation recency. `unread`
/// counts messages addressed to the viewer that are still unread.
pub fn derive_conversations(
    viewer: UserId,
    messages_desc: &[MessageRecord],
) -> Vec<ConversationSummary> {
    let mut order: Vec<UserId> = Vec::new();
    let mut groups: HashMap<UserId, ConversationSummary> = HashMap::new();

    for message in messages_desc {
        let counterparty = if message.sender_id == viewer {
            message.receiver_id
        } else {
            message.sender_id
        };

        let entry = groups.entry(counterparty).or_insert_with(|| {
            order.push(counterparty);
            ConversationSummary {
                counterparty_id: counterparty,
                last_message: message.clone(),
                last_at: message.sent_at,
                unread: 0,
            }
        });

        if message.receiver_id == viewer && !message.read {
            entry.unread += 1;
        }
    }

    order
        .into_iter()
        .filter_map(|id| groups.remove(&id))
        .collect()
}
