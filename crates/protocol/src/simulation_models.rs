//! Chat simulation event protocol.
//!
//! The simulation sequencer runs in a background task and streams these
//! events to the UI over a channel. Every event carries the `Uuid` of
//! the run that produced it; the UI compares it against the run it is
//! currently tracking and drops anything stale, so a cancelled run can
//! never mutate state that has already been discarded.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::template_models::{ChatMessage, Role};

/// Events emitted by a simulation run, in strict transcript order.
///
/// For a transcript of N messages a completed run emits exactly
/// `TypingStarted`/`MessageRevealed` once per message followed by a
/// single `Settled`. At most one message is ever "typing" at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum SimulationEvent {
    /// The typing indicator for message `index` switched on.
    TypingStarted {
        run_id: Uuid,
        index: usize,
        role: Role,
    },

    /// Message `index` finished "typing" and is now visible.
    MessageRevealed {
        run_id: Uuid,
        index: usize,
        message: ChatMessage,
    },

    /// The whole transcript has been revealed; the run is finished.
    Settled { run_id: Uuid },
}

impl SimulationEvent {
    /// The run this event belongs to.
    pub fn run_id(&self) -> Uuid {
        match self {
            SimulationEvent::TypingStarted { run_id, .. }
            | SimulationEvent::MessageRevealed { run_id, .. }
            | SimulationEvent::Settled { run_id } => *run_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_tagged_serialization() {
        let run_id = Uuid::new_v4();
        let event = SimulationEvent::TypingStarted {
            run_id,
            index: 0,
            role: Role::Assistant,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "typingStarted");
        assert!(json["payload"].is_object());
    }

    #[test]
    fn test_run_id_accessor() {
        let run_id = Uuid::new_v4();
        let event = SimulationEvent::Settled { run_id };
        assert_eq!(event.run_id(), run_id);
    }
}
