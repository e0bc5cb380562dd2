//! Timer-driven chat simulation.
//!
//! A simulation replays a template's example conversation with
//! human-feeling pacing: a typing indicator appears, the message is
//! revealed after a role-dependent delay, then a short pause before the
//! next message. The schedule runs on a spawned task that emits
//! [`SimulationEvent`]s over a channel; the owning state machine
//! ([`Simulation`]) applies them and filters out events from runs that
//! have since been cancelled.

use apg_protocol::{ChatMessage, Role, SimulationEvent};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};
use uuid::Uuid;

/// Pacing for a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Delay before the first typing indicator.
    pub initial: Duration,
    /// Typing duration before a user message is revealed.
    pub user_typing: Duration,
    /// Typing duration before an assistant message is revealed.
    pub assistant_typing: Duration,
    /// Pause between a reveal and the next typing indicator.
    pub between: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            initial: Duration::from_millis(300),
            user_typing: Duration::from_millis(500),
            assistant_typing: Duration::from_millis(1500),
            between: Duration::from_millis(400),
        }
    }
}

impl Timings {
    fn typing_for(&self, role: Role) -> Duration {
        match role {
            Role::User => self.user_typing,
            Role::Assistant => self.assistant_typing,
        }
    }
}

/// Handle to a spawned simulation run.
///
/// Dropping the handle aborts the task, so a run can never outlive the
/// state machine that started it.
#[derive(Debug)]
pub struct RunHandle {
    run_id: Uuid,
    task: JoinHandle<()>,
}

impl RunHandle {
    /// The id stamped on every event this run emits.
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Stop the run immediately. No further events are delivered once
    /// pending ones are drained and filtered by run id.
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Whether the underlying task has finished or been aborted.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for RunHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn a simulation task that replays `transcript` over `events_tx`.
///
/// The task sends a `TypingStarted`/`MessageRevealed` pair per message
/// and a final `Settled`, then exits. If the receiver is dropped the
/// task stops at the next send.
pub fn spawn_run(
    transcript: Vec<ChatMessage>,
    timings: Timings,
    events_tx: UnboundedSender<SimulationEvent>,
) -> RunHandle {
    let run_id = Uuid::new_v4();
    let task = tokio::spawn(async move {
        sleep(timings.initial).await;
        for (index, message) in transcript.into_iter().enumerate() {
            if index > 0 {
                sleep(timings.between).await;
            }
            let started = SimulationEvent::TypingStarted {
                run_id,
                index,
                role: message.role,
            };
            if events_tx.send(started).is_err() {
                return;
            }
            sleep(timings.typing_for(message.role)).await;
            let revealed = SimulationEvent::MessageRevealed {
                run_id,
                index,
                message,
            };
            if events_tx.send(revealed).is_err() {
                return;
            }
        }
        let _ = events_tx.send(SimulationEvent::Settled { run_id });
    });
    RunHandle { run_id, task }
}

/// Lifecycle phase of the simulation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulationPhase {
    /// No run has started, or the panel was reset.
    #[default]
    Idle,
    /// A run is in flight; messages are still being revealed.
    Running,
    /// The active run delivered its whole transcript.
    Settled,
}

/// State machine driving the simulated conversation panel.
///
/// Holds the messages revealed so far, the current typing indicator,
/// and the handle of the active run. Events from a cancelled or
/// superseded run carry a stale run id and are dropped in [`apply`].
///
/// [`apply`]: Simulation::apply
#[derive(Debug, Default)]
pub struct Simulation {
    phase: SimulationPhase,
    revealed: Vec<ChatMessage>,
    typing: Option<(usize, Role)>,
    handle: Option<RunHandle>,
}

impl Simulation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SimulationPhase {
        self.phase
    }

    /// Messages revealed so far, in transcript order.
    pub fn revealed(&self) -> &[ChatMessage] {
        &self.revealed
    }

    /// The typing indicator, if one is showing: message index and role.
    pub fn typing(&self) -> Option<(usize, Role)> {
        self.typing
    }

    /// Start replaying a transcript.
    ///
    /// Returns `false` without side effects while a run is in flight;
    /// starting from `Settled` is allowed and begins a fresh replay.
    pub fn start(
        &mut self,
        transcript: Vec<ChatMessage>,
        timings: Timings,
        events_tx: UnboundedSender<SimulationEvent>,
    ) -> bool {
        if self.phase == SimulationPhase::Running {
            return false;
        }
        self.clear();
        self.handle = Some(spawn_run(transcript, timings, events_tx));
        self.phase = SimulationPhase::Running;
        true
    }

    /// Apply one event from the channel.
    ///
    /// Events whose run id does not match the active run are ignored;
    /// this covers events already queued when a run was cancelled.
    pub fn apply(&mut self, event: SimulationEvent) {
        let Some(handle) = &self.handle else {
            return;
        };
        if event.run_id() != handle.run_id() {
            return;
        }
        match event {
            SimulationEvent::TypingStarted { index, role, .. } => {
                self.typing = Some((index, role));
            }
            SimulationEvent::MessageRevealed { message, .. } => {
                self.typing = None;
                self.revealed.push(message);
            }
            SimulationEvent::Settled { .. } => {
                self.typing = None;
                self.handle = None;
                self.phase = SimulationPhase::Settled;
            }
        }
    }

    /// Cancel any active run and return the panel to `Idle` with no
    /// revealed messages.
    pub fn reset(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
        self.clear();
    }

    fn clear(&mut self) {
        self.phase = SimulationPhase::Idle;
        self.revealed.clear();
        self.typing = None;
        self.handle = None;
    }
}
