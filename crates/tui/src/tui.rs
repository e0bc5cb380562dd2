//! Terminal lifecycle and event plumbing.
//!
//! `Tui` owns raw-mode setup and teardown and exposes two things to the
//! application loop: a merged stream of input and draw events, and a
//! [`FrameRequester`] for asking for redraws. Redraw requests go through
//! a small scheduler that keeps at most one armed deadline, so a burst
//! of requests produces a single draw. The app only ever asks for an
//! immediate frame or the delayed copy-confirmation revert, which is
//! all this scheduler supports: an earlier request moves the deadline
//! forward, a later one is absorbed by the pending draw.

use std::io::stdout;
use std::io::Stdout;
use std::pin::Pin;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::Event;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::execute;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::select;
use tokio::sync::mpsc::unbounded_channel;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::sleep_until;
use tokio::time::Instant;
use tokio_stream::Stream;
use tokio_stream::StreamExt;

/// Events delivered to the application loop.
#[derive(Debug)]
pub enum TuiEvent {
    /// Keyboard event.
    Key(KeyEvent),
    /// Bracketed-paste text.
    Paste(String),
    /// A scheduled or resize-triggered redraw.
    Draw,
}

/// Wrapper around the ratatui terminal.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    frame_schedule_tx: UnboundedSender<Instant>,
    draw_rx: Option<UnboundedReceiver<()>>,
}

impl Tui {
    /// Initialize the terminal in raw mode with the alternate screen
    /// and start the frame scheduler.
    pub fn init() -> Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnableBracketedPaste, EnterAlternateScreen)?;

        set_panic_hook();

        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

        let (frame_schedule_tx, frame_schedule_rx) = unbounded_channel();
        let (draw_tx, draw_rx) = unbounded_channel();
        tokio::spawn(run_frame_scheduler(frame_schedule_rx, draw_tx));

        Ok(Self {
            terminal,
            frame_schedule_tx,
            draw_rx: Some(draw_rx),
        })
    }

    /// Restore the terminal to its original state.
    pub fn restore(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Get a handle for scheduling draws.
    pub fn frame_requester(&self) -> FrameRequester {
        FrameRequester {
            frame_schedule_tx: self.frame_schedule_tx.clone(),
        }
    }

    /// Merge crossterm input and scheduled draws into one stream.
    ///
    /// The draw side is consumed by the first call; a second stream
    /// would carry input events only.
    pub fn event_stream(&mut self) -> Pin<Box<dyn Stream<Item = TuiEvent> + Send + 'static>> {
        let mut draws = self.draw_rx.take();
        let mut inputs = crossterm::event::EventStream::new();

        Box::pin(async_stream::stream! {
            loop {
                let next_draw = async {
                    match draws.as_mut() {
                        Some(rx) => rx.recv().await,
                        None => None,
                    }
                };
                select! {
                    Some(()) = next_draw => yield TuiEvent::Draw,
                    Some(input) = inputs.next() => match input {
                        Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                            yield TuiEvent::Key(key);
                        }
                        Ok(Event::Paste(pasted)) => yield TuiEvent::Paste(pasted),
                        Ok(Event::Resize(_, _)) => yield TuiEvent::Draw,
                        Ok(_) | Err(_) => {}
                    },
                    else => break,
                }
            }
        })
    }

    /// Draw the UI with the provided function.
    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Collapse frame requests into single draw notifications.
///
/// Holds at most one armed deadline. A request earlier than the armed
/// deadline replaces it; a later request is already covered by the
/// pending draw and is dropped. Ends when either channel closes.
async fn run_frame_scheduler(mut requests: UnboundedReceiver<Instant>, draws: UnboundedSender<()>) {
    let mut armed: Option<Instant> = None;
    loop {
        match armed {
            None => match requests.recv().await {
                Some(at) => armed = Some(at),
                None => break,
            },
            Some(at) => {
                let sleep = sleep_until(at);
                tokio::pin!(sleep);
                select! {
                    request = requests.recv() => match request {
                        Some(earlier) if earlier < at => armed = Some(earlier),
                        Some(_) => {}
                        None => break,
                    },
                    () = &mut sleep => {
                        armed = None;
                        if draws.send(()).is_err() {
                            break;
                        }
                    }
                }
            }
        }
    }
}

/// Handle for scheduling frame redraws.
#[derive(Clone, Debug)]
pub struct FrameRequester {
    frame_schedule_tx: UnboundedSender<Instant>,
}

impl FrameRequester {
    /// Schedule a frame to be drawn immediately.
    pub fn schedule_frame(&self) {
        let _ = self.frame_schedule_tx.send(Instant::now());
    }

    /// Schedule a frame to be drawn after a delay.
    pub fn schedule_frame_in(&self, dur: Duration) {
        let _ = self.frame_schedule_tx.send(Instant::now() + dur);
    }

    /// Requester whose scheduled frames go nowhere.
    #[cfg(test)]
    pub(crate) fn noop() -> Self {
        let (tx, _rx) = unbounded_channel();
        Self {
            frame_schedule_tx: tx,
        }
    }
}

/// Set a panic hook that restores the terminal before panicking.
fn set_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduler() -> (UnboundedSender<Instant>, UnboundedReceiver<()>) {
        let (schedule_tx, schedule_rx) = unbounded_channel();
        let (draw_tx, draw_rx) = unbounded_channel();
        tokio::spawn(run_frame_scheduler(schedule_rx, draw_tx));
        (schedule_tx, draw_rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_scheduler_fires_earliest_deadline_once() {
        let (schedule_tx, mut draw_rx) = scheduler();

        let start = Instant::now();
        schedule_tx.send(start + Duration::from_millis(100)).unwrap();
        schedule_tx.send(start + Duration::from_millis(10)).unwrap();
        schedule_tx.send(start + Duration::from_millis(50)).unwrap();

        assert_eq!(draw_rx.recv().await, Some(()));
        assert_eq!(start.elapsed(), Duration::from_millis(10));

        // One draw covers all three requests.
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(draw_rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_immediate_frame_preempts_delayed_frame() {
        let (schedule_tx, mut draw_rx) = scheduler();
        let requester = FrameRequester {
            frame_schedule_tx: schedule_tx,
        };

        let start = Instant::now();
        requester.schedule_frame_in(Duration::from_secs(2));
        requester.schedule_frame();

        assert_eq!(draw_rx.recv().await, Some(()));
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scheduler_ends_when_requesters_drop() {
        let (schedule_tx, schedule_rx) = unbounded_channel::<Instant>();
        let (draw_tx, mut draw_rx) = unbounded_channel();
        let scheduler = tokio::spawn(run_frame_scheduler(schedule_rx, draw_tx));

        drop(schedule_tx);
        assert_eq!(draw_rx.recv().await, None);
        scheduler.await.unwrap();
    }
}
