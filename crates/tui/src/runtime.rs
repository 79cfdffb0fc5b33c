//! Application runtime and event loop.

use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;
use tracing::{debug, info, warn};

use crate::{App, TransferOutcome};

/// Run `app` in the terminal until the user accepts or cancels.
pub fn run(mut app: App) -> Result<TransferOutcome> {
	app.run()
}

impl App {
	/// Pump the terminal event loop until the user exits with a result.
	///
	/// The terminal is restored and the input thread joined on every exit path.
	pub fn run(&mut self) -> Result<TransferOutcome> {
		let mut terminal = ratatui::init();
		let reader = InputReader::spawn(poll_terminal);

		let result = self.drive(&mut terminal, &reader);

		ratatui::restore();
		let released = execute!(stdout(), DisableMouseCapture).map_err(Into::into);
		let result = settle(settle(result, released), reader.finish());

		match &result {
			Ok(outcome) => debug!(accepted = outcome.accepted, "transfer session finished"),
			Err(err) => warn!(error = %err, "transfer session aborted"),
		}
		result
	}

	fn drive(
		&mut self,
		terminal: &mut DefaultTerminal,
		reader: &InputReader,
	) -> Result<TransferOutcome> {
		terminal.clear()?;
		execute!(stdout(), EnableMouseCapture)?;
		info!(
			left = self.list.left_items().len(),
			right = self.list.right_items().len(),
			"transfer session started"
		);

		let mut pending_events = VecDeque::new();

		loop {
			loop {
				match reader.events.try_recv() {
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						return Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			while let Some(event) = pending_events.pop_front() {
				match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						if let Some(outcome) = self.handle_key(key) {
							return Ok(outcome);
						}
					}
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => {}
				}
			}

			terminal.draw(|frame| self.draw(frame))?;

			thread::sleep(Duration::from_millis(16));
		}
	}
}

fn poll_terminal() -> Result<Option<Event>> {
	if event::poll(Duration::from_millis(50))? {
		Ok(Some(event::read()?))
	} else {
		Ok(None)
	}
}

/// Keep the first error of a session and its cleanup step.
fn settle<T>(result: Result<T>, cleanup: Result<()>) -> Result<T> {
	match (result, cleanup) {
		(Ok(value), Ok(())) => Ok(value),
		(Err(err), _) | (Ok(_), Err(err)) => Err(err),
	}
}

/// Background thread forwarding input events over a channel.
///
/// Dropping the reader stops the thread; [`InputReader::finish`] also joins it.
struct InputReader {
	events: mpsc::Receiver<Event>,
	running: Arc<AtomicBool>,
	handle: Option<JoinHandle<Result<()>>>,
}

impl InputReader {
	fn spawn<F>(mut next_event: F) -> Self
	where
		F: FnMut() -> Result<Option<Event>> + Send + 'static,
	{
		let (event_tx, events) = mpsc::channel();
		let running = Arc::new(AtomicBool::new(true));
		let flag = Arc::clone(&running);

		let handle = thread::spawn(move || -> Result<()> {
			while flag.load(Ordering::Relaxed) {
				if let Some(event) = next_event()?
					&& event_tx.send(event).is_err()
				{
					break;
				}
			}
			Ok(())
		});

		Self {
			events,
			running,
			handle: Some(handle),
		}
	}

	/// Stop the thread and wait for it, surfacing its error.
	fn finish(mut self) -> Result<()> {
		self.running.store(false, Ordering::Relaxed);
		match self.handle.take().map(JoinHandle::join) {
			Some(Ok(result)) => result,
			Some(Err(panic)) => std::panic::resume_unwind(panic),
			None => Ok(()),
		}
	}
}

impl Drop for InputReader {
	fn drop(&mut self) {
		self.running.store(false, Ordering::Relaxed);
	}
}
