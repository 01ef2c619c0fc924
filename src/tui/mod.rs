//! Interactive subnet table.
//!
//! The [`model`] holds all state and is driven by [`model::Msg`] values.
//! [`run`] owns the terminal, turns key presses, resizes and status timers
//! into messages and performs the effects the model returns.

pub mod clipboard;
pub mod history;
pub mod keys;
pub mod layout;
pub mod model;
pub mod range;
pub mod render;
pub mod styles;
pub mod terminal;

pub use clipboard::{copy_to_clipboard, osc52_sequence};
pub use history::{Edit, History, UNDO_LIMIT};
pub use keys::{action_for, Action, FULL_HELP, SHORT_HELP};
pub use model::{Effect, Model, Msg, COPY_STATUS, EXPORT_STATUS, STATUS_TIMEOUT};
pub use render::draw;
pub use terminal::{install_panic_hook, TerminalSession};

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use std::error::Error;
use std::io;
use tokio::time::{sleep_until, Instant};

/// Pending status clear: when and for which message.
type StatusDeadline = Option<(Instant, u64)>;

async fn status_deadline(deadline: StatusDeadline) -> u64 {
    match deadline {
        Some((at, seq)) => {
            sleep_until(at).await;
            seq
        }
        None => futures::future::pending().await,
    }
}

/// Run the interactive table for `cidr` until the user quits.
///
/// If export was requested during the session, the tree is printed as JSON
/// on stdout after the terminal is restored.
///
/// # Arguments
///
/// * `cidr` - Network to explore, e.g. `10.0.0.0/16`
/// * `initial_split` - Optional prefix to pre-split the network to
pub async fn run(cidr: &str, initial_split: Option<u8>) -> Result<(), Box<dyn Error>> {
    let mut model = Model::new(cidr, initial_split)?;
    let (width, height) = crossterm::terminal::size().unwrap_or((0, 0));
    model.update(Msg::Resize(width, height));

    install_panic_hook();
    let mut session = TerminalSession::new()?;
    let result = event_loop(&mut session, &mut model).await;
    session.restore();
    result?;

    if model.export_requested() {
        println!("{}", model.export_json()?);
    }
    log::info!("interactive session ended rows={}", model.rows().len());
    Ok(())
}

async fn event_loop(session: &mut TerminalSession, model: &mut Model) -> Result<(), Box<dyn Error>> {
    let mut events = EventStream::new();
    let mut deadline: StatusDeadline = None;

    loop {
        session.terminal_mut().draw(|frame| draw(frame, &*model))?;

        let msg = tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => match action_for(key) {
                    Some(action) => Msg::Action(action),
                    None => continue,
                },
                Some(Ok(Event::Resize(width, height))) => Msg::Resize(width, height),
                Some(Ok(_)) => continue,
                Some(Err(err)) => return Err(err.into()),
                None => return Ok(()),
            },
            seq = status_deadline(deadline) => {
                deadline = None;
                Msg::ClearStatus(seq)
            }
        };

        for effect in model.update(msg) {
            match effect {
                Effect::Quit => return Ok(()),
                Effect::ClearStatusAfter(delay, seq) => {
                    deadline = Some((Instant::now() + delay, seq));
                }
                Effect::Copy(text) => {
                    if let Err(err) = copy_to_clipboard(&mut io::stdout(), &text) {
                        log::warn!("clipboard copy failed: {err}");
                    }
                }
            }
        }
    }
}
