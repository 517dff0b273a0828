//! Command dispatcher.
//!
//! The [`Viewer`] runs one blocking loop over a stack of sessions: resample the
//! window size, paint the top session, read one key, apply it. Leaving a session
//! pops it and resumes the one underneath; the loop ends when the stack is empty.

pub mod help;
pub mod session;

use crate::config::ViewerConfig;
use crate::error::Result;
use crate::file_handler::Document;
use crate::input::{completes_jump, prompt_line, prompt_line_number, KeyCommand};
use crate::render::{paint_frame, render_message, Message, UNKNOWN_KEY};
use crate::terminal::{enter_raw_mode, reset_screen, TermDevice};
use std::io::Write;

pub use help::{HELP_NAME, HELP_TEXT};
pub use session::{Session, SessionKind, SessionStack, MAX_SESSION_DEPTH};

/// Prompt shown while typing a search pattern
pub const SEARCH_PROMPT: &str = "/";

/// What the loop does after a key has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Stay,
    OpenHelp,
    Exit,
}

/// Interactive viewer over one terminal device and one output stream
pub struct Viewer<'d, D: TermDevice, W: Write> {
    device: &'d D,
    out: W,
    config: ViewerConfig,
}

impl<'d, D: TermDevice, W: Write> Viewer<'d, D, W> {
    pub fn new(device: &'d D, out: W, config: ViewerConfig) -> Self {
        Self {
            device,
            out,
            config,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Hand back the output stream
    pub fn into_output(self) -> W {
        self.out
    }

    /// View `document` until the user quits or input ends.
    pub fn run(&mut self, document: &Document) -> Result<()> {
        let name = self.config.display_name.clone();
        self.run_from(document, name, SessionKind::Document)
    }

    /// View the built-in help text as the root session.
    pub fn run_help(&mut self) -> Result<()> {
        let help = Document::from(HELP_TEXT);
        self.run_from(&help, HELP_NAME.to_string(), SessionKind::Help)
    }

    fn run_from(&mut self, document: &Document, name: String, kind: SessionKind) -> Result<()> {
        let result = self.run_sessions(document, name, kind);

        // The sessions are gone and their modes restored; the screen still needs tearing down
        if let Err(err) = &result {
            log::debug!("viewer stopped: {}", err);
            if let Err(reset_err) = reset_screen(&mut self.out) {
                log::warn!("failed to reset the screen: {}", reset_err);
            }
        }
        result
    }

    fn run_sessions(
        &mut self,
        document: &Document,
        name: String,
        kind: SessionKind,
    ) -> Result<()> {
        let help = Document::from(HELP_TEXT);
        let mut stack = SessionStack::new();
        stack.push(self.open(document, name, kind)?)?;

        loop {
            let depth = stack.depth();
            let Some(session) = stack.top_mut() else {
                break;
            };

            match self.step(session, depth)? {
                Transition::Stay => {}
                Transition::OpenHelp => {
                    let help_session =
                        self.open(&help, HELP_NAME.to_string(), SessionKind::Help)?;
                    stack.push(help_session)?;
                }
                Transition::Exit => {
                    if let Some(session) = stack.pop() {
                        session.close(&mut self.out)?;
                    }
                }
            }
        }

        Ok(())
    }

    fn open<'a>(
        &self,
        document: &'a Document,
        name: String,
        kind: SessionKind,
    ) -> Result<Session<'a, 'd, D>> {
        let guard = enter_raw_mode(self.device)?;
        let size = self.device.window_size()?;
        Ok(Session::new(kind, document, name, size, guard))
    }

    fn step(&mut self, session: &mut Session<'_, 'd, D>, depth: usize) -> Result<Transition> {
        let size = self.device.window_size()?;
        session
            .viewport
            .resize(usize::from(size.rows), usize::from(size.cols));
        self.paint(session)?;

        let Some(key) = self.device.read_byte()? else {
            return Ok(Transition::Exit);
        };
        let command = KeyCommand::from_key(key);
        session.last_key = command.status_key(key);

        match command {
            KeyCommand::Quit => return Ok(Transition::Exit),
            KeyCommand::LineDown => {
                session.viewport.line_down();
            }
            KeyCommand::LineUp => {
                session.viewport.line_up();
            }
            KeyCommand::GoToStart => {
                session.viewport.to_top();
            }
            KeyCommand::GoToEnd => {
                session.viewport.to_bottom();
            }
            KeyCommand::PageDown => {
                session.viewport.page_down();
            }
            KeyCommand::PageUp => {
                session.viewport.page_up();
            }
            KeyCommand::StartSearch => self.search(session)?,
            KeyCommand::NextMatch => {
                let document = session.document();
                session.search.find_next(document, &mut session.viewport);
            }
            KeyCommand::JumpPrefix => match self.device.read_byte()? {
                Some(next) if completes_jump(next) => self.jump(session)?,
                Some(_) => {}
                None => return Ok(Transition::Exit),
            },
            KeyCommand::Help => {
                if session.kind() == SessionKind::Help || depth >= MAX_SESSION_DEPTH {
                    session.last_key = UNKNOWN_KEY;
                } else {
                    return Ok(Transition::OpenHelp);
                }
            }
            KeyCommand::Unknown => {}
        }

        Ok(Transition::Stay)
    }

    fn paint(&mut self, session: &Session<'_, 'd, D>) -> Result<()> {
        paint_frame(
            &mut self.out,
            session.document(),
            session.viewport(),
            session.search(),
            &session.status_line(),
            &self.config.theme,
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn search(&mut self, session: &mut Session<'_, 'd, D>) -> Result<()> {
        let row = session.status_row();
        let pattern = prompt_line(
            self.device,
            &mut self.out,
            row,
            SEARCH_PROMPT,
            self.config.prompt_max_len,
        )?;

        let document = session.document();
        let found = match &pattern {
            Some(pattern) => session
                .search
                .start_search(document, &mut session.viewport, pattern.clone())
                .is_match(),
            None => {
                session.search.clear();
                false
            }
        };

        if !found {
            self.acknowledge(row, &Message::NotFound(pattern.unwrap_or_default()))?;
        }
        Ok(())
    }

    fn jump(&mut self, session: &mut Session<'_, 'd, D>) -> Result<()> {
        let row = session.status_row();
        let requested =
            prompt_line_number(self.device, &mut self.out, row, self.config.prompt_max_len)?;

        let accepted = usize::try_from(requested)
            .ok()
            .map(|line| session.viewport.jump_to_line(line));

        match accepted {
            Some(Ok(_)) => Ok(()),
            Some(Err(rejected)) => {
                log::debug!("line jump rejected: {}", rejected);
                self.acknowledge(row, &Message::IncorrectLine)
            }
            None => {
                log::debug!("line jump rejected: negative line {}", requested);
                self.acknowledge(row, &Message::IncorrectLine)
            }
        }
    }

    /// Show `message` and wait for one key, which is discarded.
    fn acknowledge(&mut self, row: u16, message: &Message) -> Result<()> {
        render_message(&mut self.out, row, message, &self.config.theme)?;
        self.device.read_byte()?;
        Ok(())
    }
}
