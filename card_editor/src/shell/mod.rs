//! Interactive terminal shell.
//!
//! Reads one command per line and maps it onto the editor session, the way a
//! menu bar would. Nothing typed here can end the process except `quit` or
//! end of input: every failure is printed and the prompt comes back.

mod command;

pub use command::*;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use card_schema::DocumentKind;
use tracing::debug;

use crate::config::EditorConfig;
use crate::error::EditorResult;
use crate::session::EditorSession;

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// A shell over any line source and sink.
pub struct Shell<R, W> {
    session: EditorSession,
    config: EditorConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(config: EditorConfig, input: R, output: W) -> Self {
        Self {
            session: EditorSession::new(config.default_view),
            config,
            input,
            output,
        }
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    /// Give back the output sink, e.g. to inspect what was written.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "[{}] {}", self.session.active_view(), self.config.prompt)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(());
            };

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(CommandError::Empty) => continue,
                Err(err) => {
                    writeln!(self.output, "error: {err}")?;
                    continue;
                }
            };

            debug!(?command, "shell command");
            if self.execute(command)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn execute(&mut self, command: Command) -> io::Result<Flow> {
        match command {
            Command::LoadCard(path) => self.load(DocumentKind::CharacterCard, path)?,
            Command::SaveCard(path) => self.save(DocumentKind::CharacterCard, path)?,
            Command::LoadWorld(path) => self.load(DocumentKind::WorldInfo, path)?,
            Command::SaveWorld(path) => self.save(DocumentKind::WorldInfo, path)?,
            Command::View(view) => {
                self.session.switch_view(view);
                writeln!(self.output, "showing the {view} panel")?;
            }
            Command::About => {
                writeln!(self.output, "{}", EditorSession::about())?;
            }
            Command::Show => {
                let result = self.session.active_panel().document_json();
                self.report(result, |out, text| writeln!(out, "{text}"))?;
            }
            Command::Fields => self.list_fields()?,
            Command::Get(path) => {
                let result = self.session.active_panel().field(&path).map(str::to_string);
                self.report(result, |out, value| writeln!(out, "{value}"))?;
            }
            Command::Set { path, value } => {
                let result = self.session.active_panel_mut().set_field(&path, &value);
                self.report(result, |_, _| Ok(()))?;
            }
            Command::Add(section) => {
                let result = self.session.active_panel_mut().add_group(section).and_then(|_| {
                    self.session
                        .active_panel()
                        .group_count(section)
                        .map(|n| n - 1)
                });
                self.report(result, |out, index| {
                    writeln!(out, "added {section}.{index}")
                })?;
            }
            Command::Remove { section, index } => {
                let result = self
                    .session
                    .active_panel_mut()
                    .remove_group_at(section, index);
                self.report(result, |out, _| writeln!(out, "removed {section}.{index}"))?;
            }
            Command::Move { section, from, to } => {
                let result = self.session.active_panel_mut().move_group(section, from, to);
                self.report(result, |_, _| Ok(()))?;
            }
            Command::New => {
                let view = self.session.active_view();
                self.session.reset(view);
                writeln!(self.output, "started a new {}", view.document_kind())?;
            }
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn load(&mut self, kind: DocumentKind, path: Option<PathBuf>) -> io::Result<()> {
        let Some(path) = self.resolve_path(kind, path)? else {
            return Ok(());
        };
        let result = self.session.load(kind, &path);
        self.report(result, |out, _| writeln!(out, "{kind} loaded"))
    }

    fn save(&mut self, kind: DocumentKind, path: Option<PathBuf>) -> io::Result<()> {
        let Some(path) = self.resolve_path(kind, path)? else {
            return Ok(());
        };
        let echo = self.config.echo_on_save && kind == DocumentKind::CharacterCard;
        let result = self.session.save(kind, &path);
        self.report(result, |out, text| {
            writeln!(out, "{kind} saved to {}", path.display())?;
            if echo {
                writeln!(out, "{text}")?;
            }
            Ok(())
        })
    }

    /// Use the given path, or ask for one. An empty answer cancels.
    fn resolve_path(&mut self, kind: DocumentKind, path: Option<PathBuf>) -> io::Result<Option<PathBuf>> {
        if path.is_some() {
            return Ok(path);
        }

        // An empty answer cancels.
        write!(self.output, "{kind} file: ")?;
        self.output.flush()?;

        let answer = self.read_line()?.unwrap_or_default();
        let answer = answer.trim();
        if answer.is_empty() {
            debug!(%kind, "file selection cancelled");
            return Ok(None);
        }
        Ok(Some(PathBuf::from(answer)))
    }

    fn list_fields(&mut self) -> io::Result<()> {
        let panel = self.session.active_panel();
        for path in panel.field_paths() {
            let value = panel.field(&path).unwrap_or_default();
            match self.config.presets_for(&path) {
                Some(presets) => writeln!(
                    self.output,
                    "{path} = {value:?}  (e.g. {})",
                    presets.join(", ")
                )?,
                None => writeln!(self.output, "{path} = {value:?}")?,
            }
        }
        Ok(())
    }

    /// Print a result: the success callback, or `error: ...`.
    fn report<T>(
        &mut self,
        result: EditorResult<T>,
        on_ok: impl FnOnce(&mut W, T) -> io::Result<()>,
    ) -> io::Result<()> {
        match result {
            Ok(value) => on_ok(&mut self.output, value),
            Err(err) => writeln!(self.output, "error: {err}"),
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
