//! Shell command grammar.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::sections::SectionKind;
use crate::session::View;

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    LoadCard(Option<PathBuf>),
    SaveCard(Option<PathBuf>),
    LoadWorld(Option<PathBuf>),
    SaveWorld(Option<PathBuf>),
    View(View),
    About,
    Show,
    Fields,
    Get(String),
    Set { path: String, value: String },
    Add(SectionKind),
    Remove { section: SectionKind, index: usize },
    Move { section: SectionKind, from: usize, to: usize },
    New,
    Help,
    Quit,
}

/// Why a line could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("{0}")]
    InvalidArgument(String),
}

pub const HELP: &str = "\
commands:
  load-card [path]              load a character card
  save-card [path]              save the character card
  load-world [path]             load world info
  save-world [path]             save world info
  view character|world          switch panel
  show                          print the active panel as it would be saved
  fields                        list field paths of the active panel
  get <path>                    print a field
  set <path> <text>             overwrite a field (\\n starts a new line)
  add <section>                 append an empty group
  remove <section> <index>      remove a group
  move <section> <from> <to>    reorder a group
  new                           start the active panel over
  about                         about this editor
  help                          this text
  quit                          leave";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let path = || (!rest.is_empty()).then(|| PathBuf::from(rest));

        match name.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "load-card" => Ok(Command::LoadCard(path())),
            "save-card" => Ok(Command::SaveCard(path())),
            "load-world" => Ok(Command::LoadWorld(path())),
            "save-world" => Ok(Command::SaveWorld(path())),
            "view" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "view",
                        what: "`character` or `world`",
                    });
                }
                rest.parse()
                    .map(Command::View)
                    .map_err(CommandError::InvalidArgument)
            }
            "about" => Ok(Command::About),
            "show" => Ok(Command::Show),
            "fields" => Ok(Command::Fields),
            "get" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "get",
                        what: "a field path",
                    });
                }
                Ok(Command::Get(rest.to_string()))
            }
            "set" => {
                let (path, value) = match rest.split_once(char::is_whitespace) {
                    Some((path, value)) => (path, value.trim_start()),
                    None => (rest, ""),
                };
                if path.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "set",
                        what: "a field path",
                    });
                }
                Ok(Command::Set {
                    path: path.to_string(),
                    value: unescape(value),
                })
            }
            "add" => Ok(Command::Add(section_arg("add", rest.split_whitespace().next())?)),
            "remove" => {
                let mut args = rest.split_whitespace();
                let section = section_arg("remove", args.next())?;
                let index = index_arg("remove", args.next())?;
                Ok(Command::Remove { section, index })
            }
            "move" => {
                let mut args = rest.split_whitespace();
                let section = section_arg("move", args.next())?;
                let from = index_arg("move", args.next())?;
                let to = index_arg("move", args.next())?;
                Ok(Command::Move { section, from, to })
            }
            "new" => Ok(Command::New),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn section_arg(command: &'static str, arg: Option<&str>) -> Result<SectionKind, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument {
        command,
        what: "a section (traits, relationships, landmarks, factions)",
    })?;
    arg.parse()
        .map_err(|err: crate::sections::UnknownSection| CommandError::InvalidArgument(err.to_string()))
}

fn index_arg(command: &'static str, arg: Option<&str>) -> Result<usize, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument {
        command,
        what: "a group index",
    })?;
    arg.parse()
        .map_err(|_| CommandError::InvalidArgument(format!("invalid index `{arg}`")))
}

/// Turn the two-character sequence `\n` into a newline and `\\` into `\`.
fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
