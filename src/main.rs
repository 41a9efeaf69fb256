//! csved binary - the interactive command loop
//!
//! Reads commands from stdin, turns them into messages, runs them through
//! the update layer, executes the resulting commands, and re-renders the
//! grid. Row and page numbers are 1-based on the command surface and
//! converted to 0-based here, before any message is constructed.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use csved::cli::CliArgs;
use csved::commands::Cmd;
use csved::messages::{AppMsg, Msg, PageMsg, SessionMsg, TableMsg};
use csved::model::AppModel;
use csved::update::update;
use csved::{view, GridConfig};

const HELP: &str = "\
Commands:
  open <file>            load a CSV/TSV/PSV file (replaces current data)
  show                   redraw the current page
  set <row> <col> <val>  set a cell (row is 1-based; empty value clears)
  add                    append a blank row
  del <row>              delete a row (1-based)
  next | prev | first    page navigation
  goto <page>            jump to a page (1-based)
  size <n>               rows per page (10, 20, 30, 40 or 50)
  save [path]            write CSV (default: edited_data.csv)
  help                   show this help
  quit                   exit
";

/// What a line of input asks for
enum Command {
    Dispatch(Msg),
    Show,
    Help,
    Nothing,
    Invalid(String),
}

fn main() -> Result<()> {
    csved::tracing::init();

    let startup = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;

    let mut config = GridConfig::load();
    if let Some(n) = startup.page_size {
        config.page_size = n;
    }

    let mut model = AppModel::new(config);
    model.output_path = startup.output;

    if let Some(path) = startup.file {
        dispatch(&mut model, Msg::Session(SessionMsg::BeginLoad(path)));
    }
    render(&mut model);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("csved> ");
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next() else { break };
        let line = line.context("failed to read command")?;

        match parse_command(&line) {
            Command::Nothing => {}
            Command::Help => println!("{}", HELP),
            Command::Show => render(&mut model),
            Command::Invalid(msg) => println!("{}", msg),
            Command::Dispatch(msg) => {
                if dispatch(&mut model, msg) {
                    break;
                }
                render(&mut model);
            }
        }
    }

    Ok(())
}

/// Run a message through update and execute the resulting commands
///
/// Returns true when the program should exit.
fn dispatch(model: &mut AppModel, msg: Msg) -> bool {
    let mut next = update(model, msg);
    while let Some(cmd) = next.take() {
        match cmd {
            Cmd::LoadFile { path } => {
                // The read result is the continuation that finishes (or
                // abandons) the in-flight load
                let follow_up = match std::fs::read_to_string(&path) {
                    Ok(content) => Msg::Session(SessionMsg::LoadCompleted { path, content }),
                    Err(e) => Msg::Session(SessionMsg::LoadFailed {
                        path,
                        error: e.to_string(),
                    }),
                };
                next = update(model, follow_up);
            }
            Cmd::SaveFile { path, content } => match std::fs::write(&path, content) {
                Ok(()) => {
                    tracing::info!("Saved {}", path.display());
                    model.status = Some(format!("Saved to {}", path.display()));
                }
                Err(e) => {
                    tracing::error!("Save of {} failed: {}", path.display(), e);
                    model.status = Some(format!("Failed to save {}: {}", path.display(), e));
                }
            },
            Cmd::Quit => return true,
        }
    }
    false
}

fn render(model: &mut AppModel) {
    print!("{}", view::render(model));
    if let Some(status) = model.status.take() {
        println!("{}", status);
    }
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Nothing;
    }

    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map(|(w, r)| (w, r.trim()))
        .unwrap_or((line, ""));

    match word {
        "open" => {
            if rest.is_empty() {
                Command::Invalid("usage: open <file>".to_string())
            } else {
                Command::Dispatch(Msg::Session(SessionMsg::BeginLoad(PathBuf::from(rest))))
            }
        }
        "show" => Command::Show,
        "set" => parse_set(rest),
        "add" => Command::Dispatch(Msg::Table(TableMsg::AddRow)),
        "del" => match parse_index(rest) {
            Ok(row) => Command::Dispatch(Msg::Table(TableMsg::RemoveRow { row })),
            Err(e) => Command::Invalid(format!("usage: del <row> ({})", e)),
        },
        "next" => Command::Dispatch(Msg::Page(PageMsg::Next)),
        "prev" => Command::Dispatch(Msg::Page(PageMsg::Prev)),
        "first" => Command::Dispatch(Msg::Page(PageMsg::First)),
        "goto" => match parse_index(rest) {
            Ok(page) => Command::Dispatch(Msg::Page(PageMsg::Goto(page))),
            Err(e) => Command::Invalid(format!("usage: goto <page> ({})", e)),
        },
        "size" => match rest.parse::<usize>() {
            Ok(n) => Command::Dispatch(Msg::Page(PageMsg::SetPageSize(n))),
            Err(_) => Command::Invalid("usage: size <10|20|30|40|50>".to_string()),
        },
        "save" => {
            let path = (!rest.is_empty()).then(|| PathBuf::from(rest));
            Command::Dispatch(Msg::Session(SessionMsg::Export { path }))
        }
        "help" => Command::Help,
        "quit" | "exit" | "q" => Command::Dispatch(Msg::App(AppMsg::Quit)),
        other => Command::Invalid(format!("unknown command {:?} (try `help`)", other)),
    }
}

/// Parse a 1-based row/page number into a 0-based index
fn parse_index(token: &str) -> std::result::Result<usize, String> {
    match token.parse::<usize>() {
        Ok(0) => Err("numbering starts at 1".to_string()),
        Ok(n) => Ok(n - 1),
        Err(_) => Err(format!("expected a number, got {:?}", token)),
    }
}

/// Parse `set <row> <column> [value]`; the value may contain spaces
fn parse_set(rest: &str) -> Command {
    let usage = || Command::Invalid("usage: set <row> <column> <value>".to_string());

    let Some((row_tok, rest)) = rest.split_once(char::is_whitespace) else {
        return usage();
    };
    let row = match parse_index(row_tok) {
        Ok(row) => row,
        Err(e) => return Command::Invalid(format!("usage: set <row> <column> <value> ({})", e)),
    };

    let rest = rest.trim();
    if rest.is_empty() {
        return usage();
    }
    let (column, value) = rest
        .split_once(char::is_whitespace)
        .map(|(c, v)| (c, v.trim()))
        .unwrap_or((rest, ""));

    Command::Dispatch(Msg::Table(TableMsg::EditCell {
        row,
        column: column.to_string(),
        value: value.to_string(),
    }))
}
