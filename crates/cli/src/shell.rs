//! `argand shell` -- interactive calculator session.
//!
//! The shell holds the form (two operand pairs and an operation) and passes
//! each submission to the `Session`. Results, plots and notices are written
//! to the same output; an error never ends the session.

use std::io::{self, BufRead, Write};
use std::path::Path;

use argand_eval::{Calculation, CalculationRequest, OperandInput, Operation};

use crate::session::{Notice, Session};
use crate::ui::help;
use crate::ui::plot::{self, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::ui::theme::{Skin, Theme, SHELL_ELEMENTS};

/// The calculator form.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    pub operand1: OperandInput,
    pub operand2: OperandInput,
    pub operation: Operation,
}

impl Default for Form {
    fn default() -> Self {
        Form {
            operand1: OperandInput::default(),
            operand2: OperandInput::default(),
            operation: Operation::Add,
        }
    }
}

impl Form {
    fn request(&self, operation: Operation) -> CalculationRequest {
        CalculationRequest {
            operation,
            operand1: self.operand1.clone(),
            operand2: Some(self.operand2.clone()),
        }
    }
}

/// Run the shell on stdin/stdout.
pub fn run_interactive(session: &mut Session, color: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(session, stdin.lock(), &mut out, color)
}

/// Run the shell until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    out: &mut W,
    color: bool,
) -> io::Result<()> {
    let mut skin = Skin::apply(session.theme(), SHELL_ELEMENTS, color);
    let mut form = Form::default();

    writeln!(out)?;
    writeln!(
        out,
        "  {}",
        skin.paint("banner", " Argand: complex number calculator ")
    )?;
    writeln!(
        out,
        "  Commands: help, a, b, op, form, calc, plot, history, save, load, clear, theme, quit"
    )?;
    writeln!(out, "  History file: {}", session.history_path().display())?;
    writeln!(out)?;

    let mut line = String::new();
    loop {
        write!(out, "{}", skin.paint("prompt", "argand> "))?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();
        tracing::debug!(command = %cmd, "shell command");

        match cmd.as_str() {
            "help" | "?" => {
                write!(out, "{}", help::shell_help())?;
            }
            "a" | "b" => {
                if parts.len() != 3 {
                    writeln!(out, "  usage: {} <re> <im>", cmd)?;
                    continue;
                }
                let operand = OperandInput::new(parts[1], parts[2]);
                if cmd == "a" {
                    form.operand1 = operand;
                } else {
                    form.operand2 = operand;
                }
                writeln!(
                    out,
                    "  {} = {} {}",
                    skin.paint("label", cmd.as_str()),
                    parts[1],
                    parts[2]
                )?;
            }
            "op" => {
                let Some(tag) = parts.get(1) else {
                    writeln!(out, "  usage: op <tag>")?;
                    write!(out, "{}", help::operations_table())?;
                    continue;
                };
                match tag.parse::<Operation>() {
                    Ok(op) => {
                        form.operation = op;
                        writeln!(
                            out,
                            "  operation = {}",
                            skin.paint("operation", op.symbol())
                        )?;
                    }
                    Err(e) => print_notice(out, &Notice::from_eval(&e))?,
                }
            }
            "form" => {
                print_form(out, &form, &skin)?;
            }
            "calc" | "=" => {
                let request = form.request(form.operation);
                submit(session, &request, out, &skin)?;
            }
            "plot" => {
                let request = form.request(Operation::Plot);
                submit(session, &request, out, &skin)?;
            }
            "history" => {
                print_history(session, out, &skin)?;
            }
            "save" => {
                let path = parts.get(1).map(|p| Path::new(*p));
                match session.save(path) {
                    Ok(p) => writeln!(
                        out,
                        "  saved {} entries to {}",
                        session.history().len(),
                        p.display()
                    )?,
                    Err(n) => print_notice(out, &n)?,
                }
            }
            "load" => {
                let path = parts.get(1).map(|p| Path::new(*p));
                match session.load(path) {
                    Ok(count) => {
                        writeln!(out, "  loaded {} entries", count)?;
                        print_history(session, out, &skin)?;
                    }
                    Err(n) => print_notice(out, &n)?,
                }
            }
            "clear" => {
                session.clear();
                writeln!(out, "  history cleared")?;
            }
            "theme" => match parts.get(1).map(|t| t.parse::<Theme>()) {
                Some(Ok(theme)) => {
                    session.set_theme(theme);
                    skin = Skin::apply(theme, SHELL_ELEMENTS, skin.color());
                    writeln!(out, "  theme = {}", theme.name())?;
                }
                Some(Err(msg)) => writeln!(out, "  {}", msg)?,
                None => writeln!(
                    out,
                    "  theme = {} (usage: theme light|dark)",
                    skin.theme().name()
                )?,
            },
            "quit" | "exit" => {
                break;
            }
            _ => {
                writeln!(
                    out,
                    "  unknown command: {}. Type 'help' for available commands.",
                    cmd
                )?;
            }
        }
    }
    Ok(())
}

// ─── Command handlers ────────────────────────────────────────────────────────

fn submit<W: Write>(
    session: &mut Session,
    request: &CalculationRequest,
    out: &mut W,
    skin: &Skin,
) -> io::Result<()> {
    match session.submit(request) {
        Ok(Calculation::Record(record)) => {
            writeln!(out, "  {}", skin.paint("history", record.display()))
        }
        Ok(Calculation::Plot(req)) => {
            let view = plot::render(&req, DEFAULT_WIDTH, DEFAULT_HEIGHT, skin.color());
            for line in view.lines() {
                writeln!(out, "  {}", line)?;
            }
            Ok(())
        }
        Err(notice) => print_notice(out, &notice),
    }
}

fn print_form<W: Write>(out: &mut W, form: &Form, skin: &Skin) -> io::Result<()> {
    let rows = [
        ("Real Part 1", &form.operand1.real),
        ("Imaginary Part 1", &form.operand1.imag),
        ("Real Part 2", &form.operand2.real),
        ("Imaginary Part 2", &form.operand2.imag),
    ];
    writeln!(out)?;
    for (label, value) in rows {
        writeln!(out, "  {:<17} {}", skin.paint("label", label), value)?;
    }
    writeln!(
        out,
        "  {:<17} {}",
        skin.paint("label", "Operation"),
        skin.paint("operation", form.operation.symbol())
    )?;
    writeln!(out)
}

fn print_history<W: Write>(session: &Session, out: &mut W, skin: &Skin) -> io::Result<()> {
    let history = session.history();
    if history.is_empty() {
        return writeln!(out, "  history is empty");
    }
    for (i, entry) in history.iter().enumerate() {
        writeln!(out, "  {:>3}. {}", i + 1, skin.paint("history", entry))?;
    }
    Ok(())
}

fn print_notice<W: Write>(out: &mut W, notice: &Notice) -> io::Result<()> {
    writeln!(out, "  {}", notice)
}
