use std::process;

use argand_eval::{Calculation, CalculationRequest, OperandInput, Operation, Outcome};

use crate::session::Session;
use crate::ui::plot::{render, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::{report_error, OutputFormat, RunContext};

/// Operands for `argand calc`, as typed.
pub(crate) struct CalcArgs {
    pub operation: String,
    pub re1: String,
    pub im1: String,
    pub re2: Option<String>,
    pub im2: Option<String>,
    pub record: bool,
}

pub(crate) fn cmd_calc(ctx: &RunContext, args: CalcArgs) {
    let operation: Operation = match args.operation.parse() {
        Ok(op) => op,
        Err(e) => {
            report_error(&format!("error: {}", e), ctx.output, ctx.quiet);
            process::exit(1);
        }
    };

    let operand2 = match (args.re2, args.im2) {
        (Some(re), Some(im)) => Some(OperandInput::new(re, im)),
        (None, None) => None,
        _ => {
            report_error(
                "error: the second operand needs both a real and an imaginary part",
                ctx.output,
                ctx.quiet,
            );
            process::exit(1);
        }
    };

    let request = CalculationRequest {
        operation,
        operand1: OperandInput::new(args.re1, args.im1),
        operand2,
    };

    let mut session = Session::new(&ctx.history_path, ctx.theme);
    if args.record {
        // Start from the saved history so the new entry is appended to it.
        // A malformed file is not overwritten.
        if let Err(notice) = session.resume() {
            report_error(&notice.to_string(), ctx.output, ctx.quiet);
            process::exit(1);
        }
    }

    let calc = match session.submit(&request) {
        Ok(c) => c,
        Err(notice) => {
            report_error(&notice.to_string(), ctx.output, ctx.quiet);
            process::exit(1);
        }
    };

    match calc {
        Calculation::Record(record) => {
            let recorded = args.record;
            if recorded {
                tracing::info!(path = %ctx.history_path.display(), "recording calculation");
                if let Err(notice) = session.save(None) {
                    report_error(&notice.to_string(), ctx.output, ctx.quiet);
                    process::exit(1);
                }
            }
            match ctx.output {
                OutputFormat::Text => println!("{}", record.display()),
                OutputFormat::Json => {
                    let result = match record.outcome() {
                        Outcome::Value(v) => serde_json::to_value(v).unwrap_or_default(),
                        Outcome::Error(e) => serde_json::json!({
                            "kind": "error",
                            "message": e.to_string(),
                        }),
                    };
                    let json = serde_json::json!({
                        "display": record.display(),
                        "operation": record.operation(),
                        "result": result,
                        "recorded": recorded,
                    });
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&json).unwrap_or_default()
                    );
                }
            }
        }
        Calculation::Plot(req) => match ctx.output {
            OutputFormat::Text => {
                print!("{}", render(&req, DEFAULT_WIDTH, DEFAULT_HEIGHT, ctx.color))
            }
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&req).unwrap_or_default()
            ),
        },
    }
}
