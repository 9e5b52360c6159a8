use std::process;

use argand_eval::{parse_operand, plot, OperandInput};

use crate::ui::plot::{render, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::{report_error, OutputFormat, RunContext};

/// `argand plot <re> <im> [<re> <im> ...]`
pub(crate) fn cmd_plot(ctx: &RunContext, coords: &[String]) {
    if coords.is_empty() || coords.len() % 2 != 0 {
        report_error(
            "error: plot takes real/imaginary pairs: <re> <im> [<re> <im> ...]",
            ctx.output,
            ctx.quiet,
        );
        process::exit(1);
    }

    let mut values = Vec::with_capacity(coords.len() / 2);
    for (i, pair) in coords.chunks(2).enumerate() {
        let input = OperandInput::new(pair[0].as_str(), pair[1].as_str());
        match parse_operand(i + 1, &input) {
            Ok(v) => values.push(v),
            Err(e) => {
                report_error(&format!("error: {}", e), ctx.output, ctx.quiet);
                process::exit(1);
            }
        }
    }

    let request = plot(&values);
    tracing::debug!(points = request.points.len(), "plot requested");
    match ctx.output {
        OutputFormat::Text => print!(
            "{}",
            render(&request, DEFAULT_WIDTH, DEFAULT_HEIGHT, ctx.color)
        ),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&request).unwrap_or_default()
        ),
    }
}
