use std::process;

use argand_storage::HistoryLog;

use crate::session::Notice;
use crate::{report_error, report_warning, OutputFormat, RunContext};

/// `argand history show`
pub(crate) fn cmd_history_show(ctx: &RunContext) {
    let mut history = HistoryLog::new();
    if let Err(e) = history.load(&ctx.history_path) {
        let notice = Notice::from_storage(&e);
        if notice.is_warning() {
            // Nothing usable on disk: report and show an empty history.
            report_warning(&notice.to_string(), ctx.output, ctx.quiet);
        } else {
            report_error(&notice.to_string(), ctx.output, ctx.quiet);
            process::exit(1);
        }
    }

    match ctx.output {
        OutputFormat::Text => {
            for entry in &history {
                println!("{}", entry);
            }
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(history.entries()).unwrap_or_default()
        ),
    }
}

/// `argand history clear` -- truncates the saved history to an empty list.
pub(crate) fn cmd_history_clear(ctx: &RunContext) {
    if let Err(e) = HistoryLog::new().save(&ctx.history_path) {
        report_error(&Notice::from_storage(&e).to_string(), ctx.output, ctx.quiet);
        process::exit(1);
    }
    if !ctx.quiet {
        match ctx.output {
            OutputFormat::Text => println!("history cleared"),
            OutputFormat::Json => println!("{{\"cleared\": true}}"),
        }
    }
}
