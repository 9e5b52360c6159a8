//! Static help text shared by `argand ops` and the shell's `help` command.

use argand_eval::Operation;

/// Table of operations with their tags and arity.
pub fn operations_table() -> String {
    let mut out = String::from("Operations:\n");
    for op in Operation::ALL {
        let arity = if op.is_binary() { "a b" } else { "a" };
        out.push_str(&format!(
            "  {:<5} {:<4} {}\n",
            op.symbol(),
            arity,
            op.description()
        ));
    }
    out
}

/// Full help shown by the shell.
pub fn shell_help() -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str("  a <re> <im>        Set the first complex number\n");
    out.push_str("  b <re> <im>        Set the second complex number (binary operations)\n");
    out.push_str("  op <tag>           Select an operation (see below)\n");
    out.push_str("  form               Show the current inputs\n");
    out.push_str("  calc | =           Calculate and append the result to the history\n");
    out.push_str("  plot               Plot the first complex number\n");
    out.push_str("  history            List the calculation history\n");
    out.push_str("  save [path]        Save the history (default: configured history file)\n");
    out.push_str("  load [path]        Load a saved history, replacing the current one\n");
    out.push_str("  clear              Clear the history (the file changes on the next save)\n");
    out.push_str("  theme light|dark   Switch the color theme\n");
    out.push_str("  help               Show this help\n");
    out.push_str("  quit               Exit\n");
    out.push('\n');
    for line in operations_table().lines() {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');
    out
}
