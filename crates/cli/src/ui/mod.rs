//! Terminal presentation: themes, the Argand diagram, and help text.

pub mod help;
pub mod plot;
pub mod theme;
