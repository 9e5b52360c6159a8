pub(crate) mod calc;
pub(crate) mod history;
pub(crate) mod plot;
