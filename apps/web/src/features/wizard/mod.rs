pub(crate) mod navigator;
pub(crate) mod state;
