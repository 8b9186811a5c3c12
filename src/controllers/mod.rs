pub(crate) mod appointment;
pub(crate) mod auth;
pub(crate) mod patient;
pub(crate) mod professional;
