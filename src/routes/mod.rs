pub(crate) mod appointments;
pub(crate) mod auth;
pub(crate) mod patients;
pub(crate) mod professionals;
pub(crate) mod router;
pub(crate) mod user;
