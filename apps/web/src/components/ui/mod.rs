//! Small presentational building blocks.

mod alert;
mod button;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::Button;
pub(crate) use spinner::Spinner;
