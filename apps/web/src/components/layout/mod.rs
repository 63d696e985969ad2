//! Layout components shared across protected routes.

mod app_shell;
mod side_nav;

pub(crate) use app_shell::AppShell;
pub(crate) use side_nav::SideNav;
