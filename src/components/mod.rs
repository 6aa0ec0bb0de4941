// ABOUTME: UI components for the TUI interface including the toast group, alert list and help

pub mod help;
pub mod layout;
pub mod toast_group;

pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use toast_group::ToastGroupComponent;
