mod bouncy_list;
mod status_bar;

pub use bouncy_list::BouncyListWidget;
pub use status_bar::StatusBarWidget;
