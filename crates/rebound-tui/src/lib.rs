pub mod app;
pub mod event;
pub mod gesture;
pub mod input;
pub mod surface;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use theme::GruvboxMaterial;
