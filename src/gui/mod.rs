pub mod app;
pub mod theme;
pub mod viewport_renderer;

pub use app::GuiApp;
pub use viewport_renderer::ViewportRenderer;
