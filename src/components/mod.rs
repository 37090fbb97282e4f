//! UI Components for the portfolio showcase.

mod fade_in;
mod lightbox;
mod nav_link;
mod particles;
mod project_card;
mod project_modal;
mod screenshot_grid;
mod tab_panel;
mod tab_sidebar;

pub use fade_in::FadeIn;
pub use lightbox::LightboxOverlay;
pub use nav_link::NavLink;
pub use particles::ParticleField;
pub use project_card::ProjectCardView;
pub use project_modal::ProjectModal;
pub use screenshot_grid::ScreenshotGrid;
pub use tab_panel::TabPanel;
pub use tab_sidebar::TabSidebarNav;
