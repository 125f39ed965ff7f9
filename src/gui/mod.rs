//! GUI module - User interface components

mod app;
mod chart_viewer;
mod fonts;
mod nav_bar;
mod sections;
mod widgets;

pub use app::HeroApp;
pub use chart_viewer::{ChartViewer, ChartViewerAction};
pub use nav_bar::{NavAction, NavBar};
pub use sections::{LandingPage, Section};
