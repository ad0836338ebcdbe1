//! Landing module - the static dashboard page shown on first load.
//!
//! Content lives in [`LandingPage`]; [`render_landing_page`] turns it into a
//! complete HTML document.

mod content;
mod render;

pub use content::{
    format_long_date, format_short_date, ActivityCard, InfographicCard, LandingPage, NavLink,
};
pub use render::{escape_html, render_landing_page};
