//! ZabahSoft "under construction" landing page.
//!
//! Everything except [`app`] is plain state with no dependency on a frame
//! loop, so it can be driven with explicit timestamps in tests.

pub mod app;
pub mod config;
pub mod contact;
pub mod cursor;
pub mod glitch;
pub mod i18n;
pub mod loading;
pub mod page;
pub mod particles;
pub mod theme;

pub use app::LandingApp;
pub use config::Config;
pub use page::Page;
