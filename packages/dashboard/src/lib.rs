//! # Dashboard core
//!
//! Turns the typed rows from the `api` crate into what the page shows, with
//! no dependency on a UI framework:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`format`] | capitalization, byte sizes, experience, skill labels |
//! | [`skills`] | folding skill transactions into per-skill totals |
//! | [`audit`] | up/down percentage scaling, bar colors, [`AuditView`] |
//! | [`profile`] | [`ProfileView`] (banner + info lines) |
//! | [`activity`] | recent-activity display lines |
//! | [`chart`] | retained SVG [`Scene`]s for the progress bars and the skills radar |
//! | [`surface`] | the [`Surface`] trait the UI implements |
//! | [`pipeline`] | [`Dashboard`]: startup sequence, audit refresh, logout |

pub mod activity;
pub mod audit;
pub mod chart;
pub mod format;
pub mod pipeline;
pub mod profile;
pub mod skills;
pub mod surface;

pub use audit::{scale_pair, AuditView, BarView};
pub use chart::{ProgressBar, RadarChart, Scene, Shape, BAR_HEIGHT};
pub use pipeline::{Dashboard, Session, Startup};
pub use profile::ProfileView;
pub use skills::{aggregate_skills, SkillTotal};
pub use surface::{Severity, Surface};
