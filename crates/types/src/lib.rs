pub mod color;
pub mod geometry;
pub mod input;
pub mod report;
pub mod scoring;

pub use color::Color;
pub use geometry::Rect;
pub use input::{CrawlData, GeoScore, SectionScores, Signals};
pub use report::*;
pub use scoring::{effort_label, tier_for, Category, Priority, Score, Status};
