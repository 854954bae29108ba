//! Terminal rendering for the shaderbake binary

pub mod blocks;
pub mod context;
pub mod live_region;
pub mod output;
pub mod primitives;
pub mod reporter;
pub mod terminal;
pub mod theme;
pub mod views;
