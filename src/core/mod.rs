pub mod config;
pub mod distribution;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod material;
pub mod misc;
pub mod pbrt;
pub mod reflection;
pub mod registry;
pub mod rng;
pub mod sampling;
pub mod spectrum;
