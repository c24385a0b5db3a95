//! Plan/execute engine: detect the framework, plan the filesystem changes,
//! show them, then run the setup steps.

pub mod components;
pub mod detector;
pub mod pipeline;
pub mod planner;
pub mod presentation;
pub mod recipes;
pub mod steps;
pub mod types;
