//! Report module
//!
//! LLM-readable rendering of analysis results.

pub mod renderer;

pub use renderer::{
    render_analysis, render_anti_patterns, render_ceremonies, render_detection, render_gate,
};
