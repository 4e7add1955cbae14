// Career Recommendation Engine
// Implements: skill-gap analysis, learning-path planning, timeline and confidence scoring.
// Pure computation; persistence goes through the store traits, never from here.

pub mod confidence;
pub mod engine;
pub mod gaps;
pub mod handlers;
pub mod learning_path;
pub mod providers;
pub mod status;
pub mod timeline;
pub mod validation;

pub use engine::RecommendationEngine;
