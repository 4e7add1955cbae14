// Talent review: nine-box performance/potential placement.

pub mod handlers;
pub mod nine_box;
