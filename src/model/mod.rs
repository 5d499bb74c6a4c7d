pub mod labels;
pub mod params;
pub mod scores;
