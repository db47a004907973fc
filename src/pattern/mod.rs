pub mod checkers;
pub mod gradient;
pub mod pattern;
pub mod rings;
pub mod stripes;
