pub mod generator;
pub mod random;
pub mod report;
pub mod runner;
pub mod scoring;
pub mod source;
