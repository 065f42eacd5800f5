pub mod extraction;
pub mod idea;
