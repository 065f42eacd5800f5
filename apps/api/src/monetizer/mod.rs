// Skill Monetizer
// Implements: skill list editing, ordered keyword classification, opportunity catalog.
// Pure and synchronous; handlers are the only async surface.

pub mod catalog;
pub mod classifier;
pub mod handlers;
pub mod models;
pub mod skills;

pub use classifier::OpportunityClassifier;
