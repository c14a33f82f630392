// Form State Manager: owned form state, entry collections, photo attachment, sample data.

pub mod entries;
pub mod handlers;
pub mod photo;
pub mod sample;
pub mod state;
