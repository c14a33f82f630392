// Preferences: the persisted theme behind a key-value store seam.

pub mod handlers;
pub mod store;
pub mod theme;
