//! Utility helpers shared across viewer modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Small pure helpers kept out of components so they can be unit tested
//! without a browser.

pub mod version;
