//! Reactive state containers for the viewer.
//!
//! SYSTEM CONTEXT
//! ==============
//! These plain structs are wrapped in `RwSignal` by pages and components.
//! `viewer` owns everything fetched from the API; `ui` owns tab selection and
//! card expansion.

pub mod ui;
pub mod viewer;
