//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components turn bundle sections into tabbed grids of collapsible cards.
//! Card expansion lives in the `TabsState` context provided by
//! `tab_container`; everything else flows down as immutable props.

pub mod arena_panel;
pub mod card;
pub mod content_view;
pub mod highlights_panel;
pub mod section;
pub mod tab_container;
