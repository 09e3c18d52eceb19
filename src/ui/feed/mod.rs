// SPDX-License-Identifier: MPL-2.0
//! The paginated image feed: state machine, rendering, and empty state.

pub mod component;
pub mod empty_state;
pub mod subcomponents;
pub mod view;

pub use component::{Effect, Message, State};
