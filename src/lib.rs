// SPDX-License-Identifier: MPL-2.0
//! `cat_lens` is a small cat-image browser built with the Iced GUI framework.
//!
//! It paginates through TheCatAPI with both manual Previous/Next controls and
//! scroll-to-bottom loading, and demonstrates internationalization with
//! Fluent, user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/cat_lens/0.1.0")]

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
