//! Mood Tracker
//!
//! Records how subjects feel day to day, hands back advice for each mood,
//! and optionally asks an LLM for a short personalised insight. Served over
//! HTTP (`mood-tracker`) or an interactive shell (`mood-shell`).

pub mod advice;
pub mod analytics;
pub mod api;
pub mod config;
pub mod dispatch;
pub mod insight;
pub mod llm;
pub mod mood;
pub mod session;
