//! Ideation Facilitator - Guided creative-thinking sessions
//!
//! This crate runs structured ideation techniques (Random Word Association,
//! Reverse Brainstorming, Lotus Blossom) as step-by-step sessions, with
//! hybrid technique switching and summary export.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
