// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! - [`command_handling`] - check-in/check-out validation against a model
//! - [`event_application`] - replay determinism and order sensitivity

mod command_handling;
mod event_application;
