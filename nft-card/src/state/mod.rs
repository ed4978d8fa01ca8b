//! Reactive card inputs

pub mod card;
