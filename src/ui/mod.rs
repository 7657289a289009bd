//! egui rendering for the dashboard. Every widget reads through the session,
//! so all of them see the same snapshot within a frame.

pub mod cards;
pub mod grid;
pub mod panels;
pub mod plot;
