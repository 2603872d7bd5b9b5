//! Use cases orchestrating ports and domain logic

pub mod diagnosis_session;
