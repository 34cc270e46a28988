//! Parse orchestration and external collaborators

pub mod collaborators;
pub mod orchestrator;
