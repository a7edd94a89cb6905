pub mod export;
pub mod scenario_model;
pub mod suite_generator;
