pub mod sequence_builder;
pub mod sequence_model;
