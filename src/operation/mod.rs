pub mod element;
pub mod normalize;
pub mod operation_model;
