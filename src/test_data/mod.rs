pub mod combination;
pub mod input_collector;
pub mod test_data_generator;
pub mod test_data_model;
