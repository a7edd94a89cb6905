pub mod method_factory;
pub mod method_filter;
pub mod model_builder;
pub mod operation_filter;
pub mod page_object_model;
