pub mod path_builder;
pub mod transition_graph;
