pub mod method_selector;
