pub mod alias;
pub mod doc_comment;
pub mod document;
pub mod link;
pub mod metadata;
pub mod page_object_code;
pub mod test_suite_code;
