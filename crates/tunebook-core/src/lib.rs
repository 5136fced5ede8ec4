pub mod config;
pub mod logging;

pub mod abc;
pub mod catalog;
pub mod fetch;
pub mod importer;
pub mod slug;
pub mod storage;
pub mod url_model;
