pub mod host_catalog;
pub mod url_tools;
