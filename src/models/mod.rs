pub mod hosts;
pub mod url_tools;

pub use hosts::*;
pub use url_tools::*;
