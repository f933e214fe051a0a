pub mod app;
pub mod bibtex;
pub mod citation;
pub mod config;
pub mod domain;
pub mod error;
pub mod latex;
pub mod orcid;
pub mod output;
pub mod work;
pub mod writer;
