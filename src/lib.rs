pub mod config;
pub mod domain;
pub mod hal;
pub mod routes;
pub mod startup;
pub mod telem;
