pub mod client;
pub mod dto;
pub mod http_catalog;
