pub mod config;
pub mod map_resource;
