pub mod region_map;
