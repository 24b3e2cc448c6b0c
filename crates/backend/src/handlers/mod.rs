pub mod a001_region;
