pub mod aggregation;
pub mod day_converter;
pub mod hotel_yaml;
pub mod occupancy;
