pub mod available_cmd;
pub mod base_commands;
pub mod fee_cmd;
pub mod occupancy_cmd;
pub mod report_format;
