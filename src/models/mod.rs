pub mod day_group;
pub mod duty_status;
pub mod location;
pub mod log_entry;
pub mod time_of_day;
pub mod trip_result;
