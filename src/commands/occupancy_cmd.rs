use crate::commands::base_commands::{Commands, parse_date_arg};
use crate::commands::report_format::{OccupancyReport, RoomOccupancy, format_occupancy_report};
use crate::services::aggregation::total_occupancy_percentage;
use crate::services::day_converter::DayConverter;
use crate::services::hotel_yaml::load_hotel_from_yaml_file;
use crate::services::occupancy::occupancy_percentage_over;

pub fn occupancy_command(cmd: Commands) {
    if let Commands::Occupancy {
        input,
        start_date,
        end_date,
    } = cmd
    {
        let hotel = match load_hotel_from_yaml_file(&input) {
            Ok(hotel) => hotel,
            Err(e) => {
                eprintln!("Failed to load hotel file: {e:?}");
                return;
            }
        };

        let start = match start_date.as_deref().map(parse_date_arg).transpose() {
            Ok(value) => value,
            Err(e) => {
                eprintln!("Failed to parse start date: {e:?}");
                return;
            }
        };
        let end = match end_date.as_deref().map(parse_date_arg).transpose() {
            Ok(value) => value,
            Err(e) => {
                eprintln!("Failed to parse end date: {e:?}");
                return;
            }
        };

        let converter = DayConverter::new(hotel.timezone_offset_minutes);
        let range = converter.resolve_range(start, end);

        let rooms = hotel
            .rooms
            .iter()
            .map(|room| RoomOccupancy {
                name: room.name.clone(),
                percentage: occupancy_percentage_over(room, range, &converter),
            })
            .collect();

        let report = OccupancyReport {
            source: input,
            period_start: start_date.unwrap_or_else(|| "today".to_string()),
            period_end: end_date.unwrap_or_else(|| "today".to_string()),
            total_days: range.total_days(),
            rooms,
            total: total_occupancy_percentage(&hotel.rooms, start, end, &converter),
        };
        println!("{}", format_occupancy_report(&report));
    }
}
