use crate::commands::base_commands::{Commands, parse_date_arg};
use crate::commands::report_format::format_room_list;
use crate::services::aggregation::{available_rooms, partially_available_rooms};
use crate::services::day_converter::DayConverter;
use crate::services::hotel_yaml::load_hotel_from_yaml_file;

pub fn available_command(cmd: Commands) {
    if let Commands::Available {
        input,
        start_date,
        end_date,
        partial,
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
        let selection = if partial {
            partially_available_rooms(&hotel.rooms, start, end, &converter)
        } else {
            available_rooms(&hotel.rooms, start, end, &converter)
        };

        let Some(selection) = selection else {
            eprintln!("Hotel file contains no rooms: {input}");
            return;
        };

        let title = if partial {
            "Partially available rooms:"
        } else {
            "Available rooms:"
        };
        let names: Vec<String> = selection.iter().map(|room| room.name.clone()).collect();
        println!("{}", format_room_list(title, &names));
    }
}
