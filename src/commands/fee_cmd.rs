use crate::commands::base_commands::Commands;
use crate::services::hotel_yaml::load_hotel_from_yaml_file;

pub fn fee_command(cmd: Commands) {
    if let Commands::Fee { input, booking } = cmd {
        let hotel = match load_hotel_from_yaml_file(&input) {
            Ok(hotel) => hotel,
            Err(e) => {
                eprintln!("Failed to load hotel file: {e:?}");
                return;
            }
        };

        let found = hotel.rooms.iter().find_map(|room| {
            room.bookings
                .iter()
                .find(|candidate| candidate.name == booking)
                .map(|candidate| (room, candidate))
        });
        let Some((room, matched)) = found else {
            eprintln!("No booking named {booking} in {input}");
            return;
        };

        match matched.fee(room) {
            Ok(fee) => println!("Fee for {booking}: {fee}"),
            Err(e) => eprintln!("Failed to compute fee: {e:?}"),
        }
    }
}
