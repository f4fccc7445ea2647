pub struct RoomOccupancy {
    pub name: String,
    pub percentage: u8,
}

pub struct OccupancyReport {
    pub source: String,
    pub period_start: String,
    pub period_end: String,
    pub total_days: i64,
    pub rooms: Vec<RoomOccupancy>,
    pub total: Option<u8>,
}

pub fn format_occupancy_report(report: &OccupancyReport) -> String {
    let total = match report.total {
        Some(value) => format!("{value}%"),
        None => "n/a".to_string(),
    };

    let mut lines = Vec::new();
    lines.push("Occupancy Report".to_string());
    lines.push(format!("Hotel file: {}", report.source));
    lines.push(format!(
        "Period: {} to {} ({} days)",
        report.period_start, report.period_end, report.total_days
    ));
    lines.push(String::new());
    lines.push("Room | Occupancy".to_string());
    lines.push("-----|----------".to_string());
    for room in &report.rooms {
        lines.push(format!("{} | {}%", room.name, room.percentage));
    }
    lines.push(String::new());
    lines.push(format!("Total occupancy: {total}"));

    lines.join("\n")
}

pub fn format_room_list(title: &str, names: &[String]) -> String {
    let mut lines = Vec::new();
    lines.push(title.to_string());
    if names.is_empty() {
        lines.push("(none)".to_string());
    } else {
        for name in names {
            lines.push(format!("- {name}"));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_report() -> OccupancyReport {
        OccupancyReport {
            source: "hotel.yaml".to_string(),
            period_start: "2026-08-01".to_string(),
            period_end: "2026-08-10".to_string(),
            total_days: 10,
            rooms: vec![
                RoomOccupancy {
                    name: "Double Deluxe".to_string(),
                    percentage: 100,
                },
                RoomOccupancy {
                    name: "Single".to_string(),
                    percentage: 0,
                },
            ],
            total: Some(50),
        }
    }

    #[test]
    fn format_occupancy_report_includes_header_and_table() {
        let output = format_occupancy_report(&build_report());

        assert!(output.contains("Occupancy Report"));
        assert!(output.contains("Hotel file: hotel.yaml"));
        assert!(output.contains("Period: 2026-08-01 to 2026-08-10 (10 days)"));
        assert!(output.contains("Room | Occupancy"));
        assert!(output.contains("Double Deluxe | 100%"));
        assert!(output.contains("Single | 0%"));
        assert!(output.contains("Total occupancy: 50%"));
    }

    #[test]
    fn format_occupancy_report_uses_na_for_missing_total() {
        let mut report = build_report();
        report.total = None;

        let output = format_occupancy_report(&report);
        assert!(output.contains("Total occupancy: n/a"));
    }

    #[test]
    fn format_room_list_renders_one_line_per_room() {
        let names = vec!["Single".to_string(), "Suite".to_string()];
        let output = format_room_list("Available rooms:", &names);
        assert_eq!(output, "Available rooms:\n- Single\n- Suite");
    }

    #[test]
    fn format_room_list_marks_an_empty_selection() {
        let output = format_room_list("Available rooms:", &[]);
        assert_eq!(output, "Available rooms:\n(none)");
    }
}
