//! Appointment board: pre-placed bookings grouped by staff or service lane
//!
//! The board only shows bookings; placing them is out of scope.

use std::collections::BTreeSet;

use super::filters::Filterable;
use super::records::SAMPLE_DAY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Employee,
    Service,
}

impl ResourceKind {
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Employee => "employee",
            ResourceKind::Service => "service",
        }
    }
}

/// A lane on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: ResourceKind,
    pub color: &'static str,
}

/// One booked appointment; times are minutes after midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Booking {
    pub id: &'static str,
    /// "Customer - Service", or just the service for walk-ins
    pub text: &'static str,
    pub resource_id: &'static str,
    pub start: u32,
    pub end: u32,
    /// Percent complete
    pub progress: u8,
}

const fn at(hour: u32, minute: u32) -> u32 {
    hour * 60 + minute
}

pub const RESOURCES: &[Resource] = &[
    Resource {
        id: "emp1",
        name: "John Smith",
        kind: ResourceKind::Employee,
        color: "#1890ff",
    },
    Resource {
        id: "emp2",
        name: "Jane Doe",
        kind: ResourceKind::Employee,
        color: "#722ed1",
    },
    Resource {
        id: "emp3",
        name: "Bob Wilson",
        kind: ResourceKind::Employee,
        color: "#13c2c2",
    },
    Resource {
        id: "svc1",
        name: "Haircut Service",
        kind: ResourceKind::Service,
        color: "#52c41a",
    },
    Resource {
        id: "svc2",
        name: "Color Treatment",
        kind: ResourceKind::Service,
        color: "#fa8c16",
    },
];

pub const BOOKINGS: &[Booking] = &[
    Booking {
        id: "1",
        text: "Sarah Johnson - Haircut",
        resource_id: "emp1",
        start: at(9, 0),
        end: at(10, 0),
        progress: 100,
    },
    Booking {
        id: "2",
        text: "Mike Chen - Beard Trim",
        resource_id: "emp1",
        start: at(10, 30),
        end: at(11, 0),
        progress: 50,
    },
    Booking {
        id: "3",
        text: "Emma Davis - Color Treatment",
        resource_id: "emp2",
        start: at(14, 0),
        end: at(16, 0),
        progress: 0,
    },
    Booking {
        id: "4",
        text: "Lisa Brown - Styling",
        resource_id: "emp2",
        start: at(11, 0),
        end: at(12, 0),
        progress: 75,
    },
    Booking {
        id: "5",
        text: "Walk-in Consultation",
        resource_id: "emp3",
        start: at(13, 0),
        end: at(13, 30),
        progress: 100,
    },
];

pub fn find_booking(id: &str) -> Option<&'static Booking> {
    BOOKINGS.iter().find(|booking| booking.id == id)
}

pub fn find_resource(id: &str) -> Option<&'static Resource> {
    RESOURCES.iter().find(|resource| resource.id == id)
}

/// How far along a booking is, for its badge color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressLevel {
    Low,
    Medium,
    High,
}

impl ProgressLevel {
    pub fn of(progress: u8) -> Self {
        match progress {
            0..30 => ProgressLevel::Low,
            30..70 => ProgressLevel::Medium,
            _ => ProgressLevel::High,
        }
    }
}

impl Booking {
    pub fn customer(&self) -> &'static str {
        match self.text.split_once(" - ") {
            Some((customer, _)) => customer,
            None => "Walk-in",
        }
    }

    pub fn service(&self) -> &'static str {
        match self.text.split_once(" - ") {
            Some((_, service)) => service,
            None => self.text,
        }
    }

    pub fn staff(&self) -> &'static str {
        find_resource(self.resource_id)
            .map(|resource| resource.name)
            .unwrap_or("Unknown")
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// "9:00 AM - 10:00 AM"
    pub fn time_range(&self) -> String {
        format!("{} - {}", clock_label(self.start), clock_label(self.end))
    }
}

impl Filterable for Booking {
    fn field(&self, column: &str) -> &str {
        match column {
            "employee" => self.staff(),
            "service" => self.service(),
            "date" => SAMPLE_DAY,
            _ => "",
        }
    }

    fn search_values(&self) -> Vec<&str> {
        vec![self.text, self.staff()]
    }
}

/// 12-hour clock label for minutes after midnight
pub fn clock_label(minutes: u32) -> String {
    let hour = (minutes / 60) % 24;
    let minute = minutes % 60;
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", hour12, minute, suffix)
}

/// "1 appointment" / "3 appointments"
pub fn appointment_count(count: usize) -> String {
    if count == 1 {
        "1 appointment".to_string()
    } else {
        format!("{} appointments", count)
    }
}

/// A resource with its bookings in start order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane {
    pub resource: Resource,
    pub bookings: Vec<Booking>,
}

/// Group bookings into one lane per resource, keeping every resource
pub fn lanes(resources: &[Resource], bookings: &[Booking]) -> Vec<Lane> {
    resources
        .iter()
        .map(|resource| {
            let mut lane: Vec<Booking> = bookings
                .iter()
                .filter(|booking| booking.resource_id == resource.id)
                .copied()
                .collect();
            lane.sort_by_key(|booking| booking.start);
            Lane {
                resource: *resource,
                bookings: lane,
            }
        })
        .collect()
}

/// Bookings picked on the board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    selected: BTreeSet<&'static str>,
}

impl BoardState {
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn toggle(&mut self, id: &'static str) {
        if !self.selected.remove(id) {
            self.selected.insert(id);
        }
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn selected_ids(&self) -> Vec<&'static str> {
        self.selected.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lanes_keep_empty_resources_and_sort_by_start() {
        let lanes = lanes(RESOURCES, BOOKINGS);
        assert_eq!(lanes.len(), RESOURCES.len());

        let jane = &lanes[1];
        assert_eq!(jane.resource.name, "Jane Doe");
        let order: Vec<_> = jane.bookings.iter().map(|b| b.id).collect();
        assert_eq!(order, vec!["4", "3"]);

        assert!(lanes[3].bookings.is_empty());
        assert_eq!(appointment_count(lanes[0].bookings.len()), "2 appointments");
        assert_eq!(appointment_count(lanes[2].bookings.len()), "1 appointment");
    }

    #[test]
    fn test_sample_bookings_do_not_overlap() {
        for lane in lanes(RESOURCES, BOOKINGS) {
            for pair in lane.bookings.windows(2) {
                assert!(pair[0].end <= pair[1].start, "{} overlaps {}", pair[0].id, pair[1].id);
            }
        }
    }

    #[test]
    fn test_booking_details() {
        let booking = find_booking("3").unwrap();
        assert_eq!(booking.customer(), "Emma Davis");
        assert_eq!(booking.service(), "Color Treatment");
        assert_eq!(booking.staff(), "Jane Doe");
        assert_eq!(booking.duration_minutes(), 120);
        assert_eq!(booking.time_range(), "2:00 PM - 4:00 PM");

        let walk_in = find_booking("5").unwrap();
        assert_eq!(walk_in.customer(), "Walk-in");
        assert_eq!(walk_in.service(), "Walk-in Consultation");
        assert_eq!(find_booking("99"), None);
    }

    #[test]
    fn test_clock_labels() {
        assert_eq!(clock_label(at(0, 5)), "12:05 AM");
        assert_eq!(clock_label(at(9, 0)), "9:00 AM");
        assert_eq!(clock_label(at(12, 30)), "12:30 PM");
        assert_eq!(clock_label(at(16, 0)), "4:00 PM");
    }

    #[test]
    fn test_progress_levels() {
        assert_eq!(ProgressLevel::of(0), ProgressLevel::Low);
        assert_eq!(ProgressLevel::of(29), ProgressLevel::Low);
        assert_eq!(ProgressLevel::of(50), ProgressLevel::Medium);
        assert_eq!(ProgressLevel::of(70), ProgressLevel::High);
        assert_eq!(ProgressLevel::of(100), ProgressLevel::High);
    }

    #[test]
    fn test_board_selection() {
        let mut board = BoardState::default();
        board.toggle("1");
        board.toggle("4");
        board.toggle("1");
        assert_eq!(board.selected_ids(), vec!["4"]);
        assert!(board.is_selected("4"));
        assert_eq!(board.selected_count(), 1);
    }

    #[test]
    fn test_bookings_filter_by_staff() {
        let booking = find_booking("2").unwrap();
        assert_eq!(booking.field("employee"), "John Smith");
        assert_eq!(booking.field("service"), "Beard Trim");
        assert_eq!(booking.field("date"), SAMPLE_DAY);
    }
}
