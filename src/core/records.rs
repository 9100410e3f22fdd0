//! Static sample records shown by the management pages
//!
//! Records are flat (column id, value) lists so one table, filter and drawer
//! implementation serves every page.

use chrono::NaiveDate;

/// The day the sample data is written around ("today" for date filters)
pub const SAMPLE_DAY: &str = "2024-01-15";

/// Parse `SAMPLE_DAY`
pub fn sample_today() -> Option<NaiveDate> {
    parse_date(SAMPLE_DAY)
}

/// Parse an ISO `YYYY-MM-DD` field value
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// A table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub id: &'static str,
    pub header: &'static str,
    /// Width in pixels
    pub width: u32,
    pub sortable: bool,
}

const fn column(id: &'static str, header: &'static str, width: u32, sortable: bool) -> Column {
    Column {
        id,
        header,
        width,
        sortable,
    }
}

/// One sample record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub id: &'static str,
    pub fields: &'static [(&'static str, &'static str)],
}

impl Record {
    /// Value of a column, or "" when the record has no such field
    pub fn get(&self, column: &str) -> &'static str {
        self.fields
            .iter()
            .find(|(id, _)| *id == column)
            .map(|(_, value)| *value)
            .unwrap_or("")
    }

    /// Display name: the first field
    pub fn title(&self) -> &'static str {
        self.fields.first().map(|(_, value)| *value).unwrap_or(self.id)
    }
}

/// Color family of a status tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Warning,
    Negative,
    Neutral,
}

/// Tag tone for a status value
pub fn status_tone(status: &str) -> Tone {
    match status {
        "Active" | "Paid" => Tone::Positive,
        "Pending" | "On Leave" | "Inactive" => Tone::Warning,
        "Overdue" => Tone::Negative,
        _ => Tone::Neutral,
    }
}

pub const CUSTOMER_COLUMNS: &[Column] = &[
    column("name", "Name", 150, true),
    column("email", "Email", 200, true),
    column("phone", "Phone", 130, false),
    column("lastVisit", "Last Visit", 120, true),
    column("totalSpent", "Total Spent", 120, true),
    column("status", "Status", 100, false),
];

pub const CUSTOMERS: &[Record] = &[
    Record {
        id: "1",
        fields: &[
            ("name", "Sarah Johnson"),
            ("email", "sarah.johnson@email.com"),
            ("phone", "(555) 123-4567"),
            ("lastVisit", "2024-01-10"),
            ("totalSpent", "$450.00"),
            ("status", "Active"),
        ],
    },
    Record {
        id: "2",
        fields: &[
            ("name", "Mike Chen"),
            ("email", "mike.chen@email.com"),
            ("phone", "(555) 234-5678"),
            ("lastVisit", "2024-01-08"),
            ("totalSpent", "$320.00"),
            ("status", "Active"),
        ],
    },
    Record {
        id: "3",
        fields: &[
            ("name", "Emma Davis"),
            ("email", "emma.davis@email.com"),
            ("phone", "(555) 345-6789"),
            ("lastVisit", "2023-12-15"),
            ("totalSpent", "$180.00"),
            ("status", "Inactive"),
        ],
    },
];

pub const EMPLOYEE_COLUMNS: &[Column] = &[
    column("name", "Name", 150, true),
    column("position", "Position", 140, true),
    column("email", "Email", 200, false),
    column("phone", "Phone", 130, false),
    column("hireDate", "Hire Date", 120, true),
    column("status", "Status", 100, false),
];

pub const EMPLOYEES: &[Record] = &[
    Record {
        id: "1",
        fields: &[
            ("name", "John Smith"),
            ("position", "Senior Stylist"),
            ("email", "john.smith@saloon.com"),
            ("phone", "(555) 111-2222"),
            ("hireDate", "2022-03-15"),
            ("status", "Active"),
        ],
    },
    Record {
        id: "2",
        fields: &[
            ("name", "Jane Doe"),
            ("position", "Colorist"),
            ("email", "jane.doe@saloon.com"),
            ("phone", "(555) 333-4444"),
            ("hireDate", "2023-01-10"),
            ("status", "Active"),
        ],
    },
    Record {
        id: "3",
        fields: &[
            ("name", "Bob Wilson"),
            ("position", "Barber"),
            ("email", "bob.wilson@saloon.com"),
            ("phone", "(555) 555-6666"),
            ("hireDate", "2021-08-20"),
            ("status", "On Leave"),
        ],
    },
];

pub const SERVICE_COLUMNS: &[Column] = &[
    column("name", "Service Name", 180, true),
    column("category", "Category", 140, true),
    column("price", "Price", 100, true),
    column("duration", "Duration", 100, false),
    column("description", "Description", 200, false),
    column("status", "Status", 100, false),
];

pub const SERVICES: &[Record] = &[
    Record {
        id: "1",
        fields: &[
            ("name", "Haircut & Style"),
            ("category", "Hair Services"),
            ("price", "$65.00"),
            ("duration", "60 min"),
            ("description", "Professional haircut with styling"),
            ("status", "Active"),
        ],
    },
    Record {
        id: "2",
        fields: &[
            ("name", "Hair Color"),
            ("category", "Color Services"),
            ("price", "$120.00"),
            ("duration", "120 min"),
            ("description", "Full hair coloring service"),
            ("status", "Active"),
        ],
    },
    Record {
        id: "3",
        fields: &[
            ("name", "Beard Trim"),
            ("category", "Grooming"),
            ("price", "$25.00"),
            ("duration", "30 min"),
            ("description", "Professional beard trimming and shaping"),
            ("status", "Active"),
        ],
    },
    Record {
        id: "4",
        fields: &[
            ("name", "Deep Conditioning"),
            ("category", "Hair Treatment"),
            ("price", "$45.00"),
            ("duration", "45 min"),
            ("description", "Intensive hair conditioning treatment"),
            ("status", "Inactive"),
        ],
    },
];

pub const INVOICE_COLUMNS: &[Column] = &[
    column("invoiceNumber", "Invoice #", 120, true),
    column("customer", "Customer", 150, true),
    column("date", "Date", 120, true),
    column("amount", "Amount", 120, true),
    column("status", "Status", 100, false),
    column("dueDate", "Due Date", 120, true),
];

pub const INVOICES: &[Record] = &[
    Record {
        id: "1",
        fields: &[
            ("invoiceNumber", "INV-001"),
            ("customer", "Sarah Johnson"),
            ("date", "2024-01-15"),
            ("amount", "$125.00"),
            ("status", "Paid"),
            ("dueDate", "2024-01-30"),
        ],
    },
    Record {
        id: "2",
        fields: &[
            ("invoiceNumber", "INV-002"),
            ("customer", "Mike Chen"),
            ("date", "2024-01-14"),
            ("amount", "$85.00"),
            ("status", "Pending"),
            ("dueDate", "2024-01-29"),
        ],
    },
    Record {
        id: "3",
        fields: &[
            ("invoiceNumber", "INV-003"),
            ("customer", "Emma Davis"),
            ("date", "2024-01-12"),
            ("amount", "$200.00"),
            ("status", "Overdue"),
            ("dueDate", "2024-01-27"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_fields() {
        let customer = CUSTOMERS[0];
        assert_eq!(customer.title(), "Sarah Johnson");
        assert_eq!(customer.get("phone"), "(555) 123-4567");
        assert_eq!(customer.get("missing"), "");
        assert_eq!(INVOICES[2].title(), "INV-003");
    }

    #[test]
    fn test_every_record_fills_every_column() {
        let tables = [
            (CUSTOMER_COLUMNS, CUSTOMERS),
            (EMPLOYEE_COLUMNS, EMPLOYEES),
            (SERVICE_COLUMNS, SERVICES),
            (INVOICE_COLUMNS, INVOICES),
        ];
        for (columns, records) in tables {
            for record in records {
                for column in columns {
                    assert!(
                        !record.get(column.id).is_empty(),
                        "record {} is missing {}",
                        record.id,
                        column.id
                    );
                }
            }
        }
    }

    #[test]
    fn test_status_tones() {
        assert_eq!(status_tone("Active"), Tone::Positive);
        assert_eq!(status_tone("On Leave"), Tone::Warning);
        assert_eq!(status_tone("Overdue"), Tone::Negative);
        assert_eq!(status_tone("VIP"), Tone::Neutral);
    }

    #[test]
    fn test_dates_parse() {
        assert_eq!(sample_today(), NaiveDate::from_ymd_opt(2024, 1, 15));
        assert!(parse_date(CUSTOMERS[2].get("lastVisit")).is_some());
        assert_eq!(parse_date("$450.00"), None);
    }
}
