//! Per-page layout: filters, actions, body and drawer contents

use super::board::{Booking, find_booking};
use super::drawer::{DrawerContent, DrawerItem, DrawerSection, DrawerSubject, DrawerVisual};
use super::filters::{DatePreset, FilterConfig, SelectFilter};
use super::records::{
    CUSTOMER_COLUMNS, CUSTOMERS, Column, EMPLOYEE_COLUMNS, EMPLOYEES, INVOICE_COLUMNS, INVOICES,
    Record, SERVICE_COLUMNS, SERVICES,
};
use super::routes::Route;
use super::toolbar::{ActionSpec, Enablement};

/// What fills the page below the filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageBody {
    Table {
        columns: &'static [Column],
        records: &'static [Record],
    },
    /// The read-only appointment board
    Board,
}

/// A management page built from filters, actions and a body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    pub route: Route,
    pub filters: FilterConfig,
    pub actions: &'static [ActionSpec],
    pub body: PageBody,
    /// Singular name of the record kind, for "New ..." drawers
    pub noun: &'static str,
    pub drawer_width: u32,
}

const NEW: ActionSpec = ActionSpec::new("new", "New", "+").primary();
const ARCHIVE: ActionSpec = ActionSpec::new("archive", "Archive", "▤").icon_only();
const EXPORT: ActionSpec = ActionSpec::new("export", "Export", "⇪").icon_only();

const APPOINTMENTS: PageSpec = PageSpec {
    route: Route::Appointments,
    filters: FilterConfig {
        search_placeholder: "Search appointments...",
        date_column: Some("date"),
        date_presets: &[DatePreset::Today, DatePreset::ThisWeek, DatePreset::ThisMonth],
        selects: &[
            SelectFilter {
                column: "employee",
                placeholder: "Select Employee",
                options: &["John Smith", "Jane Doe", "Bob Wilson"],
            },
            SelectFilter {
                column: "service",
                placeholder: "Select Service",
                options: &["Haircut", "Beard Trim", "Color Treatment"],
            },
        ],
    },
    actions: &[
        NEW,
        ARCHIVE,
        EXPORT,
        ActionSpec::new("reschedule", "Reschedule Selected", "◷")
            .enabled(Enablement::AnySelected),
    ],
    body: PageBody::Board,
    noun: "Appointment",
    drawer_width: 450,
};

const INVOICING: PageSpec = PageSpec {
    route: Route::Invoicing,
    filters: FilterConfig {
        search_placeholder: "Search invoices...",
        date_column: Some("date"),
        date_presets: &[DatePreset::Today, DatePreset::ThisWeek, DatePreset::ThisMonth],
        selects: &[SelectFilter {
            column: "status",
            placeholder: "Select Status",
            options: &["Paid", "Pending", "Overdue", "Draft"],
        }],
    },
    actions: &[
        ActionSpec::new("new-invoice", "New Invoice", "+").primary(),
        ActionSpec::new("record-payment", "Record Payment", "$").enabled(Enablement::AnySelected),
        ActionSpec::new("export", "Export", "⇪"),
    ],
    body: PageBody::Table {
        columns: INVOICE_COLUMNS,
        records: INVOICES,
    },
    noun: "Invoice",
    drawer_width: 400,
};

const CRM: PageSpec = PageSpec {
    route: Route::Crm,
    filters: FilterConfig {
        search_placeholder: "Search customers...",
        date_column: Some("lastVisit"),
        date_presets: &[DatePreset::ThisWeek, DatePreset::ThisMonth, DatePreset::LastMonth],
        selects: &[SelectFilter {
            column: "status",
            placeholder: "Select Status",
            options: &["Active", "Inactive", "VIP"],
        }],
    },
    actions: &[
        NEW,
        ARCHIVE,
        EXPORT,
        ActionSpec::new("contact", "Contact Selected", "✉")
            .primary()
            .enabled(Enablement::AnySelected),
    ],
    body: PageBody::Table {
        columns: CUSTOMER_COLUMNS,
        records: CUSTOMERS,
    },
    noun: "Customer",
    drawer_width: 450,
};

const EMPLOYEE_PAGE: PageSpec = PageSpec {
    route: Route::Employees,
    filters: FilterConfig {
        search_placeholder: "Search employees...",
        date_column: Some("hireDate"),
        date_presets: &[DatePreset::ThisWeek, DatePreset::ThisMonth, DatePreset::ThisYear],
        selects: &[
            SelectFilter {
                column: "position",
                placeholder: "Select Position",
                options: &["Senior Stylist", "Stylist", "Colorist", "Barber"],
            },
            SelectFilter {
                column: "status",
                placeholder: "Select Status",
                options: &["Active", "On Leave", "Inactive"],
            },
        ],
    },
    actions: &[
        NEW,
        ARCHIVE,
        EXPORT,
        ActionSpec::new("schedule", "View Schedule", "◷").enabled(Enablement::AnySelected),
    ],
    body: PageBody::Table {
        columns: EMPLOYEE_COLUMNS,
        records: EMPLOYEES,
    },
    noun: "Employee",
    drawer_width: 450,
};

const SERVICE_PAGE: PageSpec = PageSpec {
    route: Route::Services,
    filters: FilterConfig {
        search_placeholder: "Search services...",
        date_column: None,
        date_presets: &[],
        selects: &[
            SelectFilter {
                column: "category",
                placeholder: "Select Category",
                options: &["Hair Services", "Color Services", "Grooming", "Hair Treatment"],
            },
            SelectFilter {
                column: "status",
                placeholder: "Select Status",
                options: &["Active", "Inactive"],
            },
        ],
    },
    actions: &[
        NEW,
        ARCHIVE,
        EXPORT,
        ActionSpec::new("edit", "Edit Selected", "✎").enabled(Enablement::ExactlyOne),
        ActionSpec::new("pricing", "Update Pricing", "$").enabled(Enablement::AnySelected),
    ],
    body: PageBody::Table {
        columns: SERVICE_COLUMNS,
        records: SERVICES,
    },
    noun: "Service",
    drawer_width: 400,
};

/// Page layout for a management route; `None` for the dashboard and settings
pub fn page_spec(route: Route) -> Option<PageSpec> {
    match route {
        Route::Appointments => Some(APPOINTMENTS),
        Route::Invoicing => Some(INVOICING),
        Route::Crm => Some(CRM),
        Route::Employees => Some(EMPLOYEE_PAGE),
        Route::Services => Some(SERVICE_PAGE),
        Route::Dashboard | Route::Settings => None,
    }
}

impl PageSpec {
    fn find_record(&self, id: &str) -> Option<Record> {
        match self.body {
            PageBody::Table { records, .. } => records.iter().find(|r| r.id == id).copied(),
            PageBody::Board => None,
        }
    }

    /// Drawer contents for a subject on this page; `None` if the subject is
    /// not found
    pub fn drawer_content(&self, subject: DrawerSubject) -> Option<DrawerContent> {
        match subject {
            DrawerSubject::New => Some(self.new_record_drawer()),
            DrawerSubject::Booking(id) => {
                let booking = find_booking(id)?;
                Some(appointment_drawer(booking, self.drawer_width))
            }
            DrawerSubject::Record(id) => {
                let record = self.find_record(id)?;
                Some(match self.route {
                    Route::Crm => customer_drawer(&record, self.drawer_width),
                    Route::Employees => employee_drawer(&record, self.drawer_width),
                    _ => self.record_details_drawer(&record),
                })
            }
        }
    }

    fn new_record_drawer(&self) -> DrawerContent {
        let items = match self.body {
            PageBody::Table { columns, .. } => columns
                .iter()
                .map(|column| DrawerItem::field(column.header, "Not set"))
                .collect(),
            PageBody::Board => ["Customer", "Service", "Staff Member", "Duration"]
                .into_iter()
                .map(|label| DrawerItem::field(label, "Not set"))
                .collect(),
        };

        DrawerContent {
            title: format!("New {}", self.noun),
            width: self.drawer_width,
            visual: None,
            quick_actions: &[],
            sections: vec![DrawerSection {
                title: "Details",
                items,
            }],
        }
    }

    /// One section listing every column of the record
    fn record_details_drawer(&self, record: &Record) -> DrawerContent {
        let items = match self.body {
            PageBody::Table { columns, .. } => columns
                .iter()
                .map(|column| DrawerItem::field(column.header, record.get(column.id)))
                .collect(),
            PageBody::Board => Vec::new(),
        };

        DrawerContent {
            title: format!("{} Details", self.noun),
            width: self.drawer_width,
            visual: Some(DrawerVisual {
                heading: record.title().to_string(),
                subheading: None,
                status: status_of(record),
            }),
            quick_actions: &[],
            sections: vec![DrawerSection {
                title: "Details",
                items,
            }],
        }
    }
}

fn status_of(record: &Record) -> Option<&'static str> {
    Some(record.get("status")).filter(|status| !status.is_empty())
}

fn appointment_drawer(booking: &Booking, width: u32) -> DrawerContent {
    let customer = CUSTOMERS.iter().find(|r| r.get("name") == booking.customer());
    let contact = |column: &str| {
        customer
            .map(|record| record.get(column))
            .unwrap_or("Not on file")
    };

    DrawerContent {
        title: "Appointment Details".to_string(),
        width,
        visual: Some(DrawerVisual {
            heading: booking.customer().to_string(),
            subheading: Some(format!("{} · {}", booking.service(), booking.time_range())),
            status: None,
        }),
        quick_actions: &["Reschedule", "Check In Customer", "Start Service"],
        sections: vec![
            DrawerSection {
                title: "Appointment Details",
                items: vec![
                    DrawerItem::field("Customer", booking.customer()),
                    DrawerItem::field("Service", booking.service()),
                    DrawerItem::field("Staff Member", booking.staff()),
                    DrawerItem::field("Duration", format!("{} minutes", booking.duration_minutes())),
                    DrawerItem::field("Progress", format!("{}%", booking.progress)),
                ],
            },
            DrawerSection {
                title: "Customer Information",
                items: vec![
                    DrawerItem::field("Phone", contact("phone")),
                    DrawerItem::field("Email", contact("email")),
                ],
            },
            DrawerSection {
                title: "Service History",
                items: vec![
                    DrawerItem::Entry {
                        title: "Previous Visit",
                        detail: "Dec 15, 2024 - Haircut & Styling",
                        amount: "$85.00",
                    },
                    DrawerItem::Tags {
                        label: "Preferred Services",
                        values: &["Haircut", "Styling", "Color Touch-up"],
                    },
                ],
            },
        ],
    }
}

fn customer_drawer(record: &Record, width: u32) -> DrawerContent {
    DrawerContent {
        title: format!("{} Details", record.get("name")),
        width,
        visual: Some(DrawerVisual {
            heading: record.get("name").to_string(),
            subheading: Some(format!("Total spent {}", record.get("totalSpent"))),
            status: status_of(record),
        }),
        quick_actions: &["Call Customer", "Send Email", "Schedule Appointment"],
        sections: vec![
            DrawerSection {
                title: "Contact Information",
                items: vec![
                    DrawerItem::field("Email", record.get("email")),
                    DrawerItem::field("Phone", record.get("phone")),
                    DrawerItem::field("Address", "123 Main St, City, State 12345"),
                ],
            },
            DrawerSection {
                title: "Preferences",
                items: vec![
                    DrawerItem::Tags {
                        label: "Preferred Services",
                        values: &["Haircut", "Styling"],
                    },
                    DrawerItem::field("Preferred Staff", "Sarah Johnson"),
                    DrawerItem::field("Notes", "Regular customer, prefers morning appointments"),
                ],
            },
            DrawerSection {
                title: "Appointment History",
                items: vec![
                    DrawerItem::Entry {
                        title: "Haircut & Styling",
                        detail: "Dec 15, 2024 - Sarah Johnson",
                        amount: "$85.00",
                    },
                    DrawerItem::Entry {
                        title: "Color Treatment",
                        detail: "Nov 20, 2024 - Mike Wilson",
                        amount: "$150.00",
                    },
                ],
            },
        ],
    }
}

fn employee_drawer(record: &Record, width: u32) -> DrawerContent {
    DrawerContent {
        title: format!("{} Details", record.get("name")),
        width,
        visual: Some(DrawerVisual {
            heading: record.get("name").to_string(),
            subheading: Some(record.get("position").to_string()),
            status: status_of(record),
        }),
        quick_actions: &["View Schedule", "Contact Employee", "Manage Time Off"],
        sections: vec![
            DrawerSection {
                title: "Personal Information",
                items: vec![
                    DrawerItem::field("Email", record.get("email")),
                    DrawerItem::field("Phone", record.get("phone")),
                    DrawerItem::field("Hire Date", record.get("hireDate")),
                ],
            },
            DrawerSection {
                title: "Performance & Skills",
                items: vec![
                    DrawerItem::field("Rating", "4.5/5"),
                    DrawerItem::field("Customer Satisfaction", "92%"),
                    DrawerItem::Tags {
                        label: "Skills",
                        values: &["Haircuts", "Styling", "Coloring", "Treatments"],
                    },
                ],
            },
            DrawerSection {
                title: "Schedule & Availability",
                items: vec![
                    DrawerItem::field("This Week", "Mon-Fri: 9:00 AM - 6:00 PM"),
                    DrawerItem::field("Weekend", "Sat: 9:00 AM - 4:00 PM"),
                    DrawerItem::field("Today", "8 appointments"),
                    DrawerItem::field("Tomorrow", "6 appointments"),
                ],
            },
        ],
    }
}

/// A headline number on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub title: &'static str,
    pub value: &'static str,
    pub glyph: &'static str,
}

pub const DASHBOARD_INTRO: &str =
    "Welcome to your Saloon Management System. Here's an overview of your business.";

pub const DASHBOARD_STATS: &[Stat] = &[
    Stat {
        title: "Today's Appointments",
        value: "12",
        glyph: "◷",
    },
    Stat {
        title: "Active Clients",
        value: "248",
        glyph: "☺",
    },
    Stat {
        title: "Monthly Revenue",
        value: "$15,420.00",
        glyph: "$",
    },
    Stat {
        title: "Services Completed",
        value: "89",
        glyph: "✓",
    },
];

/// (who, what happened)
pub const RECENT_ACTIVITY: &[(&str, &str)] = &[
    (
        "Sarah Johnson",
        "booked a haircut appointment for tomorrow at 2:00 PM",
    ),
    ("Mike Chen", "completed a beard trim service - $35.00"),
    ("Emma Davis", "rescheduled her color treatment to next week"),
];

/// A dashboard shortcut; `None` routes have no page yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickLink {
    pub title: &'static str,
    pub description: &'static str,
    pub route: Option<Route>,
}

pub const QUICK_LINKS: &[QuickLink] = &[
    QuickLink {
        title: "New Appointment",
        description: "Schedule a client visit",
        route: Some(Route::Appointments),
    },
    QuickLink {
        title: "Add Client",
        description: "Register new customer",
        route: Some(Route::Crm),
    },
    QuickLink {
        title: "View Reports",
        description: "Business analytics",
        route: None,
    },
];
