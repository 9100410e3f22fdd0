//! Route table for the application shell
//!
//! Maps each screen to its path, short menu label and header title.

/// A screen reachable from the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Appointments,
    Invoicing,
    Crm,
    Employees,
    Services,
    Settings,
}

impl Route {
    /// Routes listed in the sider menu, in display order
    pub const MENU: [Route; 5] = [
        Route::Appointments,
        Route::Invoicing,
        Route::Crm,
        Route::Employees,
        Route::Services,
    ];

    const ALL: [Route; 7] = [
        Route::Dashboard,
        Route::Appointments,
        Route::Invoicing,
        Route::Crm,
        Route::Employees,
        Route::Services,
        Route::Settings,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Appointments => "/appointments",
            Route::Invoicing => "/invoicing",
            Route::Crm => "/crm",
            Route::Employees => "/employees",
            Route::Services => "/services",
            Route::Settings => "/settings",
        }
    }

    /// Short label for the menu
    pub fn label(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Appointments => "Appointments",
            Route::Invoicing => "Invoicing",
            Route::Crm => "CRM",
            Route::Employees => "Employees",
            Route::Services => "Services",
            Route::Settings => "Settings",
        }
    }

    /// Title shown in the header
    pub fn title(self) -> &'static str {
        match self {
            Route::Appointments => "Appointment Manager",
            Route::Employees => "Employee Manager",
            Route::Services => "Service Manager",
            other => other.label(),
        }
    }

    /// Single-letter glyph for the collapsed menu
    pub fn glyph(self) -> &'static str {
        match self {
            Route::Dashboard => "D",
            Route::Appointments => "A",
            Route::Invoicing => "I",
            Route::Crm => "C",
            Route::Employees => "E",
            Route::Services => "S",
            Route::Settings => "⚙",
        }
    }

    /// Look up a route by path; unknown paths land on the dashboard
    pub fn from_path(path: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .unwrap_or_default()
    }
}

/// Header title for a path
pub fn title_for_path(path: &str) -> &'static str {
    Route::from_path(path).title()
}
