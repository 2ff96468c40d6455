//! Address-bar routes and the navigation bar shown on top of every page
use std::fmt;

/// Client routes. Detail paths with a missing or malformed id are kept
/// distinct so the detail views can redirect back to their list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Professors,
    Professor(u32),
    ProfessorMissingId,
    Disciplines,
    Discipline(u32),
    DisciplineMissingId,
    References,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Professors,
    Disciplines,
    References,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Professors, Tab::Disciplines, Tab::References];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Professors => "Преподаватели",
            Tab::Disciplines => "Дисциплины",
            Tab::References => "Справочники",
        }
    }

    pub fn route(self) -> Route {
        match self {
            Tab::Professors => Route::Professors,
            Tab::Disciplines => Route::Disciplines,
            Tab::References => Route::References,
        }
    }
}

impl Route {
    /// Unknown paths yield `None`.
    pub fn parse(path: &str) -> Option<Route> {
        let segments = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>();
        match segments.as_slice() {
            [] => Some(Route::Professors),
            ["professors"] => Some(Route::ProfessorMissingId),
            ["professors", id] => Some(
                id.parse()
                    .map(Route::Professor)
                    .unwrap_or(Route::ProfessorMissingId),
            ),
            ["disciplines"] => Some(Route::Disciplines),
            ["disciplines", id] => Some(
                id.parse()
                    .map(Route::Discipline)
                    .unwrap_or(Route::DisciplineMissingId),
            ),
            ["references"] => Some(Route::References),
            _ => None,
        }
    }

    /// The tab highlighted while this route is shown. Detail pages belong to their list tab.
    pub fn tab(self) -> Tab {
        match self {
            Route::Professors | Route::Professor(_) | Route::ProfessorMissingId => Tab::Professors,
            Route::Disciplines | Route::Discipline(_) | Route::DisciplineMissingId => {
                Tab::Disciplines
            }
            Route::References => Tab::References,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Professors => write!(f, "/"),
            Route::Professor(id) => write!(f, "/professors/{}", id),
            Route::ProfessorMissingId => write!(f, "/professors"),
            Route::Disciplines => write!(f, "/disciplines"),
            Route::Discipline(id) => write!(f, "/disciplines/{}", id),
            Route::DisciplineMissingId => write!(f, "/disciplines/"),
            Route::References => write!(f, "/references"),
        }
    }
}

pub fn render_nav(route: Route) -> String {
    let active = route.tab();
    Tab::ALL
        .iter()
        .map(|&tab| {
            if tab == active {
                format!("[{}]", tab.title())
            } else {
                format!(" {} ", tab.title())
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}
