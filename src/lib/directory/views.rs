//! Per-page UI state and the operations a user can trigger on each page.
//! Every mutation goes to the backend and is followed by a re-fetch.
use super::nav::Route;

pub mod add_discipline;
pub mod add_professor;
pub mod assign;
pub mod discipline_detail;
pub mod discipline_list;
pub mod professor_detail;
pub mod professor_list;
pub mod references;

/// Where the user ends up after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Stay,
    Navigate(Route),
}

/// Result of opening a page that may send the user elsewhere instead.
#[derive(Debug)]
pub enum Loaded<V> {
    View(V),
    Redirect(Route),
}
