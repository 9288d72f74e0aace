//! Presentational components for the dashboard page.

pub mod crm_list;
pub mod kanban_column;
pub mod stat_card;
pub mod topbar;

/// Accent color shared by stat cards and kanban columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Accent {
    #[default]
    Blue,
    Green,
}

impl Accent {
    /// BEM modifier suffix for accent-aware class names.
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
        }
    }
}
