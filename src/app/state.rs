//! Application state: demo panel selection and event routing types
//!
//! The application-level state is deliberately thin. Each engine owns its
//! own state; the only state that lives at this level is which demo panel
//! currently has the user's attention.

use crate::domain::calculator::CalcIntent;
use crate::domain::cart::CartIntent;
use crate::domain::theme::Theme;
use crate::domain::todo::TodoIntent;

/// The demo panel currently in front of the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DemoPanel {
    #[default]
    Calculator,
    Todos,
    Cart,
}

impl DemoPanel {
    /// Human-readable panel title
    pub fn title(&self) -> &'static str {
        match self {
            DemoPanel::Calculator => "Calculator",
            DemoPanel::Todos => "Todos",
            DemoPanel::Cart => "Cart",
        }
    }
}

/// Events the controller routes into the engines
///
/// Engine intents are wrapped verbatim; the two theme events forward to the
/// preference engine, and panel switches update the application-level state.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Calculator(CalcIntent),
    Todos(TodoIntent),
    Cart(CartIntent),
    SwitchPanel(DemoPanel),
    SetTheme(Theme),
    ToggleTheme,
}
