//! Application controller and coordination layer
//!
//! The controller owns one instance of every engine state plus the
//! preference engine, and routes [`AppEvent`]s into the pure transition
//! functions. It holds no logic of its own beyond that routing; rendering
//! collaborators read the engine states back through the accessors.

use std::mem;

use log::debug;

use crate::app::state::{AppEvent, DemoPanel};
use crate::domain::calculator::CalculatorState;
use crate::domain::cart::Cart;
use crate::domain::theme::Theme;
use crate::domain::todo::TodoList;
use crate::prefs::engine::PreferenceEngine;
use crate::prefs::traits::{PreferenceStorage, StyleSink, SystemPreference};

/// Main application controller
///
/// Single writer for every engine state within a session. Because each
/// engine transition is pure, routing is the only responsibility here.
pub struct AppController<S, K>
where
    S: PreferenceStorage,
    K: StyleSink,
{
    panel: DemoPanel,
    calculator: CalculatorState,
    todos: TodoList,
    cart: Cart,
    prefs: PreferenceEngine<S, K>,
}

impl<S, K> AppController<S, K>
where
    S: PreferenceStorage,
    K: StyleSink,
{
    /// Creates a controller with idle engines and a resolved theme
    ///
    /// Theme resolution (and the initial palette emission) happens here,
    /// inside the preference engine constructor.
    pub fn new(storage: S, system: &dyn SystemPreference, style: K) -> Self {
        Self {
            panel: DemoPanel::default(),
            calculator: CalculatorState::new(),
            todos: TodoList::new(),
            cart: Cart::new(),
            prefs: PreferenceEngine::new(storage, system, style),
        }
    }

    /// Routes an event into the owning engine
    pub fn handle(&mut self, event: AppEvent) {
        debug!("handling {event:?}");
        match event {
            AppEvent::Calculator(intent) => {
                self.calculator = mem::take(&mut self.calculator).apply(intent);
            }
            AppEvent::Todos(intent) => {
                self.todos = mem::take(&mut self.todos).apply(intent);
            }
            AppEvent::Cart(intent) => {
                self.cart = mem::take(&mut self.cart).apply(intent);
            }
            AppEvent::SwitchPanel(panel) => {
                self.panel = panel;
            }
            AppEvent::SetTheme(theme) => {
                self.prefs.set(theme);
            }
            AppEvent::ToggleTheme => {
                self.prefs.toggle();
            }
        }
    }

    pub fn panel(&self) -> DemoPanel {
        self.panel
    }

    pub fn calculator(&self) -> &CalculatorState {
        &self.calculator
    }

    pub fn todos(&self) -> &TodoList {
        &self.todos
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn theme(&self) -> Theme {
        self.prefs.theme()
    }

    /// The style sink the preference engine emits into
    pub fn styles(&self) -> &K {
        self.prefs.style()
    }
}
