// src/shell/mod.rs
pub mod route;

pub use route::Route;

use crate::application::{
    CreateController, DetailController, EditController, ListController, NoteRepository,
};
use crate::domain::DomainError;
use tracing::debug;

/// The screen currently composed by the shell: one controller per route.
#[derive(Debug)]
pub enum Screen {
    List(ListController),
    Detail(DetailController),
    CreateForm(CreateController),
    EditForm(EditController),
}

impl Screen {
    /// Last failure recorded by the active controller, if any.
    pub fn error(&self) -> Option<&DomainError> {
        match self {
            Screen::List(controller) => controller.error.as_ref(),
            Screen::Detail(controller) => controller.error.as_ref(),
            Screen::CreateForm(controller) => controller.error.as_ref(),
            Screen::EditForm(controller) => controller.error.as_ref(),
        }
    }
}

/// Navigation and composition shell.
///
/// Owns the repository and the active controller. Entering a route builds a
/// fresh controller and runs its on-activate hook (the fetch trigger); the
/// outgoing controller and all its scratch state are dropped, so nothing
/// survives a navigation except what the backend holds.
pub struct Shell<R: NoteRepository> {
    repository: R,
    route: Route,
    screen: Screen,
}

impl<R: NoteRepository> Shell<R> {
    /// The shell starts on the list route without fetching; the first
    /// `navigate` runs the on-activate hook.
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            route: Route::list(),
            screen: Screen::List(ListController::new()),
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    /// Enter a route, activating its controller.
    pub fn navigate(&mut self, route: Route) {
        debug!(%route, "Navigating");
        let screen = match &route {
            Route::List { tags } => {
                let mut controller = ListController::with_filter(tags.clone());
                controller.activate(&mut self.repository);
                Screen::List(controller)
            }
            Route::Create => Screen::CreateForm(CreateController::new()),
            Route::Detail(id) => {
                let mut controller = DetailController::new(*id);
                controller.activate(&mut self.repository);
                Screen::Detail(controller)
            }
            Route::Edit(id) => {
                let mut controller = EditController::new(*id);
                controller.activate(&mut self.repository);
                Screen::EditForm(controller)
            }
        };
        self.route = route;
        self.screen = screen;
    }

    /// Submit the active create form; navigates to the new note's detail
    /// screen on success. Returns whether a navigation happened.
    pub fn submit_create(&mut self) -> bool {
        let next = match &mut self.screen {
            Screen::CreateForm(controller) => controller.submit(&mut self.repository),
            _ => None,
        };
        self.follow(next)
    }

    /// Submit the active edit form; navigates to the detail screen on
    /// success. Returns whether a navigation happened.
    pub fn submit_edit(&mut self) -> bool {
        let next = match &mut self.screen {
            Screen::EditForm(controller) => controller.submit(&mut self.repository),
            _ => None,
        };
        self.follow(next)
    }

    /// Open the delete confirmation on the active detail screen.
    pub fn request_delete(&mut self) {
        if let Screen::Detail(controller) = &mut self.screen {
            controller.request_delete();
        }
    }

    /// Close the delete confirmation without deleting.
    pub fn cancel_delete(&mut self) {
        if let Screen::Detail(controller) = &mut self.screen {
            controller.cancel_delete();
        }
    }

    /// Confirm the pending delete; navigates to the list on success.
    /// Returns whether a navigation happened.
    pub fn confirm_delete(&mut self) -> bool {
        let next = match &mut self.screen {
            Screen::Detail(controller) => controller.confirm_delete(&mut self.repository),
            _ => None,
        };
        self.follow(next)
    }

    fn follow(&mut self, next: Option<Route>) -> bool {
        match next {
            Some(route) => {
                self.navigate(route);
                true
            }
            None => false,
        }
    }
}
