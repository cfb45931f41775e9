//! Edit, cancel and save for the course panel, plus roster checklist saves.

use tracing::{debug, warn};

use crate::client::CourseApi;
use crate::error::PanelError;
use crate::types::{AlertLevel, RosterRole};
use crate::view::{ActionGroup, PanelView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Viewing,
    Editing,
}

/// One per course page. Construct it once the page is ready and route the
/// page's events to its methods.
pub struct CoursePanel<V: PanelView, A: CourseApi> {
    pub(crate) course_id: i64,
    pub(crate) view: V,
    pub(crate) api: A,
    state: PanelState,
    /// Last title the server accepted; cancel and failed saves return to it.
    snapshot: String,
}

impl<V: PanelView, A: CourseApi> CoursePanel<V, A> {
    pub fn new(course_id: i64, view: V, api: A) -> Self {
        let snapshot = view.title_content();
        Self {
            course_id,
            view,
            api,
            state: PanelState::Viewing,
            snapshot,
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn snapshot(&self) -> &str {
        &self.snapshot
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn edit(&mut self) {
        if self.state == PanelState::Editing {
            return;
        }

        self.view.show_actions(ActionGroup::Content);
        self.view.mount_title_editor();
        self.view.focus_title_editor();
        self.view.set_roster_lists_visible(true);
        self.view.set_upload_trigger_visible(true);
        self.state = PanelState::Editing;
    }

    pub fn cancel(&mut self) {
        if self.state == PanelState::Viewing {
            return;
        }

        self.view.set_title(&self.snapshot);
        self.leave_editing();
    }

    /// Leaves editing at once, then waits for the server. The title is
    /// reverted if the server refuses it.
    pub async fn save(&mut self) {
        if self.state == PanelState::Viewing {
            return;
        }

        self.view.set_save_enabled(false);
        let title = self.view.title_content();
        self.leave_editing();

        match self.api.update_title(self.course_id, &title).await {
            Ok(message) => {
                self.snapshot = title;
                self.view.show_alert(AlertLevel::Success, &message);
            }
            Err(e) => {
                warn!(course_id = self.course_id, error = %e, "Title save failed");
                self.view.set_title(&self.snapshot);
                self.view.show_alert(AlertLevel::Danger, &e.alert_text());
            }
        }

        self.view.set_save_enabled(true);
    }

    /// Sends the whole checklist for `role` after any box changes. The box
    /// stays as the user left it whatever the outcome.
    pub async fn roster_changed(&mut self, role: RosterRole) {
        let selected = self.view.checked_members(role);
        debug!(course_id = self.course_id, role = role.path_segment(), "Roster changed");

        match self.api.update_roster(self.course_id, role, &selected).await {
            Ok(message) => self.view.show_alert(AlertLevel::Success, &message),
            Err(PanelError::Server { message, .. }) => {
                self.view.show_alert(AlertLevel::Danger, &message)
            }
            Err(e) => self.view.show_alert(AlertLevel::Danger, &e.to_string()),
        }
    }

    fn leave_editing(&mut self) {
        self.view.destroy_title_editor();
        self.view.set_roster_lists_visible(false);
        self.view.show_actions(ActionGroup::Admin);
        self.view.set_upload_trigger_visible(false);
        self.state = PanelState::Viewing;
    }
}
