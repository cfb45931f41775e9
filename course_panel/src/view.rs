use crate::types::{AlertLevel, RosterRole};

/// Which button group is showing on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionGroup {
    /// Edit and delete.
    Admin,
    /// Save and cancel.
    Content,
}

/// The page elements the panel drives. Implementations own the handles;
/// the controller never looks anything up by id.
pub trait PanelView {
    /// Shows `group` and hides the other one.
    fn show_actions(&mut self, group: ActionGroup);

    /// Makes the title element editable in place.
    fn mount_title_editor(&mut self);
    fn focus_title_editor(&mut self);
    fn destroy_title_editor(&mut self);
    /// Current text of the title element, edited or not.
    fn title_content(&self) -> String;
    fn set_title(&mut self, title: &str);

    fn set_roster_lists_visible(&mut self, visible: bool);
    /// Ids checked in the roster form for `role`.
    fn checked_members(&self, role: RosterRole) -> Vec<i64>;

    fn set_upload_trigger_visible(&mut self, visible: bool);
    fn set_save_enabled(&mut self, enabled: bool);
    fn show_alert(&mut self, level: AlertLevel, message: &str);

    fn set_progress_visible(&mut self, visible: bool);
    fn set_progress(&mut self, percent: u64);
    fn set_hero_uploading(&mut self, uploading: bool);
    fn set_hero_background(&mut self, url: &str);
}
