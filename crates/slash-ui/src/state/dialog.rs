//! Mount state for the account page dialogs.
//!
//! Each open cycle hands out a fresh [`DialogTicket`]. A dialog's close
//! callback carries the ticket it was mounted with, so closing twice, or
//! closing from an earlier cycle, does nothing.

use std::rc::Rc;

use yew::Reducible;

/// Identifies one open cycle of a dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DialogTicket(u32);

/// Open/closed state of a single dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DialogSlot {
    open: Option<DialogTicket>,
    cycles: u32,
}

impl DialogSlot {
    /// Open the dialog, starting a new cycle. Opening an open dialog keeps its ticket.
    pub fn open(&mut self) -> DialogTicket {
        if let Some(ticket) = self.open {
            return ticket;
        }
        self.cycles = self.cycles.wrapping_add(1);
        let ticket = DialogTicket(self.cycles);
        self.open = Some(ticket);
        ticket
    }

    /// Close the cycle identified by `ticket`; returns `false` when it is not the open one.
    pub fn close(&mut self, ticket: DialogTicket) -> bool {
        if self.open == Some(ticket) {
            self.open = None;
            true
        } else {
            false
        }
    }

    /// Whether the dialog should be mounted.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.open.is_some()
    }

    /// Ticket of the current cycle, if open.
    #[must_use]
    pub const fn ticket(&self) -> Option<DialogTicket> {
        self.open
    }
}

/// Dialogs hosted by the account page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountDialog {
    /// Nickname and email editor.
    EditUserinfo,
    /// Password change form.
    ChangePassword,
}

/// Transition on the account page dialog state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogAction {
    /// A header button was clicked.
    Open(AccountDialog),
    /// A mounted dialog reported closure.
    Close(AccountDialog, DialogTicket),
}

/// Independent mount state for both account dialogs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccountDialogs {
    /// Edit-userinfo dialog.
    pub edit_userinfo: DialogSlot,
    /// Change-password dialog.
    pub change_password: DialogSlot,
}

impl AccountDialogs {
    /// Apply a transition in place.
    pub fn apply(&mut self, action: DialogAction) {
        match action {
            DialogAction::Open(kind) => {
                self.slot_mut(kind).open();
            }
            DialogAction::Close(kind, ticket) => {
                self.slot_mut(kind).close(ticket);
            }
        }
    }

    /// Slot for one dialog.
    #[must_use]
    pub const fn slot(&self, kind: AccountDialog) -> &DialogSlot {
        match kind {
            AccountDialog::EditUserinfo => &self.edit_userinfo,
            AccountDialog::ChangePassword => &self.change_password,
        }
    }

    fn slot_mut(&mut self, kind: AccountDialog) -> &mut DialogSlot {
        match kind {
            AccountDialog::EditUserinfo => &mut self.edit_userinfo,
            AccountDialog::ChangePassword => &mut self.change_password,
        }
    }
}

impl Reducible for AccountDialogs {
    type Action = DialogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        if next == *self { self } else { Rc::new(next) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_applies_once_per_cycle() {
        let mut slot = DialogSlot::default();
        assert!(!slot.is_mounted());
        let first = slot.open();
        assert!(slot.is_mounted());
        assert!(slot.close(first));
        assert!(!slot.close(first));
        assert!(!slot.is_mounted());

        let second = slot.open();
        assert_ne!(first, second);
        assert!(!slot.close(first), "stale ticket must not close a newer cycle");
        assert!(slot.is_mounted());
        assert_eq!(slot.ticket(), Some(second));
    }

    #[test]
    fn reopening_keeps_current_ticket() {
        let mut slot = DialogSlot::default();
        let ticket = slot.open();
        assert_eq!(slot.open(), ticket);
    }

    #[test]
    fn dialogs_are_independent() {
        let mut dialogs = AccountDialogs::default();
        dialogs.apply(DialogAction::Open(AccountDialog::EditUserinfo));
        dialogs.apply(DialogAction::Open(AccountDialog::ChangePassword));
        let edit = dialogs
            .slot(AccountDialog::EditUserinfo)
            .ticket()
            .expect("edit open");
        let password = dialogs
            .slot(AccountDialog::ChangePassword)
            .ticket()
            .expect("password open");

        dialogs.apply(DialogAction::Close(AccountDialog::EditUserinfo, edit));
        assert!(!dialogs.edit_userinfo.is_mounted());
        assert!(dialogs.change_password.is_mounted());

        dialogs.apply(DialogAction::Close(AccountDialog::ChangePassword, password));
        assert!(!dialogs.change_password.is_mounted());
    }

    #[test]
    fn reducer_keeps_identity_on_noop() {
        let state = Rc::new(AccountDialogs::default());
        let opened = Rc::clone(&state).reduce(DialogAction::Open(AccountDialog::EditUserinfo));
        assert!(opened.edit_userinfo.is_mounted());
        let ticket = opened.edit_userinfo.ticket().expect("open");
        let closed = Rc::clone(&opened).reduce(DialogAction::Close(AccountDialog::EditUserinfo, ticket));
        let again = Rc::clone(&closed).reduce(DialogAction::Close(AccountDialog::EditUserinfo, ticket));
        assert!(Rc::ptr_eq(&closed, &again));
    }
}
