// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::filter::{AmountBucket, DaysBucket, FilterSelection};
use crate::ids::InvoiceId;
use crate::model::{Invoice, OverdueInvoice, PaidInvoice, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPanelVisibility {
    Hidden,
    Visible,
}

/// Subject of the preview modal. Overdue invoices open as an editable
/// preview with a working tone; paid invoices open as a read-only detail
/// view that never offers tone selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalSubject {
    Preview { invoice: OverdueInvoice, tone: Tone },
    Detail { invoice: PaidInvoice },
}

impl ModalSubject {
    pub const fn invoice_id(&self) -> InvoiceId {
        match self {
            Self::Preview { invoice, .. } => invoice.id,
            Self::Detail { invoice } => invoice.id,
        }
    }

    pub fn client(&self) -> &str {
        match self {
            Self::Preview { invoice, .. } => &invoice.client,
            Self::Detail { invoice } => &invoice.client,
        }
    }

    pub const fn is_past(&self) -> bool {
        matches!(self, Self::Detail { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open(ModalSubject),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashState {
    pub filters: FilterPanelVisibility,
    pub selection: FilterSelection,
    pub modal: ModalState,
    pub status_line: Option<String>,
}

impl Default for DashState {
    fn default() -> Self {
        Self {
            filters: FilterPanelVisibility::Hidden,
            selection: FilterSelection::default(),
            modal: ModalState::Closed,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashCommand {
    ToggleFilters,
    SetAmountBucket(AmountBucket),
    SetDaysBucket(DaysBucket),
    ClearFilters,
    OpenInvoice(Invoice),
    SelectTone(Tone),
    SendReminder,
    CloseModal,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashEvent {
    FiltersVisibilityChanged(FilterPanelVisibility),
    AmountFilterChanged(AmountBucket),
    DaysFilterChanged(DaysBucket),
    FiltersCleared,
    ModalOpened(InvoiceId),
    ToneChanged(Tone),
    ReminderSent(InvoiceId),
    ModalClosed,
    StatusUpdated(String),
    StatusCleared,
}

impl DashState {
    pub fn dispatch(&mut self, command: DashCommand) -> Vec<DashEvent> {
        match command {
            DashCommand::ToggleFilters => {
                self.filters = match self.filters {
                    FilterPanelVisibility::Hidden => FilterPanelVisibility::Visible,
                    FilterPanelVisibility::Visible => FilterPanelVisibility::Hidden,
                };
                let label = match self.filters {
                    FilterPanelVisibility::Visible => "filters shown",
                    FilterPanelVisibility::Hidden => "filters hidden",
                };
                vec![
                    DashEvent::FiltersVisibilityChanged(self.filters),
                    self.set_status(label),
                ]
            }
            DashCommand::SetAmountBucket(bucket) => {
                self.selection.amount = bucket;
                vec![DashEvent::AmountFilterChanged(bucket)]
            }
            DashCommand::SetDaysBucket(bucket) => {
                self.selection.days = bucket;
                vec![DashEvent::DaysFilterChanged(bucket)]
            }
            DashCommand::ClearFilters => {
                // Both axes reset in one transition.
                self.selection = FilterSelection::default();
                vec![DashEvent::FiltersCleared, self.set_status("filters cleared")]
            }
            DashCommand::OpenInvoice(invoice) => {
                let subject = match invoice {
                    Invoice::Overdue(invoice) => {
                        let tone = invoice.tone;
                        ModalSubject::Preview { invoice, tone }
                    }
                    Invoice::Paid(invoice) => ModalSubject::Detail { invoice },
                };
                let id = subject.invoice_id();
                self.modal = ModalState::Open(subject);
                vec![DashEvent::ModalOpened(id)]
            }
            DashCommand::SelectTone(tone) => {
                let ModalState::Open(ModalSubject::Preview {
                    tone: selected, ..
                }) = &mut self.modal
                else {
                    return Vec::new();
                };
                *selected = tone;
                vec![DashEvent::ToneChanged(tone)]
            }
            DashCommand::SendReminder => {
                let ModalState::Open(ModalSubject::Preview { invoice, .. }) = &self.modal else {
                    return Vec::new();
                };
                // The underlying lists are never touched: sending is an
                // event for the runtime seam, not a data mutation.
                let id = invoice.id;
                self.modal = ModalState::Closed;
                vec![DashEvent::ReminderSent(id), DashEvent::ModalClosed]
            }
            DashCommand::CloseModal => {
                if self.modal == ModalState::Closed {
                    return Vec::new();
                }
                self.modal = ModalState::Closed;
                vec![DashEvent::ModalClosed]
            }
            DashCommand::SetStatus(message) => {
                vec![self.set_status(&message)]
            }
            DashCommand::ClearStatus => {
                self.status_line = None;
                vec![DashEvent::StatusCleared]
            }
        }
    }

    fn set_status(&mut self, message: &str) -> DashEvent {
        self.status_line = Some(message.to_owned());
        DashEvent::StatusUpdated(message.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        DashCommand, DashEvent, DashState, FilterPanelVisibility, ModalState, ModalSubject,
    };
    use crate::filter::{AmountBucket, DaysBucket, FilterSelection};
    use crate::ids::InvoiceId;
    use crate::model::{Invoice, OverdueInvoice, PaidInvoice, Tone};
    use time::macros::date;

    fn acme() -> OverdueInvoice {
        OverdueInvoice {
            id: InvoiceId::new(1),
            client: "Acme Design Co.".to_owned(),
            amount_cents: 120_000,
            days_overdue: 14,
            avatar: "AD".to_owned(),
            tone: Tone::Polite,
        }
    }

    fn blue_corp() -> PaidInvoice {
        PaidInvoice {
            id: InvoiceId::new(101),
            client: "Blue Corp".to_owned(),
            amount_cents: 250_000,
            avatar: "BC".to_owned(),
            date_sent: date!(2024 - 01 - 15),
            date_paid: date!(2024 - 01 - 18),
            message_tone: Tone::Polite,
            message_sent: "Hi there! I hope you're doing well!".to_owned(),
            days_to_payment: 3,
        }
    }

    #[test]
    fn initial_state_is_hidden_unfiltered_and_closed() {
        let state = DashState::default();
        assert_eq!(state.filters, FilterPanelVisibility::Hidden);
        assert_eq!(state.selection, FilterSelection::default());
        assert_eq!(state.modal, ModalState::Closed);
        assert_eq!(state.status_line, None);
    }

    #[test]
    fn toggle_filters_flips_visibility_and_updates_status() {
        let mut state = DashState::default();

        let events = state.dispatch(DashCommand::ToggleFilters);
        assert_eq!(state.filters, FilterPanelVisibility::Visible);
        assert_eq!(
            events,
            vec![
                DashEvent::FiltersVisibilityChanged(FilterPanelVisibility::Visible),
                DashEvent::StatusUpdated("filters shown".to_owned()),
            ],
        );

        state.dispatch(DashCommand::ToggleFilters);
        assert_eq!(state.filters, FilterPanelVisibility::Hidden);
    }

    #[test]
    fn selecting_one_axis_leaves_the_other_unchanged() {
        let mut state = DashState::default();

        let events = state.dispatch(DashCommand::SetAmountBucket(AmountBucket::From500To1000));
        assert_eq!(
            events,
            vec![DashEvent::AmountFilterChanged(AmountBucket::From500To1000)],
        );
        assert_eq!(state.selection.amount, AmountBucket::From500To1000);
        assert_eq!(state.selection.days, DaysBucket::All);

        state.dispatch(DashCommand::SetDaysBucket(DaysBucket::Days15To30));
        assert_eq!(state.selection.amount, AmountBucket::From500To1000);
        assert_eq!(state.selection.days, DaysBucket::Days15To30);
    }

    #[test]
    fn clear_filters_resets_both_axes_in_one_transition() {
        let mut state = DashState::default();
        state.dispatch(DashCommand::SetAmountBucket(AmountBucket::Over2500));
        state.dispatch(DashCommand::SetDaysBucket(DaysBucket::Days1To7));

        let events = state.dispatch(DashCommand::ClearFilters);
        assert_eq!(state.selection, FilterSelection::default());
        assert_eq!(
            events,
            vec![
                DashEvent::FiltersCleared,
                DashEvent::StatusUpdated("filters cleared".to_owned()),
            ],
        );
    }

    #[test]
    fn opening_overdue_invoice_defaults_tone_to_recorded_tone() {
        let mut state = DashState::default();

        let events = state.dispatch(DashCommand::OpenInvoice(Invoice::Overdue(acme())));
        assert_eq!(events, vec![DashEvent::ModalOpened(InvoiceId::new(1))]);
        assert_eq!(
            state.modal,
            ModalState::Open(ModalSubject::Preview {
                invoice: acme(),
                tone: Tone::Polite,
            }),
        );
    }

    #[test]
    fn opening_paid_invoice_yields_read_only_detail_subject() {
        let mut state = DashState::default();

        state.dispatch(DashCommand::OpenInvoice(Invoice::Paid(blue_corp())));
        let ModalState::Open(subject) = &state.modal else {
            panic!("modal should be open");
        };
        assert!(subject.is_past());
        assert_eq!(subject.invoice_id(), InvoiceId::new(101));
    }

    #[test]
    fn select_tone_replaces_only_the_tone() {
        let mut state = DashState::default();
        state.dispatch(DashCommand::OpenInvoice(Invoice::Overdue(acme())));

        let events = state.dispatch(DashCommand::SelectTone(Tone::Firm));
        assert_eq!(events, vec![DashEvent::ToneChanged(Tone::Firm)]);
        assert_eq!(
            state.modal,
            ModalState::Open(ModalSubject::Preview {
                invoice: acme(),
                tone: Tone::Firm,
            }),
        );
    }

    #[test]
    fn select_tone_is_ignored_for_detail_and_closed_modal() {
        let mut state = DashState::default();
        assert_eq!(state.dispatch(DashCommand::SelectTone(Tone::Firm)), vec![]);

        state.dispatch(DashCommand::OpenInvoice(Invoice::Paid(blue_corp())));
        let before = state.modal.clone();
        assert_eq!(state.dispatch(DashCommand::SelectTone(Tone::Firm)), vec![]);
        assert_eq!(state.modal, before);
    }

    #[test]
    fn send_reminder_emits_event_and_closes_without_touching_lists() {
        let mut state = DashState::default();
        state.dispatch(DashCommand::OpenInvoice(Invoice::Overdue(acme())));

        let events = state.dispatch(DashCommand::SendReminder);
        assert_eq!(
            events,
            vec![
                DashEvent::ReminderSent(InvoiceId::new(1)),
                DashEvent::ModalClosed,
            ],
        );
        assert_eq!(state.modal, ModalState::Closed);
    }

    #[test]
    fn send_reminder_is_ignored_for_detail_view() {
        let mut state = DashState::default();
        state.dispatch(DashCommand::OpenInvoice(Invoice::Paid(blue_corp())));

        assert_eq!(state.dispatch(DashCommand::SendReminder), vec![]);
        assert!(matches!(state.modal, ModalState::Open(_)));
    }

    #[test]
    fn close_modal_from_either_subject_returns_to_closed() {
        let mut state = DashState::default();
        assert_eq!(state.dispatch(DashCommand::CloseModal), vec![]);

        state.dispatch(DashCommand::OpenInvoice(Invoice::Overdue(acme())));
        let events = state.dispatch(DashCommand::CloseModal);
        assert_eq!(events, vec![DashEvent::ModalClosed]);
        assert_eq!(state.modal, ModalState::Closed);

        state.dispatch(DashCommand::OpenInvoice(Invoice::Paid(blue_corp())));
        state.dispatch(DashCommand::CloseModal);
        assert_eq!(state.modal, ModalState::Closed);
    }

    #[test]
    fn status_line_set_and_clear() {
        let mut state = DashState::default();

        let events = state.dispatch(DashCommand::SetStatus("reminder sent".to_owned()));
        assert_eq!(
            events,
            vec![DashEvent::StatusUpdated("reminder sent".to_owned())],
        );
        assert_eq!(state.status_line.as_deref(), Some("reminder sent"));

        let events = state.dispatch(DashCommand::ClearStatus);
        assert_eq!(events, vec![DashEvent::StatusCleared]);
        assert_eq!(state.status_line, None);
    }
}
