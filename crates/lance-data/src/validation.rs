// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::BTreeSet;

use lance_app::{OverdueInvoice, PaidInvoice};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetError {
    DuplicateId(i64),
    NonPositiveAmount(i64),
    NegativeDaysOverdue(i64),
    EmptyClient(i64),
    EmptyAvatar(i64),
    PaidBeforeSent(i64),
    PaymentLagMismatch(i64),
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "invoice {id}: identifier is not unique"),
            Self::NonPositiveAmount(id) => write!(f, "invoice {id}: amount must be positive"),
            Self::NegativeDaysOverdue(id) => {
                write!(f, "invoice {id}: days overdue must be non-negative")
            }
            Self::EmptyClient(id) => write!(f, "invoice {id}: client name is empty"),
            Self::EmptyAvatar(id) => write!(f, "invoice {id}: avatar initials are empty"),
            Self::PaidBeforeSent(id) => {
                write!(f, "invoice {id}: paid date precedes sent date")
            }
            Self::PaymentLagMismatch(id) => write!(
                f,
                "invoice {id}: days to payment disagrees with sent/paid dates"
            ),
        }
    }
}

impl std::error::Error for DatasetError {}

pub type DatasetResult<T> = std::result::Result<T, DatasetError>;

/// Invariants of the seeded dataset: unique identifiers across the combined
/// set, positive amounts, non-negative overdue counts, consistent paid
/// dates, and non-empty display fields.
pub fn verify_dataset(overdue: &[OverdueInvoice], paid: &[PaidInvoice]) -> DatasetResult<()> {
    let mut seen = BTreeSet::new();

    for invoice in overdue {
        let id = invoice.id.get();
        if !seen.insert(id) {
            return Err(DatasetError::DuplicateId(id));
        }
        check_display_fields(id, &invoice.client, &invoice.avatar)?;
        if invoice.amount_cents <= 0 {
            return Err(DatasetError::NonPositiveAmount(id));
        }
        if invoice.days_overdue < 0 {
            return Err(DatasetError::NegativeDaysOverdue(id));
        }
    }

    for invoice in paid {
        let id = invoice.id.get();
        if !seen.insert(id) {
            return Err(DatasetError::DuplicateId(id));
        }
        check_display_fields(id, &invoice.client, &invoice.avatar)?;
        if invoice.amount_cents <= 0 {
            return Err(DatasetError::NonPositiveAmount(id));
        }
        if invoice.date_paid < invoice.date_sent {
            return Err(DatasetError::PaidBeforeSent(id));
        }
        let lag = (invoice.date_paid - invoice.date_sent).whole_days();
        if invoice.days_to_payment != lag {
            return Err(DatasetError::PaymentLagMismatch(id));
        }
    }

    Ok(())
}

fn check_display_fields(id: i64, client: &str, avatar: &str) -> DatasetResult<()> {
    if client.trim().is_empty() {
        return Err(DatasetError::EmptyClient(id));
    }
    if avatar.trim().is_empty() {
        return Err(DatasetError::EmptyAvatar(id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{DatasetError, verify_dataset};
    use lance_app::{InvoiceId, OverdueInvoice, PaidInvoice, Tone};
    use time::macros::date;

    fn overdue(id: i64) -> OverdueInvoice {
        OverdueInvoice {
            id: InvoiceId::new(id),
            client: "Acme Design Co.".to_owned(),
            amount_cents: 120_000,
            days_overdue: 14,
            avatar: "AD".to_owned(),
            tone: Tone::Polite,
        }
    }

    fn paid(id: i64) -> PaidInvoice {
        PaidInvoice {
            id: InvoiceId::new(id),
            client: "Blue Corp".to_owned(),
            amount_cents: 250_000,
            avatar: "BC".to_owned(),
            date_sent: date!(2024 - 01 - 15),
            date_paid: date!(2024 - 01 - 18),
            message_tone: Tone::Polite,
            message_sent: "Hi there!".to_owned(),
            days_to_payment: 3,
        }
    }

    #[test]
    fn consistent_dataset_passes() {
        assert_eq!(verify_dataset(&[overdue(1)], &[paid(101)]), Ok(()));
    }

    #[test]
    fn duplicate_id_across_groups_is_rejected() {
        assert_eq!(
            verify_dataset(&[overdue(1)], &[paid(1)]),
            Err(DatasetError::DuplicateId(1)),
        );
    }

    #[test]
    fn non_positive_amount_is_rejected() {
        let mut invoice = overdue(1);
        invoice.amount_cents = 0;
        assert_eq!(
            verify_dataset(&[invoice], &[]),
            Err(DatasetError::NonPositiveAmount(1)),
        );
    }

    #[test]
    fn negative_days_overdue_is_rejected() {
        let mut invoice = overdue(1);
        invoice.days_overdue = -1;
        assert_eq!(
            verify_dataset(&[invoice], &[]),
            Err(DatasetError::NegativeDaysOverdue(1)),
        );
    }

    #[test]
    fn paid_date_before_sent_date_is_rejected() {
        let mut invoice = paid(101);
        invoice.date_paid = date!(2024 - 01 - 14);
        assert_eq!(
            verify_dataset(&[], &[invoice]),
            Err(DatasetError::PaidBeforeSent(101)),
        );
    }

    #[test]
    fn payment_lag_must_match_dates() {
        let mut invoice = paid(101);
        invoice.days_to_payment = 5;
        assert_eq!(
            verify_dataset(&[], &[invoice]),
            Err(DatasetError::PaymentLagMismatch(101)),
        );
    }

    #[test]
    fn empty_display_fields_are_rejected() {
        let mut invoice = overdue(1);
        invoice.client = "  ".to_owned();
        assert_eq!(
            verify_dataset(&[invoice], &[]),
            Err(DatasetError::EmptyClient(1)),
        );

        let mut invoice = overdue(2);
        invoice.avatar = String::new();
        assert_eq!(
            verify_dataset(&[invoice], &[]),
            Err(DatasetError::EmptyAvatar(2)),
        );
    }
}
