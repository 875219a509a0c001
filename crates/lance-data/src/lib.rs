// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod validation;

pub use validation::{DatasetError, DatasetResult, verify_dataset};

use anyhow::{Context, Result};
use lance_app::{
    ActivityEvent, ActivityEventId, ActivityKind, Invoice, InvoiceId, OverdueInvoice, PaidInvoice,
    SendOutcome, Tone,
};
use time::macros::date;

/// Record of a reminder handed to the send seam. The store keeps these in
/// memory only; nothing about the invoice lists changes when one is added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentReminder {
    pub invoice_id: InvoiceId,
    pub tone: Tone,
    pub body: String,
}

/// In-memory invoice source and message sink. Holds the seeded sample
/// dataset: overdue invoices first, paid invoices second, and the agent
/// activity feed. There is no persistence behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    overdue: Vec<OverdueInvoice>,
    paid: Vec<PaidInvoice>,
    activity: Vec<ActivityEvent>,
    sent: Vec<SentReminder>,
}

impl Store {
    pub fn seeded() -> Self {
        Self::with_data(seed_overdue(), seed_paid(), seed_activity())
    }

    pub fn with_data(
        overdue: Vec<OverdueInvoice>,
        paid: Vec<PaidInvoice>,
        activity: Vec<ActivityEvent>,
    ) -> Self {
        Self {
            overdue,
            paid,
            activity,
            sent: Vec::new(),
        }
    }

    pub fn verify(&self) -> Result<()> {
        verify_dataset(&self.overdue, &self.paid).context("invoice dataset failed validation")
    }

    pub fn overdue(&self) -> &[OverdueInvoice] {
        &self.overdue
    }

    pub fn paid(&self) -> &[PaidInvoice] {
        &self.paid
    }

    pub fn activity(&self) -> &[ActivityEvent] {
        &self.activity
    }

    /// Combined list in display order: overdue first, then paid, each group
    /// in its seeded order.
    pub fn all_invoices(&self) -> Vec<Invoice> {
        self.overdue
            .iter()
            .cloned()
            .map(Invoice::Overdue)
            .chain(self.paid.iter().cloned().map(Invoice::Paid))
            .collect()
    }

    /// Accepts a reminder for an outstanding invoice and records it in the
    /// send log. Paid or unknown invoice ids are rejected; either way the
    /// invoice lists stay exactly as seeded.
    pub fn send_reminder(&mut self, invoice_id: InvoiceId, tone: Tone, body: &str) -> SendOutcome {
        if !self.overdue.iter().any(|invoice| invoice.id == invoice_id) {
            return SendOutcome::Rejected;
        }
        self.sent.push(SentReminder {
            invoice_id,
            tone,
            body: body.to_owned(),
        });
        SendOutcome::Accepted
    }

    pub fn sent_reminders(&self) -> &[SentReminder] {
        &self.sent
    }
}

fn seed_overdue() -> Vec<OverdueInvoice> {
    vec![
        OverdueInvoice {
            id: InvoiceId::new(1),
            client: "Acme Design Co.".to_owned(),
            amount_cents: 120_000,
            days_overdue: 14,
            avatar: "AD".to_owned(),
            tone: Tone::Polite,
        },
        OverdueInvoice {
            id: InvoiceId::new(2),
            client: "TechStart Inc.".to_owned(),
            amount_cents: 85_000,
            days_overdue: 7,
            avatar: "TS".to_owned(),
            tone: Tone::Polite,
        },
        OverdueInvoice {
            id: InvoiceId::new(3),
            client: "Creative Studio".to_owned(),
            amount_cents: 40_000,
            days_overdue: 21,
            avatar: "CS".to_owned(),
            tone: Tone::Firm,
        },
    ]
}

fn seed_paid() -> Vec<PaidInvoice> {
    vec![
        PaidInvoice {
            id: InvoiceId::new(101),
            client: "Blue Corp".to_owned(),
            amount_cents: 250_000,
            avatar: "BC".to_owned(),
            date_sent: date!(2024 - 01 - 15),
            date_paid: date!(2024 - 01 - 18),
            message_tone: Tone::Polite,
            message_sent: "Hi there! I hope you're doing well! I wanted to follow up on \
                           invoice #101..."
                .to_owned(),
            days_to_payment: 3,
        },
        PaidInvoice {
            id: InvoiceId::new(102),
            client: "StartupXYZ".to_owned(),
            amount_cents: 180_000,
            avatar: "SX".to_owned(),
            date_sent: date!(2024 - 01 - 10),
            date_paid: date!(2024 - 01 - 25),
            message_tone: Tone::Professional,
            message_sent: "Hello, I'm writing to follow up on invoice #102 for $1,800..."
                .to_owned(),
            days_to_payment: 15,
        },
        PaidInvoice {
            id: InvoiceId::new(103),
            client: "Design Studio Pro".to_owned(),
            amount_cents: 95_000,
            avatar: "DS".to_owned(),
            date_sent: date!(2024 - 01 - 08),
            date_paid: date!(2024 - 01 - 12),
            message_tone: Tone::Polite,
            message_sent: "Hi there! I hope you're doing well! I wanted to follow up on \
                           invoice #103..."
                .to_owned(),
            days_to_payment: 4,
        },
    ]
}

fn seed_activity() -> Vec<ActivityEvent> {
    vec![
        ActivityEvent {
            id: ActivityEventId::new(1),
            kind: ActivityKind::FollowUpSent,
            message: "Sent polite follow-up to Acme Design Co.".to_owned(),
            time_label: "2 minutes ago".to_owned(),
            offset_label: "2m".to_owned(),
        },
        ActivityEvent {
            id: ActivityEventId::new(2),
            kind: ActivityKind::OverdueDetected,
            message: "Detected Creative Studio invoice is now 21 days overdue".to_owned(),
            time_label: "1 hour ago".to_owned(),
            offset_label: "1h".to_owned(),
        },
        ActivityEvent {
            id: ActivityEventId::new(3),
            kind: ActivityKind::PaymentReceived,
            message: "Payment received from Blue Corp - $2,500".to_owned(),
            time_label: "3 hours ago".to_owned(),
            offset_label: "3h".to_owned(),
        },
        ActivityEvent {
            id: ActivityEventId::new(4),
            kind: ActivityKind::FollowUpScheduled,
            message: "Scheduled follow-up for TechStart Inc. in 2 days".to_owned(),
            time_label: "5 hours ago".to_owned(),
            offset_label: "5h".to_owned(),
        },
        ActivityEvent {
            id: ActivityEventId::new(5),
            kind: ActivityKind::ToneAdjusted,
            message: "Switched to firm tone for Creative Studio (21+ days overdue)".to_owned(),
            time_label: "1 day ago".to_owned(),
            offset_label: "1d".to_owned(),
        },
    ]
}
