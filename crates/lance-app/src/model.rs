// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use time::Date;

use crate::ids::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Polite,
    Professional,
    Firm,
}

impl Tone {
    pub const ALL: [Self; 3] = [Self::Polite, Self::Professional, Self::Firm];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Polite => "polite",
            Self::Professional => "professional",
            Self::Firm => "firm",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "polite" => Some(Self::Polite),
            "professional" => Some(Self::Professional),
            "firm" => Some(Self::Firm),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Polite => "Polite",
            Self::Professional => "Professional",
            Self::Firm => "Firm",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Overdue,
    Paid,
}

impl InvoiceStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::Paid => "paid",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "overdue" => Some(Self::Overdue),
            "paid" => Some(Self::Paid),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverdueInvoice {
    pub id: InvoiceId,
    pub client: String,
    pub amount_cents: i64,
    pub days_overdue: i64,
    pub avatar: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidInvoice {
    pub id: InvoiceId,
    pub client: String,
    pub amount_cents: i64,
    pub avatar: String,
    pub date_sent: Date,
    pub date_paid: Date,
    pub message_tone: Tone,
    pub message_sent: String,
    pub days_to_payment: i64,
}

/// An invoice is either still outstanding or already settled. The two
/// variants share identity fields but carry disjoint lifecycle data, so
/// everything downstream branches on the tag instead of probing fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Invoice {
    Overdue(OverdueInvoice),
    Paid(PaidInvoice),
}

impl Invoice {
    pub const fn status(&self) -> InvoiceStatus {
        match self {
            Self::Overdue(_) => InvoiceStatus::Overdue,
            Self::Paid(_) => InvoiceStatus::Paid,
        }
    }

    pub const fn id(&self) -> InvoiceId {
        match self {
            Self::Overdue(invoice) => invoice.id,
            Self::Paid(invoice) => invoice.id,
        }
    }

    pub fn client(&self) -> &str {
        match self {
            Self::Overdue(invoice) => &invoice.client,
            Self::Paid(invoice) => &invoice.client,
        }
    }

    pub const fn amount_cents(&self) -> i64 {
        match self {
            Self::Overdue(invoice) => invoice.amount_cents,
            Self::Paid(invoice) => invoice.amount_cents,
        }
    }

    pub fn avatar(&self) -> &str {
        match self {
            Self::Overdue(invoice) => &invoice.avatar,
            Self::Paid(invoice) => &invoice.avatar,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    FollowUpSent,
    OverdueDetected,
    PaymentReceived,
    FollowUpScheduled,
    ToneAdjusted,
}

impl ActivityKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FollowUpSent => "follow_up_sent",
            Self::OverdueDetected => "overdue_detected",
            Self::PaymentReceived => "payment_received",
            Self::FollowUpScheduled => "follow_up_scheduled",
            Self::ToneAdjusted => "tone_adjusted",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "follow_up_sent" => Some(Self::FollowUpSent),
            "overdue_detected" => Some(Self::OverdueDetected),
            "payment_received" => Some(Self::PaymentReceived),
            "follow_up_scheduled" => Some(Self::FollowUpScheduled),
            "tone_adjusted" => Some(Self::ToneAdjusted),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FollowUpSent => "follow-up",
            Self::OverdueDetected => "detection",
            Self::PaymentReceived => "payment",
            Self::FollowUpScheduled => "schedule",
            Self::ToneAdjusted => "adjustment",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub id: ActivityEventId,
    pub kind: ActivityKind,
    pub message: String,
    pub time_label: String,
    pub offset_label: String,
}

/// Outcome of handing a rendered reminder to the message-send seam.
/// `Rejected` is a domain answer (unknown or already-paid invoice), not an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SendOutcome {
    Accepted,
    Rejected,
}
