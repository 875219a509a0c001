// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Fixture builders shared by the workspace test suites. Builders keep the
//! dataset invariants true by construction; tests that need a broken
//! invariant build the structs by hand instead.

use lance_app::{
    ActivityEvent, ActivityEventId, ActivityKind, InvoiceId, OverdueInvoice, PaidInvoice, Tone,
};
use time::Date;

/// Initials the dashboard shows in the avatar badge: first letter of the
/// first two words, uppercased ("Acme Design Co." -> "AD").
pub fn avatar_initials(client: &str) -> String {
    client
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

pub fn overdue_invoice(
    id: i64,
    client: &str,
    amount_cents: i64,
    days_overdue: i64,
    tone: Tone,
) -> OverdueInvoice {
    OverdueInvoice {
        id: InvoiceId::new(id),
        client: client.to_owned(),
        amount_cents,
        days_overdue,
        avatar: avatar_initials(client),
        tone,
    }
}

pub fn paid_invoice(
    id: i64,
    client: &str,
    amount_cents: i64,
    date_sent: Date,
    date_paid: Date,
    tone: Tone,
    message_sent: &str,
) -> PaidInvoice {
    PaidInvoice {
        id: InvoiceId::new(id),
        client: client.to_owned(),
        amount_cents,
        avatar: avatar_initials(client),
        date_sent,
        date_paid,
        message_tone: tone,
        message_sent: message_sent.to_owned(),
        days_to_payment: (date_paid - date_sent).whole_days(),
    }
}

pub fn activity_event(
    id: i64,
    kind: ActivityKind,
    message: &str,
    time_label: &str,
    offset_label: &str,
) -> ActivityEvent {
    ActivityEvent {
        id: ActivityEventId::new(id),
        kind,
        message: message.to_owned(),
        time_label: time_label.to_owned(),
        offset_label: offset_label.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::{avatar_initials, paid_invoice};
    use lance_app::Tone;
    use time::macros::date;

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(avatar_initials("Acme Design Co."), "AD");
        assert_eq!(avatar_initials("Blue Corp"), "BC");
        assert_eq!(avatar_initials("StartupXYZ"), "S");
    }

    #[test]
    fn paid_builder_derives_payment_lag_from_dates() {
        let invoice = paid_invoice(
            102,
            "StartupXYZ",
            180_000,
            date!(2024 - 01 - 10),
            date!(2024 - 01 - 25),
            Tone::Professional,
            "Hello,",
        );
        assert_eq!(invoice.days_to_payment, 15);
    }
}
