// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::Date;
use time::macros::format_description;

use crate::model::{OverdueInvoice, Tone};
use crate::state::ModalSubject;

/// Dollar amount with a `$` prefix and thousands grouping. Sample invoices
/// are whole-dollar, so the cents suffix only appears when non-zero.
pub fn format_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let absolute = cents.unsigned_abs() as i64;
    let dollars = absolute / 100;
    let remainder = absolute % 100;
    if remainder == 0 {
        format!("{sign}${}", comma_format(dollars))
    } else {
        format!("{sign}${}.{remainder:02}", comma_format(dollars))
    }
}

/// Short month name, day, 4-digit year: `Jan 15, 2024`.
pub fn format_short_date(date: Date) -> String {
    date.format(&format_description!(
        "[month repr:short] [day padding:none], [year]"
    ))
    .unwrap_or_else(|_| "Jan 1, 1970".to_owned())
}

pub fn reminder_subject(subject: &ModalSubject) -> String {
    match subject {
        ModalSubject::Preview { invoice, .. } => {
            format!("Friendly reminder - Invoice #{}", invoice.id.get())
        }
        ModalSubject::Detail { invoice } => {
            format!("Payment Reminder - Invoice #{}", invoice.id.get())
        }
    }
}

/// The message shown in the modal body. Previews substitute invoice fields
/// into the fixed per-tone template; details return the historical
/// `message_sent` text verbatim, since that is what actually went out.
pub fn reminder_body(subject: &ModalSubject) -> String {
    match subject {
        ModalSubject::Preview { invoice, tone } => match tone {
            Tone::Polite => polite_body(invoice),
            Tone::Professional => professional_body(invoice),
            Tone::Firm => firm_body(invoice),
        },
        ModalSubject::Detail { invoice } => invoice.message_sent.clone(),
    }
}

fn polite_body(invoice: &OverdueInvoice) -> String {
    format!(
        "Hi there!\n\n\
         I hope you're doing well! I wanted to follow up on invoice #{id} for {amount}, \
         which was due {days} days ago.\n\n\
         I know things can get busy, so I wanted to send a gentle reminder. If you have \
         any questions about the invoice or need any additional information, please don't \
         hesitate to reach out!\n\n\
         Thanks for your time, and I look forward to hearing from you soon!\n\n\
         Best regards",
        id = invoice.id.get(),
        amount = format_amount(invoice.amount_cents),
        days = invoice.days_overdue,
    )
}

fn professional_body(invoice: &OverdueInvoice) -> String {
    format!(
        "Hello,\n\n\
         I'm writing to follow up on invoice #{id} for {amount}, which was due {days} \
         days ago.\n\n\
         Please let me know when I can expect payment, or if there are any issues that \
         need to be addressed. I'm happy to discuss payment arrangements if needed.\n\n\
         Thank you for your prompt attention to this matter.\n\n\
         Best regards",
        id = invoice.id.get(),
        amount = format_amount(invoice.amount_cents),
        days = invoice.days_overdue,
    )
}

fn firm_body(invoice: &OverdueInvoice) -> String {
    format!(
        "Dear {client},\n\n\
         This is a formal notice regarding overdue invoice #{id} for {amount}, which was \
         due {days} days ago.\n\n\
         Immediate payment is required to avoid any disruption to our business \
         relationship. Please remit payment within 5 business days of receiving this \
         notice.\n\n\
         If payment has already been sent, please disregard this notice and provide \
         payment confirmation.\n\n\
         Regards",
        client = invoice.client,
        id = invoice.id.get(),
        amount = format_amount(invoice.amount_cents),
        days = invoice.days_overdue,
    )
}

fn comma_format(value: i64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let mut chars = digits.chars().collect::<Vec<_>>();
    let mut count = 0usize;
    while let Some(ch) = chars.pop() {
        if count == 3 {
            out.push(',');
            count = 0;
        }
        out.push(ch);
        count += 1;
    }
    out.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::{format_amount, format_short_date, reminder_body, reminder_subject};
    use crate::ids::InvoiceId;
    use crate::model::{OverdueInvoice, PaidInvoice, Tone};
    use crate::state::ModalSubject;
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

    #[test]
    fn amounts_group_thousands_and_omit_zero_cents() {
        assert_eq!(format_amount(85_000), "$850");
        assert_eq!(format_amount(120_000), "$1,200");
        assert_eq!(format_amount(250_000), "$2,500");
        assert_eq!(format_amount(123_456), "$1,234.56");
        assert_eq!(format_amount(100_000_000), "$1,000,000");
    }

    #[test]
    fn short_dates_use_short_month_and_unpadded_day() {
        assert_eq!(format_short_date(date!(2024 - 01 - 15)), "Jan 15, 2024");
        assert_eq!(format_short_date(date!(2024 - 01 - 08)), "Jan 8, 2024");
    }

    #[test]
    fn preview_subject_and_detail_subject_differ() {
        let preview = ModalSubject::Preview {
            invoice: acme(),
            tone: Tone::Polite,
        };
        assert_eq!(reminder_subject(&preview), "Friendly reminder - Invoice #1");

        let detail = ModalSubject::Detail {
            invoice: PaidInvoice {
                id: InvoiceId::new(101),
                client: "Blue Corp".to_owned(),
                amount_cents: 250_000,
                avatar: "BC".to_owned(),
                date_sent: date!(2024 - 01 - 15),
                date_paid: date!(2024 - 01 - 18),
                message_tone: Tone::Polite,
                message_sent: "historic".to_owned(),
                days_to_payment: 3,
            },
        };
        assert_eq!(
            reminder_subject(&detail),
            "Payment Reminder - Invoice #101"
        );
    }

    #[test]
    fn polite_body_substitutes_invoice_fields() {
        let body = reminder_body(&ModalSubject::Preview {
            invoice: acme(),
            tone: Tone::Polite,
        });
        assert!(body.starts_with("Hi there!"));
        assert!(body.contains("invoice #1 for $1,200, which was due 14 days ago"));
        assert!(body.ends_with("Best regards"));
    }

    #[test]
    fn professional_body_substitutes_invoice_fields() {
        let body = reminder_body(&ModalSubject::Preview {
            invoice: acme(),
            tone: Tone::Professional,
        });
        assert!(body.starts_with("Hello,"));
        assert!(body.contains("invoice #1 for $1,200, which was due 14 days ago"));
        assert!(body.contains("payment arrangements"));
    }

    #[test]
    fn firm_body_addresses_client_by_name() {
        let body = reminder_body(&ModalSubject::Preview {
            invoice: acme(),
            tone: Tone::Firm,
        });
        assert!(body.starts_with("Dear Acme Design Co.,"));
        assert!(body.contains("overdue invoice #1 for $1,200, which was due 14 days ago"));
        assert!(body.contains("within 5 business days"));
        assert!(body.ends_with("Regards"));
    }

    #[test]
    fn tone_switch_changes_only_the_rendered_template() {
        let polite = reminder_body(&ModalSubject::Preview {
            invoice: acme(),
            tone: Tone::Polite,
        });
        let firm = reminder_body(&ModalSubject::Preview {
            invoice: acme(),
            tone: Tone::Firm,
        });
        assert_ne!(polite, firm);
        for body in [&polite, &firm] {
            assert!(body.contains("#1"));
            assert!(body.contains("$1,200"));
            assert!(body.contains("14 days ago"));
        }
    }

    #[test]
    fn detail_body_is_the_stored_message_verbatim() {
        let message = "Hello, I'm writing to follow up on invoice #102 for $1,800...";
        let detail = ModalSubject::Detail {
            invoice: PaidInvoice {
                id: InvoiceId::new(102),
                client: "StartupXYZ".to_owned(),
                amount_cents: 180_000,
                avatar: "SX".to_owned(),
                date_sent: date!(2024 - 01 - 10),
                date_paid: date!(2024 - 01 - 25),
                message_tone: Tone::Professional,
                message_sent: message.to_owned(),
                days_to_payment: 15,
            },
        };
        assert_eq!(reminder_body(&detail), message);
    }
}
