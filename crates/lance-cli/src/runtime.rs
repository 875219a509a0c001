// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use lance_app::{ActivityEvent, InvoiceId, OverdueInvoice, PaidInvoice, SendOutcome, Tone};
use lance_data::Store;
use lance_tui::AppRuntime;

/// Adapts the in-memory sample store onto the TUI runtime seam.
pub struct DataRuntime {
    store: Store,
}

impl DataRuntime {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }
}

impl AppRuntime for DataRuntime {
    fn load_overdue(&mut self) -> Result<Vec<OverdueInvoice>> {
        Ok(self.store.overdue().to_vec())
    }

    fn load_paid(&mut self) -> Result<Vec<PaidInvoice>> {
        Ok(self.store.paid().to_vec())
    }

    fn load_activity(&mut self) -> Result<Vec<ActivityEvent>> {
        Ok(self.store.activity().to_vec())
    }

    fn send_reminder(
        &mut self,
        invoice_id: InvoiceId,
        tone: Tone,
        body: &str,
    ) -> Result<SendOutcome> {
        Ok(self.store.send_reminder(invoice_id, tone, body))
    }
}

#[cfg(test)]
mod tests {
    use super::DataRuntime;
    use anyhow::Result;
    use lance_app::{InvoiceId, SendOutcome, Tone};
    use lance_data::Store;
    use lance_tui::AppRuntime;

    #[test]
    fn runtime_serves_seeded_rows() -> Result<()> {
        let mut runtime = DataRuntime::new(Store::seeded());

        let overdue = runtime.load_overdue()?;
        assert_eq!(overdue.len(), 3);
        assert_eq!(overdue[0].client, "Acme Design Co.");

        let paid = runtime.load_paid()?;
        assert_eq!(paid.len(), 3);
        assert_eq!(paid[0].client, "Blue Corp");

        assert_eq!(runtime.load_activity()?.len(), 5);
        Ok(())
    }

    #[test]
    fn send_is_recorded_in_the_store_log() -> Result<()> {
        let mut runtime = DataRuntime::new(Store::seeded());

        let outcome = runtime.send_reminder(InvoiceId::new(2), Tone::Professional, "Hello,")?;
        assert_eq!(outcome, SendOutcome::Accepted);

        let sent = runtime.store().sent_reminders();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].invoice_id, InvoiceId::new(2));
        Ok(())
    }

    #[test]
    fn send_to_paid_invoice_is_rejected() -> Result<()> {
        let mut runtime = DataRuntime::new(Store::seeded());

        let outcome = runtime.send_reminder(InvoiceId::new(101), Tone::Polite, "Hi there!")?;
        assert_eq!(outcome, SendOutcome::Rejected);
        assert!(runtime.store().sent_reminders().is_empty());
        Ok(())
    }
}
