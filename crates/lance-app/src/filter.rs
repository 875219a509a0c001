// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::model::Invoice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmountBucket {
    All,
    UpTo500,
    From500To1000,
    From1000To2500,
    Over2500,
}

impl AmountBucket {
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::UpTo500,
        Self::From500To1000,
        Self::From1000To2500,
        Self::Over2500,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::UpTo500 => "0-500",
            Self::From500To1000 => "500-1000",
            Self::From1000To2500 => "1000-2500",
            Self::Over2500 => "2500+",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "0-500" => Some(Self::UpTo500),
            "500-1000" => Some(Self::From500To1000),
            "1000-2500" => Some(Self::From1000To2500),
            "2500+" => Some(Self::Over2500),
            _ => None,
        }
    }

    /// Unrecognized raw values degrade to `All` rather than erroring, so a
    /// stale or hand-edited config value can never hide invoices.
    pub fn from_raw(value: &str) -> Self {
        Self::parse(value).unwrap_or(Self::All)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All amounts",
            Self::UpTo500 => "$0 - $500",
            Self::From500To1000 => "$500 - $1,000",
            Self::From1000To2500 => "$1,000 - $2,500",
            Self::Over2500 => "$2,500+",
        }
    }

    /// Buckets are inclusive on the upper bound only: an invoice of exactly
    /// $500 falls in `0-500`, not `500-1000`.
    pub const fn matches(self, amount_cents: i64) -> bool {
        match self {
            Self::All => true,
            Self::UpTo500 => amount_cents <= 500_00,
            Self::From500To1000 => amount_cents > 500_00 && amount_cents <= 1_000_00,
            Self::From1000To2500 => amount_cents > 1_000_00 && amount_cents <= 2_500_00,
            Self::Over2500 => amount_cents > 2_500_00,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DaysBucket {
    All,
    Days1To7,
    Days8To14,
    Days15To30,
    Over30,
}

impl DaysBucket {
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::Days1To7,
        Self::Days8To14,
        Self::Days15To30,
        Self::Over30,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Days1To7 => "1-7",
            Self::Days8To14 => "8-14",
            Self::Days15To30 => "15-30",
            Self::Over30 => "30+",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "1-7" => Some(Self::Days1To7),
            "8-14" => Some(Self::Days8To14),
            "15-30" => Some(Self::Days15To30),
            "30+" => Some(Self::Over30),
            _ => None,
        }
    }

    pub fn from_raw(value: &str) -> Self {
        Self::parse(value).unwrap_or(Self::All)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All overdue",
            Self::Days1To7 => "1-7 days",
            Self::Days8To14 => "8-14 days",
            Self::Days15To30 => "15-30 days",
            Self::Over30 => "30+ days",
        }
    }

    pub const fn matches(self, days_overdue: i64) -> bool {
        match self {
            Self::All => true,
            Self::Days1To7 => days_overdue >= 1 && days_overdue <= 7,
            Self::Days8To14 => days_overdue >= 8 && days_overdue <= 14,
            Self::Days15To30 => days_overdue >= 15 && days_overdue <= 30,
            Self::Over30 => days_overdue > 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub amount: AmountBucket,
    pub days: DaysBucket,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            amount: AmountBucket::All,
            days: DaysBucket::All,
        }
    }
}

impl FilterSelection {
    pub fn is_active(self) -> bool {
        self != Self::default()
    }
}

/// Pure derivation over the combined invoice list: an invoice is kept iff
/// it passes the amount predicate and the days predicate. The days
/// predicate never hides paid invoices, whatever the bucket. Input order is
/// preserved; nothing is cached.
pub fn filter_invoices(invoices: &[Invoice], selection: FilterSelection) -> Vec<&Invoice> {
    invoices
        .iter()
        .filter(|invoice| selection.amount.matches(invoice.amount_cents()))
        .filter(|invoice| match invoice {
            Invoice::Paid(_) => true,
            Invoice::Overdue(overdue) => selection.days.matches(overdue.days_overdue),
        })
        .collect()
}
