// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the dnigen fixture generator.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Sex as printed on the card. Determines which given-name pool is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    /// Single-letter form shown in the SEXO field.
    pub fn letter(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

/// One side of the synthetic identity card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Face {
    Front,
    Back,
}

impl Face {
    /// Discriminator used in output filenames.
    pub fn filename_token(&self) -> &'static str {
        match self {
            Self::Front => "frente",
            Self::Back => "reverso",
        }
    }
}

/// One internally consistent fictitious person record.
///
/// Immutable once created. The geographic triple satisfies the hierarchy
/// containment invariant (after the documented fallback policy); `ubigeo` is
/// structurally valid but intentionally NOT cross-validated against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    /// 8-digit document number, uniform in [10000000, 99999999].
    pub document_number: String,
    pub given_names: String,
    pub paternal_surname: String,
    pub maternal_surname: String,
    pub sex: Sex,
    /// Day is always ≤ 28 so the date is valid in every month.
    pub birth_date: NaiveDate,
    pub department: String,
    pub province: String,
    pub district: String,
    /// Street name plus house number, e.g. "AV. LARCO 742".
    pub address: String,
    /// 6-digit location code, structurally `[10-25][01-99][01-99]`.
    pub ubigeo: String,
}

impl IdentityRecord {
    /// Birth date as printed on the front face.
    pub fn formatted_birth_date(&self) -> String {
        self.birth_date.format("%d/%m/%Y").to_string()
    }

    /// Given names followed by both surnames, summary style.
    pub fn full_name(&self) -> String {
        format!(
            "{} {} {}",
            self.given_names, self.paternal_surname, self.maternal_surname
        )
    }

    /// Age in whole calendar years as the generator counts them
    /// (year difference only, matching the sampling scheme).
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        today.year() - self.birth_date.year()
    }
}
