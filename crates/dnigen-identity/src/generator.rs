// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Identity record generator.
//
// Pure with respect to the supplied RNG — callers that need reproducible
// batches pass a seeded `StdRng`, everything else passes `thread_rng`.
// Every sampling step draws from a non-empty pool by construction, so the
// generator has no error path: an empty pool is a programming error.

use chrono::{Datelike, Local, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use dnigen_core::types::{IdentityRecord, Sex};

use crate::geography;
use crate::pools;

/// Generate one internally consistent fictitious person record.
pub fn generate(rng: &mut impl Rng) -> IdentityRecord {
    generate_on(rng, Local::now().date_naive())
}

/// Generation against an explicit "today", so age bounds are testable
/// without depending on the wall clock.
pub fn generate_on(rng: &mut impl Rng, today: NaiveDate) -> IdentityRecord {
    let document_number = rng.gen_range(10_000_000u32..=99_999_999).to_string();

    let sex = if rng.gen_bool(0.5) { Sex::Male } else { Sex::Female };
    let name_pool = match sex {
        Sex::Male => pools::MALE_GIVEN_NAMES,
        Sex::Female => pools::FEMALE_GIVEN_NAMES,
    };
    let given_names = *name_pool.choose(rng).expect("name pool must be non-empty");

    let paternal_surname = *pools::SURNAMES
        .choose(rng)
        .expect("surname pool must be non-empty");
    // Exclusion applied before sampling — no rejection loop needed.
    let remaining: Vec<&str> = pools::SURNAMES
        .iter()
        .copied()
        .filter(|surname| *surname != paternal_surname)
        .collect();
    let maternal_surname = *remaining
        .choose(rng)
        .expect("surname pool must hold at least two entries");

    let birth_date = sample_birth_date(rng, today);

    let department = *geography::DEPARTMENTS
        .choose(rng)
        .expect("department set must be non-empty");
    let province_pool = geography::provinces_of(department);
    let province = *province_pool
        .choose(rng)
        .expect("province lookup is total and non-empty");
    let district = *geography::districts_of(province, department)
        .choose(rng)
        .expect("district lookup is total and non-empty");

    // Structurally valid but deliberately independent of the named geography.
    let ubigeo = format!(
        "{}{:02}{:02}",
        rng.gen_range(10..=25),
        rng.gen_range(1..=99),
        rng.gen_range(1..=99),
    );

    let street = *pools::STREETS.choose(rng).expect("street pool must be non-empty");
    let address = format!("{} {}", street, rng.gen_range(100..2000));

    let record = IdentityRecord {
        document_number,
        given_names: given_names.to_owned(),
        paternal_surname: paternal_surname.to_owned(),
        maternal_surname: maternal_surname.to_owned(),
        sex,
        birth_date,
        department: department.to_owned(),
        province: province.to_owned(),
        district: district.to_owned(),
        address,
        ubigeo,
    };
    debug!(
        document_number = %record.document_number,
        district = %record.district,
        "record generated"
    );
    record
}

/// Age uniform in [18, 70]; month uniform; day capped at 28 so the result is
/// a valid calendar date in every month (intentional simplification).
fn sample_birth_date(rng: &mut impl Rng, today: NaiveDate) -> NaiveDate {
    let age = rng.gen_range(18..=70);
    let month = rng.gen_range(1..=12u32);
    let day = rng.gen_range(1..=28u32);
    NaiveDate::from_ymd_opt(today.year() - age, month, day)
        .expect("day ≤ 28 is a valid date in every month")
}
