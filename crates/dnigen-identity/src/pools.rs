// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Static sampling pools for record synthesis.
//
// All pools are uppercase because that is how the fields appear on the card
// (and what the OCR pipeline is expected to read back). Every pool must stay
// non-empty: the generator samples without runtime emptiness checks.

/// Given-name pool sampled when the record's sex is male.
pub const MALE_GIVEN_NAMES: &[&str] = &[
    "CARLOS ALBERTO",
    "JOSE LUIS",
    "MIGUEL ANGEL",
    "JUAN PABLO",
    "ROBERTO CARLOS",
    "PEDRO ANTONIO",
];

/// Given-name pool sampled when the record's sex is female.
pub const FEMALE_GIVEN_NAMES: &[&str] = &[
    "MARIA ELENA",
    "ANA LUCIA",
    "ROSA MARIA",
    "CARMEN JULIA",
    "LUCIA FERNANDA",
    "PATRICIA ISABEL",
];

/// Shared surname pool. Paternal and maternal surnames are drawn from it
/// without replacement, so it must hold at least two entries.
pub const SURNAMES: &[&str] = &[
    "GARCIA", "RODRIGUEZ", "MARTINEZ", "LOPEZ", "GONZALEZ", "HERNANDEZ", "PEREZ", "SANCHEZ",
    "RAMIREZ", "TORRES", "FLORES", "RIVERA", "MORALES", "ORTIZ", "CHAVEZ", "CASTILLO", "VASQUEZ",
    "ROJAS", "MENDOZA", "SILVA",
];

/// Street names for the address field. The house number is sampled separately.
pub const STREETS: &[&str] = &[
    "AV. LARCO",
    "JR. PUNO",
    "CALLE LOS OLIVOS",
    "AV. AREQUIPA",
    "JR. CUSCO",
    "AV. BRASIL",
    "CALLE LIMA",
    "JR. TACNA",
    "AV. JAVIER PRADO",
    "CALLE SAN MARTIN",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pools_are_non_empty() {
        assert!(!MALE_GIVEN_NAMES.is_empty());
        assert!(!FEMALE_GIVEN_NAMES.is_empty());
        assert!(!STREETS.is_empty());
    }

    #[test]
    fn surname_pool_supports_distinct_draws() {
        assert!(SURNAMES.len() >= 2);
    }
}
