// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sparse geographic hierarchy: department → provinces, and
// (province-or-department key) → districts.
//
// The tables cover a handful of departments on purpose — plausibility, not
// completeness, is the goal. Lookups are total: a missing entry resolves to
// a documented fallback instead of an error, so the generator is never
// blocked by sparseness.

/// Departments a record may carry.
pub const DEPARTMENTS: &[&str] = &["LIMA", "AREQUIPA", "CUSCO", "LA LIBERTAD", "PIURA", "CALLAO"];

/// District pool used when neither the province nor the department has an
/// entry in the district table.
pub const FALLBACK_DISTRICTS: &[&str] = &["CENTRO"];

fn province_table(department: &str) -> Option<&'static [&'static str]> {
    let provinces: &'static [&'static str] = match department {
        "LIMA" => &["LIMA", "HUARAL", "CANTA"],
        "AREQUIPA" => &["AREQUIPA", "CAMANA", "ISLAY"],
        "CUSCO" => &["CUSCO", "URUBAMBA", "CALCA"],
        "LA LIBERTAD" => &["TRUJILLO", "ASCOPE", "PACASMAYO"],
        "PIURA" => &["PIURA", "SULLANA", "TALARA"],
        "CALLAO" => &["CALLAO"],
        _ => return None,
    };
    Some(provinces)
}

// District keys mix province names (TRUJILLO) and department names (LIMA,
// CALLAO) — the table mirrors how sparse the source data is, hence the
// two-level key fallback in `districts_of`.
fn district_table(key: &str) -> Option<&'static [&'static str]> {
    let districts: &'static [&'static str] = match key {
        "LIMA" => &["MIRAFLORES", "SAN ISIDRO", "SURCO", "LA MOLINA", "SAN BORJA", "LINCE"],
        "AREQUIPA" => &["CAYMA", "YANAHUARA", "CERRO COLORADO", "SACHACA"],
        "CUSCO" => &["WANCHAQ", "SAN SEBASTIAN", "SANTIAGO"],
        "TRUJILLO" => &["TRUJILLO", "VICTOR LARCO", "HUANCHACO"],
        "PIURA" => &["PIURA", "CASTILLA", "CATACAOS"],
        "CALLAO" => &["CALLAO", "BELLAVISTA", "LA PERLA", "LA PUNTA"],
        _ => return None,
    };
    Some(districts)
}

/// Provinces of `department`, or a singleton set holding the department name
/// itself when the table has no entry.
pub fn provinces_of<'a>(department: &'a str) -> Vec<&'a str> {
    match province_table(department) {
        Some(provinces) => provinces.to_vec(),
        None => vec![department],
    }
}

/// Districts for a record's geography: the district table is keyed by
/// `province` first, then by `department`, then resolves to the sentinel
/// pool. Total function — always returns a non-empty slice.
pub fn districts_of(province: &str, department: &str) -> &'static [&'static str] {
    district_table(province)
        .or_else(|| district_table(department))
        .unwrap_or(FALLBACK_DISTRICTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cusco_province_set() {
        assert_eq!(provinces_of("CUSCO"), vec!["CUSCO", "URUBAMBA", "CALCA"]);
    }

    #[test]
    fn cusco_province_district_set() {
        let districts = districts_of("CUSCO", "CUSCO");
        assert_eq!(districts, &["WANCHAQ", "SAN SEBASTIAN", "SANTIAGO"]);
    }

    #[test]
    fn unknown_department_resolves_to_itself() {
        assert_eq!(provinces_of("AMAZONAS"), vec!["AMAZONAS"]);
    }

    #[test]
    fn district_lookup_falls_back_to_department() {
        // HUARAL has no district entry; the department key LIMA does.
        let districts = districts_of("HUARAL", "LIMA");
        assert!(districts.contains(&"MIRAFLORES"));
    }

    #[test]
    fn district_lookup_falls_back_to_sentinel() {
        // Neither ASCOPE nor LA LIBERTAD appears in the district table.
        assert_eq!(districts_of("ASCOPE", "LA LIBERTAD"), FALLBACK_DISTRICTS);
    }

    #[test]
    fn trujillo_is_keyed_as_a_province() {
        let districts = districts_of("TRUJILLO", "LA LIBERTAD");
        assert!(districts.contains(&"VICTOR LARCO"));
    }

    #[test]
    fn every_department_has_a_non_empty_province_set() {
        for department in DEPARTMENTS {
            assert!(!provinces_of(department).is_empty());
        }
    }
}
