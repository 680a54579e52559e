use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use biblio_core::CatalogResult;
use biblio_materials::{Material, MaterialKind};

use crate::loader::load_rows;
use crate::report::CatalogReport;

/// Books on loan for strictly more than this many days count as long loans.
pub const LONG_LOAN_DAYS: i64 = 30;

/// Ordered, immutable collection of materials.
///
/// Built once from source rows; iteration order is source row order, which
/// also decides ties in [`Catalog::highest_maintenance_cost_item`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    materials: Vec<Material>,
}

impl Catalog {
    /// Build a catalog from structured rows. See [`crate::loader`] for the
    /// skip/abort policy.
    pub fn from_rows<I, R, S>(rows: I) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        Ok(Self::from_materials(load_rows(rows)?))
    }

    /// Wrap already-built materials, keeping their order.
    pub fn from_materials(materials: Vec<Material>) -> Self {
        Self { materials }
    }

    pub fn all_materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Material> {
        self.materials.iter()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Occurrences per kind. Every kind is present, zero when absent.
    pub fn count_by_kind(&self) -> BTreeMap<MaterialKind, usize> {
        let mut counts: BTreeMap<MaterialKind, usize> =
            MaterialKind::ALL.into_iter().map(|kind| (kind, 0)).collect();
        for material in &self.materials {
            *counts.entry(material.kind()).or_default() += 1;
        }
        counts
    }

    /// Mean base price truncated toward zero; 0 for an empty catalog.
    pub fn average_base_price(&self) -> i64 {
        if self.materials.is_empty() {
            return 0;
        }
        let total = saturating_sum(self.materials.iter().map(Material::base_price));
        let mean = (total / Decimal::from(self.materials.len())).trunc();
        mean.to_i64()
            .unwrap_or(if mean.is_sign_negative() { i64::MIN } else { i64::MAX })
    }

    /// Material with the largest maintenance cost. The earliest one wins a tie.
    pub fn highest_maintenance_cost_item(&self) -> Option<&Material> {
        let mut best: Option<(&Material, Decimal)> = None;
        for material in &self.materials {
            let cost = material.maintenance_cost();
            match best {
                Some((_, best_cost)) if cost <= best_cost => {}
                _ => best = Some((material, cost)),
            }
        }
        best.map(|(material, _)| material)
    }

    /// Sum of every maintenance cost; clamps to `Decimal::MAX` instead of overflowing.
    pub fn total_maintenance_cost(&self) -> Decimal {
        saturating_sum(self.materials.iter().map(Material::maintenance_cost))
    }

    /// Books with more than [`LONG_LOAN_DAYS`] days on loan.
    pub fn count_books_over_30_days(&self) -> usize {
        self.materials
            .iter()
            .filter(|m| m.days_borrowed().is_some_and(|days| days > LONG_LOAN_DAYS))
            .count()
    }

    pub fn count_imported_magazines(&self) -> usize {
        self.materials.iter().filter(|m| m.is_imported()).count()
    }

    /// Snapshot of every aggregate, ready for serialization.
    pub fn report(&self) -> CatalogReport {
        CatalogReport::from_catalog(self)
    }
}

/// Sum that clamps to `Decimal::MAX` / `Decimal::MIN` on overflow.
fn saturating_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, |acc, value| {
        acc.checked_add(value).unwrap_or(if value.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
    })
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Material;
    type IntoIter = std::slice::Iter<'a, Material>;

    fn into_iter(self) -> Self::IntoIter {
        self.materials.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn sample() -> Catalog {
        Catalog::from_rows(vec![
            vec!["1", "B001", "Some Title", "Some Author", "250.00", "45"],
            vec!["2", "E001", "Ebook Title", "Author X", "80.00", "120.00"],
            vec!["3", "M001", "Mag Title", "Author Y", "10.00", "Importada"],
            vec!["3", "M002", "Local Mag", "Author Z", "12.00", "Nacional"],
            vec!["1", "B002", "Short Loan", "Author W", "40.00", "30"],
        ])
        .unwrap()
    }

    #[test]
    fn all_materials_keeps_source_order() {
        let catalog = sample();
        let codes: Vec<&str> = catalog.all_materials().iter().map(|m| m.code().as_str()).collect();
        assert_eq!(codes, vec!["B001", "E001", "M001", "M002", "B002"]);
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.iter().count(), 5);
        assert_eq!((&catalog).into_iter().count(), 5);
    }

    #[test]
    fn count_by_kind_lists_every_kind_in_order() {
        let counts = sample().count_by_kind();
        let entries: Vec<(MaterialKind, usize)> = counts.into_iter().collect();
        assert_eq!(
            entries,
            vec![
                (MaterialKind::Book, 2),
                (MaterialKind::Ebook, 1),
                (MaterialKind::Magazine, 2),
            ]
        );
    }

    #[test]
    fn count_by_kind_on_empty_catalog_is_all_zero() {
        let counts = Catalog::default().count_by_kind();
        assert_eq!(counts.len(), 3);
        assert!(counts.values().all(|&n| n == 0));
    }

    #[test]
    fn average_base_price_truncates() {
        // (250 + 80 + 10 + 12 + 40) / 5 = 78.4
        assert_eq!(sample().average_base_price(), 78);

        let single = Catalog::from_materials(vec![Material::book("B", "T", "A", dec("99.9"), 1)]);
        assert_eq!(single.average_base_price(), 99);
    }

    #[test]
    fn average_base_price_of_empty_catalog_is_zero() {
        assert_eq!(Catalog::default().average_base_price(), 0);
    }

    #[test]
    fn highest_cost_item_on_empty_catalog_is_none() {
        assert!(Catalog::default().highest_maintenance_cost_item().is_none());
    }

    #[test]
    fn highest_cost_item_picks_max() {
        let catalog = Catalog::from_materials(vec![
            Material::book("B1", "T", "A", dec("10"), 10),
            Material::ebook("E1", "T", "A", dec("10"), dec("3000")),
        ]);
        let top = catalog.highest_maintenance_cost_item().unwrap();
        assert_eq!(top.code().as_str(), "E1");
        assert_eq!(top.maintenance_cost(), dec("150"));
    }

    #[test]
    fn highest_cost_item_prefers_first_on_tie() {
        let catalog = Catalog::from_materials(vec![
            Material::magazine("M1", "T", "A", dec("1"), "Nacional"),
            Material::book("B1", "T", "A", dec("1"), 20),
            Material::ebook("E1", "T", "A", dec("1"), dec("2000")),
        ]);
        // book and ebook both cost 100
        assert_eq!(catalog.highest_maintenance_cost_item().unwrap().code().as_str(), "B1");
    }

    #[test]
    fn total_maintenance_cost_sums_every_item() {
        // 200 + 6 + 60 + 50 + 100
        assert_eq!(sample().total_maintenance_cost(), dec("416"));
        assert_eq!(Catalog::default().total_maintenance_cost(), Decimal::ZERO);
    }

    #[test]
    fn long_loans_are_strictly_over_thirty_days() {
        assert_eq!(sample().count_books_over_30_days(), 1);

        let catalog = Catalog::from_materials(vec![
            Material::book("B30", "T", "A", dec("1"), 30),
            Material::book("B31", "T", "A", dec("1"), 31),
            Material::ebook("E1", "T", "A", dec("1"), dec("1000")),
        ]);
        assert_eq!(catalog.count_books_over_30_days(), 1);
    }

    #[test]
    fn average_of_huge_prices_saturates_instead_of_panicking() {
        let catalog = Catalog::from_rows(vec![
            vec!["1", "B1", "T", "A", "60000000000000000000000000000", "1"],
            vec!["1", "B2", "T", "A", "60000000000000000000000000000", "1"],
        ])
        .unwrap();
        assert_eq!(catalog.average_base_price(), i64::MAX);

        let report = catalog.report();
        assert_eq!(report.average_base_price, i64::MAX);
        assert_eq!(report.total_maintenance_cost, dec("200"));
    }

    #[test]
    fn total_of_huge_costs_saturates_at_max() {
        let sale = dec("60000000000000000000000000000");
        let materials: Vec<Material> = (0..30)
            .map(|i| Material::ebook(format!("E{i}").as_str(), "T", "A", dec("1"), sale))
            .collect();
        let catalog = Catalog::from_materials(materials);
        assert_eq!(catalog.total_maintenance_cost(), Decimal::MAX);
    }

    #[test]
    fn imported_magazines_are_counted() {
        assert_eq!(sample().count_imported_magazines(), 1);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_material() -> impl Strategy<Value = Material> {
            prop_oneof![
                (0i64..200, 0u32..10_000).prop_map(|(days, price)| {
                    Material::book("B", "T", "A", Decimal::from(price), days)
                }),
                (0u32..100_000, 0u32..10_000).prop_map(|(sale, price)| {
                    Material::ebook("E", "T", "A", Decimal::from(price), Decimal::from(sale))
                }),
                (any::<bool>(), 0u32..10_000).prop_map(|(imported, price)| {
                    let origin = if imported { "Importada" } else { "Nacional" };
                    Material::magazine("M", "T", "A", Decimal::from(price), origin)
                }),
            ]
        }

        proptest! {
            /// Property: per-kind counts add up to the catalog size.
            #[test]
            fn counts_sum_to_len(materials in prop::collection::vec(any_material(), 0..50)) {
                let catalog = Catalog::from_materials(materials);
                let total: usize = catalog.count_by_kind().values().sum();
                prop_assert_eq!(total, catalog.len());
            }

            /// Property: the highest-cost item is the first one reaching the maximum.
            #[test]
            fn highest_is_first_maximum(materials in prop::collection::vec(any_material(), 1..50)) {
                let catalog = Catalog::from_materials(materials);
                let max = catalog.iter().map(Material::maintenance_cost).max().unwrap();
                let first = catalog.iter().position(|m| m.maintenance_cost() == max).unwrap();
                let top = catalog.highest_maintenance_cost_item().unwrap();
                prop_assert!(core::ptr::eq(top, &catalog.all_materials()[first]));
            }

            /// Property: total cost is never below the highest single cost.
            #[test]
            fn total_bounds_highest(materials in prop::collection::vec(any_material(), 1..50)) {
                let catalog = Catalog::from_materials(materials);
                let top = catalog.highest_maintenance_cost_item().unwrap().maintenance_cost();
                prop_assert!(catalog.total_maintenance_cost() >= top);
            }
        }
    }
}
