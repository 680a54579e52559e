//! Serializable summary of a catalog.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use biblio_core::MaterialCode;
use biblio_materials::{Material, MaterialKind};

use crate::catalog::Catalog;

/// The material with the highest maintenance cost, reduced to what a report shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighestCostItem {
    pub code: MaterialCode,
    pub kind: MaterialKind,
    pub title: String,
    pub author: String,
    pub maintenance_cost: Decimal,
}

impl From<&Material> for HighestCostItem {
    fn from(material: &Material) -> Self {
        Self {
            code: material.code().clone(),
            kind: material.kind(),
            title: material.title().to_string(),
            author: material.author().to_string(),
            maintenance_cost: material.maintenance_cost(),
        }
    }
}

/// Every catalog aggregate, computed once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogReport {
    pub total_materials: usize,
    pub count_by_kind: BTreeMap<MaterialKind, usize>,
    pub average_base_price: i64,
    pub total_maintenance_cost: Decimal,
    /// `None` when the catalog is empty.
    pub highest_maintenance_cost: Option<HighestCostItem>,
    pub books_over_30_days: usize,
    pub imported_magazines: usize,
}

impl CatalogReport {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            total_materials: catalog.len(),
            count_by_kind: catalog.count_by_kind(),
            average_base_price: catalog.average_base_price(),
            total_maintenance_cost: catalog.total_maintenance_cost(),
            highest_maintenance_cost: catalog.highest_maintenance_cost_item().map(HighestCostItem::from),
            books_over_30_days: catalog.count_books_over_30_days(),
            imported_magazines: catalog.count_imported_magazines(),
        }
    }
}
