//! Material model.
//!
//! A closed set of material kinds (book, ebook, magazine) sharing common
//! identity fields, each with its own maintenance-cost formula. Pure domain
//! logic only: no parsing, no IO.

pub mod kind;
pub mod material;

pub use kind::MaterialKind;
pub use material::{
    BOOK_TRANCHE_COST, BOOK_TRANCHE_DAYS, EBOOK_COST_RATE, IMPORT_SURCHARGE, MAGAZINE_BASE_COST,
    Material, MaterialDetails,
};
