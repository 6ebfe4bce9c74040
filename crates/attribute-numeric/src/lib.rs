//! Numeric attribute type.
//!
//! Declares a nullable 32-bit integer column, renders as a digit-only text
//! input, and filters items by `>`, `>=`, `<`, `<=` and `!=` comparisons
//! against the backing table.
//!
//! # Example
//!
//! ```rust,ignore
//! use attribute_core::{AttributeMeta, ComparableAttribute, Identifier, TableModel};
//! use attribute_numeric::{NumericAttribute, SettingsProfile};
//!
//! let model = Arc::new(TableModel::new(Identifier::new("mm_products")?));
//! let meta = AttributeMeta::new(Identifier::new("price")?);
//! let price = NumericAttribute::new(model, meta, database, SettingsProfile::Full);
//!
//! let expensive = price.filter_greater_than(100.into(), true).await?;
//! ```

pub mod numeric;
pub mod profile;

pub use numeric::NumericAttribute;
pub use profile::SettingsProfile;
