// 🏷️ Category Entity - Fixed-type classification with stable identity
//
// Categories classify income/expense transactions. The type is fixed at
// creation and immutable thereafter; the display color is derived from the
// type (one constant per type). Subcategories hang off a parent category
// by id and carry no type of their own.

use serde::{Deserialize, Serialize};

use crate::id;

// ============================================================================
// CATEGORY TYPE
// ============================================================================

/// Color assigned to income categories created at runtime
pub const INCOME_COLOR: &str = "#22c55e";

/// Color assigned to expense categories created at runtime
pub const EXPENSE_COLOR: &str = "#f97316";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    /// Money coming in
    Income,

    /// Money going out
    Expense,
}

impl CategoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryType::Income => "income",
            CategoryType::Expense => "expense",
        }
    }

    /// Display color derived from the type.
    pub fn default_color(&self) -> &'static str {
        match self {
            CategoryType::Income => INCOME_COLOR,
            CategoryType::Expense => EXPENSE_COLOR,
        }
    }
}

// ============================================================================
// CATEGORY ENTITY
// ============================================================================

/// Identity: `id` (UUID) - never changes.
/// Values: `name`, `kind`, `color` - all fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Stable identity (UUID) - NEVER changes
    pub id: String,

    /// Category name (e.g., "Food & Dining")
    pub name: String,

    /// Income or expense. Immutable after creation.
    #[serde(rename = "type")]
    pub kind: CategoryType,

    /// Display color (e.g., "#f97316"), derived from `kind` at creation
    pub color: String,
}

impl Category {
    /// Create a new category with a fresh id and the type's default color.
    pub fn new(name: impl Into<String>, kind: CategoryType) -> Self {
        Category {
            id: id::generate(),
            name: name.into(),
            kind,
            color: kind.default_color().to_string(),
        }
    }

    /// Seed constructor: fixed id and explicit color (bootstrap data only).
    pub fn seeded(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: CategoryType,
        color: impl Into<String>,
    ) -> Self {
        Category {
            id: id.into(),
            name: name.into(),
            kind,
            color: color.into(),
        }
    }
}

// ============================================================================
// SUBCATEGORY ENTITY
// ============================================================================

/// A refinement of a category (e.g., "Groceries" under "Food & Dining").
///
/// `category_id` should reference an existing category; the reducer does
/// not verify this - callers are expected to supply a valid id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    /// Stable identity (UUID) - NEVER changes
    pub id: String,

    /// Parent category id
    pub category_id: String,

    /// Subcategory name (e.g., "Groceries")
    pub name: String,
}

impl Subcategory {
    /// Create a new subcategory with a fresh id under the given category.
    pub fn new(category_id: impl Into<String>, name: impl Into<String>) -> Self {
        Subcategory {
            id: id::generate(),
            category_id: category_id.into(),
            name: name.into(),
        }
    }

    /// Seed constructor: fixed id (bootstrap data only).
    pub fn seeded(
        id: impl Into<String>,
        category_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Subcategory {
            id: id.into(),
            category_id: category_id.into(),
            name: name.into(),
        }
    }
}
