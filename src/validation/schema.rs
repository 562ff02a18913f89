//! Product schema registry.
//!
//! The six product columns are fixed and ordered. Each column is described by
//! a [`FieldRule`] in a static table, so the validator stays a pure function
//! over `(rules, rows)`.

use super::domain::{FieldKind, FieldRule, ValidationReason};

/// Category names accepted in the `categoria` column.
pub const CATEGORIES: [&str; 5] = [
    "Móveis",
    "Hardware",
    "Acessórios",
    "Componentes",
    "Periféricos",
];

/// Largest accepted value of the `estoque` column.
pub const MAX_STOCK: i64 = 500;

/// Maximum number of fractional digits in the `preco` column.
pub const MAX_PRICE_DECIMALS: usize = 2;

static PRODUCT_FIELDS: [FieldRule; 6] = [
    FieldRule::new("id", FieldKind::Number, is_valid_id, ValidationReason::InvalidId)
        .with_min(0.0),
    FieldRule::new(
        "nome",
        FieldKind::String,
        is_non_blank,
        ValidationReason::EmptyString,
    ),
    FieldRule::new(
        "categoria",
        FieldKind::String,
        is_known_category,
        ValidationReason::InvalidCategory,
    )
    .with_allowed_values(&CATEGORIES),
    FieldRule::new(
        "preco",
        FieldKind::Number,
        is_valid_price,
        ValidationReason::InvalidPrice,
    )
    .with_min(0.0),
    FieldRule::new(
        "estoque",
        FieldKind::Number,
        is_valid_stock,
        ValidationReason::InvalidStock,
    )
    .with_min(0.0)
    .with_max(500.0),
    FieldRule::new(
        "fornecedor",
        FieldKind::String,
        is_non_blank,
        ValidationReason::EmptyString,
    ),
];

/// An ordered set of column rules.
///
/// # Examples
///
/// ```
/// use csv_gate::validation::schema::Schema;
///
/// let schema = Schema::products();
/// assert_eq!(schema.column_count(), 6);
/// assert!(schema.field("preco").is_some_and(|rule| rule.accepts("19.99")));
/// assert!(schema.field("ean").is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    fields: &'static [FieldRule],
}

impl Schema {
    /// Creates a schema from a static rule table.
    #[must_use]
    pub const fn new(fields: &'static [FieldRule]) -> Self {
        Self { fields }
    }

    /// Returns the product schema:
    /// `id, nome, categoria, preco, estoque, fornecedor`.
    #[must_use]
    pub fn products() -> Self {
        Self::new(&PRODUCT_FIELDS)
    }

    /// Returns the rules in column order.
    #[must_use]
    pub const fn fields(&self) -> &'static [FieldRule] {
        self.fields
    }

    /// Returns the number of expected columns.
    #[must_use]
    pub const fn column_count(&self) -> usize {
        self.fields.len()
    }

    /// Looks up a rule by column name.
    ///
    /// Unknown names return `None`; they are never validated.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldRule> {
        self.fields.iter().find(|rule| rule.name() == name)
    }

    /// Returns the column names in order.
    pub fn headers(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(FieldRule::name)
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::products()
    }
}

fn is_valid_id(raw: &str) -> bool {
    raw.trim().parse::<i64>().is_ok_and(|id| id >= 0)
}

fn is_non_blank(raw: &str) -> bool {
    !raw.trim().is_empty()
}

fn is_known_category(raw: &str) -> bool {
    CATEGORIES.contains(&raw.trim())
}

fn is_valid_price(raw: &str) -> bool {
    raw.trim().parse::<f64>().is_ok_and(|price| {
        price.is_finite() && price >= 0.0 && fraction_digits(price) <= MAX_PRICE_DECIMALS
    })
}

fn is_valid_stock(raw: &str) -> bool {
    raw.trim()
        .parse::<i64>()
        .is_ok_and(|stock| (0..=MAX_STOCK).contains(&stock))
}

/// Counts fractional digits in the shortest decimal form of `value`, so
/// trailing zeros such as `10.50` do not count.
fn fraction_digits(value: f64) -> usize {
    value
        .to_string()
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len())
}
