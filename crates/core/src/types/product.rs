//! Product catalog enums.
//!
//! The catalog distinguishes how eggs are packaged ([`ProductType`]) from the
//! size grade of the eggs themselves ([`Classification`]). Both are stored as
//! text and parsed back at the repository boundary.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a stored product type is not recognized.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown product type: {0}")]
pub struct ParseProductTypeError(pub String);

/// Error returned when a stored classification is not recognized.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown classification: {0}")]
pub struct ParseClassificationError(pub String);

/// Packaging category for a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    /// Carton of a dozen (or half dozen) eggs.
    #[default]
    Estojo,
    /// Open tray ("palhão") of 30 eggs.
    Palhao,
    /// Bulk box.
    Caixa,
    /// Quail eggs, sold by the unit.
    Codorna,
}

impl ProductType {
    /// All packaging categories, in form/display order.
    pub const ALL: [Self; 4] = [Self::Estojo, Self::Palhao, Self::Caixa, Self::Codorna];

    /// The stored identifier for this type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Estojo => "estojo",
            Self::Palhao => "palhao",
            Self::Caixa => "caixa",
            Self::Codorna => "codorna",
        }
    }

    /// Human-readable label shown in forms.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Estojo => "Estojo",
            Self::Palhao => "Palhão",
            Self::Caixa => "Caixa",
            Self::Codorna => "Codorna",
        }
    }

    /// Unit label for the quantity field.
    ///
    /// Quail eggs are counted by the unit; everything else by the dozen.
    #[must_use]
    pub const fn quantity_unit(&self) -> &'static str {
        match self {
            Self::Codorna => "unidades",
            _ => "dúzias",
        }
    }

    /// Parse a stored identifier back into a `ProductType`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseProductTypeError`] if the value is not one of the known
    /// identifiers.
    pub fn parse(s: &str) -> Result<Self, ParseProductTypeError> {
        match s {
            "estojo" => Ok(Self::Estojo),
            "palhao" => Ok(Self::Palhao),
            "caixa" => Ok(Self::Caixa),
            "codorna" => Ok(Self::Codorna),
            other => Err(ParseProductTypeError(other.to_owned())),
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Size grade for eggs, independent of quality class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Pequeno, under 53 g.
    P,
    /// Médio, 53-59 g.
    M,
    /// Grande, 60-66 g.
    G,
    /// Extra, 67-73 g.
    XL,
    /// Over 73 g.
    Jumbo,
}

impl Classification {
    /// All size grades, smallest first.
    pub const ALL: [Self; 5] = [Self::P, Self::M, Self::G, Self::XL, Self::Jumbo];

    /// The stored identifier for this grade (also the badge text).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::P => "P",
            Self::M => "M",
            Self::G => "G",
            Self::XL => "XL",
            Self::Jumbo => "Jumbo",
        }
    }

    /// Human-readable label shown in forms.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::P => "P - Pequeno",
            Self::M => "M - Médio",
            Self::G => "G - Grande",
            Self::XL => "XL - Extra",
            Self::Jumbo => "Jumbo",
        }
    }

    /// Parse a stored identifier back into a `Classification`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseClassificationError`] if the value is not one of the
    /// known identifiers.
    pub fn parse(s: &str) -> Result<Self, ParseClassificationError> {
        match s {
            "P" => Ok(Self::P),
            "M" => Ok(Self::M),
            "G" => Ok(Self::G),
            "XL" => Ok(Self::XL),
            "Jumbo" => Ok(Self::Jumbo),
            other => Err(ParseClassificationError(other.to_owned())),
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
