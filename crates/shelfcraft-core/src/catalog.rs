//! # Option Catalogs
//!
//! Read-only lookups for the three customization option catalogs: wood
//! species, finishes, and bracket hardware.
//!
//! The catalog collaborator owns this data; the core never mutates it during
//! a pricing or cart operation. `Catalog` is the in-process snapshot of those
//! three tables, loaded once by the caller and handed to the pricing flow.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::types::{Bracket, Configuration, Finish, Product, WoodType};

/// In-memory snapshot of the three option catalogs, keyed by option id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    wood_types: HashMap<String, WoodType>,
    finishes: HashMap<String, Finish>,
    brackets: HashMap<String, Bracket>,
}

impl Catalog {
    /// Builds a catalog from the three option tables.
    pub fn new(
        wood_types: impl IntoIterator<Item = WoodType>,
        finishes: impl IntoIterator<Item = Finish>,
        brackets: impl IntoIterator<Item = Bracket>,
    ) -> Self {
        Catalog {
            wood_types: wood_types.into_iter().map(|w| (w.id.clone(), w)).collect(),
            finishes: finishes.into_iter().map(|f| (f.id.clone(), f)).collect(),
            brackets: brackets.into_iter().map(|b| (b.id.clone(), b)).collect(),
        }
    }

    /// Looks up a wood species by id.
    pub fn wood_type(&self, id: &str) -> Option<&WoodType> {
        self.wood_types.get(id)
    }

    /// Looks up a finish by id.
    pub fn finish(&self, id: &str) -> Option<&Finish> {
        self.finishes.get(id)
    }

    /// Looks up bracket hardware by id.
    pub fn bracket(&self, id: &str) -> Option<&Bracket> {
        self.brackets.get(id)
    }

    /// Resolves a product + configuration to the option records the pricing
    /// engine needs.
    ///
    /// Wood species comes from the product (fixed per product); finish and
    /// bracket come from the configuration. An id that doesn't resolve is a
    /// data or caller bug, rejected as [`CoreError::OptionNotFound`].
    pub fn resolve<'a>(
        &'a self,
        product: &Product,
        configuration: &Configuration,
    ) -> CoreResult<(&'a WoodType, &'a Finish, &'a Bracket)> {
        let wood_type =
            self.wood_type(&product.wood_type)
                .ok_or_else(|| CoreError::OptionNotFound {
                    catalog: "wood_type",
                    id: product.wood_type.clone(),
                })?;
        let finish =
            self.finish(&configuration.finish)
                .ok_or_else(|| CoreError::OptionNotFound {
                    catalog: "finish",
                    id: configuration.finish.clone(),
                })?;
        let bracket =
            self.bracket(&configuration.bracket)
                .ok_or_else(|| CoreError::OptionNotFound {
                    catalog: "bracket",
                    id: configuration.bracket.clone(),
                })?;

        Ok((wood_type, finish, bracket))
    }
}
