//! Фильтры списка объявлений: страна и потолок цены.
//!
//! Оси независимы; «все» на любой оси означает отсутствие ограничения,
//! а не пустой результат.

use std::collections::BTreeSet;

use crate::models::Listing;

/// Значение варианта «все» в обоих селектах.
pub const ALL: &str = "__all__";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CountryFilter {
    #[default]
    Any,
    Exact(String),
}

impl CountryFilter {
    pub fn from_control(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ALL {
            return Self::Any;
        }
        Self::Exact(value.to_string())
    }

    pub fn admits(&self, listing: &Listing) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(country) => listing.country_name() == Some(country.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PriceCeiling {
    #[default]
    NoLimit,
    AtMost(f64),
}

impl PriceCeiling {
    /// Нечисловое значение селекта трактуется как «без ограничения».
    pub fn from_control(value: &str) -> Self {
        let value = value.trim();
        if value == ALL {
            return Self::NoLimit;
        }
        match value.parse::<f64>() {
            Ok(ceiling) if ceiling.is_finite() => Self::AtMost(ceiling),
            _ => Self::NoLimit,
        }
    }

    /// Объявление без известной цены проходит только при `NoLimit`.
    pub fn admits(&self, listing: &Listing) -> bool {
        match self {
            Self::NoLimit => true,
            Self::AtMost(ceiling) => listing.price.is_some_and(|price| price <= *ceiling),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub country: CountryFilter,
    pub ceiling: PriceCeiling,
}

impl FilterState {
    /// Собирает состояние из текущих значений двух селектов.
    pub fn from_controls(country: &str, price: &str) -> Self {
        Self {
            country: CountryFilter::from_control(country),
            ceiling: PriceCeiling::from_control(price),
        }
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        self.country.admits(listing) && self.ceiling.admits(listing)
    }

    /// Видимое подмножество в исходном порядке; коллекция не меняется.
    pub fn apply<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        listings
            .iter()
            .filter(|listing| self.matches(listing))
            .collect()
    }
}

/// Отсортированные уникальные непустые страны коллекции.
pub fn country_facets(listings: &[Listing]) -> Vec<String> {
    listings
        .iter()
        .filter_map(Listing::country_name)
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
