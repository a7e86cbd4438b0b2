//! Static synthetic dataset
//!
//! The dataset is built exactly once, before the dashboard starts, and is
//! read-only afterwards. Generation is seeded so a run can be reproduced;
//! tests inject fixed datasets through [`Dataset::from_fn`] or [`Dataset::new`].

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::error::{DashboardError, DashboardResult};
use crate::models::{City, CostCategory, MonthlySeries, MONTHS};

/// One category's series for every city, indexed by declaration order
#[derive(Debug, Clone, PartialEq)]
struct CategorySeries([MonthlySeries; City::COUNT]);

impl CategorySeries {
    fn from_map(
        category: CostCategory,
        mut map: HashMap<City, MonthlySeries>,
    ) -> DashboardResult<Self> {
        let mut missing = Vec::new();
        let mut series = [MonthlySeries::new([0.0; MONTHS]); City::COUNT];

        for city in City::ALL {
            match map.remove(&city) {
                Some(s) => series[city.index()] = s,
                None => missing.push(city.name()),
            }
        }

        if !missing.is_empty() {
            return Err(DashboardError::Validation(format!(
                "{} data is missing cities: {}",
                category,
                missing.join(", ")
            )));
        }

        Ok(Self(series))
    }

    fn get(&self, city: City) -> &MonthlySeries {
        &self.0[city.index()]
    }
}

/// Rent, grocery and utility series for every city
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    rent: CategorySeries,
    groceries: CategorySeries,
    utilities: CategorySeries,
    seed: Option<u64>,
}

impl Dataset {
    /// Build a dataset from explicit per-category maps
    ///
    /// Every city must be present in all three maps.
    pub fn new(
        rent: HashMap<City, MonthlySeries>,
        groceries: HashMap<City, MonthlySeries>,
        utilities: HashMap<City, MonthlySeries>,
    ) -> DashboardResult<Self> {
        Ok(Self {
            rent: CategorySeries::from_map(CostCategory::Rent, rent)?,
            groceries: CategorySeries::from_map(CostCategory::Groceries, groceries)?,
            utilities: CategorySeries::from_map(CostCategory::Utilities, utilities)?,
            seed: None,
        })
    }

    /// Build a dataset by calling `f` for every (category, city) pair
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(CostCategory, City) -> MonthlySeries,
    {
        let mut build =
            |category: CostCategory| CategorySeries(City::ALL.map(|city| f(category, city)));
        Self {
            rent: build(CostCategory::Rent),
            groceries: build(CostCategory::Groceries),
            utilities: build(CostCategory::Utilities),
            seed: None,
        }
    }

    /// Generate a synthetic dataset from a random number generator
    ///
    /// Each value is an independent uniform draw in the category's range,
    /// rounded to cents.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        Self::from_fn(|category, _city| {
            let range = category.value_range();
            let mut values = [0.0; MONTHS];
            for value in values.iter_mut() {
                *value = round_cents(rng.gen_range(range.clone()));
            }
            MonthlySeries::new(values)
        })
    }

    /// Generate a reproducible synthetic dataset from a seed
    pub fn generate_seeded(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut dataset = Self::generate(&mut rng);
        dataset.seed = Some(seed);
        debug!(seed, "Generated synthetic dataset");
        dataset
    }

    /// Generate from the given seed, or from a fresh random seed when absent
    pub fn generate_with(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::generate_seeded(seed),
            None => {
                let seed: u64 = rand::random();
                info!(seed, "No seed configured, drew a fresh one");
                Self::generate_seeded(seed)
            }
        }
    }

    /// Seed the dataset was generated from, if it was generated
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Series for a category and city
    pub fn series(&self, category: CostCategory, city: City) -> &MonthlySeries {
        match category {
            CostCategory::Rent => self.rent.get(city),
            CostCategory::Groceries => self.groceries.get(city),
            CostCategory::Utilities => self.utilities.get(city),
        }
    }

    /// Rent series for a city
    pub fn rent(&self, city: City) -> &MonthlySeries {
        self.rent.get(city)
    }

    /// Grocery series for a city
    pub fn groceries(&self, city: City) -> &MonthlySeries {
        self.groceries.get(city)
    }

    /// Utilities series for a city
    pub fn utilities(&self, city: City) -> &MonthlySeries {
        self.utilities.get(city)
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
