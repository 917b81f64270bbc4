//! # Catalog
//!
//! A point-in-time view of the four catalog lists, loaded through the
//! repository clients, with the derived views the customer flow and the admin
//! tabs read from.
//!
//! The catalog is a plain value. Loading it again picks up admin changes;
//! nothing here writes back.

use crate::animal_actor::AnimalError;
use crate::clients::{
    ActorClient, AnimalClient, CuttingStyleClient, DeliveryDateClient, PriceOptionClient,
};
use crate::cutting_style_actor::CuttingStyleError;
use crate::date_range::DateRange;
use crate::delivery_date_actor::DeliveryDateError;
use crate::model::{
    Animal, AnimalId, CuttingStyle, CuttingStyleId, DeliveryDate, DeliveryDateId, PriceOption,
    PriceOptionId,
};
use crate::price_option_actor::PriceOptionError;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Animal not found: {0}")]
    AnimalNotFound(AnimalId),
    #[error("Cutting style not found: {0}")]
    CuttingStyleNotFound(CuttingStyleId),
    #[error("Price option not found: {0}")]
    PriceOptionNotFound(PriceOptionId),
    #[error("Delivery date not found: {0}")]
    DeliveryDateNotFound(DeliveryDateId),
    #[error(transparent)]
    Animal(#[from] AnimalError),
    #[error(transparent)]
    CuttingStyle(#[from] CuttingStyleError),
    #[error(transparent)]
    PriceOption(#[from] PriceOptionError),
    #[error(transparent)]
    DeliveryDate(#[from] DeliveryDateError),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    animals: Vec<Animal>,
    cutting_styles: Vec<CuttingStyle>,
    price_options: Vec<PriceOption>,
    delivery_dates: Vec<DeliveryDate>,
}

impl Catalog {
    pub fn new(
        animals: Vec<Animal>,
        cutting_styles: Vec<CuttingStyle>,
        price_options: Vec<PriceOption>,
        delivery_dates: Vec<DeliveryDate>,
    ) -> Self {
        Self {
            animals,
            cutting_styles,
            price_options,
            delivery_dates,
        }
    }

    /// Reads all four lists from their actors.
    #[instrument(skip_all)]
    pub async fn load(
        animals: &AnimalClient,
        cutting_styles: &CuttingStyleClient,
        price_options: &PriceOptionClient,
        delivery_dates: &DeliveryDateClient,
    ) -> Result<Self, CatalogError> {
        let catalog = Self::new(
            animals.list().await?,
            cutting_styles.list().await?,
            price_options.list().await?,
            delivery_dates.list().await?,
        );
        debug!(
            animals = catalog.animals.len(),
            cutting_styles = catalog.cutting_styles.len(),
            price_options = catalog.price_options.len(),
            delivery_dates = catalog.delivery_dates.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn cutting_styles(&self) -> &[CuttingStyle] {
        &self.cutting_styles
    }

    pub fn price_options(&self) -> &[PriceOption] {
        &self.price_options
    }

    pub fn delivery_dates(&self) -> &[DeliveryDate] {
        &self.delivery_dates
    }

    pub fn animal(&self, id: AnimalId) -> Result<&Animal, CatalogError> {
        self.animals
            .iter()
            .find(|animal| animal.id == id)
            .ok_or(CatalogError::AnimalNotFound(id))
    }

    pub fn cutting_style(&self, id: CuttingStyleId) -> Result<&CuttingStyle, CatalogError> {
        self.cutting_styles
            .iter()
            .find(|style| style.id == id)
            .ok_or(CatalogError::CuttingStyleNotFound(id))
    }

    pub fn price_option(&self, id: PriceOptionId) -> Result<&PriceOption, CatalogError> {
        self.price_options
            .iter()
            .find(|option| option.id == id)
            .ok_or(CatalogError::PriceOptionNotFound(id))
    }

    pub fn delivery_date(&self, id: DeliveryDateId) -> Result<&DeliveryDate, CatalogError> {
        self.delivery_dates
            .iter()
            .find(|date| date.id == id)
            .ok_or(CatalogError::DeliveryDateNotFound(id))
    }

    /// Animals offered to customers, in catalog order.
    pub fn list_active_animals(&self) -> Vec<&Animal> {
        self.animals.iter().filter(|animal| animal.active).collect()
    }

    /// Sizes the animal comes in. Empty when the animal is switched off.
    pub fn sizes_for(&self, id: AnimalId) -> Result<&[String], CatalogError> {
        let animal = self.animal(id)?;
        if !animal.active {
            return Ok(&[]);
        }
        Ok(&animal.sizes)
    }

    /// Active options for the animal in `size`, compared ignoring case.
    ///
    /// A size the animal does not come in matches nothing; an option left
    /// behind after its size was removed from the animal is not offered.
    pub fn price_options_for(
        &self,
        id: AnimalId,
        size: &str,
    ) -> Result<Vec<&PriceOption>, CatalogError> {
        let animal = self.animal(id)?;
        let Some(label) = animal.size_label(size) else {
            return Ok(Vec::new());
        };
        Ok(self
            .price_options
            .iter()
            .filter(|option| option.active && option.applies_to(id, label))
            .collect())
    }

    /// Admin price-options tab: exact animal and size filters, inactive options included.
    pub fn price_options_matching(
        &self,
        animal: Option<AnimalId>,
        size: Option<&str>,
    ) -> Vec<&PriceOption> {
        self.price_options
            .iter()
            .filter(|option| animal.is_none_or(|id| option.animal_id == id))
            .filter(|option| size.is_none_or(|size| option.animal_size == size))
            .collect()
    }

    pub fn active_cutting_styles(&self) -> Vec<&CuttingStyle> {
        self.cutting_styles.iter().filter(|style| style.active).collect()
    }

    /// Scheduled dates in `range`, active or not, in schedule order.
    pub fn delivery_dates_within(&self, range: DateRange) -> Vec<&DeliveryDate> {
        range.filter(&self.delivery_dates)
    }

    /// Dates a customer can still pick: active, with a free slot.
    pub fn bookable_dates(&self) -> Vec<&DeliveryDate> {
        self.delivery_dates
            .iter()
            .filter(|date| date.is_bookable())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn option(id: u32, animal: u32, size: &str, price: Decimal) -> PriceOption {
        PriceOption {
            id: PriceOptionId(id),
            animal_id: AnimalId(animal),
            animal_size: size.to_string(),
            name: format!("Option {id}"),
            price,
            description: String::new(),
            active: true,
        }
    }

    fn sizes(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    fn catalog() -> Catalog {
        let mut goat = Animal::new(AnimalId(3), "Goat", "", sizes(&["Small"]));
        goat.active = false;
        let mut retired = option(4, 1, "Large", dec!(600));
        retired.active = false;
        Catalog::new(
            vec![
                Animal::new(AnimalId(1), "Lamb", "", sizes(&["Small", "Medium", "Large"])),
                Animal::new(AnimalId(2), "Sheep", "", Vec::new()),
                goat,
            ],
            vec![CuttingStyle::new(CuttingStyleId(1), "Traditional")],
            vec![
                option(1, 1, "Small", dec!(320)),
                option(2, 1, "Medium", dec!(480)),
                option(3, 1, "Large", dec!(550)),
                retired,
            ],
            [15, 20, 25]
                .into_iter()
                .map(|d| {
                    DeliveryDate::new(
                        DeliveryDateId(d),
                        NaiveDate::from_ymd_opt(2023, 12, d).unwrap(),
                        5,
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn medium_lamb_has_exactly_one_option() {
        let catalog = catalog();
        let options = catalog.price_options_for(AnimalId(1), "medium").unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].price, dec!(480));
    }

    #[test]
    fn animal_without_sizes_has_no_options() {
        let catalog = catalog();
        assert!(catalog.price_options_for(AnimalId(2), "Small").unwrap().is_empty());
        assert!(catalog.price_options_for(AnimalId(1), "XL").unwrap().is_empty());
    }

    #[test]
    fn inactive_options_are_hidden_from_customers_only() {
        let catalog = catalog();
        let customer = catalog.price_options_for(AnimalId(1), "Large").unwrap();
        assert_eq!(customer.len(), 1);
        let admin = catalog.price_options_matching(Some(AnimalId(1)), Some("Large"));
        assert_eq!(admin.len(), 2);
        assert_eq!(catalog.price_options_matching(None, None).len(), 4);
        assert!(catalog.price_options_matching(None, Some("large")).is_empty());
    }

    #[test]
    fn sizes_for_distinguishes_unknown_from_inactive() {
        let catalog = catalog();
        assert_eq!(catalog.sizes_for(AnimalId(1)).unwrap().len(), 3);
        assert!(catalog.sizes_for(AnimalId(3)).unwrap().is_empty());
        assert_eq!(
            catalog.sizes_for(AnimalId(9)),
            Err(CatalogError::AnimalNotFound(AnimalId(9)))
        );
    }

    #[test]
    fn active_animals_keep_catalog_order() {
        let binding = catalog();
        let names: Vec<&str> = binding
            .list_active_animals()
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, vec!["Lamb", "Sheep"]);
    }

    #[test]
    fn schedule_is_filtered_by_calendar_day() {
        let catalog = catalog();
        let range = DateRange::from_strs(Some("2023-12-16"), Some("2023-12-24")).unwrap();
        let dates = catalog.delivery_dates_within(range);
        assert_eq!(dates.len(), 1);
        assert_eq!(dates[0].id, DeliveryDateId(20));
    }
}
