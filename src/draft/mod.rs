//! # Order Draft
//!
//! The customer's selections on the way to an order, held as one owned value.
//!
//! ```text
//! Started → AnimalSelected → SizeSelected → [PriceSelected]
//!         → StyleAndLogisticsSelected → ContactCaptured → submit()
//! ```
//!
//! Every step is checked against a [`Catalog`]; a refused step leaves the draft
//! as it was. Changing the animal drops the size and price option, and
//! changing the size drops the price option. Cutting style, delivery date and
//! contact details do not depend on the animal and survive such changes.
//!
//! [`OrderDraft::submit`] consumes the draft and yields the [`OrderCreate`]
//! to send to the order actor. Abandoning a draft is dropping it.

pub mod error;

pub use error::*;

use crate::catalog::Catalog;
use crate::model::{
    Animal, AnimalId, ContactDetails, CuttingStyle, CuttingStyleId, DeliveryDate, DeliveryDateId,
    OrderCreate, PriceOption, PriceOptionId,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;
use tracing::debug;

/// Minimum phone digits when configuration does not say otherwise.
pub const DEFAULT_MIN_PHONE_DIGITS: usize = 10;

/// How far a draft has got. Later steps compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DraftStep {
    Started,
    AnimalSelected,
    SizeSelected,
    PriceSelected,
    StyleAndLogisticsSelected,
    ContactCaptured,
}

impl fmt::Display for DraftStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DraftStep::Started => "start",
            DraftStep::AnimalSelected => "animal",
            DraftStep::SizeSelected => "size",
            DraftStep::PriceSelected => "price",
            DraftStep::StyleAndLogisticsSelected => "cutting style and delivery",
            DraftStep::ContactCaptured => "contact details",
        })
    }
}

/// Cutting style, divided flag and delivery date, chosen together on one screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Logistics {
    pub cutting_style: CuttingStyle,
    pub divided: bool,
    pub delivery_date: DeliveryDate,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDraft {
    animal: Option<Animal>,
    size: Option<String>,
    price_option: Option<PriceOption>,
    logistics: Option<Logistics>,
    contact: Option<ContactDetails>,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> DraftStep {
        if self.animal.is_none() {
            return DraftStep::Started;
        }
        if self.size.is_none() {
            return DraftStep::AnimalSelected;
        }
        match (&self.logistics, &self.contact) {
            (None, _) if self.price_option.is_some() => DraftStep::PriceSelected,
            (None, _) => DraftStep::SizeSelected,
            (Some(_), None) => DraftStep::StyleAndLogisticsSelected,
            (Some(_), Some(_)) => DraftStep::ContactCaptured,
        }
    }

    pub fn animal(&self) -> Option<&Animal> {
        self.animal.as_ref()
    }

    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    pub fn price_option(&self) -> Option<&PriceOption> {
        self.price_option.as_ref()
    }

    pub fn logistics(&self) -> Option<&Logistics> {
        self.logistics.as_ref()
    }

    pub fn contact(&self) -> Option<&ContactDetails> {
        self.contact.as_ref()
    }

    /// Price of the chosen option, zero without one.
    pub fn total(&self) -> Decimal {
        self.price_option
            .as_ref()
            .map_or(Decimal::ZERO, |option| option.price)
    }

    fn require(&self, step: DraftStep) -> Result<(), DraftError> {
        if self.step() < step {
            return Err(DraftError::OutOfOrder { required: step });
        }
        Ok(())
    }

    /// Looks the draft's animal up again so a switched-off animal is noticed.
    fn current_animal<'c>(&self, catalog: &'c Catalog) -> Result<&'c Animal, DraftError> {
        let id = self.animal.as_ref().ok_or(DraftError::MissingAnimal)?.id;
        let animal = catalog.animal(id)?;
        if !animal.active {
            return Err(DraftError::Unavailable(animal.name.clone()));
        }
        Ok(animal)
    }

    pub fn select_animal(
        &mut self,
        catalog: &Catalog,
        id: AnimalId,
    ) -> Result<DraftStep, DraftError> {
        let animal = catalog.animal(id)?;
        if !animal.active {
            return Err(DraftError::Unavailable(animal.name.clone()));
        }
        if self.animal.as_ref().map(|a| a.id) != Some(id) {
            self.size = None;
            self.price_option = None;
        }
        self.animal = Some(animal.clone());
        debug!(animal = %animal.name, "Animal selected");
        Ok(self.step())
    }

    /// Selects a size of the current animal, matched ignoring case and stored
    /// with the animal's own spelling.
    pub fn select_size(&mut self, catalog: &Catalog, size: &str) -> Result<DraftStep, DraftError> {
        self.require(DraftStep::AnimalSelected)?;
        let animal = self.current_animal(catalog)?;
        if size.trim().is_empty() {
            return Err(DraftError::MissingSize);
        }
        let label = animal
            .size_label(size)
            .ok_or_else(|| DraftError::UnknownSize {
                animal: animal.name.clone(),
                size: size.trim().to_string(),
            })?;
        if self.size.as_deref() != Some(label) {
            self.price_option = None;
        }
        self.size = Some(label.to_string());
        debug!(size = label, "Size selected");
        Ok(self.step())
    }

    pub fn select_price_option(
        &mut self,
        catalog: &Catalog,
        id: PriceOptionId,
    ) -> Result<DraftStep, DraftError> {
        self.require(DraftStep::SizeSelected)?;
        let animal = self.current_animal(catalog)?;
        let size = self.size.as_deref().ok_or(DraftError::MissingSize)?;
        let option = catalog.price_option(id)?;
        if !option.active {
            return Err(DraftError::Unavailable(option.name.clone()));
        }
        if !option.applies_to(animal.id, size) {
            return Err(DraftError::PriceMismatch);
        }
        self.price_option = Some(option.clone());
        debug!(option = %option.name, price = %option.price, "Price option selected");
        Ok(self.step())
    }

    /// Goes back to ordering without a price package.
    pub fn clear_price_option(&mut self) -> DraftStep {
        self.price_option = None;
        self.step()
    }

    pub fn select_style_and_logistics(
        &mut self,
        catalog: &Catalog,
        cutting_style: CuttingStyleId,
        divided: bool,
        delivery_date: DeliveryDateId,
    ) -> Result<DraftStep, DraftError> {
        self.require(DraftStep::SizeSelected)?;
        let style = catalog.cutting_style(cutting_style)?;
        if !style.active {
            return Err(DraftError::Unavailable(style.name.clone()));
        }
        let date = catalog.delivery_date(delivery_date)?;
        if !date.is_bookable() {
            return Err(DraftError::Unavailable(format!("Delivery on {}", date.date)));
        }
        self.logistics = Some(Logistics {
            cutting_style: style.clone(),
            divided,
            delivery_date: date.clone(),
        });
        debug!(style = %style.name, divided, date = %date.date, "Logistics selected");
        Ok(self.step())
    }

    /// Checks every contact field and reports all failures together.
    pub fn capture_contact(
        &mut self,
        contact: ContactDetails,
        min_phone_digits: usize,
    ) -> Result<DraftStep, DraftError> {
        self.require(DraftStep::StyleAndLogisticsSelected)?;
        let contact = validate_contact(contact, min_phone_digits).map_err(DraftError::InvalidContact)?;
        self.contact = Some(contact);
        Ok(self.step())
    }

    /// Consumes the draft and produces the order to place.
    ///
    /// `placed_by` is left empty; the caller fills it in for signed-in customers.
    pub fn submit(self, placed_on: NaiveDate) -> Result<OrderCreate, DraftRejected> {
        match self {
            OrderDraft {
                animal: Some(animal),
                size: Some(size),
                price_option,
                logistics: Some(logistics),
                contact: Some(customer),
            } => Ok(OrderCreate {
                customer,
                animal_id: animal.id,
                animal_name: animal.name,
                size,
                cutting_style_id: logistics.cutting_style.id,
                cutting_style: logistics.cutting_style.name,
                divided: logistics.divided,
                delivery_date_id: logistics.delivery_date.id,
                delivery_date: logistics.delivery_date.date,
                total: price_option.as_ref().map_or(Decimal::ZERO, |o| o.price),
                price_option_id: price_option.map(|o| o.id),
                placed_on,
                placed_by: None,
            }),
            draft => Err(DraftRejected {
                draft: Box::new(draft),
                error: DraftError::OutOfOrder {
                    required: DraftStep::ContactCaptured,
                },
            }),
        }
    }
}

/// Trims the contact fields and checks them.
///
/// The phone number counts only its digits, so "(555) 123-4567" has ten.
pub fn validate_contact(
    contact: ContactDetails,
    min_phone_digits: usize,
) -> Result<ContactDetails, Vec<FieldError>> {
    let contact = ContactDetails {
        name: contact.name.trim().to_string(),
        phone: contact.phone.trim().to_string(),
        address: contact.address.trim().to_string(),
    };

    let mut errors = Vec::new();
    if contact.name.is_empty() {
        errors.push(FieldError {
            field: ContactField::Name,
            message: "Name is required",
        });
    }
    if contact.phone.is_empty() {
        errors.push(FieldError {
            field: ContactField::Phone,
            message: "Phone number is required",
        });
    } else if contact.phone.chars().filter(char::is_ascii_digit).count() < min_phone_digits {
        errors.push(FieldError {
            field: ContactField::Phone,
            message: "Please enter a valid phone number",
        });
    }
    if contact.address.is_empty() {
        errors.push(FieldError {
            field: ContactField::Address,
            message: "Address is required",
        });
    }

    if errors.is_empty() {
        Ok(contact)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;
    use rust_decimal_macros::dec;

    fn catalog() -> Catalog {
        let sizes = |labels: &[&str]| -> Vec<String> { labels.iter().map(|s| s.to_string()).collect() };
        let mut modern = CuttingStyle::new(CuttingStyleId(2), "Modern");
        modern.active = false;
        let mut full = DeliveryDate::new(
            DeliveryDateId(2),
            NaiveDate::from_ymd_opt(2023, 12, 20).unwrap(),
            3,
        );
        full.booked = 3;
        Catalog::new(
            vec![
                Animal::new(AnimalId(1), "Lamb", "", sizes(&["Small", "Medium"])),
                Animal::new(AnimalId(2), "Goat", "", sizes(&["Large"])),
            ],
            vec![CuttingStyle::new(CuttingStyleId(1), "Traditional"), modern],
            vec![
                PriceOption {
                    id: PriceOptionId(1),
                    animal_id: AnimalId(1),
                    animal_size: "Medium".into(),
                    name: "Standard".into(),
                    price: dec!(480),
                    description: String::new(),
                    active: true,
                },
                PriceOption {
                    id: PriceOptionId(2),
                    animal_id: AnimalId(2),
                    animal_size: "Large".into(),
                    name: "Whole goat".into(),
                    price: dec!(550),
                    description: String::new(),
                    active: true,
                },
            ],
            vec![
                DeliveryDate::new(
                    DeliveryDateId(1),
                    NaiveDate::from_ymd_opt(2023, 12, 15).unwrap(),
                    5,
                ),
                full,
            ],
        )
    }

    fn contact(name: &str, phone: &str, address: &str) -> ContactDetails {
        ContactDetails {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }

    fn ready_for_contact(catalog: &Catalog) -> OrderDraft {
        let mut draft = OrderDraft::new();
        draft.select_animal(catalog, AnimalId(1)).unwrap();
        draft.select_size(catalog, "medium").unwrap();
        draft.select_price_option(catalog, PriceOptionId(1)).unwrap();
        draft
            .select_style_and_logistics(catalog, CuttingStyleId(1), true, DeliveryDateId(1))
            .unwrap();
        draft
    }

    #[test]
    fn walks_every_step_in_order() {
        let catalog = catalog();
        let mut draft = OrderDraft::new();
        assert_eq!(draft.step(), DraftStep::Started);
        assert_eq!(draft.select_animal(&catalog, AnimalId(1)).unwrap(), DraftStep::AnimalSelected);
        assert_eq!(draft.select_size(&catalog, "MEDIUM").unwrap(), DraftStep::SizeSelected);
        assert_eq!(draft.size(), Some("Medium"));
        assert_eq!(
            draft.select_price_option(&catalog, PriceOptionId(1)).unwrap(),
            DraftStep::PriceSelected
        );
        assert_eq!(
            draft
                .select_style_and_logistics(&catalog, CuttingStyleId(1), false, DeliveryDateId(1))
                .unwrap(),
            DraftStep::StyleAndLogisticsSelected
        );
        assert_eq!(
            draft
                .capture_contact(contact("Alice", "(555) 123-4567", "1 Main St"), 10)
                .unwrap(),
            DraftStep::ContactCaptured
        );

        let order = draft.submit(NaiveDate::from_ymd_opt(2023, 12, 10).unwrap()).unwrap();
        assert_eq!(order.animal_name, "Lamb");
        assert_eq!(order.size, "Medium");
        assert_eq!(order.total, dec!(480));
        assert_eq!(order.price_option_id, Some(PriceOptionId(1)));
        assert_eq!(order.cutting_style, "Traditional");
    }

    #[test]
    fn price_step_is_optional() {
        let catalog = catalog();
        let mut draft = OrderDraft::new();
        draft.select_animal(&catalog, AnimalId(1)).unwrap();
        draft.select_size(&catalog, "Small").unwrap();
        draft
            .select_style_and_logistics(&catalog, CuttingStyleId(1), false, DeliveryDateId(1))
            .unwrap();
        draft
            .capture_contact(contact("Bob", "5551234567", "2 Side St"), 10)
            .unwrap();
        let order = draft.submit(NaiveDate::from_ymd_opt(2023, 12, 10).unwrap()).unwrap();
        assert_eq!(order.total, Decimal::ZERO);
        assert_eq!(order.price_option_id, None);
    }

    #[test]
    fn steps_cannot_be_skipped() {
        let catalog = catalog();
        let mut draft = OrderDraft::new();
        assert_eq!(
            draft.select_size(&catalog, "Small"),
            Err(DraftError::OutOfOrder {
                required: DraftStep::AnimalSelected
            })
        );
        assert_eq!(
            draft.capture_contact(contact("A", "5551234567", "B"), 10),
            Err(DraftError::OutOfOrder {
                required: DraftStep::StyleAndLogisticsSelected
            })
        );
        assert_eq!(draft, OrderDraft::new());
    }

    #[test]
    fn changing_animal_resets_size_and_price() {
        let catalog = catalog();
        let mut draft = ready_for_contact(&catalog);
        assert_eq!(draft.select_animal(&catalog, AnimalId(2)).unwrap(), DraftStep::AnimalSelected);
        assert_eq!(draft.size(), None);
        assert_eq!(draft.price_option(), None);
        assert!(draft.logistics().is_some());
    }

    #[test]
    fn reselecting_same_animal_keeps_choices() {
        let catalog = catalog();
        let mut draft = ready_for_contact(&catalog);
        draft.select_animal(&catalog, AnimalId(1)).unwrap();
        assert_eq!(draft.size(), Some("Medium"));
        assert!(draft.price_option().is_some());
    }

    #[test]
    fn changing_size_resets_price() {
        let catalog = catalog();
        let mut draft = ready_for_contact(&catalog);
        draft.select_size(&catalog, "Small").unwrap();
        assert_eq!(draft.price_option(), None);
        assert_eq!(draft.step(), DraftStep::StyleAndLogisticsSelected);
    }

    #[test]
    fn catalog_guards_leave_draft_unchanged() {
        let catalog = catalog();
        let mut draft = ready_for_contact(&catalog);
        let before = draft.clone();

        assert!(matches!(
            draft.select_size(&catalog, "Huge"),
            Err(DraftError::UnknownSize { .. })
        ));
        assert_eq!(
            draft.select_price_option(&catalog, PriceOptionId(2)),
            Err(DraftError::PriceMismatch)
        );
        assert_eq!(
            draft.select_style_and_logistics(&catalog, CuttingStyleId(2), false, DeliveryDateId(1)),
            Err(DraftError::Unavailable("Modern".into()))
        );
        assert!(matches!(
            draft.select_style_and_logistics(&catalog, CuttingStyleId(1), false, DeliveryDateId(2)),
            Err(DraftError::Unavailable(_))
        ));
        assert_eq!(
            draft.select_animal(&catalog, AnimalId(9)),
            Err(DraftError::Catalog(CatalogError::AnimalNotFound(AnimalId(9))))
        );
        assert_eq!(draft, before);
    }

    #[test]
    fn contact_errors_are_reported_together() {
        let catalog = catalog();
        let mut draft = ready_for_contact(&catalog);
        let err = draft.capture_contact(contact(" ", "555-1234", ""), 10).unwrap_err();
        let fields: Vec<ContactField> = err.field_errors().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![ContactField::Name, ContactField::Phone, ContactField::Address]
        );
        assert_eq!(
            err.to_string(),
            "Name is required; Please enter a valid phone number; Address is required"
        );
        assert_eq!(draft.step(), DraftStep::StyleAndLogisticsSelected);
    }

    #[test]
    fn empty_name_blocks_submission() {
        let catalog = catalog();
        let mut draft = ready_for_contact(&catalog);
        assert!(draft.capture_contact(contact("", "5551234567", "1 Main St"), 10).is_err());

        let rejected = draft.submit(NaiveDate::from_ymd_opt(2023, 12, 10).unwrap()).unwrap_err();
        assert_eq!(
            rejected.error,
            DraftError::OutOfOrder {
                required: DraftStep::ContactCaptured
            }
        );
        assert_eq!(rejected.draft.step(), DraftStep::StyleAndLogisticsSelected);
    }

    #[test]
    fn phone_digit_minimum_is_configurable() {
        let short = contact("Alice", "123-4567", "1 Main St");
        assert!(validate_contact(short.clone(), DEFAULT_MIN_PHONE_DIGITS).is_err());
        assert_eq!(validate_contact(short, 7).unwrap().phone, "123-4567");
    }
}
