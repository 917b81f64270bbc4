use crate::animal_actor::{self, AnimalError};
use crate::auth::Session;
use crate::catalog::{Catalog, CatalogError};
use crate::clients::{
    AnimalClient, CuttingStyleClient, DeliveryDateClient, OrderClient, PriceOptionClient,
    Repository,
};
use crate::config::{SeedCatalog, ShopConfig};
use crate::cutting_style_actor::{self, CuttingStyleError};
use crate::delivery_date_actor::{self, DeliveryDateError};
use crate::draft::{DraftRejected, OrderDraft};
use crate::model::{Animal, OrderId, PriceOptionParams};
use crate::order_actor::{self, OrderContext, OrderError};
use crate::price_option_actor::{self, PriceOptionError};
use chrono::NaiveDate;
use thiserror::Error;
use tracing::{error, info, instrument};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Animal(#[from] AnimalError),
    #[error(transparent)]
    CuttingStyle(#[from] CuttingStyleError),
    #[error(transparent)]
    PriceOption(#[from] PriceOptionError),
    #[error(transparent)]
    DeliveryDate(#[from] DeliveryDateError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// The draft was not ready; it is handed back inside the error.
    #[error(transparent)]
    Draft(#[from] DraftRejected),
    #[error("Seed price option refers to unknown animal {0}")]
    UnknownSeedAnimal(String),
    #[error("Actor task failed: {0}")]
    ActorTask(String),
}

/// The running shop: every resource actor plus the clients to reach them.
///
/// # Example
///
/// ```ignore
/// let system = ShopSystem::start(&ShopConfig::demo()?).await?;
///
/// let catalog = system.catalog().await?;
/// let mut draft = OrderDraft::new();
/// draft.select_animal(&catalog, lamb_id)?;
/// // ...
/// let order_id = system.place_order(draft, today, None).await?;
///
/// system.shutdown().await?;
/// ```
pub struct ShopSystem {
    pub animal_client: AnimalClient,
    pub cutting_style_client: CuttingStyleClient,
    pub price_option_client: PriceOptionClient,
    pub delivery_date_client: DeliveryDateClient,
    pub order_client: OrderClient,

    min_phone_digits: usize,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ShopSystem {
    /// Spawns every actor with its dependencies injected. The catalog starts empty.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: &ShopConfig) -> Self {
        let buffer = config.buffer_size;

        // 1. Create actors (no dependencies)
        let (animal_actor, animal_client) = animal_actor::new(buffer);
        let (style_actor, cutting_style_client) = cutting_style_actor::new(buffer);
        let (price_actor, price_option_client) = price_option_actor::new(buffer);
        let (date_actor, delivery_date_client) = delivery_date_actor::new(buffer);
        let (order_actor, order_client) = order_actor::new(buffer);

        // 2. Start actors with injected context
        let handles = vec![
            tokio::spawn(animal_actor.run(())),
            tokio::spawn(style_actor.run(())),
            tokio::spawn(date_actor.run(())),
            tokio::spawn(price_actor.run(animal_client.clone())),
            tokio::spawn(order_actor.run(OrderContext::new(
                animal_client.clone(),
                cutting_style_client.clone(),
                delivery_date_client.clone(),
                config.transition_policy,
            ))),
        ];
        info!(policy = ?config.transition_policy, buffer, "Shop started");

        Self {
            animal_client,
            cutting_style_client,
            price_option_client,
            delivery_date_client,
            order_client,
            min_phone_digits: config.min_phone_digits,
            handles,
        }
    }

    /// [`ShopSystem::new`] followed by loading the configured seed, if any.
    pub async fn start(config: &ShopConfig) -> Result<Self, SystemError> {
        let system = Self::new(config);
        if let Some(seed) = &config.seed {
            system.seed(seed).await?;
        }
        Ok(system)
    }

    /// Adds the seed catalog through the repository clients, so seeded records
    /// pass the same checks as admin input.
    #[instrument(skip_all)]
    pub async fn seed(&self, seed: &SeedCatalog) -> Result<(), SystemError> {
        let mut animals: Vec<Animal> = Vec::with_capacity(seed.animals.len());
        for params in &seed.animals {
            animals.push(self.animal_client.upsert(None, params.clone()).await?);
        }
        for params in &seed.cutting_styles {
            self.cutting_style_client.upsert(None, params.clone()).await?;
        }
        for params in &seed.delivery_dates {
            self.delivery_date_client.upsert(None, params.clone()).await?;
        }
        for option in &seed.price_options {
            let animal = animals
                .iter()
                .find(|animal| animal.name.eq_ignore_ascii_case(option.animal.trim()))
                .ok_or_else(|| SystemError::UnknownSeedAnimal(option.animal.clone()))?;
            let params = PriceOptionParams {
                animal_id: animal.id,
                animal_size: option.size.clone(),
                name: option.name.clone(),
                price: option.price,
                description: option.description.clone(),
            };
            self.price_option_client.upsert(None, params).await?;
        }
        info!(
            animals = seed.animals.len(),
            cutting_styles = seed.cutting_styles.len(),
            delivery_dates = seed.delivery_dates.len(),
            price_options = seed.price_options.len(),
            "Catalog seeded"
        );
        Ok(())
    }

    /// A fresh snapshot of the catalog.
    pub async fn catalog(&self) -> Result<Catalog, SystemError> {
        Ok(Catalog::load(
            &self.animal_client,
            &self.cutting_style_client,
            &self.price_option_client,
            &self.delivery_date_client,
        )
        .await?)
    }

    /// Minimum phone digits for [`OrderDraft::capture_contact`].
    pub fn min_phone_digits(&self) -> usize {
        self.min_phone_digits
    }

    /// Submits the draft and places the order, recording the signed-in account if any.
    ///
    /// An incomplete draft never reaches the order actor.
    #[instrument(skip(self, draft, session))]
    pub async fn place_order(
        &self,
        draft: OrderDraft,
        placed_on: NaiveDate,
        session: Option<&Session>,
    ) -> Result<OrderId, SystemError> {
        let mut order = draft.submit(placed_on)?;
        order.placed_by = session.map(|s| s.user_id.clone());
        Ok(self.order_client.create_order(order).await?)
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Drops all clients, which closes their channels, then waits for every
    /// actor task. Fails if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.price_option_client);
        drop(self.animal_client);
        drop(self.cutting_style_client);
        drop(self.delivery_date_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::ActorTask(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
