use chrono::NaiveDate;
use meat_order::animal_actor::AnimalError;
use meat_order::clients::{
    ActorClient, AnimalClient, CuttingStyleClient, DeliveryDateClient, OrderClient,
};
use meat_order::delivery_date_actor::DeliveryDateError;
use meat_order::framework::{mock::MockClient, FrameworkError};
use meat_order::model::{
    Animal, AnimalId, ContactDetails, CuttingStyle, CuttingStyleId, DeliveryDate,
    DeliveryDateId, OrderCreate, OrderStatus,
};
use meat_order::order_actor::{OrderContext, OrderError, TransitionPolicy};
use rust_decimal_macros::dec;
use tokio::task::JoinHandle;

fn dec_20() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 12, 20).unwrap()
}

fn delivery(booked: u32) -> DeliveryDate {
    DeliveryDate {
        booked,
        ..DeliveryDate::new(DeliveryDateId(1), dec_20(), 3)
    }
}

fn lamb() -> Animal {
    Animal::new(
        AnimalId(1),
        "Lamb",
        "",
        vec!["Small".into(), "Medium".into(), "Large".into()],
    )
}

fn traditional() -> CuttingStyle {
    CuttingStyle::new(CuttingStyleId(1), "Traditional")
}

fn submission() -> OrderCreate {
    OrderCreate {
        customer: ContactDetails {
            name: "Alice".to_string(),
            phone: "5551234567".to_string(),
            address: "12 Market Street".to_string(),
        },
        animal_id: AnimalId(1),
        animal_name: "Lamb".to_string(),
        // Any case: the actor stores the animal's own label.
        size: "medium".to_string(),
        cutting_style_id: CuttingStyleId(1),
        cutting_style: "Traditional".to_string(),
        divided: true,
        delivery_date_id: DeliveryDateId(1),
        // Stale: the actor takes the date from the booking.
        delivery_date: NaiveDate::from_ymd_opt(2023, 12, 1).unwrap(),
        price_option_id: None,
        total: dec!(480.00),
        placed_on: NaiveDate::from_ymd_opt(2023, 12, 10).unwrap(),
        placed_by: None,
    }
}

/// The order actor's three dependencies, all mocked.
struct Deps {
    animals: MockClient<Animal>,
    styles: MockClient<CuttingStyle>,
    dates: MockClient<DeliveryDate>,
}

impl Deps {
    fn new() -> Self {
        Self {
            animals: MockClient::new(),
            styles: MockClient::new(),
            dates: MockClient::new(),
        }
    }

    /// Expects the catalog lookups `on_create` makes before booking.
    fn expect_catalog_checks(&mut self, animal: Animal, style: CuttingStyle) {
        self.animals.expect_get(animal.id).return_ok(Some(animal));
        self.styles.expect_get(style.id).return_ok(Some(style));
    }

    fn spawn(&self, policy: TransitionPolicy) -> (OrderClient, JoinHandle<()>) {
        let (order_actor, order_client) = meat_order::order_actor::new(8);
        let handle = tokio::spawn(order_actor.run(OrderContext::new(
            AnimalClient::new(self.animals.client()),
            CuttingStyleClient::new(self.styles.client()),
            DeliveryDateClient::new(self.dates.client()),
            policy,
        )));
        (order_client, handle)
    }

    fn verify(&self) {
        self.animals.verify();
        self.styles.verify();
        self.dates.verify();
    }
}

/// Integration test: Real Order actor with mocked catalog and schedule.
/// This tests the Order actor's checks and booking logic (on_create and
/// status changes) while isolating it from the other actors.
///
/// Pattern 2: Actor + Mocks
/// - Real Order actor (tests actor logic in its hooks)
/// - Mocked Animal, CuttingStyle and DeliveryDate clients
#[tokio::test]
async fn test_order_actor_with_mocked_schedule() {
    let mut deps = Deps::new();
    deps.expect_catalog_checks(lamb(), traditional());

    // Order::on_create calls book_slot(); cancelling calls release_slot().
    // Both go through perform_action().
    deps.dates
        .expect_action(DeliveryDateId(1))
        .return_ok(delivery(1));
    deps.dates
        .expect_action(DeliveryDateId(1))
        .return_ok(delivery(0));

    let (order_client, actor_handle) = deps.spawn(TransitionPolicy::Unrestricted);

    let order_id = order_client
        .create_order(submission())
        .await
        .expect("Order creation failed");

    let order = order_client.get(order_id).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.delivery_date, dec_20());
    assert_eq!(order.size, "Medium");

    // Confirming touches no slots.
    let order = order_client
        .set_status(order_id, OrderStatus::Confirmed)
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Confirmed);

    let order = order_client
        .set_status(order_id, OrderStatus::Cancelled)
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Cancelled);

    deps.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_failed_booking_stores_nothing() {
    let mut deps = Deps::new();
    deps.expect_catalog_checks(lamb(), traditional());
    deps.dates
        .expect_action(DeliveryDateId(1))
        .return_err(FrameworkError::EntityError(Box::new(
            DeliveryDateError::FullyBooked(dec_20()),
        )));

    let (order_client, actor_handle) = deps.spawn(TransitionPolicy::Unrestricted);

    let result = order_client.create_order(submission()).await;
    assert_eq!(
        result,
        Err(OrderError::DeliveryDate(DeliveryDateError::FullyBooked(
            dec_20()
        )))
    );
    assert!(order_client.list().await.unwrap().is_empty());

    deps.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_blank_contact_never_books() {
    // No expectations: any lookup or booking would show up in verify().
    let deps = Deps::new();
    let (order_client, actor_handle) = deps.spawn(TransitionPolicy::Unrestricted);

    let mut order = submission();
    order.customer.address = "  ".to_string();
    let result = order_client.create_order(order).await;
    assert_eq!(result, Err(OrderError::MissingField("delivery address")));

    deps.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

/// Orders created without going through a draft still meet the catalog.
#[tokio::test]
async fn test_catalog_checks_run_before_booking() {
    let mut deps = Deps::new();

    // Unknown animal.
    deps.animals
        .expect_get(AnimalId(1))
        .return_ok(None);
    // Switched-off animal.
    let mut retired = lamb();
    retired.active = false;
    deps.animals.expect_get(AnimalId(1)).return_ok(Some(retired));
    // Size the animal does not come in.
    deps.animals.expect_get(AnimalId(1)).return_ok(Some(lamb()));
    // Switched-off cutting style.
    let mut modern = traditional();
    modern.active = false;
    deps.expect_catalog_checks(lamb(), modern);

    let (order_client, actor_handle) = deps.spawn(TransitionPolicy::Unrestricted);

    assert_eq!(
        order_client.create_order(submission()).await,
        Err(OrderError::Animal(AnimalError::NotFound("animal_1".into())))
    );
    assert_eq!(
        order_client.create_order(submission()).await,
        Err(OrderError::Unavailable("Lamb".into()))
    );
    let mut wrong_size = submission();
    wrong_size.size = "XL".to_string();
    assert_eq!(
        order_client.create_order(wrong_size).await,
        Err(OrderError::UnknownSize {
            animal: "Lamb".into(),
            size: "XL".into(),
        })
    );
    assert_eq!(
        order_client.create_order(submission()).await,
        Err(OrderError::Unavailable("Traditional".into()))
    );
    assert!(order_client.list().await.unwrap().is_empty());

    // No slot was ever requested.
    deps.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_cancel_tolerates_removed_date() {
    let mut deps = Deps::new();
    deps.expect_catalog_checks(lamb(), traditional());
    deps.dates
        .expect_action(DeliveryDateId(1))
        .return_ok(delivery(1));
    deps.dates
        .expect_action(DeliveryDateId(1))
        .return_err(FrameworkError::NotFound("delivery_date_1".to_string()));

    let (order_client, actor_handle) = deps.spawn(TransitionPolicy::Directed);

    let order_id = order_client.create_order(submission()).await.unwrap();
    let order = order_client
        .set_status(order_id, OrderStatus::Cancelled)
        .await
        .expect("Cancelling should succeed without the date");
    assert_eq!(order.status, OrderStatus::Cancelled);

    // Directed: no way back from Cancelled, and no booking attempted.
    let reopen = order_client
        .set_status(order_id, OrderStatus::Pending)
        .await;
    assert_eq!(
        reopen,
        Err(OrderError::TransitionNotAllowed {
            from: OrderStatus::Cancelled,
            to: OrderStatus::Pending,
        })
    );

    deps.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}
