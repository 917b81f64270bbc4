//! # Mock Framework
//!
//! Test a client, or an actor that depends on other actors, without spawning
//! those other actors.
//!
//! [`MockClient`] hands out a real [`ResourceClient`] whose requests are
//! answered from a queue of expectations, in order:
//!
//! ```rust,ignore
//! let mut animals = MockClient::<Animal>::new();
//! let mut styles = MockClient::<CuttingStyle>::new();
//! let mut dates = MockClient::<DeliveryDate>::new();
//! animals.expect_get(AnimalId(1)).return_ok(Some(lamb));
//! styles.expect_get(CuttingStyleId(1)).return_ok(Some(traditional));
//! dates.expect_action(DeliveryDateId(1)).return_ok(booked_date);
//!
//! let (order_actor, orders) = order_actor::new(32);
//! tokio::spawn(order_actor.run(OrderContext::new(
//!     AnimalClient::new(animals.client()),
//!     CuttingStyleClient::new(styles.client()),
//!     DeliveryDateClient::new(dates.client()),
//!     TransitionPolicy::Unrestricted,
//! )));
//!
//! // ... exercise `orders` ...
//! dates.verify();
//! ```
//!
//! A request that arrives with no matching expectation (wrong kind, wrong id,
//! or nothing queued) is recorded and its responder is dropped, so the caller
//! sees [`FrameworkError::ActorDropped`]. [`MockClient::verify`] panics with
//! the recorded mismatches and with any expectation left unused.
//!
//! Use this to simulate failures that are awkward to produce with a real actor:
//!
//! ```rust,ignore
//! dates.expect_action(DeliveryDateId(1)).return_err(FrameworkError::ActorClosed);
//! ```

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// An expected request and the response to give it.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    mismatches: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let mismatches = Arc::new(Mutex::new(Vec::new()));
        let queue = expectations.clone();
        let failures = mismatches.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();
                answer(request, expectation, &failures);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            mismatches,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: T::Id) -> UpdateExpectationBuilder<T> {
        UpdateExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that every expectation was met and no unexpected request arrived.
    pub fn verify(&self) {
        let mismatches = self.mismatches.lock().unwrap();
        if !mismatches.is_empty() {
            panic!("Unexpected requests: {}", mismatches.join("; "));
        }
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Replies to `request` from `expectation`, recording a mismatch otherwise.
///
/// Mismatches are recorded while the responder is still alive, so a caller
/// that sees `ActorDropped` can rely on `verify` reporting it.
fn answer<T: ActorEntity>(
    request: ResourceRequest<T>,
    expectation: Option<Expectation<T>>,
    mismatches: &Mutex<Vec<String>>,
) {
    let record = |message: String| mismatches.lock().unwrap().push(message);
    match (request, expectation) {
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response })) => {
            if id == want {
                let _ = respond_to.send(response);
            } else {
                record(format!("get {id}, expected get {want}"));
            }
        }
        (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Update { id, respond_to, .. },
            Some(Expectation::Update { id: want, response }),
        ) => {
            if id == want {
                let _ = respond_to.send(response);
            } else {
                record(format!("update {id}, expected update {want}"));
            }
        }
        (
            ResourceRequest::Action { id, action, respond_to },
            Some(Expectation::Action { id: want, response }),
        ) => {
            if id == want {
                let _ = respond_to.send(response);
            } else {
                record(format!("action {action:?} on {id}, expected action on {want}"));
            }
        }
        (request, None) => record(format!("{} with nothing expected", describe(&request))),
        (request, Some(_)) => record(format!("{} out of order", describe(&request))),
    }
}

fn describe<T: ActorEntity>(request: &ResourceRequest<T>) -> String {
    match request {
        ResourceRequest::Create { params, .. } => format!("create {params:?}"),
        ResourceRequest::Get { id, .. } => format!("get {id}"),
        ResourceRequest::List { .. } => "list".to_string(),
        ResourceRequest::Update { id, .. } => format!("update {id}"),
        ResourceRequest::Delete { id, .. } => format!("delete {id}"),
        ResourceRequest::Action { id, action, .. } => format!("action {action:?} on {id}"),
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Ok(value),
        });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: ActorEntity> {
    expectations: Queue<T>,
}

impl<T: ActorEntity> ListExpectationBuilder<T> {
    pub fn return_ok(self, items: Vec<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List { response: Ok(items) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List { response: Err(error) });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: ActorEntity> {
    expectations: Queue<T>,
}

impl<T: ActorEntity> CreateExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response: Ok(id) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response: Err(error) });
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: ActorEntity> UpdateExpectationBuilder<T> {
    pub fn return_ok(self, value: T) {
        self.expectations.lock().unwrap().push_back(Expectation::Update {
            id: self.id,
            response: Ok(value),
        });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations.lock().unwrap().push_back(Expectation::Update {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        self.expectations.lock().unwrap().push_back(Expectation::Action {
            id: self.id,
            response: Ok(result),
        });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations.lock().unwrap().push_back(Expectation::Action {
            id: self.id,
            response: Err(error),
        });
    }
}
