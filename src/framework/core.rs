//! # Core Actor Framework
//!
//! This module defines the generic building blocks for the actor system.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait that all resource types must implement.
//! - [`ResourceActor`]: The generic actor that owns a collection of entities.
//! - [`ResourceClient`]: The generic client for communicating with actors.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, NotFound).

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, DTOs, and Actions)
// =============================================================================

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Architecture Note
/// By defining a contract (`ActorEntity`) that all resource types (Restaurant, Order)
/// must satisfy, the `ResourceActor` logic is written *once* and reused everywhere.
///
/// Associated types keep payloads apart: a `Restaurant` actor only accepts a
/// `RestaurantCreate`, and the compiler rejects an `OrderCreate`.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks (e.g., calling other actors).
/// It also defines a `Context` type, which is injected into construction and every hook. This allows
/// "Late Binding" of dependencies (passing clients to `run()` instead of `new()`).
///
/// Entities are never deleted: the store only grows.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type CreateParams: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `AddMenuItem`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(
        id: Self::Id,
        params: Self::CreateParams,
        ctx: &Self::Context,
    ) -> Result<Self, String>;

    /// Called after the entity is constructed but before it is stored.
    /// An error here discards the entity.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, String>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Custom error: {0}")]
    Custom(String),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// - **Create**: Uses [`ActorEntity::CreateParams`] to initialize a new resource.
/// - **Get**: Fetches the current state of one resource by ID.
/// - **List**: Fetches every resource in creation order.
/// - **Action**: Executes a custom [`ActorEntity::Action`] against one resource.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Entities keyed by ID, remembering the order they were created in.
struct EntityStore<T: ActorEntity> {
    entities: HashMap<T::Id, T>,
    created: Vec<T::Id>,
}

impl<T: ActorEntity> EntityStore<T> {
    fn new() -> Self {
        Self {
            entities: HashMap::new(),
            created: Vec::new(),
        }
    }

    fn contains(&self, id: &T::Id) -> bool {
        self.entities.contains_key(id)
    }

    fn insert(&mut self, id: T::Id, item: T) {
        self.created.push(id.clone());
        self.entities.insert(id, item);
    }

    fn get(&self, id: &T::Id) -> Option<&T> {
        self.entities.get(id)
    }

    fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.entities.get_mut(id)
    }

    fn in_creation_order(&self) -> Vec<T> {
        self.created
            .iter()
            .filter_map(|id| self.entities.get(id).cloned())
            .collect()
    }

    fn len(&self) -> usize {
        self.created.len()
    }
}

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each `ResourceActor` processes its own messages *sequentially* in a loop, so the
/// store needs no `Mutex` or `RwLock`. The task is the single writer.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: EntityStore<T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: ActorEntity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: EntityStore::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is passed to entity construction and every hook. This allows
    /// entities to reach external dependencies (like other clients) that were created *after*
    /// the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Order" instead of "food_order::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id_fn)();
                    if self.store.contains(&id) {
                        warn!(entity_type, %id, "Duplicate id");
                        let _ = respond_to.send(Err(FrameworkError::Custom(format!(
                            "Duplicate id: {id}"
                        ))));
                        continue;
                    }

                    match T::from_create_params(id.clone(), params, &context) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.in_creation_order()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(FrameworkError::Custom);
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ResourceActor`.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::List { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Action {
                id,
                action,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Tab {
        id: String,
        table: u32,
        covers: u32,
        closed: bool,
    }

    #[derive(Debug)]
    struct TabCreate {
        table: u32,
    }

    #[derive(Debug)]
    enum TabAction {
        Seat(u32),
        Close,
    }

    #[async_trait]
    impl ActorEntity for Tab {
        type Id = String;
        type CreateParams = TabCreate;
        type Action = TabAction;
        type ActionResult = u32;
        type Context = ();

        fn from_create_params(id: String, params: TabCreate, _ctx: &()) -> Result<Self, String> {
            if params.table == 0 {
                return Err("Table numbers start at 1".to_string());
            }
            Ok(Self {
                id,
                table: params.table,
                covers: 0,
                closed: false,
            })
        }

        async fn handle_action(&mut self, action: TabAction, _ctx: &()) -> Result<u32, String> {
            if self.closed {
                return Err(format!("Tab {} is closed", self.id));
            }
            match action {
                TabAction::Seat(guests) => {
                    self.covers += guests;
                    Ok(self.covers)
                }
                TabAction::Close => {
                    self.closed = true;
                    Ok(self.covers)
                }
            }
        }
    }

    fn spawn_tabs() -> ResourceClient<Tab> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || {
            let id = counter.fetch_add(1, Ordering::SeqCst);
            format!("tab_{}", id)
        };
        let (actor, client) = ResourceActor::new(10, next_id);
        tokio::spawn(actor.run(()));
        client
    }

    // --- Test ---

    #[tokio::test]
    async fn test_resource_actor_with_actions() {
        let client = spawn_tabs();

        // 1. Create
        let id: String = client.create(TabCreate { table: 4 }).await.unwrap();
        assert_eq!(id, "tab_1");

        // 2. Perform Action: Seat twice
        assert_eq!(client.perform_action(id.clone(), TabAction::Seat(2)).await.unwrap(), 2);
        assert_eq!(client.perform_action(id.clone(), TabAction::Seat(3)).await.unwrap(), 5);

        // 3. Close, then reject further actions
        client.perform_action(id.clone(), TabAction::Close).await.unwrap();
        let err = client.perform_action(id.clone(), TabAction::Seat(1)).await.unwrap_err();
        assert_eq!(err, FrameworkError::Custom("Tab tab_1 is closed".to_string()));

        // Verify state
        let tab: Tab = client.get(id.clone()).await.unwrap().unwrap();
        assert!(tab.closed);
        assert_eq!(tab.covers, 5);
    }

    #[tokio::test]
    async fn test_list_returns_creation_order() {
        let client = spawn_tabs();
        for table in [7, 3, 9] {
            client.create(TabCreate { table }).await.unwrap();
        }

        let tables: Vec<u32> = client.list().await.unwrap().into_iter().map(|t| t.table).collect();
        assert_eq!(tables, vec![7, 3, 9]);
    }

    #[tokio::test]
    async fn test_failed_create_and_missing_entity() {
        let client = spawn_tabs();

        let err = client.create(TabCreate { table: 0 }).await.unwrap_err();
        assert_eq!(err, FrameworkError::Custom("Table numbers start at 1".to_string()));
        assert!(client.list().await.unwrap().is_empty());

        let err = client
            .perform_action("tab_42".to_string(), TabAction::Close)
            .await
            .unwrap_err();
        assert_eq!(err, FrameworkError::NotFound("tab_42".to_string()));
        assert!(client.get("tab_42".to_string()).await.unwrap().is_none());
    }
}
