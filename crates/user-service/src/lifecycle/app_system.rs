use crate::controllers::{HelloController, UsersController};
use crate::repository::UserRepository;
use crate::user_store;
use tracing::{error, info};

/// The main runtime orchestrator for the service.
///
/// `AppSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the store task
/// - **Dependency Wiring**: Handing the repository to the controllers
/// - **Graceful Shutdown**: Draining the store before exit
///
/// # Example
///
/// ```ignore
/// let system = AppSystem::new();
///
/// println!("{}", system.hello.get());
/// let outcome = system.users.create(User::new(1, "Alice", "alice@example.com")).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct AppSystem {
    /// Controller for the `/users` resource
    pub users: UsersController,

    /// Controller for the greeting endpoint
    pub hello: HelloController,

    /// Repository handle, exposed for test collaborators
    pub repository: UserRepository,

    /// Task handle of the running store (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl AppSystem {
    /// Creates and initializes a new `AppSystem` with the store running.
    pub fn new() -> Self {
        // 1. Create the store actor and its repository handle
        let (store_actor, repository) = user_store::new();

        // 2. Start the store in its own task
        let store_handle = tokio::spawn(store_actor.run());

        Self {
            users: UsersController::new(repository.clone()),
            hello: HelloController,
            repository,
            handles: vec![store_handle],
        }
    }

    /// Gracefully shuts down the service.
    ///
    /// Drops every repository handle, which closes the store channel; the
    /// store drains its queue and exits. Returns an error if the store task
    /// panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Dropping the controllers and the repository drops every clone of
        // the store client, closing the channel.
        drop(self.users);
        drop(self.repository);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for AppSystem {
    fn default() -> Self {
        Self::new()
    }
}
