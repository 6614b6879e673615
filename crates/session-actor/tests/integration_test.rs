use session_actor::{ActorEntity, FrameworkError, ResourceActor, WeakResourceClient};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: u32,
    holder: String,
    stamped: bool,
    reminders: u32,
}

#[derive(Debug)]
struct TicketOpen {
    holder: String,
}

#[derive(Debug)]
enum TicketAction {
    Stamp,
    RemindLater,
    Remind,
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum TicketError {
    #[error("Holder must not be empty")]
    EmptyHolder,
    #[error("Ticket already stamped")]
    AlreadyStamped,
}

#[derive(Clone)]
struct TicketContext {
    this: WeakResourceClient<Ticket>,
    closed: Arc<AtomicU32>,
}

#[async_trait]
impl ActorEntity for Ticket {
    type Id = u32;
    type Create = TicketOpen;
    type Action = TicketAction;
    type ActionResult = bool;
    type Context = TicketContext;
    type Error = TicketError;

    fn from_create_params(id: u32, params: TicketOpen) -> Result<Self, Self::Error> {
        if params.holder.is_empty() {
            return Err(TicketError::EmptyHolder);
        }
        Ok(Self {
            id,
            holder: params.holder,
            stamped: false,
            reminders: 0,
        })
    }

    async fn on_delete(&self, ctx: &TicketContext) -> Result<(), Self::Error> {
        ctx.closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: TicketAction,
        ctx: &TicketContext,
    ) -> Result<bool, Self::Error> {
        match action {
            TicketAction::Stamp => {
                if self.stamped {
                    return Err(TicketError::AlreadyStamped);
                }
                self.stamped = true;
                Ok(true)
            }
            TicketAction::RemindLater => {
                let this = ctx.this.clone();
                let id = self.id;
                tokio::spawn(async move {
                    tokio::time::sleep(Duration::from_millis(10)).await;
                    let _ = this.perform_action(id, TicketAction::Remind).await;
                });
                Ok(false)
            }
            TicketAction::Remind => {
                self.reminders += 1;
                Ok(true)
            }
        }
    }
}

fn start() -> (
    session_actor::ResourceClient<Ticket>,
    Arc<AtomicU32>,
    tokio::task::JoinHandle<()>,
) {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    let closed = Arc::new(AtomicU32::new(0));
    let context = TicketContext {
        this: client.downgrade(),
        closed: closed.clone(),
    };
    let handle = tokio::spawn(actor.run(context));
    (client, closed, handle)
}

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (client, closed, handle) = start();

    let id = client
        .create(TicketOpen {
            holder: "Alice".into(),
        })
        .await
        .unwrap();
    assert_eq!(id, 1);

    assert!(client.perform_action(id, TicketAction::Stamp).await.unwrap());
    let ticket = client.get(id).await.unwrap().unwrap();
    assert!(ticket.stamped);
    assert_eq!(ticket.holder, "Alice");

    let err = client
        .perform_action(id, TicketAction::Stamp)
        .await
        .unwrap_err();
    assert_eq!(err.entity_error::<TicketError>(), Some(&TicketError::AlreadyStamped));

    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
    assert_eq!(closed.load(Ordering::SeqCst), 1);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_create_failure_and_missing_entity() {
    let (client, _closed, handle) = start();

    let err = client
        .create(TicketOpen {
            holder: String::new(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.entity_error::<TicketError>(), Some(&TicketError::EmptyHolder));

    let missing = client.perform_action(42, TicketAction::Stamp).await;
    assert!(matches!(missing, Err(FrameworkError::NotFound(id)) if id == "42"));
    assert!(matches!(client.delete(42).await, Err(FrameworkError::NotFound(_))));

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_weak_client_posts_deferred_action() {
    let (client, _closed, handle) = start();
    let id = client
        .create(TicketOpen {
            holder: "Bob".into(),
        })
        .await
        .unwrap();

    assert!(!client.perform_action(id, TicketAction::RemindLater).await.unwrap());
    tokio::time::sleep(Duration::from_millis(50)).await;

    let ticket = client.get(id).await.unwrap().unwrap();
    assert_eq!(ticket.reminders, 1);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_shutdown_with_only_weak_handles_left() {
    let (client, closed, handle) = start();
    for holder in ["Carol", "Dave"] {
        client
            .create(TicketOpen {
                holder: holder.into(),
            })
            .await
            .unwrap();
    }

    let weak = client.downgrade();
    drop(client);
    handle.await.unwrap();

    // Both live tickets were torn down when the loop ended.
    assert_eq!(closed.load(Ordering::SeqCst), 2);
    assert!(weak.upgrade().is_none());
    assert!(matches!(
        weak.perform_action(1, TicketAction::Stamp).await,
        Err(FrameworkError::ActorClosed)
    ));
}
