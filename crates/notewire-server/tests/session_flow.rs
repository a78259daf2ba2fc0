//! End-to-end session tests over the channel transport.
//!
//! These drive whole sessions the way a transport would: events in, frames
//! out. No network and no terminal, so the assertions are deterministic.

use std::time::Duration;

use notewire_app::{Controller, Event, KeyInput};
use notewire_core::{CredentialPolicy, Item, ItemRepository, MemoryRepository, RepositoryError};
use notewire_server::{ChannelClient, ChannelTransport, SessionError, Supervisor};
use tokio::time::timeout;

const TICK: Duration = Duration::from_secs(2);

fn supervisor() -> Supervisor<MemoryRepository> {
    Supervisor::new(
        MemoryRepository::seeded(),
        CredentialPolicy::default(),
        notewire_app::Theme::default(),
    )
}

async fn send_keys(client: &ChannelClient, text: &str) {
    for c in text.chars() {
        client.events.send(Event::Key(KeyInput::Char(c))).await.unwrap();
    }
}

async fn send(client: &ChannelClient, key: KeyInput) {
    client.events.send(Event::Key(key)).await.unwrap();
}

async fn next_frame(client: &mut ChannelClient) -> String {
    timeout(TICK, client.frames.recv()).await.unwrap().unwrap()
}

/// Drain frames until one contains the needle.
async fn frame_containing(client: &mut ChannelClient, needle: &str) -> String {
    timeout(TICK, async {
        loop {
            let frame = client.frames.recv().await.unwrap();
            if frame.contains(needle) {
                return frame;
            }
        }
    })
    .await
    .unwrap()
}

async fn login(client: &mut ChannelClient) {
    send_keys(client, "user").await;
    send(client, KeyInput::Enter).await;
    send_keys(client, "pass").await;
    send(client, KeyInput::Enter).await;
}

#[tokio::test]
async fn headless_transport_is_rejected_with_one_diagnostic() {
    let supervisor = supervisor();
    let (transport, mut client) = ChannelTransport::headless();

    let result = supervisor.create_session(transport).await;
    assert!(matches!(result, Err(SessionError::Rejected)));

    let diagnostic = next_frame(&mut client).await;
    assert!(diagnostic.contains("no active terminal"));

    // Exactly one write, then the channel closes: no session task exists
    assert!(timeout(TICK, client.frames.recv()).await.unwrap().is_none());
}

#[tokio::test]
async fn login_flow_reaches_list_and_applies_fetch() {
    let supervisor = supervisor();
    let (transport, mut client) = ChannelTransport::interactive(80, 24);
    let handle = supervisor.create_session(transport).await.unwrap();

    let initial = next_frame(&mut client).await;
    assert!(initial.contains("Please enter your credentials"));

    login(&mut client).await;

    // The list appears before the fetch lands, then fills in
    let _ = frame_containing(&mut client, "your notes").await;
    let loaded = frame_containing(&mut client, "HTML").await;
    assert!(loaded.contains("Vue.js"));

    send(&mut client, KeyInput::Ctrl('c')).await;
    let farewell = frame_containing(&mut client, "exiting").await;
    assert!(farewell.contains("exiting the session"));

    timeout(TICK, handle.wait()).await.unwrap();
}

#[tokio::test]
async fn wrong_password_stays_in_login_with_error() {
    let supervisor = supervisor();
    let (transport, mut client) = ChannelTransport::interactive(80, 24);
    let _handle = supervisor.create_session(transport).await.unwrap();

    send_keys(&client, "user").await;
    send(&client, KeyInput::Enter).await;
    send_keys(&client, "nope").await;
    send(&client, KeyInput::Enter).await;

    let rejected = frame_containing(&mut client, "Invalid username or password").await;
    assert!(rejected.contains("Username: \n"), "buffers should be cleared: {rejected:?}");
}

#[tokio::test]
async fn disconnect_mid_fetch_discards_result_and_exits() {
    let repository = MemoryRepository::seeded().with_latency(Duration::from_millis(100));
    let supervisor = Supervisor::new(
        repository,
        CredentialPolicy::default(),
        notewire_app::Theme::default(),
    );

    let (transport, mut client) = ChannelTransport::interactive(80, 24);
    let handle = supervisor.create_session(transport).await.unwrap();

    login(&mut client).await;
    let _ = frame_containing(&mut client, "your notes").await;

    // Hang up while the fetch is still in flight
    drop(client);

    timeout(TICK, handle.wait()).await.unwrap();
}

#[tokio::test]
async fn sessions_are_isolated_from_each_other() {
    let supervisor = supervisor();

    let (transport_a, mut alice) = ChannelTransport::interactive(80, 24);
    let (transport_b, mut bob) = ChannelTransport::interactive(80, 24);
    let handle_a = supervisor.create_session(transport_a).await.unwrap();
    let handle_b = supervisor.create_session(transport_b).await.unwrap();
    assert_ne!(handle_a.id(), handle_b.id());

    login(&mut alice).await;
    login(&mut bob).await;
    let _ = frame_containing(&mut alice, "HTML").await;
    let _ = frame_containing(&mut bob, "HTML").await;

    // Alice composes a local item; the append never leaves her session
    send(&alice, KeyInput::Ctrl('a')).await;
    send_keys(&alice, "alice private note").await;
    send(&alice, KeyInput::Ctrl('e')).await;
    let committed = frame_containing(&mut alice, "Description for alice private note").await;
    assert!(committed.contains("your notes"));

    send(&bob, KeyInput::Down).await;
    let bob_frame = frame_containing(&mut bob, "CSS").await;
    assert!(!bob_frame.contains("alice private note"));
}

#[tokio::test]
async fn unordered_fetch_completions_all_apply_last_wins() {
    struct StaggeredRepository;

    impl ItemRepository for StaggeredRepository {
        async fn fetch_items(&self, username: &str) -> Result<Vec<Item>, RepositoryError> {
            let latency = if username == "slow" { 80 } else { 5 };
            tokio::time::sleep(Duration::from_millis(latency)).await;
            Ok(vec![Item::new(username, "", "")])
        }
    }

    let (tx, mut rx) = tokio::sync::mpsc::channel(8);
    let executor =
        notewire_server::CommandExecutor::new(std::sync::Arc::new(StaggeredRepository), tx);

    // Issued slow-first; completions arrive in reverse issue order
    executor.dispatch(1, notewire_app::Command::FetchItems { username: "slow".into() });
    executor.dispatch(1, notewire_app::Command::FetchItems { username: "fast".into() });

    let mut controller = Controller::new(1, 80, 24, CredentialPolicy::default());
    send_login(&mut controller);

    let mut arrivals = Vec::new();
    for _ in 0..2 {
        let event = timeout(TICK, rx.recv()).await.unwrap().unwrap();
        if let Event::ItemsLoaded { items, .. } = &event {
            arrivals.push(items[0].title.clone());
        }
        let _ = controller.feed(event);
    }

    assert_eq!(arrivals, vec!["fast".to_string(), "slow".to_string()]);

    // Both applied, last one wins
    let list = controller.view().list().unwrap();
    assert_eq!(list.items().len(), 1);
    assert_eq!(list.items()[0].title, "slow");
}

/// Drive a controller through a successful login without a transport.
fn send_login(controller: &mut Controller) {
    for c in "user".chars() {
        let _ = controller.feed(Event::Key(KeyInput::Char(c)));
    }
    let _ = controller.feed(Event::Key(KeyInput::Enter));
    for c in "pass".chars() {
        let _ = controller.feed(Event::Key(KeyInput::Char(c)));
    }
    let _ = controller.feed(Event::Key(KeyInput::Enter));
}
