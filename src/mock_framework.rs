//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_action`] to assert behavior.

use tokio::sync::{mpsc, oneshot};
use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};

pub type Responder<T, E> = oneshot::Sender<Result<T, FrameworkError<E>>>;

/// Creates a mock client and a receiver for asserting requests.
///
/// The test plays the part of the actor: it reads requests off the receiver and
/// answers them, so clients can be driven through success and failure paths
/// deterministically.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::CreateParams, Responder<T, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Responder<Option<T>, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<Responder<Vec<T>, T::Error>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, T::Action, Responder<T::ActionResult, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::AddressClient;
    use crate::domain::{AddressKind, SavedAddress};

    #[tokio::test]
    async fn test_mock_client() {
        let (inner, mut receiver) = create_mock_client::<SavedAddress>(10);
        let client = AddressClient::new(inner);

        let create_task = tokio::spawn(async move {
            client.add_manual("Godavari".into(), "12".into(), None).await
        });

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert!(matches!(&params, AddressKind::Manual { hostel, .. } if hostel == "Godavari"));
        let saved = SavedAddress { id: "address_1".into(), kind: params };
        responder.send(Ok(saved.clone())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(saved));
    }

    #[tokio::test]
    async fn test_mock_order_ledger() {
        use crate::clients::OrderClient;
        use crate::domain::{Order, OrderFilter};
        use crate::order_actor::{OrderAction, OrderError};
        use crate::pricing::PricingConfig;

        let (address_inner, _address_rx) = create_mock_client::<SavedAddress>(10);
        let (order_inner, mut receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(
            order_inner,
            AddressClient::new(address_inner),
            PricingConfig::default(),
            chrono::Duration::minutes(40),
        );

        let dispatcher = client.clone();
        let dispatch_task = tokio::spawn(async move { dispatcher.dispatch("order_9".into()).await });
        let (id, action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!(id, "order_9");
        assert!(matches!(action, OrderAction::Dispatch));
        responder.send(Err(FrameworkError::NotFound(id))).unwrap();
        assert_eq!(dispatch_task.await.unwrap(), Err(OrderError::NotFound("order_9".into())));

        let list_task = tokio::spawn(async move { client.find_orders(OrderFilter::default()).await });
        let responder = expect_list(&mut receiver).await.expect("Expected List request");
        responder.send(Ok(Vec::new())).unwrap();
        assert_eq!(list_task.await.unwrap(), Ok(Vec::new()));
    }
}
