use super::OrdClient;
use super::hiro::extract_results;
use crate::domain::{InscriptionCard, OrdError};
use crate::test_utils::JsonMother;

#[test]
fn test_client_defaults_and_overrides() {
    let client = OrdClient::new(None, None).unwrap();
    assert_eq!(client.hiro_base_url(), "https://api.hiro.so");
    assert_eq!(client.mempool_base_url(), "https://mempool.space");

    let client = OrdClient::new(
        Some("http://localhost:3999".to_string()),
        Some("http://localhost:8999".to_string()),
    )
    .unwrap();
    assert_eq!(client.hiro_base_url(), "http://localhost:3999");
    assert_eq!(client.mempool_base_url(), "http://localhost:8999");
}

#[tokio::test]
async fn test_lookup_rejects_empty_address_before_any_network_call() {
    let client = OrdClient::new(None, None).unwrap();

    for input in ["", "   ", "\t\n"] {
        match client.lookup_address(input).await {
            Err(OrdError::InvalidInput(_)) => {}
            other => panic!("expected InvalidInput for {input:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_results_payload_projects_to_cards() {
    let payload = JsonMother::inscriptions_payload(vec![
        JsonMother::inscription_camel(),
        JsonMother::inscription_snake(),
        JsonMother::inscription_empty(),
    ]);

    let cards: Vec<InscriptionCard> = extract_results(payload)
        .iter()
        .map(InscriptionCard::project)
        .collect();

    assert_eq!(cards.len(), 3);

    // camelCase and snake_case records resolve to the same card.
    assert_eq!(cards[0], cards[1]);
    assert!(cards[0].is_image);
    assert_eq!(cards[0].number, Some(248_751));

    // The empty record still projects, with everything absent.
    assert!(cards[2].id.is_none());
    assert_eq!(cards[2].content_type, "unknown");
    assert!(cards[2].detail_link().is_none());
}

#[test]
fn test_empty_results_payload_yields_no_cards() {
    let payload = JsonMother::inscriptions_payload(Vec::new());
    assert!(extract_results(payload).is_empty());
}
