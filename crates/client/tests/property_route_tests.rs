//! Property-based tests for route resolution.
//!
//! This module uses proptest to verify:
//! - Any explicit non-empty `fieldId` wins over any chained field id
//! - Rendered textual ids stay inside a single path segment and decode back
//!
//! # What this does NOT handle
//! - HTTP behavior (see transport_tests.rs)

mod common;

use common::*;
use helpdesk_client::testing::RecordingTransport;
use helpdesk_client::{RouteParameters, RouteTemplate};
use percent_encoding::percent_decode_str;
use proptest::prelude::*;

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime should build")
        .block_on(future)
}

proptest! {
    #[test]
    fn prop_explicit_field_id_wins(explicit in 1u64.., chained in 1u64.., option in 1u64..) {
        let client = HelpdeskClient::with_transport(RecordingTransport::new());
        let options = client.ticket_field_options().with_field_id(chained);

        block_on(options.find(
            Some(Identifier::Number(option)),
            &params(json!({"fieldId": explicit})),
        ))
        .unwrap();

        let requests = client.transport().requests();
        prop_assert_eq!(
            &requests[0].path,
            &format!("ticket_fields/{explicit}/options/{option}.json")
        );
    }

    #[test]
    fn prop_chained_field_id_used_when_absent(chained in 1u64..) {
        let client = HelpdeskClient::with_transport(RecordingTransport::new());
        let options = client.ticket_field_options().with_field_id(chained);

        block_on(options.find_all(&Params::new())).unwrap();

        let requests = client.transport().requests();
        prop_assert_eq!(&requests[0].path, &format!("ticket_fields/{chained}/options.json"));
    }

    #[test]
    fn prop_text_ids_render_as_one_segment(id in "[^\\s]{1,24}") {
        let template = RouteTemplate::new("ticket_fields/{fieldId}/options.json");
        let route_params = RouteParameters::new().with("fieldId", id.as_str());

        let rendered = template.render(&route_params, "TicketFieldOptions::find_all").unwrap();
        let segment = rendered
            .strip_prefix("ticket_fields/")
            .and_then(|rest| rest.strip_suffix("/options.json"))
            .unwrap();

        prop_assert!(!segment.contains('/'));
        prop_assert_eq!(percent_decode_str(segment).decode_utf8().unwrap(), id.as_str());
    }
}
