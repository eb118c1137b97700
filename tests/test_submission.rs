//! Integration tests for the submission pipeline: what goes over the wire,
//! what reaches the sink, and how overlapping submissions are refused.

mod common;

use std::sync::Arc;

use common::*;
use serde_json::json;

#[tokio::test]
async fn test_submit_posts_the_snapshot_and_delivers_the_payload() -> anyhow::Result<()> {
    let transport = Arc::new(RecordingTransport::new(json!({ "total_lcc": 1234.5 })));
    let submitter = Submitter::new(transport.clone());
    let spy = SinkSpy::new();

    // 1. Submit a populated draft.
    let draft = bridge_draft("Ravi River Crossing");
    submitter.submit(draft.clone(), spy.sink()).await?;

    // 2. Exactly one request went out, body identical to the snapshot.
    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0], draft);

    // 3. The sink saw the payload exactly once, untouched.
    assert_eq!(spy.call_count(), 1);
    assert_eq!(
        spy.received()[0],
        CalculationResult::new(json!({ "total_lcc": 1234.5 }))
    );
    Ok(())
}

#[tokio::test]
async fn test_unrecognized_payloads_are_delivered_untouched() -> anyhow::Result<()> {
    // A service answering with a shape we do not know about must still reach
    // the caller verbatim instead of turning into an error.
    let transport = Arc::new(RecordingTransport::new(json!({ "cost": 1000 })));
    let submitter = Submitter::new(transport);
    let spy = SinkSpy::new();

    submitter.submit(bridge_draft("Bridge A"), spy.sink()).await?;

    let received = spy.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].payload(), &json!({ "cost": 1000 }));
    assert_eq!(received[0].total_lcc(), None);
    Ok(())
}

#[tokio::test]
async fn test_failure_never_reaches_the_sink() {
    let transport = Arc::new(FailingTransport::new("Invalid bill of quantities"));
    let submitter = Submitter::new(transport);
    let spy = SinkSpy::new();

    let outcome = submitter.submit(bridge_draft("Bridge A"), spy.sink()).await;

    assert!(matches!(
        outcome,
        Err(SubmitError::Transport(TransportError::Api(ref message)))
            if message == "Invalid bill of quantities"
    ));
    assert_eq!(spy.call_count(), 0);
}

#[tokio::test]
async fn test_second_submit_is_rejected_while_in_flight() -> anyhow::Result<()> {
    let transport = Arc::new(BlockingTransport::new(json!({ "total_lcc": 9.0 })));
    let submitter = Submitter::new(transport.clone());
    let spy = SinkSpy::new();

    // 1. First submission parks inside the transport.
    let first = submitter.submit(bridge_draft("Bridge A"), spy.sink());

    // 2. Once it is demonstrably in flight, a second submission bounces off
    //    the gate without ever touching the transport.
    let second = async {
        transport.started().await;
        assert!(submitter.is_in_flight());

        let outcome = submitter.submit(bridge_draft("Bridge B"), spy.sink()).await;
        assert!(matches!(outcome, Err(SubmitError::InFlight)));

        transport.release();
    };

    let (first_outcome, ()) = tokio::join!(first, second);
    first_outcome?;

    // 3. Only the first request reached the service, and only its payload
    //    reached the sink.
    assert_eq!(transport.call_count(), 1);
    assert_eq!(spy.call_count(), 1);
    assert!(!submitter.is_in_flight());
    Ok(())
}

#[tokio::test]
async fn test_gate_reopens_after_success_and_after_failure() -> anyhow::Result<()> {
    let spy = SinkSpy::new();

    // Failure releases the gate.
    let submitter = Submitter::new(Arc::new(FailingTransport::new("boom")));
    let outcome = submitter.submit(bridge_draft("Bridge A"), spy.sink()).await;
    assert!(outcome.is_err());
    assert!(!submitter.is_in_flight());

    // So does success, twice in a row on the same submitter.
    let transport = Arc::new(RecordingTransport::new(json!({ "total_lcc": 1.0 })));
    let submitter = Submitter::new(transport.clone());
    submitter.submit(bridge_draft("Bridge A"), spy.sink()).await?;
    submitter.submit(bridge_draft("Bridge B"), spy.sink()).await?;

    assert_eq!(transport.requests().len(), 2);
    assert!(!submitter.is_in_flight());
    Ok(())
}

#[tokio::test]
async fn test_edits_after_snapshot_do_not_change_what_was_sent() -> anyhow::Result<()> {
    let transport = Arc::new(BlockingTransport::new(json!({ "total_lcc": 2.0 })));
    let submitter = Submitter::new(transport.clone());
    let spy = SinkSpy::new();

    let mut live_form = bridge_draft("Bridge A");
    let snapshot = live_form.clone();

    let submit = submitter.submit(snapshot.clone(), spy.sink());
    let edit_mid_flight = async {
        transport.started().await;
        // The user keeps typing while the request is on the wire.
        live_form.apply(FormEdit::ProjectName("Bridge A (renamed)".into()));
        live_form.apply(FormEdit::RemoveQuantity {
            item: "concrete_m35".into(),
        });
        transport.release();
    };

    let (outcome, ()) = tokio::join!(submit, edit_mid_flight);
    outcome?;

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0], snapshot);
    assert_ne!(requests[0], live_form);
    Ok(())
}
