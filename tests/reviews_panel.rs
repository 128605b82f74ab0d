mod common;

use boatwatch::gateway::GatewayError;
use boatwatch::platform::{ObjectType, RecordPageRef};
use boatwatch::ui::lifecycle::LoadingSignal;
use boatwatch::ui::reviews::ReviewsPanel;
use common::{drain, id, review, settle, Harness};

#[tokio::test]
async fn record_change_loads_reviews() {
    let mut harness = Harness::new();
    let mut lifecycle = harness.watch_lifecycle();
    harness
        .gateway
        .set_reviews("b1", Ok(vec![review("r1", "b1", "Great boat")]));
    let panel = ReviewsPanel::new(&harness.ctx);

    panel.set_record_id(Some(id("b1"))).await;

    let state = panel.state();
    assert_eq!(state.reviews, vec![review("r1", "b1", "Great boat")]);
    assert!(state.reviews_to_show());
    assert!(!state.is_loading());
    assert_eq!(harness.gateway.calls(), vec!["reviews:b1"]);
    assert_eq!(
        drain(&mut lifecycle),
        vec![LoadingSignal::Loading, LoadingSignal::DoneLoading]
    );
}

#[tokio::test]
async fn empty_record_id_shows_nothing_without_a_call() {
    let harness = Harness::new();
    let panel = ReviewsPanel::new(&harness.ctx);

    panel.set_record_id(Some(id("  "))).await;
    panel.set_record_id(None).await;

    let state = panel.state();
    assert!(state.reviews.is_empty());
    assert!(!state.reviews_to_show());
    assert!(!state.is_loading());
    assert!(harness.gateway.calls().is_empty());
}

#[tokio::test]
async fn same_record_does_not_refetch_but_refresh_does() {
    let harness = Harness::new();
    let panel = ReviewsPanel::new(&harness.ctx);

    panel.set_record_id(Some(id("b1"))).await;
    panel.set_record_id(Some(id("b1"))).await;
    assert_eq!(harness.gateway.count("reviews:"), 1);

    panel.refresh().await;
    assert_eq!(harness.gateway.calls(), vec!["reviews:b1", "reviews:b1"]);
}

#[tokio::test]
async fn stale_reviews_are_discarded() {
    let harness = Harness::new();
    let gateway = harness.gateway.clone();
    gateway.set_reviews("b1", Ok(vec![review("r1", "b1", "First")]));
    gateway.set_reviews("b2", Ok(vec![review("r2", "b2", "Second")]));
    gateway.hold("reviews:b1");
    let panel = ReviewsPanel::new(&harness.ctx);

    tokio::join!(
        panel.set_record_id(Some(id("b1"))),
        async {
            gateway.wait_for_calls(1).await;
            panel.set_record_id(Some(id("b2"))).await;
            gateway.release("reviews:b1");
            settle().await;
        }
    );

    let state = panel.state();
    assert_eq!(state.boat_id, Some(id("b2")));
    assert_eq!(state.reviews, vec![review("r2", "b2", "Second")]);
    assert!(!state.is_loading());
}

#[tokio::test]
async fn failure_sets_error_and_next_success_clears_it() {
    let harness = Harness::new();
    harness
        .gateway
        .set_reviews("b1", Err(GatewayError::NotFound { id: "b1".to_string() }));
    let panel = ReviewsPanel::new(&harness.ctx);

    panel.set_record_id(Some(id("b1"))).await;
    let state = panel.state();
    assert_eq!(state.error.as_deref(), Some("Record 'b1' not found"));
    assert!(!state.is_loading());

    panel.set_record_id(Some(id("b2"))).await;
    assert_eq!(panel.state().error, None);
}

#[tokio::test]
async fn reviewer_navigation_targets_user_page() {
    let harness = Harness::new();
    let panel = ReviewsPanel::new(&harness.ctx);

    panel.navigate_to_reviewer(id("u9"));

    assert_eq!(
        harness.navigation.visits(),
        vec![RecordPageRef::view(id("u9"), ObjectType::User)]
    );
    assert_eq!(harness.navigation.visits()[0].action, "view");
}
