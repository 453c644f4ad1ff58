//! Progress poller timing, driven on a paused tokio clock.

mod common;

use std::sync::Arc;
use std::time::Duration;

use dtmap_core::{DEFAULT_POLL_INTERVAL, PollState, ProgressPoller};

use common::{RecordingUi, ScriptedApi, UiEvent};

#[tokio::test(start_paused = true)]
async fn first_poll_waits_one_interval() {
    let api = Arc::new(ScriptedApi::new().with_progress(&[10]));
    let ui = RecordingUi::new();

    let handle = ProgressPoller::start(api.clone(), ui.clone(), DEFAULT_POLL_INTERVAL);
    tokio::time::sleep(Duration::from_millis(999)).await;
    assert_eq!(api.progress_calls(), 0);
    assert_eq!(ui.progress_events(), vec![UiEvent::ProgressShown]);

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(api.progress_calls(), 1);
    assert_eq!(
        ui.progress_events(),
        vec![UiEvent::ProgressShown, UiEvent::ProgressUpdated(10)]
    );
    handle.stop();
}

#[tokio::test(start_paused = true)]
async fn reaching_100_hides_and_stops() {
    let api = Arc::new(ScriptedApi::new().with_progress(&[30, 60, 100, 100]));
    let ui = RecordingUi::new();

    let handle = ProgressPoller::start(api.clone(), ui.clone(), DEFAULT_POLL_INTERVAL);
    tokio::time::sleep(Duration::from_secs(10)).await;

    assert_eq!(api.progress_calls(), 3);
    assert_eq!(handle.state(), PollState::Idle);
    assert_eq!(
        ui.progress_events(),
        vec![
            UiEvent::ProgressShown,
            UiEvent::ProgressUpdated(30),
            UiEvent::ProgressUpdated(60),
            UiEvent::ProgressUpdated(100),
            UiEvent::ProgressHidden,
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn poll_error_stops_without_hiding() {
    let api = Arc::new(ScriptedApi::new().with_progress(&[40]).with_progress_error());
    let ui = RecordingUi::new();

    let handle = ProgressPoller::start(api.clone(), ui.clone(), DEFAULT_POLL_INTERVAL);
    tokio::time::sleep(Duration::from_secs(10)).await;

    assert_eq!(api.progress_calls(), 2);
    assert_eq!(handle.state(), PollState::Idle);
    assert!(ui.progress_visible());
    assert!(ui.alerts().is_empty());
    assert_eq!(ui.progress_events().last(), Some(&UiEvent::ProgressUpdated(40)));

    handle.stop();
    assert!(!ui.progress_visible());
}

#[tokio::test(start_paused = true)]
async fn stop_cancels_further_polls() {
    let api = Arc::new(ScriptedApi::new().with_progress(&[5, 10, 15, 20]));
    let ui = RecordingUi::new();

    let handle = ProgressPoller::start(api.clone(), ui.clone(), DEFAULT_POLL_INTERVAL);
    tokio::time::sleep(Duration::from_millis(2500)).await;
    assert_eq!(api.progress_calls(), 2);

    handle.stop();
    handle.stop();
    tokio::time::sleep(Duration::from_secs(10)).await;

    assert_eq!(api.progress_calls(), 2);
    assert_eq!(handle.state(), PollState::Idle);
    assert!(!ui.progress_visible());
    assert!(
        !ui.progress_events()
            .iter()
            .any(|event| *event == UiEvent::ProgressUpdated(15))
    );
}

#[tokio::test(start_paused = true)]
async fn generation_outlasting_progress_keeps_single_poll_run() {
    use dtmap_core::{ControllerConfig, TableController};
    use dtmap_model::SelectionDraft;

    let api = Arc::new(
        ScriptedApi::new()
            .with_progress(&[50, 100])
            .with_table(Duration::from_secs(5), Ok(common::oracle_response())),
    );
    let ui = RecordingUi::new();
    let controller = TableController::new(api.clone(), ui.handles(), ControllerConfig::default());

    controller
        .generate_table(&SelectionDraft::new("Oracle", "Postgres").with_remapping_option("none"))
        .await
        .unwrap();

    assert_eq!(api.progress_calls(), 2);
    assert!(!ui.progress_visible());
    assert_eq!(
        ui.progress_events(),
        vec![
            UiEvent::ProgressShown,
            UiEvent::ProgressUpdated(50),
            UiEvent::ProgressUpdated(100),
            UiEvent::ProgressHidden,
            UiEvent::ProgressHidden,
        ]
    );
}
