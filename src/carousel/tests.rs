use super::test_helpers::{sample_record, ScriptedFetcher};
use super::*;
use crate::config::RetryConfig;
use std::time::Duration;

fn test_config() -> CarouselConfig {
    CarouselConfig {
        universe_ids: vec!["a".into(), "b".into(), "c".into()],
        retry: RetryConfig {
            max_retries: 0,
            delay: Duration::from_millis(0),
        },
        ..CarouselConfig::default()
    }
}

fn records(ids: &[&str]) -> Vec<ProjectRecord> {
    ids.iter().map(|id| sample_record(id)).collect()
}

#[tokio::test(start_paused = true)]
async fn test_idle_until_items_arrive() {
    let carousel = Carousel::new(test_config());
    assert_eq!(carousel.phase(), Phase::Idle);
    assert_eq!(carousel.current_index(), None);
    assert!(carousel.render_current().is_none());
    assert!(carousel.advance(Direction::Forward).await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_items_move_controller_to_showing_at_zero() {
    let carousel = Carousel::new(test_config());
    let count = carousel.set_items(records(&["a", "b", "c"]));
    assert_eq!(count, 3);
    assert_eq!(carousel.phase(), Phase::Showing);
    assert_eq!(carousel.current_index(), Some(0));
}

#[tokio::test(start_paused = true)]
async fn test_advance_forward_then_back_returns_to_start() {
    for len in [2usize, 5] {
        let ids: Vec<String> = (0..len).map(|i| i.to_string()).collect();
        let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let carousel = Carousel::new(test_config());
        carousel.set_items(records(&id_refs));

        carousel.go_to(1).await.unwrap();
        carousel.advance(Direction::Forward).await.unwrap();
        carousel.advance(Direction::Back).await.unwrap();
        assert_eq!(carousel.current_index(), Some(1), "len={len}");
    }
}

#[tokio::test(start_paused = true)]
async fn test_wraps_in_both_directions() {
    let carousel = Carousel::new(test_config());
    carousel.set_items(records(&["a", "b", "c"]));

    carousel.advance(Direction::Back).await.unwrap();
    assert_eq!(carousel.current_index(), Some(2));

    carousel.advance(Direction::Forward).await.unwrap();
    assert_eq!(carousel.current_index(), Some(0));
}

#[tokio::test(start_paused = true)]
async fn test_go_to_sets_index_and_render_reflects_item() {
    let carousel = Carousel::new(test_config());
    carousel.set_items(records(&["a", "b", "c"]));

    let model = carousel.go_to(2).await.unwrap();
    assert_eq!(carousel.current_index(), Some(2));
    assert_eq!(model.title_text, "Project c");
    assert_eq!(model.link_href, "https://www.roblox.com/games/c");

    let rendered = carousel.render_current().unwrap();
    assert_eq!(rendered, model);
}

#[tokio::test(start_paused = true)]
async fn test_go_to_out_of_range_is_rejected() {
    let carousel = Carousel::new(test_config());
    carousel.set_items(records(&["a", "b"]));

    assert!(carousel.go_to(2).await.is_none());
    assert_eq!(carousel.current_index(), Some(0));
}

#[tokio::test(start_paused = true)]
async fn test_navigation_rejected_while_transitioning() {
    let carousel = Arc::new(Carousel::new(test_config()));
    carousel.set_items(records(&["a", "b", "c"]));

    let first = {
        let carousel = Arc::clone(&carousel);
        tokio::spawn(async move { carousel.advance(Direction::Forward).await })
    };

    while carousel.phase() != Phase::Transitioning {
        tokio::task::yield_now().await;
    }

    // Re-entrancy guard: a second navigation during the transition is a no-op
    assert!(carousel.advance(Direction::Forward).await.is_none());
    assert!(carousel.go_to(0).await.is_none());

    assert!(first.await.unwrap().is_some());
    assert_eq!(carousel.phase(), Phase::Showing);
    assert_eq!(carousel.current_index(), Some(1));
}

#[tokio::test(start_paused = true)]
async fn test_manual_navigation_disables_autoplay() {
    let carousel = Carousel::new(test_config());
    let mut events = carousel.subscribe();
    carousel.set_items(records(&["a", "b", "c"]));

    assert!(carousel.autoplay_enabled());
    carousel.advance(Direction::Forward).await.unwrap();
    assert!(!carousel.autoplay_enabled());

    // A second manual navigation does not re-emit the event
    carousel.advance(Direction::Forward).await.unwrap();

    let mut disabled_events = 0;
    while let Ok(event) = events.try_recv() {
        if event == CarouselEvent::AutoplayDisabled {
            disabled_events += 1;
        }
    }
    assert_eq!(disabled_events, 1);
}

#[tokio::test(start_paused = true)]
async fn test_manual_navigation_keeps_autoplay_when_policy_disabled() {
    let config = CarouselConfig {
        disable_autoplay_on_manual_nav: false,
        ..test_config()
    };
    let carousel = Carousel::new(config);
    carousel.set_items(records(&["a", "b"]));

    carousel.advance(Direction::Forward).await.unwrap();
    assert!(carousel.autoplay_enabled());
}

#[tokio::test(start_paused = true)]
async fn test_autoplay_advances_on_interval() {
    let carousel = Arc::new(Carousel::new(test_config()));
    carousel.set_items(records(&["a", "b", "c"]));
    let autoplay = carousel.spawn_autoplay();

    // One interval plus the transition
    tokio::time::sleep(Duration::from_millis(5200)).await;
    assert_eq!(carousel.current_index(), Some(1));

    tokio::time::sleep(Duration::from_millis(5200)).await;
    assert_eq!(carousel.current_index(), Some(2));

    carousel.shutdown();
    autoplay.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_hover_suspends_and_resumes_autoplay() {
    let carousel = Arc::new(Carousel::new(test_config()));
    carousel.set_items(records(&["a", "b", "c"]));
    let autoplay = carousel.spawn_autoplay();

    carousel.set_hovered(true);
    tokio::time::sleep(Duration::from_secs(18)).await;
    assert_eq!(carousel.current_index(), Some(0));

    carousel.set_hovered(false);
    // Next tick lands at the 20 s mark
    tokio::time::sleep(Duration::from_millis(2200)).await;
    assert_eq!(carousel.current_index(), Some(1));

    carousel.shutdown();
    autoplay.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_low_visibility_suspends_autoplay() {
    let carousel = Arc::new(Carousel::new(test_config()));
    carousel.set_items(records(&["a", "b", "c"]));
    let autoplay = carousel.spawn_autoplay();

    carousel.set_visibility_ratio(0.1);
    tokio::time::sleep(Duration::from_secs(18)).await;
    assert_eq!(carousel.current_index(), Some(0));

    carousel.set_visibility_ratio(0.8);
    // Next tick lands at the 20 s mark
    tokio::time::sleep(Duration::from_millis(2200)).await;
    assert_eq!(carousel.current_index(), Some(1));

    carousel.shutdown();
    autoplay.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_autoplay_stops_after_manual_navigation() {
    let carousel = Arc::new(Carousel::new(test_config()));
    carousel.set_items(records(&["a", "b", "c"]));
    let autoplay = carousel.spawn_autoplay();

    carousel.advance(Direction::Forward).await.unwrap();
    assert_eq!(carousel.current_index(), Some(1));

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(carousel.current_index(), Some(1));

    carousel.shutdown();
    autoplay.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_cancels_autoplay_and_navigation() {
    let carousel = Arc::new(Carousel::new(test_config()));
    let mut events = carousel.subscribe();
    carousel.set_items(records(&["a", "b", "c"]));
    let autoplay = carousel.spawn_autoplay();

    carousel.shutdown();
    tokio::time::timeout(Duration::from_secs(1), autoplay)
        .await
        .expect("autoplay task should exit promptly")
        .unwrap();

    // Navigation after teardown is a no-op and emits nothing
    assert!(carousel.advance(Direction::Forward).await.is_none());
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(carousel.current_index(), Some(0));

    let mut saw_shutdown = false;
    while let Ok(event) = events.try_recv() {
        assert!(!matches!(event, CarouselEvent::Advanced { .. }));
        if event == CarouselEvent::Shutdown {
            saw_shutdown = true;
        }
    }
    assert!(saw_shutdown);
}

#[tokio::test(start_paused = true)]
async fn test_load_installs_fetched_items_in_order() {
    let carousel = Carousel::new(test_config());
    let mut events = carousel.subscribe();
    let fetcher = ScriptedFetcher::new(&["a", "b", "c"]).always_fail("b");

    let count = carousel.load(&fetcher).await;
    assert_eq!(count, 2);
    assert_eq!(carousel.len(), 2);
    assert_eq!(carousel.phase(), Phase::Showing);

    let first = carousel.render_current().unwrap();
    assert_eq!(first.title_text, "Project a");

    assert_eq!(events.try_recv().unwrap(), CarouselEvent::Loaded { count: 2 });
}

#[tokio::test(start_paused = true)]
async fn test_load_with_all_failures_is_empty_state() {
    let carousel = Carousel::new(test_config());
    let fetcher = ScriptedFetcher::new(&["a", "b", "c"])
        .always_fail("a")
        .always_fail("b")
        .always_fail("c");

    let count = carousel.load(&fetcher).await;
    assert_eq!(count, 0);
    assert!(carousel.is_empty());
    assert_eq!(carousel.phase(), Phase::Idle);
    assert!(carousel.advance(Direction::Forward).await.is_none());
}
