//! End-to-end scenarios for the card-reveal engine over the Xplore'25 lineup.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use xplore_core::{
    Activation, AudioCue, CardRevealCarousel, Catalog, EffectError, EngineOptions, ExpiryPolicy,
    SilentCue, XploreConfig,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[derive(Default)]
struct CountingCue(AtomicUsize);

impl AudioCue for CountingCue {
    fn play(&self) -> Result<(), EffectError> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Cue that always fails, like a browser blocking autoplay
struct BlockedCue;

impl AudioCue for BlockedCue {
    fn play(&self) -> Result<(), EffectError> {
        Err(EffectError::Blocked("autoplay".to_string()))
    }
}

fn engine(audio: Arc<dyn AudioCue>) -> CardRevealCarousel {
    CardRevealCarousel::new(
        Arc::new(Catalog::xplore25()),
        EngineOptions {
            audio,
            ..Default::default()
        },
    )
}

#[tokio::test(start_paused = true)]
async fn test_eight_nexts_wrap_to_start() {
    let engine = engine(Arc::new(CountingCue::default()));
    assert_eq!(engine.snapshot().active_index, 0);

    for _ in 0..7 {
        engine.on_next();
    }
    assert_eq!(engine.snapshot().active_index, 7);

    engine.on_next();
    assert_eq!(engine.snapshot().active_index, 0);
}

#[tokio::test(start_paused = true)]
async fn test_prev_from_start_wraps_to_end() {
    let engine = engine(Arc::new(CountingCue::default()));
    engine.on_prev();
    assert_eq!(engine.snapshot().active_index, 7);
}

#[tokio::test(start_paused = true)]
async fn test_activation_on_five_of_eight() {
    init_tracing();
    let engine = engine(Arc::new(CountingCue::default()));

    assert_eq!(
        engine.on_item_activate(5),
        Activation::Revealed { first: true }
    );
    assert!(engine.snapshot().is_revealed(5));

    assert_eq!(engine.on_item_activate(5), Activation::Opened);
    assert_eq!(engine.snapshot().selection, Some(5));

    engine.on_detail_close();
    let s = engine.snapshot();
    assert_eq!(s.selection, None);
    assert_eq!(s.revealed.iter().copied().collect::<Vec<_>>(), vec![5]);

    tokio::time::sleep(Duration::from_millis(5001)).await;
    assert!(engine.snapshot().revealed.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_close_twice_equals_close_once() {
    let engine = engine(Arc::new(CountingCue::default()));
    engine.on_item_activate(2);
    engine.on_item_activate(2);

    engine.on_detail_close();
    let once = engine.snapshot();
    engine.on_detail_close();
    assert_eq!(engine.snapshot(), once);
}

#[tokio::test(start_paused = true)]
async fn test_missing_card_is_silent() {
    let cue = Arc::new(CountingCue::default());
    let engine = engine(cue.clone());
    let before = engine.snapshot();

    assert_eq!(engine.on_item_activate(999), Activation::Ignored);
    assert_eq!(engine.snapshot(), before);
    assert_eq!(cue.0.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn test_cue_plays_once_per_reveal() {
    let cue = Arc::new(CountingCue::default());
    let engine = engine(cue.clone());

    engine.on_item_activate(1);
    engine.on_item_activate(2);
    engine.on_item_activate(1);
    assert_eq!(cue.0.load(Ordering::SeqCst), 2);

    tokio::time::sleep(Duration::from_millis(5001)).await;
    engine.on_item_activate(1);
    assert_eq!(cue.0.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn test_blocked_cue_does_not_stop_reveal() {
    let engine = engine(Arc::new(BlockedCue));
    engine.on_item_activate(3);
    assert!(engine.snapshot().is_revealed(3));
}

#[tokio::test(start_paused = true)]
async fn test_custom_delay_from_options() {
    let engine = CardRevealCarousel::new(
        Arc::new(Catalog::xplore25()),
        EngineOptions {
            reveal_delay: Duration::from_millis(1500),
            policy: ExpiryPolicy::FromFirstReveal,
            ..Default::default()
        },
    );

    engine.on_item_activate(8);
    tokio::time::sleep(Duration::from_millis(1400)).await;
    assert!(engine.snapshot().is_revealed(8));
    tokio::time::sleep(Duration::from_millis(101)).await;
    assert!(!engine.snapshot().is_revealed(8));
}

#[tokio::test(start_paused = true)]
async fn test_empty_catalog_navigation_is_inert() {
    let catalog = Catalog::new("Empty", Vec::new(), Vec::new()).unwrap();
    let engine = CardRevealCarousel::new(Arc::new(catalog), EngineOptions::default());

    engine.on_next();
    engine.on_prev();
    engine.on_go_to(0);
    assert_eq!(engine.snapshot().active_index, 0);
    assert_eq!(engine.on_item_activate(1), Activation::Ignored);
}

#[tokio::test(start_paused = true)]
async fn test_default_config_restarts_countdown_on_each_reveal() {
    init_tracing();
    let config = XploreConfig::default();
    assert_eq!(config.expiry_policy, ExpiryPolicy::FromLatestReveal);

    let engine = CardRevealCarousel::new(
        Arc::new(Catalog::xplore25()),
        config.engine_options(Arc::new(SilentCue)),
    );

    engine.on_item_activate(1);
    tokio::time::sleep(Duration::from_millis(4900)).await;
    engine.on_item_activate(2);

    // 5100 ms after the first flip, 200 ms after the second
    tokio::time::sleep(Duration::from_millis(200)).await;
    let s = engine.snapshot();
    assert!(s.is_revealed(1));
    assert!(s.is_revealed(2));
    assert!(s.expiry_pending);

    tokio::time::sleep(Duration::from_millis(4801)).await;
    assert!(engine.snapshot().revealed.is_empty());
}
