//! The card-reveal / carousel interaction engine.
//!
//! [`CardRevealCarousel`] wraps an [`InteractionState`] with the pieces a
//! mounted view needs:
//!
//! - one shared expiry countdown that turns every card face down again
//! - the flip audio cue on each new reveal
//! - a `watch` channel of [`RenderState`] snapshots for the view to render
//!
//! ## Expiry
//!
//! The countdown starts when the first card is revealed. Under the default
//! [`ExpiryPolicy::FromLatestReveal`] each new reveal restarts it, so every
//! card gets the full delay after the last flip. With
//! [`ExpiryPolicy::FromFirstReveal`] the first deadline stands. Only one
//! countdown is ever pending. It is cancelled by [`CardRevealCarousel::clear_reveals`],
//! [`CardRevealCarousel::teardown`] and by dropping the last handle.
//!
//! ## Example
//!
//! ```ignore
//! let engine = CardRevealCarousel::new(Arc::new(Catalog::xplore25()), EngineOptions::default());
//! engine.on_item_activate(3);   // flips card 3, plays the cue
//! engine.on_item_activate(3);   // opens its detail view
//! engine.on_detail_close();
//! ```

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::catalog::{Catalog, ItemId};
use crate::effects::{play_cue, AudioCue, SilentCue};
use crate::interaction::{Activation, InteractionState, RenderState};
use crate::timer::ExpiryTimer;

/// Default time cards stay face up
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(5000);

/// When the shared expiry countdown is (re)started
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpiryPolicy {
    /// Start on the empty to non-empty transition only
    FromFirstReveal,
    /// Restart on every new reveal
    #[default]
    FromLatestReveal,
}

impl std::str::FromStr for ExpiryPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "from-first-reveal" | "first" => Ok(Self::FromFirstReveal),
            "from-latest-reveal" | "latest" => Ok(Self::FromLatestReveal),
            other => Err(format!("unknown expiry policy: {}", other)),
        }
    }
}

/// Engine tuning
#[derive(Clone)]
pub struct EngineOptions {
    pub reveal_delay: Duration,
    pub policy: ExpiryPolicy,
    pub audio: Arc<dyn AudioCue>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            reveal_delay: DEFAULT_REVEAL_DELAY,
            policy: ExpiryPolicy::default(),
            audio: Arc::new(SilentCue),
        }
    }
}

impl std::fmt::Debug for EngineOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineOptions")
            .field("reveal_delay", &self.reveal_delay)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

struct Core {
    interaction: InteractionState,
    timer: Option<ExpiryTimer>,
    /// Bumped on every arm so a countdown that lost a race is ignored
    generation: u64,
    torn_down: bool,
}

struct Inner {
    core: Mutex<Core>,
    options: EngineOptions,
    tx: watch::Sender<RenderState>,
}

/// Shared handle to one view's interaction engine.
///
/// Cloning is cheap; all clones drive the same state.
#[derive(Clone)]
pub struct CardRevealCarousel {
    inner: Arc<Inner>,
}

impl CardRevealCarousel {
    pub fn new(catalog: Arc<Catalog>, options: EngineOptions) -> Self {
        let interaction = InteractionState::new(catalog);
        let (tx, _) = watch::channel(interaction.render_state(false));

        Self {
            inner: Arc::new(Inner {
                core: Mutex::new(Core {
                    interaction,
                    timer: None,
                    generation: 0,
                    torn_down: false,
                }),
                options,
                tx,
            }),
        }
    }

    pub fn catalog(&self) -> Arc<Catalog> {
        self.inner.core.lock().interaction.catalog().clone()
    }

    pub fn options(&self) -> &EngineOptions {
        &self.inner.options
    }

    /// Current render snapshot
    pub fn snapshot(&self) -> RenderState {
        self.inner.tx.borrow().clone()
    }

    /// Receiver that observes every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<RenderState> {
        self.inner.tx.subscribe()
    }

    /// Click on a card.
    ///
    /// Hidden card: flip it, play the cue, possibly arm the countdown.
    /// Revealed card: open its detail view. Unknown id: nothing.
    pub fn on_item_activate(&self, id: ItemId) -> Activation {
        let activation = {
            let mut core = self.inner.core.lock();
            let activation = core.interaction.activate(id);
            if let Activation::Revealed { first } = activation {
                let rearm = self.inner.options.policy == ExpiryPolicy::FromLatestReveal;
                if first || rearm || core.timer.is_none() {
                    self.arm(&mut core);
                }
            }
            self.publish(&core);
            activation
        };

        match activation {
            Activation::Revealed { .. } => {
                tracing::debug!(id, "Card revealed");
                play_cue(self.inner.options.audio.as_ref());
            }
            Activation::Opened => tracing::debug!(id, "Opened event details"),
            Activation::Ignored => {}
        }

        activation
    }

    /// "Learn More" on a face-up card
    pub fn open_detail(&self, id: ItemId) -> bool {
        let mut core = self.inner.core.lock();
        let opened = core.interaction.open_detail(id);
        if opened {
            self.publish(&core);
        }
        opened
    }

    pub fn on_detail_close(&self) {
        let mut core = self.inner.core.lock();
        core.interaction.close_detail();
        self.publish(&core);
    }

    pub fn on_next(&self) {
        let mut core = self.inner.core.lock();
        core.interaction.next();
        self.publish(&core);
    }

    pub fn on_prev(&self) {
        let mut core = self.inner.core.lock();
        core.interaction.prev();
        self.publish(&core);
    }

    pub fn on_go_to(&self, index: usize) {
        let mut core = self.inner.core.lock();
        if core.interaction.go_to(index) {
            self.publish(&core);
        } else {
            tracing::debug!(index, "Ignoring out-of-range slide");
        }
    }

    /// Turn every card face down now and cancel the pending countdown
    pub fn clear_reveals(&self) {
        let mut core = self.inner.core.lock();
        if let Some(timer) = core.timer.take() {
            timer.cancel();
        }
        core.interaction.clear_reveals();
        self.publish(&core);
    }

    /// Cancel the countdown for good; called when the view unmounts.
    ///
    /// State stays readable but no countdown will be armed afterwards.
    pub fn teardown(&self) {
        let mut core = self.inner.core.lock();
        core.torn_down = true;
        if let Some(timer) = core.timer.take() {
            timer.cancel();
            tracing::debug!("Cancelled pending reveal expiry on teardown");
        }
        self.publish(&core);
    }

    pub fn expiry_pending(&self) -> bool {
        self.inner.core.lock().timer.is_some()
    }

    fn arm(&self, core: &mut Core) {
        if core.torn_down {
            return;
        }

        core.generation += 1;
        let generation = core.generation;
        let weak: Weak<Inner> = Arc::downgrade(&self.inner);

        // Replacing the old timer drops and aborts it.
        core.timer = ExpiryTimer::spawn(self.inner.options.reveal_delay, move || {
            if let Some(inner) = weak.upgrade() {
                CardRevealCarousel { inner }.expire(generation);
            }
        });
    }

    fn expire(&self, generation: u64) {
        let mut core = self.inner.core.lock();
        if core.generation != generation || core.timer.is_none() {
            return;
        }
        if let Some(timer) = core.timer.take() {
            timer.detach();
        }

        let cleared = core.interaction.reveal_state().len();
        core.interaction.clear_reveals();
        tracing::debug!(cleared, "Reveal delay elapsed, cards flipped back");
        self.publish(&core);
    }

    fn publish(&self, core: &Core) {
        self.inner
            .tx
            .send_replace(core.interaction.render_state(core.timer.is_some()));
    }
}

impl std::fmt::Debug for CardRevealCarousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardRevealCarousel")
            .field("state", &self.snapshot())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::error::EffectError;

    #[derive(Default)]
    struct CountingCue(AtomicUsize);

    impl AudioCue for CountingCue {
        fn play(&self) -> Result<(), EffectError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn engine_with(policy: ExpiryPolicy) -> (CardRevealCarousel, Arc<CountingCue>) {
        let cue = Arc::new(CountingCue::default());
        let engine = CardRevealCarousel::new(
            Arc::new(Catalog::xplore25()),
            EngineOptions {
                policy,
                audio: cue.clone(),
                ..Default::default()
            },
        );
        (engine, cue)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[tokio::test(start_paused = true)]
    async fn test_reveal_then_open() {
        let (engine, cue) = engine_with(ExpiryPolicy::FromFirstReveal);

        engine.on_item_activate(3);
        let s = engine.snapshot();
        assert_eq!(s.revealed.iter().copied().collect::<Vec<_>>(), vec![3]);
        assert_eq!(s.selection, None);
        assert!(s.expiry_pending);

        engine.on_item_activate(3);
        let s = engine.snapshot();
        assert_eq!(s.revealed.len(), 1);
        assert_eq!(s.selection, Some(3));
        assert_eq!(cue.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_id_has_no_side_effect() {
        let (engine, cue) = engine_with(ExpiryPolicy::FromFirstReveal);
        let before = engine.snapshot();

        assert_eq!(engine.on_item_activate(999), Activation::Ignored);
        assert_eq!(engine.snapshot(), before);
        assert_eq!(cue.0.load(Ordering::SeqCst), 0);
        assert!(!engine.expiry_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_global_expiry() {
        let (engine, _) = engine_with(ExpiryPolicy::FromFirstReveal);

        engine.on_item_activate(1);
        tokio::time::sleep(ms(1000)).await;
        engine.on_item_activate(2);
        assert_eq!(engine.snapshot().revealed.len(), 2);

        tokio::time::sleep(ms(6001)).await;
        let s = engine.snapshot();
        assert!(s.revealed.is_empty());
        assert!(!s.expiry_pending);
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_reveal_governs_deadline() {
        let (engine, _) = engine_with(ExpiryPolicy::FromFirstReveal);

        engine.on_item_activate(1);
        tokio::time::sleep(ms(4900)).await;
        engine.on_item_activate(2);

        tokio::time::sleep(ms(101)).await;
        assert!(engine.snapshot().revealed.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_latest_reveal_rearms() {
        let (engine, _) = engine_with(ExpiryPolicy::FromLatestReveal);

        engine.on_item_activate(1);
        tokio::time::sleep(ms(4900)).await;
        engine.on_item_activate(2);

        tokio::time::sleep(ms(200)).await;
        assert_eq!(engine.snapshot().revealed.len(), 2);

        tokio::time::sleep(ms(5000)).await;
        assert!(engine.snapshot().revealed.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_selection_survives_expiry() {
        let (engine, _) = engine_with(ExpiryPolicy::FromFirstReveal);

        engine.on_item_activate(5);
        engine.on_item_activate(5);
        engine.on_detail_close();
        let s = engine.snapshot();
        assert_eq!(s.selection, None);
        assert!(s.is_revealed(5));

        tokio::time::sleep(ms(5001)).await;
        assert!(engine.snapshot().revealed.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_cancels_expiry() {
        let (engine, _) = engine_with(ExpiryPolicy::FromFirstReveal);
        let mut rx = engine.subscribe();

        engine.on_item_activate(4);
        engine.teardown();
        rx.borrow_and_update();

        tokio::time::sleep(ms(10_000)).await;
        assert!(!rx.has_changed().unwrap());
        assert!(engine.snapshot().is_revealed(4));

        // No countdown after teardown
        engine.on_item_activate(6);
        assert!(!engine.expiry_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_cancels_expiry() {
        let (engine, _) = engine_with(ExpiryPolicy::FromFirstReveal);

        engine.on_item_activate(1);
        engine.clear_reveals();
        assert!(!engine.expiry_pending());

        tokio::time::sleep(ms(3000)).await;
        engine.on_item_activate(2);
        tokio::time::sleep(ms(3000)).await;
        // A stale fire from the first countdown would have cleared card 2
        assert!(engine.snapshot().is_revealed(2));

        tokio::time::sleep(ms(2001)).await;
        assert!(engine.snapshot().revealed.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_engine_cancels_expiry() {
        let (engine, _) = engine_with(ExpiryPolicy::FromFirstReveal);
        let mut rx = engine.subscribe();

        engine.on_item_activate(1);
        rx.borrow_and_update();
        drop(engine);

        tokio::time::sleep(ms(6000)).await;
        // Sender is gone and nothing was published after the drop
        assert!(rx.has_changed().is_err());
        assert!(rx.borrow().is_revealed(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_see_transitions() {
        let (engine, _) = engine_with(ExpiryPolicy::FromFirstReveal);
        let mut rx = engine.subscribe();

        engine.on_next();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().active_index, 1);

        engine.on_go_to(7);
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().active_index, 7);

        engine.on_go_to(8);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("latest".parse::<ExpiryPolicy>(), Ok(ExpiryPolicy::FromLatestReveal));
        assert_eq!(
            "from-first-reveal".parse::<ExpiryPolicy>(),
            Ok(ExpiryPolicy::FromFirstReveal)
        );
        assert!("sometimes".parse::<ExpiryPolicy>().is_err());
    }
}
