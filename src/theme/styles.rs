//! Global CSS styles for Xplore'25.
//!
//! Blocky sandbox-game look: bevelled borders, pixelated images, monospace
//! text. Biome colours arrive per component as `--mc-*` custom properties.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Page */
  --page-bg: #171615;
  --page-header: #252323;
  --page-panel: rgba(31, 41, 55, 0.5);
  --page-border: #4b5563;

  /* Text */
  --text-primary: #ffffff;
  --text-secondary: #d1d5db;
  --text-muted: #9ca3af;
  --text-dark: #1f2937;

  /* Biome defaults (grassland); components override these inline */
  --mc-light: #86efac;
  --mc-base: #22c55e;
  --mc-border: #16a34a;
  --mc-highlight: #bbf7d0;
  --mc-text: #052e16;
  --mc-panel: rgba(20, 83, 45, 0.85);
  --mc-window: #dcfce7;

  /* Typography */
  --font-pixel: 'Press Start 2P', 'VT323', monospace;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-flip: 700ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-mono);
  background: var(--page-bg);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

img {
  image-rendering: pixelated;
  display: block;
}

button {
  font-family: inherit;
  cursor: pointer;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Navigation === */
.mc-header {
  background: #292524;
  border-bottom: 4px solid #1c1917;
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.4);
  position: relative;
  z-index: 20;
}

.mc-header__inner {
  max-width: 80rem;
  margin: 0 auto;
  padding: 1rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1.5rem;
}

.mc-header__brand {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.mc-header__logo {
  width: 2rem;
  height: 2rem;
  background: var(--mc-base);
  border: 2px solid;
  border-color: var(--mc-highlight) var(--mc-border) var(--mc-border) var(--mc-highlight);
}

.mc-header__title {
  font-size: 1.5rem;
  font-weight: 700;
}

.mc-header__nav {
  display: flex;
  gap: 1.5rem;
}

.mc-header__status {
  color: #facc15;
  font-size: 0.875rem;
}

.nav-link {
  color: var(--text-secondary);
  transition: color var(--transition-fast);
}

.nav-link:hover,
.nav-link--active {
  color: var(--text-primary);
  font-weight: 600;
}

/* === Landing === */
.landing {
  position: relative;
  width: 100%;
  height: 100vh;
  overflow: hidden;
  background: #111827;
}

.landing__skybox {
  position: absolute;
  inset: 0;
  background: url('/assets/skie.jpg') center / cover no-repeat;
  animation: skybox-pan 60s linear infinite alternate;
}

@keyframes skybox-pan {
  from { background-position: 0% 50%; }
  to { background-position: 100% 50%; }
}

.landing__loading {
  position: absolute;
  inset: 0;
  z-index: 30;
  display: flex;
  align-items: center;
  justify-content: center;
  background: #111827;
}

.landing__loading-text {
  font-size: 1.25rem;
}

.landing__overlay {
  position: absolute;
  inset: 0;
  z-index: 20;
  margin-top: 4rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
}

.landing__logo {
  max-width: 36rem;
  width: 80%;
  filter: drop-shadow(0 10px 20px rgba(0, 0, 0, 0.5));
}

.explore-btn {
  position: relative;
  background: none;
  border: none;
  transition: transform 100ms ease-in-out;
}

.explore-btn:hover { transform: scale(1.05); }
.explore-btn--pressed,
.explore-btn:active { transform: scale(0.95); }

.explore-btn img {
  max-width: 260px;
  filter: drop-shadow(0 8px 16px rgba(0, 0, 0, 0.6));
}

.explore-btn__label {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  color: #000;
  font-family: var(--font-pixel);
  font-size: 1.5rem;
  font-weight: 900;
  letter-spacing: 0.1em;
  text-shadow: 2px 2px 0 #fff, 4px 4px 0 rgba(255, 255, 255, 0.5);
  pointer-events: none;
}

/* === Events Hero === */
.hero {
  position: relative;
  height: 85vh;
  overflow: hidden;
}

.hero__video {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.hero__poster {
  position: absolute;
  inset: 0;
  background: url('/assets/homebg.jpg') center / cover no-repeat;
  transition: opacity 1s ease;
}

.hero__poster--hidden {
  opacity: 0;
}

.hero__content {
  position: relative;
  z-index: 10;
  height: 100%;
  display: flex;
  flex-direction: column;
}

.hero__titles {
  flex: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
  padding: 1.25rem;
}

.hero__headline {
  font-size: clamp(2.5rem, 8vw, 6rem);
  font-weight: 700;
  letter-spacing: -0.02em;
  margin-bottom: 1.5rem;
}

.hero__headline--gradient {
  background: linear-gradient(90deg, #d1d5db, #ffffff, #9ca3af);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero__tagline {
  max-width: 48rem;
  font-size: clamp(1.1rem, 2.5vw, 1.8rem);
  color: var(--text-secondary);
}

.hero__cta {
  margin-top: 2rem;
  padding: 0.75rem 1.5rem;
  background: #fff;
  color: #000;
  font-weight: 700;
  border: 4px solid;
  border-color: #fff #6b7280 #6b7280 #fff;
}

.hero__shade {
  position: absolute;
  inset: 0;
  background: rgba(0, 0, 0, 0.4);
  pointer-events: none;
}

/* === Events Section === */
.events-section {
  padding: 4rem 1.5rem;
  max-width: 80rem;
  margin: 0 auto;
}

.events-section__intro {
  text-align: center;
  margin-bottom: 3rem;
}

.events-section__intro h3 {
  font-size: 2.25rem;
  margin-bottom: 1.5rem;
}

.events-section__intro p {
  color: var(--text-secondary);
}

.events-section__reset {
  display: block;
  margin: 2rem auto 0;
  padding: 0.5rem 1rem;
  background: transparent;
  color: var(--text-secondary);
  border: 2px solid var(--page-border);
}

.events-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 1.5rem;
}

/* === Flip Card === */
.flip-card {
  position: relative;
  height: 450px;
  max-width: 20rem;
  width: 100%;
  margin: 0 auto;
  perspective: 1000px;
  cursor: pointer;
}

.flip-card--tall {
  height: 500px;
}

.flip-card__inner {
  position: relative;
  width: 100%;
  height: 100%;
  transition: transform var(--transition-flip);
  transform-style: preserve-3d;
}

.flip-card__inner--flipped {
  transform: rotateY(180deg);
}

.flip-card__face {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  padding: 1rem;
  border-radius: 0.5rem;
  backface-visibility: hidden;
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
}

.flip-card__face--front {
  background: #000;
  border: 2px solid #fff;
}

.flip-card__face--back {
  background: #fff;
  color: var(--text-dark);
  transform: rotateY(180deg);
}

.flip-card__art {
  height: 12rem;
  margin-bottom: 0.75rem;
  border-radius: 0.5rem;
  overflow: hidden;
  background: #1f2937;
  flex-shrink: 0;
}

.flip-card__art img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.flip-card__meta {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 0.5rem;
}

.flip-card__badge {
  font-size: 0.75rem;
  color: var(--text-muted);
}

.flip-card__title {
  font-size: 0.875rem;
  font-weight: 700;
  margin-bottom: 0.5rem;
}

.flip-card__text {
  flex: 1;
  font-size: 0.75rem;
  color: #6b7280;
  margin-bottom: 0.75rem;
  overflow: hidden;
}

.flip-card__face--front .flip-card__text {
  color: var(--text-secondary);
}

.flip-card__button {
  width: 100%;
  padding: 0.5rem 0.75rem;
  background: #1f2937;
  color: #fff;
  border: none;
  border-radius: 0.5rem;
  font-size: 0.75rem;
  font-weight: 500;
  transition: background var(--transition-fast);
}

.flip-card__button:hover { background: #374151; }

.flip-card__button--light {
  background: #fff;
  color: #000;
}

.flip-card__button--light:hover { background: #e5e7eb; }

.clamp-2,
.clamp-3 {
  display: -webkit-box;
  -webkit-box-orient: vertical;
  overflow: hidden;
  text-overflow: ellipsis;
}

.clamp-2 { -webkit-line-clamp: 2; }
.clamp-3 { -webkit-line-clamp: 3; }

.pill {
  padding: 0.25rem 0.5rem;
  background: #e5e7eb;
  color: #374151;
  border-radius: 9999px;
  font-size: 0.75rem;
  font-weight: 500;
  max-width: 10rem;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.pill--dark {
  background: #374151;
  color: #fff;
}

/* === Slider === */
.events-slider {
  display: none;
  position: relative;
}

.events-slider__viewport {
  overflow: hidden;
  border-radius: 0.5rem;
}

.events-slider__track {
  display: flex;
  transition: transform 500ms ease-in-out;
}

.events-slider__slide {
  width: 100%;
  flex-shrink: 0;
  padding: 0 0.5rem;
}

.events-slider__arrow {
  position: absolute;
  top: 45%;
  width: 2.5rem;
  height: 2.5rem;
  background: rgba(0, 0, 0, 0.7);
  color: #fff;
  border: 2px solid #fff;
  font-size: 1.5rem;
}

.events-slider__arrow--prev { left: 0.25rem; }
.events-slider__arrow--next { right: 0.25rem; }

.events-slider__dots {
  display: flex;
  justify-content: center;
  gap: 0.5rem;
  margin-top: 1.5rem;
}

.slider-dot {
  width: 0.75rem;
  height: 0.75rem;
  border: none;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.3);
}

.slider-dot--active { background: #fff; }

@media (max-width: 640px) {
  .events-grid { display: none; }
  .events-slider { display: block; }
  .mc-header__nav { display: none; }
}

@media (min-width: 641px) and (max-width: 1024px) {
  .events-grid { grid-template-columns: repeat(2, 1fr); }
}

/* === Coordinators === */
.coordinators {
  margin-top: 4rem;
  padding-top: 2rem;
  border-top: 1px solid #374151;
  text-align: center;
}

.coordinators__title {
  font-size: 1.25rem;
  margin-bottom: 1.5rem;
}

.coordinators__list {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1.5rem;
}

.coordinators__card {
  padding: 1rem;
  background: var(--page-panel);
  border: 1px solid var(--page-border);
  border-radius: 0.5rem;
}

.coordinators__card a {
  color: var(--text-secondary);
  font-size: 0.875rem;
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: rgba(0, 0, 0, 0.8);
  outline: none;
}

.event-modal {
  position: relative;
  width: 100%;
  max-width: 72rem;
  max-height: 85vh;
  overflow-y: auto;
  padding: 1rem;
  background: #fff;
  color: var(--text-dark);
  border-radius: 0.5rem;
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
}

.event-modal .mc-close-btn {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
}

.event-modal__body {
  display: flex;
  gap: 1.5rem;
}

.event-modal__main,
.event-modal__rules {
  flex: 1;
}

.event-modal__rules {
  border-left: 1px solid #e5e7eb;
  padding-left: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.event-modal__poster {
  height: 48rem;
  max-height: 60vh;
  margin-bottom: 0.75rem;
  border-radius: 0.5rem;
  overflow: hidden;
  background: #f3f4f6;
}

.event-modal__poster img {
  width: 100%;
  height: 100%;
  object-fit: contain;
}

.event-modal__title {
  font-size: 1.125rem;
  margin-bottom: 0.5rem;
}

.event-modal__text {
  font-size: 0.875rem;
  color: #4b5563;
  margin-bottom: 1rem;
}

.event-modal__register {
  width: 100%;
  padding: 0.5rem 1rem;
  background: #1f2937;
  color: #fff;
  border: none;
  border-radius: 0.5rem;
}

.event-modal__register:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

@media (max-width: 1024px) {
  .event-modal__body { flex-direction: column; }
  .event-modal__rules { border-left: none; padding-left: 0; }
}

.rule-block {
  padding: 0.75rem;
  border-radius: 0.5rem;
  border: 1px solid;
  font-size: 0.75rem;
}

.rule-block h5 {
  font-size: 0.875rem;
  margin-bottom: 0.25rem;
}

.rule-block ul { list-style: none; }

.rule-block--format { background: #eff6ff; border-color: #bfdbfe; color: #2563eb; }
.rule-block--criteria { background: #f0fdf4; border-color: #bbf7d0; color: #16a34a; }
.rule-block--general { background: #f9fafb; border-color: #e5e7eb; color: #4b5563; }
.rule-block--notice { background: #fefce8; border-color: #fde68a; color: #a16207; }

/* === Links Page === */
.links-page {
  min-height: 100vh;
  background: var(--page-bg);
}

.links-page__main {
  max-width: 56rem;
  margin: 0 auto;
  padding: 4rem 1.5rem;
}

.links-page__intro {
  text-align: center;
  margin-bottom: 3rem;
}

.links-page__intro h1 { font-size: 3rem; margin-bottom: 1.5rem; }
.links-page__intro p { color: var(--text-secondary); }

.links-list {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 1.5rem;
  background: rgba(31, 41, 55, 0.3);
  border: 1px solid var(--page-border);
  border-radius: 0.5rem;
}

.links-list__row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem;
  background: rgba(55, 65, 81, 0.5);
  border: 1px solid var(--page-border);
  border-radius: 0.5rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.links-list__row:hover { background: rgba(55, 65, 81, 0.7); }

.links-list__row--disabled {
  opacity: 0.5;
  cursor: default;
}

.links-list__label {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.links-list__label p {
  color: var(--text-muted);
  font-size: 0.875rem;
}

.links-list__badge {
  color: var(--text-muted);
  font-size: 0.875rem;
}

/* === Block Components === */
.mc-button {
  padding: 0.5rem 1rem;
  font-family: var(--font-mono);
  font-weight: 700;
  color: var(--mc-text);
  background: linear-gradient(135deg, var(--mc-light), var(--mc-base));
  border: 4px solid;
  border-color: var(--mc-highlight) var(--mc-border) var(--mc-border) var(--mc-highlight);
  image-rendering: pixelated;
  transition: transform 100ms ease;
}

.mc-button:hover:not(:disabled) { transform: translateY(-2px); }
.mc-button:active:not(:disabled) { transform: translateY(1px); }

.mc-button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.mc-button--small { padding: 0.25rem 0.5rem; font-size: 0.75rem; }
.mc-button--regular { font-size: 0.875rem; }
.mc-button--wide { width: 100%; }

.mc-icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2rem;
  height: 2rem;
  background: #78716c;
  color: #fff;
  border: 2px solid;
  border-color: #a8a29e #44403c #44403c #a8a29e;
  font-weight: 700;
}

.mc-window {
  background: var(--mc-window);
  color: var(--mc-text);
  border: 4px solid;
  border-color: var(--mc-highlight) var(--mc-border) var(--mc-border) var(--mc-highlight);
  box-shadow: 0 8px 0 rgba(0, 0, 0, 0.3);
}

.mc-window__titlebar {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.5rem 0.75rem;
  background: linear-gradient(135deg, var(--mc-light), var(--mc-base));
  border-bottom: 4px solid var(--mc-border);
  font-weight: 700;
}

.mc-window__body { padding: 1rem; }

.mc-card {
  padding: 1rem;
  background: var(--mc-panel);
  color: #fff;
  border: 4px solid var(--mc-border);
}

.mc-card--default { box-shadow: 0 6px 0 rgba(0, 0, 0, 0.3); }
.mc-card--elevated { box-shadow: 0 12px 0 rgba(0, 0, 0, 0.4); transition: transform var(--transition-fast); }
.mc-card--elevated:hover { transform: translateY(-4px); }
.mc-card--flat { box-shadow: none; }

.mc-card__header {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.75rem;
}

.mc-slot {
  position: relative;
  width: 64px;
  height: 64px;
  display: flex;
  align-items: center;
  justify-content: center;
  background: #8b8b8b;
  border: 3px solid;
  border-color: #373737 #ffffff #ffffff #373737;
  font-size: 1.75rem;
}

.mc-slot:hover { background: #a0a0a0; }

.mc-slot__count {
  position: absolute;
  right: 4px;
  bottom: 2px;
  color: #fff;
  font-size: 0.75rem;
  font-weight: 700;
  text-shadow: 2px 2px 0 #3f3f3f;
}

.mc-inventory {
  display: grid;
  gap: 2px;
  padding: 0.5rem;
  background: #c6c6c6;
  border: 4px solid;
  border-color: #ffffff #555555 #555555 #ffffff;
  width: max-content;
}

.mc-progress {
  height: 1.25rem;
  margin: 0.25rem 0;
  background: #1f2937;
  border: 3px solid;
  border-color: #111827 #6b7280 #6b7280 #111827;
}

.mc-progress__fill {
  height: 100%;
  transition: width var(--transition-normal);
}

.mc-progress__fill--red { background: #ef4444; }
.mc-progress__fill--green { background: #22c55e; }
.mc-progress__fill--blue { background: #3b82f6; }
.mc-progress__fill--orange { background: #f97316; }
.mc-progress__fill--purple { background: #a855f7; }

.mc-bubble {
  display: inline-block;
  margin: 0.25rem;
  color: var(--mc-text);
  background: linear-gradient(135deg, var(--mc-light), var(--mc-base));
  border: 3px solid var(--mc-border);
  font-weight: 700;
}

.mc-bubble--sm { padding: 0.25rem 0.5rem; font-size: 0.75rem; }
.mc-bubble--md { padding: 0.5rem 0.75rem; font-size: 0.875rem; }
.mc-bubble--lg { padding: 0.75rem 1rem; font-size: 1rem; }
.mc-bubble--clickable { cursor: pointer; }
.mc-bubble--floating { animation: bubble-float 2s ease-in-out infinite; }

@keyframes bubble-float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-6px); }
}

.mc-background {
  position: relative;
  min-height: 100vh;
}

.mc-background__particles {
  position: fixed;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
}

.mc-particle {
  position: absolute;
  width: 8px;
  height: 8px;
  background: var(--mc-highlight, #fff);
  opacity: 0.4;
  animation-name: particle-drift;
  animation-iteration-count: infinite;
  animation-timing-function: ease-in-out;
}

@keyframes particle-drift {
  0%, 100% { transform: translateY(0); opacity: 0.2; }
  50% { transform: translateY(-30px); opacity: 0.6; }
}

.mc-background__content { position: relative; }

.mc-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 1.5rem;
  background: var(--mc-panel);
  border: 4px solid var(--mc-border);
}

.mc-field {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.mc-field__label {
  font-weight: 700;
  font-size: 0.875rem;
}

.mc-input {
  padding: 0.5rem 0.75rem;
  font-family: var(--font-mono);
  background: #1c1917;
  color: #fff;
  border: 3px solid;
  border-color: #0c0a09 #57534e #57534e #0c0a09;
  outline: none;
}

.mc-input:focus { border-color: var(--mc-highlight); }
.mc-input--textarea { resize: vertical; }

.mc-gallery {
  position: relative;
  max-width: 42rem;
  min-height: 400px;
  margin: 0 auto;
  padding: 1rem;
  background: linear-gradient(135deg, var(--mc-light), var(--mc-base));
  border: 6px solid;
  border-color: var(--mc-highlight) var(--mc-border) var(--mc-border) var(--mc-highlight);
}

.mc-gallery__header { text-align: center; margin-bottom: 1rem; }

.mc-gallery__dots {
  display: flex;
  justify-content: center;
  gap: 0.5rem;
  margin-top: 0.5rem;
}

.mc-dot {
  width: 0.75rem;
  height: 0.75rem;
  background: #9ca3af;
  border: 2px solid #000;
}

.mc-dot--active { background: #fff; }

.mc-gallery__frame {
  position: relative;
  height: 16rem;
  margin-bottom: 1rem;
  background: #1f2937;
  border: 4px solid #000;
  overflow: hidden;
}

.mc-gallery__image {
  width: 100%;
  height: 100%;
  object-fit: cover;
  animation: slide-in 300ms ease;
}

@keyframes slide-in {
  from { opacity: 0; transform: translateX(100px); }
  to { opacity: 1; transform: translateX(0); }
}

.mc-gallery__arrow {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  padding: 0.25rem 0.75rem;
  background: rgba(0, 0, 0, 0.7);
  color: #fff;
  border: 2px solid #fff;
  font-size: 1.25rem;
}

.mc-gallery__arrow--prev { left: 0.5rem; }
.mc-gallery__arrow--next { right: 0.5rem; }

.mc-gallery__caption {
  padding: 0.75rem;
  text-align: center;
  color: #fff;
  background: rgba(0, 0, 0, 0.3);
  border: 2px solid #000;
  font-weight: 700;
  font-size: 0.875rem;
}

.mc-gallery__counter {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  padding: 0.25rem 0.5rem;
  color: #fff;
  background: rgba(0, 0, 0, 0.7);
  border: 2px solid #fff;
  font-size: 0.75rem;
  font-weight: 700;
}

.mc-worlds { max-width: 42rem; margin: 0 auto; }
.mc-worlds__list { display: flex; flex-direction: column; gap: 0.25rem; margin: 0.5rem 0; }

.mc-world {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.5rem;
  background: #e5e7eb;
  border: 2px solid #4b5563;
  cursor: pointer;
}

.mc-world:hover { background: #d1d5db; }
.mc-world--selected { border-color: var(--mc-highlight); outline: 2px solid var(--mc-base); }
.mc-world__info { display: flex; align-items: center; gap: 0.75rem; }
.mc-world__thumb { width: 2rem; height: 2rem; background: var(--mc-base); border: 1px solid #4b5563; }
.mc-world__name { font-weight: 700; font-size: 0.875rem; }
.mc-world__mode,
.mc-world__meta { font-size: 0.75rem; color: #4b5563; }
.mc-world__meta { text-align: right; }

.mc-worlds__tabs {
  display: flex;
  gap: 0.5rem;
  padding-top: 0.5rem;
  border-top: 2px solid #4b5563;
}

.mc-worlds__tabs .mc-button { flex: 1; }

.mc-showcase-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
  gap: 1rem;
}

.mc-showcase-grid__item .mc-text { margin-bottom: 0.75rem; font-size: 0.875rem; }

.mc-biome-picker {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.5rem;
}

/* === Showcase Page === */
.showcase {
  max-width: 72rem;
  margin: 0 auto;
  padding: 2rem 1.5rem 4rem;
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.showcase__header {
  text-align: center;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.showcase__grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(20rem, 1fr));
  gap: 1.5rem;
}

.showcase__row { display: flex; gap: 0.5rem; }
.showcase__section h2 { margin-bottom: 1rem; }
"#;
