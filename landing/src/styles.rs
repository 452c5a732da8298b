//! Stylesheet for the landing page.
//!
//! Dark charcoal ground with gold accents, serif display type and frosted
//! glass panels. Motion values (reveal offsets, parallax, dock slide) are
//! not set here; components write them as inline styles.
//!
//! Breakpoints: `768px` switches the navbar and dock, `1024px` switches the
//! two-column layouts and the review grid/carousel.

/// Complete CSS for the page, injected once by the root component.
pub const SITE_CSS: &str = r#"
:root {
    --gold: #d4af37;
    --gold-dark: #b8962e;
    --gold-light: #f5e0a3;
    --gold-10: rgba(212, 175, 55, 0.1);
    --gold-20: rgba(212, 175, 55, 0.2);
    --gold-60: rgba(212, 175, 55, 0.6);
    --charcoal: #1a1a1a;
    --bg: #0a0a0a;
    --bg-raised: #111111;
    --text: rgba(255, 255, 255, 0.9);
    --text-dim: rgba(255, 255, 255, 0.6);
    --text-faint: rgba(255, 255, 255, 0.35);
    --serif: "Cormorant Garamond", "Playfair Display", Georgia, serif;
    --sans: "Inter", "Helvetica Neue", Arial, sans-serif;
    --radius: 24px;
    --ease: cubic-bezier(0, 0, 0.58, 1);
}

*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: var(--sans);
    -webkit-font-smoothing: antialiased;
    overflow-x: hidden;
}

img { display: block; max-width: 100%; }
a { color: inherit; text-decoration: none; }
button { font: inherit; color: inherit; background: none; border: 0; cursor: pointer; }
button:disabled { cursor: default; }

.container { max-width: 1280px; margin: 0 auto; padding: 0 24px; }
@media (min-width: 1024px) { .container { padding: 0 48px; } }

.text-gold { color: var(--gold); }
.text-gold-dim { color: var(--gold-60); }
.muted { color: var(--text-faint); }
em { font-style: italic; }

.icon { width: 24px; height: 24px; flex-shrink: 0; }
.icon-lg { width: 32px; height: 32px; }
.icon-sm { width: 16px; height: 16px; flex-shrink: 0; }
.icon-xs { width: 12px; height: 12px; flex-shrink: 0; }

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 12px;
    border-radius: 999px;
    font-size: 13px;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    white-space: nowrap;
    transition: box-shadow 0.5s var(--ease), transform 0.5s var(--ease), border-color 0.5s, color 0.5s;
}
.btn-sm { padding: 10px 28px; letter-spacing: 0.15em; }
.btn-lg { padding: 16px 40px; }
.btn-gold {
    background: linear-gradient(90deg, var(--gold), var(--gold-dark));
    color: var(--charcoal);
    font-weight: 600;
    border: 1px solid rgba(255, 255, 255, 0.15);
}
.btn-gold:hover { box-shadow: 0 0 30px rgba(212, 175, 55, 0.45); transform: scale(1.05); }
.btn-ghost {
    border: 1px solid rgba(255, 255, 255, 0.2);
    background: rgba(255, 255, 255, 0.05);
    color: rgba(255, 255, 255, 0.8);
    backdrop-filter: blur(8px);
}
.btn-ghost:hover { border-color: var(--gold-60); color: var(--gold); }
.btn-outline { border: 1px solid var(--gold-20); padding: 16px 32px; color: var(--gold); }
.btn-outline:hover { background: var(--gold); color: var(--charcoal); }
.btn-outline:hover .icon-sm { color: var(--charcoal); }

/* Navbar */
.nav {
    position: fixed;
    inset: 0 0 auto 0;
    z-index: 40;
    background: transparent;
    transition: background 0.7s var(--ease), backdrop-filter 0.7s, border-color 0.7s;
    border-bottom: 1px solid transparent;
}
.nav.scrolled {
    background: rgba(0, 0, 0, 0.5);
    backdrop-filter: blur(24px);
    border-bottom-color: var(--gold-10);
    box-shadow: 0 4px 30px rgba(0, 0, 0, 0.3);
}
.nav-inner { display: flex; align-items: center; justify-content: space-between; gap: 16px; height: 80px; }
.nav-brand { display: flex; align-items: center; gap: 12px; color: var(--gold); text-align: left; }
.nav-brand-text { font-family: var(--serif); letter-spacing: 0.15em; line-height: 1.2; }
.nav-brand-sub { display: none; color: rgba(212, 175, 55, 0.75); margin-left: 6px; }
.nav-links { display: none; align-items: center; gap: 40px; }
.nav-link {
    font-size: 13px;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    color: rgba(255, 255, 255, 0.7);
    transition: color 0.5s;
}
.nav-link:hover { color: var(--gold); }
.nav-toggle { padding: 8px; color: rgba(255, 255, 255, 0.8); }
.nav-mobile {
    display: none;
    flex-direction: column;
    gap: 24px;
    padding: 32px 24px;
    background: rgba(0, 0, 0, 0.6);
    backdrop-filter: blur(40px);
    border-top: 1px solid var(--gold-10);
}
.nav-mobile.open { display: flex; }
.nav-link.mobile { text-align: left; }
@media (min-width: 768px) {
    .nav-links { display: flex; }
    .nav-brand-sub { display: inline; }
    .nav-toggle, .nav-mobile, .nav-mobile.open { display: none; }
}

/* Hero */
.hero { position: relative; height: 100vh; overflow: hidden; }
.hero-layer { position: absolute; inset: 0; will-change: transform; }
.hero-image { width: 100%; height: 130%; object-fit: cover; will-change: transform; }
.hero-shade {
    position: absolute;
    inset: 0;
    background:
        linear-gradient(to bottom, rgba(0, 0, 0, 0.7), rgba(0, 0, 0, 0.4) 50%, var(--bg)),
        linear-gradient(to right, rgba(0, 0, 0, 0.4), transparent);
    box-shadow: inset 0 0 150px 60px rgba(0, 0, 0, 0.6);
}
.hero-content {
    position: relative;
    z-index: 10;
    height: 100%;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    padding: 0 24px;
    text-align: center;
}
.hero-eyebrow {
    display: flex;
    align-items: center;
    gap: 16px;
    margin-bottom: 32px;
    color: var(--gold);
    font-size: 12px;
    letter-spacing: 0.4em;
    text-transform: uppercase;
}
.hero-title {
    margin: 0;
    max-width: 64rem;
    font-family: var(--serif);
    font-weight: 400;
    font-size: clamp(2.25rem, 7vw, 6rem);
    line-height: 1.1;
    letter-spacing: 0.04em;
    color: #fff;
}
.hero-tagline {
    margin: 32px 0 0;
    max-width: 36rem;
    color: var(--text-dim);
    font-size: 18px;
    font-weight: 300;
    letter-spacing: 0.08em;
}
.hero-actions { margin-top: 48px; display: flex; flex-direction: column; gap: 20px; }
@media (min-width: 640px) { .hero-actions { flex-direction: row; } }
.hero-cue { position: absolute; bottom: 48px; left: 50%; margin-left: -0.5px; }
.hero-cue-line {
    width: 1px;
    height: 64px;
    background: linear-gradient(to bottom, var(--gold-60), transparent);
    animation: cue 2.5s ease-in-out infinite;
}
@keyframes cue { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(8px); } }

/* Section scaffolding */
.section { position: relative; padding: 128px 0; }
@media (min-width: 1024px) { .section { padding: 192px 0; } }
.section-head { text-align: center; margin-bottom: 80px; }
.section-label { display: flex; align-items: center; gap: 16px; margin-bottom: 24px; }
.section-head .section-label { justify-content: center; }
.section-label-text { color: rgba(212, 175, 55, 0.8); font-size: 12px; letter-spacing: 0.35em; text-transform: uppercase; }
.rule { display: block; height: 1px; width: 32px; }
.rule.wide { width: 64px; }
.rule-left { background: linear-gradient(to right, transparent, var(--gold-60)); }
.rule-right { background: linear-gradient(to left, transparent, var(--gold-60)); }
.section-title {
    margin: 0 0 32px;
    font-family: var(--serif);
    font-weight: 400;
    font-size: clamp(1.875rem, 4vw, 3rem);
    line-height: 1.2;
    letter-spacing: 0.04em;
    color: #fff;
}
.section-subtitle { margin-top: 24px; color: rgba(255, 255, 255, 0.4); font-size: 13px; letter-spacing: 0.15em; text-transform: uppercase; }
.prose p, .prose-p { color: var(--text-dim); line-height: 1.8; font-weight: 300; letter-spacing: 0.02em; }
.two-col { display: grid; gap: 64px; align-items: center; }
@media (min-width: 1024px) { .two-col { grid-template-columns: 1fr 1fr; gap: 96px; } }

.glass-card {
    background: rgba(255, 255, 255, 0.03);
    border: 1px solid var(--gold-10);
    border-radius: var(--radius);
    backdrop-filter: blur(20px);
    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.4), inset 0 1px 0 rgba(255, 255, 255, 0.05);
}

/* About */
.about { background: linear-gradient(to bottom, var(--bg), #0f0f0f, var(--bg)); }
.stats { margin-top: 40px; padding: 24px; display: inline-flex; align-items: center; gap: 32px; flex-wrap: wrap; }
.stat { text-align: center; }
.stat-value { display: block; font-family: var(--serif); font-size: 30px; color: var(--gold); }
.stat-label { display: block; margin-top: 4px; font-size: 12px; letter-spacing: 0.2em; text-transform: uppercase; color: rgba(255, 255, 255, 0.4); }
.stat-divider { width: 1px; height: 48px; background: var(--gold-20); }
.framed { position: relative; }
.photo { position: relative; overflow: hidden; border-radius: var(--radius); }
.photo img { width: 100%; aspect-ratio: 4 / 3; object-fit: cover; transition: transform 1s var(--ease); }
.photo:hover img { transform: scale(1.05); }
.photo-shade { position: absolute; inset: 0; background: linear-gradient(to top, rgba(10, 10, 10, 0.75), transparent 60%); }
.frame-corner { position: absolute; width: 96px; height: 96px; border: 1px solid var(--gold-20); border-radius: var(--radius); pointer-events: none; }
.frame-corner.bottom-left { bottom: -16px; left: -16px; }
.frame-corner.top-right { top: -16px; right: -16px; }

/* Experience */
.experience { background: linear-gradient(to bottom, var(--bg), var(--bg-raised), var(--bg)); }
.experience-list { display: flex; flex-direction: column; gap: 96px; }
@media (min-width: 1024px) {
    .experience-list { gap: 144px; }
    .experience-row.flipped .experience-photo { order: 2; }
}
.photo-badge { position: absolute; bottom: 24px; left: 24px; }
.badge { display: inline-flex; align-items: center; gap: 8px; padding: 8px 16px; border-radius: 999px; font-size: 12px; letter-spacing: 0.25em; text-transform: uppercase; color: rgba(212, 175, 55, 0.9); }
.experience-title {
    margin: 0 0 24px;
    font-family: var(--serif);
    font-weight: 400;
    font-size: clamp(1.5rem, 3vw, 2.25rem);
    letter-spacing: 0.04em;
    background: linear-gradient(90deg, var(--gold), var(--gold-light));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}
.chips { display: flex; flex-wrap: wrap; gap: 12px; margin-top: 32px; }
.chip { padding: 10px 20px; border-radius: 999px; border: 1px solid var(--gold-20); background: rgba(212, 175, 55, 0.05); color: rgba(212, 175, 55, 0.8); font-size: 12px; letter-spacing: 0.15em; text-transform: uppercase; }

/* Reviews */
.review-grid { display: none; }
.review-carousel { display: block; }
@media (min-width: 1024px) {
    .review-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 32px; }
    .review-featured-slot { grid-row: span 2; display: flex; }
    .review-featured-slot > .review-card { flex: 1; }
    .review-carousel { display: none; }
}
.review-card { position: relative; display: flex; flex-direction: column; padding: 32px; height: 100%; }
.review-card.featured { padding: 40px; border-color: var(--gold-20); }
.review-quote { position: absolute; top: 24px; right: 24px; color: rgba(212, 175, 55, 0.15); }
.review-meta { display: flex; align-items: center; justify-content: space-between; gap: 16px; margin-bottom: 20px; }
.stars { display: inline-flex; gap: 4px; }
.star { color: rgba(255, 255, 255, 0.12); }
.star.filled, .icon-sm.star { color: var(--gold); }
.review-source { display: flex; align-items: center; gap: 8px; font-size: 10px; letter-spacing: 0.15em; text-transform: uppercase; color: rgba(255, 255, 255, 0.3); }
.review-text { margin: 0 0 24px; color: rgba(255, 255, 255, 0.7); font-style: italic; font-weight: 300; line-height: 1.8; }
.review-card.featured .review-text { font-size: 18px; }
.review-footer { margin-top: auto; display: flex; align-items: center; justify-content: space-between; gap: 12px; }
.review-author { color: #fff; font-weight: 600; font-size: 14px; letter-spacing: 0.1em; }
.verified { font-size: 9px; letter-spacing: 0.2em; text-transform: uppercase; color: var(--gold-60); border: 1px solid var(--gold-20); padding: 4px 12px; border-radius: 999px; background: rgba(212, 175, 55, 0.05); white-space: nowrap; }
.carousel-strip {
    display: flex;
    gap: 20px;
    overflow-x: auto;
    scroll-snap-type: x mandatory;
    padding-bottom: 16px;
    scrollbar-width: none;
}
.carousel-strip::-webkit-scrollbar { display: none; }
.carousel-item { flex-shrink: 0; width: 85vw; scroll-snap-align: center; }
@media (min-width: 640px) { .carousel-item { width: 70vw; } }
.carousel-controls { display: flex; align-items: center; justify-content: center; gap: 16px; margin-top: 32px; }
.carousel-arrow {
    width: 48px;
    height: 48px;
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 999px;
    border: 1px solid var(--gold-20);
    color: var(--gold);
    transition: opacity 0.3s, background 0.3s;
}
.carousel-arrow:hover:not(:disabled) { background: var(--gold-10); }
.carousel-arrow:disabled { opacity: 0.3; }
.aggregate { margin-top: 64px; text-align: center; }
.aggregate-badge { display: inline-flex; align-items: center; gap: 24px; padding: 16px 32px; border-radius: 999px; }
.aggregate-score { display: flex; align-items: center; gap: 8px; }
.aggregate-value { margin-left: 8px; font-family: var(--serif); font-size: 20px; color: var(--gold); }
.aggregate-sources { color: rgba(255, 255, 255, 0.5); font-size: 12px; letter-spacing: 0.15em; text-transform: uppercase; }
.aggregate-badge .stat-divider { height: 32px; }

/* Location */
.location { background: linear-gradient(to bottom, var(--bg), #0e0e0e, var(--bg)); }
.map-frame { position: relative; width: 100%; aspect-ratio: 4 / 3; overflow: hidden; border-radius: var(--radius); background: var(--charcoal); }
.map-frame iframe { width: 100%; height: 100%; border: 0; filter: grayscale(1) contrast(1.25); opacity: 0.6; }
.map-border { position: absolute; inset: 0; pointer-events: none; border: 1px solid var(--gold-10); border-radius: var(--radius); box-shadow: inset 0 0 60px 15px rgba(0, 0, 0, 0.4); }
.map-cta { position: absolute; bottom: 24px; left: 50%; transform: translateX(-50%); padding: 14px 32px; }
.map-cta:hover { transform: translateX(-50%) scale(1.05); }
.location-details { display: flex; flex-direction: column; gap: 32px; }
.concierge { padding: 32px; }
.concierge-head { display: flex; align-items: center; gap: 12px; margin-bottom: 16px; }
.concierge-head h3 { margin: 0; font-family: var(--serif); font-weight: 400; font-size: 20px; letter-spacing: 0.1em; color: var(--gold); }
.concierge p { margin: 0; color: rgba(255, 255, 255, 0.5); font-size: 14px; line-height: 1.7; }
.facts { display: flex; flex-direction: column; gap: 24px; padding: 0 8px; }
.fact { display: flex; align-items: flex-start; gap: 16px; }
.fact-icon { width: 40px; height: 40px; flex-shrink: 0; display: flex; align-items: center; justify-content: center; border-radius: 999px; background: var(--gold-10); color: rgba(212, 175, 55, 0.7); }
.fact-label { display: block; margin-bottom: 4px; font-size: 12px; letter-spacing: 0.2em; text-transform: uppercase; color: rgba(212, 175, 55, 0.5); }
.fact-value { margin: 0; color: rgba(255, 255, 255, 0.7); font-size: 14px; line-height: 1.7; }
.address-line { display: block; }
.link { transition: color 0.3s; }
.link:hover { color: var(--gold); }
.navigate-card { margin: 0 8px; }
.navigate { display: flex; align-items: center; gap: 16px; padding: 20px 24px; transition: border-color 0.5s; }
.navigate-card:hover .navigate { border-color: var(--gold-20); }
.navigate-icon { width: 48px; height: 48px; display: flex; align-items: center; justify-content: center; border-radius: 999px; background: linear-gradient(135deg, var(--gold-20), rgba(212, 175, 55, 0.05)); }
.navigate-title { display: block; font-family: var(--serif); font-size: 18px; letter-spacing: 0.08em; color: var(--gold); }
.navigate-sub { color: rgba(255, 255, 255, 0.4); font-size: 12px; letter-spacing: 0.05em; }

/* Footer */
.footer { position: relative; padding: 64px 0 112px; }
@media (min-width: 768px) { .footer { padding-bottom: 64px; } }
.footer-fade { position: absolute; inset: 0 0 auto 0; height: 128px; background: linear-gradient(to bottom, transparent, #000); pointer-events: none; }
.footer-row { position: relative; display: flex; flex-direction: column; align-items: center; justify-content: space-between; gap: 32px; }
@media (min-width: 768px) { .footer-row { flex-direction: row; } }
.footer-brand { display: flex; align-items: center; gap: 12px; font-family: var(--serif); font-size: 14px; letter-spacing: 0.12em; color: var(--gold-60); line-height: 1.3; }
.footer-brand-sub { font-size: 12px; letter-spacing: 0.08em; color: rgba(212, 175, 55, 0.4); }
.footer-tagline { margin: 0; color: rgba(255, 255, 255, 0.3); font-size: 12px; letter-spacing: 0.15em; text-align: center; }
.footer-copy { margin: 0; color: rgba(255, 255, 255, 0.2); font-size: 12px; letter-spacing: 0.05em; }
.footer-credit { margin-top: 40px; display: flex; flex-direction: column; align-items: center; gap: 12px; }
.rule-center { height: 1px; width: 80px; background: linear-gradient(to right, transparent, rgba(212, 175, 55, 0.4), transparent); }
.credit-link { display: inline-flex; align-items: center; gap: 8px; font-size: 11px; letter-spacing: 0.12em; color: rgba(255, 255, 255, 0.35); }
.credit-link:hover .text-gold-dim { color: var(--gold); }

/* Quick-action dock */
.dock { position: fixed; bottom: 24px; left: 50%; z-index: 50; will-change: transform, opacity; }
@media (min-width: 768px) { .dock { display: none; } }
.dock-bar {
    display: flex;
    align-items: center;
    gap: 12px;
    padding: 12px 20px;
    border-radius: 999px;
    background: rgba(0, 0, 0, 0.7);
    backdrop-filter: blur(40px);
    border: 1px solid var(--gold-20);
    box-shadow: 0 8px 40px rgba(0, 0, 0, 0.6), 0 0 0 1px rgba(212, 175, 55, 0.08);
}
.dock-action {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 4px;
    padding: 8px 16px;
    border-radius: 999px;
    color: var(--gold);
    transition: background 0.3s, color 0.3s;
}
.dock-action span { font-size: 9px; letter-spacing: 0.2em; text-transform: uppercase; color: rgba(212, 175, 55, 0.7); }
.dock-action:hover { background: var(--gold); color: var(--charcoal); }
.dock-action:hover span { color: var(--charcoal); }
"#;
