//! CSS and security headers for the page.
//!
//! The stylesheet is inlined into `<head>` so the document is a single
//! self-contained file.
//!
//! # Customization
//!
//! ```rust
//! use mindread_page::styles::PAGE_CSS;
//!
//! let my_css = ".insight-item h3 { color: rebeccapurple; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! ```
//!
//! # Features
//!
//! - Soft slate gradient background, zinc palette
//! - Rounded translucent cards with blur and shadow
//! - Two-column row for paired sections at 1024px and up
//! - Automatic dark mode via `prefers-color-scheme`

/// Complete CSS for the page.
pub const PAGE_CSS: &str = r#"
:root {
    --page-from: #f1f5f9;
    --page-via: #ffffff;
    --page-to: #e2e8f0;
    --card-bg: rgba(255, 255, 255, 0.8);
    --card-border: #e4e4e7;
    --text-strong: #09090b;
    --text-main: #18181b;
    --text-muted: #52525b;
    --pill-text: #71717a;
    --radius-card: 1.5rem;
    --font-sans: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
    --container-max: 64rem;
}

@media (prefers-color-scheme: dark) {
    :root {
        --page-from: #18181b;
        --page-via: #000000;
        --page-to: #18181b;
        --card-bg: rgba(24, 24, 27, 0.7);
        --card-border: #27272a;
        --text-strong: #ffffff;
        --text-main: #f4f4f5;
        --text-muted: #a1a1aa;
        --pill-text: #a1a1aa;
    }
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    color: var(--text-main);
}

/* Layout */
.page-frame {
    min-height: 100vh;
    padding: 3rem 1.5rem;
    background: linear-gradient(to bottom right, var(--page-from), var(--page-via), var(--page-to));
}

.page-main {
    margin: 0 auto;
    width: 100%;
    max-width: var(--container-max);
    display: flex;
    flex-direction: column;
    gap: 3rem;
}

.card {
    border: 1px solid var(--card-border);
    border-radius: var(--radius-card);
    background: var(--card-bg);
    backdrop-filter: blur(4px);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    padding: 2rem;
}

/* Header banner */
.page-header {
    padding: 2.5rem;
    border-color: transparent;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1);
}

.page-header > * + * {
    margin-top: 1.5rem;
}

.eyebrow {
    display: inline-flex;
    align-items: center;
    margin: 0;
    padding: 0.25rem 1rem;
    border: 1px solid var(--card-border);
    border-radius: 9999px;
    font-size: 0.875rem;
    font-weight: 500;
    letter-spacing: 0.025em;
    text-transform: uppercase;
    color: var(--pill-text);
}

.page-title {
    margin: 0;
    font-size: 2.25rem;
    font-weight: 600;
    line-height: 1.25;
    letter-spacing: -0.025em;
    color: var(--text-strong);
}

@media (min-width: 640px) {
    .page-title {
        font-size: 3rem;
    }
}

.lead {
    margin: 0;
    font-size: 1.125rem;
    line-height: 1.625;
    color: var(--text-muted);
}

/* Insight sections */
.insight-section {
    transition: box-shadow 150ms ease;
}

.insight-section:hover {
    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -2px rgba(0, 0, 0, 0.1);
}

.insight-section > * + * {
    margin-top: 1.5rem;
}

.section-intro > * + * {
    margin-top: 0.5rem;
}

.section-heading {
    margin: 0;
    font-size: 1.5rem;
    font-weight: 600;
    letter-spacing: -0.025em;
    color: var(--text-strong);
}

.section-subtitle {
    margin: 0;
    font-size: 1rem;
    color: var(--text-muted);
}

.insight-list {
    list-style: none;
    margin: 0;
    padding: 0;
}

.insight-list > li + li {
    margin-top: 1.25rem;
}

.insight-item h3 {
    margin: 0 0 0.375rem;
    font-size: 1.125rem;
    font-weight: 500;
    color: var(--text-strong);
}

.insight-item p {
    margin: 0;
    font-size: 1rem;
    line-height: 1.625;
    color: var(--text-muted);
}

/* Side-by-side row */
.section-pair {
    display: grid;
    gap: 2rem;
}

@media (min-width: 1024px) {
    .section-pair {
        grid-template-columns: repeat(2, minmax(0, 1fr));
    }
}

/* Roadmap */
.roadmap p {
    margin: 0.75rem 0 0;
    font-size: 1rem;
    line-height: 1.625;
    color: var(--text-muted);
}
"#;

/// Content-Security-Policy for the page. It ships no scripts or remote assets.
pub const CSP: &str = "default-src 'none'; style-src 'unsafe-inline'; img-src 'self' data:; base-uri 'none'; form-action 'none';";
