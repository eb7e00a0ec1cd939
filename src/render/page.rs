//! Page Shell
//!
//! Assembles the full dashboard page: navigation shell plus the home, HSR,
//! and Genshin sections. Sections are filled from independently-loaded data;
//! a section whose data is absent renders as an empty region, never as an
//! error page.

use chrono::Utc;

use super::{cards, timeline as timeline_render};
use crate::profile::StatsDocument;
use crate::timeline::Timeline;

/// Render the dashboard page.
///
/// `profile` and `timeline` are each `None` when their fetch or parse
/// failed; the two are never coupled, so one section can render while the
/// other stays empty.
pub fn render_page(
    profile: Option<&StatsDocument>,
    timeline: Option<&Timeline>,
    icon_base: &str,
) -> String {
    let hsr = profile.and_then(|doc| doc.hsr.as_ref());
    let genshin = profile.and_then(|doc| doc.genshin.as_ref());

    let slot = |section: Option<String>| section.unwrap_or_default();

    PAGE_HTML
        .replace(
            "{{HOME_HSR}}",
            &slot(hsr.map(cards::home_hsr)),
        )
        .replace(
            "{{HOME_GENSHIN}}",
            &slot(genshin.map(cards::home_genshin)),
        )
        .replace(
            "{{HOME_LATEST_PULL}}",
            &slot(timeline.map(|t| timeline_render::latest_pull_card(t, icon_base))),
        )
        .replace(
            "{{HSR_PROFILE}}",
            &slot(hsr.map(cards::hsr_profile)),
        )
        .replace(
            "{{TRAILBLAZE_CARD}}",
            &slot(hsr.map(|p| cards::daily_status_card(&p.daily_status()))),
        )
        .replace(
            "{{MOC_CONTENT}}",
            &slot(hsr.map(|p| cards::moc_grid(p, icon_base))),
        )
        .replace(
            "{{TIMELINE_GRID}}",
            &slot(timeline.map(|t| timeline_render::timeline_grid(t, icon_base))),
        )
        .replace(
            "{{GENSHIN_PROFILE}}",
            &slot(genshin.map(cards::genshin_profile)),
        )
        .replace(
            "{{GENSHIN_NOTES}}",
            &slot(genshin.map(|p| cards::daily_status_card(&p.daily_status()))),
        )
        .replace(
            "{{GENERATED_AT}}",
            &Utc::now().format("%Y-%m-%d %H:%M UTC").to_string(),
        )
}

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Pullboard</title>
  <style>
    :root {
      --bg: #12131a;
      --card: #1d1f2b;
      --ink: #e8e6f0;
      --muted: #8d8a9e;
      --accent: #ffd666;
      --win: #57bb8a;
      --lose: #e67c73;
      --guaranteed: #ffd666;
      --unknown: #6b6b76;
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Trebuchet MS", sans-serif;
      padding: 24px 16px 48px;
    }

    nav {
      display: flex;
      gap: 8px;
      justify-content: center;
      margin-bottom: 28px;
    }

    nav button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--card);
      color: var(--muted);
    }

    nav button.active { background: var(--accent); color: #1a1406; }

    .page { display: none; max-width: 960px; margin: 0 auto; }
    .page.active { display: block; }

    .card-row {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
      gap: 16px;
      margin-bottom: 24px;
    }

    .card, .mini-card, .moc-card {
      background: var(--card);
      border-radius: 16px;
      padding: 20px;
    }

    .avatar { width: 84px; height: 84px; margin: 0 auto 10px; }
    .avatar img { width: 100%; height: 100%; border-radius: 50%; object-fit: cover; }

    .nickname { font-size: 1.2rem; font-weight: 600; text-align: center; }
    .server-level { color: var(--muted); text-align: center; margin-bottom: 12px; }

    .stats { display: flex; flex-wrap: wrap; gap: 10px; justify-content: center; }
    .stat { text-align: center; font-size: 0.85rem; color: var(--muted); }
    .stat strong { color: var(--ink); font-size: 1.05rem; }

    .mini-card h3 { margin: 0 0 10px; }
    .mini-card .line { margin: 4px 0; color: var(--muted); }
    .mini-card .line strong { color: var(--ink); }

    .moc-header { display: flex; justify-content: space-between; margin-bottom: 12px; }
    .moc-floor { font-weight: 600; }
    .moc-cycles { color: var(--muted); }
    .moc-node-row { display: flex; gap: 16px; }
    .moc-node { flex: 1; }
    .moc-node-title { color: var(--muted); font-size: 0.85rem; margin-bottom: 6px; }
    .moc-avatars { display: flex; gap: 8px; }
    .moc-avatar { position: relative; width: 48px; height: 48px; }
    .moc-avatar img { width: 100%; height: 100%; border-radius: 8px; }
    .eidolon-badge {
      position: absolute; right: -4px; bottom: -4px;
      background: var(--accent); color: #1a1406;
      font-size: 0.7rem; font-weight: 700;
      border-radius: 6px; padding: 1px 4px;
    }

    .timeline-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(72px, 1fr));
      gap: 12px;
    }

    .pull-cell {
      position: relative;
      background: var(--card);
      border-radius: 10px;
      border: 2px solid var(--unknown);
      padding: 6px;
      text-align: center;
    }

    .pull-cell.win { border-color: var(--win); }
    .pull-cell.lose { border-color: var(--lose); }
    .pull-cell.guaranteed { border-color: var(--guaranteed); }

    .pull-cell img { width: 56px; height: 56px; border-radius: 8px; }

    .pity-badge {
      position: absolute; top: 2px; right: 2px;
      color: #1a1406; font-size: 0.7rem; font-weight: 700;
      border-radius: 6px; padding: 1px 4px;
    }

    .outcome-label { font-size: 0.7rem; font-weight: 600; margin-top: 2px; }
    .outcome-label.win { color: var(--win); }
    .outcome-label.lose { color: var(--lose); }
    .outcome-label.guaranteed { color: var(--guaranteed); }

    .latest-name { font-size: 1.1rem; font-weight: 600; text-align: center; margin: 6px 0; }
    .latest-meta { display: flex; gap: 16px; justify-content: center; color: var(--muted); }
    .latest-meta p { margin: 0; }

    h2 { text-align: center; margin: 0 0 10px; }

    footer { text-align: center; color: var(--muted); font-size: 0.8rem; margin-top: 32px; }
  </style>
</head>
<body>
  <nav>
    <button class="nav-btn active" data-page="home">Home</button>
    <button class="nav-btn" data-page="hsr">Star Rail</button>
    <button class="nav-btn" data-page="genshin">Genshin</button>
  </nav>

  <main>
    <section id="home" class="page active">
      <div class="card-row">
        <div id="home-hsr">{{HOME_HSR}}</div>
        <div id="home-genshin">{{HOME_GENSHIN}}</div>
        <div id="home-latest-pull">{{HOME_LATEST_PULL}}</div>
      </div>
    </section>

    <section id="hsr" class="page">
      <div class="card-row">
        <div id="hsr-profile">{{HSR_PROFILE}}</div>
        <div id="trailblaze-card">{{TRAILBLAZE_CARD}}</div>
      </div>
      <div id="moc-content">{{MOC_CONTENT}}</div>
      <h2>Pull Timeline</h2>
      <div id="pull-timeline" class="timeline-grid">{{TIMELINE_GRID}}</div>
    </section>

    <section id="genshin" class="page">
      <div class="card-row">
        <div id="genshin-profile">{{GENSHIN_PROFILE}}</div>
        <div id="genshin-notes">{{GENSHIN_NOTES}}</div>
      </div>
    </section>
  </main>

  <footer>Rendered {{GENERATED_AT}}</footer>

  <script>
    function showPage(pageId) {
      document.querySelectorAll(".page").forEach((p) => p.classList.remove("active"));
      document.getElementById(pageId).classList.add("active");
      document.querySelectorAll(".nav-btn").forEach((b) => {
        b.classList.toggle("active", b.dataset.page === pageId);
      });
    }

    document.querySelectorAll(".nav-btn").forEach((b) => {
      b.addEventListener("click", () => showPage(b.dataset.page));
    });
  </script>
</body>
</html>
"#;
