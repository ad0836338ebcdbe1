//! HTML rendering for the landing page.
//!
//! Produces a self-contained Tailwind page. All text content is escaped.

use super::content::{InfographicCard, LandingPage, NavLink};

/// Escapes text for use in HTML element content and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn render_nav_item(link: &NavLink) -> String {
    format!(
        r#"            <li><a href="{href}" class="text-gray-600 hover:text-teal-600">{label}</a></li>"#,
        href = escape_html(&link.href),
        label = escape_html(&link.label),
    )
}

fn render_footer_link(link: &NavLink) -> String {
    format!(
        r#"        <a href="{href}" class="hover:text-teal-600">{label}</a>"#,
        href = escape_html(&link.href),
        label = escape_html(&link.label),
    )
}

fn render_infographic(card: &InfographicCard) -> String {
    format!(
        r#"        <article class="flex gap-4 bg-white rounded-lg shadow p-4">
          <img src="{image}" alt="Infografis" class="w-24 h-24 rounded object-cover">
          <div>
            <h3 class="font-semibold text-gray-800">{title}</h3>
            <p class="text-sm text-gray-500">{date}</p>
          </div>
        </article>"#,
        image = escape_html(&card.image),
        title = escape_html(&card.title),
        date = escape_html(&card.date_label()),
    )
}

fn join_lines(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join("\n")
}

/// Renders the full landing page document.
pub fn render_landing_page(page: &LandingPage) -> String {
    let activity = &page.recent_activity;

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{title}</title>
  <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-50 overflow-x-hidden">

  <header class="bg-white shadow-sm fixed top-0 left-0 w-full z-50">
    <div class="mx-auto max-w-screen-xl px-4 sm:px-6 lg:px-8">
      <div class="flex h-16 items-center justify-between">
        <div class="flex items-center gap-2">
          <img src="{logo}" alt="Logo" class="h-6 w-6 object-contain rounded-full">
          <a class="flex items-center gap-2 text-teal-600 font-bold text-lg" href="#">{brand}</a>
        </div>
        <nav class="hidden md:block">
          <ul class="flex items-center gap-6 text-sm font-medium">
{nav}
          </ul>
        </nav>
        <div class="flex items-center gap-4">
          <button class="text-gray-600 hover:text-gray-800">🔔</button>
          <button class="text-gray-600 hover:text-gray-800">⚙️</button>
        </div>
      </div>
    </div>
  </header>

  <main class="pt-24 pb-16 mx-auto max-w-screen-xl px-4 sm:px-6 lg:px-8">
    <section class="mb-12">
      <h2 class="text-xl font-bold text-gray-900 mb-4">Recent Activities</h2>
      <div class="bg-teal-600 text-white rounded-lg p-4 flex items-center justify-between shadow">
        <div>
          <p class="text-sm">{activity_date}</p>
          <h3 class="text-lg font-semibold">{activity_title}</h3>
          <p class="text-sm">{activity_detail}</p>
        </div>
        <span class="text-2xl">➜</span>
      </div>
    </section>

    <section>
      <h2 class="text-xl font-bold text-gray-900 mb-6">Infografis</h2>
      <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
{infographics}
      </div>
    </section>
  </main>

  <footer class="bg-white border-t mt-12">
    <div class="mx-auto max-w-screen-xl px-4 py-6 sm:px-6 lg:px-8 flex justify-between items-center">
      <p class="text-gray-500 text-sm">{copyright}</p>
      <nav class="flex gap-6 text-sm text-gray-500">
{footer_links}
      </nav>
    </div>
  </footer>

</body>
</html>
"##,
        title = escape_html(&page.title),
        logo = escape_html(&page.logo),
        brand = escape_html(&page.brand),
        nav = join_lines(page.nav.iter().map(render_nav_item)),
        activity_date = escape_html(&activity.date_label()),
        activity_title = escape_html(&activity.title),
        activity_detail = escape_html(&activity.detail),
        infographics = join_lines(page.infographics.iter().map(render_infographic)),
        copyright = escape_html(&page.copyright),
        footer_links = join_lines(page.footer_links.iter().map(render_footer_link)),
    )
}
