//! Layout components - page shell, headers, cards, navigation, forms

use axum::response::Html;

/// Wraps page content in the full HTML document.
///
/// Loads HTMX and Tailwind from their CDNs and places the navigation bar
/// above the content.
pub fn render_page(title: &str, content: &str) -> Html<String> {
    let title = escape_html(title);
    let nav = nav_bar();

    Html(format!(
        r#"<!DOCTYPE html>
        <html lang="en">
        <head>
            <meta charset="UTF-8">
            <meta name="viewport" content="width=device-width, initial-scale=1.0">
            <title>{title} - Reelscout</title>
            <script src="https://unpkg.com/htmx.org@1.9.3"></script>
            <script src="https://cdn.tailwindcss.com"></script>
            <script>
                tailwind.config = {{
                    theme: {{
                        extend: {{
                            colors: {{
                                'reel': {{
                                    '400': '#fbbf24',
                                    '500': '#f59e0b',
                                    '600': '#d97706',
                                }}
                            }}
                        }}
                    }}
                }}
            </script>
        </head>
        <body class="bg-slate-900 text-white min-h-screen">
            {nav}
            <main class="container mx-auto px-4 py-8">
                {content}
            </main>
        </body>
        </html>"#
    ))
}

/// Renders a page header with title and optional subtitle.
pub fn page_header(title: &str, subtitle: Option<&str>) -> String {
    let title = escape_html(title);
    let subtitle_html = subtitle
        .map(|s| format!(r#"<p class="text-gray-400 mt-2">{}</p>"#, escape_html(s)))
        .unwrap_or_default();

    format!(
        r#"<div class="mb-8">
            <h1 class="text-3xl font-bold text-white">{title}</h1>
            {subtitle_html}
        </div>"#
    )
}

/// Renders a card container with an optional title.
///
/// `content` is inserted as-is and must already be markup.
pub fn card(title: Option<&str>, content: &str) -> String {
    let header_html = title
        .map(|t| {
            format!(
                r#"<h3 class="text-lg font-semibold text-white mb-6">{}</h3>"#,
                escape_html(t)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="bg-gray-800 border border-gray-700 rounded-lg p-6 mb-6">
            {header_html}
            {content}
        </div>"#
    )
}

/// Renders the top navigation bar with the brand linking home.
pub fn nav_bar() -> String {
    r#"<nav class="bg-gray-800 border-b border-gray-700 sticky top-0 z-50">
            <div class="max-w-7xl mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <a href="/" class="text-2xl font-bold text-reel-500">Reelscout</a>
                    <a href="/" class="px-3 py-2 rounded-md text-sm font-medium text-gray-300 hover:text-reel-500 hover:bg-gray-700 transition-colors">New search</a>
                </div>
            </div>
        </nav>"#
        .to_string()
}

/// Renders the title search form.
///
/// Submits a real `POST /` so the server can answer with a redirect to the
/// results URL. `value` pre-fills the input.
pub fn search_form(value: &str) -> String {
    let value = escape_html(value);

    format!(
        r#"<form method="post" action="/" class="flex gap-3 mb-8" role="search">
            <input type="text" name="query" value="{value}"
                   placeholder="Search for a movie title..."
                   aria-label="Movie title"
                   class="flex-1 bg-gray-700 border border-gray-600 rounded-md px-4 py-2 text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-reel-500">
            <button type="submit"
                    class="px-6 py-2 rounded-md font-medium bg-reel-500 hover:bg-reel-600 text-slate-900 transition-colors">
                Search
            </button>
        </form>"#
    )
}

/// Renders the error panel: an `Error:` label followed by the message.
pub fn error_panel(message: &str) -> String {
    let message = escape_html(message);

    format!(
        r#"<div class="bg-red-900 bg-opacity-40 border border-red-700 rounded-lg p-4 mb-6" role="alert">
            <strong class="font-semibold text-red-300">Error:</strong>
            <span class="text-red-100">{message}</span>
        </div>"#
    )
}

/// Renders a loading indicator with the given element id.
///
/// Hidden until HTMX adds the `htmx-request` class during a request.
pub fn loading_indicator(id: &str) -> String {
    format!(
        r#"<div id="{id}" class="htmx-indicator text-center py-6 text-gray-400" role="status">
            <div class="inline-block w-8 h-8 border-4 border-gray-600 border-t-reel-500 rounded-full animate-spin"></div>
            <p class="mt-2">Loading...</p>
        </div>"#
    )
}

/// Escapes text for use inside HTML element content or quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
        assert_eq!(escape_html("Amélie"), "Amélie");
    }

    #[test]
    fn test_error_panel_escapes_message() {
        let html = error_panel("No movies found for \"<script>\".");
        assert!(html.contains("Error:"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_search_form_posts_query_field() {
        let html = search_form("heat");
        assert!(html.contains(r#"method="post""#));
        assert!(html.contains(r#"name="query""#));
        assert!(html.contains(r#"value="heat""#));
    }

    #[test]
    fn test_render_page_includes_shell() {
        let Html(page) = render_page("Search", "<p>body</p>");
        assert!(page.contains("<title>Search - Reelscout</title>"));
        assert!(page.contains("htmx.org"));
        assert!(page.contains("<p>body</p>"));
    }
}
