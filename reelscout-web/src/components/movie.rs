//! Movie components - posters, result cards, sort control, detail view

use reelscout_search::{MovieDetail, Poster, SearchItem, SortOrder};

use super::layout::escape_html;
use crate::navigation::movie_location;

/// Id of the element HTMX swaps on a sort change.
pub const RESULTS_TARGET: &str = "results";

/// Id of the indicator shown while a results refresh is in flight.
pub const RESULTS_INDICATOR: &str = "results-loading";

/// Poster size used on result cards.
pub const CARD_POSTER: (u32, u32) = (300, 450);

/// Poster size used on the detail view.
pub const DETAIL_POSTER: (u32, u32) = (400, 600);

/// Placeholder image URL for a missing or broken poster.
pub fn placeholder_url((width, height): (u32, u32)) -> String {
    format!("https://placehold.co/{width}x{height}/374151/FFFFFF?text=No+Poster")
}

/// Renders a poster image.
///
/// Missing posters use the placeholder directly; real URLs fall back to it
/// when the browser fails to load them.
pub fn poster_image(poster: &Poster, alt: &str, size: (u32, u32)) -> String {
    let placeholder = placeholder_url(size);
    let alt = escape_html(alt);
    let (width, height) = size;

    match poster.url() {
        Some(url) => format!(
            r#"<img src="{src}" alt="{alt}" width="{width}" height="{height}" loading="lazy"
                 onerror="this.onerror=null;this.src='{placeholder}'"
                 class="w-full h-auto rounded-md bg-gray-700">"#,
            src = escape_html(url),
        ),
        None => format!(
            r#"<img src="{placeholder}" alt="{alt}" width="{width}" height="{height}"
                 class="w-full h-auto rounded-md bg-gray-700">"#
        ),
    }
}

/// Renders one result card linking to the detail view.
pub fn movie_card(item: &SearchItem) -> String {
    let href = movie_location(&item.imdb_id);
    let poster = poster_image(&item.poster, &item.title, CARD_POSTER);
    let title = escape_html(&item.title);
    let year = escape_html(&item.year);

    format!(
        r#"<a href="{href}" class="movie-card block bg-gray-800 border border-gray-700 rounded-lg p-3 hover:border-reel-500 transition-colors">
            {poster}
            <h3 class="mt-3 font-semibold text-white truncate">{title}</h3>
            <p class="text-sm text-gray-400">{year}</p>
        </a>"#
    )
}

/// Renders the grid of result cards.
pub fn results_grid(items: &[SearchItem]) -> String {
    let cards: String = items.iter().map(movie_card).collect();

    format!(
        r#"<div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-6">
            {cards}
        </div>"#
    )
}

/// Renders the results header: the count and the sort control.
///
/// Changing the selection refreshes `#results` through HTMX. A newer change
/// replaces any refresh still in flight, so only the latest order renders.
/// Without JavaScript the `Apply` button submits the same choice as a plain
/// `GET /search`.
pub fn results_header(term: &str, count: usize, sort: SortOrder) -> String {
    let term = escape_html(term);
    let noun = if count == 1 { "result" } else { "results" };
    let options: String = SortOrder::ALL
        .into_iter()
        .map(|order| {
            let selected = if order == sort { " selected" } else { "" };
            format!(
                r#"<option value="{}"{selected}>{}</option>"#,
                order.as_param(),
                order.label()
            )
        })
        .collect();

    format!(
        r##"<form method="get" action="/search" class="flex items-center justify-between mb-6">
            <p class="text-gray-300"><span class="font-semibold text-white">{count}</span> {noun}</p>
            <input type="hidden" name="query" value="{term}">
            <div class="flex items-center gap-2">
                <select name="sort" aria-label="Sort results"
                        hx-get="/htmx/search" hx-trigger="change" hx-include="closest form"
                        hx-target="#{RESULTS_TARGET}" hx-swap="innerHTML" hx-sync="this:replace"
                        hx-indicator="#{RESULTS_INDICATOR}"
                        class="bg-gray-700 border border-gray-600 rounded-md px-3 py-2 text-white">
                    {options}
                </select>
                <noscript><button type="submit" class="px-3 py-2 rounded-md bg-gray-700 text-white">Apply</button></noscript>
            </div>
        </form>"##
    )
}

/// Renders the full metadata view for one title.
pub fn movie_detail(detail: &MovieDetail) -> String {
    let heading = escape_html(&detail.heading());
    let poster = poster_image(&detail.poster, &detail.title, DETAIL_POSTER);
    let plot = detail
        .plot()
        .map(|plot| format!(r#"<p class="text-gray-200 mb-6">{}</p>"#, escape_html(plot)))
        .unwrap_or_default();

    let facts: String = [
        ("Rated", &detail.rated),
        ("Released", &detail.released),
        ("Runtime", &detail.runtime),
        ("Genre", &detail.genre),
        ("Director", &detail.director),
        ("Writer", &detail.writer),
        ("Actors", &detail.actors),
        ("Language", &detail.language),
        ("Country", &detail.country),
        ("Awards", &detail.awards),
        ("Box Office", &detail.box_office),
    ]
    .into_iter()
    .map(|(label, value)| {
        format!(
            r#"<div><dt class="text-gray-400 text-sm">{label}</dt><dd class="text-white">{}</dd></div>"#,
            escape_html(value)
        )
    })
    .collect();

    let mut ratings: String = detail
        .ratings
        .iter()
        .map(|rating| {
            format!(
                r#"<li><span class="text-gray-400">{}:</span> {}</li>"#,
                escape_html(&rating.source),
                escape_html(&rating.value)
            )
        })
        .collect();
    if let Some(metascore) = detail.metascore() {
        ratings.push_str(&format!(
            r#"<li><span class="text-gray-400">Metascore:</span> {}</li>"#,
            escape_html(metascore)
        ));
    }

    let ratings_html = if ratings.is_empty() {
        String::new()
    } else {
        format!(
            r#"<h2 class="text-lg font-semibold text-white mb-2">Ratings</h2>
                <ul class="ratings space-y-1 mb-4">{ratings}</ul>"#
        )
    };

    let imdb = format!(
        "IMDb Rating: {} ({} votes)",
        escape_html(&detail.imdb_rating),
        escape_html(&detail.imdb_votes)
    );

    format!(
        r#"<article class="grid md:grid-cols-3 gap-8">
            <div>{poster}</div>
            <div class="md:col-span-2">
                <h1 class="text-3xl font-bold text-white mb-4">{heading}</h1>
                {plot}
                <dl class="grid grid-cols-2 gap-4 mb-6">{facts}</dl>
                {ratings_html}
                <p class="text-reel-400 font-medium">{imdb}</p>
            </div>
        </article>"#
    )
}

#[cfg(test)]
mod tests {
    use reelscout_search::MediaType;

    use super::*;

    fn item(poster: Poster) -> SearchItem {
        SearchItem {
            title: "Heat".to_string(),
            year: "1995".to_string(),
            imdb_id: "tt0113277".to_string(),
            media_type: MediaType::Movie,
            poster,
        }
    }

    #[test]
    fn test_missing_poster_uses_placeholder() {
        let html = poster_image(&Poster::Missing, "Heat", CARD_POSTER);
        assert!(html.contains("https://placehold.co/300x450/374151/FFFFFF?text=No+Poster"));
        assert!(!html.contains("onerror"));
    }

    #[test]
    fn test_real_poster_falls_back_on_error() {
        let html = poster_image(
            &Poster::Url("https://img.example/heat.jpg".to_string()),
            "Heat",
            CARD_POSTER,
        );
        assert!(html.contains(r#"src="https://img.example/heat.jpg""#));
        assert!(html.contains("onerror="));
        assert!(html.contains(&placeholder_url(CARD_POSTER)));
    }

    #[test]
    fn test_card_links_to_detail_view() {
        let html = movie_card(&item(Poster::Missing));
        assert!(html.contains(r#"href="/movies/tt0113277""#));
        assert!(html.contains("Heat"));
        assert!(html.contains("1995"));
    }

    #[test]
    fn test_header_marks_current_order() {
        let html = results_header("heat", 2, SortOrder::YearAsc);
        assert!(html.contains("2</span> results"));
        assert!(html.contains(r#"<option value="ASC" selected>Date: ASC</option>"#));
        assert!(html.contains(r#"hx-sync="this:replace""#));
        assert!(html.contains(r##"hx-target="#results""##));
        assert!(html.contains(r##"hx-indicator="#results-loading""##));
        assert_eq!(html.matches("<option").count(), SortOrder::ALL.len());
    }

    #[test]
    fn test_detail_skips_unavailable_metascore() {
        let mut detail = MovieDetail {
            title: "Heat".to_string(),
            year: "1995".to_string(),
            imdb_id: "tt0113277".to_string(),
            media_type: MediaType::Movie,
            poster: Poster::Missing,
            rated: "R".to_string(),
            released: "15 Dec 1995".to_string(),
            runtime: "170 min".to_string(),
            genre: "Action, Crime, Drama".to_string(),
            director: "Michael Mann".to_string(),
            writer: "Michael Mann".to_string(),
            actors: "Al Pacino, Robert De Niro, Val Kilmer".to_string(),
            plot: "N/A".to_string(),
            language: "English".to_string(),
            country: "United States".to_string(),
            awards: "N/A".to_string(),
            ratings: vec![],
            metascore: "N/A".to_string(),
            imdb_rating: "8.3".to_string(),
            imdb_votes: "733,581".to_string(),
            dvd: "N/A".to_string(),
            box_office: "N/A".to_string(),
            production: "N/A".to_string(),
            website: "N/A".to_string(),
        };

        let html = movie_detail(&detail);
        assert!(html.contains("Heat (1995)"));
        assert!(!html.contains("Metascore"));
        assert!(!html.contains("Ratings</h2>"));
        assert!(!html.contains("<ul"));
        assert!(html.contains("IMDb Rating: 8.3 (733,581 votes)"));

        detail.metascore = "76".to_string();
        let html = movie_detail(&detail);
        assert!(html.contains("Ratings</h2>"));
        assert!(html.contains("Metascore:</span> 76"));
    }
}
