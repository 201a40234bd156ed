//! Embedded HTML pages
//!
//! Every page is rendered server-side into a shared shell. Dynamic content
//! is HTML-escaped before interpolation.

use encore_common::models::{Artist, Venue};

use crate::views::{ArtistDetail, CityGroup, SearchResults, ShowListEntry, VenueDetail};

/// Escape text for interpolation into HTML
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = "\
body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; background: #1a1a1a; color: #e0e0e0; margin: 0; }\n\
nav { background-color: #2a2a2a; border-bottom: 1px solid #3a3a3a; padding: 14px 20px; }\n\
nav a { color: #8ab4f8; margin-right: 16px; text-decoration: none; }\n\
main { padding: 20px; max-width: 860px; }\n\
h1, h2 { color: #f0f0f0; }\n\
.flash { background: #2d4a2d; border: 1px solid #3f6b3f; padding: 10px 14px; margin: 14px 20px 0; }\n\
ul.plain { list-style: none; padding-left: 0; }\n\
li { margin: 4px 0; }\n\
form label { display: block; margin: 10px 0 2px; }\n\
form input { width: 320px; padding: 4px; background: #2a2a2a; color: #e0e0e0; border: 1px solid #3a3a3a; }\n\
button, input[type=submit] { margin-top: 12px; padding: 6px 14px; background: #32486e; color: #e0e0e0; border: 1px solid #4a6a9e; cursor: pointer; }\n\
.muted { color: #888; }\n";

fn shell(title: &str, flash: Option<&str>, body: &str) -> String {
    let flash_html = flash
        .map(|msg| format!("<div class=\"flash\">{}</div>", escape_html(msg)))
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{} | Encore</title>\n\
         <style>{}</style>\n\
         </head>\n\
         <body>\n\
         <nav><a href=\"/\">Encore</a> <a href=\"/venues\">Venues</a> \
         <a href=\"/artists\">Artists</a> <a href=\"/shows\">Shows</a></nav>\n\
         {}\n\
         <main>\n{}\n</main>\n\
         </body>\n\
         </html>\n",
        escape_html(title),
        STYLE,
        flash_html,
        body
    )
}

fn optional_line(label: &str, value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => {
            format!("<li>{}: {}</li>\n", escape_html(label), escape_html(v))
        }
        _ => String::new(),
    }
}

/// GET / and the landing page after create/delete submissions
pub fn home_page(flash: Option<&str>) -> String {
    let body = "<h1>Encore</h1>\n\
         <p>Browse venues and artists, or list something new.</p>\n\
         <ul class=\"plain\">\n\
         <li><a href=\"/venues/create\">List a new venue</a></li>\n\
         <li><a href=\"/artists/create\">List a new artist</a></li>\n\
         <li><a href=\"/shows/create\">List a new show</a></li>\n\
         </ul>";
    shell("Home", flash, body)
}

/// GET /venues
pub fn venues_page(groups: &[CityGroup]) -> String {
    let mut body = String::from("<h1>Venues</h1>\n");
    if groups.is_empty() {
        body.push_str("<p class=\"muted\">No venues listed yet.</p>\n");
    }
    for group in groups {
        body.push_str(&format!(
            "<h2>{}, {}</h2>\n<ul class=\"plain\">\n",
            escape_html(&group.city),
            escape_html(&group.state)
        ));
        for venue in &group.venues {
            body.push_str(&format!(
                "<li><a href=\"/venues/{}\">{}</a> \
                 <span class=\"muted\">{} upcoming</span></li>\n",
                venue.id,
                escape_html(&venue.name),
                venue.num_upcoming_shows
            ));
        }
        body.push_str("</ul>\n");
    }
    body.push_str("<p><a href=\"/venues/create\">List a new venue</a></p>\n");
    shell("Venues", None, &body)
}

/// GET /artists
pub fn artists_page(artists: &[Artist]) -> String {
    let mut body = String::from("<h1>Artists</h1>\n<ul class=\"plain\">\n");
    for artist in artists {
        body.push_str(&format!(
            "<li><a href=\"/artists/{}\">{}</a></li>\n",
            artist.guid,
            escape_html(&artist.name)
        ));
    }
    body.push_str("</ul>\n<p><a href=\"/artists/create\">List a new artist</a></p>\n");
    shell("Artists", None, &body)
}

/// POST /venues/search and POST /artists/search
pub fn search_results_page(kind: &str, search_term: &str, results: &SearchResults) -> String {
    let base = if kind == "Venues" { "/venues" } else { "/artists" };
    let mut body = format!(
        "<h1>{} matching \"{}\"</h1>\n<p>{} result(s)</p>\n<ul class=\"plain\">\n",
        escape_html(kind),
        escape_html(search_term),
        results.count
    );
    for entry in &results.data {
        body.push_str(&format!(
            "<li><a href=\"{}/{}\">{}</a> \
             <span class=\"muted\">{} upcoming</span></li>\n",
            base,
            entry.id,
            escape_html(&entry.name),
            entry.num_upcoming_shows
        ));
    }
    body.push_str("</ul>\n");
    shell("Search", None, &body)
}

/// GET /venues/:id
pub fn venue_detail_page(detail: &VenueDetail, flash: Option<&str>) -> String {
    let venue = &detail.venue;
    let mut body = format!("<h1>{}</h1>\n", escape_html(&venue.name));
    body.push_str(&format!(
        "<p>{}, {}</p>\n",
        escape_html(&venue.city),
        escape_html(&venue.state)
    ));
    body.push_str("<ul class=\"plain\">\n");
    if !venue.genres.is_empty() {
        body.push_str(&format!(
            "<li>Genres: {}</li>\n",
            escape_html(&venue.genres.join(", "))
        ));
    }
    body.push_str(&optional_line("Address", venue.address.as_deref()));
    body.push_str(&optional_line("Phone", venue.phone.as_deref()));
    body.push_str(&optional_line("Website", venue.website.as_deref()));
    body.push_str(&optional_line("Facebook", venue.facebook_link.as_deref()));
    if venue.seeking_talent {
        body.push_str(&optional_line(
            "Seeking talent",
            venue.seeking_description.as_deref().or(Some("yes")),
        ));
    }
    body.push_str("</ul>\n");

    body.push_str(&format!(
        "<h2>Upcoming shows ({})</h2>\n",
        detail.upcoming_shows_count
    ));
    body.push_str("<ul class=\"plain\">\n");
    for show in &detail.upcoming_shows {
        body.push_str(&format!(
            "<li><a href=\"/artists/{}\">{}</a> \
             <span class=\"muted\">{}</span></li>\n",
            show.artist_id,
            escape_html(&show.artist_name),
            escape_html(&show.start_time)
        ));
    }
    body.push_str("</ul>\n");

    body.push_str(&format!(
        "<h2>Past shows ({})</h2>\n",
        detail.past_shows_count
    ));
    body.push_str("<ul class=\"plain\">\n");
    for show in &detail.past_shows {
        body.push_str(&format!(
            "<li><a href=\"/artists/{}\">{}</a> \
             <span class=\"muted\">{}</span></li>\n",
            show.artist_id,
            escape_html(&show.artist_name),
            escape_html(&show.start_time)
        ));
    }
    body.push_str("</ul>\n");

    body.push_str(&format!(
        "<p><a href=\"/venues/{}/edit\">Edit venue</a></p>\n",
        venue.guid
    ));
    // Delete issues an HTTP DELETE and swaps in the returned page
    body.push_str(&format!(
        "<button id=\"delete-venue\">Delete venue</button>\n\
         <script>\n\
         document.getElementById('delete-venue').addEventListener('click', function () {{\n\
             fetch('/venues/{}', {{ method: 'DELETE' }})\n\
                 .then(function (r) {{ return r.text(); }})\n\
                 .then(function (html) {{\n\
                     document.open();\n\
                     document.write(html);\n\
                     document.close();\n\
                     history.replaceState(null, '', '/');\n\
                 }});\n\
         }});\n\
         </script>\n",
        venue.guid
    ));

    shell(&venue.name, flash, &body)
}

/// GET /artists/:id
pub fn artist_detail_page(detail: &ArtistDetail, flash: Option<&str>) -> String {
    let artist = &detail.artist;
    let mut body = format!("<h1>{}</h1>\n", escape_html(&artist.name));
    body.push_str(&format!(
        "<p>{}, {}</p>\n",
        escape_html(&artist.city),
        escape_html(&artist.state)
    ));
    body.push_str("<ul class=\"plain\">\n");
    if !artist.genres.is_empty() {
        body.push_str(&format!(
            "<li>Genres: {}</li>\n",
            escape_html(&artist.genres.join(", "))
        ));
    }
    body.push_str(&optional_line("Phone", artist.phone.as_deref()));
    body.push_str(&optional_line("Website", artist.website.as_deref()));
    body.push_str(&optional_line("Facebook", artist.facebook_link.as_deref()));
    if artist.seeking_venue {
        body.push_str(&optional_line(
            "Seeking venue",
            artist.seeking_description.as_deref().or(Some("yes")),
        ));
    }
    body.push_str("</ul>\n");

    body.push_str(&format!(
        "<h2>Upcoming shows ({})</h2>\n",
        detail.upcoming_shows_count
    ));
    body.push_str("<ul class=\"plain\">\n");
    for show in &detail.upcoming_shows {
        body.push_str(&format!(
            "<li><a href=\"/venues/{}\">{}</a> \
             <span class=\"muted\">{}</span></li>\n",
            show.venue_id,
            escape_html(&show.venue_name),
            escape_html(&show.start_time)
        ));
    }
    body.push_str("</ul>\n");

    body.push_str(&format!(
        "<h2>Past shows ({})</h2>\n",
        detail.past_shows_count
    ));
    body.push_str("<ul class=\"plain\">\n");
    for show in &detail.past_shows {
        body.push_str(&format!(
            "<li><a href=\"/venues/{}\">{}</a> \
             <span class=\"muted\">{}</span></li>\n",
            show.venue_id,
            escape_html(&show.venue_name),
            escape_html(&show.start_time)
        ));
    }
    body.push_str("</ul>\n");

    body.push_str(&format!(
        "<p><a href=\"/artists/{}/edit\">Edit artist</a></p>\n",
        artist.guid
    ));

    shell(&artist.name, flash, &body)
}

/// GET /shows
pub fn shows_page(entries: &[ShowListEntry]) -> String {
    let mut body = String::from("<h1>Shows</h1>\n<ul class=\"plain\">\n");
    for entry in entries {
        body.push_str(&format!(
            "<li><a href=\"/artists/{}\">{}</a> at \
             <a href=\"/venues/{}\">{}</a> \
             <span class=\"muted\">{}</span></li>\n",
            entry.artist_id,
            escape_html(&entry.artist_name),
            entry.venue_id,
            escape_html(&entry.venue_name),
            escape_html(&entry.start_time)
        ));
    }
    body.push_str("</ul>\n<p><a href=\"/shows/create\">List a new show</a></p>\n");
    shell("Shows", None, &body)
}

fn text_field(label: &str, name: &str, value: &str) -> String {
    format!(
        "<label for=\"{name}\">{label}</label>\n\
         <input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{value}\">\n",
        label = escape_html(label),
        name = name,
        value = escape_html(value)
    )
}

/// GET /venues/create
pub fn venue_form_page() -> String {
    let mut body = String::from("<h1>List a new venue</h1>\n<form method=\"post\" action=\"/venues/create\">\n");
    body.push_str(&text_field("Name", "name", ""));
    body.push_str(&text_field("City", "city", ""));
    body.push_str(&text_field("State (2 letters)", "state", ""));
    body.push_str(&text_field("Address", "address", ""));
    body.push_str(&text_field("Phone", "phone", ""));
    body.push_str(&text_field("Genres (comma separated)", "genres", ""));
    body.push_str(&text_field("Image link", "image_link", ""));
    body.push_str(&text_field("Facebook link", "facebook_link", ""));
    body.push_str("<input type=\"submit\" value=\"Create venue\">\n</form>");
    shell("New venue", None, &body)
}

/// GET /artists/create
pub fn artist_form_page() -> String {
    let mut body = String::from("<h1>List a new artist</h1>\n<form method=\"post\" action=\"/artists/create\">\n");
    body.push_str(&text_field("Name", "name", ""));
    body.push_str(&text_field("City", "city", ""));
    body.push_str(&text_field("State (2 letters)", "state", ""));
    body.push_str(&text_field("Phone", "phone", ""));
    body.push_str(&text_field("Genres (comma separated)", "genres", ""));
    body.push_str(&text_field("Facebook link", "facebook_link", ""));
    body.push_str("<input type=\"submit\" value=\"Create artist\">\n</form>");
    shell("New artist", None, &body)
}

/// GET /shows/create
pub fn show_form_page() -> String {
    let mut body = String::from("<h1>List a new show</h1>\n<form method=\"post\" action=\"/shows/create\">\n");
    body.push_str(&text_field("Artist ID", "artist_id", ""));
    body.push_str(&text_field("Venue ID", "venue_id", ""));
    body.push_str(
        "<label for=\"start_time\">Start time</label>\n\
         <input type=\"datetime-local\" id=\"start_time\" name=\"start_time\">\n",
    );
    body.push_str("<input type=\"submit\" value=\"Create show\">\n</form>");
    shell("New show", None, &body)
}

/// GET /venues/:id/edit
pub fn edit_venue_form_page(venue: &Venue) -> String {
    let mut body = format!(
        "<h1>Edit {}</h1>\n<form method=\"post\" action=\"/venues/{}/edit\">\n",
        escape_html(&venue.name),
        venue.guid
    );
    body.push_str(&text_field("Name", "name", &venue.name));
    body.push_str(&text_field("City", "city", &venue.city));
    body.push_str(&text_field("State (2 letters)", "state", &venue.state));
    body.push_str(&text_field("Phone", "phone", venue.phone.as_deref().unwrap_or("")));
    body.push_str(&text_field(
        "Facebook link",
        "facebook_link",
        venue.facebook_link.as_deref().unwrap_or(""),
    ));
    body.push_str(&text_field(
        "Genres (comma separated)",
        "genres",
        &venue.genres.join(", "),
    ));
    body.push_str("<input type=\"submit\" value=\"Save\">\n</form>");
    shell("Edit venue", None, &body)
}

/// GET /artists/:id/edit
pub fn edit_artist_form_page(artist: &Artist) -> String {
    let mut body = format!(
        "<h1>Edit {}</h1>\n<form method=\"post\" action=\"/artists/{}/edit\">\n",
        escape_html(&artist.name),
        artist.guid
    );
    body.push_str(&text_field("Name", "name", &artist.name));
    body.push_str(&text_field("City", "city", &artist.city));
    body.push_str(&text_field("State (2 letters)", "state", &artist.state));
    body.push_str(&text_field("Phone", "phone", artist.phone.as_deref().unwrap_or("")));
    body.push_str(&text_field(
        "Facebook link",
        "facebook_link",
        artist.facebook_link.as_deref().unwrap_or(""),
    ));
    body.push_str(&text_field(
        "Genres (comma separated)",
        "genres",
        &artist.genres.join(", "),
    ));
    body.push_str("<input type=\"submit\" value=\"Save\">\n</form>");
    shell("Edit artist", None, &body)
}

/// Rendered 404 page
pub fn not_found_page() -> String {
    shell(
        "Not found",
        None,
        "<h1>404</h1>\n<p>That page does not exist. <a href=\"/\">Back home</a></p>",
    )
}

/// Rendered 500 page
pub fn server_error_page() -> String {
    shell(
        "Server error",
        None,
        "<h1>500</h1>\n<p>Something went wrong. <a href=\"/\">Back home</a></p>",
    )
}
