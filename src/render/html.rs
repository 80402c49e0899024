//! HTML document projection
//!
//! Renders the whole page from the current view state: the signup form with
//! its select control, the status message area, and one card per activity.
//! The document is rebuilt from scratch on every render — there is no
//! diffing, the model snapshot is the single source of truth.

use crate::config::ACTIVITIES_LOAD_FAILED;
use crate::model::{Activity, ActivityCatalog};
use crate::render::{badge_from_email, escape_html};
use crate::view::state::MessageSlot;
use chrono::{DateTime, Utc};

const PAGE_STYLE: &str = r#"
    body { font-family: sans-serif; margin: 2rem auto; max-width: 48rem; }
    .activity-card { border: 1px solid #ccc; border-radius: 6px; padding: 1rem; margin-bottom: 1rem; }
    .participants-list { list-style: none; padding-left: 0; }
    .participant-badge { display: inline-block; width: 2em; text-align: center; background: #eee; border-radius: 50%; margin-right: 0.5em; }
    .participants-empty { color: #888; font-style: italic; }
    #message.success { color: #1a7f37; }
    #message.error { color: #b91c1c; }
    #message.hidden { display: none; }
"#;

/// Renders the full page for the given snapshot and message slot
pub fn document(
    catalog: Option<&ActivityCatalog>,
    message: &MessageSlot,
    refreshed_at: Option<DateTime<Utc>>,
) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n<title>Activity Signup</title>\n");
    page.push_str("<style>");
    page.push_str(PAGE_STYLE);
    page.push_str("</style>\n</head>\n<body>\n");
    page.push_str("<h1>Extracurricular Activities</h1>\n");

    page.push_str(&signup_form(catalog));
    page.push_str(&message_area(message));

    page.push_str("<section id=\"activities-list\">\n");
    match catalog {
        Some(catalog) => {
            for (name, activity) in catalog {
                page.push_str(&activity_card(name, activity));
            }
        }
        None => {
            page.push_str(&format!("<p>{}</p>\n", escape_html(ACTIVITIES_LOAD_FAILED)));
        }
    }
    page.push_str("</section>\n");

    if let Some(stamp) = refreshed_at {
        page.push_str(&format!(
            "<footer>Last updated {}</footer>\n",
            stamp.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }
    page.push_str("</body>\n</html>\n");
    page
}

/// Renders one activity card: name, description, schedule, remaining
/// capacity, and the participant list
pub fn activity_card(name: &str, activity: &Activity) -> String {
    let safe_name = escape_html(name);
    format!(
        "<div class=\"activity-card\">\n\
         <h4>{}</h4>\n\
         <p>{}</p>\n\
         <p><strong>Schedule:</strong> {}</p>\n\
         <p><strong>Availability:</strong> {} spots left</p>\n\
         {}\
         </div>\n",
        safe_name,
        escape_html(&activity.description),
        escape_html(&activity.schedule),
        activity.spots_left(),
        participants_section(&safe_name, activity),
    )
}

fn participants_section(safe_name: &str, activity: &Activity) -> String {
    let mut section = String::from("<div class=\"participants-section\"><h5>Participants</h5>\n");
    if activity.participants.is_empty() {
        section.push_str("<p class=\"participants-empty\">No participants yet</p>\n");
    } else {
        section.push_str("<ul class=\"participants-list\">\n");
        for email in &activity.participants {
            let safe_email = escape_html(email);
            let badge = escape_html(&badge_from_email(email));
            section.push_str(&format!(
                "<li><span class=\"participant-badge\">{badge}</span>\
                 <span class=\"participant-email\">{safe_email}</span>\
                 <button class=\"participant-delete\" data-activity=\"{safe_name}\" \
                 data-email=\"{safe_email}\" title=\"Remove participant\" \
                 aria-label=\"Remove {safe_email} from {safe_name}\">✖</button></li>\n"
            ));
        }
        section.push_str("</ul>\n");
    }
    section.push_str("</div>\n");
    section
}

/// Renders the signup form with the select control populated from the
/// catalog — one option per activity plus the placeholder option
fn signup_form(catalog: Option<&ActivityCatalog>) -> String {
    let mut form = String::from(
        "<form id=\"signup-form\">\n\
         <label for=\"email\">Email</label>\n\
         <input type=\"email\" id=\"email\" name=\"email\" required>\n\
         <label for=\"activity\">Activity</label>\n\
         <select id=\"activity\" name=\"activity\" required>\n\
         <option value=\"\">-- Select an activity --</option>\n",
    );
    if let Some(catalog) = catalog {
        for name in catalog.keys() {
            let safe_name = escape_html(name);
            form.push_str(&format!("<option value=\"{safe_name}\">{safe_name}</option>\n"));
        }
    }
    form.push_str("</select>\n<button type=\"submit\">Sign Up</button>\n</form>\n");
    form
}

fn message_area(message: &MessageSlot) -> String {
    match message {
        MessageSlot::Hidden => "<div id=\"message\" class=\"hidden\"></div>\n".to_string(),
        MessageSlot::Showing { kind, text, .. } => format!(
            "<div id=\"message\" class=\"{}\">{}</div>\n",
            kind.css_class(),
            escape_html(text)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::state::MessageKind;

    fn chess_club_catalog() -> ActivityCatalog {
        let mut catalog = ActivityCatalog::new();
        catalog.insert(
            "Chess Club".to_string(),
            Activity {
                description: "d".to_string(),
                schedule: "s".to_string(),
                max_participants: 2,
                participants: vec!["a@x.com".to_string()],
            },
        );
        catalog
    }

    #[test]
    fn test_card_escapes_untrusted_text() {
        let activity = Activity {
            description: "<script>alert(1)</script>".to_string(),
            schedule: "Mon & Wed".to_string(),
            max_participants: 5,
            participants: vec!["\"bob\"@x.com".to_string()],
        };
        let card = activity_card("A <b>bold</b> club", &activity);

        assert!(!card.contains("<script>"));
        assert!(card.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(card.contains("Mon &amp; Wed"));
        assert!(card.contains("A &lt;b&gt;bold&lt;/b&gt; club"));
        assert!(card.contains("&quot;bob&quot;@x.com"));
    }

    #[test]
    fn test_card_renders_negative_capacity_verbatim() {
        let activity = Activity {
            description: "d".to_string(),
            schedule: "s".to_string(),
            max_participants: 1,
            participants: vec!["a@x.com".to_string(), "b@x.com".to_string()],
        };
        let card = activity_card("Overfull", &activity);
        assert!(card.contains("-1 spots left"));
    }

    #[test]
    fn test_empty_participants_placeholder() {
        let activity = Activity {
            description: "d".to_string(),
            schedule: "s".to_string(),
            max_participants: 3,
            participants: vec![],
        };
        let card = activity_card("Quiet Club", &activity);
        assert!(card.contains("No participants yet"));
        assert!(!card.contains("participants-list"));
    }

    #[test]
    fn test_select_populated_from_catalog_only() {
        let catalog = chess_club_catalog();
        let page = document(Some(&catalog), &MessageSlot::Hidden, None);
        assert!(page.contains("<option value=\"\">-- Select an activity --</option>"));
        assert!(page.contains("<option value=\"Chess Club\">Chess Club</option>"));
        assert_eq!(page.matches("<option").count(), 2);
    }

    #[test]
    fn test_document_without_snapshot_shows_failure_placeholder() {
        let page = document(None, &MessageSlot::Hidden, None);
        assert!(page.contains(ACTIVITIES_LOAD_FAILED));
        assert!(!page.contains("activity-card\">"));
    }

    #[test]
    fn test_message_area_states() {
        let hidden = message_area(&MessageSlot::Hidden);
        assert!(hidden.contains("class=\"hidden\""));

        let showing = MessageSlot::showing(MessageKind::Success, "Signed up <you>", 1);
        let visible = message_area(&showing);
        assert!(visible.contains("class=\"success\""));
        assert!(visible.contains("Signed up &lt;you&gt;"));
    }
}
