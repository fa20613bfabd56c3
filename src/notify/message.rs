use crate::models::telegram::LeadSubmission;

const PLACEHOLDER: &str = "-";

/// Renders a lead as the HTML-mode text sent to the chat.
pub fn format_lead(lead: &LeadSubmission) -> String {
    let mut lines = vec![
        "Новая заявка".to_string(),
        format!("Источник: {}", or_placeholder(&lead.source)),
        format!("Имя: {}", or_placeholder(&lead.name)),
        format!("Телефон: {}", or_placeholder(&lead.phone)),
        format!("Email: {}", or_placeholder(&lead.email)),
        format!("Сообщение: {}", or_placeholder(&lead.message)),
    ];

    let tour_title = present(&lead.tour_title);
    let tour_id = present(&lead.tour_id);
    let tour_link = present(&lead.tour_link);

    if tour_title.is_some() || tour_id.is_some() || tour_link.is_some() {
        lines.push(String::new());
        lines.push("Тур:".to_string());
        if let Some(title) = tour_title {
            lines.push(format!("- Название: {}", escape_html(title)));
        }
        if let Some(id) = tour_id {
            lines.push(format!("- ID: {}", escape_html(id)));
        }
        if let Some(link) = tour_link {
            lines.push(format!("- Ссылка: {}", escape_html(link)));
        }
    }

    lines.join("\n")
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn or_placeholder(value: &Option<String>) -> String {
    present(value).map_or_else(|| PLACEHOLDER.to_string(), escape_html)
}

// Telegram's HTML parse mode only needs these three escaped.
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
