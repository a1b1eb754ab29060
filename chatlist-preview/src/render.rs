//! Plain-text rendering of the shell and the chat list.

use chatlist::{Chat, ScreenState, User};

use crate::shell::{Shell, Tab};

const ELLIPSIS: char = '…';
const READ_TICK: &str = "✓✓ ";
const ROW_INDENT: &str = "    ";
const MAX_BADGE: u32 = 99;

/// Cut `text` to at most `width` chars, ending in an ellipsis when shortened
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push(ELLIPSIS);
    out
}

/// Avatar cell: `[@]` for a loaded image, otherwise the chat's initial
pub fn avatar_cell(chat: &Chat) -> String {
    if chat.has_avatar() {
        return "[@]".to_string();
    }
    let initial = chat
        .initial()
        .map(|c| c.to_uppercase().collect::<String>())
        .unwrap_or_else(|| "?".to_string());
    format!("({})", initial)
}

/// Unread badge, empty when nothing is unread
pub fn unread_badge(count: u32) -> String {
    match count {
        0 => String::new(),
        n if n > MAX_BADGE => format!("({}+)", MAX_BADGE),
        n => format!("({})", n),
    }
}

/// Two lines per chat: avatar, name and date, then the message preview
pub fn render_chat(chat: &Chat, viewer: &User, width: usize) -> [String; 2] {
    let avatar = avatar_cell(chat);
    let date = &chat.last_message.date;
    let name_width = width
        .saturating_sub(avatar.chars().count() + 1)
        .saturating_sub(date.chars().count() + 1);
    let name = truncate(&chat.name, name_width);
    let padding = name_width.saturating_sub(name.chars().count());
    let header = format!("{} {}{} {}", avatar, name, " ".repeat(padding), date);

    let tick = if chat.is_own_last_message(viewer) && chat.last_message.is_read {
        READ_TICK
    } else {
        ""
    };
    let badge = unread_badge(chat.unread_count);
    let text_width = width
        .saturating_sub(ROW_INDENT.len() + tick.chars().count())
        .saturating_sub(if badge.is_empty() { 0 } else { badge.len() + 1 });
    let text = truncate(&chat.last_message.text, text_width);
    let mut preview = format!("{}{}{}", ROW_INDENT, tick, text);
    if !badge.is_empty() {
        let padding = text_width.saturating_sub(text.chars().count());
        preview.push_str(&" ".repeat(padding + 1));
        preview.push_str(&badge);
    }

    [header, preview]
}

/// Body of the Chats tab for the given state
pub fn render_chat_list(state: &ScreenState, width: usize) -> Vec<String> {
    let snapshot = match state {
        ScreenState::Loading => return vec![centered("Loading chats...", width)],
        ScreenState::Success(snapshot) => snapshot,
    };

    let mut lines = vec![truncate("( Search... )", width)];
    let chips = snapshot
        .filters
        .iter()
        .map(|f| format!("[{}]", f))
        .collect::<Vec<_>>()
        .join(" ");
    lines.push(truncate(&chips, width));
    lines.push(String::new());

    for chat in &snapshot.chats {
        lines.extend(render_chat(chat, &snapshot.current_user, width));
    }
    lines
}

/// Whole screen: top bar, current tab body and bottom navigation
pub fn render_screen(shell: &Shell, chats: &ScreenState, width: usize) -> String {
    let tab = shell.current();
    let actions = tab
        .actions()
        .iter()
        .map(|a| a.label())
        .collect::<Vec<_>>()
        .join(" ");
    let title_width = width.saturating_sub(actions.chars().count() + 1);
    let title = truncate(tab.title(), title_width);
    let padding = title_width.saturating_sub(title.chars().count());

    let mut lines = vec![
        format!("{}{} {}", title, " ".repeat(padding), actions),
        "-".repeat(width),
    ];
    match tab {
        Tab::Chats => lines.extend(render_chat_list(chats, width)),
        Tab::Updates | Tab::Communities | Tab::Calls => lines.push(centered(tab.title(), width)),
    }
    lines.push("-".repeat(width));

    let nav = Tab::ALL
        .iter()
        .map(|t| {
            if *t == tab {
                format!("[{}]", t.label())
            } else {
                t.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(truncate(&nav, width));
    lines.join("\n")
}

fn centered(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let padding = width.saturating_sub(text.chars().count()) / 2;
    format!("{}{}", " ".repeat(padding), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatlist::Message;

    fn chat(name: &str, author: &str, avatar: Option<&str>) -> Chat {
        Chat {
            avatar: avatar.map(str::to_string),
            name: name.to_string(),
            last_message: Message {
                text: "Lorem ipsum dolor sit amet".to_string(),
                date: "21/21/4241".to_string(),
                is_read: true,
                author: User::new(author),
            },
            unread_count: 2,
        }
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Lorem", 10), "Lorem");
        assert_eq!(truncate("Lorem", 5), "Lorem");
        assert_eq!(truncate("Lorem ipsum", 6), "Lorem…");
        assert_eq!(truncate("Lorem", 1), "…");
        assert_eq!(truncate("Lorem", 0), "");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("ãéíõú", 5), "ãéíõú");
        assert_eq!(truncate("ãéíõú", 3), "ãé…");
    }

    #[test]
    fn test_avatar_placeholder_uses_initial() {
        assert_eq!(avatar_cell(&chat("lorem", "Joao", None)), "(L)");
        assert_eq!(avatar_cell(&chat("", "Joao", None)), "(?)");
        assert_eq!(avatar_cell(&chat("lorem", "Joao", Some("https://a"))), "[@]");
    }

    #[test]
    fn test_unread_badge() {
        assert_eq!(unread_badge(0), "");
        assert_eq!(unread_badge(2), "(2)");
        assert_eq!(unread_badge(99), "(99)");
        assert_eq!(unread_badge(100), "(99+)");
    }

    #[test]
    fn test_read_tick_only_on_own_messages() {
        let viewer = User::new("Joao");
        let [_, own] = render_chat(&chat("Lorem", "Joao", None), &viewer, 48);
        let [_, other] = render_chat(&chat("Lorem", "Pepzin", None), &viewer, 48);
        assert!(own.contains(READ_TICK));
        assert!(!other.contains(READ_TICK));
    }

    #[test]
    fn test_rows_fit_width() {
        let viewer = User::new("Joao");
        let long = chat(
            "Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
            "Joao",
            None,
        );
        for width in [20, 32, 48] {
            for line in render_chat(&long, &viewer, width) {
                assert_eq!(line.chars().count(), width, "line: {:?}", line);
            }
        }
    }

    #[test]
    fn test_loading_body() {
        let lines = render_chat_list(&ScreenState::Loading, 40);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Loading"));
    }

    #[test]
    fn test_other_tabs_show_title() {
        let mut shell = Shell::default();
        shell.select(Tab::Calls);
        let screen = render_screen(&shell, &ScreenState::Loading, 40);
        assert!(screen.contains("[Calls]"));
        assert!(!screen.contains("Loading"));
    }
}
