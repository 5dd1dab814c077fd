/// Системный диалог подтверждения. Без окна браузера ответ отрицательный.
pub fn confirm(message: &str) -> bool {
    match web_sys::window() {
        Some(win) => win.confirm_with_message(message).unwrap_or(false),
        None => false,
    }
}
