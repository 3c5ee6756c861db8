/// Blocking browser confirmation. Without a window nothing is confirmed.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn soft_delete_prompt(entity: &str, name: &str) -> String {
    format!("Delete {} \"{}\"? It can be restored later.", entity, name)
}

pub fn hard_delete_prompt(entity: &str, name: &str) -> String {
    format!(
        "Permanently delete {} \"{}\"? This cannot be undone.",
        entity, name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts() {
        assert_eq!(
            soft_delete_prompt("product", "Desk lamp"),
            "Delete product \"Desk lamp\"? It can be restored later."
        );
        assert!(hard_delete_prompt("store", "Acme").contains("cannot be undone"));
    }
}
