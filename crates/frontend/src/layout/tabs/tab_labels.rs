//! Titles for tab keys; used by the sidebar and when a tab is restored from the URL.

/// (list key, list title, singular entity name)
const MODULES: &[(&str, &str, &str)] = &[
    ("a001_product", "Products", "Product"),
    ("a002_order", "Orders", "Order"),
    ("a003_store", "Stores", "Store"),
    ("a004_user", "Users", "User"),
    ("a005_banner_event", "Banner events", "Banner event"),
    ("a006_delivery", "Deliveries", "Delivery"),
    ("a007_billing", "Billing", "Billing statement"),
    ("d400_banner_event_analytics", "Banner analytics", "Banner analytics"),
    ("d401_overview", "Overview", "Overview"),
];

/// Static title of a list or dashboard key.
pub fn list_label(key: &str) -> Option<&'static str> {
    MODULES
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, title, _)| *title)
}

/// Readable title for any tab key. Falls back to the key itself.
pub fn tab_label_for_key(key: &str) -> String {
    if let Some(title) = list_label(key) {
        return title.to_string();
    }
    for (module, _, entity) in MODULES {
        let Some(rest) = key.strip_prefix(module) else {
            continue;
        };
        if rest == "_new" {
            return format!("New {}", entity.to_lowercase());
        }
        if let Some(id) = rest.strip_prefix("_detail_") {
            return format!("{} {}", entity, short_id(id));
        }
    }
    key.to_string()
}

/// First block of a UUID, enough to tell tabs apart.
fn short_id(id: &str) -> &str {
    id.split('-').next().unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_and_dashboard_labels() {
        assert_eq!(tab_label_for_key("a001_product"), "Products");
        assert_eq!(tab_label_for_key("d401_overview"), "Overview");
    }

    #[test]
    fn test_detail_and_new_labels() {
        assert_eq!(
            tab_label_for_key("a003_store_detail_9e8d7c6b-5a4f-4e3d-9c2b-1a0f9e8d7c6b"),
            "Store 9e8d7c6b"
        );
        assert_eq!(tab_label_for_key("a005_banner_event_new"), "New banner event");
    }

    #[test]
    fn test_unknown_key_falls_back() {
        assert_eq!(tab_label_for_key("x999"), "x999");
    }
}
