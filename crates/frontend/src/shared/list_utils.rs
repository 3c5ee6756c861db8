//! Client-side sorting of the loaded page.

use std::cmp::Ordering;

pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Case-insensitive text order.
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Missing values sort after present ones.
pub fn cmp_opt<T: PartialOrd>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}

/// Next `(field, ascending)` after a click on `field`'s header.
pub fn toggle_sort_state(current_field: &str, ascending: bool, field: &str) -> (String, bool) {
    if current_field == field {
        (field.to_string(), !ascending)
    } else {
        (field.to_string(), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row {
        name: &'static str,
        price: Option<f64>,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => cmp_text(self.name, other.name),
                "price" => cmp_opt(self.price, other.price),
                _ => Ordering::Equal,
            }
        }
    }

    #[test]
    fn test_sort_list_both_directions() {
        let mut rows = vec![
            Row { name: "banana", price: Some(2.0) },
            Row { name: "Apple", price: None },
            Row { name: "cherry", price: Some(1.0) },
        ];
        sort_list(&mut rows, "name", true);
        assert_eq!(rows[0].name, "Apple");
        sort_list(&mut rows, "price", true);
        assert_eq!(rows.iter().map(|r| r.name).collect::<Vec<_>>(), ["cherry", "banana", "Apple"]);
        sort_list(&mut rows, "price", false);
        assert_eq!(rows[0].name, "Apple");
    }

    #[test]
    fn test_toggle_sort_state() {
        assert_eq!(toggle_sort_state("name", true, "name"), ("name".into(), false));
        assert_eq!(toggle_sort_state("name", false, "price"), ("price".into(), true));
    }

    #[test]
    fn test_indicators() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("price", "name", true), " ⇅");
        assert_eq!(get_sort_class("name", "name"), "sort-icon active");
    }
}
