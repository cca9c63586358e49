//! Pure admission rules for the shared cart.

use super::error::{CapacityError, ValidationError};
use crate::model::{CartSummary, Drink, DrinkSelection, Order};

/// Numeric limits applied on submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLimits {
    /// Drinks allowed in a single order.
    pub per_order: usize,
    /// Drinks allowed across every active order.
    pub capacity: usize,
    /// Customer name length, in characters.
    pub max_name_chars: usize,
}

impl Default for CartLimits {
    fn default() -> Self {
        Self {
            per_order: 20,
            capacity: 100,
            max_name_chars: 20,
        }
    }
}

/// A selection that passed [`validate_selection`], ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedOrder {
    pub customer_name: String,
    pub drinks: Vec<Drink>,
}

impl ValidatedOrder {
    /// Drink descriptors in submission order, as stored.
    pub fn rendered_drinks(&self) -> Vec<String> {
        self.drinks.iter().map(ToString::to_string).collect()
    }
}

/// Checks a draft in a fixed order: name present, name length, at least one drink,
/// per-order limit. The first failing check wins.
pub fn validate_selection(
    customer_name: &str,
    selections: &[DrinkSelection],
    limits: &CartLimits,
) -> Result<ValidatedOrder, ValidationError> {
    let name = customer_name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let len = name.chars().count();
    if len > limits.max_name_chars {
        return Err(ValidationError::NameTooLong {
            len,
            max: limits.max_name_chars,
        });
    }

    if selections.is_empty() {
        return Err(ValidationError::NoDrinksSelected);
    }
    if selections.len() > limits.per_order {
        return Err(ValidationError::PerOrderLimitExceeded {
            count: selections.len(),
            max: limits.per_order,
        });
    }

    Ok(ValidatedOrder {
        customer_name: name.to_string(),
        drinks: selections.iter().map(DrinkSelection::resolve).collect(),
    })
}

/// Refuses `incoming` drinks when they would push the cart past capacity.
///
/// This only inspects the snapshot it is given. Two clients checking the same
/// snapshot can both pass and together exceed the limit.
pub fn check_capacity<'a>(
    orders: impl IntoIterator<Item = &'a Order>,
    incoming: usize,
    limits: &CartLimits,
) -> Result<(), CapacityError> {
    let current = aggregate(orders).total_drinks;
    if current.saturating_add(incoming) > limits.capacity {
        return Err(CapacityError::TotalLimitExceeded {
            current,
            incoming,
            capacity: limits.capacity,
        });
    }
    Ok(())
}

pub fn aggregate<'a>(orders: impl IntoIterator<Item = &'a Order>) -> CartSummary {
    orders
        .into_iter()
        .fold(CartSummary::default(), |summary, order| CartSummary {
            order_count: summary.order_count + 1,
            total_drinks: summary.total_drinks + order.drink_count(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, MenuItem, OrderId, Temperature};
    use chrono::Utc;

    fn americano() -> DrinkSelection {
        DrinkSelection::new(MenuItem::new("아메리카노", Category::Coffee))
    }

    fn order_with(drinks: usize) -> Order {
        Order {
            id: OrderId::default(),
            customer_name: "김리언".into(),
            drinks: vec!["아메리카노 (ICE)".into(); drinks],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_renders_drinks_with_default_ice() {
        let selections = vec![
            americano(),
            DrinkSelection::new(MenuItem::new("카페라떼", Category::Coffee))
                .with_temperature(Temperature::Hot),
        ];
        let order = validate_selection("  김종민 ", &selections, &CartLimits::default()).unwrap();
        assert_eq!(order.customer_name, "김종민");
        assert_eq!(
            order.rendered_drinks(),
            vec!["아메리카노 (ICE)", "카페라떼 (HOT)"]
        );
    }

    #[test]
    fn test_ice_only_hot_is_coerced() {
        let lemonade = DrinkSelection {
            item: MenuItem::new("레몬에이드", Category::AdeJuice),
            temperature: Some(Temperature::Hot),
        };
        let order = validate_selection("a", &[lemonade], &CartLimits::default()).unwrap();
        assert_eq!(order.rendered_drinks(), vec!["레몬에이드 (ICE)"]);
    }

    #[test]
    fn test_blank_name_rejected() {
        let result = validate_selection("   ", &[americano()], &CartLimits::default());
        assert_eq!(result, Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_name_length_counts_characters() {
        let limits = CartLimits::default();
        let twenty = "가".repeat(20);
        assert!(validate_selection(&twenty, &[americano()], &limits).is_ok());

        let twenty_one = "가".repeat(21);
        assert_eq!(
            validate_selection(&twenty_one, &[americano()], &limits),
            Err(ValidationError::NameTooLong { len: 21, max: 20 })
        );
    }

    #[test]
    fn test_checks_run_in_order() {
        let limits = CartLimits::default();
        // Empty name wins over an empty selection.
        assert_eq!(
            validate_selection("", &[], &limits),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            validate_selection("a", &[], &limits),
            Err(ValidationError::NoDrinksSelected)
        );
    }

    #[test]
    fn test_per_order_limit() {
        let limits = CartLimits::default();
        assert!(validate_selection("a", &vec![americano(); 20], &limits).is_ok());
        assert_eq!(
            validate_selection("a", &vec![americano(); 21], &limits),
            Err(ValidationError::PerOrderLimitExceeded { count: 21, max: 20 })
        );
    }

    #[test]
    fn test_capacity_boundary() {
        let limits = CartLimits::default();
        let existing: Vec<Order> = (0..5).map(|_| order_with(19)).collect();

        assert!(check_capacity(&existing, 5, &limits).is_ok());
        assert_eq!(
            check_capacity(&existing, 6, &limits),
            Err(CapacityError::TotalLimitExceeded {
                current: 95,
                incoming: 6,
                capacity: 100
            })
        );
    }

    #[test]
    fn test_capacity_message_has_breakdown() {
        let err = check_capacity(&[order_with(100)], 1, &CartLimits::default()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("100") && message.contains('1'), "{message}");
    }

    #[test]
    fn test_huge_incoming_count_is_refused_not_overflowed() {
        let existing = vec![order_with(1)];
        assert_eq!(
            check_capacity(&existing, usize::MAX, &CartLimits::default()),
            Err(CapacityError::TotalLimitExceeded {
                current: 1,
                incoming: usize::MAX,
                capacity: 100
            })
        );
    }

    #[test]
    fn test_valid_orders_keep_every_drink_in_order() {
        let limits = CartLimits::default();
        for name_len in 1..=20 {
            let name = "가".repeat(name_len);
            for count in 1..=20 {
                let selections: Vec<DrinkSelection> = (0..count)
                    .map(|i| DrinkSelection::new(MenuItem::new(format!("음료{i}"), Category::Coffee)))
                    .collect();

                let order = validate_selection(&name, &selections, &limits).unwrap();
                let expected: Vec<String> = (0..count).map(|i| format!("음료{i} (ICE)")).collect();
                assert_eq!(order.customer_name, name);
                assert_eq!(order.rendered_drinks(), expected, "name {name_len}, drinks {count}");
            }
        }
    }

    #[test]
    fn test_aggregate() {
        let orders = vec![order_with(2), order_with(3)];
        assert_eq!(
            aggregate(&orders),
            CartSummary {
                order_count: 2,
                total_drinks: 5
            }
        );
        assert_eq!(aggregate(&Vec::<Order>::new()), CartSummary::default());
    }
}
