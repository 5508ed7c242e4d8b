use tracing::debug;

use shopcheck_core::{DomainError, DomainResult};
use shopcheck_inventory::Assortment;

/// Stateless selection rules between the available and selected ledgers.
///
/// The available ledger is only read: stock is checked here, never consumed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionService;

impl SelectionService {
    /// Names offered to the user when choosing a product, in ledger order.
    pub fn fill_combo_box_names(available: Option<&Assortment>) -> DomainResult<Vec<String>> {
        let available =
            available.ok_or_else(|| DomainError::invalid_argument("available assortment is missing"))?;
        Ok(available.product_names().into_iter().map(str::to_owned).collect())
    }

    /// Put `amount` more units of the product named `chosen_name` into
    /// `selected`, bounded by what `available` holds.
    ///
    /// The selected quantity is overwritten with the cumulative amount
    /// (`already selected + amount`). Every failure leaves `selected` as it was.
    pub fn fill_assortment_with_selected_product<'a>(
        chosen_name: Option<&str>,
        amount: i64,
        available: Option<&Assortment>,
        selected: Option<&'a mut Assortment>,
    ) -> DomainResult<&'a Assortment> {
        let available =
            available.ok_or_else(|| DomainError::invalid_argument("available assortment is missing"))?;
        let selected =
            selected.ok_or_else(|| DomainError::invalid_argument("selected assortment is missing"))?;
        let chosen_name =
            chosen_name.ok_or_else(|| DomainError::invalid_argument("no product is chosen"))?;
        if amount < 1 {
            return Err(DomainError::invalid_argument("amount must be at least 1"));
        }

        let (product, in_stock) = available
            .product_by_name(chosen_name)
            .ok_or_else(|| DomainError::invalid_argument("no product selected"))?;

        if i64::from(in_stock) < amount {
            return Err(DomainError::insufficient_stock(in_stock));
        }

        let cumulative = u64::from(selected.quantity_of(product)) + amount as u64;
        if cumulative > u64::from(in_stock) {
            return Err(DomainError::selection_exceeds_stock(in_stock));
        }

        // cumulative <= in_stock, so it fits.
        let cumulative = cumulative as u32;
        debug!(product = product.name(), cumulative, in_stock, "selection updated");
        selected.set_quantity(product.clone(), cumulative);
        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use shopcheck_products::Product;

    fn tshirt() -> Product {
        Product::new(1, "T-shirt", 15.99).unwrap()
    }

    fn stock() -> Assortment {
        let mut available = Assortment::new();
        available.add(tshirt(), 10).unwrap();
        available.add(Product::new(2, "Jeans", 45.0).unwrap(), 2).unwrap();
        available
    }

    fn select(
        name: Option<&str>,
        amount: i64,
        available: &Assortment,
        selected: &mut Assortment,
    ) -> DomainResult<u32> {
        SelectionService::fill_assortment_with_selected_product(
            name,
            amount,
            Some(available),
            Some(selected),
        )
        .map(|s| s.quantity_of(&tshirt()))
    }

    #[test]
    fn selection_within_stock_sets_quantity() {
        let available = stock();
        let mut selected = Assortment::new();

        let quantity = select(Some("T-shirt"), 4, &available, &mut selected).unwrap();

        assert_eq!(quantity, 4);
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn repeated_selection_sets_cumulative_amount() {
        let available = stock();
        let mut selected = Assortment::new();

        select(Some("T-shirt"), 4, &available, &mut selected).unwrap();
        let quantity = select(Some("T-shirt"), 6, &available, &mut selected).unwrap();

        assert_eq!(quantity, 10);
    }

    #[test]
    fn available_stock_is_not_decremented() {
        let available = stock();
        let before = available.clone();
        let mut selected = Assortment::new();

        select(Some("T-shirt"), 4, &available, &mut selected).unwrap();

        assert_eq!(available, before);
    }

    #[test]
    fn amount_above_stock_is_insufficient() {
        let available = stock();
        let mut selected = Assortment::new();

        let err = select(Some("T-shirt"), 11, &available, &mut selected).unwrap_err();

        assert_eq!(err, DomainError::InsufficientStock { available: 10 });
        assert!(selected.is_empty());
    }

    #[test]
    fn cumulative_selection_above_stock_is_rejected() {
        let available = stock();
        let mut selected = Assortment::new();
        select(Some("T-shirt"), 7, &available, &mut selected).unwrap();
        let before = selected.clone();

        let err = select(Some("T-shirt"), 4, &available, &mut selected).unwrap_err();

        assert_eq!(err, DomainError::SelectionExceedsStock { available: 10 });
        assert_eq!(selected, before);
    }

    #[test]
    fn amount_below_one_is_rejected() {
        let available = stock();
        let mut selected = Assortment::new();

        for amount in [0, -5] {
            let err = select(Some("T-shirt"), amount, &available, &mut selected).unwrap_err();
            assert!(matches!(err, DomainError::InvalidArgument(_)));
        }
    }

    #[test]
    fn missing_inputs_are_distinct_invalid_arguments() {
        let available = stock();
        let mut selected = Assortment::new();

        let no_choice = select(None, 1, &available, &mut selected).unwrap_err();
        let no_available = SelectionService::fill_assortment_with_selected_product(
            Some("T-shirt"),
            1,
            None,
            Some(&mut selected),
        )
        .unwrap_err();
        let no_selected = SelectionService::fill_assortment_with_selected_product(
            Some("T-shirt"),
            1,
            Some(&available),
            None,
        )
        .unwrap_err();

        for err in [&no_choice, &no_available, &no_selected] {
            assert!(matches!(err, DomainError::InvalidArgument(_)));
        }
        assert_ne!(no_choice, no_available);
        assert_ne!(no_available, no_selected);
    }

    #[test]
    fn unknown_name_means_no_product_selected() {
        let available = stock();
        let mut selected = Assortment::new();

        let err = select(Some("Hat"), 1, &available, &mut selected).unwrap_err();

        assert_eq!(err, DomainError::invalid_argument("no product selected"));
        assert!(selected.is_empty());
    }

    #[test]
    fn combo_box_lists_available_names() {
        let names = SelectionService::fill_combo_box_names(Some(&stock())).unwrap();
        assert_eq!(names, vec!["T-shirt".to_string(), "Jeans".to_string()]);
        assert!(SelectionService::fill_combo_box_names(None).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the selected quantity never exceeds available stock,
        /// whatever sequence of requests is made.
        #[test]
        fn selection_never_exceeds_stock(requests in prop::collection::vec(1i64..8i64, 1..12)) {
            let available = stock();
            let mut selected = Assortment::new();
            let mut expected = 0i64;

            for amount in requests {
                match select(Some("T-shirt"), amount, &available, &mut selected) {
                    Ok(quantity) => {
                        expected += amount;
                        prop_assert_eq!(i64::from(quantity), expected);
                    }
                    Err(err) => prop_assert!(err.is_invalid_argument()),
                }
                prop_assert!(selected.quantity_of(&tshirt()) <= 10);
            }
        }
    }
}
