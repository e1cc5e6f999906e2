//! Input validation
//!
//! Boundary checks applied before any arithmetic. Prices, fees, and rates
//! must be finite and within bounds; quantities must be positive. Anything
//! that fails comes back as a typed validation error rather than flowing
//! into the calculation as a default.

use shared::models::Customer;
use shared::order::OrderInput;

use crate::error::CalcError;
use crate::money::{MAX_AMOUNT, MAX_QUANTITY};

/// Validate that an f64 is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field_name: &str) -> Result<(), CalcError> {
    if !value.is_finite() {
        return Err(CalcError::Validation(format!(
            "{} must be a finite number, got {}",
            field_name, value
        )));
    }
    Ok(())
}

/// Validate a non-negative bounded monetary value
fn require_amount(value: f64, field_name: &str) -> Result<(), CalcError> {
    require_finite(value, field_name)?;
    if value < 0.0 {
        return Err(CalcError::Validation(format!(
            "{} must be non-negative, got {}",
            field_name, value
        )));
    }
    if value > MAX_AMOUNT {
        return Err(CalcError::Validation(format!(
            "{} exceeds maximum allowed ({}), got {}",
            field_name, MAX_AMOUNT, value
        )));
    }
    Ok(())
}

/// Validate an OrderInput before processing
pub fn validate_order_input(input: &OrderInput) -> Result<(), CalcError> {
    for item in &input.items {
        // Quantity must be positive and within bounds
        if item.quantity <= 0 {
            return Err(CalcError::Validation(format!(
                "quantity must be positive, got {} for item '{}'",
                item.quantity, item.name
            )));
        }
        if item.quantity > MAX_QUANTITY {
            return Err(CalcError::Validation(format!(
                "quantity exceeds maximum allowed ({}), got {} for item '{}'",
                MAX_QUANTITY, item.quantity, item.name
            )));
        }

        // Every configured tier price must be a valid monetary value
        for (tier, price) in &item.tier_prices {
            require_amount(*price, &format!("tier {} price of item '{}'", tier, item.name))?;
        }

        if let Some(per_unit) = item.flat_tax_per_unit {
            require_amount(
                per_unit,
                &format!("flat tax per unit of item '{}'", item.name),
            )?;
        }
    }

    if let Some(fee) = input.delivery_fee {
        require_amount(fee, "delivery fee")?;
    }

    if let Some(points) = input.redeem_points {
        if points < 0 {
            return Err(CalcError::Validation(format!(
                "redeem points must be non-negative, got {}",
                points
            )));
        }
    }

    Ok(())
}

/// Validate a Customer profile before processing
pub fn validate_customer(customer: &Customer) -> Result<(), CalcError> {
    if !(1..=5).contains(&customer.tier) {
        return Err(CalcError::Validation(format!(
            "customer tier must be between 1 and 5, got {}",
            customer.tier
        )));
    }

    let loyalty = &customer.loyalty;
    require_finite(loyalty.earn_rate_per_dollar, "earn rate per dollar")?;
    if loyalty.earn_rate_per_dollar < 0.0 {
        return Err(CalcError::Validation(format!(
            "earn rate per dollar must be non-negative, got {}",
            loyalty.earn_rate_per_dollar
        )));
    }

    require_finite(loyalty.redeem_value_per_point, "redeem value per point")?;
    if loyalty.redeem_value_per_point < 0.0 {
        return Err(CalcError::Validation(format!(
            "redeem value per point must be non-negative, got {}",
            loyalty.redeem_value_per_point
        )));
    }

    if let Some(pct) = loyalty.max_redeem_percent {
        require_finite(pct, "max redeem percent")?;
        if !(0.0..=100.0).contains(&pct) {
            return Err(CalcError::Validation(format!(
                "max redeem percent must be between 0 and 100, got {}",
                pct
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::LoyaltyProfile;
    use shared::order::{OrderInputItem, OrderStatus};
    use std::collections::HashMap;

    fn make_item(name: &str, quantity: i32, price: f64) -> OrderInputItem {
        OrderInputItem {
            name: name.to_string(),
            quantity,
            tier_prices: HashMap::from([(1, price)]),
            category: None,
            has_flat_tax: false,
            flat_tax_id: None,
            flat_tax_per_unit: None,
            flat_tax_label: None,
        }
    }

    fn make_input(items: Vec<OrderInputItem>) -> OrderInput {
        OrderInput {
            items,
            is_delivery: false,
            delivery_fee: None,
            redeem_points: None,
            status: OrderStatus::Draft,
        }
    }

    fn make_customer(tier: u8) -> Customer {
        Customer {
            tier,
            has_flat_tax: false,
            loyalty: LoyaltyProfile::inactive(),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        let input = make_input(vec![make_item("Filters", 3, 4.5)]);
        assert!(validate_order_input(&input).is_ok());
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let input = make_input(vec![make_item("Filters", 0, 4.5)]);
        assert!(validate_order_input(&input).is_err());
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let input = make_input(vec![make_item("Filters", -2, 4.5)]);
        assert!(validate_order_input(&input).is_err());
    }

    #[test]
    fn test_excessive_quantity_rejected() {
        let input = make_input(vec![make_item("Filters", MAX_QUANTITY + 1, 4.5)]);
        assert!(validate_order_input(&input).is_err());
    }

    #[test]
    fn test_nan_price_rejected() {
        let input = make_input(vec![make_item("Filters", 1, f64::NAN)]);
        assert!(validate_order_input(&input).is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let input = make_input(vec![make_item("Filters", 1, -1.0)]);
        assert!(validate_order_input(&input).is_err());
    }

    #[test]
    fn test_negative_delivery_fee_rejected() {
        let mut input = make_input(vec![make_item("Filters", 1, 4.5)]);
        input.is_delivery = true;
        input.delivery_fee = Some(-5.0);
        assert!(validate_order_input(&input).is_err());
    }

    #[test]
    fn test_negative_redeem_points_rejected() {
        let mut input = make_input(vec![make_item("Filters", 1, 4.5)]);
        input.redeem_points = Some(-100);
        assert!(validate_order_input(&input).is_err());
    }

    #[test]
    fn test_tier_out_of_range_rejected() {
        assert!(validate_customer(&make_customer(0)).is_err());
        assert!(validate_customer(&make_customer(6)).is_err());
        assert!(validate_customer(&make_customer(3)).is_ok());
    }

    #[test]
    fn test_max_redeem_percent_bounds() {
        let mut customer = make_customer(1);
        customer.loyalty.max_redeem_percent = Some(150.0);
        assert!(validate_customer(&customer).is_err());

        customer.loyalty.max_redeem_percent = Some(50.0);
        assert!(validate_customer(&customer).is_ok());
    }
}
