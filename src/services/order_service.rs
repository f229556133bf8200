use chrono::Utc;

use crate::{
    dto::orders::{CheckoutRequest, CurrentOrder, OrderList},
    error::{AppError, AppResult, FieldError},
    middleware::auth::AuthUser,
    models::{Order, Taco},
    response::{ApiResponse, Meta},
    services::taco_service,
    state::AppState,
};

/// The caller's Open order with its taco references resolved for display.
pub async fn current_order(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<CurrentOrder>> {
    let draft = state.sessions.load(user.user_id).await;

    let mut tacos: Vec<Taco> = Vec::with_capacity(draft.tacos.len());
    for taco_id in &draft.tacos {
        if let Some(taco) = state.repos.tacos.find_by_id(*taco_id).await? {
            tacos.push(taco);
        }
    }
    let tacos = taco_service::summarize(&state.repos, tacos).await?;

    Ok(ApiResponse::success(
        "Ok",
        CurrentOrder { tacos },
        Some(Meta::empty()),
    ))
}

/// Finalizes the Open order. Validation failure reports every field problem
/// at once and leaves the draft as it was; nothing is persisted until the
/// whole form passes.
pub async fn checkout(
    state: &AppState,
    user: &AuthUser,
    payload: CheckoutRequest,
) -> AppResult<ApiResponse<Order>> {
    let draft = state.sessions.load(user.user_id).await;

    let mut errors = validate_checkout(&payload);
    if draft.is_empty() {
        errors.insert(
            0,
            FieldError::new("tacos", "An order needs at least one taco"),
        );
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let order = Order {
        id: None,
        user_id: user.user_id,
        placed_at: Utc::now(),
        tacos: draft.tacos,
        delivery_name: payload.delivery_name,
        delivery_street: payload.delivery_street,
        delivery_city: payload.delivery_city,
        delivery_state: payload.delivery_state,
        delivery_zip: payload.delivery_zip,
        cc_number: payload.cc_number,
        cc_expiration: payload.cc_expiration,
        cc_cvv: payload.cc_cvv,
    };
    let placed = state.repos.orders.save(order).await?;

    // The session's Open order is done; the next design starts a fresh one.
    state.sessions.discard(user.user_id).await;

    tracing::info!(user_id = %user.user_id, order_id = ?placed.id, "order placed");
    Ok(ApiResponse::success("Order placed", placed, Some(Meta::empty())))
}

/// The user's most recently placed orders, newest first.
pub async fn list_recent(
    state: &AppState,
    user: &AuthUser,
    per_page: Option<i64>,
) -> AppResult<ApiResponse<OrderList>> {
    let page_size = per_page.unwrap_or(state.orders_page_size).clamp(1, 100);
    let items = state
        .repos
        .orders
        .find_recent_by_user(user.user_id, page_size)
        .await?;

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Ok",
        OrderList { items },
        Some(Meta::new(1, page_size, total)),
    ))
}

fn validate_checkout(payload: &CheckoutRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let required = [
        ("delivery_name", &payload.delivery_name),
        ("delivery_street", &payload.delivery_street),
        ("delivery_city", &payload.delivery_city),
        ("delivery_state", &payload.delivery_state),
        ("delivery_zip", &payload.delivery_zip),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            errors.push(FieldError::new(field, "This field is required"));
        }
    }

    if !luhn_valid(&payload.cc_number) {
        errors.push(FieldError::new("cc_number", "Not a valid credit card number"));
    }
    if !expiration_valid(&payload.cc_expiration) {
        errors.push(FieldError::new("cc_expiration", "Must be formatted MM/YY"));
    }
    if payload.cc_cvv.len() != 3 || !payload.cc_cvv.chars().all(|c| c.is_ascii_digit()) {
        errors.push(FieldError::new("cc_cvv", "Invalid CVV"));
    }

    errors
}

/// Luhn checksum over the card number, ignoring spaces and dashes.
fn luhn_valid(number: &str) -> bool {
    let digits: Vec<u32> = number
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<u32>>>()
        .unwrap_or_default();
    if digits.is_empty() {
        return false;
    }

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

/// Expiration dates come in as `MM/YY`.
fn expiration_valid(expiration: &str) -> bool {
    let Some((month, year)) = expiration.split_once('/') else {
        return false;
    };
    if month.len() != 2 || year.len() != 2 {
        return false;
    }
    let Ok(month) = month.parse::<u32>() else {
        return false;
    };
    (1..=12).contains(&month) && year.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luhn_accepts_known_good_numbers() {
        assert!(luhn_valid("4111111111111111"));
        assert!(luhn_valid("4111 1111 1111 1111"));
        assert!(luhn_valid("5500-0000-0000-0004"));
    }

    #[test]
    fn luhn_rejects_bad_input() {
        assert!(!luhn_valid("4111111111111112"));
        assert!(!luhn_valid(""));
        assert!(!luhn_valid("not a number"));
    }

    #[test]
    fn expiration_requires_mm_slash_yy() {
        assert!(expiration_valid("01/26"));
        assert!(expiration_valid("12/30"));
        assert!(!expiration_valid("13/26"));
        assert!(!expiration_valid("00/26"));
        assert!(!expiration_valid("1/26"));
        assert!(!expiration_valid("01-26"));
        assert!(!expiration_valid("01/2026"));
    }
}
