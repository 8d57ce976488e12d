use crate::{config::Boundary, users::models::User};

use super::Direction;

///
/// Whether a `magnitude` in `direction` may be submitted for `user`: the amount is positive, the
/// user is known and enabled, and the resulting balance stays inside `boundary`.
///
/// The prospective balance is only used for this check; the stored balance always comes from the
/// backend.
///
pub fn is_transaction_valid(
    magnitude: i64,
    user: Option<&User>,
    direction: Direction,
    boundary: &Boundary,
) -> bool {
    if magnitude <= 0 {
        return false;
    }
    let user = match user {
        Some(user) if !user.is_disabled => user,
        _ => return false,
    };

    match user.balance.checked_add(direction.signed(magnitude)) {
        Some(next) => boundary.contains(next),
        None => false,
    }
}
