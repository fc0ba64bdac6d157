//! Business constants shared by the pricing and access-check paths.
//!
//! These values are part of the service contract: the price bound is what
//! clients may assume about `valor`, and the remaining constants drive the
//! two placeholder checks the handler performs on every request.

/// Exclusive upper bound for quoted prices, in BRL.
///
/// Every draw from the pricing source lies in `[0.0, VALOR_LIMIT)`.
pub const VALOR_LIMIT: f64 = 140.0;

/// Probe values above this limit trip the pricing guard.
///
/// The guard inspects a throwaway draw; the quote returned to the caller is
/// always a separate draw (see the server's handler).
pub const PRICING_GUARD_LIMIT: f64 = 100.0;

/// CEP suffix flagged by the access-check placeholder.
pub const RESTRICTED_CEP_SUFFIX: &str = "333";

/// Detail code carried inside permission-denied status payloads.
pub const ACCESS_DENIED_DETAIL_CODE: i32 = 401;
