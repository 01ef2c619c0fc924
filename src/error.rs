//! Error types for subnet calculations.

use num_bigint::BigUint;
use thiserror::Error;

/// Errors raised while parsing, validating or splitting a network.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubnetError {
    /// Input could not be parsed as `address/prefix`.
    #[error("invalid CIDR {input:?}: {reason}")]
    InvalidCidr { input: String, reason: String },

    /// Split target is not a longer prefix than the network's own.
    #[error("target prefix /{target} must be larger than network prefix /{current}")]
    TargetNotLarger { target: u8, current: u8 },

    /// Split target is longer than the address family allows.
    #[error("target prefix /{target} exceeds maximum /{max} for this address family")]
    TargetExceedsAddressWidth { target: u8, max: u8 },

    /// Split would generate more subnets than the generation cap.
    #[error("requested split would generate {count} subnets (limit {limit})")]
    TooManySubnets { count: BigUint, limit: u64 },

    /// Initial interactive split is deeper than the tree allows.
    #[error("target subnet size /{target} exceeds maximum allowed /{max}")]
    TargetExceedsSplitDepth { target: u8, max: u8 },
}

impl SubnetError {
    pub(crate) fn invalid_cidr(input: &str, reason: impl ToString) -> SubnetError {
        SubnetError::InvalidCidr {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_many_subnets_message_names_count_and_limit() {
        let err = SubnetError::TooManySubnets {
            count: BigUint::from(2_147_483_648u64),
            limit: 1_000_000,
        };
        assert_eq!(
            err.to_string(),
            "requested split would generate 2147483648 subnets (limit 1000000)"
        );
    }

    #[test]
    fn test_target_not_larger_message() {
        let err = SubnetError::TargetNotLarger {
            target: 20,
            current: 24,
        };
        assert_eq!(
            err.to_string(),
            "target prefix /20 must be larger than network prefix /24"
        );
    }
}
