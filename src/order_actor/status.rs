//! Order status transition policy.

use super::error::OrderError;
use crate::model::OrderStatus;
use serde::{Deserialize, Serialize};

/// Which status changes the admin may make.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Any status may be set from any status.
    #[default]
    Unrestricted,
    /// Pending → Confirmed → Processing → Ready → Delivered, with Cancelled
    /// reachable from every non-terminal status. Delivered and Cancelled are final.
    Directed,
}

impl TransitionPolicy {
    pub fn allows(self, from: OrderStatus, to: OrderStatus) -> bool {
        if from == to {
            return true;
        }
        match self {
            TransitionPolicy::Unrestricted => true,
            TransitionPolicy::Directed => {
                if from.is_terminal() {
                    return false;
                }
                to == OrderStatus::Cancelled || next_in_line(from) == Some(to)
            }
        }
    }

    pub fn check(self, from: OrderStatus, to: OrderStatus) -> Result<(), OrderError> {
        if self.allows(from, to) {
            Ok(())
        } else {
            Err(OrderError::TransitionNotAllowed { from, to })
        }
    }
}

fn next_in_line(status: OrderStatus) -> Option<OrderStatus> {
    match status {
        OrderStatus::Pending => Some(OrderStatus::Confirmed),
        OrderStatus::Confirmed => Some(OrderStatus::Processing),
        OrderStatus::Processing => Some(OrderStatus::Ready),
        OrderStatus::Ready => Some(OrderStatus::Delivered),
        OrderStatus::Delivered | OrderStatus::Cancelled => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use OrderStatus::*;

    #[test]
    fn unrestricted_allows_everything() {
        for from in OrderStatus::ALL {
            for to in OrderStatus::ALL {
                assert!(TransitionPolicy::Unrestricted.allows(from, to));
            }
        }
    }

    #[test]
    fn directed_walks_forward_one_step() {
        let policy = TransitionPolicy::Directed;
        assert!(policy.allows(Pending, Confirmed));
        assert!(policy.allows(Ready, Delivered));
        assert!(!policy.allows(Pending, Processing));
        assert!(!policy.allows(Processing, Confirmed));
    }

    #[test]
    fn directed_cancels_until_terminal() {
        let policy = TransitionPolicy::Directed;
        for from in [Pending, Confirmed, Processing, Ready] {
            assert!(policy.allows(from, Cancelled));
        }
        assert_eq!(
            policy.check(Delivered, Cancelled),
            Err(OrderError::TransitionNotAllowed {
                from: Delivered,
                to: Cancelled
            })
        );
        assert!(!policy.allows(Cancelled, Pending));
    }

    #[test]
    fn same_status_is_always_fine() {
        for status in OrderStatus::ALL {
            assert!(TransitionPolicy::Directed.allows(status, status));
        }
    }

    #[test]
    fn policy_reads_from_config_labels() {
        let policy: TransitionPolicy = serde_yaml::from_str("directed").unwrap();
        assert_eq!(policy, TransitionPolicy::Directed);
    }
}
