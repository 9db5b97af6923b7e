//! Check-In Gate
//!
//! Pure admission decision. The handler loads the customer's latest
//! waiver and active membership, calls [`evaluate`], and only writes a
//! visit row on an admit. Denials are answers, not errors: the reasons
//! below go back verbatim for staff to read to the customer.

use shared::models::{MembershipWithPlan, VisitType};

pub const DENY_NO_WAIVER: &str = "No valid waiver on file. Customer must sign waiver first.";
pub const DENY_NO_MEMBERSHIP: &str =
    "No active membership. Use Membership Application to add member, or check in as visitor.";

/// Outcome of the admission check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Admit {
        visit_type: VisitType,
        membership_id: Option<i64>,
    },
    Deny {
        reason: &'static str,
    },
}

/// Decide admission for a check-in request.
///
/// Every admission requires a waiver on file. A member check-in
/// additionally requires an active membership; the other visit types are
/// paid or hosted at the desk and carry no membership link.
pub fn evaluate(
    requested: VisitType,
    has_waiver: bool,
    active: Option<&MembershipWithPlan>,
) -> GateDecision {
    if !has_waiver {
        return GateDecision::Deny {
            reason: DENY_NO_WAIVER,
        };
    }

    match requested {
        VisitType::Member => match active {
            Some(membership) => GateDecision::Admit {
                visit_type: VisitType::Member,
                membership_id: Some(membership.id),
            },
            None => GateDecision::Deny {
                reason: DENY_NO_MEMBERSHIP,
            },
        },
        other => GateDecision::Admit {
            visit_type: other,
            membership_id: None,
        },
    }
}
