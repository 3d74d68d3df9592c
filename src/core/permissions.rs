use thiserror::Error;
use uuid::Uuid;
use crate::models::{Member, Membership, MembershipPermissions, Role};

/// Reasons a membership action is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionError {
    #[error("Member {0} is not part of this group")]
    MemberNotFound(Uuid),

    #[error("Group admins cannot be removed")]
    CannotRemoveAdmin,

    #[error("Use leave group to remove yourself")]
    CannotRemoveSelf,

    #[error("Group admins must delete the group instead of leaving")]
    AdminCannotLeave,

    #[error("Only the group admin can delete the group")]
    NotAdmin,

    #[error("Group still has {0} members")]
    GroupNotEmpty(usize),
}

/// Action requested against the current user's membership
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipAction {
    RemoveMember { member_id: Uuid },
    LeaveGroup,
    DeleteGroup,
}

impl MembershipAction {
    pub fn name(&self) -> &'static str {
        match self {
            MembershipAction::RemoveMember { .. } => "remove_member",
            MembershipAction::LeaveGroup => "leave_group",
            MembershipAction::DeleteGroup => "delete_group",
        }
    }
}

/// Authorized outcome of a membership action
///
/// Values are only produced by [`authorize`]; the persistence layer
/// executes nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipTransition {
    MemberRemoved { group_id: Uuid, member_id: Uuid },
    Left { group_id: Uuid, membership_id: Uuid },
    GroupDeleted { group_id: Uuid },
}

/// An admin cannot be removed and nobody removes themself this way
#[inline]
pub fn can_remove_member(membership: &Membership, target: &Member) -> bool {
    target.role != Role::Admin && target.user_id != membership.user_id
}

/// Only a sole admin may delete the group
#[inline]
pub fn can_delete_group(membership: &Membership) -> bool {
    membership.role == Role::Admin && membership.group.members.len() <= 1
}

#[inline]
pub fn can_leave_group(membership: &Membership) -> bool {
    membership.role != Role::Admin
}

/// Summarize the actions available to the membership's user
pub fn permissions_for(membership: &Membership) -> MembershipPermissions {
    MembershipPermissions {
        can_leave_group: can_leave_group(membership),
        can_delete_group: can_delete_group(membership),
        removable_member_ids: membership
            .group
            .members
            .iter()
            .filter(|member| can_remove_member(membership, member))
            .map(|member| member.id)
            .collect(),
    }
}

/// Check an action against a membership snapshot
pub fn authorize(
    membership: &Membership,
    action: MembershipAction,
) -> Result<MembershipTransition, PermissionError> {
    match action {
        MembershipAction::RemoveMember { member_id } => {
            let target = membership
                .find_member(member_id)
                .ok_or(PermissionError::MemberNotFound(member_id))?;

            if target.role == Role::Admin {
                return Err(PermissionError::CannotRemoveAdmin);
            }
            if target.user_id == membership.user_id {
                return Err(PermissionError::CannotRemoveSelf);
            }
            debug_assert!(can_remove_member(membership, target));

            Ok(MembershipTransition::MemberRemoved {
                group_id: membership.group_id,
                member_id,
            })
        }
        MembershipAction::LeaveGroup => {
            if !can_leave_group(membership) {
                return Err(PermissionError::AdminCannotLeave);
            }

            Ok(MembershipTransition::Left {
                group_id: membership.group_id,
                membership_id: membership.id,
            })
        }
        MembershipAction::DeleteGroup => {
            if membership.role != Role::Admin {
                return Err(PermissionError::NotAdmin);
            }
            if !can_delete_group(membership) {
                return Err(PermissionError::GroupNotEmpty(membership.group.members.len()));
            }

            Ok(MembershipTransition::GroupDeleted {
                group_id: membership.group_id,
            })
        }
    }
}
