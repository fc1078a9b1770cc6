//! Admin role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available to admin-portal users.
///
/// Roles are ordered by privilege level: Owner > Admin > ContentManager > Support.
/// The authoritative value for a given account originates from the remote
/// system; it is never computed locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    /// Full system access, including admin-user and settings management.
    Owner,
    /// Full operational access to books, orders, and customers.
    Admin,
    /// Can create and manage books and stickers, view orders and analytics.
    ContentManager,
    /// Can view content and update order status, assisting customers.
    Support,
}

impl AdminRole {
    /// Return the privilege level (higher = more privileged).
    pub fn privilege_level(&self) -> u8 {
        match self {
            Self::Owner => 4,
            Self::Admin => 3,
            Self::ContentManager => 2,
            Self::Support => 1,
        }
    }

    /// Check if this role has at least the given role's privileges.
    pub fn has_at_least(&self, other: &AdminRole) -> bool {
        self.privilege_level() >= other.privilege_level()
    }

    /// Check if this role is the owner.
    pub fn is_owner(&self) -> bool {
        matches!(self, Self::Owner)
    }

    /// Check if this role is an admin or the owner.
    pub fn is_admin_or_owner(&self) -> bool {
        self.has_at_least(&Self::Admin)
    }

    /// Check if this role is a content manager or higher.
    pub fn is_content_manager_or_above(&self) -> bool {
        self.has_at_least(&Self::ContentManager)
    }

    /// Return the role as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Admin => "admin",
            Self::ContentManager => "content_manager",
            Self::Support => "support",
        }
    }

    /// Human-readable role name for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Admin => "Admin",
            Self::ContentManager => "Content Manager",
            Self::Support => "Support Staff",
        }
    }

    /// Short description of what the role may do.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Owner => "Full system access with ability to manage all admins and critical settings",
            Self::Admin => "Full operational access to manage books, orders, and customers",
            Self::ContentManager => "Can create and manage books and stickers, view orders and analytics",
            Self::Support => "Can view and update order status, assist customers with inquiries",
        }
    }

    /// Display color token for role badges.
    pub fn badge_color(&self) -> &'static str {
        match self {
            Self::Owner => "purple",
            Self::Admin => "indigo",
            Self::ContentManager => "green",
            Self::Support => "orange",
        }
    }

    /// All roles, most privileged first.
    pub const ALL: [AdminRole; 4] = [
        Self::Owner,
        Self::Admin,
        Self::ContentManager,
        Self::Support,
    ];
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AdminRole {
    type Err = storynest_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "owner" => Ok(Self::Owner),
            "admin" => Ok(Self::Admin),
            "content_manager" => Ok(Self::ContentManager),
            "support" => Ok(Self::Support),
            _ => Err(storynest_core::AppError::validation(format!(
                "Invalid admin role: '{s}'. Expected one of: owner, admin, content_manager, support"
            ))),
        }
    }
}
