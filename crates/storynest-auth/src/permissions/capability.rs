//! Capability flags checked against admin roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named permission flag, grouped by resource area.
///
/// The set is closed: every UI action the console exposes is gated by
/// exactly one of these flags, and the role table in
/// [`policies`](super::policies) assigns each role a value for every flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Capability {
    // Dashboard
    /// View the dashboard screen.
    ViewDashboard,

    // Books
    /// View the book catalog.
    ViewBooks,
    /// Create books.
    CreateBooks,
    /// Edit books.
    EditBooks,
    /// Delete books.
    DeleteBooks,

    // Stickers
    /// View sticker packs.
    ViewStickers,
    /// Create sticker packs.
    CreateStickers,
    /// Edit sticker packs.
    EditStickers,
    /// Delete sticker packs.
    DeleteStickers,

    // Orders
    /// View orders.
    ViewOrders,
    /// Update order fulfillment status.
    UpdateOrderStatus,
    /// Cancel orders.
    CancelOrders,
    /// Refund orders.
    RefundOrders,

    // Customers
    /// View customer accounts.
    ViewUsers,
    /// Edit customer accounts.
    EditUsers,
    /// Delete customer accounts.
    DeleteUsers,

    // Admin users
    /// View admin accounts.
    ViewAdminUsers,
    /// Create admin accounts.
    CreateAdminUsers,
    /// Edit admin accounts.
    EditAdminUsers,
    /// Delete admin accounts.
    DeleteAdminUsers,
    /// Change admin account roles.
    ManageRoles,

    // Settings
    /// View platform settings.
    ViewSettings,
    /// Edit platform settings.
    EditSettings,

    // Analytics
    /// View analytics.
    ViewAnalytics,
    /// Export analytics data.
    ExportData,
}

impl Capability {
    /// Every capability, in table order.
    pub const ALL: [Capability; 25] = [
        Self::ViewDashboard,
        Self::ViewBooks,
        Self::CreateBooks,
        Self::EditBooks,
        Self::DeleteBooks,
        Self::ViewStickers,
        Self::CreateStickers,
        Self::EditStickers,
        Self::DeleteStickers,
        Self::ViewOrders,
        Self::UpdateOrderStatus,
        Self::CancelOrders,
        Self::RefundOrders,
        Self::ViewUsers,
        Self::EditUsers,
        Self::DeleteUsers,
        Self::ViewAdminUsers,
        Self::CreateAdminUsers,
        Self::EditAdminUsers,
        Self::DeleteAdminUsers,
        Self::ManageRoles,
        Self::ViewSettings,
        Self::EditSettings,
        Self::ViewAnalytics,
        Self::ExportData,
    ];

    /// Return the capability's camelCase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewDashboard => "viewDashboard",
            Self::ViewBooks => "viewBooks",
            Self::CreateBooks => "createBooks",
            Self::EditBooks => "editBooks",
            Self::DeleteBooks => "deleteBooks",
            Self::ViewStickers => "viewStickers",
            Self::CreateStickers => "createStickers",
            Self::EditStickers => "editStickers",
            Self::DeleteStickers => "deleteStickers",
            Self::ViewOrders => "viewOrders",
            Self::UpdateOrderStatus => "updateOrderStatus",
            Self::CancelOrders => "cancelOrders",
            Self::RefundOrders => "refundOrders",
            Self::ViewUsers => "viewUsers",
            Self::EditUsers => "editUsers",
            Self::DeleteUsers => "deleteUsers",
            Self::ViewAdminUsers => "viewAdminUsers",
            Self::CreateAdminUsers => "createAdminUsers",
            Self::EditAdminUsers => "editAdminUsers",
            Self::DeleteAdminUsers => "deleteAdminUsers",
            Self::ManageRoles => "manageRoles",
            Self::ViewSettings => "viewSettings",
            Self::EditSettings => "editSettings",
            Self::ViewAnalytics => "viewAnalytics",
            Self::ExportData => "exportData",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Capability {
    type Err = storynest_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| {
                storynest_core::AppError::validation(format!("Unknown capability: '{s}'"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_exhaustive_and_distinct() {
        let mut names: Vec<&str> = Capability::ALL.iter().map(|c| c.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Capability::ALL.len());
    }

    #[test]
    fn test_wire_names_round_trip() {
        for cap in Capability::ALL {
            let json = serde_json::to_string(&cap).unwrap();
            assert_eq!(json, format!("\"{}\"", cap.as_str()));
            let parsed: Capability = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, cap);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "deleteBooks".parse::<Capability>().unwrap(),
            Capability::DeleteBooks
        );
        assert!("launchRockets".parse::<Capability>().is_err());
    }
}
