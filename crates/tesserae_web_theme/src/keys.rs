#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::{fmt, str::FromStr};

use enum_assoc::Assoc;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::UnknownKeyError;

/// Named UI slots that can be styled through an appearance.
///
/// Compound keys (`<extension>__<base>`) are declared after every plain key so
/// their rules are emitted later and win over the base slot's rules.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[func(pub fn name(&self) -> &'static str)]
pub enum AppearanceKey {
    /// Outermost container of a provider.
    #[assoc(name = "root")]
    Root,
    /// Any button.
    #[assoc(name = "button")]
    Button,
    /// Any icon.
    #[assoc(name = "icon")]
    Icon,
    /// Unread count badge.
    #[assoc(name = "counter")]
    Counter,
    /// Wrapper around the bell.
    #[assoc(name = "bellContainer")]
    BellContainer,
    /// The bell glyph.
    #[assoc(name = "bellIcon")]
    BellIcon,
    /// Unread indicator on the bell.
    #[assoc(name = "bellDot")]
    BellDot,
    /// Element that opens a popover.
    #[assoc(name = "popoverTrigger")]
    PopoverTrigger,
    /// Floating popover panel.
    #[assoc(name = "popoverContent")]
    PopoverContent,
    /// Element that opens a dropdown.
    #[assoc(name = "dropdownTrigger")]
    DropdownTrigger,
    /// Floating dropdown panel.
    #[assoc(name = "dropdownContent")]
    DropdownContent,
    /// Row inside a dropdown.
    #[assoc(name = "dropdownItem")]
    DropdownItem,
    /// Text of a dropdown row.
    #[assoc(name = "dropdownItemLabel")]
    DropdownItemLabel,
    /// Element that shows a tooltip.
    #[assoc(name = "tooltipTrigger")]
    TooltipTrigger,
    /// Floating tooltip panel.
    #[assoc(name = "tooltipContent")]
    TooltipContent,
    /// Inbox container.
    #[assoc(name = "inbox")]
    Inbox,
    /// Header bar of the inbox.
    #[assoc(name = "inboxHeader")]
    InboxHeader,
    /// Scrollable body of the inbox.
    #[assoc(name = "inboxContent")]
    InboxContent,
    /// Status filter in the inbox header.
    #[assoc(name = "inboxStatus")]
    InboxStatus,
    /// Tab strip.
    #[assoc(name = "tabs")]
    Tabs,
    /// Single tab.
    #[assoc(name = "tab")]
    Tab,
    /// Preferences panel.
    #[assoc(name = "preferences")]
    Preferences,
    /// Header bar of the preferences panel.
    #[assoc(name = "preferencesHeader")]
    PreferencesHeader,
    /// List of notifications.
    #[assoc(name = "notificationList")]
    NotificationList,
    /// Notice shown when the list is empty.
    #[assoc(name = "notificationListEmptyNotice")]
    NotificationListEmptyNotice,
    /// Icon of the empty notice.
    #[assoc(name = "notificationListEmptyNoticeIcon")]
    NotificationListEmptyNoticeIcon,
    /// Single notification row.
    #[assoc(name = "notification")]
    Notification,
    /// Unread marker of a notification.
    #[assoc(name = "notificationDot")]
    NotificationDot,
    /// Subject line of a notification.
    #[assoc(name = "notificationSubject")]
    NotificationSubject,
    /// Body text of a notification.
    #[assoc(name = "notificationBody")]
    NotificationBody,
    /// Timestamp of a notification.
    #[assoc(name = "notificationDate")]
    NotificationDate,
    /// Avatar or image of a notification.
    #[assoc(name = "notificationImage")]
    NotificationImage,
    /// Back navigation button, extends `button`.
    #[assoc(name = "back__button")]
    BackButton,
    /// Primary action of a notification, extends `button`.
    #[assoc(name = "notificationPrimaryAction__button")]
    NotificationPrimaryActionButton,
    /// Secondary action of a notification, extends `button`.
    #[assoc(name = "notificationSecondaryAction__button")]
    NotificationSecondaryActionButton,
    /// Opens the notification actions menu, extends `dropdownTrigger`.
    #[assoc(name = "moreActions__dropdownTrigger")]
    MoreActionsDropdownTrigger,
    /// Opens the status filter, extends `dropdownTrigger`.
    #[assoc(name = "inboxStatus__dropdownTrigger")]
    InboxStatusDropdownTrigger,
    /// Row of the status filter, extends `dropdownItem`.
    #[assoc(name = "inboxStatus__dropdownItem")]
    InboxStatusDropdownItem,
    /// Text of a status filter row, extends `dropdownItemLabel`.
    #[assoc(name = "inboxStatus__dropdownItemLabel")]
    InboxStatusDropdownItemLabel,
    /// Fallback icon of a notification image, extends `icon`.
    #[assoc(name = "notificationImage__icon")]
    NotificationImageIcon,
}

impl AppearanceKey {
    pub const ALL: [AppearanceKey; 40] = [
        AppearanceKey::Root,
        AppearanceKey::Button,
        AppearanceKey::Icon,
        AppearanceKey::Counter,
        AppearanceKey::BellContainer,
        AppearanceKey::BellIcon,
        AppearanceKey::BellDot,
        AppearanceKey::PopoverTrigger,
        AppearanceKey::PopoverContent,
        AppearanceKey::DropdownTrigger,
        AppearanceKey::DropdownContent,
        AppearanceKey::DropdownItem,
        AppearanceKey::DropdownItemLabel,
        AppearanceKey::TooltipTrigger,
        AppearanceKey::TooltipContent,
        AppearanceKey::Inbox,
        AppearanceKey::InboxHeader,
        AppearanceKey::InboxContent,
        AppearanceKey::InboxStatus,
        AppearanceKey::Tabs,
        AppearanceKey::Tab,
        AppearanceKey::Preferences,
        AppearanceKey::PreferencesHeader,
        AppearanceKey::NotificationList,
        AppearanceKey::NotificationListEmptyNotice,
        AppearanceKey::NotificationListEmptyNoticeIcon,
        AppearanceKey::Notification,
        AppearanceKey::NotificationDot,
        AppearanceKey::NotificationSubject,
        AppearanceKey::NotificationBody,
        AppearanceKey::NotificationDate,
        AppearanceKey::NotificationImage,
        AppearanceKey::BackButton,
        AppearanceKey::NotificationPrimaryActionButton,
        AppearanceKey::NotificationSecondaryActionButton,
        AppearanceKey::MoreActionsDropdownTrigger,
        AppearanceKey::InboxStatusDropdownTrigger,
        AppearanceKey::InboxStatusDropdownItem,
        AppearanceKey::InboxStatusDropdownItemLabel,
        AppearanceKey::NotificationImageIcon,
    ];

    /// The slot a compound key extends, if any.
    pub fn base(&self) -> Option<AppearanceKey> {
        match self {
            Self::BackButton
            | Self::NotificationPrimaryActionButton
            | Self::NotificationSecondaryActionButton => Some(Self::Button),
            Self::MoreActionsDropdownTrigger | Self::InboxStatusDropdownTrigger => {
                Some(Self::DropdownTrigger)
            }
            Self::InboxStatusDropdownItem => Some(Self::DropdownItem),
            Self::InboxStatusDropdownItemLabel => Some(Self::DropdownItemLabel),
            Self::NotificationImageIcon => Some(Self::Icon),
            _ => None,
        }
    }

    pub fn is_compound(&self) -> bool {
        self.base().is_some()
    }
}

impl fmt::Display for AppearanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AppearanceKey {
    type Err = UnknownKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppearanceKey::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| UnknownKeyError(s.to_string()))
    }
}

impl Serialize for AppearanceKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for AppearanceKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_sorted_and_complete() {
        let mut sorted = AppearanceKey::ALL;
        sorted.sort();
        assert_eq!(sorted, AppearanceKey::ALL, "ALL should follow declaration order");

        for key in AppearanceKey::ALL {
            assert_eq!(key.name().parse::<AppearanceKey>().ok(), Some(key));
        }
    }

    #[test]
    fn test_base_table_matches_wire_names() {
        for key in AppearanceKey::ALL {
            match key.base() {
                Some(base) => {
                    let suffix = key.name().rsplit("__").next();
                    assert_eq!(suffix, Some(base.name()), "{key} should extend {base}");
                    assert!(!base.is_compound(), "{base} should be a plain key");
                    assert!(base < key, "{base} should be declared before {key}");
                }
                None => assert!(!key.name().contains("__"), "{key} should be plain"),
            }
        }
    }

    #[test]
    fn test_back_button_extends_button() {
        assert_eq!(AppearanceKey::BackButton.base(), Some(AppearanceKey::Button));
        assert_eq!(AppearanceKey::Button.base(), None);
    }
}
