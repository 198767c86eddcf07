use crate::action::ClickAction;
use crate::button::ButtonLayout;
use crate::input::Button;
use crate::input::ClickCount;
use crate::input::Timestamp;

use std::convert::TryFrom;
use std::str::FromStr;

pub const BUTTON_LAYOUT: &str = "buttonLayout";
pub const DOUBLE_CLICK_ACTION: &str = "actionDoubleClickTitlebar";
pub const MIDDLE_CLICK_ACTION: &str = "actionMiddleClickTitlebar";
pub const RIGHT_CLICK_ACTION: &str = "actionRightClickTitlebar";
pub const DRAGGABLE_BORDER_WIDTH: &str = "draggableBorderWidth";
pub const DOUBLE_CLICK_TIME: &str = "doubleClickTime";

/// User-tunable frame behavior.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub button_layout: ButtonLayout,
    pub double_click_action: ClickAction,
    pub middle_click_action: ClickAction,
    pub right_click_action: ClickAction,
    pub draggable_border_width: i32,
    pub double_click_time: Timestamp,
    pub double_click_distance: i32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            button_layout: ButtonLayout::default(),
            double_click_action: ClickAction::ToggleMaximize,
            middle_click_action: ClickAction::Lower,
            right_click_action: ClickAction::Menu,
            draggable_border_width: 10,
            double_click_time: 400,
            double_click_distance: 5,
        }
    }
}

impl Preferences {
    /// Builds preferences from a key lookup, keeping the default for every
    /// key that is missing or does not parse.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut prefs = Self::default();

        if let Some(layout) = lookup(BUTTON_LAYOUT) {
            match ButtonLayout::try_from(layout.as_str()) {
                Ok(layout) => prefs.button_layout = layout,
                Err(err) => warn!("keeping default button layout: {}", err),
            }
        }

        parse_into(&lookup, DOUBLE_CLICK_ACTION, &mut prefs.double_click_action);
        parse_into(&lookup, MIDDLE_CLICK_ACTION, &mut prefs.middle_click_action);
        parse_into(&lookup, RIGHT_CLICK_ACTION, &mut prefs.right_click_action);
        parse_into(&lookup, DRAGGABLE_BORDER_WIDTH, &mut prefs.draggable_border_width);
        parse_into(&lookup, DOUBLE_CLICK_TIME, &mut prefs.double_click_time);

        prefs.draggable_border_width = std::cmp::max(0, prefs.draggable_border_width);
        prefs
    }

    pub fn click_action(
        &self,
        button: Button,
        click_count: ClickCount,
    ) -> ClickAction {
        match button {
            Button::Left if click_count >= 2 => self.double_click_action,
            Button::Middle => self.middle_click_action,
            Button::Right => self.right_click_action,
            _ => ClickAction::None,
        }
    }
}

fn parse_into<F, T>(
    lookup: &F,
    key: &str,
    target: &mut T,
) where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(value) = lookup(key) {
        match value.trim().parse() {
            Ok(value) => *target = value,
            Err(_) => warn!("ignoring invalid value \"{}\" for {}", value, key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::button::ButtonFunction;

    use std::collections::HashMap;

    fn lookup_in(map: HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> {
        move |key| map.get(key).map(|value| value.to_string())
    }

    #[test]
    fn missing_keys_keep_defaults() {
        let prefs = Preferences::from_lookup(|_| None);

        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.click_action(Button::Left, 2), ClickAction::ToggleMaximize);
        assert_eq!(prefs.click_action(Button::Left, 1), ClickAction::None);
        assert_eq!(prefs.click_action(Button::Middle, 1), ClickAction::Lower);
        assert_eq!(prefs.click_action(Button::Right, 1), ClickAction::Menu);
    }

    #[test]
    fn values_are_parsed() {
        let prefs = Preferences::from_lookup(lookup_in(map!(
            BUTTON_LAYOUT => "close:menu",
            DOUBLE_CLICK_ACTION => "toggle-shade",
            MIDDLE_CLICK_ACTION => "none",
            RIGHT_CLICK_ACTION => "minimize",
            DRAGGABLE_BORDER_WIDTH => " 6 ",
            DOUBLE_CLICK_TIME => "250",
        )));

        assert_eq!(
            prefs.button_layout,
            ButtonLayout::new(&[ButtonFunction::Close], &[ButtonFunction::Menu])
        );
        assert_eq!(prefs.double_click_action, ClickAction::ToggleShade);
        assert_eq!(prefs.middle_click_action, ClickAction::None);
        assert_eq!(prefs.right_click_action, ClickAction::Minimize);
        assert_eq!(prefs.draggable_border_width, 6);
        assert_eq!(prefs.double_click_time, 250);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let prefs = Preferences::from_lookup(lookup_in(map!(
            BUTTON_LAYOUT => "a:b:c",
            DOUBLE_CLICK_ACTION => "explode",
            DRAGGABLE_BORDER_WIDTH => "-3",
            DOUBLE_CLICK_TIME => "soon",
        )));

        let defaults = Preferences::default();

        assert_eq!(prefs.button_layout, defaults.button_layout);
        assert_eq!(prefs.double_click_action, defaults.double_click_action);
        assert_eq!(prefs.draggable_border_width, 0);
        assert_eq!(prefs.double_click_time, defaults.double_click_time);
    }
}
