use crate::window::FrameFlags;
use crate::Result;

use std::convert::TryFrom;
use std::str::FromStr;

use anyhow::anyhow;
use strum::EnumIter;
use strum_macros::EnumString;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter, EnumString)]
pub enum ButtonFunction {
    #[strum(serialize = "menu")]
    Menu,
    #[strum(serialize = "minimize")]
    Minimize,
    #[strum(serialize = "maximize")]
    Maximize,
    #[strum(serialize = "close")]
    Close,
    #[strum(serialize = "shade")]
    Shade,
    #[strum(serialize = "above")]
    Above,
    #[strum(serialize = "stick")]
    Stick,
    #[strum(serialize = "unshade")]
    Unshade,
    #[strum(serialize = "unabove")]
    Unabove,
    #[strum(serialize = "unstick")]
    Unstick,
}

impl ButtonFunction {
    /// Whether the window's permissions let this button show. Functions
    /// without a matching permission are always shown.
    pub fn is_allowed(
        &self,
        flags: FrameFlags,
    ) -> bool {
        match self {
            ButtonFunction::Close => flags.contains(FrameFlags::ALLOWS_DELETE),
            ButtonFunction::Minimize => flags.contains(FrameFlags::ALLOWS_MINIMIZE),
            ButtonFunction::Maximize => flags.contains(FrameFlags::ALLOWS_MAXIMIZE),
            ButtonFunction::Menu => flags.contains(FrameFlags::ALLOWS_MENU),
            ButtonFunction::Shade => flags.contains(FrameFlags::ALLOWS_SHADE),
            ButtonFunction::Above
            | ButtonFunction::Stick
            | ButtonFunction::Unshade
            | ButtonFunction::Unabove
            | ButtonFunction::Unstick => true,
        }
    }
}

pub type ButtonGroup = [Option<ButtonFunction>; ButtonLayout::MAX_BUTTONS_PER_CORNER];

/// Button functions per title bar corner. A group ends at its first empty
/// slot; anything after it is never shown.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ButtonLayout {
    pub left: ButtonGroup,
    pub right: ButtonGroup,
}

impl ButtonLayout {
    pub const MAX_BUTTONS_PER_CORNER: usize = 11;

    pub const EMPTY: Self = Self {
        left: [None; Self::MAX_BUTTONS_PER_CORNER],
        right: [None; Self::MAX_BUTTONS_PER_CORNER],
    };

    pub fn new(
        left: &[ButtonFunction],
        right: &[ButtonFunction],
    ) -> Self {
        let mut layout = Self::EMPTY;

        Self::fill(&mut layout.left, left.iter().copied());
        Self::fill(&mut layout.right, right.iter().copied());

        layout
    }

    fn fill(
        group: &mut ButtonGroup,
        functions: impl Iterator<Item = ButtonFunction>,
    ) {
        for (slot, function) in group.iter_mut().zip(functions) {
            *slot = Some(function);
        }
    }

    fn allowed(
        group: &ButtonGroup,
        flags: FrameFlags,
    ) -> Vec<ButtonFunction> {
        group
            .iter()
            .map_while(|&function| function)
            .filter(|function| function.is_allowed(flags))
            .collect()
    }

    /// The buttons to show, left group in left-to-right order and right group
    /// in the order it was configured.
    pub fn resolve(
        &self,
        flags: FrameFlags,
    ) -> (Vec<ButtonFunction>, Vec<ButtonFunction>) {
        (
            Self::allowed(&self.left, flags),
            Self::allowed(&self.right, flags),
        )
    }

    fn parse_group(
        group: &str,
        used: &mut Vec<ButtonFunction>,
    ) -> Result<Vec<ButtonFunction>> {
        let mut functions = Vec::new();

        for name in group.split(',').map(str::trim).filter(|name| !name.is_empty()) {
            match ButtonFunction::from_str(name) {
                Ok(function) if used.contains(&function) => {
                    debug!("ignoring duplicate button \"{}\" in layout", name);
                },
                Ok(function) => {
                    if functions.len() == Self::MAX_BUTTONS_PER_CORNER {
                        return Err(anyhow!(
                            "more than {} buttons in one corner",
                            Self::MAX_BUTTONS_PER_CORNER
                        ));
                    }

                    used.push(function);
                    functions.push(function);
                },
                Err(_) => {
                    warn!("ignoring unknown button \"{}\" in layout", name);
                },
            }
        }

        Ok(functions)
    }
}

impl Default for ButtonLayout {
    fn default() -> Self {
        Self::new(&[ButtonFunction::Menu], &[
            ButtonFunction::Minimize,
            ButtonFunction::Maximize,
            ButtonFunction::Close,
        ])
    }
}

impl TryFrom<&str> for ButtonLayout {
    type Error = anyhow::Error;

    /// Parses `"menu:minimize,maximize,close"`; names before the colon go to
    /// the left corner, names after it to the right corner.
    fn try_from(val: &str) -> Result<Self> {
        let mut parts = val.split(':');
        let left = parts.next().unwrap_or("");
        let right = parts.next().unwrap_or("");

        if parts.next().is_some() {
            return Err(anyhow!("unable to parse button layout \"{}\"", val));
        }

        let mut used = Vec::new();
        let left = Self::parse_group(left, &mut used)?;
        let right = Self::parse_group(right, &mut used)?;

        Ok(Self::new(&left, &right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use strum::IntoEnumIterator;

    fn all_allowed() -> FrameFlags {
        FrameFlags::ALLOWS_DELETE
            | FrameFlags::ALLOWS_MINIMIZE
            | FrameFlags::ALLOWS_MAXIMIZE
            | FrameFlags::ALLOWS_MENU
            | FrameFlags::ALLOWS_SHADE
    }

    #[test]
    fn close_is_dropped_without_delete_permission_in_any_position() {
        let flags = all_allowed() - FrameFlags::ALLOWS_DELETE;

        for index in 0..3 {
            let mut right = vec![ButtonFunction::Minimize, ButtonFunction::Maximize];
            right.insert(index, ButtonFunction::Close);

            let layout = ButtonLayout::new(&[ButtonFunction::Close, ButtonFunction::Menu], &right);
            let (left, right) = layout.resolve(flags);

            assert_eq!(left, vec![ButtonFunction::Menu]);
            assert_eq!(right, vec![ButtonFunction::Minimize, ButtonFunction::Maximize]);
        }
    }

    #[test]
    fn groups_keep_their_configured_order() {
        let layout = ButtonLayout::new(
            &[ButtonFunction::Close, ButtonFunction::Menu],
            &[ButtonFunction::Maximize, ButtonFunction::Minimize],
        );

        let (left, right) = layout.resolve(all_allowed());

        assert_eq!(left, vec![ButtonFunction::Close, ButtonFunction::Menu]);
        assert_eq!(right, vec![ButtonFunction::Maximize, ButtonFunction::Minimize]);
    }

    #[test]
    fn entries_after_an_empty_slot_are_ignored() {
        let mut layout = ButtonLayout::new(&[ButtonFunction::Menu], &[]);
        layout.left[2] = Some(ButtonFunction::Close);
        layout.right[1] = Some(ButtonFunction::Close);

        let (left, right) = layout.resolve(all_allowed());

        assert_eq!(left, vec![ButtonFunction::Menu]);
        assert!(right.is_empty());
    }

    #[test]
    fn only_permission_backed_functions_are_gated() {
        for function in ButtonFunction::iter() {
            let gated = matches!(
                function,
                ButtonFunction::Close
                    | ButtonFunction::Minimize
                    | ButtonFunction::Maximize
                    | ButtonFunction::Menu
                    | ButtonFunction::Shade
            );

            assert_eq!(function.is_allowed(FrameFlags::empty()), !gated, "{:?}", function);
            assert!(function.is_allowed(all_allowed()), "{:?}", function);
        }
    }

    #[test]
    fn window_state_does_not_hide_buttons() {
        let flags = all_allowed() | FrameFlags::SHADED | FrameFlags::ABOVE | FrameFlags::STUCK;

        for function in ButtonFunction::iter() {
            assert!(function.is_allowed(flags), "{:?}", function);
        }

        let layout = ButtonLayout::new(&[ButtonFunction::Shade, ButtonFunction::Unshade], &[
            ButtonFunction::Above,
            ButtonFunction::Unstick,
        ]);

        assert_eq!(
            layout.resolve(FrameFlags::empty()),
            (vec![ButtonFunction::Unshade], vec![
                ButtonFunction::Above,
                ButtonFunction::Unstick
            ])
        );
    }

    #[test]
    fn parses_layout_strings() {
        let layout = ButtonLayout::try_from("menu:minimize,maximize,close").unwrap();
        assert_eq!(layout, ButtonLayout::default());

        let layout = ButtonLayout::try_from("close,minimize, maximize:").unwrap();
        assert_eq!(
            layout.resolve(all_allowed()),
            (
                vec![
                    ButtonFunction::Close,
                    ButtonFunction::Minimize,
                    ButtonFunction::Maximize
                ],
                vec![]
            )
        );

        let layout = ButtonLayout::try_from("spacer,menu:close,close,appmenu").unwrap();
        assert_eq!(
            layout.resolve(all_allowed()),
            (vec![ButtonFunction::Menu], vec![ButtonFunction::Close])
        );

        assert!(ButtonLayout::try_from("menu:close:minimize").is_err());
    }
}
