//! Progress Bar Component
//!
//! Sunken stone trough with a coloured fill, like the XP bar.

use dioxus::prelude::*;

use crate::theme::classes;

/// Fill colours
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BarColor {
    Red,
    #[default]
    Green,
    Blue,
    Orange,
    Purple,
}

impl BarColor {
    pub fn class(&self) -> &'static str {
        match self {
            BarColor::Red => "mc-progress__fill--red",
            BarColor::Green => "mc-progress__fill--green",
            BarColor::Blue => "mc-progress__fill--blue",
            BarColor::Orange => "mc-progress__fill--orange",
            BarColor::Purple => "mc-progress__fill--purple",
        }
    }
}

/// Clamp a percentage into 0..=100
pub fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ProgressBarProps {
    /// Percentage, clamped to 0..=100
    pub value: f32,
    #[props(default)]
    pub color: BarColor,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn ProgressBar(props: ProgressBarProps) -> Element {
    let width = clamp_percent(props.value);
    let full_class = classes("mc-progress", props.class.as_deref());

    rsx! {
        div {
            class: "{full_class}",
            role: "progressbar",
            "aria-valuenow": "{width}",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            div {
                class: "mc-progress__fill {props.color.class()}",
                style: "width: {width}%;",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(clamp_percent(-5.0), 0.0);
        assert_eq!(clamp_percent(42.5), 42.5);
        assert_eq!(clamp_percent(180.0), 100.0);
        assert_eq!(clamp_percent(f32::NAN), 0.0);
    }
}
