//! Color theme.
//!
//! The theme is immutable configuration, widget constructors take it by reference and copy
//! the palette they need. It can be loaded from a TOML document, colors are written as
//! `0xRRGGBB` integers:
//!
//! ```toml
//! version = 1
//!
//! [button]
//! background = 0xE1E1E1
//! pressed_background = 0x3366CC
//! ```
//!
//! Missing tables and fields fall back to the default theme.

use crate::prelude::*;
use crate::ui::canvas::rgb;

use crossterm::style::Color;
use serde::{Deserialize, Deserializer};

/// Current theme version.
pub const THEME_VERSION: u32 = 1;

fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
  D: Deserializer<'de>,
{
  let hex = u32::deserialize(deserializer)?;
  if hex > 0xFFFFFF {
    return Err(serde::de::Error::custom(format!(
      "color {:#X} is out of 0xRRGGBB range",
      hex
    )));
  }
  Ok(rgb(hex))
}

macro_rules! palette {
  ($(#[$meta:meta])* $name:ident { $($field:ident: $default:expr),+ $(,)? }) => {
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
    #[serde(default)]
    $(#[$meta])*
    pub struct $name {
      $(
        #[serde(deserialize_with = "deserialize_color")]
        pub $field: Color,
      )+
    }

    impl Default for $name {
      fn default() -> Self {
        $name {
          $(
            $field: rgb($default),
          )+
        }
      }
    }
  };
}

palette!(
  /// Window colors.
  WindowPalette {
    background: 0xF0F0F0,
    title: 0x2D2D2D,
    close: 0xFF4940,
    minimize: 0xFFB640,
    maximize: 0x00B640,
  }
);

palette!(
  /// Button colors.
  ButtonPalette {
    background: 0xE1E1E1,
    foreground: 0x4B4B4B,
    pressed_background: 0x3366CC,
    pressed_foreground: 0xFFFFFF,
    disabled_background: 0xC3C3C3,
    disabled_foreground: 0x878787,
  }
);

palette!(
  /// Label colors.
  LabelPalette { foreground: 0x2D2D2D }
);

palette!(
  /// Panel colors.
  PanelPalette { background: 0xE1E1E1 }
);

palette!(
  /// Progress bar colors.
  ProgressBarPalette {
    passive: 0xD2D2D2,
    active: 0x3366CC,
    value: 0x2D2D2D,
  }
);

palette!(
  /// Slider colors.
  SliderPalette {
    passive: 0xD2D2D2,
    active: 0x3366CC,
    pipe: 0xFFFFFF,
    value: 0x2D2D2D,
  }
);

palette!(
  /// Switch colors.
  SwitchPalette {
    passive: 0xD2D2D2,
    active: 0x3366CC,
    pipe: 0xFFFFFF,
  }
);

palette!(
  /// Scroll bar colors.
  ScrollBarPalette {
    background: 0xD2D2D2,
    foreground: 0x4B4B4B,
  }
);

palette!(
  /// Combo box colors.
  ComboBoxPalette {
    background: 0xE1E1E1,
    foreground: 0x2D2D2D,
    arrow_background: 0x4B4B4B,
    arrow_foreground: 0xC3C3C3,
  }
);

palette!(
  /// Text box colors.
  TextBoxPalette {
    background: 0xFFFFFF,
    foreground: 0x2D2D2D,
  }
);

palette!(
  /// Code view colors.
  CodeViewPalette {
    background: 0x1E1E1E,
    foreground: 0xE1E1E1,
    gutter_background: 0x2D2D2D,
    gutter_foreground: 0x878787,
    highlight: 0x3C3C3C,
  }
);

palette!(
  /// Tree view colors.
  TreeViewPalette {
    background: 0xFFFFFF,
    directory: 0x3366CC,
    file: 0x2D2D2D,
    arrow: 0x878787,
    selection_background: 0xCCDBFF,
    selection_foreground: 0x2D2D2D,
  }
);

palette!(
  /// Color selector colors.
  ColorSelectorPalette { foreground: 0x2D2D2D }
);

palette!(
  /// Chart colors.
  ChartPalette {
    axis: 0x4B4B4B,
    value: 0x2D2D2D,
    line: 0x3366CC,
  }
);

palette!(
  /// Input colors.
  InputPalette {
    background: 0xE1E1E1,
    foreground: 0x2D2D2D,
    placeholder: 0x878787,
    focused_background: 0xFFFFFF,
    focused_foreground: 0x1E1E1E,
    cursor: 0x3366CC,
  }
);

palette!(
  /// Dropdown and context menu colors.
  MenuPalette {
    background: 0xFFFFFF,
    foreground: 0x2D2D2D,
    pressed_background: 0x3366CC,
    pressed_foreground: 0xFFFFFF,
    disabled: 0xA5A5A5,
    separator: 0xD2D2D2,
  }
);

palette!(
  /// Color palette picker colors.
  PickerPalette {
    background: 0x2D2D2D,
    border: 0xE1E1E1,
  }
);

palette!(
  /// Error dialog colors.
  ErrorDialogPalette {
    background: 0x1E1E1E,
    foreground: 0xE1E1E1,
    sign: 0xFF4940,
    button_background: 0x3366CC,
    button_foreground: 0xFFFFFF,
  }
);

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
/// Versioned color configuration for all widgets.
pub struct Theme {
  pub version: u32,

  /// Transparency of menus, `None` means menus are opaque.
  pub menu_transparency: Option<f32>,

  pub window: WindowPalette,
  pub button: ButtonPalette,
  pub label: LabelPalette,
  pub panel: PanelPalette,
  pub progress_bar: ProgressBarPalette,
  pub slider: SliderPalette,
  pub switch: SwitchPalette,
  pub scroll_bar: ScrollBarPalette,
  pub combo_box: ComboBoxPalette,
  pub text_box: TextBoxPalette,
  pub code_view: CodeViewPalette,
  pub tree_view: TreeViewPalette,
  pub color_selector: ColorSelectorPalette,
  pub chart: ChartPalette,
  pub input: InputPalette,
  pub menu: MenuPalette,
  pub picker: PickerPalette,
  pub error_dialog: ErrorDialogPalette,
}

impl Default for Theme {
  fn default() -> Self {
    Theme {
      version: THEME_VERSION,
      menu_transparency: None,
      window: WindowPalette::default(),
      button: ButtonPalette::default(),
      label: LabelPalette::default(),
      panel: PanelPalette::default(),
      progress_bar: ProgressBarPalette::default(),
      slider: SliderPalette::default(),
      switch: SwitchPalette::default(),
      scroll_bar: ScrollBarPalette::default(),
      combo_box: ComboBoxPalette::default(),
      text_box: TextBoxPalette::default(),
      code_view: CodeViewPalette::default(),
      tree_view: TreeViewPalette::default(),
      color_selector: ColorSelectorPalette::default(),
      chart: ChartPalette::default(),
      input: InputPalette::default(),
      menu: MenuPalette::default(),
      picker: PickerPalette::default(),
      error_dialog: ErrorDialogPalette::default(),
    }
  }
}

impl Theme {
  /// Load theme from a TOML document.
  pub fn from_toml_str(payload: &str) -> UiResult<Theme> {
    let theme: Theme = toml::from_str(payload)?;
    debug!("loaded theme version:{:?}", theme.version);
    Ok(theme)
  }
}
