//! Style synthesis: derived colors, the terminal color scheme, and the CSS
//! block the host appends to its stylesheet.

use std::fmt::Write;

use serde::Serialize;

use crate::assets::AssetPaths;
use crate::constants::{INACTIVE_TAB_DARKEN, SELECTION_ALPHA, TAB_TEXT_DARK, TAB_TEXT_LIGHT};
use crate::options::Options;
use crate::selector::ResolvedTheme;

/// Colors computed from the palette and options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivedColors {
    /// Chrome background: `unibody` in unibody mode, else `primary`.
    pub background: String,
    /// `primary` at 30% opacity.
    pub selection: String,
    /// `secondary` fully transparent.
    pub transparent: String,
    /// Active tab fill, picked for contrast against `secondary`.
    pub active_tab: String,
    /// `active_tab` with lightness reduced by 10%.
    pub inactive_tab: String,
    /// Tab icon path, empty unless poketab is on.
    pub tab_icon: String,
}

/// 16-slot ANSI table: `black`, `green` and `lightBlack` take `tertiary`, the rest `secondary`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnsiColors {
    pub black: String,
    pub red: String,
    pub green: String,
    pub yellow: String,
    pub blue: String,
    pub magenta: String,
    pub cyan: String,
    pub white: String,
    pub light_black: String,
    pub light_red: String,
    pub light_green: String,
    pub light_yellow: String,
    pub light_blue: String,
    pub light_magenta: String,
    pub light_cyan: String,
    pub light_white: String,
}

/// Terminal color scheme merged into the host configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalColors {
    pub background_color: String,
    pub border_color: String,
    pub cursor_color: String,
    pub foreground_color: String,
    pub selection_color: String,
    pub colors: AnsiColors,
}

/// Everything the synthesizer hands back for one decoration pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleOutput {
    pub derived: DerivedColors,
    pub colors: TerminalColors,
    pub css: String,
}

pub fn derive_colors(
    options: &Options,
    resolved: &ResolvedTheme,
    assets: &AssetPaths,
) -> DerivedColors {
    let palette = &resolved.palette;
    let background = if options.unibody {
        palette.unibody
    } else {
        palette.primary
    };
    let active_tab = if palette.secondary.is_dark() {
        TAB_TEXT_LIGHT
    } else {
        TAB_TEXT_DARK
    };

    DerivedColors {
        background: background.to_string(),
        selection: palette.primary.with_alpha(SELECTION_ALPHA),
        transparent: palette.secondary.with_alpha(0.0),
        active_tab: active_tab.to_string(),
        inactive_tab: active_tab.darken(INACTIVE_TAB_DARKEN),
        tab_icon: if options.poketab {
            assets.gif.clone()
        } else {
            String::new()
        },
    }
}

pub fn synthesize(
    options: &Options,
    resolved: &ResolvedTheme,
    assets: &AssetPaths,
) -> StyleOutput {
    let derived = derive_colors(options, resolved, assets);
    let secondary = resolved.palette.secondary.to_string();
    let tertiary = resolved.palette.tertiary.to_string();

    let colors = TerminalColors {
        background_color: derived.transparent.clone(),
        border_color: derived.background.clone(),
        cursor_color: secondary.clone(),
        foreground_color: secondary.clone(),
        selection_color: derived.selection.clone(),
        colors: AnsiColors {
            black: tertiary.clone(),
            red: secondary.clone(),
            green: tertiary.clone(),
            yellow: secondary.clone(),
            blue: secondary.clone(),
            magenta: secondary.clone(),
            cyan: secondary.clone(),
            white: secondary.clone(),
            light_black: tertiary,
            light_red: secondary.clone(),
            light_green: secondary.clone(),
            light_yellow: secondary.clone(),
            light_blue: secondary.clone(),
            light_magenta: secondary.clone(),
            light_cyan: secondary.clone(),
            light_white: secondary.clone(),
        },
    };

    let css = stylesheet(&derived, &secondary, &assets.image);
    StyleOutput {
        derived,
        colors,
        css,
    }
}

/// Fixed selector template. The tab icon rule is only emitted when there is an icon.
fn stylesheet(d: &DerivedColors, secondary: &str, image: &str) -> String {
    let background = &d.background;
    let mut css = String::with_capacity(2048);

    write!(
        css,
        r#"
.terms_terms {{
  background: url("file://{image}") center;
  background-size: cover;
}}
.header_header, .header_windowHeader {{
  background-color: {background} !important;
}}
"#
    )
    .ok();

    if !d.tab_icon.is_empty() {
        write!(
            css,
            r#".tab_textActive .tab_textInner::before {{
  content: url("file://{icon}");
  position: absolute;
  right: 0;
  top: -4px;
}}
"#,
            icon = d.tab_icon
        )
        .ok();
    }

    write!(
        css,
        r#".tabs_nav .tabs_list {{
  border-bottom: 0;
  color: {background};
}}
.tabs_nav .tabs_title,
.tabs_nav .tabs_list .tab_tab {{
  color: {secondary};
  border: 0;
}}
.tab_icon {{
  color: {background};
  width: 15px;
  height: 15px;
}}
.tab_icon:hover {{
  background-color: {background};
}}
.tab_shape {{
  color: {secondary};
  width: 7px;
  height: 7px;
}}
.tab_shape:hover {{
  color: {secondary};
}}
.tab_active {{
  background-color: {active};
}}
.tabs_nav .tabs_list .tab_tab:not(.tab_active) {{
  background-color: {inactive};
}}
.tab_tab::before {{
  content: '';
  position: absolute;
  bottom: 0;
  left: 0;
  right: 0;
  height: 4px;
  background-color: {secondary};
  transform: scaleX(0);
  transition: none;
}}
.tab_tab.tab_active::before {{
  transform: scaleX(1);
  transition: all 400ms cubic-bezier(0.0, 0.0, 0.2, 1);
}}
.terms_terms .terms_termGroup .splitpane_panes .splitpane_divider {{
  background-color: {secondary} !important;
}}
"#,
        active = d.active_tab,
        inactive = d.inactive_tab,
    )
    .ok();

    css
}
