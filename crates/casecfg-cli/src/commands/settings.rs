use crate::support::load_settings_or_exit;
use casecfg_settings::{WriteStyle, write_settings};
use std::path::PathBuf;

pub fn run(settings: PathBuf, full: bool) {
    let cs = load_settings_or_exit(&settings);
    let style = if full {
        WriteStyle::Full
    } else {
        WriteStyle::Short
    };
    print!("{}", write_settings(&cs, style));
}
