//! Floating mascot demo.
//!
//! Opens the 120x120 widget window. Space toggles the dancing profile
//! (stand-in for the host's audio-playing signal), `T` toggles the theme,
//! clicking the robot logs the forwarded click.

use mascot3d::{MascotApp, MascotSettings};

fn main() -> mascot3d::Result<()> {
    env_logger::init();
    MascotApp::new(MascotSettings::default()).run()
}
