//! # CyberBot Startup Screens
//!
//! File: cli/src/common/ui/banner.rs
//! Author: Christi Mahu
//!
//! Static startup text: the ASCII logo, the greeting box, the personalized
//! welcome panel (rendered with Tera) and the usage hints.
//!
use crate::core::error::Result;
use crate::core::templating;
use std::collections::HashMap;

/// ASCII art logo shown at startup.
pub const LOGO: &str = r"
  ______   ______  _____ ____  ____  _____ ____ _   _ ____  ___ _______   __
 / ___\ \ / / __ )| ____|  _ \/ ___|| ____/ ___| | | |  _ \|_ _|_   _\ \ / /
| |    \ V /|  _ \|  _| | |_) \___ \|  _|| |   | | | | |_) || |  | |  \ V /
| |___  | | | |_) | |___|  _ < ___) | |__| |___| |_| |  _ < | |  | |   | |
 \____| |_| |____/|_____|_| \_\____/|_____\____|\___/|_| \_\___| |_|_ _|_|_
   / \ \      / / \  |  _ \| ____| \ | | ____/ ___/ ___|  | __ ) / _ \_   _|
  / _ \ \ /\ / / _ \ | |_) |  _| |  \| |  _| \___ \___ \  |  _ \| | | || |
 / ___ \ V  V / ___ \|  _ <| |___| |\  | |___ ___) |__) | | |_) | |_| || |
/_/   \_\_/\_/_/   \_\_| \_\_____|_| \_|_____|____/____/  |____/ \___/ |_|
";

/// Box shown before the name prompt.
pub const GREETING_BOX: &str = "\
╔══════════════════════════════════════════╗
║      Welcome to the Cybersecurity        ║
║           Awareness Bot!                 ║
╚══════════════════════════════════════════╝
";

const WELCOME_PANEL_TEMPLATE: &str = "\
╔══════════════════════════════════════════╗
║  Welcome, {{ user_name_padded }} ║
║  I'm here to help you with cybersecurity ║
║  questions and concerns.                 ║
╚══════════════════════════════════════════╝
";

/// Width the user name is padded to inside the welcome panel.
const NAME_FIELD_WIDTH: usize = 30;

/// Lines printed after the welcome panel.
pub const USAGE_HINTS: &str = "\n\
You can ask me about password safety, phishing, scams, and privacy!\n\
Ask \"what did we discuss?\" to recap the topics so far.\n\
Type 'exit' at any time to quit.\n\n";

/// Renders the welcome panel for `user_name`.
///
/// Names shorter than the field are padded so the right border lines up;
/// longer names push the border out rather than being cut.
pub fn welcome_panel(user_name: &str) -> Result<String> {
    let mut context = HashMap::new();
    context.insert(
        "user_name_padded".to_string(),
        format!("{:<width$}", user_name, width = NAME_FIELD_WIDTH),
    );
    templating::render_str(WELCOME_PANEL_TEMPLATE, &context)
}
