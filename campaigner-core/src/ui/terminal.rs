//! Terminal utilities and helpers

use is_terminal::IsTerminal;

/// Check if output is being piped (not a terminal)
pub fn is_piped_output() -> bool {
    !std::io::stdout().is_terminal()
}

/// Check if input is being piped (not a terminal)
pub fn is_piped_input() -> bool {
    !std::io::stdin().is_terminal()
}

/// Both ends are attached to a terminal, so prompting the user is possible
pub fn is_interactive() -> bool {
    !is_piped_input() && std::io::stderr().is_terminal()
}
