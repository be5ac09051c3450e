/// Keybinding rows for the help popup. An empty key marks a section header.
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("", "ASKING"),
    ("Enter", "Ask the travel agent"),
    ("Esc", "Clear the question"),
    ("", ""),
    ("", "POPULAR QUESTIONS"),
    ("Alt+1..4", "Fill in a popular question"),
    ("Alt+Arrows", "Move between question cards"),
    ("Alt+Enter", "Fill in the highlighted card"),
    ("", ""),
    ("", "ANSWER"),
    ("PgUp/PgDn", "Scroll half a page"),
    ("Ctrl+Home/End", "Jump to top/bottom"),
    ("", ""),
    ("", "GENERAL"),
    ("F1", "Toggle this help"),
    ("Ctrl+C/Ctrl+Q", "Quit"),
];

pub const HELP_FOOTER: &str = "Press F1, q or Esc to close";
