//! Static narrative text and flavour lookups.

pub const TITLE: &str = "Temporal Paradox";

pub const BANNER: &str = r#"
 _______  _______  __   __  _______  _______  ______    _______  ___
|       ||       ||  |_|  ||       ||       ||    _ |  |   _   ||   |
|_     _||    ___||       ||    _  ||   _   ||   | ||  |  |_|  ||   |
  |   |  |   |___ |       ||   |_| ||  | |  ||   |_||_ |       ||   |
  |   |  |    ___||       ||    ___||  |_|  ||    __  ||       ||   |___
  |   |  |   |___ | ||_|| ||   |    |       ||   |  | ||   _   ||       |
  |___|  |_______||_|   |_||___|    |_______||___|  |_||__| |__||_______|
        _______  _______  ______    _______  ______   _______  __   __
        |       ||   _   ||    _ |  |   _   ||      | |       ||  |_|  |
        |    _  ||  |_|  ||   | ||  |  |_|  ||  _    ||   _   ||       |
        |   |_| ||       ||   |_||_ |       || | |   ||  | |  ||       |
        |    ___||       ||    __  ||       || |_|   ||  |_|  | |     |
        |   |    |   _   ||   |  | ||   _   ||       ||       ||   _   |
        |___|    |__| |__||___|  |_||__| |__||______| |_______||__| |__|
"#;

pub const STORY: &str = "\
You are Dr. TTN, a brilliant quantum physicist who was working on a
revolutionary time manipulation device called the Chronosphere in a private
laboratory. During a crucial experiment, something went terribly wrong,
causing a temporal explosion that trapped you in a 60-minute time loop within
your Victorian-era mansion-turned-laboratory. Each loop resets at midnight,
but anything in your special \"quantum-locked\" inventory remains with you
across loops.";

pub const WELCOME: &str = "\
Welcome to Temporal Paradox!
You find yourself in a corridor just outside the Main Laboratory...";

pub const HELP: &str = "\
================ GAME COMMANDS ================
- move <direction> : Move in specified direction (north, south, east, west)
- look             : Look around your current room
- look <feature>   : Look at a specific feature in the room
- collect <item>   : Pick up an item from the current room
- look <item>      : Look at a specific item in your inventory
- inventory        : Display your inventory
- hint             : Get a hint about your current objective
- score            : Display your current score
- map              : Display the game map
- help             : Display this help message
- quit             : Exit the game
===============================================";

pub const QUIT_PROMPT: &str = "Are you sure you want to quit? (yes/no)";

pub const VICTORY: &str = "\
=====================================================
CONGRATULATIONS! You've solved all temporal puzzles!
-----------------------------------------------------
With all four temporal artifacts in your possession:
- The repaired keycard
- The power module
- The temporal essence
- The time shard

You combine their energies with the Chronosphere...

There's a brilliant flash of light, and you feel the
time loop finally breaking! Dr. TTN is free at last!
-----------------------------------------------------";

const FEATURE_DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "chronosphere",
        "The Chronosphere is a complex device with swirling temporal energies. It appears damaged.",
    ),
    (
        "broken_keycard",
        "A damaged keycard that might be repairable with the right code.",
    ),
    (
        "research_manual",
        "Notes mentioning experiments beginning in '4321'... that's odd.",
    ),
    (
        "circuits",
        "A complex circuit board with missing connections. Letters P_W_R are visible.",
    ),
    (
        "recipe_book",
        "A mysterious recipe book. One page talks about a temporal herb.",
    ),
    (
        "sundial",
        "An unusual sundial that seems to be stuck. It feels important to the time loop.",
    ),
    (
        "power_core",
        "A sophisticated power source. It needs proper circuit connectivity.",
    ),
    (
        "strange_flower",
        "A flower that seems to age and rejuvenate repeatedly.",
    ),
    (
        "quantum_equations",
        "Complex equations about temporal mechanics. Some numbers stand out.",
    ),
    (
        "crystal_vial",
        "A vial that seems to manipulate time around it.",
    ),
    (
        "temporal_anomaly",
        "The air shimmers here. A leaf falls, rises, and falls again.",
    ),
    (
        "old_diary",
        "The last entry reads: 'Midnight. Always midnight.'",
    ),
];

/// Description of a room feature; unknown features get a generic line.
pub fn feature_description(feature: &str) -> String {
    FEATURE_DESCRIPTIONS
        .iter()
        .find(|(name, _)| *name == feature)
        .map(|(_, description)| (*description).to_string())
        .unwrap_or_else(|| format!("A rather ordinary {feature}."))
}

pub fn item_description(item: &str) -> String {
    format!("A {item} - no special description available.")
}
