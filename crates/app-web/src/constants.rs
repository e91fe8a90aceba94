// Page content configuration

// Anniversary start instant. The fallback is the same instant expressed as
// epoch milliseconds, used when the browser cannot parse the ISO string.
pub const START_ISO: &str = "2024-06-21T19:30:00+02:00";
pub const FALLBACK_START_MS: f64 = 1_718_991_000_000.0;

// Rotating nickname label set
pub const NICKNAMES: [&str; 3] = ["sunshine", "darling", "mon coeur"];

// Shown when the page carries no typewriter lines
pub const TYPEWRITER_FALLBACK_LINE: &str =
    "The evening is gentle today, just right for saying: happy anniversary.";
