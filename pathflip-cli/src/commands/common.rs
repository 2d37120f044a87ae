use anyhow::Context;
use pathflip::classify::TagFlags;

/// Parse a code string supporting hex (0x...) and decimal.
pub fn parse_code(s: &str) -> anyhow::Result<u32> {
    let trimmed = s.trim();
    if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        u32::from_str_radix(hex, 16).with_context(|| format!("invalid hex code: {s}"))
    } else {
        trimmed
            .parse::<u32>()
            .with_context(|| format!("invalid code: {s}"))
    }
}

/// Comma separated flag names, `-` when no flag is set.
pub fn flag_names(flags: TagFlags) -> String {
    let names: Vec<&str> = flags.iter_names().map(|(name, _)| name).collect();
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(",").to_lowercase()
    }
}
