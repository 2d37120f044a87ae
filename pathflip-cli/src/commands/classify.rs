use pathflip::{
    classify::{self, EntryKind},
    protocol::{codes, ConstraintKind, TraceEntryTag},
    trace::Opcode,
};
use serde::Serialize;

use crate::{
    app::{GlobalOptions, KindArg},
    commands::common::{flag_names, parse_code},
    output::{field, print_output, yes_no},
};

#[derive(Debug, Serialize)]
struct ClassifyOutput {
    code: u32,
    name: String,
    family: Option<String>,
    reserved: bool,
    kind: u8,
    interpretable: bool,
    reversible: bool,
    candidate: bool,
    flags: String,
}

impl From<KindArg> for EntryKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::True => ConstraintKind::True.into(),
            KindArg::False => ConstraintKind::False.into(),
            KindArg::Event => EntryKind::Event,
        }
    }
}

/// Resolve a tag name first, then fall back to a numeric code.
fn resolve(input: &str) -> anyhow::Result<Opcode> {
    if let Ok(tag) = input.trim().parse::<TraceEntryTag>() {
        return Ok(Opcode::Known(tag));
    }
    Ok(Opcode::from_code(parse_code(input)?))
}

pub fn run(input: &str, kind: KindArg, opts: &GlobalOptions) -> anyhow::Result<()> {
    let opcode = resolve(input)?;
    let kind = EntryKind::from(kind);
    let code = opcode.code();

    if let Opcode::Unknown(code) = opcode {
        log::info!("code {code} is not in the tag catalogue; using the defaults for unknown codes");
    }

    let interpretable = classify::is_interpretable_code(code);
    let reversible = classify::is_reversible_code(kind.code(), code);

    let output = ClassifyOutput {
        code,
        name: opcode.to_string(),
        family: opcode.tag().map(|tag| tag.family().to_string()),
        reserved: codes::is_reserved_code(code),
        kind: kind.code(),
        interpretable,
        reversible,
        candidate: interpretable && reversible,
        flags: flag_names(classify::flags_for_code(code)),
    };

    print_output(&output, opts, |out| {
        field("Tag", format!("{} ({})", out.name, out.code));
        field("Family", out.family.as_deref().unwrap_or("-"));
        if out.reserved {
            field("Reserved", "yes");
        }
        field("Entry kind", out.kind);
        field("Interpretable", yes_no(out.interpretable));
        field("Reversible", yes_no(out.reversible));
        field("Candidate", yes_no(out.candidate));
        field("Flags", &out.flags);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_names_and_codes() {
        assert_eq!(
            resolve("erlang:hd/1").unwrap(),
            Opcode::Known(TraceEntryTag::ErlangHd1)
        );
        assert_eq!(
            resolve("msg_send").unwrap(),
            Opcode::Known(TraceEntryTag::MsgSend)
        );
        assert_eq!(
            resolve("0x1a").unwrap(),
            Opcode::Known(TraceEntryTag::ErlangTl1)
        );
        assert_eq!(resolve("22").unwrap(), Opcode::Unknown(22));
        assert!(resolve("erlang:length/1").is_err());
    }

    #[test]
    fn kinds() {
        assert!(EntryKind::from(KindArg::True).is_constraint());
        assert_eq!(EntryKind::from(KindArg::False).code(), 2);
        assert_eq!(EntryKind::from(KindArg::Event), EntryKind::Event);
    }
}
